//! classroom healthcare command

use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::Args;
use dialoguer::Input;
use healthcare::HealthcareApp;

use crate::report;

#[derive(Debug, Default, Args)]
pub struct HealthcareCommand {
    /// Patient whose prescriptions to show (prompted when omitted)
    #[arg(long)]
    pub patient_id: Option<u32>,
}

impl HealthcareCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        report::header("Healthcare System");

        let mut app = HealthcareApp::new();
        app.seed_data(Local::now().date_naive())?;
        app.build_prescription_map();

        println!("Patients:");
        for patient in app.patients() {
            println!("{}", report::patient_line(&patient));
        }

        let patient_id = match self.patient_id {
            Some(id) => id,
            None => match read_patient_id()? {
                Some(id) => id,
                None => {
                    println!("Invalid Patient ID.");
                    return Ok(());
                }
            },
        };

        let prescriptions = app.prescriptions_for(patient_id);
        if prescriptions.is_empty() {
            println!("No prescriptions found for Patient ID {}.", patient_id);
            return Ok(());
        }

        println!("Prescriptions for patient ID {}:", patient_id);
        for prescription in prescriptions {
            println!("{}", report::prescription_line(prescription));
        }

        Ok(())
    }
}

const PROMPT: &str = "Enter Patient ID to view prescriptions";

/// Ask for a patient id; `None` when the answer is not a number.
///
/// Uses an interactive prompt on a terminal and reads one plain line
/// when stdin is piped.
fn read_patient_id() -> anyhow::Result<Option<u32>> {
    if console::user_attended() {
        let answer: String = Input::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()?;
        return Ok(parse_patient_id(&answer));
    }

    println!("{}:", PROMPT);
    io::stdout().flush()?;
    read_patient_id_from(io::stdin().lock())
}

/// Read one line from `reader`; end of input counts as no answer
fn read_patient_id_from(mut reader: impl BufRead) -> anyhow::Result<Option<u32>> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(parse_patient_id(&input))
}

fn parse_patient_id(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_patient_id() {
        assert_eq!(parse_patient_id("2"), Some(2));
        assert_eq!(parse_patient_id("  3\n"), Some(3));
        assert_eq!(parse_patient_id("two"), None);
        assert_eq!(parse_patient_id(""), None);
        assert_eq!(parse_patient_id("-1"), None);
    }

    #[test]
    fn test_read_patient_id_from_piped_input() {
        assert_eq!(read_patient_id_from(Cursor::new("2\n")).unwrap(), Some(2));
        assert_eq!(read_patient_id_from(Cursor::new("abc\n")).unwrap(), None);
        assert_eq!(read_patient_id_from(Cursor::new("\n")).unwrap(), None);
        assert_eq!(read_patient_id_from(Cursor::new("")).unwrap(), None);
    }
}
