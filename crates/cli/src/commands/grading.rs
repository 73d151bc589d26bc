//! classroom grading command

use std::path::PathBuf;

use clap::Args;
use shared::ClassroomConfig;
use tracing::warn;

use crate::report;

#[derive(Debug, Default, Args)]
pub struct GradingCommand {
    /// Student scores CSV (`id,name,score` per line)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the grade report
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl GradingCommand {
    pub fn run(&self, config: &ClassroomConfig) -> anyhow::Result<()> {
        report::header("School Grading System");

        let input = self
            .input
            .clone()
            .unwrap_or_else(|| config.grading_input_path());
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.grading_report_path());

        let students = match grading::read_students(&input) {
            Ok(students) => students,
            Err(err) => {
                warn!(error = %err, "could not read students");
                println!("Error: {}", err);
                return Ok(());
            }
        };

        for student in &students {
            println!("{}", report::student_line(student));
        }

        match grading::write_report(&students, &output) {
            Ok(()) => println!("Report written to {}", output.display()),
            Err(err) => {
                warn!(error = %err, "could not write report");
                println!("Error: {}", err);
            }
        }

        Ok(())
    }
}
