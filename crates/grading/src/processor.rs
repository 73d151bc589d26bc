//! StudentResultProcessor - CSV scores in, grade report out
//!
//! Input lines are `id,full name,score`. Blank lines are skipped but
//! still count towards line numbers in errors.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::student::Student;

#[derive(Debug, Error)]
pub enum GradingError {
    #[error("Line {line}: Expected 3 fields, got {found}.")]
    MissingField { line: usize, found: usize },

    #[error("Line {line}: Invalid ID format.")]
    InvalidId { line: usize },

    #[error("Line {line}: Score is not a valid integer.")]
    InvalidScore { line: usize },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse student records from any line reader
pub fn parse_students(reader: impl BufRead) -> Result<Vec<Student>, GradingError> {
    let mut students = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| GradingError::Io {
            path: PathBuf::from("<input>"),
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            return Err(GradingError::MissingField {
                line: line_number,
                found: parts.len(),
            });
        }

        let id = parts[0]
            .trim()
            .parse::<u32>()
            .map_err(|_| GradingError::InvalidId { line: line_number })?;
        let full_name = parts[1].trim();
        let score = parts[2]
            .trim()
            .parse::<i32>()
            .map_err(|_| GradingError::InvalidScore { line: line_number })?;

        students.push(Student::new(id, full_name, score));
    }

    Ok(students)
}

/// Read student records from a CSV file
pub fn read_students(path: &Path) -> Result<Vec<Student>, GradingError> {
    let file = File::open(path).map_err(|source| GradingError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let students = parse_students(BufReader::new(file)).map_err(|err| match err {
        GradingError::Io { source, .. } => GradingError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!(path = %path.display(), count = students.len(), "students read");
    Ok(students)
}

/// Write one report line per student, replacing any existing file
pub fn write_report(students: &[Student], path: &Path) -> Result<(), GradingError> {
    let io_err = |source| GradingError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for student in students {
        writeln!(writer, "{}", student.report_line()).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), count = students.len(), "report written");
    Ok(())
}
