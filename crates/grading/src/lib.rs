//! # Classroom Grading
//!
//! Reads `id,name,score` records, classifies scores into letter grades
//! and writes a text report.

pub mod processor;
pub mod student;

pub use processor::{parse_students, read_students, write_report, GradingError};
pub use student::{Grade, Student};
