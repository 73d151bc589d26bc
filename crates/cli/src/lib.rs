//! # Classroom CLI
//!
//! Subcommands that run each classroom exercise.

pub mod commands;
pub mod logging;
pub mod report;
