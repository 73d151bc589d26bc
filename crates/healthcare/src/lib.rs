//! # Classroom Healthcare
//!
//! Patient and prescription lookup on top of keyed repositories.

pub mod app;
pub mod model;

pub use app::HealthcareApp;
pub use model::{Patient, Prescription};
