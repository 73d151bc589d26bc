//! HealthcareApp - Patients and their prescriptions
//!
//! Both record kinds are kept in keyed repositories. Prescriptions are
//! grouped per patient by `build_prescription_map`.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use inventory::InMemoryRepository;
use shared::{Repository, RepositoryResult};
use tracing::debug;

use crate::model::{Patient, Prescription};

#[derive(Debug, Default)]
pub struct HealthcareApp {
    patients: InMemoryRepository<Patient>,
    prescriptions: InMemoryRepository<Prescription>,
    by_patient: HashMap<u32, Vec<Prescription>>,
}

impl HealthcareApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) -> RepositoryResult<()> {
        self.patients.add(patient)
    }

    pub fn add_prescription(&mut self, prescription: Prescription) -> RepositoryResult<()> {
        self.prescriptions.add(prescription)
    }

    /// Seed sample patients and prescriptions issued relative to `today`
    pub fn seed_data(&mut self, today: NaiveDate) -> RepositoryResult<()> {
        self.add_patient(Patient::new(1, "Kevin Hart", 46, "Male"))?;
        self.add_patient(Patient::new(2, "Sarah Connor", 60, "Female"))?;
        self.add_patient(Patient::new(3, "Kylian Mbappé", 26, "Male"))?;

        for (id, patient_id, medication, days_ago) in [
            (1, 1, "Gentamicin", 10),
            (2, 2, "Trisilicate", 5),
            (3, 2, "Ibuprofen", 2),
            (4, 3, "Paracetamol", 15),
            (5, 3, "Metformin", 7),
        ] {
            self.add_prescription(Prescription::new(
                id,
                patient_id,
                medication,
                today - Duration::days(days_ago),
            ))?;
        }

        Ok(())
    }

    /// Group prescriptions by patient id, replacing any previous grouping
    pub fn build_prescription_map(&mut self) {
        self.by_patient.clear();
        for prescription in self.prescriptions.iter() {
            self.by_patient
                .entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        debug!(patients = self.by_patient.len(), "prescription map built");
    }

    /// Prescriptions for a patient; empty when there are none
    pub fn prescriptions_for(&self, patient_id: u32) -> &[Prescription] {
        self.by_patient
            .get(&patient_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.list_all()
    }

    pub fn patient(&self, id: u32) -> RepositoryResult<&Patient> {
        self.patients.get(id)
    }

    /// First patient matching `predicate`
    pub fn find_patient(&self, predicate: impl Fn(&Patient) -> bool) -> Option<&Patient> {
        self.patients.iter().find(|p| predicate(*p))
    }

    /// Remove every prescription matching `predicate`, returning how many
    /// were removed. Call `build_prescription_map` afterwards to refresh the
    /// grouping.
    pub fn remove_prescriptions_where(
        &mut self,
        predicate: impl Fn(&Prescription) -> bool,
    ) -> RepositoryResult<usize> {
        let ids: Vec<u32> = self
            .prescriptions
            .iter()
            .filter(|p| predicate(*p))
            .map(|p| p.id)
            .collect();

        for id in &ids {
            self.prescriptions.remove(*id)?;
        }
        Ok(ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RepositoryError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    fn seeded() -> HealthcareApp {
        let mut app = HealthcareApp::new();
        app.seed_data(today()).unwrap();
        app.build_prescription_map();
        app
    }

    #[test]
    fn test_prescriptions_grouped_by_patient() {
        let app = seeded();

        let sarah: Vec<&str> = app
            .prescriptions_for(2)
            .iter()
            .map(|p| p.medication.as_str())
            .collect();
        assert_eq!(sarah, vec!["Trisilicate", "Ibuprofen"]);

        assert_eq!(app.prescriptions_for(1).len(), 1);
        assert_eq!(
            app.prescriptions_for(1)[0].date_issued,
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
        );
    }

    #[test]
    fn test_unknown_patient_has_no_prescriptions() {
        let app = seeded();
        assert!(app.prescriptions_for(42).is_empty());
    }

    #[test]
    fn test_map_is_empty_until_built() {
        let mut app = HealthcareApp::new();
        app.seed_data(today()).unwrap();
        assert!(app.prescriptions_for(2).is_empty());

        app.build_prescription_map();
        app.build_prescription_map();
        assert_eq!(app.prescriptions_for(2).len(), 2);
    }

    #[test]
    fn test_duplicate_patient_is_rejected() {
        let mut app = seeded();
        let err = app
            .add_patient(Patient::new(1, "Someone Else", 30, "Female"))
            .unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateKey { id: 1 });
        assert_eq!(app.patient(1).unwrap().name, "Kevin Hart");
    }

    #[test]
    fn test_predicate_lookups() {
        let mut app = seeded();

        let found = app.find_patient(|p| p.age > 50).unwrap();
        assert_eq!(found.name, "Sarah Connor");
        assert!(app.find_patient(|p| p.age > 90).is_none());

        let removed = app.remove_prescriptions_where(|p| p.patient_id == 3).unwrap();
        assert_eq!(removed, 2);
        app.build_prescription_map();
        assert!(app.prescriptions_for(3).is_empty());
    }
}
