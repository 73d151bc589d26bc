//! Healthcare records

use chrono::NaiveDate;
use shared::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl Entity for Patient {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub id: u32,
    pub patient_id: u32,
    pub medication: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(id: u32, patient_id: u32, medication: impl Into<String>, date_issued: NaiveDate) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            date_issued,
        }
    }
}

impl Entity for Prescription {
    fn id(&self) -> u32 {
        self.id
    }
}
