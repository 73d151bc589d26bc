//! Student scores and letter grades

use std::fmt;

/// Letter grade for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// 80-100 A, 70-79 B, 60-69 C, 50-59 D, anything else F
    pub fn from_score(score: i32) -> Self {
        match score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    pub fn new(id: u32, full_name: impl Into<String>, score: i32) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// One report line: `Name (ID: 1): Score = 84, Grade = A`
    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
    }

    #[test]
    fn test_out_of_range_scores_fail() {
        assert_eq!(Grade::from_score(101), Grade::F);
        assert_eq!(Grade::from_score(-10), Grade::F);
    }

    #[test]
    fn test_report_line() {
        let student = Student::new(101, "Ama Mensah", 84);
        assert_eq!(
            student.report_line(),
            "Ama Mensah (ID: 101): Score = 84, Grade = A"
        );
    }
}
