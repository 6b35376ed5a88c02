use super::StudentId;
use std::fmt;

/// Label used for students who could not be placed anywhere.
pub const NOT_ASSIGNED: &str = "Not Assigned";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub student: StudentId,
    pub student_name: String,
    pub firm: Option<String>,
    /// Zero-based index of the preference that was granted.
    pub rank: Option<usize>,
}

impl Placement {
    pub fn assigned_firm(&self) -> &str {
        self.firm.as_deref().unwrap_or(NOT_ASSIGNED)
    }

    pub fn is_assigned(&self) -> bool {
        self.firm.is_some()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.student_name, self.assigned_firm())
    }
}

#[test]
fn test_display() {
    let mut p = Placement {
        student: StudentId(0),
        student_name: "Ana".into(),
        firm: Some("Acme".into()),
        rank: Some(1),
    };
    assert_eq!(p.to_string(), "Ana → Acme");
    p.firm = None;
    assert_eq!(p.to_string(), "Ana → Not Assigned");
    assert!(!p.is_assigned());
}
