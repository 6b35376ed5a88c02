use std::fmt;

/// Position of a student in the sequence given to the allocator.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub name: String,
    pub score: f64,
    /// Firm names, most wanted first. Empty entries never match.
    pub preferences: Vec<String>,
}

impl Student {
    pub fn new(name: impl Into<String>, score: f64, preferences: Vec<String>) -> Self {
        Self {
            name: name.into(),
            score,
            preferences,
        }
    }

    pub fn rank_of(&self, firm: &str) -> Option<usize> {
        if firm.is_empty() {
            return None;
        }
        self.preferences.iter().position(|p| p == firm)
    }

    /// A student without any usable preference can never be placed.
    pub fn is_lazy(&self) -> bool {
        self.preferences.iter().all(String::is_empty)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}
