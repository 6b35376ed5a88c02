use std::fmt;

/// Index of a firm in the deduplicated firm list of an [`Assignments`](super::Assignments).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FirmId(pub usize);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Firm {
    pub name: String,
    pub quota: u32,
}

impl Firm {
    pub fn new(name: impl Into<String>, quota: u32) -> Self {
        Self {
            name: name.into(),
            quota,
        }
    }
}

impl fmt::Display for Firm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.quota)
    }
}
