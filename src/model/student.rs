use std::fmt;

/// A single roster entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    pub name: String,
}

impl Student {
    /// Creates a student with the given name. No validation is performed.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Renders as `Student(name=<name>)`, the form used in list renderings.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student(name={})", self.name)
    }
}
