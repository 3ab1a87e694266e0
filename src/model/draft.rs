use std::mem;

use tracing::debug;

use super::student::Student;
use super::validation::validate_name;

/// The single in-progress record edited by the home screen.
///
/// Validation happens when the draft is read (`is_valid`, `commit`), never
/// when it is written, so any text can be typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    student: Student,
}

impl Draft {
    /// Creates a draft with an empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current draft name.
    pub fn name(&self) -> &str {
        &self.student.name
    }

    /// Replaces the draft name. Always succeeds; the last write wins.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.student.name = name.into();
    }

    /// Appends a character to the draft name.
    pub fn push_char(&mut self, ch: char) {
        self.student.name.push(ch);
    }

    /// Removes the last character of the draft name, if any.
    pub fn pop_char(&mut self) {
        self.student.name.pop();
    }

    /// Returns `true` if the draft can be committed.
    pub fn is_valid(&self) -> bool {
        validate_name(&self.student.name).is_ok()
    }

    /// Takes the draft out for appending and resets it to an empty name.
    ///
    /// Returns `None` and leaves the draft untouched if it is blank. The
    /// returned record is owned by the caller; the draft keeps no reference
    /// to it.
    pub fn commit(&mut self) -> Option<Student> {
        if let Err(e) = validate_name(&self.student.name) {
            debug!(error = %e, "draft commit ignored");
            return None;
        }
        Some(mem::take(&mut self.student))
    }
}
