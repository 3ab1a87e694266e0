use std::ops::Deref;
use std::rc::Rc;

use tracing::debug;

use super::student::Student;

/// Names the home screen starts with.
pub const SEED_NAMES: [&str; 3] = ["Tanu", "Tina", "Tono"];

/// Ordered, append-only list of students.
///
/// Storage is shared with any outstanding [`Snapshot`]; the first append
/// after a snapshot copies the list so the snapshot never changes.
/// Observers compare [`Roster::revision`] against the value they last saw to
/// find out whether the list changed.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Rc<Vec<Student>>,
    revision: u64,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster pre-populated with [`SEED_NAMES`].
    pub fn seeded() -> Self {
        let students = SEED_NAMES.iter().copied().map(Student::new).collect();
        Self {
            students: Rc::new(students),
            revision: 0,
        }
    }

    /// Adds a student to the end of the list.
    pub fn append(&mut self, student: Student) {
        debug!(name = %student.name, len = self.students.len() + 1, "roster append");
        Rc::make_mut(&mut self.students).push(student);
        self.revision += 1;
    }

    /// Returns an immutable point-in-time view of the list.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Rc::clone(&self.students))
    }

    /// Returns a counter that increases on every change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns `true` if the roster has no students.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns the student at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Iterates over students in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }
}

/// Immutable view of a [`Roster`] taken by [`Roster::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Rc<Vec<Student>>);

impl Deref for Snapshot {
    type Target = [Student];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Student]> for Snapshot {
    fn as_ref(&self) -> &[Student] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    mod construction {
        use super::*;

        #[test]
        fn new_is_empty() {
            let roster = Roster::new();
            assert!(roster.is_empty());
            assert_eq!(roster.len(), 0);
            assert_eq!(roster.revision(), 0);
        }

        #[test]
        fn seeded_has_three_entries_in_order() {
            let roster = Roster::seeded();
            assert_eq!(names(&roster.snapshot()), vec!["Tanu", "Tina", "Tono"]);
            assert_eq!(roster.revision(), 0);
        }
    }

    mod append {
        use super::*;

        #[test]
        fn adds_to_end() {
            let mut roster = Roster::seeded();
            roster.append(Student::new("Budi"));
            assert_eq!(roster.len(), 4);
            assert_eq!(roster.get(3), Some(&Student::new("Budi")));
        }

        #[test]
        fn allows_duplicates() {
            let mut roster = Roster::new();
            roster.append(Student::new("Tanu"));
            roster.append(Student::new("Tanu"));
            assert_eq!(names(&roster.snapshot()), vec!["Tanu", "Tanu"]);
        }

        #[test]
        fn bumps_revision() {
            let mut roster = Roster::new();
            roster.append(Student::new("A"));
            roster.append(Student::new("B"));
            assert_eq!(roster.revision(), 2);
        }

        #[test]
        fn iter_preserves_insertion_order() {
            let mut roster = Roster::new();
            for name in ["C", "A", "B"] {
                roster.append(Student::new(name));
            }
            let collected: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(collected, vec!["C", "A", "B"]);
        }

        #[test]
        fn get_out_of_bounds_is_none() {
            assert_eq!(Roster::seeded().get(3), None);
        }
    }

    mod snapshot {
        use super::*;

        #[test]
        fn reflects_current_contents() {
            let mut roster = Roster::new();
            roster.append(Student::new("A"));
            assert_eq!(names(&roster.snapshot()), vec!["A"]);
        }

        #[test]
        fn unaffected_by_later_append() {
            let mut roster = Roster::seeded();
            let before = roster.snapshot();
            roster.append(Student::new("Budi"));
            assert_eq!(names(&before), vec!["Tanu", "Tina", "Tono"]);
            assert_eq!(roster.len(), 4);
        }

        #[test]
        fn two_snapshots_without_changes_are_equal() {
            let roster = Roster::seeded();
            assert_eq!(roster.snapshot(), roster.snapshot());
        }

        #[test]
        fn empty_roster_snapshot_is_empty() {
            assert!(Roster::new().snapshot().is_empty());
        }
    }
}
