mod draft;
mod roster;
mod student;
mod validation;

pub use draft::Draft;
pub use roster::{Roster, SEED_NAMES, Snapshot};
pub use student::Student;
pub use validation::{ValidationError, validate_name};
