//! Reusable TUI widgets.

pub mod form;
pub mod student_list;

pub use form::{draw_button, draw_text_field};
pub use student_list::{StudentListState, draw_student_list};
