//! TUI screen implementations.

pub mod home;
pub mod result;

pub use home::{HomeFocus, HomeState, draw_home};
pub use result::{ResultState, draw_result};
