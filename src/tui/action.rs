//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::transfer::Route;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// Screens mutate their own state directly; the `App` only interprets
/// actions that cross a screen boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No navigation needed.
    None,
    /// Navigate to the given route.
    Navigate(Route),
    /// Return to the previous screen.
    Back,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
