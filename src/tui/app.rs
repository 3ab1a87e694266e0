use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tracing::{info, warn};

use crate::config::Strings;
use crate::transfer::Route;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{HomeState, ResultState, draw_home, draw_result};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The roster form.
    Home,
    /// The decoded roster text.
    Result,
}

/// Top-level application state and navigation shell.
///
/// The home state lives as long as the app. The result state is created
/// from a route on navigation and dropped when the screen is dismissed.
pub struct App {
    strings: Strings,
    home: HomeState,
    result: Option<ResultState>,
    screen: Screen,
    history: Vec<Screen>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Home`] screen.
    pub fn new(strings: Strings) -> Self {
        Self::with_home(strings, HomeState::new())
    }

    /// Creates a new `App` with a prepared home screen.
    pub fn with_home(strings: Strings, home: HomeState) -> Self {
        Self {
            strings,
            home,
            result: None,
            screen: Screen::Home,
            history: Vec::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        info!("event loop started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        info!("event loop finished");
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match (self.screen, &self.result) {
            (Screen::Result, Some(result)) => draw_result(result, &self.strings, frame, area),
            _ => draw_home(&self.home, &self.strings, frame, area),
        }
    }

    /// Dispatches a key event to the current screen and applies its action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match (self.screen, self.result.as_mut()) {
            (Screen::Result, Some(result)) => result.handle_key(key),
            _ => self.home.handle_key(key),
        };
        self.apply(action);
    }

    /// Navigates to the screen named by `path`.
    ///
    /// Unknown paths are logged and ignored.
    pub fn navigate(&mut self, path: &str) {
        let route = match Route::parse(path) {
            Ok(route) => route,
            Err(e) => {
                warn!(error = %e, "navigation ignored");
                return;
            }
        };
        info!(route = path, "navigate");
        match route {
            // Home is the start destination; returning to it clears the stack.
            Route::Home => {
                self.result = None;
                self.history.clear();
                self.screen = Screen::Home;
            }
            Route::Result { list_data } => {
                self.result = Some(ResultState::from_param(&list_data));
                if self.screen != Screen::Result {
                    self.history.push(self.screen);
                    self.screen = Screen::Result;
                }
            }
        }
    }

    /// Returns to the previous screen, dropping the result state if leaving it.
    pub fn back(&mut self) {
        let Some(previous) = self.history.pop() else {
            return;
        };
        if self.screen == Screen::Result {
            self.result = None;
        }
        info!(from = ?self.screen, to = ?previous, "back");
        self.screen = previous;
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => self.navigate(&route.to_path()),
            Action::Back => self.back(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the home screen state.
    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Returns the result screen state, if the result screen is open.
    pub fn result(&self) -> Option<&ResultState> {
        self.result.as_ref()
    }
}
