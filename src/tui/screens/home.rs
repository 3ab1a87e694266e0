//! Home screen: draft name field, add/navigate buttons, and the roster.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, info};

use crate::config::{StringKey, Strings};
use crate::model::{Draft, Roster};
use crate::transfer::{Route, encode};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{StudentListState, draw_button, draw_student_list, draw_text_field};

/// Focusable controls on the home screen, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    /// The draft name text field.
    Name,
    /// The button that adds the draft to the roster.
    Add,
    /// The button that opens the result screen.
    Navigate,
}

impl HomeFocus {
    const ORDER: [Self; 3] = [Self::Name, Self::Add, Self::Navigate];

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Add => 1,
            Self::Navigate => 2,
        }
    }

    /// Returns the next control, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Returns the previous control, wrapping around.
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State for the home screen. Owns the draft and the roster for as long as
/// the screen exists.
#[derive(Debug, Clone)]
pub struct HomeState {
    draft: Draft,
    roster: Roster,
    focus: HomeFocus,
    list: StudentListState,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    /// Creates the screen with an empty draft and the seeded roster.
    pub fn new() -> Self {
        Self::with_roster(Roster::seeded())
    }

    /// Creates the screen with an empty draft and the given roster.
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            draft: Draft::new(),
            roster,
            focus: HomeFocus::Name,
            list: StudentListState::new(),
        }
    }

    /// Returns the draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the focused control.
    pub fn focus(&self) -> HomeFocus {
        self.focus
    }

    /// Returns the list cursor state.
    pub fn list(&self) -> &StudentListState {
        &self.list
    }

    /// Returns `true` if the add button is enabled.
    pub fn can_add(&self) -> bool {
        self.draft.is_valid()
    }

    /// Replaces the draft name, as if the user had retyped the field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    /// Moves the draft into the roster if it is valid.
    ///
    /// The append and the draft reset happen in this one call, so no frame
    /// is ever drawn between them.
    pub fn add(&mut self) {
        match self.draft.commit() {
            Some(student) => {
                info!(name = %student.name, "student added");
                self.roster.append(student);
                self.list.observe(&self.roster);
            }
            None => debug!("add ignored: draft is blank"),
        }
    }

    /// Snapshots the roster and builds the result route carrying it.
    pub fn result_route(&self) -> Route {
        let snapshot = self.roster.snapshot();
        Route::result(encode(&snapshot))
    }
}

impl ScreenState for HomeState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Char(ch) if self.focus == HomeFocus::Name => {
                self.draft.push_char(ch);
                Action::None
            }
            KeyCode::Backspace if self.focus == HomeFocus::Name => {
                self.draft.pop_char();
                Action::None
            }
            KeyCode::Up => {
                self.list.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.list.select_next(self.roster.len());
                Action::None
            }
            KeyCode::Enter => match self.focus {
                HomeFocus::Name | HomeFocus::Add => {
                    self.add();
                    Action::None
                }
                HomeFocus::Navigate => Action::Navigate(self.result_route()),
            },
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the home screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(state: &HomeState, strings: &Strings, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", strings.lookup(StringKey::HomeTitle)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [field_area, buttons_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_text_field(
        strings.lookup(StringKey::EnterItem),
        state.draft().name(),
        state.focus() == HomeFocus::Name,
        frame,
        field_area,
    );

    let [add_area, navigate_area] =
        Layout::horizontal([Constraint::Length(16), Constraint::Length(16)])
            .flex(Flex::SpaceAround)
            .areas(buttons_area);
    draw_button(
        strings.lookup(StringKey::ButtonClick),
        state.focus() == HomeFocus::Add,
        state.can_add(),
        frame,
        add_area,
    );
    draw_button(
        strings.lookup(StringKey::ButtonNavigate),
        state.focus() == HomeFocus::Navigate,
        true,
        frame,
        navigate_area,
    );

    draw_student_list(state.list(), state.roster(), frame, list_area);

    let footer = Paragraph::new("Tab/Shift+Tab: focus  Enter: activate  ↑↓: scroll  Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
