//! Student list widget: every roster entry in insertion order.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::model::Roster;

/// Cursor state for the student list.
///
/// The cursor jumps to the newest entry whenever the observed roster
/// changes, so a freshly added student is always in view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentListState {
    selected: Option<usize>,
    seen_revision: u64,
}

impl StudentListState {
    /// Creates a state with no row selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to the last entry if `roster` changed since the
    /// previous call.
    pub fn observe(&mut self, roster: &Roster) {
        if roster.revision() != self.seen_revision {
            self.seen_revision = roster.revision();
            self.selected = roster.len().checked_sub(1);
        }
    }

    /// Moves the cursor up one row, stopping at the first.
    pub fn select_prev(&mut self) {
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Moves the cursor down one row, stopping at the last of `len` rows.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
    }

    /// Returns the highlighted row, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

/// Renders the roster, one centered name per row.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_student_list(
    state: &StudentListState,
    roster: &Roster,
    frame: &mut Frame,
    area: Rect,
) {
    if roster.is_empty() {
        let empty = Paragraph::new("No students yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = roster
        .iter()
        .map(|student| {
            ListItem::new(Line::from(student.name.clone()).alignment(Alignment::Center))
        })
        .collect();

    let list =
        List::new(items).highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    let mut list_state = ListState::default().with_selected(state.selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}
