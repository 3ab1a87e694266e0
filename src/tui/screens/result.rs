//! Result screen: shows the decoded `listData` parameter verbatim.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::config::{StringKey, Strings};
use crate::transfer::decode;
use crate::tui::action::{Action, ScreenState};

/// State for the result screen.
///
/// Holds only the decoded text; the roster it came from stays with the home
/// screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultState {
    text: String,
    scroll: u16,
}

impl ResultState {
    /// Decodes a raw route parameter. An empty parameter yields empty text.
    pub fn from_param(raw: &str) -> Self {
        Self {
            text: decode(raw),
            scroll: 0,
        }
    }

    /// Returns the decoded text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

/// Counts the rows `text` occupies when wrapped to `width` columns.
///
/// Each source line takes at least one row.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

impl ScreenState for ResultState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Back,
            _ => Action::None,
        }
    }
}

/// Renders the result screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_result(state: &ResultState, strings: &Strings, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", strings.lookup(StringKey::ResultTitle)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_spacer, content_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let total = wrapped_rows(state.text(), content_area.width);
    let capped_scroll = state.scroll().min(total.saturating_sub(content_area.height));

    let content = Paragraph::new(state.text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .scroll((capped_scroll, 0));
    frame.render_widget(content, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
