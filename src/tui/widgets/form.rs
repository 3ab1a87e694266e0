//! Text field and button renderers shared by form screens.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Border color for a text field or button.
pub fn border_color(focused: bool, enabled: bool) -> Color {
    match (focused, enabled) {
        (_, false) => Color::DarkGray,
        (true, true) => Color::Yellow,
        (false, true) => Color::Gray,
    }
}

/// Label style for a button.
pub fn button_style(focused: bool, enabled: bool) -> Style {
    match (focused, enabled) {
        (_, false) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::White),
    }
}

/// Renders a bordered single-line text input.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_text_field(label: &str, value: &str, focused: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused, true)));

    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders a bordered button. Disabled buttons are drawn dimmed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_button(label: &str, focused: bool, enabled: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused, enabled)));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        label.to_string(),
        button_style(focused, enabled),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    mod styling {
        use super::*;

        #[test]
        fn disabled_is_dark_gray_regardless_of_focus() {
            assert_eq!(border_color(true, false), Color::DarkGray);
            assert_eq!(border_color(false, false), Color::DarkGray);
        }

        #[test]
        fn focused_enabled_is_yellow() {
            assert_eq!(border_color(true, true), Color::Yellow);
        }

        #[test]
        fn unfocused_enabled_is_gray() {
            assert_eq!(border_color(false, true), Color::Gray);
        }

        #[test]
        fn disabled_button_is_dimmed() {
            let style = button_style(true, false);
            assert!(style.add_modifier.contains(Modifier::DIM));
            assert_eq!(style.bg, None);
        }

        #[test]
        fn focused_button_is_highlighted() {
            let style = button_style(true, true);
            assert_eq!(style.bg, Some(Color::Yellow));
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn text_field_shows_label_and_value() {
            let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
            terminal
                .draw(|frame| draw_text_field("Enter Item", "Budi", true, frame, frame.area()))
                .unwrap();
            let output = buffer_to_string(terminal.backend().buffer());
            assert!(output.contains("Enter Item"), "should show label");
            assert!(output.contains("Budi"), "should show value");
            assert!(output.contains('\u{2588}'), "focused field shows cursor");
        }

        #[test]
        fn unfocused_text_field_has_no_cursor() {
            let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
            terminal
                .draw(|frame| draw_text_field("Enter Item", "Budi", false, frame, frame.area()))
                .unwrap();
            let output = buffer_to_string(terminal.backend().buffer());
            assert!(!output.contains('\u{2588}'));
        }

        #[test]
        fn button_shows_label() {
            let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
            terminal
                .draw(|frame| draw_button("Submit", false, true, frame, frame.area()))
                .unwrap();
            let output = buffer_to_string(terminal.backend().buffer());
            assert!(output.contains("Submit"));
        }
    }
}
