pub mod context_menu;
pub mod note_view;
pub mod sidebar_view;
pub mod status_row;
pub mod unlock_dialog;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::sidebar::TextInput;

use super::app::App;
use super::theme::Theme;

/// Sidebar width in cells (narrower terminals give it everything)
const SIDEBAR_WIDTH: u16 = 36;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    // Content: sidebar | note
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    sidebar_view::render_sidebar(frame, app, columns[0]);
    note_view::render_note_view(frame, app, columns[1]);
    status_row::render_status_row(frame, app, rows[1]);

    // Overlays (rendered on top of everything)
    if app.sidebar.context_menu.is_some() {
        context_menu::render_context_menu(frame, app, columns[0]);
    }
    if app.sidebar.unlock.is_some() {
        unlock_dialog::render_unlock_dialog(frame, app, area);
    }
}

/// Spans for an editable field: text with a block cursor at the insertion
/// point. `mask` replaces every character (password fields).
pub(super) fn field_spans(
    input: &TextInput,
    theme: &Theme,
    mask: Option<char>,
) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(theme.text_bright).bg(theme.background);
    let cursor_style = Style::default().fg(theme.highlight).bg(theme.background);

    let (before, after) = input.buffer.split_at(input.cursor);
    let render = |s: &str| match mask {
        Some(m) => s.chars().map(|_| m).collect::<String>(),
        None => s.to_string(),
    };
    vec![
        Span::styled(render(before), text_style),
        Span::styled("\u{258C}", cursor_style),
        Span::styled(render(after), text_style),
    ]
}

/// Fixed-size rectangle centered in `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn full_screen_layout() {
        let mut app = app_with_notes(&[("Groceries", "Shopping\n[ ] eggs\n[x] bread")]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| {
            render(frame, &mut app);
        });
        assert!(output.contains(" Files"));
        assert!(output.contains(" Tasks"));
        assert!(output.contains(" Shopping"));
        assert!(output.contains("Completed \u{00b7} 1"));
        assert!(output.contains("q quit"));
    }

    #[test]
    fn unlock_dialog_overlays_everything() {
        let mut app = app_with_locked_note("Diary", "pw");
        let id = app.files()[0].id.clone();
        app.sidebar.open_file(&mut app.host, &id).unwrap();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| {
            render(frame, &mut app);
        });
        assert!(output.contains("Unlock File"));
        assert!(output.contains("Enter unlock  Esc cancel"));
    }

    #[test]
    fn centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, area), area);
    }
}
