use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::parse::{parse_todo_line, split_lines};
use crate::sidebar::NoteHost;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the active note's content (read-only, scrolled by `content_scroll`)
pub fn render_note_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let title = match app.active_file() {
        Some(file) => Line::from(vec![
            Span::styled(format!(" {} ", file.name), title_style),
            Span::styled(
                format!(
                    "{} ",
                    file.modified.with_timezone(&Local).format("%Y-%m-%d %H:%M")
                ),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ]),
        None => Line::from(Span::styled(" No note selected ", title_style)),
    };
    let block = Block::default()
        .borders(Borders::NONE)
        .title(title)
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.host.active_file_id().is_none() {
        return;
    }
    let content = app.host.content();

    let width = inner.width.saturating_sub(1) as usize;
    let done_style = Style::default()
        .fg(app.theme.dim)
        .bg(bg)
        .add_modifier(Modifier::CROSSED_OUT);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let lines: Vec<Line> = split_lines(content)
        .into_iter()
        .skip(app.content_scroll)
        .take(inner.height as usize)
        .map(|line| {
            let shown = unicode::truncate_to_width(&line, width);
            match parse_todo_line(&line) {
                Some((marker, _)) if marker.is_checked() => Line::from(vec![
                    Span::styled(" ", text_style),
                    Span::styled(shown, done_style),
                ]),
                _ => Line::from(vec![
                    Span::styled(" ", text_style),
                    Span::styled(shown, text_style),
                ]),
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_active_note_with_title() {
        let app = app_with_notes(&[("Groceries", "Shopping\n[ ] eggs")]);
        let output = render_to_string(40, 6, |frame, area| {
            render_note_view(frame, &app, area);
        });
        assert!(output.contains("Groceries"));
        assert!(output.contains(" Shopping"));
        assert!(output.contains(" [ ] eggs"));
    }

    #[test]
    fn title_shows_modification_time() {
        let stamp = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut host = crate::sidebar::MemoryHost::new();
        host.insert_modified("Journal", "today", stamp);
        let app = App::new(host, crate::model::config::Config::default());
        let output = render_to_string(60, 4, |frame, area| {
            render_note_view(frame, &app, area);
        });
        let expected = stamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
        assert!(output.contains(&format!(" Journal {}", expected)), "{output}");
    }

    #[test]
    fn scroll_skips_leading_lines() {
        let mut app = app_with_notes(&[("Long", "one\ntwo\nthree")]);
        app.content_scroll = 2;
        let output = render_to_string(40, 6, |frame, area| {
            render_note_view(frame, &app, area);
        });
        assert!(!output.contains("one"));
        assert!(output.contains("three"));
    }

    #[test]
    fn nothing_selected() {
        let app = app_with_locked_note("Diary", "pw");
        let output = render_to_string(40, 6, |frame, area| {
            render_note_view(frame, &app, area);
        });
        assert!(output.contains("No note selected"));
        assert!(!output.contains("secret"));
    }
}
