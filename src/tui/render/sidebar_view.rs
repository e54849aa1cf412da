use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::todo::TodoItem;
use crate::sidebar::NoteHost;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

use super::field_spans;

/// Render the sidebar: files, tasks, recent, counters (top to bottom)
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(app.theme.border).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let file_rows = app.files().len().max(1) as u16 + 2;
    let recent_rows = app.recent_files().len() as u16 + 2;
    let counter_rows = if app.show_counters { 3 } else { 0 };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Max(file_rows.min(inner.height / 2).max(3)),
            Constraint::Min(3),
            Constraint::Length(recent_rows),
            Constraint::Length(counter_rows),
        ])
        .split(inner);

    render_files(frame, app, sections[0]);
    render_tasks(frame, app, sections[1]);
    render_recent(frame, app, sections[2]);
    if app.show_counters {
        render_counters(frame, app, sections[3]);
    }
}

fn header_line(app: &App, title: &str, focused: bool, suffix: Option<&str>) -> Line<'static> {
    let color = if focused {
        app.theme.highlight
    } else {
        app.theme.text
    };
    let mut spans = vec![Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(color)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(suffix) = suffix {
        spans.push(Span::styled(
            format!("  {}", suffix),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ));
    }
    Line::from(spans)
}

/// Column-0 marker: a bar on the cursor row of the focused section
fn cursor_marker(app: &App, is_cursor: bool) -> Span<'static> {
    if is_cursor {
        Span::styled(
            "\u{258E}",
            Style::default()
                .fg(app.theme.selection_border)
                .bg(app.theme.selection_bg),
        )
    } else {
        Span::styled(" ", Style::default().bg(app.theme.background))
    }
}

fn render_files(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Files;
    let width = area.width as usize;
    let active = app.host.active_file_id();
    let renaming = app.sidebar.rename.as_ref();

    let mut lines = Vec::new();
    let files = app.files();
    if files.is_empty() {
        lines.push(Line::from(Span::styled(
            "   No notes",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    }

    for (i, file) in files.iter().enumerate() {
        let is_cursor = focused && i == app.files_cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        let is_active = active == Some(file.id.as_str());

        let mut spans = vec![cursor_marker(app, is_cursor)];
        let icon = if file.encrypted {
            Span::styled("\u{25C6} ", Style::default().fg(app.theme.amber).bg(bg))
        } else if is_active {
            Span::styled("\u{25CF} ", Style::default().fg(app.theme.highlight).bg(bg))
        } else {
            Span::styled("\u{25CB} ", Style::default().fg(app.theme.dim).bg(bg))
        };
        spans.push(icon);

        if let Some(state) = renaming.filter(|r| r.file_id == file.id) {
            spans.extend(field_spans(&state.input, &app.theme, None));
        } else {
            let badge = if file.encrypted { " Encrypted" } else { "" };
            let budget = width.saturating_sub(3 + badge.len());
            let name_style = if is_active {
                Style::default().fg(app.theme.text_bright).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&file.name, budget),
                name_style,
            ));
            if file.encrypted {
                spans.push(Span::styled(
                    badge,
                    Style::default().fg(app.theme.amber).bg(bg),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    // Header stays put; the list below it follows the cursor
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    frame.render_widget(
        Paragraph::new(header_line(app, "Files", focused, None))
            .style(Style::default().bg(app.theme.background)),
        sections[0],
    );
    let scroll = follow_scroll(app.files_cursor, sections[1].height as usize);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(app.theme.background))
            .scroll((scroll, 0)),
        sections[1],
    );
}

/// First visible line so that `cursor_line` is on screen
fn follow_scroll(cursor_line: usize, visible: usize) -> u16 {
    cursor_line.saturating_sub(visible.saturating_sub(1)) as u16
}

fn render_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Tasks;
    let width = area.width as usize;
    let todos = app.todos();
    let dim = Style::default().fg(app.theme.dim).bg(app.theme.background);

    let mut lines = vec![header_line(app, "Tasks", focused, Some("a add"))];

    if let Some(input) = &app.sidebar.new_todo {
        let mut spans = vec![Span::styled("   ", dim)];
        if input.buffer.is_empty() {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(app.theme.background),
            ));
            spans.push(Span::styled("What needs to be done?", dim));
        } else {
            spans.extend(field_spans(input, &app.theme, None));
        }
        lines.push(Line::from(spans));
    } else if todos.is_empty() {
        lines.push(Line::from(Span::styled("   + Add a task...", dim)));
    }

    let mut row = 0;
    for item in &todos.pending {
        lines.push(task_line(app, item, focused && row == app.tasks_cursor, width));
        row += 1;
    }

    if !todos.done.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("   Completed \u{00b7} {}", todos.done.len()),
            dim,
        )));
        for item in &todos.done {
            lines.push(task_line(app, item, focused && row == app.tasks_cursor, width));
            row += 1;
        }
    }

    // Keep the cursor row on screen
    let visible = area.height as usize;
    let scroll = if focused && visible > 0 {
        let cursor_line = lines
            .iter()
            .position(|l| l.spans.first().is_some_and(|s| s.content == "\u{258E}"))
            .unwrap_or(0);
        follow_scroll(cursor_line, visible)
    } else {
        0
    };

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(app.theme.background))
            .scroll((scroll, 0)),
        area,
    );
}

fn task_line(app: &App, item: &TodoItem, is_cursor: bool, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let (box_style, text_style) = if item.checked {
        (
            Style::default().fg(app.theme.green).bg(bg),
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (
            Style::default().fg(app.theme.text).bg(bg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )
    };
    let checkbox = if item.checked { "[x] " } else { "[ ] " };

    Line::from(vec![
        cursor_marker(app, is_cursor),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(checkbox, box_style),
        Span::styled(
            unicode::truncate_to_width(&item.text, width.saturating_sub(7)),
            text_style,
        ),
    ])
}

fn render_recent(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Recent;
    let width = area.width as usize;
    let mut lines = vec![header_line(app, "Recent", focused, None)];

    for (i, file) in app.recent_files().iter().enumerate() {
        let is_cursor = focused && i == app.recent_cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        lines.push(Line::from(vec![
            cursor_marker(app, is_cursor),
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                unicode::truncate_to_width(&file.name, width.saturating_sub(3)),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn render_counters(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.sidebar.stats(&app.host);
    let width = area.width as usize;
    let label = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let value = Style::default()
        .fg(app.theme.text)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);

    let row = |name: &str, n: usize| {
        let n = n.to_string();
        let pad = width.saturating_sub(name.len() + n.len() + 2);
        Line::from(vec![
            Span::styled(format!(" {}{}", name, " ".repeat(pad)), label),
            Span::styled(n, value),
        ])
    };

    let lines = vec![
        Line::from(""),
        row("Words", stats.words),
        row("Characters", stats.chars),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn lists_files_tasks_recent_and_counts() {
        let app = app_with_notes(&[
            ("Groceries", "Notes\n[ ] buy milk\n[x] pay bills"),
            ("Ideas", "rust tui"),
        ]);
        let output = render_to_string(36, 24, |frame, area| {
            render_sidebar(frame, &app, area);
        });

        assert!(output.contains(" Files"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Ideas"));
        assert!(output.contains("[ ] buy milk"));
        assert!(output.contains("Completed \u{00b7} 1"));
        assert!(output.contains("[x] pay bills"));
        assert!(output.contains(" Recent"));
        assert!(output.contains("Words"));
        assert!(output.contains("Characters"));
        assert!(output.contains("32"));
    }

    #[test]
    fn empty_note_offers_to_add_a_task() {
        let app = app_with_notes(&[("Empty", "")]);
        let output = render_to_string(36, 24, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("+ Add a task..."));
    }

    #[test]
    fn encrypted_file_has_badge() {
        let app = app_with_locked_note("Diary", "pw");
        let output = render_to_string(36, 24, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("Diary Encrypted"));
    }

    #[test]
    fn add_task_field_shows_placeholder() {
        let mut app = app_with_notes(&[("Notes", "")]);
        app.sidebar.begin_add_todo();
        let output = render_to_string(36, 24, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("What needs to be done?"));
        assert!(!output.contains("+ Add a task..."));
    }

    #[test]
    fn long_file_list_follows_cursor() {
        let names: Vec<String> = (0..40).map(|i| format!("note{:02}", i)).collect();
        let notes: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "")).collect();
        let mut app = app_with_notes(&notes);
        app.files_cursor = 35;
        let output = render_to_string(36, 24, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains(" Files"));
        assert!(output.contains("note35"));
        assert!(!output.contains("note10"));
    }

    #[test]
    fn follow_scroll_keeps_cursor_visible() {
        assert_eq!(follow_scroll(0, 5), 0);
        assert_eq!(follow_scroll(4, 5), 0);
        assert_eq!(follow_scroll(9, 5), 5);
        assert_eq!(follow_scroll(3, 0), 3);
    }

    #[test]
    fn counters_can_be_hidden() {
        let mut app = app_with_notes(&[("Notes", "a b c")]);
        app.show_counters = false;
        let output = render_to_string(36, 24, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(!output.contains("Characters"));
    }
}
