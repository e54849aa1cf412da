use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, Mode};

/// Key hints for the current mode and focus
fn hints(app: &App) -> &'static str {
    match app.mode() {
        Mode::Rename => "Enter save  Esc cancel",
        Mode::AddTodo => "Enter add  Esc cancel",
        Mode::Unlock => "Enter unlock  Esc cancel",
        Mode::Menu => "j/k move  Enter select  Esc close",
        Mode::Navigate => match app.focus {
            Focus::Files => "Enter open  r rename  d duplicate  D delete  m menu  Tab next  q quit",
            Focus::Tasks => "Space toggle  a add  x delete  Tab next  q quit",
            Focus::Recent => "Enter open  Tab next  q quit",
        },
    }
}

/// Render the bottom row: the one-shot status message, else key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = match &app.status_message {
        Some(msg) => Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        None => Line::from(Span::styled(
            format!(" {}", hints(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
