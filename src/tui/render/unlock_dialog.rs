use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::{centered_rect_fixed, field_spans};

/// Render the password prompt for an encrypted note
pub fn render_unlock_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = &app.sidebar.unlock else {
        return;
    };

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(
            " Unlock File",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                " {}",
                unicode::truncate_to_width(&dialog.prompt(), inner_w.saturating_sub(1))
            ),
            text_style,
        )),
        Line::from(""),
    ];

    let mut field = vec![Span::styled(" > ", dim_style)];
    field.extend(field_spans(&dialog.password, &app.theme, Some('\u{2022}')));
    lines.push(Line::from(field));

    if let Some(error) = dialog.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(app.theme.red).bg(bg),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Enter unlock  Esc cancel", dim_style)));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.amber).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::{UnlockOutcome, WRONG_PASSWORD_MESSAGE};
    use crate::tui::render::test_helpers::*;

    fn open_dialog() -> App {
        let mut app = app_with_locked_note("Diary", "hunter2");
        let id = app.files()[0].id.clone();
        app.sidebar.open_file(&mut app.host, &id).unwrap();
        app
    }

    #[test]
    fn password_is_masked() {
        let mut app = open_dialog();
        if let Some(dialog) = app.sidebar.unlock.as_mut() {
            dialog.edit_password(|p| p.insert_str("abc"));
        }
        let output = render_to_string(60, 16, |frame, area| {
            render_unlock_dialog(frame, &app, area);
        });
        assert!(output.contains("Unlock File"));
        assert!(output.contains("\u{201c}Diary\u{201d}"));
        assert!(output.contains("\u{2022}\u{2022}\u{2022}"));
        assert!(!output.contains("abc"));
    }

    #[test]
    fn shows_wrong_password_error() {
        let mut app = open_dialog();
        if let Some(dialog) = app.sidebar.unlock.as_mut() {
            dialog.edit_password(|p| p.insert_str("nope"));
        }
        let outcome = app.sidebar.submit_unlock(&mut app.host);
        assert_eq!(outcome, Some(UnlockOutcome::WrongPassword));

        let output = render_to_string(60, 16, |frame, area| {
            render_unlock_dialog(frame, &app, area);
        });
        assert!(output.contains(WRONG_PASSWORD_MESSAGE));
    }
}
