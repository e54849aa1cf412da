use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the file context menu beside the file under the cursor
pub fn render_context_menu(frame: &mut Frame, app: &App, area: Rect) {
    let Some(menu) = &app.sidebar.context_menu else {
        return;
    };

    let label_w = menu
        .items
        .iter()
        .map(|item| item.label.len())
        .max()
        .unwrap_or(0);
    let popup_w = (label_w as u16 + 6).min(area.width);
    let popup_h = (menu.items.len() as u16 + 2).min(area.height);

    // Anchor below the file row (header + cursor), clamped to the area
    let anchor_y = area.y + 2 + app.files_cursor as u16;
    let y = anchor_y.min((area.y + area.height).saturating_sub(popup_h));
    let popup = Rect::new(area.x + 2u16.min(area.width - popup_w), y, popup_w, popup_h);

    let bg = app.theme.background;
    let lines: Vec<Line> = menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let row_bg = if i == menu.cursor {
                app.theme.selection_bg
            } else {
                bg
            };
            let fg = if !item.enabled {
                app.theme.dim
            } else if item.destructive {
                app.theme.red
            } else {
                app.theme.text_bright
            };
            let mut style = Style::default().fg(fg).bg(row_bg);
            if i == menu.cursor && item.enabled {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(
                format!(" {:<width$} ", item.label, width = label_w + 2),
                style,
            ))
        })
        .collect();

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        popup,
    );
}
