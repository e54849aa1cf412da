use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::sidebar::OpenOutcome;
use crate::tui::app::{App, Focus};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Tab) => app.focus = app.focus.next(),
        (_, KeyCode::BackTab) => app.focus = app.focus.prev(),
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => *app.focused_cursor_mut() = 0,
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            let last = app.focused_len().saturating_sub(1);
            *app.focused_cursor_mut() = last;
        }
        // Note pane scrolling
        (KeyModifiers::SHIFT, KeyCode::Char('J')) | (_, KeyCode::PageDown) => {
            app.content_scroll += 1;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('K')) | (_, KeyCode::PageUp) => {
            app.content_scroll = app.content_scroll.saturating_sub(1);
        }
        (_, KeyCode::Enter) => activate(app),
        (_, KeyCode::Char(' ')) if app.focus == Focus::Tasks => toggle_task(app),
        (_, KeyCode::Char('a')) => {
            app.focus = Focus::Tasks;
            app.sidebar.begin_add_todo();
        }
        (_, KeyCode::Char('x')) if app.focus == Focus::Tasks => delete_task(app),
        (_, KeyCode::Char('r')) if app.focus == Focus::Files => {
            if let Some(id) = app.cursor_file_id()
                && let Err(e) = app.sidebar.begin_rename(&app.host, &id)
            {
                app.status_message = Some(e.to_string());
            }
        }
        (_, KeyCode::Char('d')) if app.focus == Focus::Files => {
            if let Some(id) = app.cursor_file_id() {
                app.sidebar.duplicate_file(&mut app.host, &id);
                app.status_message = Some("Duplicated".into());
            }
        }
        (_, KeyCode::Char('D')) if app.focus == Focus::Files => {
            if let Some(id) = app.cursor_file_id() {
                app.sidebar.delete_file(&mut app.host, &id);
                app.status_message = Some("Deleted".into());
            }
        }
        (_, KeyCode::Char('m')) if app.focus == Focus::Files => {
            if let Some(id) = app.cursor_file_id() {
                app.sidebar.open_context_menu(&id);
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.focused_len();
    if len == 0 {
        return;
    }
    let cursor = app.focused_cursor_mut();
    *cursor = cursor.saturating_add_signed(delta).min(len - 1);
}

/// Enter: open the file, toggle the task, or jump to the recent note
fn activate(app: &mut App) {
    match app.focus {
        Focus::Files => {
            if let Some(id) = app.cursor_file_id() {
                open_file(app, &id);
            }
        }
        Focus::Tasks => toggle_task(app),
        Focus::Recent => {
            if let Some(id) = app.cursor_recent_id() {
                app.sidebar.open_recent(&mut app.host, &id);
                app.follow_active_file();
            }
        }
    }
}

pub(super) fn open_file(app: &mut App, id: &str) {
    match app.sidebar.open_file(&mut app.host, id) {
        Ok(OpenOutcome::Selected) => app.follow_active_file(),
        Ok(OpenOutcome::NeedsPassword) => {}
        Err(e) => {
            warn!(error = %e, "open failed");
            app.status_message = Some(e.to_string());
        }
    }
}

fn toggle_task(app: &mut App) {
    let Some(item) = app.cursor_todo() else {
        return;
    };
    if let Err(e) = app.sidebar.toggle_todo(&mut app.host, &item) {
        app.status_message = Some(e.to_string());
    }
}

fn delete_task(app: &mut App) {
    let Some(item) = app.cursor_todo() else {
        return;
    };
    if let Err(e) = app.sidebar.delete_todo(&mut app.host, &item) {
        app.status_message = Some(e.to_string());
    }
}
