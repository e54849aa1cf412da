use crossterm::event::{KeyCode, KeyEvent};

use crate::sidebar::UnlockOutcome;
use crate::tui::app::App;

use super::{FieldKey, edit_field};

pub(super) fn handle_rename(app: &mut App, key: KeyEvent) {
    let Some(state) = &mut app.sidebar.rename else {
        return;
    };
    match edit_field(&mut state.input, key) {
        FieldKey::Submit => app.sidebar.commit_rename(&mut app.host),
        FieldKey::Cancel => app.sidebar.cancel_rename(),
        FieldKey::Edited | FieldKey::Ignored => {}
    }
}

pub(super) fn handle_add_todo(app: &mut App, key: KeyEvent) {
    let Some(input) = &mut app.sidebar.new_todo else {
        return;
    };
    match edit_field(input, key) {
        FieldKey::Submit => {
            if app.sidebar.submit_add_todo(&mut app.host) {
                app.status_message = Some("Task added".into());
            }
        }
        FieldKey::Cancel => app.sidebar.cancel_add_todo(),
        FieldKey::Edited | FieldKey::Ignored => {}
    }
}

pub(super) fn handle_unlock(app: &mut App, key: KeyEvent) {
    let Some(dialog) = &mut app.sidebar.unlock else {
        return;
    };
    let result = dialog.edit_password(|password| edit_field(password, key));

    match result {
        FieldKey::Submit => {
            if app.sidebar.submit_unlock(&mut app.host) == Some(UnlockOutcome::Unlocked) {
                app.follow_active_file();
            }
        }
        FieldKey::Cancel => app.sidebar.cancel_unlock(),
        FieldKey::Edited | FieldKey::Ignored => {}
    }
}

pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    let Some(menu) = &mut app.sidebar.context_menu else {
        return;
    };
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => menu.move_down(),
        KeyCode::Char('k') | KeyCode::Up => menu.move_up(),
        KeyCode::Esc | KeyCode::Char('q') => app.sidebar.close_context_menu(),
        KeyCode::Enter => {
            let opens = menu
                .selected()
                .is_some_and(|item| item.action == crate::sidebar::FileAction::Open);
            match app.sidebar.activate_menu_item(&mut app.host) {
                Ok(()) if opens => app.follow_active_file(),
                Ok(()) => {}
                Err(e) => app.status_message = Some(e.to_string()),
            }
        }
        _ => {}
    }
}
