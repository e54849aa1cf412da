mod modal;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use crate::sidebar::TextInput;

use modal::*;
use navigate::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Renames and task edits move the touched note to the top of the list
    let order_before = app.file_ids();
    let cursor_before = app.cursor_file_id();

    match app.mode() {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Rename => handle_rename(app, key),
        Mode::AddTodo => handle_add_todo(app, key),
        Mode::Unlock => handle_unlock(app, key),
        Mode::Menu => handle_menu(app, key),
    }

    if app.file_ids() != order_before {
        app.anchor_files_cursor(cursor_before.as_deref());
    }
    app.clamp_cursors();
}

/// Handle a bracketed paste. Only text fields take pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    match app.mode() {
        Mode::Rename => {
            if let Some(state) = &mut app.sidebar.rename {
                state.input.insert_str(text);
            }
        }
        Mode::AddTodo => {
            if let Some(input) = &mut app.sidebar.new_todo {
                input.insert_str(text);
            }
        }
        Mode::Unlock => {
            if let Some(dialog) = &mut app.sidebar.unlock {
                dialog.edit_password(|p| p.insert_str(text));
            }
        }
        Mode::Navigate | Mode::Menu => {}
    }
}

/// Outcome of feeding a key to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Edited,
    Submit,
    Cancel,
    Ignored,
}

/// Line-editing keys shared by every text field
fn edit_field(input: &mut TextInput, key: KeyEvent) -> FieldKey {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => FieldKey::Submit,
        (_, KeyCode::Esc) => FieldKey::Cancel,
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
            input.delete_word_back();
            FieldKey::Edited
        }
        (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => {
            input.home();
            FieldKey::Ignored
        }
        (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => {
            input.end();
            FieldKey::Ignored
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            input.insert_char(c);
            FieldKey::Edited
        }
        (_, KeyCode::Backspace) => {
            input.backspace();
            FieldKey::Edited
        }
        (_, KeyCode::Delete) => {
            input.delete();
            FieldKey::Edited
        }
        (_, KeyCode::Left) => {
            input.move_left();
            FieldKey::Ignored
        }
        (_, KeyCode::Right) => {
            input.move_right();
            FieldKey::Ignored
        }
        _ => FieldKey::Ignored,
    }
}
