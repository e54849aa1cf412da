//! Sidebar state and the actions it dispatches to its host.
//!
//! The sidebar owns only transient UI state (an in-progress rename, the
//! unlock prompt, an open context menu, the add-task field). Notes and their
//! text belong to the [`NoteHost`]; every task edit is computed here and
//! handed back as a whole new document.

pub mod host;
pub mod memory_host;
pub mod menu;
pub mod text_input;
pub mod unlock;

pub use host::NoteHost;
pub use memory_host::MemoryHost;
pub use menu::{ContextMenu, FileAction, MenuItem, build_file_context_menu};
pub use text_input::TextInput;
pub use unlock::{EMPTY_PASSWORD_MESSAGE, UnlockDialog, UnlockOutcome, WRONG_PASSWORD_MESSAGE};

use tracing::{debug, info};

use crate::model::config::SidebarConfig;
use crate::model::note::NoteFile;
use crate::model::todo::{TodoItem, TodoLists};
use crate::ops::counters::DocumentStats;
use crate::ops::todo_ops::{self, TodoError};
use crate::parse::extract_todos;

/// Error type for sidebar actions
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SidebarError {
    #[error("{0} is not available yet")]
    Unsupported(&'static str),
    #[error("no such note: {0}")]
    UnknownFile(String),
    #[error(transparent)]
    Todo(#[from] TodoError),
}

/// A rename in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameState {
    pub file_id: String,
    pub input: TextInput,
}

/// What happened when a file was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Selected,
    /// The note is encrypted; the unlock dialog is now showing
    NeedsPassword,
}

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    pub config: SidebarConfig,
    pub rename: Option<RenameState>,
    pub unlock: Option<UnlockDialog>,
    pub context_menu: Option<ContextMenu>,
    /// Add-task field, present while open
    pub new_todo: Option<TextInput>,
}

impl Sidebar {
    pub fn new(config: SidebarConfig) -> Self {
        Sidebar {
            config,
            ..Sidebar::default()
        }
    }

    // -----------------------------------------------------------------------
    // Files
    // -----------------------------------------------------------------------

    /// Select a plain note, or prompt for the password of an encrypted one.
    pub fn open_file(
        &mut self,
        host: &mut impl NoteHost,
        id: &str,
    ) -> Result<OpenOutcome, SidebarError> {
        let file = host
            .find_file(id)
            .ok_or_else(|| SidebarError::UnknownFile(id.to_string()))?;
        if file.encrypted {
            debug!(id, "prompting for password");
            self.unlock = Some(UnlockDialog::new(&file.id, &file.name));
            return Ok(OpenOutcome::NeedsPassword);
        }
        host.select_file(id);
        Ok(OpenOutcome::Selected)
    }

    /// The first few notes, selected directly without the unlock prompt
    pub fn recent_files<'a>(&self, host: &'a impl NoteHost) -> Vec<&'a NoteFile> {
        host.files()
            .into_iter()
            .take(self.config.recent_limit)
            .collect()
    }

    pub fn open_recent(&mut self, host: &mut impl NoteHost, id: &str) {
        host.select_file(id);
    }

    pub fn duplicate_file(&mut self, host: &mut impl NoteHost, id: &str) {
        host.duplicate_file(id);
    }

    pub fn delete_file(&mut self, host: &mut impl NoteHost, id: &str) {
        if self.rename.as_ref().is_some_and(|r| r.file_id == id) {
            self.rename = None;
        }
        host.delete_file(id);
    }

    // -----------------------------------------------------------------------
    // Rename
    // -----------------------------------------------------------------------

    pub fn begin_rename(&mut self, host: &impl NoteHost, id: &str) -> Result<(), SidebarError> {
        let file = host
            .find_file(id)
            .ok_or_else(|| SidebarError::UnknownFile(id.to_string()))?;
        self.rename = Some(RenameState {
            file_id: file.id.clone(),
            input: TextInput::with_text(&file.name),
        });
        Ok(())
    }

    /// Apply the rename if the trimmed name is non-empty. Leaves rename mode
    /// either way.
    pub fn commit_rename(&mut self, host: &mut impl NoteHost) {
        let Some(state) = self.rename.take() else {
            return;
        };
        let name = state.input.as_str().trim();
        if !name.is_empty() {
            host.rename_file(&state.file_id, name);
        }
    }

    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    // -----------------------------------------------------------------------
    // Unlock
    // -----------------------------------------------------------------------

    pub fn submit_unlock(&mut self, host: &mut impl NoteHost) -> Option<UnlockOutcome> {
        let dialog = self.unlock.as_mut()?;
        if dialog.password.is_blank() {
            dialog.error = Some(EMPTY_PASSWORD_MESSAGE);
            return Some(UnlockOutcome::MissingPassword);
        }

        if host.decrypt_file(&dialog.file_id, dialog.password.as_str()) {
            let file_id = dialog.file_id.clone();
            self.unlock = None;
            host.select_file(&file_id);
            info!(id = %file_id, "note unlocked");
            Some(UnlockOutcome::Unlocked)
        } else {
            dialog.error = Some(WRONG_PASSWORD_MESSAGE);
            Some(UnlockOutcome::WrongPassword)
        }
    }

    pub fn cancel_unlock(&mut self) {
        self.unlock = None;
    }

    // -----------------------------------------------------------------------
    // Context menu
    // -----------------------------------------------------------------------

    pub fn open_context_menu(&mut self, id: &str) {
        self.context_menu = Some(ContextMenu::for_file(id));
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    /// Run the highlighted entry of the open menu and close it.
    pub fn activate_menu_item(&mut self, host: &mut impl NoteHost) -> Result<(), SidebarError> {
        let Some(menu) = self.context_menu.take() else {
            return Ok(());
        };
        let Some(item) = menu.selected() else {
            return Ok(());
        };
        self.run_file_action(host, item.action, &menu.file_id)
    }

    pub fn run_file_action(
        &mut self,
        host: &mut impl NoteHost,
        action: FileAction,
        id: &str,
    ) -> Result<(), SidebarError> {
        match action {
            FileAction::Open => self.open_file(host, id).map(|_| ()),
            FileAction::Rename => self.begin_rename(host, id),
            FileAction::Duplicate => {
                self.duplicate_file(host, id);
                Ok(())
            }
            FileAction::MoveToFolder => Err(SidebarError::Unsupported("move to folder")),
            FileAction::Delete => {
                self.delete_file(host, id);
                Ok(())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    pub fn todos(&self, host: &impl NoteHost) -> TodoLists {
        extract_todos(host.content())
    }

    pub fn stats(&self, host: &impl NoteHost) -> DocumentStats {
        DocumentStats::of(host.content())
    }

    pub fn toggle_todo(
        &mut self,
        host: &mut impl NoteHost,
        item: &TodoItem,
    ) -> Result<(), SidebarError> {
        if !host.accepts_content_changes() {
            return Ok(());
        }
        let updated = todo_ops::toggle_todo(host.content(), item)?;
        host.set_content(updated);
        Ok(())
    }

    pub fn delete_todo(
        &mut self,
        host: &mut impl NoteHost,
        item: &TodoItem,
    ) -> Result<(), SidebarError> {
        if !host.accepts_content_changes() {
            return Ok(());
        }
        let updated = todo_ops::delete_todo(host.content(), item)?;
        host.set_content(updated);
        Ok(())
    }

    pub fn begin_add_todo(&mut self) {
        if self.new_todo.is_none() {
            self.new_todo = Some(TextInput::default());
        }
    }

    /// Insert the typed task. Blank text does nothing and keeps the field
    /// open; a successful insert closes and clears it.
    pub fn submit_add_todo(&mut self, host: &mut impl NoteHost) -> bool {
        if !host.accepts_content_changes() {
            return false;
        }
        let Some(input) = &self.new_todo else {
            return false;
        };
        let Some(updated) =
            todo_ops::add_todo(host.content(), input.as_str(), self.config.header_skip)
        else {
            return false;
        };
        host.set_content(updated);
        self.new_todo = None;
        true
    }

    pub fn cancel_add_todo(&mut self) {
        self.new_todo = None;
    }

    /// Any modal input (rename, unlock, menu, add-task) is open
    pub fn is_modal(&self) -> bool {
        self.rename.is_some()
            || self.unlock.is_some()
            || self.context_menu.is_some()
            || self.new_todo.is_some()
    }
}
