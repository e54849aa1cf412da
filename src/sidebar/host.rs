use crate::model::note::NoteFile;

/// Operations the sidebar invokes but does not implement.
///
/// File lifecycle calls succeed or fail opaquely; the sidebar never learns
/// the outcome except through the next `files()` read. `set_content` is the
/// only way the sidebar changes a document, always by replacing it whole.
pub trait NoteHost {
    /// All notes in display order
    fn files(&self) -> Vec<&NoteFile>;

    fn active_file_id(&self) -> Option<&str>;

    /// Text of the active note (empty if none)
    fn content(&self) -> &str;

    fn select_file(&mut self, id: &str);

    fn delete_file(&mut self, id: &str);

    fn rename_file(&mut self, id: &str, new_name: &str);

    fn duplicate_file(&mut self, id: &str);

    /// Try to unlock an encrypted note. `true` means it may now be selected.
    fn decrypt_file(&mut self, id: &str, password: &str) -> bool;

    /// Whether `set_content` is wired up. Task edits are no-ops otherwise.
    fn accepts_content_changes(&self) -> bool {
        true
    }

    /// Replace the active note's text
    fn set_content(&mut self, content: String);

    fn find_file(&self, id: &str) -> Option<&NoteFile> {
        self.files().into_iter().find(|f| f.id == id)
    }
}
