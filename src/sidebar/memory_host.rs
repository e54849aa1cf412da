use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::model::note::{NoteFile, NoteId};

use super::host::NoteHost;

#[derive(Debug, Clone)]
struct StoredNote {
    file: NoteFile,
    content: String,
    /// Set while the note is locked
    password: Option<String>,
}

/// An in-memory set of notes, most recently modified first.
///
/// Locked notes compare the submitted password against the one they were
/// stored with; there is no cryptography here.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    notes: IndexMap<NoteId, StoredNote>,
    active: Option<NoteId>,
    next_id: usize,
    read_only: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        MemoryHost::default()
    }

    /// A host whose documents cannot be changed through `set_content`
    pub fn read_only() -> Self {
        MemoryHost {
            read_only: true,
            ..MemoryHost::default()
        }
    }

    /// Add a plain note at the end of the list. The first note added
    /// becomes active.
    pub fn insert(&mut self, name: &str, content: &str) -> NoteId {
        self.push(name, content, None)
    }

    /// Add a plain note carrying an existing modification stamp
    pub fn insert_modified(
        &mut self,
        name: &str,
        content: &str,
        modified: DateTime<Utc>,
    ) -> NoteId {
        let id = self.push(name, content, None);
        if let Some(note) = self.notes.get_mut(&id) {
            note.file.modified = modified;
        }
        id
    }

    /// Add a locked note
    pub fn insert_locked(&mut self, name: &str, content: &str, password: &str) -> NoteId {
        self.push(name, content, Some(password.to_string()))
    }

    /// Text of any note, locked or not
    pub fn note_content(&self, id: &str) -> Option<&str> {
        self.notes.get(id).map(|n| n.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn push(&mut self, name: &str, content: &str, password: Option<String>) -> NoteId {
        let id = self.allocate_id();
        let mut file = NoteFile::new(id.clone(), name);
        file.encrypted = password.is_some();
        if self.active.is_none() && !file.encrypted {
            self.active = Some(id.clone());
        }
        self.notes.insert(
            id.clone(),
            StoredNote {
                file,
                content: content.to_string(),
                password,
            },
        );
        id
    }

    fn allocate_id(&mut self) -> NoteId {
        self.next_id += 1;
        format!("note-{}", self.next_id)
    }

    /// Stamp a note as modified and move it to the top of the list
    fn touch(&mut self, id: &str) {
        if let Some(index) = self.notes.get_index_of(id) {
            self.notes[index].file.modified = Utc::now();
            self.notes.move_index(index, 0);
        }
    }
}

impl NoteHost for MemoryHost {
    fn files(&self) -> Vec<&NoteFile> {
        self.notes.values().map(|n| &n.file).collect()
    }

    fn active_file_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn content(&self) -> &str {
        self.active
            .as_deref()
            .and_then(|id| self.notes.get(id))
            .map_or("", |n| n.content.as_str())
    }

    fn select_file(&mut self, id: &str) {
        match self.notes.get(id) {
            Some(note) if note.password.is_some() => {
                warn!(id, "refusing to select a locked note");
            }
            Some(_) => {
                debug!(id, "selected note");
                self.active = Some(id.to_string());
            }
            None => warn!(id, "select: no such note"),
        }
    }

    fn delete_file(&mut self, id: &str) {
        if self.notes.shift_remove(id).is_none() {
            warn!(id, "delete: no such note");
            return;
        }
        info!(id, "deleted note");
        if self.active.as_deref() == Some(id) {
            self.active = self
                .notes
                .values()
                .find(|n| n.password.is_none())
                .map(|n| n.file.id.clone());
        }
    }

    fn rename_file(&mut self, id: &str, new_name: &str) {
        match self.notes.get_mut(id) {
            Some(note) => {
                info!(id, from = %note.file.name, to = new_name, "renamed note");
                note.file.name = new_name.to_string();
                self.touch(id);
            }
            None => warn!(id, "rename: no such note"),
        }
    }

    fn duplicate_file(&mut self, id: &str) {
        let Some(original) = self.notes.get(id).cloned() else {
            warn!(id, "duplicate: no such note");
            return;
        };
        let name = format!("{} (copy)", original.file.name);
        let copy_id = self.push(&name, &original.content, original.password);
        self.touch(&copy_id);
        info!(id, copy = %copy_id, "duplicated note");
    }

    fn decrypt_file(&mut self, id: &str, password: &str) -> bool {
        let Some(note) = self.notes.get_mut(id) else {
            return false;
        };
        match &note.password {
            Some(expected) if expected == password => {
                note.password = None;
                note.file.encrypted = false;
                info!(id, "unlocked note");
                true
            }
            Some(_) => {
                debug!(id, "wrong password");
                false
            }
            None => true,
        }
    }

    fn accepts_content_changes(&self) -> bool {
        !self.read_only
    }

    fn set_content(&mut self, content: String) {
        if self.read_only {
            return;
        }
        let Some(id) = self.active.clone() else {
            warn!("set_content with no active note");
            return;
        };
        if let Some(note) = self.notes.get_mut(&id) {
            note.content = content;
            self.touch(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(host: &MemoryHost) -> Vec<String> {
        host.files().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn first_plain_note_becomes_active() {
        let mut host = MemoryHost::new();
        host.insert_locked("secret", "s", "pw");
        let id = host.insert("plain", "hello");
        assert_eq!(host.active_file_id(), Some(id.as_str()));
        assert_eq!(host.content(), "hello");
    }

    #[test]
    fn set_content_moves_note_to_top() {
        let mut host = MemoryHost::new();
        host.insert("a", "");
        let b = host.insert("b", "");
        host.select_file(&b);
        host.set_content("changed".into());
        assert_eq!(names(&host), vec!["b", "a"]);
        assert_eq!(host.note_content(&b), Some("changed"));
    }

    #[test]
    fn edits_restamp_the_note() {
        let mut host = MemoryHost::new();
        let old = DateTime::from_timestamp(0, 0).unwrap();
        let a = host.insert_modified("a", "", old);
        assert_eq!(host.files()[0].modified, old);
        host.rename_file(&a, "b");
        assert!(host.files()[0].modified > old);
    }

    #[test]
    fn read_only_ignores_content_changes() {
        let mut host = MemoryHost::read_only();
        host.insert("a", "keep");
        assert!(!host.accepts_content_changes());
        host.set_content("lost".into());
        assert_eq!(host.content(), "keep");
    }

    #[test]
    fn duplicate_copies_content_and_suffixes_name() {
        let mut host = MemoryHost::new();
        let a = host.insert("Groceries", "[ ] milk");
        host.duplicate_file(&a);
        assert_eq!(names(&host), vec!["Groceries (copy)", "Groceries"]);
        let copy = host.files()[0].id.clone();
        assert_eq!(host.note_content(&copy), Some("[ ] milk"));
    }

    #[test]
    fn delete_active_falls_back_to_next_plain_note() {
        let mut host = MemoryHost::new();
        let a = host.insert("a", "");
        host.insert_locked("locked", "", "pw");
        let c = host.insert("c", "");
        host.delete_file(&a);
        assert_eq!(host.active_file_id(), Some(c.as_str()));
        assert_eq!(host.len(), 2);
    }

    #[test]
    fn locked_note_needs_password() {
        let mut host = MemoryHost::new();
        host.insert("plain", "");
        let locked = host.insert_locked("diary", "dear diary", "hunter2");

        host.select_file(&locked);
        assert_ne!(host.active_file_id(), Some(locked.as_str()));

        assert!(!host.decrypt_file(&locked, "wrong"));
        assert!(host.find_file(&locked).unwrap().encrypted);

        assert!(host.decrypt_file(&locked, "hunter2"));
        assert!(!host.find_file(&locked).unwrap().encrypted);
        host.select_file(&locked);
        assert_eq!(host.content(), "dear diary");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut host = MemoryHost::new();
        host.insert("a", "");
        host.rename_file("nope", "x");
        host.delete_file("nope");
        host.duplicate_file("nope");
        assert!(!host.decrypt_file("nope", "pw"));
        assert_eq!(names(&host), vec!["a"]);
    }
}
