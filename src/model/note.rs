use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host-assigned note identifier
pub type NoteId = String;

/// A note as listed in the sidebar. Content travels separately; only the
/// active note's text is ever handed to the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFile {
    pub id: NoteId,
    pub name: String,
    /// Locked notes need a password before they can be selected
    #[serde(default)]
    pub encrypted: bool,
    pub modified: DateTime<Utc>,
}

impl NoteFile {
    pub fn new(id: impl Into<NoteId>, name: impl Into<String>) -> Self {
        NoteFile {
            id: id.into(),
            name: name.into(),
            encrypted: false,
            modified: Utc::now(),
        }
    }
}
