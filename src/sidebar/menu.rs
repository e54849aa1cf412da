/// What a file context-menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Open,
    Rename,
    Duplicate,
    /// Folders do not exist yet; this entry is shown but disabled
    MoveToFolder,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: FileAction,
    pub enabled: bool,
    /// Rendered in the warning color
    pub destructive: bool,
}

impl MenuItem {
    fn new(label: &'static str, action: FileAction) -> Self {
        MenuItem {
            label,
            action,
            enabled: true,
            destructive: false,
        }
    }
}

/// Entries of the per-file context menu, top to bottom
pub fn build_file_context_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Open", FileAction::Open),
        MenuItem::new("Rename", FileAction::Rename),
        MenuItem::new("Duplicate", FileAction::Duplicate),
        MenuItem {
            enabled: false,
            ..MenuItem::new("Move to folder", FileAction::MoveToFolder)
        },
        MenuItem {
            destructive: true,
            ..MenuItem::new("Delete", FileAction::Delete)
        },
    ]
}

/// An open context menu anchored to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    pub file_id: String,
    pub items: Vec<MenuItem>,
    pub cursor: usize,
}

impl ContextMenu {
    pub fn for_file(file_id: &str) -> Self {
        ContextMenu {
            file_id: file_id.to_string(),
            items: build_file_context_menu(),
            cursor: 0,
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.items.get(self.cursor)
    }
}
