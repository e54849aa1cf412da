use serde::{Deserialize, Serialize};

/// Checkbox state of a todo line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoMarker {
    Pending,
    Done,
}

impl TodoMarker {
    /// The line prefix for this marker, including the trailing space
    pub fn prefix(self) -> &'static str {
        match self {
            TodoMarker::Pending => "[ ] ",
            TodoMarker::Done => "[x] ",
        }
    }

    /// Parse the character inside the brackets
    pub fn from_checkbox_char(c: char) -> Option<TodoMarker> {
        match c {
            ' ' => Some(TodoMarker::Pending),
            'x' => Some(TodoMarker::Done),
            _ => None,
        }
    }

    pub fn toggled(self) -> TodoMarker {
        match self {
            TodoMarker::Pending => TodoMarker::Done,
            TodoMarker::Done => TodoMarker::Pending,
        }
    }

    pub fn is_checked(self) -> bool {
        self == TodoMarker::Done
    }
}

/// A checklist item derived from one line of a document.
///
/// `line_index` is only meaningful against the document snapshot the item
/// was extracted from. Any insertion or deletion above it invalidates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Item text (everything after the `[ ] ` / `[x] ` prefix)
    pub text: String,
    pub checked: bool,
    /// 0-indexed line in the source document
    pub line_index: usize,
}

impl TodoItem {
    pub fn new(marker: TodoMarker, text: impl Into<String>, line_index: usize) -> Self {
        TodoItem {
            text: text.into(),
            checked: marker.is_checked(),
            line_index,
        }
    }

    pub fn marker(&self) -> TodoMarker {
        if self.checked {
            TodoMarker::Done
        } else {
            TodoMarker::Pending
        }
    }

    /// The full document line this item renders to
    pub fn to_line(&self) -> String {
        format!("{}{}", self.marker().prefix(), self.text)
    }
}

/// Todo items of a document, partitioned by checked state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoLists {
    pub pending: Vec<TodoItem>,
    pub done: Vec<TodoItem>,
}

impl TodoLists {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.done.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.done.len()
    }

    /// Pending items first, then done items (sidebar display order)
    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.pending.iter().chain(self.done.iter())
    }

    /// Item at a position in display order
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_prefixes() {
        assert_eq!(TodoMarker::Pending.prefix(), "[ ] ");
        assert_eq!(TodoMarker::Done.prefix(), "[x] ");
        assert_eq!(TodoMarker::Pending.toggled(), TodoMarker::Done);
        assert_eq!(TodoMarker::from_checkbox_char('X'), None);
    }

    #[test]
    fn item_renders_its_line() {
        let item = TodoItem::new(TodoMarker::Done, "pay bills", 2);
        assert!(item.checked);
        assert_eq!(item.to_line(), "[x] pay bills");
    }

    #[test]
    fn display_order_is_pending_then_done() {
        let lists = TodoLists {
            pending: vec![TodoItem::new(TodoMarker::Pending, "b", 3)],
            done: vec![TodoItem::new(TodoMarker::Done, "a", 0)],
        };
        assert_eq!(lists.len(), 2);
        assert_eq!(lists.get(0).unwrap().text, "b");
        assert_eq!(lists.get(1).unwrap().text, "a");
        assert!(lists.get(2).is_none());
    }
}
