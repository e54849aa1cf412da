use serde::Serialize;

/// Word and character totals for a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub words: usize,
    pub chars: usize,
}

impl DocumentStats {
    pub fn of(document: &str) -> Self {
        DocumentStats {
            words: word_count(document),
            chars: char_count(document),
        }
    }
}

/// Whitespace-delimited tokens in the whole document
pub fn word_count(document: &str) -> usize {
    document.split_whitespace().count()
}

/// Characters in the document, newlines included
pub fn char_count(document: &str) -> usize {
    document.chars().count()
}
