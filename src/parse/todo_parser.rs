use std::sync::LazyLock;

use regex::Regex;

use crate::model::todo::{TodoItem, TodoLists, TodoMarker};

/// `[ ] text` or `[x] text`, with at least one character of text. A carriage
/// return anywhere in the line disqualifies it.
static TODO_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([ x])\] ([^\r]+)$").expect("valid todo regex"));

/// Any single character in brackets followed by a space (`[?] `)
static TODO_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.\] ").expect("valid checkbox regex"));

/// Split a document into its lines. Always yields at least one line, so
/// joining the result with `\n` reproduces the input exactly.
pub fn split_lines(document: &str) -> Vec<String> {
    document.split('\n').map(String::from).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Classify a single line. Returns the marker and the item text.
pub fn parse_todo_line(line: &str) -> Option<(TodoMarker, &str)> {
    let caps = TODO_LINE.captures(line)?;
    let marker = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(TodoMarker::from_checkbox_char)?;
    let text = caps.get(2)?.as_str();
    Some((marker, text))
}

/// True if the line starts with a bracketed single character and a space,
/// whatever the character is. Such lines never count as header text.
pub fn has_todo_box(line: &str) -> bool {
    TODO_BOX.is_match(line)
}

/// True if the line starts with the pending prefix, with or without text.
pub fn is_pending_prefixed(line: &str) -> bool {
    line.starts_with(TodoMarker::Pending.prefix())
}

/// Extract pending and done items from a document, each in document order.
pub fn extract_todos(document: &str) -> TodoLists {
    let mut lists = TodoLists::default();

    for (index, line) in document.split('\n').enumerate() {
        match parse_todo_line(line) {
            Some((TodoMarker::Pending, text)) => {
                lists
                    .pending
                    .push(TodoItem::new(TodoMarker::Pending, text, index));
            }
            Some((TodoMarker::Done, text)) => {
                lists.done.push(TodoItem::new(TodoMarker::Done, text, index));
            }
            None => {}
        }
    }

    lists
}
