use serde::Serialize;

use crate::model::todo::{TodoItem, TodoLists};
use crate::ops::counters::DocumentStats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodosJson<'a> {
    pub pending: &'a [TodoItem],
    pub done: &'a [TodoItem],
}

pub fn todos_to_json(lists: &TodoLists) -> TodosJson<'_> {
    TodosJson {
        pending: &lists.pending,
        done: &lists.done,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// `  12 [ ] text`: 1-based line number, checkbox, text
pub fn format_todo_line(item: &TodoItem) -> String {
    format!("{:>4} {}", item.line_index + 1, item.to_line())
}

pub fn format_todos(lists: &TodoLists) -> Vec<String> {
    let mut lines = Vec::new();
    if lists.is_empty() {
        lines.push("no tasks".to_string());
        return lines;
    }
    lines.extend(lists.pending.iter().map(format_todo_line));
    if !lists.done.is_empty() {
        if !lists.pending.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("completed \u{00b7} {}", lists.done.len()));
        lines.extend(lists.done.iter().map(format_todo_line));
    }
    lines
}

pub fn format_stats(stats: &DocumentStats) -> Vec<String> {
    vec![
        format!("words       {}", stats.words),
        format!("characters  {}", stats.chars),
    ]
}
