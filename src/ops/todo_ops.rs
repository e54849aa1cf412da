use tracing::debug;

use crate::model::todo::{TodoItem, TodoMarker};
use crate::parse::{has_todo_box, is_pending_prefixed, join_lines, parse_todo_line, split_lines};

/// Leading lines treated as a header when a note has no pending tasks yet
pub const DEFAULT_HEADER_SKIP: usize = 3;

/// Error type for todo mutations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("line {index} is out of range (document has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },
    #[error("line {0} no longer holds this task; re-read the document")]
    StaleItem(usize),
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

/// Flip the checkbox on the item's line, keeping its text.
/// Returns the full new document.
pub fn toggle_todo(document: &str, item: &TodoItem) -> Result<String, TodoError> {
    let mut lines = split_lines(document);
    check_item(&lines, item)?;

    let toggled = TodoItem {
        checked: !item.checked,
        ..item.clone()
    };
    lines[item.line_index] = toggled.to_line();
    debug!(line = item.line_index, checked = toggled.checked, "toggled task");
    Ok(join_lines(&lines))
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Add a pending task. Returns `None` if `text` is blank.
///
/// Placement is best-effort: right after the last pending line, or, when
/// there is none, after a short leading header of at most `header_skip`
/// non-blank, unboxed lines.
pub fn add_todo(document: &str, text: &str, header_skip: usize) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut lines = split_lines(document);
    let index = insert_index(&lines, header_skip);
    lines.insert(index, format!("{}{}", TodoMarker::Pending.prefix(), text));
    debug!(line = index, "added task");
    Some(join_lines(&lines))
}

/// Line index at which a new pending task is inserted
pub fn insert_index(lines: &[String], header_skip: usize) -> usize {
    if let Some(last) = lines.iter().rposition(|l| is_pending_prefixed(l)) {
        return last + 1;
    }

    let mut index = 0;
    for line in lines.iter().take(header_skip) {
        if line.trim().is_empty() || has_todo_box(line) {
            break;
        }
        index += 1;
    }
    index
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove the item's line. Lines below it move up by one.
pub fn delete_todo(document: &str, item: &TodoItem) -> Result<String, TodoError> {
    let mut lines = split_lines(document);
    check_item(&lines, item)?;

    lines.remove(item.line_index);
    debug!(line = item.line_index, "deleted task");
    Ok(join_lines(&lines))
}

/// The item's line must still exist and still be the same task.
fn check_item(lines: &[String], item: &TodoItem) -> Result<(), TodoError> {
    let line = lines.get(item.line_index).ok_or(TodoError::LineOutOfRange {
        index: item.line_index,
        len: lines.len(),
    })?;
    match parse_todo_line(line) {
        Some((marker, text)) if marker == item.marker() && text == item.text => Ok(()),
        _ => Err(TodoError::StaleItem(item.line_index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::extract_todos;
    use pretty_assertions::assert_eq;

    const NOTE: &str = "Notes\n[ ] buy milk\n[x] pay bills";

    fn add(doc: &str, text: &str) -> Option<String> {
        add_todo(doc, text, DEFAULT_HEADER_SKIP)
    }

    // --- toggle ---

    #[test]
    fn toggle_pending_marks_done() {
        let item = extract_todos(NOTE).pending[0].clone();
        let out = toggle_todo(NOTE, &item).unwrap();
        assert_eq!(out, "Notes\n[x] buy milk\n[x] pay bills");
    }

    #[test]
    fn toggle_done_marks_pending() {
        let item = extract_todos(NOTE).done[0].clone();
        let out = toggle_todo(NOTE, &item).unwrap();
        assert_eq!(out, "Notes\n[ ] buy milk\n[ ] pay bills");
    }

    #[test]
    fn toggle_twice_restores_document() {
        let doc = "head\n[ ] a\n\n[x] b\ntrailing\n";
        for item in extract_todos(doc).iter() {
            let once = toggle_todo(doc, item).unwrap();
            let flipped = extract_todos(&once)
                .iter()
                .find(|t| t.line_index == item.line_index)
                .cloned()
                .unwrap();
            assert_eq!(toggle_todo(&once, &flipped).unwrap(), doc);
        }
    }

    #[test]
    fn toggle_stale_index_is_rejected() {
        let item = extract_todos(NOTE).pending[0].clone();
        let edited = "Inserted above\nNotes\n[ ] buy milk\n[x] pay bills";
        assert_eq!(toggle_todo(edited, &item), Err(TodoError::StaleItem(1)));
    }

    #[test]
    fn toggle_out_of_range() {
        let item = TodoItem::new(TodoMarker::Pending, "gone", 9);
        assert_eq!(
            toggle_todo(NOTE, &item),
            Err(TodoError::LineOutOfRange { index: 9, len: 3 })
        );
    }

    // --- insertion ---

    #[test]
    fn add_after_last_pending() {
        let out = add(NOTE, "call mom").unwrap();
        assert_eq!(out, "Notes\n[ ] buy milk\n[ ] call mom\n[x] pay bills");
    }

    #[test]
    fn add_after_last_of_several_pending() {
        let doc = "[ ] a\nmiddle\n[ ] b\nend";
        assert_eq!(add(doc, "c").unwrap(), "[ ] a\nmiddle\n[ ] b\n[ ] c\nend");
    }

    #[test]
    fn add_trims_text() {
        let out = add(NOTE, "   call mom  ").unwrap();
        assert!(out.contains("\n[ ] call mom\n"));
    }

    #[test]
    fn add_blank_text_is_noop() {
        assert_eq!(add(NOTE, ""), None);
        assert_eq!(add(NOTE, "  \t\n "), None);
    }

    #[test]
    fn add_to_empty_document() {
        assert_eq!(add("", "first").unwrap(), "[ ] first\n");
    }

    #[test]
    fn add_skips_short_header() {
        let doc = "Title\nSubtitle\n\nbody text";
        assert_eq!(add(doc, "t").unwrap(), "Title\nSubtitle\n[ ] t\n\nbody text");
    }

    #[test]
    fn add_header_skip_is_capped() {
        let doc = "one\ntwo\nthree\nfour\nfive";
        assert_eq!(add(doc, "t").unwrap(), "one\ntwo\nthree\n[ ] t\nfour\nfive");
    }

    #[test]
    fn add_header_skip_stops_at_done_task() {
        let doc = "Title\n[x] done\nmore";
        assert_eq!(add(doc, "t").unwrap(), "Title\n[ ] t\n[x] done\nmore");
    }

    #[test]
    fn add_header_skip_stops_at_any_box() {
        let doc = "[~] odd\nTitle";
        assert_eq!(add(doc, "t").unwrap(), "[ ] t\n[~] odd\nTitle");
    }

    #[test]
    fn add_leading_blank_line_inserts_at_top() {
        let doc = "\nTitle";
        assert_eq!(add(doc, "t").unwrap(), "[ ] t\n\nTitle");
    }

    #[test]
    fn add_counts_empty_pending_prefix_as_pending() {
        // "[ ] " alone is not a listed task, but new tasks still go after it
        let doc = "Title\n[ ] \nbody";
        assert_eq!(add(doc, "t").unwrap(), "Title\n[ ] \n[ ] t\nbody");
    }

    #[test]
    fn add_with_custom_header_skip() {
        let doc = "one\ntwo\nthree";
        assert_eq!(add_todo(doc, "t", 0).unwrap(), "[ ] t\none\ntwo\nthree");
        assert_eq!(add_todo(doc, "t", 1).unwrap(), "one\n[ ] t\ntwo\nthree");
    }

    // --- deletion ---

    #[test]
    fn delete_removes_exactly_one_line() {
        let doc = "a\n[ ] b\nc\n[x] d\ne";
        let item = extract_todos(doc).pending[0].clone();
        let out = delete_todo(doc, &item).unwrap();

        let before = split_lines(doc);
        let after = split_lines(&out);
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(&after[..item.line_index], &before[..item.line_index]);
        assert_eq!(&after[item.line_index..], &before[item.line_index + 1..]);
    }

    #[test]
    fn delete_done_item() {
        let item = extract_todos(NOTE).done[0].clone();
        assert_eq!(delete_todo(NOTE, &item).unwrap(), "Notes\n[ ] buy milk");
    }

    #[test]
    fn delete_out_of_range() {
        let item = TodoItem::new(TodoMarker::Done, "x", 3);
        assert!(matches!(
            delete_todo(NOTE, &item),
            Err(TodoError::LineOutOfRange { .. })
        ));
    }

    #[test]
    fn delete_rejects_changed_text() {
        let mut item = extract_todos(NOTE).pending[0].clone();
        item.text = "buy bread".into();
        assert_eq!(delete_todo(NOTE, &item), Err(TodoError::StaleItem(1)));
    }
}
