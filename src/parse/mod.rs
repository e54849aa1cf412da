pub mod todo_parser;

pub use todo_parser::{
    extract_todos, has_todo_box, is_pending_prefixed, join_lines, parse_todo_line, split_lines,
};
