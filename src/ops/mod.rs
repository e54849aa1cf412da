pub mod counters;
pub mod todo_ops;
