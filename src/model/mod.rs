pub mod config;
pub mod note;
pub mod todo;

pub use config::*;
pub use note::*;
pub use todo::*;
