//! Domain data shapes shared across layers

pub mod query;
pub mod stats;
pub mod todo;

pub use query::{select_todos, sort_todos, Pagination, TodoFilters};
pub use stats::{CategoryCount, PriorityCount, TodoStats};
pub use todo::{NewTodo, Priority, Todo, TodoPatch, DEFAULT_CATEGORY, MAX_TITLE_LENGTH};
