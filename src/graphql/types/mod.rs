pub mod inputs;
pub mod stats;
pub mod todo;

pub use inputs::{CreateTodoInput, PaginationInput, TodoFiltersInput, UpdateTodoInput};
pub use stats::{CategoryCount, PriorityCount, TodoStats};
pub use todo::Todo;
