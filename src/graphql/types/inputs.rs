use crate::domain::{NewTodo, Pagination, Priority, TodoFilters, TodoPatch};
use async_graphql::{InputObject, MaybeUndefined};
use chrono::NaiveDate;

#[derive(InputObject, Debug, Default)]
#[graphql(name = "TodoFilters")]
pub struct TodoFiltersInput {
    pub completed: Option<bool>,
    /// Case-insensitive substring of the category
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

impl From<TodoFiltersInput> for TodoFilters {
    fn from(input: TodoFiltersInput) -> Self {
        Self {
            completed: input.completed,
            category: input.category,
            priority: input.priority,
        }
    }
}

#[derive(InputObject, Debug, Default)]
#[graphql(name = "Pagination")]
pub struct PaginationInput {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl From<PaginationInput> for Pagination {
    fn from(input: PaginationInput) -> Self {
        Pagination::new(
            input.offset.unwrap_or(0) as usize,
            input.limit.map(|l| l as usize),
        )
    }
}

#[derive(InputObject, Debug)]
pub struct CreateTodoInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl From<CreateTodoInput> for NewTodo {
    fn from(input: CreateTodoInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            priority: input.priority,
            category: input.category,
            due_date: input.due_date,
        }
    }
}

#[derive(InputObject, Debug, Default)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    /// Omit to keep the current date, pass null to clear it
    pub due_date: MaybeUndefined<NaiveDate>,
}

impl From<UpdateTodoInput> for TodoPatch {
    fn from(input: UpdateTodoInput) -> Self {
        let due_date = match input.due_date {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(date) => Some(Some(date)),
        };

        Self {
            title: input.title,
            description: input.description,
            completed: input.completed,
            priority: input.priority,
            category: input.category,
            due_date,
        }
    }
}
