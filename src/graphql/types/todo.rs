use crate::domain::{Priority, Todo as DomainTodo};
use async_graphql::{Object, ID};
use chrono::{DateTime, NaiveDate, Utc};

/// GraphQL representation of a Todo
#[derive(Clone)]
pub struct Todo {
    pub inner: DomainTodo,
}

impl From<DomainTodo> for Todo {
    fn from(todo: DomainTodo) -> Self {
        Self { inner: todo }
    }
}

#[Object]
impl Todo {
    /// The unique identifier for the todo
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Free-form details; empty when none were given
    async fn description(&self) -> &str {
        &self.inner.description
    }

    async fn completed(&self) -> bool {
        self.inner.completed
    }

    async fn priority(&self) -> Priority {
        self.inner.priority
    }

    /// Category label, "General" unless set
    async fn category(&self) -> &str {
        &self.inner.category
    }

    async fn due_date(&self) -> Option<NaiveDate> {
        self.inner.due_date
    }

    /// When the todo was created
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// When the todo was last changed
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
