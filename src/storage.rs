use crate::domain::Todo;
use crate::error::{Result, TodoError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-place edit applied to a stored todo while storage holds its write lock
pub type TodoUpdate = Box<dyn FnOnce(&mut Todo) -> Result<()> + Send>;

/// Storage trait for persisting todos
#[async_trait]
pub trait Storage: Send + Sync {
    async fn insert_todo(&self, todo: Todo) -> Result<Todo>;
    async fn get_todo_by_id(&self, id: Uuid) -> Result<Option<Todo>>;
    /// Every stored todo in insertion order
    async fn get_all_todos(&self) -> Result<Vec<Todo>>;
    /// Applies `update` to the todo with `id` and returns the stored result.
    /// Fails with `NotFound` if absent; nothing is written when `update` fails.
    async fn update_todo(&self, id: Uuid, update: TodoUpdate) -> Result<Todo>;
    async fn delete_todo(&self, id: Uuid) -> Result<()>;
    async fn count_todos(&self) -> Result<usize>;
}

/// In-memory storage implementation; contents are lost on restart
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_todo(&self, todo: Todo) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        if todos.iter().any(|t| t.id == todo.id) {
            return Err(TodoError::Storage {
                message: format!("Duplicate todo id {}", todo.id),
            });
        }
        todos.push(todo.clone());

        debug!("Created todo: {} with id {}", todo.title, todo.id);
        Ok(todo)
    }

    async fn get_todo_by_id(&self, id: Uuid) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id == id).cloned())
    }

    async fn get_all_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.read().await.clone())
    }

    async fn update_todo(&self, id: Uuid, update: TodoUpdate) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let slot = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::not_found(id.to_string()))?;

        let mut todo = slot.clone();
        update(&mut todo)?;
        *slot = todo.clone();

        debug!("Updated todo: {} with id {}", todo.title, todo.id);
        Ok(todo)
    }

    async fn delete_todo(&self, id: Uuid) -> Result<()> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TodoError::not_found(id.to_string()))?;
        todos.remove(index);

        debug!("Deleted todo with id {}", id);
        Ok(())
    }

    async fn count_todos(&self) -> Result<usize> {
        Ok(self.todos.read().await.len())
    }
}
