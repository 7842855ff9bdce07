use crate::domain::{
    select_todos, sort_todos, NewTodo, Pagination, Priority, Todo, TodoFilters, TodoPatch,
    TodoStats,
};
use crate::error::{Result, TodoError};
use crate::observability::metrics::{self, MetricName};
use crate::storage::Storage;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Todo operations exposed to the GraphQL layer.
///
/// Identifiers arrive as client-supplied strings; anything that is not a UUID
/// cannot name a stored todo and is reported as not found.
#[derive(Clone)]
pub struct TodoService {
    storage: Arc<dyn Storage>,
}

impl TodoService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Filtered, priority-sorted and paginated todos
    pub async fn list_todos(
        &self,
        filters: &TodoFilters,
        pagination: &Pagination,
    ) -> Result<Vec<Todo>> {
        let todos = self.storage.get_all_todos().await?;
        Ok(select_todos(todos, filters, pagination))
    }

    pub async fn find_todo(&self, id: &str) -> Result<Option<Todo>> {
        match parse_id(id) {
            Some(uuid) => self.storage.get_todo_by_id(uuid).await,
            None => Ok(None),
        }
    }

    pub async fn get_todo(&self, id: &str) -> Result<Todo> {
        self.find_todo(id)
            .await?
            .ok_or_else(|| TodoError::not_found(id))
    }

    pub async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo> {
        let todo = new_todo
            .into_todo(Utc::now())
            .map_err(record_validation_failure)?;
        let todo = self.storage.insert_todo(todo).await?;

        info!(todo_id = %todo.id, title = %todo.title, "Created todo");
        metrics::increment(MetricName::TodosCreated);
        self.record_stored_count().await;
        Ok(todo)
    }

    pub async fn update_todo(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        patch.validate().map_err(record_validation_failure)?;

        let uuid = parse_id(id).ok_or_else(|| TodoError::not_found(id))?;
        let now = Utc::now();
        let todo = self
            .storage
            .update_todo(uuid, Box::new(move |todo: &mut Todo| patch.apply(todo, now)))
            .await?;

        metrics::increment(MetricName::TodosUpdated);
        Ok(todo)
    }

    pub async fn delete_todo(&self, id: &str) -> Result<bool> {
        let uuid = parse_id(id).ok_or_else(|| TodoError::not_found(id))?;
        self.storage.delete_todo(uuid).await?;

        info!(todo_id = %uuid, "Deleted todo");
        metrics::increment(MetricName::TodosDeleted);
        self.record_stored_count().await;
        Ok(true)
    }

    pub async fn toggle_todo(&self, id: &str) -> Result<Todo> {
        let uuid = parse_id(id).ok_or_else(|| TodoError::not_found(id))?;
        let now = Utc::now();
        let toggled = self
            .storage
            .update_todo(
                uuid,
                Box::new(move |todo: &mut Todo| -> Result<()> {
                    todo.completed = !todo.completed;
                    todo.updated_at = now;
                    Ok(())
                }),
            )
            .await?;

        metrics::increment(MetricName::TodosUpdated);
        metrics::increment(MetricName::TodosToggled);
        Ok(toggled)
    }

    pub async fn update_todo_priority(&self, id: &str, priority: Priority) -> Result<Todo> {
        self.update_todo(id, TodoPatch::priority(priority)).await
    }

    /// Marks each todo completed independently. Ids that fail are logged and
    /// skipped; the todos that were updated are returned in request order.
    pub async fn mark_todos_completed<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Todo>> {
        if ids.is_empty() {
            return Err(record_validation_failure(TodoError::NoIdsProvided));
        }

        let mut updated = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            match self.update_todo(id, TodoPatch::completed(true)).await {
                Ok(todo) => updated.push(todo),
                Err(e) => warn!(todo_id = %id, error = %e, "Failed to mark todo completed"),
            }
        }
        record_bulk_failures(ids.len() - updated.len());
        Ok(updated)
    }

    /// Deletes each todo independently. Returns `true` only when every id was
    /// deleted; failures are logged and do not stop the remaining deletions.
    pub async fn delete_todos<S: AsRef<str>>(&self, ids: &[S]) -> Result<bool> {
        if ids.is_empty() {
            return Err(record_validation_failure(TodoError::NoIdsProvided));
        }

        let mut deleted = 0;
        for id in ids {
            let id = id.as_ref();
            match self.delete_todo(id).await {
                Ok(_) => deleted += 1,
                Err(e) => warn!(todo_id = %id, error = %e, "Failed to delete todo"),
            }
        }
        record_bulk_failures(ids.len() - deleted);
        Ok(deleted == ids.len())
    }

    /// Number of todos matching `filters`, ignoring pagination
    pub async fn count_todos(&self, filters: &TodoFilters) -> Result<usize> {
        let todos = self.storage.get_all_todos().await?;
        Ok(todos.iter().filter(|t| filters.matches(t)).count())
    }

    pub async fn completed_count(&self) -> Result<usize> {
        self.count_todos(&TodoFilters::completed(true)).await
    }

    pub async fn pending_count(&self) -> Result<usize> {
        self.count_todos(&TodoFilters::completed(false)).await
    }

    pub async fn todos_by_category(&self, category: &str) -> Result<Vec<Todo>> {
        self.list_todos(&TodoFilters::category(category), &Pagination::default())
            .await
    }

    /// Case-insensitive search over title, description and category. The term
    /// is matched as given, so only an empty term returns every todo.
    pub async fn search_todos(&self, term: &str) -> Result<Vec<Todo>> {
        let term = term.to_lowercase();
        let mut todos: Vec<Todo> = self
            .storage
            .get_all_todos()
            .await?
            .into_iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&term)
                    || t.description.to_lowercase().contains(&term)
                    || t.category.to_lowercase().contains(&term)
            })
            .collect();
        sort_todos(&mut todos);
        Ok(todos)
    }

    pub async fn stats(&self) -> Result<TodoStats> {
        let todos = self.storage.get_all_todos().await?;
        Ok(TodoStats::from_todos(&todos))
    }

    async fn record_stored_count(&self) {
        if let Ok(count) = self.storage.count_todos().await {
            metrics::set_gauge(MetricName::TodosStored, count as f64);
        }
    }
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

fn record_bulk_failures(failed: usize) {
    if failed > 0 {
        metrics::increment_by(MetricName::BulkItemFailures, failed as u64);
    }
}

fn record_validation_failure(err: TodoError) -> TodoError {
    metrics::increment(MetricName::ValidationFailures);
    err
}
