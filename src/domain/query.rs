use super::todo::{Priority, Todo};

/// Criteria a todo must satisfy to be listed. Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilters {
    pub completed: Option<bool>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

impl TodoFilters {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Default::default()
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(completed) = self.completed {
            if todo.completed != completed {
                return false;
            }
        }

        // Category is a case-insensitive substring match
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if !todo
                .category
                .to_lowercase()
                .contains(&category.to_lowercase())
            {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if todo.priority != priority {
                return false;
            }
        }

        true
    }
}

/// Offset/limit window applied after filtering and sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Pagination {
    pub fn new(offset: usize, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let limit = self.limit.unwrap_or(usize::MAX);
        items.into_iter().skip(self.offset).take(limit).collect()
    }
}

/// Most urgent first; within a priority, newest first.
pub fn sort_todos(todos: &mut [Todo]) {
    todos.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Filter, sort, then paginate.
pub fn select_todos(todos: Vec<Todo>, filters: &TodoFilters, pagination: &Pagination) -> Vec<Todo> {
    let mut selected: Vec<Todo> = todos.into_iter().filter(|t| filters.matches(t)).collect();
    sort_todos(&mut selected);
    pagination.apply(selected)
}
