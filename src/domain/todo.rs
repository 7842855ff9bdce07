use crate::error::{Result, TodoError};
use async_graphql::Enum;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_TITLE_LENGTH: usize = 100;
pub const DEFAULT_CATEGORY: &str = "General";

/// Task urgency, ordered LOW < MEDIUM < HIGH < URGENT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Sort rank; higher is more urgent
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Urgent => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Arguments for creating a todo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl NewTodo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validates the input and builds a fresh, incomplete todo stamped with `now`.
    pub fn into_todo(self, now: DateTime<Utc>) -> Result<Todo> {
        let title = normalize_title(&self.title, TodoError::TitleRequired)?;

        Ok(Todo {
            id: Uuid::new_v4(),
            title,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            completed: false,
            priority: self.priority.unwrap_or_default(),
            category: normalize_category(self.category.as_deref()),
            due_date: self.due_date,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update of a todo. `None` leaves a field untouched.
///
/// `due_date` is doubly optional: `Some(None)` clears the date.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            normalize_title(title, TodoError::TitleEmpty)?;
        }
        Ok(())
    }

    /// Applies the patch in place and refreshes `updated_at`. Nothing is
    /// written when validation fails.
    pub fn apply(self, todo: &mut Todo, now: DateTime<Utc>) -> Result<()> {
        let title = match &self.title {
            Some(title) => Some(normalize_title(title, TodoError::TitleEmpty)?),
            None => None,
        };

        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description.trim().to_string();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        if let Some(category) = self.category {
            todo.category = normalize_category(Some(category.as_str()));
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = due_date;
        }
        todo.updated_at = now;
        Ok(())
    }
}

fn normalize_title(raw: &str, when_blank: TodoError) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(when_blank);
    }
    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(TodoError::TitleTooLong { length });
    }
    Ok(title.to_string())
}

fn normalize_category(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(category) if !category.is_empty() => category.to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}
