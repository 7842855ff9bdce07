//! Dashboard statistics over the whole todo collection.

use super::todo::{Priority, Todo};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage in `0.0..=100.0`
    pub completion_rate: f64,
    /// One entry per priority, LOW first, zero counts included
    pub priority_stats: Vec<PriorityCount>,
    /// One entry per distinct category, sorted by name
    pub category_stats: Vec<CategoryCount>,
}

impl TodoStats {
    pub fn from_todos(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        let pending = total - completed;

        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        let priority_stats = Priority::ALL
            .iter()
            .map(|&priority| PriorityCount {
                priority,
                count: todos.iter().filter(|t| t.priority == priority).count(),
            })
            .collect();

        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
        for todo in todos {
            *categories.entry(todo.category.as_str()).or_default() += 1;
        }
        let category_stats = categories
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();

        Self {
            total,
            completed,
            pending,
            completion_rate,
            priority_stats,
            category_stats,
        }
    }

    pub fn count_for(&self, priority: Priority) -> usize {
        self.priority_stats
            .iter()
            .find(|p| p.priority == priority)
            .map(|p| p.count)
            .unwrap_or(0)
    }
}
