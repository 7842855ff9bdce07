use crate::domain::{self, Priority};
use crate::graphql::errors::to_graphql_int;
use async_graphql::SimpleObject;

#[derive(SimpleObject, Debug, Clone)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: i32,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct CategoryCount {
    pub category: String,
    pub count: i32,
}

/// Dashboard statistics over every stored todo
#[derive(SimpleObject, Debug, Clone)]
pub struct TodoStats {
    pub total: i32,
    pub completed: i32,
    pub pending: i32,
    /// Percentage of completed todos, 0 when there are none
    pub completion_rate: f64,
    pub priority_stats: Vec<PriorityCount>,
    pub category_stats: Vec<CategoryCount>,
}

impl From<domain::TodoStats> for TodoStats {
    fn from(stats: domain::TodoStats) -> Self {
        Self {
            total: to_graphql_int(stats.total),
            completed: to_graphql_int(stats.completed),
            pending: to_graphql_int(stats.pending),
            completion_rate: stats.completion_rate,
            priority_stats: stats
                .priority_stats
                .into_iter()
                .map(|p| PriorityCount {
                    priority: p.priority,
                    count: to_graphql_int(p.count),
                })
                .collect(),
            category_stats: stats
                .category_stats
                .into_iter()
                .map(|c| CategoryCount {
                    category: c.category,
                    count: to_graphql_int(c.count),
                })
                .collect(),
        }
    }
}
