//! Demo records loaded into the store at start-up.

use crate::domain::{Priority, Todo};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

/// Namespace for the deterministic ids of the demo records
const DEMO_NAMESPACE: Uuid = Uuid::from_u128(0x6f1d_4c52_9a0e_4b7e_8d3f_2c1a_5e6b_7d80);

pub fn demo_id(key: &str) -> Uuid {
    Uuid::new_v5(&DEMO_NAMESPACE, key.as_bytes())
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn demo_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: demo_id("learn-graphql"),
            title: "Learn GraphQL".to_string(),
            description: "Understand GraphQL basics and schema design".to_string(),
            completed: false,
            priority: Priority::High,
            category: "Learning".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            created_at: at(10),
            updated_at: at(10),
        },
        Todo {
            id: demo_id("build-bff"),
            title: "Build BFF Architecture".to_string(),
            description: "Implement Backend for Frontend pattern".to_string(),
            completed: false,
            priority: Priority::Urgent,
            category: "Development".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 20),
            created_at: at(11),
            updated_at: at(11),
        },
        Todo {
            id: demo_id("frontend"),
            title: "Create Frontend".to_string(),
            description: "Build responsive UI for the todo app".to_string(),
            completed: true,
            priority: Priority::Medium,
            category: "Frontend".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 10),
            created_at: at(12),
            updated_at: at(12),
        },
    ]
}
