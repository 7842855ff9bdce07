use async_graphql::{Request, Variables};
use serde_json::{json, Value};
use std::sync::Arc;
use todo_bff::graphql::{create_schema, GraphQLSchema};
use todo_bff::seed::{demo_id, demo_todos};
use todo_bff::storage::InMemoryStorage;
use todo_bff::TodoService;

fn empty_schema() -> GraphQLSchema {
    create_schema(TodoService::new(Arc::new(InMemoryStorage::new())))
}

fn seeded_schema() -> GraphQLSchema {
    create_schema(TodoService::new(Arc::new(InMemoryStorage::with_todos(
        demo_todos(),
    ))))
}

/// Executes a request and returns (data, errors) as JSON
async fn run(schema: &GraphQLSchema, query: &str, variables: Value) -> (Value, Vec<Value>) {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    let body = serde_json::to_value(&response).unwrap();
    let errors = body
        .get("errors")
        .and_then(|e| e.as_array().cloned())
        .unwrap_or_default();
    (body["data"].clone(), errors)
}

async fn create(schema: &GraphQLSchema, input: Value) -> Value {
    let (data, errors) = run(
        schema,
        "mutation($input: CreateTodoInput!) {
            createTodo(input: $input) { id title description completed priority category dueDate createdAt updatedAt }
        }",
        json!({ "input": input }),
    )
    .await;
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    data["createTodo"].clone()
}

#[tokio::test]
async fn create_todo_applies_defaults() {
    let schema = empty_schema();
    let todo = create(&schema, json!({ "title": "  Write tests  " })).await;

    assert_eq!(todo["title"], "Write tests");
    assert_eq!(todo["description"], "");
    assert_eq!(todo["completed"], false);
    assert_eq!(todo["priority"], "MEDIUM");
    assert_eq!(todo["category"], "General");
    assert_eq!(todo["dueDate"], Value::Null);
    assert_eq!(todo["createdAt"], todo["updatedAt"]);
}

#[tokio::test]
async fn create_todo_rejects_invalid_titles() {
    let schema = empty_schema();
    let mutation = "mutation($input: CreateTodoInput!) { createTodo(input: $input) { id } }";

    let (_, errors) = run(&schema, mutation, json!({ "input": { "title": "   " } })).await;
    assert_eq!(errors[0]["message"], "Title is required");
    assert_eq!(errors[0]["extensions"]["code"], "BAD_USER_INPUT");

    let long = "x".repeat(101);
    let (_, errors) = run(&schema, mutation, json!({ "input": { "title": long } })).await;
    assert_eq!(errors[0]["message"], "Title must be less than 100 characters");

    let (data, _) = run(&schema, "{ todosCount }", json!({})).await;
    assert_eq!(data["todosCount"], 0);
}

#[tokio::test]
async fn todos_are_sorted_by_priority() {
    let schema = empty_schema();
    for (title, priority) in [("low", "LOW"), ("urgent", "URGENT"), ("high", "HIGH")] {
        create(&schema, json!({ "title": title, "priority": priority })).await;
    }

    let (data, errors) = run(&schema, "{ todos { priority } }", json!({})).await;
    assert!(errors.is_empty());
    let priorities: Vec<&str> = data["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["priority"].as_str().unwrap())
        .collect();
    assert_eq!(priorities, vec!["URGENT", "HIGH", "LOW"]);
}

#[tokio::test]
async fn filters_pagination_and_counts_agree() {
    let schema = seeded_schema();

    let (data, errors) = run(
        &schema,
        "{
            done: todos(filters: { completed: true }) { completed }
            open: todos(filters: { completed: false }) { completed }
            page: todos(pagination: { offset: 1, limit: 1 }) { title }
            completedTodosCount
            pendingTodosCount
            todosCount
            filtered: todosCount(filters: { completed: true })
        }",
        json!({}),
    )
    .await;
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    let done = data["done"].as_array().unwrap();
    assert!(done.iter().all(|t| t["completed"] == true));
    assert_eq!(done.len() as i64, data["completedTodosCount"].as_i64().unwrap());
    assert_eq!(
        data["open"].as_array().unwrap().len() as i64,
        data["pendingTodosCount"].as_i64().unwrap()
    );
    assert_eq!(data["todosCount"], 3);
    assert_eq!(data["filtered"], data["completedTodosCount"]);

    // URGENT "Build BFF Architecture" first, so the second item is the HIGH one
    assert_eq!(data["page"], json!([{ "title": "Learn GraphQL" }]));
}

#[tokio::test]
async fn negative_pagination_is_rejected() {
    let schema = seeded_schema();
    let (_, errors) = run(&schema, "{ todos(pagination: { limit: -1 }) { id } }", json!({})).await;
    assert!(!errors.is_empty());
}

#[tokio::test]
async fn category_filter_is_case_insensitive() {
    let schema = seeded_schema();
    let (data, _) = run(
        &schema,
        "{
            todosByCategory(category: \"DEVELOP\") { title }
            todos(filters: { category: \"end\" }) { category }
        }",
        json!({}),
    )
    .await;

    assert_eq!(
        data["todosByCategory"],
        json!([{ "title": "Build BFF Architecture" }])
    );
    assert_eq!(data["todos"], json!([{ "category": "Frontend" }]));
}

#[tokio::test]
async fn toggling_twice_restores_completion() {
    let schema = empty_schema();
    let todo = create(&schema, json!({ "title": "Flip" })).await;
    let id = todo["id"].as_str().unwrap();
    let toggle = "mutation($id: ID!) { toggleTodo(id: $id) { completed updatedAt } }";

    let (first, _) = run(&schema, toggle, json!({ "id": id })).await;
    assert_eq!(first["toggleTodo"]["completed"], true);
    let (second, _) = run(&schema, toggle, json!({ "id": id })).await;
    assert_eq!(second["toggleTodo"]["completed"], false);
}

#[tokio::test]
async fn update_todo_changes_only_supplied_fields() {
    let schema = empty_schema();
    let todo = create(
        &schema,
        json!({ "title": "Plan", "category": "Work", "dueDate": "2024-02-01" }),
    )
    .await;
    let id = todo["id"].as_str().unwrap();

    let (data, errors) = run(
        &schema,
        "mutation($id: ID!, $input: UpdateTodoInput!) {
            updateTodo(id: $id, input: $input) { id title category dueDate priority createdAt }
        }",
        json!({ "id": id, "input": { "title": "Plan sprint", "dueDate": null } }),
    )
    .await;
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    let updated = &data["updateTodo"];
    assert_eq!(updated["id"], todo["id"]);
    assert_eq!(updated["title"], "Plan sprint");
    assert_eq!(updated["category"], "Work");
    assert_eq!(updated["dueDate"], Value::Null);
    assert_eq!(updated["priority"], "MEDIUM");
    assert_eq!(updated["createdAt"], todo["createdAt"]);

    let (_, errors) = run(
        &schema,
        "mutation($id: ID!) { updateTodo(id: $id, input: { title: \" \" }) { id } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(errors[0]["message"], "Title cannot be empty");
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let schema = seeded_schema();
    let missing = uuid::Uuid::new_v4().to_string();

    for mutation in [
        "mutation($id: ID!) { deleteTodo(id: $id) }",
        "mutation($id: ID!) { toggleTodo(id: $id) { id } }",
        "mutation($id: ID!) { updateTodoPriority(id: $id, priority: LOW) { id } }",
    ] {
        let (_, errors) = run(&schema, mutation, json!({ "id": missing })).await;
        assert_eq!(errors[0]["message"], "Todo not found");
        assert_eq!(errors[0]["extensions"]["code"], "NOT_FOUND");
    }

    let (_, errors) = run(&schema, "{ todo(id: \"not-a-uuid\") { id } }", json!({})).await;
    assert_eq!(errors[0]["message"], "Todo not found");
}

#[tokio::test]
async fn fetches_single_todo_and_updates_priority() {
    let schema = seeded_schema();
    let id = demo_id("learn-graphql").to_string();

    let (data, _) = run(
        &schema,
        "query($id: ID!) { todo(id: $id) { title priority dueDate } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(
        data["todo"],
        json!({ "title": "Learn GraphQL", "priority": "HIGH", "dueDate": "2024-01-15" })
    );

    let (data, _) = run(
        &schema,
        "mutation($id: ID!) { updateTodoPriority(id: $id, priority: LOW) { priority } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["updateTodoPriority"]["priority"], "LOW");
}

#[tokio::test]
async fn bulk_mutations_continue_past_failures() {
    let schema = seeded_schema();
    let learn = demo_id("learn-graphql").to_string();
    let build = demo_id("build-bff").to_string();

    let (data, errors) = run(
        &schema,
        "mutation($ids: [ID!]!) { markTodosCompleted(ids: $ids) { id completed } }",
        json!({ "ids": [learn, "bogus", build] }),
    )
    .await;
    assert!(errors.is_empty());
    let completed = data["markTodosCompleted"].as_array().unwrap();
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|t| t["completed"] == true));

    let (data, _) = run(&schema, "{ pendingTodosCount }", json!({})).await;
    assert_eq!(data["pendingTodosCount"], 0);

    let (data, _) = run(
        &schema,
        "mutation($ids: [ID!]!) { deleteTodos(ids: $ids) }",
        json!({ "ids": [learn, "bogus"] }),
    )
    .await;
    assert_eq!(data["deleteTodos"], false);

    let (data, _) = run(
        &schema,
        "mutation($ids: [ID!]!) { deleteTodos(ids: $ids) }",
        json!({ "ids": [build] }),
    )
    .await;
    assert_eq!(data["deleteTodos"], true);

    let (data, _) = run(&schema, "{ todosCount }", json!({})).await;
    assert_eq!(data["todosCount"], 1);

    let (_, errors) = run(
        &schema,
        "mutation { markTodosCompleted(ids: []) { id } }",
        json!({}),
    )
    .await;
    assert_eq!(errors[0]["message"], "No todo IDs provided");
}

#[tokio::test]
async fn search_and_stats() {
    let schema = seeded_schema();

    let (data, errors) = run(
        &schema,
        "{
            searchTodos(term: \"backend\") { title }
            todoStats {
                total completed pending completionRate
                priorityStats { priority count }
                categoryStats { category count }
            }
        }",
        json!({}),
    )
    .await;
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    assert_eq!(
        data["searchTodos"],
        json!([{ "title": "Build BFF Architecture" }])
    );

    let stats = &data["todoStats"];
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["pending"], 2);
    let rate = stats["completionRate"].as_f64().unwrap();
    assert!((rate - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(
        stats["priorityStats"],
        json!([
            { "priority": "LOW", "count": 0 },
            { "priority": "MEDIUM", "count": 1 },
            { "priority": "HIGH", "count": 1 },
            { "priority": "URGENT", "count": 1 },
        ])
    );
    assert_eq!(
        stats["categoryStats"],
        json!([
            { "category": "Development", "count": 1 },
            { "category": "Frontend", "count": 1 },
            { "category": "Learning", "count": 1 },
        ])
    );
}

#[tokio::test]
async fn delete_then_count() {
    let schema = empty_schema();
    let todo = create(&schema, json!({ "title": "Temporary" })).await;

    let (data, _) = run(
        &schema,
        "mutation($id: ID!) { deleteTodo(id: $id) }",
        json!({ "id": todo["id"] }),
    )
    .await;
    assert_eq!(data["deleteTodo"], true);

    let (_, errors) = run(
        &schema,
        "mutation($id: ID!) { deleteTodo(id: $id) }",
        json!({ "id": todo["id"] }),
    )
    .await;
    assert_eq!(errors[0]["message"], "Todo not found");
}
