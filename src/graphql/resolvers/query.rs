use crate::domain::{Pagination, TodoFilters};
use crate::graphql::errors::{field_error, to_graphql_int};
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{PaginationInput, Todo, TodoFiltersInput, TodoStats};
use async_graphql::{Context, FieldResult, Object, ID};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Todos matching the filters, most urgent first, then newest first
    async fn todos(
        &self,
        ctx: &Context<'_>,
        filters: Option<TodoFiltersInput>,
        pagination: Option<PaginationInput>,
    ) -> FieldResult<Vec<Todo>> {
        let context = ctx.data::<GraphQLContext>()?;
        let filters: TodoFilters = filters.map(Into::into).unwrap_or_default();
        let pagination: Pagination = pagination.map(Into::into).unwrap_or_default();

        match context.service.list_todos(&filters, &pagination).await {
            Ok(todos) => Ok(todos.into_iter().map(Todo::from).collect()),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Get a todo by ID
    async fn todo(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Todo> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.get_todo(&id).await {
            Ok(todo) => Ok(todo.into()),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Number of todos matching the filters, ignoring pagination
    async fn todos_count(
        &self,
        ctx: &Context<'_>,
        filters: Option<TodoFiltersInput>,
    ) -> FieldResult<i32> {
        let context = ctx.data::<GraphQLContext>()?;
        let filters: TodoFilters = filters.map(Into::into).unwrap_or_default();

        match context.service.count_todos(&filters).await {
            Ok(count) => Ok(to_graphql_int(count)),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Todos whose category contains the given text, case-insensitively
    async fn todos_by_category(&self, ctx: &Context<'_>, category: String) -> FieldResult<Vec<Todo>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.todos_by_category(&category).await {
            Ok(todos) => Ok(todos.into_iter().map(Todo::from).collect()),
            Err(e) => Err(field_error(e)),
        }
    }

    async fn completed_todos_count(&self, ctx: &Context<'_>) -> FieldResult<i32> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.completed_count().await {
            Ok(count) => Ok(to_graphql_int(count)),
            Err(e) => Err(field_error(e)),
        }
    }

    async fn pending_todos_count(&self, ctx: &Context<'_>) -> FieldResult<i32> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.pending_count().await {
            Ok(count) => Ok(to_graphql_int(count)),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Search titles, descriptions and categories
    async fn search_todos(&self, ctx: &Context<'_>, term: String) -> FieldResult<Vec<Todo>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.search_todos(&term).await {
            Ok(todos) => Ok(todos.into_iter().map(Todo::from).collect()),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Dashboard statistics
    async fn todo_stats(&self, ctx: &Context<'_>) -> FieldResult<TodoStats> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.stats().await {
            Ok(stats) => Ok(stats.into()),
            Err(e) => Err(field_error(e)),
        }
    }
}
