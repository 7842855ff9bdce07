use crate::domain::Priority;
use crate::graphql::errors::field_error;
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{CreateTodoInput, Todo, UpdateTodoInput};
use async_graphql::{Context, FieldResult, Object, ID};

/// Root mutation object for GraphQL
pub struct Mutation;

#[Object]
impl Mutation {
    async fn create_todo(&self, ctx: &Context<'_>, input: CreateTodoInput) -> FieldResult<Todo> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.create_todo(input.into()).await {
            Ok(todo) => Ok(todo.into()),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Update the supplied fields of a todo
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateTodoInput,
    ) -> FieldResult<Todo> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.update_todo(&id, input.into()).await {
            Ok(todo) => Ok(todo.into()),
            Err(e) => Err(field_error(e)),
        }
    }

    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> FieldResult<bool> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.delete_todo(&id).await {
            Ok(deleted) => Ok(deleted),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Flip the completion flag
    async fn toggle_todo(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Todo> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.toggle_todo(&id).await {
            Ok(todo) => Ok(todo.into()),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Mark several todos completed; unknown IDs are skipped
    async fn mark_todos_completed(&self, ctx: &Context<'_>, ids: Vec<ID>) -> FieldResult<Vec<Todo>> {
        let context = ctx.data::<GraphQLContext>()?;

        let ids: Vec<String> = ids.into_iter().map(|id| id.0).collect();

        match context.service.mark_todos_completed(&ids).await {
            Ok(todos) => Ok(todos.into_iter().map(Todo::from).collect()),
            Err(e) => Err(field_error(e)),
        }
    }

    /// Delete several todos; true only if every one was deleted
    async fn delete_todos(&self, ctx: &Context<'_>, ids: Vec<ID>) -> FieldResult<bool> {
        let context = ctx.data::<GraphQLContext>()?;

        let ids: Vec<String> = ids.into_iter().map(|id| id.0).collect();

        match context.service.delete_todos(&ids).await {
            Ok(all_deleted) => Ok(all_deleted),
            Err(e) => Err(field_error(e)),
        }
    }

    async fn update_todo_priority(
        &self,
        ctx: &Context<'_>,
        id: ID,
        priority: Priority,
    ) -> FieldResult<Todo> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.service.update_todo_priority(&id, priority).await {
            Ok(todo) => Ok(todo.into()),
            Err(e) => Err(field_error(e)),
        }
    }
}
