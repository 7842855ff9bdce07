use crate::graphql::resolvers::{Mutation, Query};
use crate::service::TodoService;
use async_graphql::{EmptySubscription, Schema};

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub service: TodoService,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema backed by the given service
pub fn create_schema(service: TodoService) -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext { service })
        .finish()
}

/// SDL of the schema, independent of any runtime data
pub fn schema_sdl() -> String {
    Schema::build(Query, Mutation, EmptySubscription)
        .finish()
        .sdl()
}
