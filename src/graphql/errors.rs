use crate::error::TodoError;
use async_graphql::{Error, ErrorExtensions};
use tracing::{debug, error};

impl ErrorExtensions for TodoError {
    fn extend(&self) -> Error {
        let code = self.code();
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            match self {
                TodoError::NotFound { id } => e.set("id", id.as_str()),
                TodoError::TitleTooLong { length } => e.set("length", *length as i64),
                _ => {}
            }
        })
    }
}

/// Logs a service error at a level matching its cause and converts it for
/// the GraphQL response.
pub fn field_error(err: TodoError) -> Error {
    if err.is_user_error() {
        debug!("Rejected request: {}", err);
    } else {
        error!("Request failed: {}", err);
    }
    err.extend()
}

/// Converts a domain count into a GraphQL `Int`, saturating at `i32::MAX`.
pub fn to_graphql_int(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
