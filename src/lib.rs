pub mod config;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod observability;
pub mod seed;
pub mod server;
pub mod service;
pub mod storage;

pub use error::{Result, TodoError};
pub use service::TodoService;
