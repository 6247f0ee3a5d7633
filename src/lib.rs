pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod prompt;
pub mod search;

pub use config::{Config, ConfigSource, EnvSource};
pub use error::{Error, Result, ServerError};
pub use models::{ResultItem, SearchRequest, SearchResult};
pub use search::SearchClient;
