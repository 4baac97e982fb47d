pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pagination;
pub mod request;

pub use config::DatabaseConfig;
pub use db::create_pool;
pub use error::{Error, RequestError};
pub use pagination::{QueryHandle, apply_pagination_conditions};
pub use request::{PaginationConditions, SortOrder};
