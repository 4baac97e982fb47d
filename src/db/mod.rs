pub mod campaigns;
pub mod event_logs;
pub mod events;
pub mod referees;
pub mod referrers;
pub mod rewards;

use std::str::FromStr;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, QueryTrait, Select};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{Error, RequestError};
use crate::pagination::{PaginatedColumns, apply_pagination_conditions};
use crate::request::PaginationConditions;

/// Create a SeaORM connection pool from `config`.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;
    info!(
        max_connections = config.max_connections,
        "Connected to database"
    );
    Ok(db)
}

/// Resolve the sort column of `conditions` for `E` and compose them onto
/// `query`.
pub fn paginate<E>(
    query: Select<E>,
    conditions: &PaginationConditions,
) -> Result<Select<E>, RequestError>
where
    E: EntityTrait,
    E::Column: PaginatedColumns + FromStr,
{
    let conditions = conditions.resolve::<E::Column>()?;
    Ok(apply_pagination_conditions(query, &conditions))
}

/// Execute a composed listing query.
pub(crate) async fn fetch<E, C>(db: &C, query: Select<E>) -> Result<Vec<E::Model>, Error>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    debug!(sql = %query.build(db.get_database_backend()), "Executing list query");
    Ok(query.all(db).await?)
}
