pub mod models;
pub mod services;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::server::config::ServerConfig;

/// Builds the connection pool. Each request checks a connection out for the
/// duration of its single insert; the pool owns the connection lifecycle.
/// A server-side statement timeout is applied to every connection.
pub async fn connect(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    let statement_timeout = config.db_statement_timeout.as_millis().to_string();
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .options([("statement_timeout", statement_timeout.as_str())]);

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
}
