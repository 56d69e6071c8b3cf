use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: PgPool,
}

/// Common methods for the primary database, extensions are implemented separately in every module.
impl Database {
    /// Connects to the database described by the config and runs pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to the database at {}:{}",
                    config.host, config.port
                )
            })?;

        Self::create(pool).await
    }

    /// Wraps an existing pool and runs pending migrations.
    pub async fn create(pool: PgPool) -> anyhow::Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| "Failed to migrate database")?;

        Ok(Database { pool })
    }
}
