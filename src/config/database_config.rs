use serde_derive::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

/// Default upper bound for the number of pooled Postgres connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 50;

/// Configuration for the Postgres database surprises are stored in.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseConfig {
    /// Name of the database to connect to.
    pub name: String,
    /// Hostname to use to connect to the database.
    pub host: String,
    /// Port to use to connect to the database.
    pub port: u16,
    /// Username to use to connect to the database.
    pub username: String,
    /// Maximum number of connections kept in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Optional password to use to connect to the database.
    pub password: Option<String>,
}

impl DatabaseConfig {
    /// Builds Postgres connection options, the password is only set if configured.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.name);
        match self.password {
            Some(ref password) => options.password(password),
            None => options,
        }
    }
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "surprises".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            password: None,
        }
    }
}
