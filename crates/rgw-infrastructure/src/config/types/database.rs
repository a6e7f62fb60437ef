//! Database configuration types

use serde::{Deserialize, Serialize};

/// Postgres/pgvector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection URL
    pub url: String,

    /// Connection pool size
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/rgw".to_string(),
            max_connections: 5,
        }
    }
}
