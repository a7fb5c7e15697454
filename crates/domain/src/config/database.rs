use serde::{Deserialize, Serialize};

/// The record store is the one mandatory external resource: a SQLite file
/// populated out-of-band, opened once at startup in read-only mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_read_pool_max_connections")]
    pub read_pool_max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            read_pool_max_connections: default_read_pool_max_connections(),
        }
    }
}

fn default_db_path() -> String {
    "./records.db".to_string()
}

fn default_read_pool_max_connections() -> u32 {
    8
}
