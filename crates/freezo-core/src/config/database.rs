//! Database configuration.

use serde::{Deserialize, Serialize};

/// SQLite record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (`sqlite://freezer.db`, `sqlite::memory:`).
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long a writer waits on a locked database, in milliseconds.
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_ms: u64,
    /// Use write-ahead logging.
    #[serde(default = "default_true")]
    pub wal: bool,
    /// Create the database file when it does not exist.
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            busy_timeout_ms: default_busy_timeout(),
            wal: true,
            create_if_missing: true,
        }
    }
}

impl DatabaseConfig {
    /// Build a configuration pointing at a database file on disk.
    pub fn for_path(path: &str) -> Self {
        Self {
            url: format!("sqlite://{path}"),
            ..Self::default()
        }
    }

    /// Whether the URL names a transient in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

fn default_url() -> String {
    "sqlite://freezer.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}
