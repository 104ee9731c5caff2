//! Store configuration.

use std::path::PathBuf;

/// Environment variable overriding the database location.
pub const DATABASE_PATH_VAR: &str = "LINGO_DATABASE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl StoreConfig {
    /// Read configuration from the environment, loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = lookup(DATABASE_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);
        Self { database_path }
    }
}

fn default_database_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lingo-deck")
        .join("lingo.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StoreConfig::from_lookup(|name| {
            (name == DATABASE_PATH_VAR).then(|| "/tmp/words.db".to_string())
        });
        assert_eq!(config.database_path, PathBuf::from("/tmp/words.db"));
    }

    #[test]
    fn blank_path_falls_back_to_default() {
        let config = StoreConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, StoreConfig::default());
        assert!(config.database_path.ends_with("lingo-deck/lingo.db"));
    }
}
