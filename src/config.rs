// ⚙️ Runtime Configuration - store selection and server settings
//
// Resolution order per setting is CLI flag, then PLAN_CATALOG_* variable,
// then the built-in default. The CLI and the HTTP server share this
// resolver so both always agree on where the catalog lives.

use crate::store::{FileStore, PackageStore, SqliteStore};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable selecting the storage backend (`file` or `sqlite`).
pub const ENV_STORE: &str = "PLAN_CATALOG_STORE";
/// Environment variable overriding the store path.
pub const ENV_PATH: &str = "PLAN_CATALOG_PATH";
/// Environment variable overriding the HTTP port.
pub const ENV_PORT: &str = "PLAN_CATALOG_PORT";

/// Port the catalog server binds when nothing else is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Which persistence backend holds the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Pretty-printed JSON array on disk. The default.
    File,
    /// SQLite database with a save-event audit trail.
    Sqlite,
}

impl StoreBackend {
    pub fn tag(&self) -> &'static str {
        match self {
            StoreBackend::File => "file",
            StoreBackend::Sqlite => "sqlite",
        }
    }

    pub fn from_tag(tag: &str) -> Option<StoreBackend> {
        match tag.trim().to_lowercase().as_str() {
            "file" => Some(StoreBackend::File),
            "sqlite" => Some(StoreBackend::Sqlite),
            _ => None,
        }
    }

    /// Where the catalog lives when no path is configured.
    pub fn default_path(&self) -> PathBuf {
        match self {
            StoreBackend::File => PathBuf::from("data/packages.json"),
            StoreBackend::Sqlite => PathBuf::from("data/packages.db"),
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: StoreBackend,
    pub store_path: PathBuf,
    pub port: u16,
}

impl Config {
    /// Build a config from CLI flags and the environment.
    pub fn resolve(cli_backend: Option<StoreBackend>, cli_path: Option<PathBuf>) -> Result<Config> {
        let backend = match cli_backend {
            Some(backend) => backend,
            None => match env::var(ENV_STORE) {
                Ok(raw) => match StoreBackend::from_tag(&raw) {
                    Some(backend) => backend,
                    None => bail!("{} must be 'file' or 'sqlite', got '{}'", ENV_STORE, raw),
                },
                Err(_) => StoreBackend::File,
            },
        };

        let store_path = cli_path
            .or_else(|| env::var(ENV_PATH).ok().map(PathBuf::from))
            .unwrap_or_else(|| backend.default_path());

        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got '{}'", ENV_PORT, raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            backend,
            store_path,
            port,
        })
    }

    /// Open the configured store, creating it on first use.
    pub fn open_store(&self) -> Result<Box<dyn PackageStore>> {
        match self.backend {
            StoreBackend::File => Ok(Box::new(FileStore::new(&self.store_path))),
            StoreBackend::Sqlite => Ok(Box::new(SqliteStore::open(&self.store_path)?)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_tags() {
        assert_eq!(StoreBackend::from_tag("file"), Some(StoreBackend::File));
        assert_eq!(StoreBackend::from_tag("SQLite"), Some(StoreBackend::Sqlite));
        assert_eq!(StoreBackend::from_tag(" sqlite "), Some(StoreBackend::Sqlite));
        assert_eq!(StoreBackend::from_tag("postgres"), None);
        assert_eq!(StoreBackend::File.tag(), "file");
        assert_eq!(StoreBackend::Sqlite.tag(), "sqlite");
    }

    #[test]
    fn test_default_paths_differ_by_backend() {
        assert_eq!(
            StoreBackend::File.default_path(),
            PathBuf::from("data/packages.json")
        );
        assert_eq!(
            StoreBackend::Sqlite.default_path(),
            PathBuf::from("data/packages.db")
        );
    }

    // resolve() reads process-wide variables, so every resolve() call lives
    // in this single test. Parallel test threads never race on the env.
    #[test]
    fn test_resolve_priority_and_validation() {
        env::remove_var(ENV_STORE);
        env::remove_var(ENV_PATH);
        env::remove_var(ENV_PORT);

        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.backend, StoreBackend::File);
        assert_eq!(config.store_path, StoreBackend::File.default_path());
        assert_eq!(config.port, DEFAULT_PORT);

        let config = Config::resolve(Some(StoreBackend::Sqlite), None).unwrap();
        assert_eq!(config.backend, StoreBackend::Sqlite);
        assert_eq!(
            config.store_path,
            StoreBackend::Sqlite.default_path(),
            "path default should follow the chosen backend"
        );

        env::set_var(ENV_STORE, "sqlite");
        env::set_var(ENV_PATH, "/tmp/env-packages.db");
        env::set_var(ENV_PORT, "4777");
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.backend, StoreBackend::Sqlite);
        assert_eq!(config.store_path, PathBuf::from("/tmp/env-packages.db"));
        assert_eq!(config.port, 4777);

        // Flags beat the environment
        let config =
            Config::resolve(Some(StoreBackend::File), Some(PathBuf::from("x.json"))).unwrap();
        assert_eq!(config.backend, StoreBackend::File);
        assert_eq!(config.store_path, PathBuf::from("x.json"));

        env::set_var(ENV_PORT, "not-a-port");
        assert!(Config::resolve(None, None).is_err());
        env::set_var(ENV_PORT, "4777");

        env::set_var(ENV_STORE, "postgres");
        assert!(Config::resolve(None, None).is_err());

        env::remove_var(ENV_STORE);
        env::remove_var(ENV_PATH);
        env::remove_var(ENV_PORT);
    }

    #[test]
    fn test_open_store_file_backend_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            backend: StoreBackend::File,
            store_path: dir.path().join("packages.json"),
            port: DEFAULT_PORT,
        };

        let mut store = config.open_store().unwrap();
        let defaults = crate::catalog::default_packages();
        store.save(&defaults).unwrap();
        assert_eq!(store.load().unwrap().len(), defaults.len());
    }

    #[test]
    fn test_open_store_sqlite_backend_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            backend: StoreBackend::Sqlite,
            store_path: dir.path().join("packages.db"),
            port: DEFAULT_PORT,
        };

        let mut store = config.open_store().unwrap();
        let defaults = crate::catalog::default_packages();
        store.save(&defaults).unwrap();
        assert_eq!(store.load().unwrap().len(), defaults.len());
    }
}
