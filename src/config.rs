/// Application configuration
///
/// Resolved once at startup from environment variables, falling back to
/// the platform directories:
/// - `NINERS_DATA_DIR`: where the preference database lives
///   (default: the user's data directory + "niners-gameday")
/// - `NINERS_ASSETS_DIR`: where image assets are looked up (default: ./assets)

use std::path::PathBuf;

const APP_DIR_NAME: &str = "niners-gameday";
const DB_FILE_NAME: &str = "niners_gameday.db";

pub const DATA_DIR_ENV: &str = "NINERS_DATA_DIR";
pub const ASSETS_DIR_ENV: &str = "NINERS_ASSETS_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let assets_dir = lookup(ASSETS_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"));

        Self {
            data_dir,
            assets_dir,
        }
    }

    /// Path of the preference database file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

/// The data directory is:
/// - Linux: ~/.local/share/niners-gameday
/// - macOS: ~/Library/Application Support/niners-gameday
/// - Windows: %APPDATA%\niners-gameday
fn default_data_dir() -> PathBuf {
    let base = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| {
            tracing::warn!("could not determine user data directory, using current directory");
            PathBuf::from(".")
        });

    base.join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(|name| match name {
            DATA_DIR_ENV => Some("/tmp/niners".to_string()),
            ASSETS_DIR_ENV => Some("/opt/niners/assets".to_string()),
            _ => None,
        });

        assert_eq!(config.data_dir, PathBuf::from("/tmp/niners"));
        assert_eq!(config.assets_dir, PathBuf::from("/opt/niners/assets"));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/niners/niners_gameday.db"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);

        assert!(config.data_dir.ends_with(APP_DIR_NAME));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.db_path().ends_with(DB_FILE_NAME));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = AppConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.data_dir.ends_with(APP_DIR_NAME));
    }
}
