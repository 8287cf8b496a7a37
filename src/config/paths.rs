//! Path management for keeper-cli
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `KEEPER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/keeper-cli` or `~/.config/keeper-cli`
//! 3. Windows: `%APPDATA%\keeper-cli`

use std::path::PathBuf;

use crate::error::KeeperError;

/// Manages all paths used by keeper-cli
#[derive(Debug, Clone)]
pub struct KeeperPaths {
    /// Base directory for all keeper-cli data
    base_dir: PathBuf,
}

impl KeeperPaths {
    /// Create a new KeeperPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, KeeperError> {
        let base_dir = if let Ok(custom) = std::env::var("KEEPER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KeeperPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/keeper-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/keeper-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to bank_accounts.json
    pub fn bank_accounts_file(&self) -> PathBuf {
        self.data_dir().join("bank_accounts.json")
    }

    /// Get the path to money_tasks.json
    pub fn money_tasks_file(&self) -> PathBuf {
        self.data_dir().join("money_tasks.json")
    }

    /// Get the path to vaults.json
    pub fn vaults_file(&self) -> PathBuf {
        self.data_dir().join("vaults.json")
    }

    /// Get the path to vault_items.json
    pub fn vault_items_file(&self) -> PathBuf {
        self.data_dir().join("vault_items.json")
    }

    /// Get the path to todos.json
    pub fn todos_file(&self) -> PathBuf {
        self.data_dir().join("todos.json")
    }

    /// Get the path to diary.json
    pub fn diary_file(&self) -> PathBuf {
        self.data_dir().join("diary.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), KeeperError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KeeperError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KeeperError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if keeper-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, KeeperError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    KeeperError::Config("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("keeper-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, KeeperError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| KeeperError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("keeper-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.bank_accounts_file(),
            temp_dir.path().join("data").join("bank_accounts.json")
        );
        assert_eq!(
            paths.vault_items_file(),
            temp_dir.path().join("data").join("vault_items.json")
        );
    }

    #[test]
    fn test_not_initialized_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(!paths.is_initialized());
    }
}
