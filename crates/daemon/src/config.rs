//! Daemon configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Store directory path
    pub store_path: PathBuf,

    /// gRPC listen address
    pub grpc_listen: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Overdue node sweeping
    pub sweep: SweepConfig,

    /// Defaults applied to registering nodes
    pub defaults: NodeDefaults,

    /// Security configuration
    pub security: SecurityConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            store_path: meshcoord_common::default_store_path(),
            grpc_listen: "127.0.0.1:50051".to_string(),
            log_format: LogFormat::Text,
            sweep: SweepConfig::default(),
            defaults: NodeDefaults::default(),
            security: SecurityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Overdue sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Seconds between sweeps
    pub interval_secs: u64,

    /// A node is overdue after this many missed check-in intervals
    pub overdue_multiple: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            overdue_multiple: 3,
        }
    }
}

/// Fallbacks for node fields left unset by both the node and its network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
    pub check_in_interval_secs: u32,
    pub keepalive_secs: u32,
    pub listen_port: u16,

    /// Interface name prefix; the network name is appended
    pub interface_prefix: String,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            check_in_interval_secs: 30,
            keepalive_secs: 20,
            listen_port: 51821,
            interface_prefix: "nm-".to_string(),
        }
    }
}

impl NodeDefaults {
    /// Interface name for a node in `network`
    pub fn interface_for(&self, network: &str) -> String {
        format!("{}{}", self.interface_prefix, network)
    }
}

/// Security configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Bearer token required on the admin service when set
    pub admin_token: Option<String>,
}

impl DaemonConfig {
    /// Load configuration from file
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the database path
    pub fn db_path(&self) -> PathBuf {
        self.store_path.join("state.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DaemonConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.grpc_listen, "127.0.0.1:50051");
        assert_eq!(config.sweep.overdue_multiple, 3);
        assert_eq!(config.defaults.interface_for("lab"), "nm-lab");
    }

    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = DaemonConfig::default();
        config.store_path = dir.path().to_path_buf();
        config.log_format = LogFormat::Json;
        config.security.admin_token = Some("s3cret".to_string());
        config.save(&path).unwrap();

        let loaded = DaemonConfig::load(&path).unwrap();
        assert_eq!(loaded.log_format, LogFormat::Json);
        assert_eq!(loaded.security.admin_token.as_deref(), Some("s3cret"));
        assert_eq!(loaded.db_path(), dir.path().join("state.db"));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sweep]\ninterval_secs = 5\n").unwrap();

        let loaded = DaemonConfig::load(&path).unwrap();
        assert_eq!(loaded.sweep.interval_secs, 5);
        assert_eq!(loaded.sweep.overdue_multiple, 3);
        assert_eq!(loaded.defaults.listen_port, 51821);
    }
}
