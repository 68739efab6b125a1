//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/strand/config.yaml`

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Width of a tab stop in render columns
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,
    /// How many times Ctrl-Q must be pressed to quit with unsaved changes
    #[serde(default = "default_quit_times")]
    pub quit_times: usize,
}

fn default_tab_stop() -> usize {
    4
}

fn default_quit_times() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            quit_times: default_quit_times(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tab_stop, 4);
        assert_eq!(config.quit_times, 3);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("tab_stop: 8").unwrap();
        assert_eq!(config.tab_stop, 8);
        assert_eq!(config.quit_times, 3);
    }
}
