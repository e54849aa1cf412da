use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sidebar: SidebarConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Number of files shown under "Recent"
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Maximum leading header lines skipped when placing a new task in a
    /// note that has no pending tasks yet
    #[serde(default = "default_header_skip")]
    pub header_skip: usize,
    #[serde(default = "default_true")]
    pub show_counters: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        SidebarConfig {
            recent_limit: default_recent_limit(),
            header_skip: default_header_skip(),
            show_counters: true,
        }
    }
}

fn default_recent_limit() -> usize {
    3
}

fn default_header_skip() -> usize {
    3
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot (e.g. `background = "#000000"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.sidebar.recent_limit, 3);
        assert_eq!(config.sidebar.header_skip, 3);
        assert!(config.sidebar.show_counters);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn partial_sidebar_section() {
        let config: Config = toml::from_str("[sidebar]\nrecent_limit = 5\n").unwrap();
        assert_eq!(config.sidebar.recent_limit, 5);
        assert_eq!(config.sidebar.header_skip, 3);
    }
}
