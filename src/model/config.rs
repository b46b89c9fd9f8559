use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User configuration, read from `config.toml` in the data directory.
/// Every field has a default so a partial (or absent) file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Write the list back after every mutating command, not just on quit.
    #[serde(default = "default_autosave")]
    pub autosave: bool,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_autosave() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            autosave: true,
            ui: UiConfig::default(),
        }
    }
}

/// Display options under `[ui]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides under `[ui.colors]`, e.g. `cursor = "#44DDFF"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
