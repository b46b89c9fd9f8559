use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Load `config.toml` from the data directory. A missing file yields the
/// defaults; an unparseable one is reported on stderr and also yields the
/// defaults, since a bad config must not keep a list from opening.
pub fn load_config(data_dir: &Path) -> Config {
    let path = data_dir.join("config.toml");
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(_) => return Config::default(),
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: ignoring {}: {}", path.display(), e);
            Config::default()
        }
    }
}
