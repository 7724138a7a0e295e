//! Optional settings loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Settings a user can persist instead of repeating flags. Flags always win
/// over file values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Bytes read per scan window.
    pub window_size: Option<usize>,
    /// Default cap on printed matches.
    pub limit: Option<usize>,
}

impl Config {
    /// Load settings from `path`, or from the default location when no path
    /// is given. A missing file yields defaults; an unreadable or invalid
    /// file yields defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(default_path) else {
            return Self::default();
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(config) => {
                debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("procgrep").join("config.toml"))
}
