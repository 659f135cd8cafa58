//! # Config Module
//!
//! Display configuration: a colors flag plus the five status icons. User
//! overrides live in a small JSON file and overlay the built-in defaults one
//! level deep; a missing or malformed file silently yields the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The five icon slots the status line draws from. A fixed struct rather than
/// an open mapping, so a typo in an override file fails the parse instead of
/// being silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub clean: String,
    pub dirty: String,
    pub ahead: String,
    pub behind: String,
    pub high_usage: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            clean: "✅".to_string(),
            dirty: "🚧".to_string(),
            ahead: "⇡".to_string(),
            behind: "⇣".to_string(),
            high_usage: "⚠️".to_string(),
        }
    }
}

/// Resolved display preferences, constructed once at startup and passed to
/// the formatter by reference.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub colors: bool,
    pub icons: IconSet,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            icons: IconSet::default(),
        }
    }
}

impl DisplayConfig {
    fn apply(&mut self, over: ConfigOverride) {
        if let Some(colors) = over.colors {
            self.colors = colors;
        }
        if let Some(icons) = over.icons {
            if let Some(v) = icons.clean {
                self.icons.clean = v;
            }
            if let Some(v) = icons.dirty {
                self.icons.dirty = v;
            }
            if let Some(v) = icons.ahead {
                self.icons.ahead = v;
            }
            if let Some(v) = icons.behind {
                self.icons.behind = v;
            }
            if let Some(v) = icons.high_usage {
                self.icons.high_usage = v;
            }
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigOverride {
    colors: Option<bool>,
    icons: Option<IconOverride>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct IconOverride {
    clean: Option<String>,
    dirty: Option<String>,
    ahead: Option<String>,
    behind: Option<String>,
    high_usage: Option<String>,
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dirs) = directories::BaseDirs::new() {
        candidates.push(dirs.config_dir().join("statusline").join("config.json"));
        candidates.push(dirs.home_dir().join(".statusline.json"));
    }
    candidates
}

/// Load the display config. An explicit path (from `--config` or the env)
/// is consulted exclusively; otherwise the default candidate paths are tried
/// in order. The first readable file decides; if it does not parse, the
/// defaults win.
pub fn load_display_config(explicit: Option<&Path>) -> DisplayConfig {
    let candidates = match explicit {
        Some(p) => vec![p.to_path_buf()],
        None => default_candidates(),
    };

    let mut config = DisplayConfig::default();
    for path in candidates {
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };
        if let Ok(over) = serde_json::from_str::<ConfigOverride>(&content) {
            config.apply(over);
        }
        break;
    }
    config
}

/// Final colors decision: the config flag, gated by `--no-color` and the
/// conventional `NO_COLOR` environment variable.
pub fn effective_colors(config: &DisplayConfig, no_color_flag: bool, no_color_env: bool) -> bool {
    config.colors && !no_color_flag && !no_color_env
}
