//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chatgrid/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatgridConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub username: Option<String>,
    pub frame_interval_ms: Option<u64>,
    pub userlist_width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomEntry {
    pub name: String,
    #[serde(default)]
    pub users: Vec<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_USERNAME: &str = "guest";
/// ~60 Hz.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
pub const DEFAULT_USERLIST_WIDTH: u16 = 20;
pub const DEFAULT_ROOM: &str = "lobby";
pub const DEFAULT_COLOR: Color = Color::Green;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub username: String,
    pub frame_interval_ms: u64,
    pub userlist_width: u16,
    pub theme: Theme,
    pub rooms: Vec<RoomEntry>,
}

/// Colors used by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Selected tab and user list entries.
    pub accent: Color,
    /// Username overlay in the chat pane.
    pub username: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: DEFAULT_COLOR,
            username: DEFAULT_COLOR,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(
            &ChatgridConfig::default(),
            &EnvOverrides::default(),
            &CliOverrides::default(),
        )
    }
}

/// Values taken from the environment. Unset or unparsable = not specified.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub username: Option<String>,
    pub frame_interval_ms: Option<u64>,
}

impl EnvOverrides {
    /// Read `CHATGRID_USERNAME` and `CHATGRID_FRAME_MS`.
    pub fn from_env() -> Self {
        let frame_interval_ms = std::env::var("CHATGRID_FRAME_MS").ok().and_then(|v| {
            v.parse()
                .map_err(|_| warn!("Ignoring CHATGRID_FRAME_MS={:?}: not a number", v))
                .ok()
        });
        Self {
            username: std::env::var("CHATGRID_USERNAME").ok(),
            frame_interval_ms,
        }
    }
}

/// Values given on the command line. Empty = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub username: Option<String>,
    pub rooms: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.chatgrid/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chatgrid").join("config.toml"))
}

/// Load config from `~/.chatgrid/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChatgridConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChatgridConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChatgridConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ChatgridConfig::default());
    }

    let config = load_config_from(&path)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<ChatgridConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# chatgrid configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# username = "guest"                 # Or set CHATGRID_USERNAME
# frame_interval_ms = 16             # Or set CHATGRID_FRAME_MS
# userlist_width = 20

# [theme]
# accent = "green"                   # Selected tab and user list
# username = "green"                 # Usernames in the chat pane

# [[rooms]]
# name = "lobby"
# users = ["alice", "bob"]
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// The environment is passed in as [`EnvOverrides`]; nothing here reads it.
pub fn resolve(
    config: &ChatgridConfig,
    env: &EnvOverrides,
    cli: &CliOverrides,
) -> ResolvedConfig {
    // Username: CLI → env → config → default
    let username = cli
        .username
        .clone()
        .or_else(|| env.username.clone())
        .or_else(|| config.general.username.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    // Frame interval: env → config → default
    let frame_interval_ms = env
        .frame_interval_ms
        .or(config.general.frame_interval_ms)
        .unwrap_or(DEFAULT_FRAME_INTERVAL_MS)
        .max(1);

    let userlist_width = config
        .general
        .userlist_width
        .unwrap_or(DEFAULT_USERLIST_WIDTH)
        .max(1);

    let theme = Theme {
        accent: resolve_color(config.theme.accent.as_deref()),
        username: resolve_color(config.theme.username.as_deref()),
    };

    let mut rooms = config.rooms.clone();
    for name in &cli.rooms {
        if !rooms.iter().any(|r| &r.name == name) {
            rooms.push(RoomEntry {
                name: name.clone(),
                users: Vec::new(),
            });
        }
    }
    if rooms.is_empty() {
        rooms.push(RoomEntry {
            name: DEFAULT_ROOM.to_string(),
            users: Vec::new(),
        });
    }

    ResolvedConfig {
        username,
        frame_interval_ms,
        userlist_width,
        theme,
        rooms,
    }
}

fn resolve_color(name: Option<&str>) -> Color {
    let Some(name) = name else {
        return DEFAULT_COLOR;
    };
    match Color::from_str(name) {
        Ok(color) => color,
        Err(_) => {
            warn!("Unknown color {:?}, falling back to {}", name, DEFAULT_COLOR);
            DEFAULT_COLOR
        }
    }
}
