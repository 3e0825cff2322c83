//! Configuration and color scheme management for termo.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termo/config.toml`
//! - Built-in color schemes used by the `theme` command
//!
//! # Configuration File
//!
//! ```toml
//! # Session title (must be unique among active sessions)
//! title = "termo"
//!
//! # Prompt text, rendered green and followed by a space
//! prompt = "$"
//!
//! # Banner shown in italics when the session opens
//! welcome_message = "Welcome aboard"
//!
//! # Ring the terminal bell when a command runs
//! play_sound = true
//!
//! # Color scheme: dark, light, solarized-dark, solarized-light,
//! #               monokai, nord, dracula, gruvbox-dark, tokyo-night
//! color_scheme = "dark"
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::SessionOptions;

/// Version string from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session title
    pub title: String,
    /// Prompt text
    pub prompt: String,
    /// Welcome banner (None = default banner, "" = no banner)
    pub welcome_message: Option<String>,
    /// Audible feedback
    pub play_sound: bool,
    /// Color scheme name
    pub color_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "termo".to_string(),
            prompt: "$".to_string(),
            welcome_message: None,
            play_sound: true,
            color_scheme: "dark".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(content) => match Self::from_toml(&content) {
                        Ok(config) => return config,
                        Err(e) => warn!("Ignoring invalid config {}: {}", path.display(), e),
                    },
                    Err(e) => warn!("Failed to read config {}: {}", path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get the color scheme
    pub fn get_color_scheme(&self) -> ColorScheme {
        ColorScheme::by_name(&self.color_scheme)
    }

    /// Engine options derived from this configuration
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            title: self.title.clone(),
            prompt: self.prompt.clone(),
            welcome_message: self
                .welcome_message
                .clone()
                .unwrap_or_else(|| format!("Welcome to termo v{}", VERSION)),
        }
    }
}

/// Color definition (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, as used by OSC color sequences
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color scheme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub cursor: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    fn new(name: &str, foreground: Color, background: Color, cursor: Color) -> Self {
        Self {
            name: name.to_string(),
            foreground,
            background,
            cursor,
        }
    }

    /// Dark scheme (default)
    pub fn dark() -> Self {
        Self::new("dark", Color::new(255, 255, 255), Color::new(30, 30, 30), Color::new(255, 255, 255))
    }

    /// Light scheme
    pub fn light() -> Self {
        Self::new("light", Color::new(0, 0, 0), Color::new(255, 255, 255), Color::new(0, 0, 0))
    }

    /// Solarized Dark scheme
    pub fn solarized_dark() -> Self {
        Self::new("solarized-dark", Color::new(147, 161, 161), Color::new(0, 43, 54), Color::new(38, 139, 210))
    }

    /// Solarized Light scheme
    pub fn solarized_light() -> Self {
        Self::new("solarized-light", Color::new(101, 123, 131), Color::new(253, 246, 227), Color::new(38, 139, 210))
    }

    /// Monokai scheme
    pub fn monokai() -> Self {
        Self::new("monokai", Color::new(248, 248, 242), Color::new(39, 40, 34), Color::new(166, 226, 46))
    }

    /// Nord scheme
    pub fn nord() -> Self {
        Self::new("nord", Color::new(216, 222, 233), Color::new(46, 52, 64), Color::new(136, 192, 208))
    }

    /// Dracula scheme
    pub fn dracula() -> Self {
        Self::new("dracula", Color::new(248, 248, 242), Color::new(40, 42, 54), Color::new(189, 147, 249))
    }

    /// Gruvbox Dark scheme
    pub fn gruvbox_dark() -> Self {
        Self::new("gruvbox-dark", Color::new(235, 219, 178), Color::new(40, 40, 40), Color::new(215, 153, 33))
    }

    /// Tokyo Night scheme
    pub fn tokyo_night() -> Self {
        Self::new("tokyo-night", Color::new(169, 177, 214), Color::new(26, 27, 38), Color::new(122, 162, 247))
    }

    /// Get scheme by exact (case-insensitive) name or alias
    pub fn find(name: &str) -> Option<Self> {
        let scheme = match name.to_lowercase().as_str() {
            "dark" | "default" => Self::dark(),
            "light" => Self::light(),
            "solarized-dark" | "solarized_dark" => Self::solarized_dark(),
            "solarized-light" | "solarized_light" => Self::solarized_light(),
            "monokai" => Self::monokai(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "gruvbox-dark" | "gruvbox_dark" | "gruvbox" => Self::gruvbox_dark(),
            "tokyo-night" | "tokyo_night" | "tokyonight" => Self::tokyo_night(),
            _ => return None,
        };
        Some(scheme)
    }

    /// Get scheme by name, falling back to the default scheme
    pub fn by_name(name: &str) -> Self {
        Self::find(name).unwrap_or_default()
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec![
            "dark",
            "light",
            "solarized-dark",
            "solarized-light",
            "monokai",
            "nord",
            "dracula",
            "gruvbox-dark",
            "tokyo-night",
        ]
    }
}

/// `~/.termo`, created on demand
pub fn data_dir() -> Option<PathBuf> {
    let dir = home_dir()?.join(".termo");
    if !dir.exists() {
        let _ = fs::create_dir_all(&dir);
    }
    Some(dir)
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("prompt = \">\"\nplay_sound = false\n").unwrap();
        assert_eq!(config.prompt, ">");
        assert!(!config.play_sound);
        assert_eq!(config.title, "termo");
        assert_eq!(config.color_scheme, "dark");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        assert!(Config::from_toml("prompt = [").is_err());
    }

    #[test]
    fn test_session_options_welcome_message() {
        let options = Config::default().session_options();
        assert_eq!(options.welcome_message, format!("Welcome to termo v{}", VERSION));

        let config = Config {
            welcome_message: Some(String::new()),
            ..Config::default()
        };
        assert_eq!(config.session_options().welcome_message, "");
    }

    #[test]
    fn test_every_listed_scheme_resolves() {
        for name in ColorScheme::list() {
            assert_eq!(ColorScheme::find(name).map(|s| s.name), Some(name.to_string()));
        }
        assert!(ColorScheme::find("neon").is_none());
        assert_eq!(ColorScheme::by_name("neon").name, "dark");
        assert_eq!(ColorScheme::by_name("Tokyo_Night").name, "tokyo-night");
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::new(30, 30, 30).to_hex(), "#1e1e1e");
    }
}
