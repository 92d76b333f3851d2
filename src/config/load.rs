//! The main config loading module for glimpse.
//!
//! Handles loading and deserializing settings from `glimpse.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal [RawConfig] used for parsing and processing.
//!
//! Also implements default config generation for `gls --init`.

use crate::config::Display;
use crate::config::Theme;
use crate::config::{General, InternalGeneral};
use crate::utils::cli::Overrides;
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file.
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
}

/// Main configuration struct for glimpse
/// This struct holds the processed configuration options and is passed
/// explicitly to everything that renders rows.
#[derive(Debug, Clone)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
}

/// Conversion from RawConfig to Config
/// This handles any necessary processing of the raw values
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme,
        }
    }
}

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using internal defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::debug!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        self.general.apply(overrides);
        self.display.apply(overrides);
        self
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Determine the default configuration file path.
    /// Checks the GLIMPSE_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/glimpse/glimpse.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("GLIMPSE_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("glimpse/glimpse.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/glimpse/glimpse.toml");
        }
        PathBuf::from("glimpse.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

pub(crate) const DEFAULT_TOML: &str = r##"# glimpse.toml - default configuration for glimpse

# Note:
# Commented values are the internal defaults of glimpse
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

# Which entries are listed
[general]
# show_dotfiles = true
# dirs_first = true
# symlink_depth = 1          # how many links of a chain are followed (1..=8)
# hidden_names = [".DS_Store", ".git", ".gitignore"]

# Which fields each row shows
[display]
# owner_permissions = false
# group_permissions = false
# other_permissions = false
# size = false
# vcs_status = true
# content_summary = true
# fallback_width = 80        # used when the terminal width cannot be queried

[theme]
# directory = "blue"
# symlink = "blue"
# executable = "green"
# text = "yellow"
# program = "cyan"
# makefile = "magenta"
# dotfile = "darkgray"
# unresolved = "red"
# badge = "magenta"
# branch = "cyan"
"##;
