//! Display configuration options for glimpse
//!
//! This module defines which fields each row shows, read from the `[display]`
//! table of the glimpse.toml configuration file.

use crate::core::WidthBudget;
use crate::utils::cli::Overrides;

use serde::Deserialize;

/// Display configuration options
///
/// Toggles for the fixed-width fields in front of each name and for the
/// content summary after it, plus the width used when the terminal cannot be queried.
/// Default values are provided for all options so partial files keep working.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Display {
    owner_permissions: bool,
    group_permissions: bool,
    other_permissions: bool,
    size: bool,
    vcs_status: bool,
    content_summary: bool,
    fallback_width: usize,
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn owner_permissions(&self) -> bool {
        self.owner_permissions
    }

    pub fn group_permissions(&self) -> bool {
        self.group_permissions
    }

    pub fn other_permissions(&self) -> bool {
        self.other_permissions
    }

    /// Any of the three permission columns is enabled.
    pub fn permissions(&self) -> bool {
        self.owner_permissions || self.group_permissions || self.other_permissions
    }

    pub fn size(&self) -> bool {
        self.size
    }

    pub fn vcs_status(&self) -> bool {
        self.vcs_status
    }

    pub fn content_summary(&self) -> bool {
        self.content_summary
    }

    pub fn fallback_width(&self) -> usize {
        self.fallback_width
    }

    /// Apply command-line overrides on top of the file values.
    pub(crate) fn apply(&mut self, overrides: &Overrides) {
        if let Some(perms) = overrides.permissions {
            self.owner_permissions = perms;
            self.group_permissions = perms;
            self.other_permissions = perms;
        }
        if let Some(size) = overrides.size {
            self.size = size;
        }
        if let Some(vcs) = overrides.vcs_status {
            self.vcs_status = vcs;
        }
        if let Some(summary) = overrides.content_summary {
            self.content_summary = summary;
        }
    }
}

/// Default display configuration options
impl Default for Display {
    fn default() -> Self {
        Display {
            owner_permissions: false,
            group_permissions: false,
            other_permissions: false,
            size: false,
            vcs_status: true,
            content_summary: true,
            fallback_width: WidthBudget::FALLBACK_WIDTH,
        }
    }
}
