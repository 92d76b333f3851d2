//! The general configuration settings for glimpse.
//!
//! This module defines the [General] struct for deserializing
//! general settings from the glimpse.toml configuration file
//! and the [InternalGeneral] struct for internal use within glimpse.
//!
//! It covers which entries are listed, in which order, and how far symlinks are followed.

use crate::utils::cli::Overrides;
use crate::utils::{DEFAULT_SYMLINK_DEPTH, clamp_symlink_depth};

use serde::Deserialize;

use std::collections::HashSet;
use std::sync::Arc;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct General {
    show_dotfiles: bool,
    dirs_first: bool,
    #[serde(default = "default_symlink_depth")]
    symlink_depth: usize,
    hidden_names: Vec<String>,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_dotfiles: true,
            dirs_first: true,
            symlink_depth: DEFAULT_SYMLINK_DEPTH,
            hidden_names: vec![
                ".DS_Store".to_string(),
                ".git".to_string(),
                ".gitignore".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct InternalGeneral {
    show_dotfiles: bool,
    dirs_first: bool,
    symlink_depth: usize,
    hidden_names: Arc<HashSet<String>>,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            show_dotfiles: g.show_dotfiles,
            dirs_first: g.dirs_first,
            symlink_depth: clamp_symlink_depth(g.symlink_depth),
            hidden_names: Arc::new(g.hidden_names.into_iter().collect()),
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn show_dotfiles(&self) -> bool {
        self.show_dotfiles
    }

    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.dirs_first
    }

    #[inline]
    pub fn symlink_depth(&self) -> usize {
        self.symlink_depth
    }

    #[inline]
    pub fn hidden_names(&self) -> &Arc<HashSet<String>> {
        &self.hidden_names
    }

    pub(crate) fn apply(&mut self, overrides: &Overrides) {
        if let Some(dotfiles) = overrides.show_dotfiles {
            self.show_dotfiles = dotfiles;
        }
    }
}

/// Helper function for default symlink_depth
fn default_symlink_depth() -> usize {
    DEFAULT_SYMLINK_DEPTH
}
