//! Directory enumeration and the entry model for glimpse.
//!
//! Provides the [Entry] struct which is used for every listed row,
//! and the [browse_dir] function that builds them.
//! Symlinks own their resolved target as a nested [Entry], bounded by a depth limit.

use crate::core::error::GlimpseError;
use crate::core::kind::{CoarseType, FileKind, classify};

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Where a symlink leads.
#[derive(Debug, Clone)]
pub enum Link {
    /// The whole chain resolved within the depth bound.
    Resolved { target: PathBuf, entry: Box<Entry> },
    /// Missing, cyclic, or deeper than the bound. `target` is the raw link text.
    Unresolved { target: PathBuf },
}

/// Represents a single filesystem object of a listing.
/// Holds the name, the classification, permission bits and size.
/// Created by [Entry::load] and [browse_dir], read-only afterwards.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    path: PathBuf,
    kind: FileKind,
    coarse: CoarseType,
    mode: u32,
    size: u64,
    link: Option<Link>,
}

impl Entry {
    /// Load the entry at `path` without following it, resolving symlinks
    /// at most `max_depth` levels deep.
    pub fn load(path: &Path, max_depth: usize) -> Result<Self, GlimpseError> {
        Self::load_at(path, 0, max_depth)
    }

    fn load_at(path: &Path, depth: usize, max_depth: usize) -> Result<Self, GlimpseError> {
        let md = fs::symlink_metadata(path).map_err(|source| GlimpseError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let coarse = CoarseType::from(md.file_type());
        let mode = permission_bits(&md, &name);
        let kind = classify(&name, mode, coarse);

        let link = if coarse == CoarseType::Symlink {
            Some(if depth < max_depth {
                resolve_link(path, depth, max_depth)
            } else {
                Link::Unresolved {
                    target: fs::read_link(path).unwrap_or_default(),
                }
            })
        } else {
            None
        };

        Ok(Entry {
            name,
            path: path.to_path_buf(),
            kind,
            coarse,
            mode,
            size: md.len(),
            link,
        })
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    #[inline]
    pub fn coarse(&self) -> CoarseType {
        self.coarse
    }

    /// Permission triad, `0o000..=0o777`.
    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.kind.is_symlink()
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// True for directories and for symlinks whose chain ends in one.
    /// These get the trailing `/` marker.
    pub fn points_to_dir(&self) -> bool {
        match &self.link {
            Some(Link::Resolved { entry, .. }) => entry.points_to_dir(),
            Some(Link::Unresolved { .. }) => false,
            None => self.is_dir(),
        }
    }
}

/// Follow one link level. A chain that does not fully resolve is unresolved as a whole.
fn resolve_link(path: &Path, depth: usize, max_depth: usize) -> Link {
    let target = match fs::read_link(path) {
        Ok(t) => t,
        Err(e) => {
            log::debug!("read_link {}: {}", path.display(), e);
            return Link::Unresolved {
                target: PathBuf::new(),
            };
        }
    };

    let full = if target.is_absolute() {
        target.clone()
    } else {
        path.parent().unwrap_or_else(|| Path::new("")).join(&target)
    };

    let resolved = Entry::load_at(&full, depth + 1, max_depth).and_then(|entry| {
        if matches!(entry.link, Some(Link::Unresolved { .. })) {
            Err(GlimpseError::Unresolved {
                path: path.to_path_buf(),
            })
        } else {
            Ok(entry)
        }
    });

    match resolved {
        Ok(entry) => Link::Resolved {
            target,
            entry: Box::new(entry),
        },
        Err(e) => {
            log::debug!("{}", e);
            Link::Unresolved { target }
        }
    }
}

#[cfg(unix)]
fn permission_bits(md: &Metadata, _name: &str) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode() & 0o777
}

/// No mode bits off unix: read-only maps to `444`, executables by extension get `755`.
#[cfg(not(unix))]
fn permission_bits(md: &Metadata, name: &str) -> u32 {
    use crate::utils::with_lowered_stack;

    let mut mode = if md.permissions().readonly() { 0o444 } else { 0o644 };
    if md.is_dir() {
        mode |= 0o111;
    } else if let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) {
        with_lowered_stack(ext, |lowered| match lowered {
            "exe" | "com" | "bat" | "cmd" | "ps1" => mode |= 0o111,
            _ => {}
        })
    }
    mode
}

/// Reads the contents of the provided directory and returns them as entries.
/// Names whose metadata cannot be read are skipped.
/// # Returns
/// A Result containing the entries in directory order or an std::io::Error
/// if the directory itself cannot be read.
pub fn browse_dir(path: &Path, max_depth: usize) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(64);

    for dir_entry in fs::read_dir(path)? {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };

        match Entry::load(&dir_entry.path(), max_depth) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::debug!("skipping entry: {}", e),
        }
    }
    Ok(entries)
}
