//! Error taxonomy for glimpse.
//!
//! Every variant maps to one degraded rendering. None of them aborts a listing:
//! the row layer logs the error at debug level and prints whatever is left.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GlimpseError {
    /// `lstat` failed on an enumerated name. The entry is skipped.
    #[error("cannot read metadata of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or decoding the content failed. The row shows no summary.
    #[error("cannot summarize {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// Symlink target missing, cyclic or deeper than the configured bound.
    #[error("cannot resolve symlink {}", .path.display())]
    Unresolved { path: PathBuf },

    /// git missing or failing. Disables status markers for the whole run.
    #[error("version control unavailable: {0}")]
    VcsUnavailable(String),
}

impl GlimpseError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        GlimpseError::Unreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
