//! Listing printer.
//!
//! Reads the directory, filters and sorts it, asks git once, then writes the
//! optional branch header and one row per entry. Styling is applied here and
//! nowhere else.

use crate::config::Config;
use crate::core::{Formatter, VcsStatus, browse_dir};
use crate::ui::row::RowAssembler;
use crate::ui::style::{StyleTag, StyledLine};
use crate::utils::sanitize_name;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Print the listing of `dir` into `out`.
///
/// `width` is the row width in columns, `color` turns escape codes on.
/// Only failing to read `dir` itself or to write `out` is an error.
pub fn print_listing<W: Write>(
    out: &mut W,
    dir: &Path,
    config: &Config,
    width: usize,
    color: bool,
) -> io::Result<()> {
    let general = config.general();
    let theme = config.theme();

    let mut entries = browse_dir(dir, general.symlink_depth())?;
    let formatter = Formatter::new(
        general.dirs_first(),
        general.show_dotfiles(),
        Arc::clone(general.hidden_names()),
    );
    formatter.filter_entries(&mut entries);

    let vcs = probe_vcs(dir, config);
    if let Some(header) = vcs.as_ref().and_then(|status| header_line(status, width)) {
        writeln!(out, "{}", theme.paint(&header, color))?;
    }

    let rows = RowAssembler::new(config, vcs.as_ref(), width);
    for entry in &entries {
        writeln!(out, "{}", theme.paint(&rows.assemble(entry), color))?;
    }
    out.flush()
}

/// Git status for `dir`, or `None` when disabled, not a repository, or git fails.
fn probe_vcs(dir: &Path, config: &Config) -> Option<VcsStatus> {
    if !config.display().vcs_status() {
        return None;
    }
    if !dir.join(".git").exists() {
        log::debug!("{} is not a git work tree root", dir.display());
        return None;
    }
    match VcsStatus::probe(dir) {
        Ok(status) => Some(status),
        Err(e) => {
            log::debug!("vcs disabled for this run: {}", e);
            None
        }
    }
}

/// `<branch>: <subject> (<time>)`, clipped to `width`.
fn header_line(status: &VcsStatus, width: usize) -> Option<StyledLine> {
    let branch = status.branch()?;
    let mut line = StyledLine::new();
    line.push(sanitize_name(branch), StyleTag::Branch);
    if let Some(change) = status.last_change() {
        line.push_raw(": ");
        line.push_raw(sanitize_name(&change.to_string()));
    }
    Some(line.clipped(width))
}
