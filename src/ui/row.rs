//! One output row per entry.
//!
//! [RowAssembler] emits the fixed-width fields (permissions, size, git status),
//! the name block, and hands whatever columns are left to the [FitRenderer].
//! Every field is paid for out of a fresh [WidthBudget] per row.

use crate::config::Config;
use crate::core::{
    Entry, Link, VcsStatus, WidthBudget, format_permissions, format_size_parts, summarize,
};
use crate::ui::fit::FitRenderer;
use crate::ui::style::{StyleTag, StyledLine};
use crate::utils::sanitize_name;

use std::path::Path;

/// Separates a symlink from its target.
pub const ARROW: &str = " -> ";
/// Appended to directories holding a `.git` entry.
pub const REPO_BADGE: &str = " (git repo)";
const DIR_MARKER: &str = "/";

/// Builds rows for one listing. Holds no per-row state.
pub struct RowAssembler<'a> {
    config: &'a Config,
    vcs: Option<&'a VcsStatus>,
    width: usize,
}

impl<'a> RowAssembler<'a> {
    /// `vcs` is `None` when git augmentation is off or unavailable for this run.
    pub fn new(config: &'a Config, vcs: Option<&'a VcsStatus>, width: usize) -> Self {
        Self { config, vcs, width }
    }

    /// Render `entry` into at most `width` columns.
    pub fn assemble(&self, entry: &Entry) -> StyledLine {
        let mut budget = WidthBudget::new(self.width);
        let mut line = StyledLine::new();

        self.push_fields(entry, &mut line, &mut budget);
        if !budget.is_exhausted() {
            line.extend(self.tail(entry, name_block(entry), &budget));
        }

        // only the fixed fields can overflow a very narrow terminal
        if line.width() > self.width {
            return line.clipped(self.width);
        }
        line
    }

    fn push_fields(&self, entry: &Entry, line: &mut StyledLine, budget: &mut WidthBudget) {
        let display = self.config.display();

        if display.permissions() {
            let perms = format_permissions(entry.mode(), display);
            budget.consume(perms.len() + 1);
            line.push_raw(perms);
            line.push_raw(" ");
        }

        if display.size() {
            let (label, unit) = format_size_parts(entry.size());
            budget.consume(label.len() + unit.len() + 2);
            line.push(label, StyleTag::SizeNumber);
            line.push_raw(" ");
            line.push_raw(unit);
            line.push_raw(" ");
        }

        if let Some(vcs) = self.vcs {
            let marker = vcs.marker(entry.name());
            for code in marker.chars() {
                if code == ' ' {
                    line.push_raw(" ");
                } else {
                    line.push(code.to_string(), StyleTag::Status(code));
                }
            }
            line.push_raw(" ");
            budget.consume(marker.chars().count() + 1);
        }
    }

    /// Everything after the fixed fields. `prefix` is the name block so far.
    fn tail(&self, entry: &Entry, mut prefix: StyledLine, budget: &WidthBudget) -> StyledLine {
        match entry.link() {
            Some(Link::Resolved { target, entry: resolved }) => {
                prefix.push(ARROW, StyleTag::Emphasis);
                prefix.push(link_text(target), StyleTag::Name(resolved.kind()));
                if resolved.points_to_dir() && !resolved.is_symlink() {
                    prefix.push(DIR_MARKER, StyleTag::Name(resolved.kind()));
                }
                self.tail(resolved, prefix, budget)
            }
            Some(Link::Unresolved { target }) => {
                prefix.push(ARROW, StyleTag::Emphasis);
                prefix.push(link_text(target), StyleTag::Unresolved);
                clip(prefix, budget)
            }
            None => self.summary(entry, prefix, budget),
        }
    }

    fn summary(&self, entry: &Entry, mut prefix: StyledLine, budget: &WidthBudget) -> StyledLine {
        if !self.config.display().content_summary() {
            return clip(prefix, budget);
        }

        match summarize(entry) {
            Ok(Some(candidate)) => {
                if candidate.is_vcs_repo() {
                    prefix.push(REPO_BADGE, StyleTag::Badge);
                }
                let postfix = candidate.postfix();
                FitRenderer::new(prefix, &postfix, candidate.text())
                    .render(budget.remaining())
                    .into_line()
            }
            Ok(None) => clip(prefix, budget),
            Err(e) => {
                log::debug!("no summary: {}", e);
                clip(prefix, budget)
            }
        }
    }
}

/// Styled name plus the `/` marker for anything that leads to a directory,
/// symlinks included.
fn name_block(entry: &Entry) -> StyledLine {
    let mut line = StyledLine::new();
    let tag = StyleTag::Name(entry.kind());
    line.push(sanitize_name(entry.name()), tag);
    if entry.points_to_dir() {
        line.push(DIR_MARKER, tag);
    }
    line
}

fn link_text(target: &Path) -> String {
    sanitize_name(&target.to_string_lossy()).into_owned()
}

fn clip(line: StyledLine, budget: &WidthBudget) -> StyledLine {
    let available = budget.available();
    if line.width() <= available {
        line
    } else {
        line.clipped(available)
    }
}
