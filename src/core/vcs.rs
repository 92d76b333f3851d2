//! The glimpse version-control module.
//!
//! This module implements [VcsStatus], the per-listing snapshot of git state:
//! - a two-character status code per entry name, from `git status --porcelain`
//! - the current branch, from `git rev-parse --abbrev-ref HEAD`
//! - the latest commit subject and time, from `git log -1`
//!
//! git is invoked synchronously, once per query, in the listed directory.
//! Any failure disables the feature for the run; the caller never sees a partial snapshot.

use crate::core::error::GlimpseError;

use chrono::{DateTime, Local};

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Status shown for names git reports nothing about.
pub const CLEAN_MARKER: &str = "  ";

/// The most recent commit of the checked-out branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastChange {
    subject: String,
    time: Option<DateTime<Local>>,
}

impl LastChange {
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn time(&self) -> Option<&DateTime<Local>> {
        self.time.as_ref()
    }
}

impl fmt::Display for LastChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.time {
            Some(time) => write!(f, "{} ({})", self.subject, time.format("%Y-%m-%d %H:%M")),
            None => f.write_str(&self.subject),
        }
    }
}

/// git state of one listed directory.
#[derive(Debug, Clone, Default)]
pub struct VcsStatus {
    codes: HashMap<String, String>,
    branch: Option<String>,
    last_change: Option<LastChange>,
}

impl VcsStatus {
    /// Query git for `dir`.
    ///
    /// # Returns
    /// [GlimpseError::VcsUnavailable] when git is missing or any invocation fails.
    pub fn probe(dir: &Path) -> Result<Self, GlimpseError> {
        which::which("git").map_err(|e| GlimpseError::VcsUnavailable(e.to_string()))?;

        // unquoted paths, so non-ASCII names match entry names
        let status = run_git(
            dir,
            &[
                "-c",
                "core.quotePath=false",
                "status",
                "--short",
                "--ignored",
                "--porcelain",
            ],
        )?;
        let branch = run_git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        // a fresh repository has no commits yet
        let last_change = run_git(dir, &["log", "-1", "--format=%ct%x00%s"])
            .ok()
            .and_then(|out| parse_last_change(&out));

        Ok(VcsStatus {
            codes: parse_status(&status),
            branch: Some(branch.trim().to_string()).filter(|b| !b.is_empty()),
            last_change,
        })
    }

    /// Two-character code for `name`, blank when git reports nothing.
    pub fn marker(&self, name: &str) -> &str {
        self.codes.get(name).map_or(CLEAN_MARKER, String::as_str)
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn last_change(&self) -> Option<&LastChange> {
        self.last_change.as_ref()
    }
}

/// Run git in `dir` and return its stdout.
fn run_git(dir: &Path, args: &[&str]) -> Result<String, GlimpseError> {
    let cmd_str = format!("git {}", args.join(" "));
    log::debug!("$ {} [{}]", cmd_str, dir.display());

    let t0 = Instant::now();
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            log::debug!("cmd=\"{}\" dur={:.1}ms err=\"{}\"", cmd_str, duration_ms, e);
            return Err(GlimpseError::VcsUnavailable(format!(
                "failed to spawn git: {}",
                e
            )));
        }
    };

    log::debug!(
        "cmd=\"{}\" dur={:.1}ms ok={}",
        cmd_str,
        duration_ms,
        output.status.success()
    );

    if !output.status.success() {
        return Err(GlimpseError::VcsUnavailable(format!(
            "{} exited with {}",
            cmd_str, output.status
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `git status --short --porcelain` output into first-path-component → code.
///
/// Each line is `XY path`. Renames (`R  old -> new`) are keyed by the new path.
/// Changes inside a subdirectory mark the subdirectory; the first code seen wins.
pub fn parse_status(output: &str) -> HashMap<String, String> {
    let mut codes = HashMap::new();

    for line in output.lines() {
        if line.len() < 4 || !line.is_char_boundary(2) || !line.is_char_boundary(3) {
            continue;
        }
        let code = &line[..2];
        let mut path = &line[3..];
        if let Some((_, new)) = path.split_once(" -> ") {
            path = new;
        }
        let path = path.trim_matches('"').trim_end_matches('/');
        let Some(first) = path.split('/').next().filter(|p| !p.is_empty()) else {
            continue;
        };
        codes
            .entry(first.to_string())
            .or_insert_with(|| code.to_string());
    }
    codes
}

/// Parse `git log -1 --format=%ct%x00%s` output.
pub fn parse_last_change(output: &str) -> Option<LastChange> {
    let line = output.trim_end_matches('\n');
    if line.is_empty() {
        return None;
    }
    let (timestamp, subject) = line.split_once('\0').unwrap_or(("", line));
    let time = timestamp
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Local));

    Some(LastChange {
        subject: subject.to_string(),
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::tempdir;

    fn git_available() -> bool {
        which::which("git").is_ok()
    }

    macro_rules! skip_if_no_git {
        () => {
            if !git_available() {
                return Ok(());
            }
        };
    }

    fn git(dir: &Path, args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(format!("git {:?} failed", args).into());
        }
        Ok(())
    }

    #[test]
    fn parse_status_codes() {
        let output = " M src/main.rs\n?? new.txt\nA  added.rs\nR  old.rs -> renamed.rs\n!! target/\n?? \"with space.txt\"\n M src/lib.rs\n";
        let codes = parse_status(output);

        assert_eq!(codes.get("src").map(String::as_str), Some(" M"));
        assert_eq!(codes.get("new.txt").map(String::as_str), Some("??"));
        assert_eq!(codes.get("added.rs").map(String::as_str), Some("A "));
        assert_eq!(codes.get("renamed.rs").map(String::as_str), Some("R "));
        assert_eq!(codes.get("target").map(String::as_str), Some("!!"));
        assert_eq!(codes.get("with space.txt").map(String::as_str), Some("??"));
        assert!(!codes.contains_key("old.rs"));
    }

    #[test]
    fn parse_status_skips_garbage() {
        let codes = parse_status("\nM\n??\n");
        assert!(codes.is_empty());
    }

    #[test]
    fn marker_defaults_to_blank() {
        let status = VcsStatus::default();
        assert_eq!(status.marker("anything"), CLEAN_MARKER);
    }

    #[test]
    fn parse_last_change_with_time() {
        let change = parse_last_change("1700000000\0Fix the parser\n").expect("parsed");
        assert_eq!(change.subject(), "Fix the parser");
        assert!(change.time().is_some());
        assert!(change.to_string().starts_with("Fix the parser ("));

        assert!(parse_last_change("").is_none());
        let untimed = parse_last_change("just a subject").expect("parsed");
        assert_eq!(untimed.to_string(), "just a subject");
    }

    #[test]
    fn probe_outside_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
        skip_if_no_git!();
        let dir = tempdir()?;
        // a temp dir inside some work tree would let git succeed
        if VcsStatus::probe(dir.path()).is_ok() {
            return Ok(());
        }
        assert!(matches!(
            VcsStatus::probe(dir.path()),
            Err(GlimpseError::VcsUnavailable(_))
        ));
        Ok(())
    }

    #[test]
    fn probe_reads_status_and_branch() -> Result<(), Box<dyn std::error::Error>> {
        skip_if_no_git!();
        let dir = tempdir()?;
        git(dir.path(), &["init", "-q", "-b", "trunk"])?;
        fs::write(dir.path().join("tracked.txt"), "one\n")?;
        git(dir.path(), &["add", "tracked.txt"])?;
        git(dir.path(), &["commit", "-q", "-m", "first commit"])?;
        fs::write(dir.path().join("tracked.txt"), "two\n")?;
        fs::write(dir.path().join("untracked.txt"), "new\n")?;
        fs::write(dir.path().join("café.txt"), "au lait\n")?;

        let status = VcsStatus::probe(dir.path())?;
        assert_eq!(status.branch(), Some("trunk"));
        assert_eq!(status.marker("tracked.txt"), " M");
        assert_eq!(status.marker("untracked.txt"), "??");
        assert_eq!(status.marker("missing.txt"), CLEAN_MARKER);
        assert_eq!(status.marker("café.txt"), "??");
        assert_eq!(
            status.last_change().map(LastChange::subject),
            Some("first commit")
        );
        Ok(())
    }
}
