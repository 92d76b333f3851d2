//! Content summaries for listed entries.
//!
//! A directory is summarized by its sorted, non-hidden children joined with `", "`.
//! A regular file is summarized by its lines joined with single spaces.
//! The result is an unstyled [ContentCandidate]; fitting it into the row is up to the renderer.

use crate::core::error::GlimpseError;
use crate::core::fm::Entry;
use crate::core::kind::CoarseType;
use crate::utils::sanitize_name;

use std::fs;
use std::path::Path;

// Bytes to peek for null bytes in binary detection
const BINARY_PEEK_BYTES: usize = 1024;
// Directory entry marking a git work tree
const VCS_MARKER: &str = ".git";

/// What a [ContentCandidate] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUnit {
    Files,
    Lines,
}

impl CountUnit {
    fn word(self, count: usize) -> &'static str {
        match (self, count) {
            (CountUnit::Files, 1) => "file",
            (CountUnit::Files, _) => "files",
            (CountUnit::Lines, 1) => "line",
            (CountUnit::Lines, _) => "lines",
        }
    }
}

/// Summary text proposed for a row, before any fitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCandidate {
    text: String,
    count: usize,
    unit: CountUnit,
    vcs_repo: bool,
}

impl ContentCandidate {
    pub fn new(text: impl Into<String>, count: usize, unit: CountUnit) -> Self {
        Self {
            text: text.into(),
            count,
            unit,
            vcs_repo: false,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn unit(&self) -> CountUnit {
        self.unit
    }

    /// Directory holds a `.git` entry.
    #[inline]
    pub fn is_vcs_repo(&self) -> bool {
        self.vcs_repo
    }

    /// Count label shown at the row edge: `[empty]`, `[1 file]`, `[3 lines]`.
    pub fn postfix(&self) -> String {
        if self.count == 0 {
            "[empty]".to_string()
        } else {
            format!("[{} {}]", self.count, self.unit.word(self.count))
        }
    }
}

/// Summarize an entry.
///
/// # Returns
/// `Ok(None)` for kinds that have nothing to summarize (symlinks, sockets, fifos),
/// an error when the content cannot be read or decoded.
pub fn summarize(entry: &Entry) -> Result<Option<ContentCandidate>, GlimpseError> {
    match entry.coarse() {
        CoarseType::Directory => summarize_dir(entry.path()).map(Some),
        CoarseType::Regular => summarize_file(entry.path(), entry.size()).map(Some),
        CoarseType::Symlink | CoarseType::Other => Ok(None),
    }
}

/// Sorted, non-hidden children of `path`, joined with `", "`.
pub fn summarize_dir(path: &Path) -> Result<ContentCandidate, GlimpseError> {
    let read = fs::read_dir(path).map_err(|e| GlimpseError::unreadable(path, e.to_string()))?;

    let mut vcs_repo = false;
    let mut names: Vec<String> = read
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| {
            if name == VCS_MARKER {
                vcs_repo = true;
            }
            !name.starts_with('.')
        })
        .map(|name| sanitize_name(&name).into_owned())
        .collect();
    names.sort_unstable();

    Ok(ContentCandidate {
        count: names.len(),
        text: names.join(", "),
        unit: CountUnit::Files,
        vcs_repo,
    })
}

/// Lines of the file at `path` joined with single spaces.
///
/// `size` comes from the listing's metadata; zero skips the read entirely.
pub fn summarize_file(path: &Path, size: u64) -> Result<ContentCandidate, GlimpseError> {
    if size == 0 {
        return Ok(ContentCandidate::new("", 0, CountUnit::Lines));
    }

    let bytes = fs::read(path).map_err(|e| GlimpseError::unreadable(path, e.to_string()))?;

    let peek = &bytes[..bytes.len().min(BINARY_PEEK_BYTES)];
    if peek.contains(&0) {
        return Err(GlimpseError::unreadable(path, "binary content"));
    }

    let content = std::str::from_utf8(&bytes)
        .map_err(|_| GlimpseError::unreadable(path, "content is not valid UTF-8"))?;

    let mut text = String::with_capacity(content.len());
    let mut count = 0;
    for line in content.lines() {
        if count > 0 {
            text.push(' ');
        }
        push_sanitized(&mut text, line.trim_matches('\t'));
        count += 1;
    }

    Ok(ContentCandidate::new(text, count, CountUnit::Lines))
}

/// Appends `line` with interior tabs turned into spaces and other control characters dropped.
fn push_sanitized(out: &mut String, line: &str) {
    for ch in line.chars() {
        if ch == '\t' {
            out.push(' ');
        } else if !ch.is_control() {
            out.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn directory_children_sorted_without_hidden() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("b.txt"))?;
        File::create(dir.path().join("a.txt"))?;
        fs::create_dir(dir.path().join(".git"))?;

        let candidate = summarize_dir(dir.path())?;
        assert_eq!(candidate.text(), "a.txt, b.txt");
        assert_eq!(candidate.count(), 2);
        assert!(candidate.is_vcs_repo());
        assert_eq!(candidate.postfix(), "[2 files]");
        Ok(())
    }

    #[test]
    fn child_names_are_printable() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("x\ty"))?;
        File::create(dir.path().join("new\nline"))?;

        let candidate = summarize_dir(dir.path())?;
        assert_eq!(candidate.text(), "new?line, x?y");
        assert_eq!(candidate.count(), 2);
        Ok(())
    }

    #[test]
    fn empty_directory_counts_zero() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join(".only_hidden"))?;

        let candidate = summarize_dir(dir.path())?;
        assert_eq!(candidate.text(), "");
        assert_eq!(candidate.count(), 0);
        assert!(!candidate.is_vcs_repo());
        assert_eq!(candidate.postfix(), "[empty]");
        Ok(())
    }

    #[test]
    fn file_lines_joined_and_tabs_stripped() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        let mut file = File::create(&path)?;
        write!(file, "\tfirst\t\nsecond\tpart\r\n\n third")?;
        let size = fs::metadata(&path)?.len();

        let candidate = summarize_file(&path, size)?;
        assert_eq!(candidate.text(), "first second part   third");
        assert_eq!(candidate.count(), 4);
        assert_eq!(candidate.postfix(), "[4 lines]");
        Ok(())
    }

    #[test]
    fn single_line_is_singular() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("one");
        fs::write(&path, "hello\n")?;

        let candidate = summarize_file(&path, 6)?;
        assert_eq!(candidate.text(), "hello");
        assert_eq!(candidate.postfix(), "[1 line]");
        Ok(())
    }

    #[test]
    fn zero_size_skips_read() -> Result<(), Box<dyn std::error::Error>> {
        // the path does not even exist; size zero must short-circuit
        let candidate = summarize_file(Path::new("/no/such/file"), 0)?;
        assert_eq!(candidate.text(), "");
        assert_eq!(candidate.postfix(), "[empty]");
        Ok(())
    }

    #[test]
    fn binary_and_invalid_utf8_are_unreadable() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let bin = dir.path().join("blob.bin");
        fs::write(&bin, [0x7f, b'E', b'L', b'F', 0, 1, 2])?;
        assert!(matches!(
            summarize_file(&bin, 7),
            Err(GlimpseError::Unreadable { .. })
        ));

        let latin = dir.path().join("latin1.txt");
        fs::write(&latin, [b'c', b'a', b'f', 0xe9])?;
        assert!(matches!(
            summarize_file(&latin, 4),
            Err(GlimpseError::Unreadable { .. })
        ));
        Ok(())
    }

    #[test]
    fn vanished_file_is_unreadable() {
        let result = summarize_file(Path::new("/no/such/file"), 12);
        assert!(matches!(result, Err(GlimpseError::Unreadable { .. })));
    }

    #[test]
    fn summaries_are_stable() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        for name in ["zeta", "alpha", "Mid", "beta"] {
            File::create(dir.path().join(name))?;
        }
        let path = dir.path().join("alpha");
        fs::write(&path, "x\ny\n")?;

        assert_eq!(summarize_dir(dir.path())?, summarize_dir(dir.path())?);
        assert_eq!(summarize_file(&path, 4)?, summarize_file(&path, 4)?);
        Ok(())
    }
}
