//! Styled segments with width accounting.
//!
//! The renderer never builds escape sequences. It tags every piece of text with a
//! [StyleTag] and counts display columns; the theme turns tags into escape codes at
//! print time.

use crate::core::FileKind;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Styling intent of a [Segment].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Plain,
    /// Summary text, parentheses, ellipsis and counts.
    Faint,
    /// The symlink arrow.
    Emphasis,
    /// An entry name, coloured by its kind.
    Name(FileKind),
    /// The `(git repo)` marker on directories.
    Badge,
    /// Raw target of a symlink that did not resolve.
    Unresolved,
    SizeNumber,
    /// One character of a git status code.
    Status(char),
    Branch,
}

/// A piece of text with its style tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    tag: StyleTag,
}

impl Segment {
    pub fn new(text: impl Into<String>, tag: StyleTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, StyleTag::Plain)
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn tag(&self) -> StyleTag {
        self.tag
    }

    /// Display columns (unicode-aware)
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// A row (or part of one) composed of multiple segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    segments: Vec<Segment>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Add a segment; empty text is dropped.
    pub fn push(&mut self, text: impl Into<String>, tag: StyleTag) {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment::new(text, tag));
        }
    }

    pub fn push_raw(&mut self, text: impl Into<String>) {
        self.push(text, StyleTag::Plain);
    }

    /// Append `columns` spaces.
    pub fn pad(&mut self, columns: usize) {
        if columns > 0 {
            self.push_raw(" ".repeat(columns));
        }
    }

    /// Append every segment from another styled line.
    pub fn extend(&mut self, other: StyledLine) {
        self.segments.extend(other.segments);
    }

    /// Returns the total display width
    pub fn width(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The text without any styling.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Keep at most `max_width` columns, cutting from the tail.
    pub fn clipped(&self, max_width: usize) -> StyledLine {
        let mut out = StyledLine::new();
        let mut left = max_width;
        for seg in &self.segments {
            if left == 0 {
                break;
            }
            let (text, used) = clip_to_width(seg.text(), left);
            out.push(text, seg.tag());
            left -= used;
            if used < seg.width() {
                break;
            }
        }
        out
    }
}

/// Leading characters of `text` that fit in `max_width` columns.
/// A wide character that would straddle the limit is left out.
/// # Returns
/// The clipped slice and the columns it occupies.
pub fn clip_to_width(text: &str, max_width: usize) -> (&str, usize) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return (&text[..idx], used);
        }
        used += w;
    }
    (text, used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_width_unicode() {
        assert_eq!(Segment::raw("hello").width(), 5);
        assert_eq!(Segment::raw("日本語").width(), 6);
        assert_eq!(Segment::raw("🦀").width(), 2);
    }

    #[test]
    fn test_line_width_and_pad() {
        let mut line = StyledLine::new();
        line.push("src", StyleTag::Name(FileKind::Directory));
        line.push_raw("/");
        line.pad(4);
        assert_eq!(line.width(), 8);
        assert_eq!(line.plain_text(), "src/    ");

        line.pad(0);
        line.push_raw("");
        assert_eq!(line.segments().len(), 3);
    }

    #[test]
    fn test_clip_to_width_never_splits_wide_chars() {
        assert_eq!(clip_to_width("abcdef", 3), ("abc", 3));
        assert_eq!(clip_to_width("ab", 10), ("ab", 2));
        assert_eq!(clip_to_width("日本語", 3), ("日", 2));
        assert_eq!(clip_to_width("anything", 0), ("", 0));
    }

    #[test]
    fn test_clipped_keeps_tags() {
        let mut line = StyledLine::new();
        line.push("name", StyleTag::Name(FileKind::Text));
        line.push(" (git repo)", StyleTag::Badge);

        let clipped = line.clipped(6);
        assert_eq!(clipped.plain_text(), "name (");
        assert_eq!(clipped.segments()[1].tag(), StyleTag::Badge);
        assert_eq!(line.clipped(0).width(), 0);
        assert_eq!(line.clipped(100), line);
    }
}
