//! Fitting a content summary into the rest of a row.
//!
//! [FitRenderer] takes the row's prefix (name and badges), a postfix (the item or
//! line count) and a candidate summary, and picks exactly one layout for the
//! remaining columns, in this order:
//!
//! 1. no content, prefix and postfix fit: `prefix<pad>postfix`
//! 2. content fits whole: `prefix (content) <pad>postfix`
//! 3. not even a truncated summary fits: degrade (see [FitRenderer::render])
//! 4. otherwise: `prefix (conte..) postfix`
//!
//! The postfix always ends at the last available column when it is shown.
//! Content is cut from its tail, never its head.

use crate::ui::style::{StyleTag, StyledLine, clip_to_width};

use unicode_width::UnicodeWidthStr;

/// Smallest gap between prefix and postfix.
pub const MIN_GAP: usize = 1;
/// `" ("` + `") "` around whole content.
pub const FULL_OVERHEAD: usize = 4;
/// `" ("` + `"..) "` around truncated content.
pub const TRUNCATED_OVERHEAD: usize = 6;
pub const ELLIPSIS: &str = "..";

/// Which layout a [Fit] used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Prefix, padding, postfix. No parentheses.
    Padded,
    /// Whole content in parentheses.
    Full,
    /// Leading part of the content followed by the ellipsis.
    Truncated,
    /// Only the prefix fit.
    PrefixOnly,
    /// Only the postfix fit, right-aligned.
    PostfixOnly,
    /// Not even the prefix fit; its head is shown.
    ClippedPrefix,
    Nothing,
}

/// Result of fitting: the segments, the layout used and how many content
/// characters made it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fit {
    line: StyledLine,
    layout: Layout,
    shown: usize,
}

impl Fit {
    pub fn line(&self) -> &StyledLine {
        &self.line
    }

    pub fn into_line(self) -> StyledLine {
        self.line
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Content characters included in the line.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Display columns of the line.
    pub fn width(&self) -> usize {
        self.line.width()
    }
}

/// Lays out one row segment: prefix, optional summary, postfix.
#[derive(Debug, Clone)]
pub struct FitRenderer<'a> {
    prefix: StyledLine,
    postfix: &'a str,
    content: &'a str,
}

impl<'a> FitRenderer<'a> {
    pub fn new(prefix: StyledLine, postfix: &'a str, content: &'a str) -> Self {
        Self {
            prefix,
            postfix,
            content,
        }
    }

    /// Pick a layout for `available` columns. Never exceeds `available`
    /// unless it is zero or negative, in which case nothing is emitted.
    ///
    /// When even a truncated summary does not fit, the fallbacks are, in order:
    /// prefix and postfix with a gap, the prefix alone, the right-aligned postfix alone,
    /// the head of the prefix, nothing.
    pub fn render(self, available: isize) -> Fit {
        let p = cols(self.prefix.width());
        let q = cols(self.postfix.width());
        let c = cols(self.content.width());

        if self.content.is_empty() && p + q + cols(MIN_GAP) <= available {
            return self.padded(available);
        }
        if p + c + q + cols(FULL_OVERHEAD) <= available {
            return self.full(available);
        }
        if p + q + cols(TRUNCATED_OVERHEAD) > available {
            return self.degraded(available);
        }
        self.truncated(available)
    }

    fn padded(self, available: isize) -> Fit {
        let gap = available - cols(self.prefix.width()) - cols(self.postfix.width());
        let mut line = self.prefix;
        line.pad(to_usize(gap));
        line.push(self.postfix, StyleTag::Faint);
        Fit {
            line,
            layout: Layout::Padded,
            shown: 0,
        }
    }

    fn full(self, available: isize) -> Fit {
        let used = self.prefix.width() + self.content.width() + FULL_OVERHEAD;
        let gap = available - cols(used) - cols(self.postfix.width());
        let shown = self.content.chars().count();

        let mut line = self.prefix;
        line.push(" (", StyleTag::Faint);
        line.push(self.content, StyleTag::Faint);
        line.push(") ", StyleTag::Faint);
        line.pad(to_usize(gap));
        line.push(self.postfix, StyleTag::Faint);
        Fit {
            line,
            layout: Layout::Full,
            shown,
        }
    }

    fn truncated(self, available: isize) -> Fit {
        let room = to_usize(
            available
                - cols(self.prefix.width())
                - cols(self.postfix.width())
                - cols(TRUNCATED_OVERHEAD),
        );
        let (head, used) = clip_to_width(self.content, room);
        let shown = head.chars().count();

        let mut line = self.prefix;
        line.push(" (", StyleTag::Faint);
        line.push(head, StyleTag::Faint);
        line.push(format!("{ELLIPSIS}) "), StyleTag::Faint);
        // a wide char that did not fit leaves a column
        line.pad(room - used);
        line.push(self.postfix, StyleTag::Faint);
        Fit {
            line,
            layout: Layout::Truncated,
            shown,
        }
    }

    fn degraded(self, available: isize) -> Fit {
        let p = cols(self.prefix.width());
        let q = cols(self.postfix.width());

        if p + q + cols(MIN_GAP) <= available {
            return self.padded(available);
        }
        if p <= available {
            return Fit {
                line: self.prefix,
                layout: Layout::PrefixOnly,
                shown: 0,
            };
        }
        if q <= available {
            let mut line = StyledLine::new();
            line.pad(to_usize(available - q));
            line.push(self.postfix, StyleTag::Faint);
            return Fit {
                line,
                layout: Layout::PostfixOnly,
                shown: 0,
            };
        }
        if available > 0 {
            return Fit {
                line: self.prefix.clipped(to_usize(available)),
                layout: Layout::ClippedPrefix,
                shown: 0,
            };
        }
        Fit {
            line: StyledLine::new(),
            layout: Layout::Nothing,
            shown: 0,
        }
    }
}

#[inline]
fn cols(width: usize) -> isize {
    isize::try_from(width).unwrap_or(isize::MAX)
}

#[inline]
fn to_usize(columns: isize) -> usize {
    columns.max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FileKind;

    fn prefix(text: &str) -> StyledLine {
        let mut line = StyledLine::new();
        line.push(text, StyleTag::Name(FileKind::File));
        line
    }

    fn fit(p: &str, q: &str, content: &str, available: isize) -> Fit {
        FitRenderer::new(prefix(p), q, content).render(available)
    }

    #[test]
    fn empty_content_pads_to_exact_width() {
        let fit = fit("empty.log", "[empty]", "", 20);
        assert_eq!(fit.layout(), Layout::Padded);
        assert_eq!(fit.line().plain_text(), "empty.log    [empty]");
        assert_eq!(fit.width(), 20);
        assert!(!fit.line().plain_text().contains('('));
    }

    #[test]
    fn empty_content_exact_minimum_gap() {
        let fit = fit("abc", "[empty]", "", 11);
        assert_eq!(fit.layout(), Layout::Padded);
        assert_eq!(fit.line().plain_text(), "abc [empty]");
    }

    #[test]
    fn full_fit_shows_whole_content() {
        let fit = fit("notes", "[2 lines]", "hello world", 40);
        assert_eq!(fit.layout(), Layout::Full);
        let text = fit.line().plain_text();
        assert!(text.starts_with("notes (hello world) "));
        assert!(text.ends_with("[2 lines]"));
        assert_eq!(fit.width(), 40);
        assert_eq!(fit.shown(), 11);
    }

    #[test]
    fn full_fit_exact_boundary() {
        // 5 + 11 + 9 + 4 = 29
        let fit = fit("notes", "[2 lines]", "hello world", 29);
        assert_eq!(fit.layout(), Layout::Full);
        assert_eq!(fit.line().plain_text(), "notes (hello world) [2 lines]");
    }

    #[test]
    fn one_column_short_truncates() {
        let fit = fit("notes", "[2 lines]", "hello world", 28);
        assert_eq!(fit.layout(), Layout::Truncated);
        // room = 28 - 5 - 9 - 6 = 8
        assert_eq!(fit.line().plain_text(), "notes (hello wo..) [2 lines]");
        assert_eq!(fit.width(), 28);
        assert_eq!(fit.shown(), 8);
    }

    #[test]
    fn truncated_ends_with_ellipsis_and_count() {
        let content = "one two three four five";
        let fit = fit("a.txt", "[5 lines]", content, 26);
        assert_eq!(fit.layout(), Layout::Truncated);
        let text = fit.line().plain_text();
        assert!(text.ends_with("..) [5 lines]"), "{:?}", text);
        assert!(fit.width() <= 26);
    }

    #[test]
    fn truncation_at_threshold_shows_no_content() {
        // p + q + 6 == available: room for the frame only
        let fit = fit("ab", "[3 files]", "x, y, z", 17);
        assert_eq!(fit.layout(), Layout::Truncated);
        assert_eq!(fit.line().plain_text(), "ab (..) [3 files]");
        assert_eq!(fit.shown(), 0);
    }

    #[test]
    fn wide_chars_keep_postfix_aligned() {
        // room = 21 - 1 - 8 - 6 = 6 columns: three CJK chars
        let even = fit("f", "[1 line]", "日本語のテキスト", 21);
        assert_eq!(even.layout(), Layout::Truncated);
        assert_eq!(even.line().plain_text(), "f (日本語..) [1 line]");
        assert_eq!(even.width(), 21);
        assert_eq!(even.shown(), 3);

        // odd room leaves a padding column instead of splitting a char
        let odd = fit("f", "[1 line]", "日本語のテキスト", 22);
        assert_eq!(odd.line().plain_text(), "f (日本語..)  [1 line]");
        assert_eq!(odd.width(), 22);
    }

    #[test]
    fn degraded_keeps_gap_layout() {
        // content present but p + q + 6 > available >= p + q + 1
        let fit = fit("name", "[9 lines]", "content", 16);
        assert_eq!(fit.layout(), Layout::Padded);
        assert_eq!(fit.line().plain_text(), "name   [9 lines]");
    }

    #[test]
    fn degraded_prefix_only() {
        let fit = fit("name", "[9 lines]", "content", 10);
        assert_eq!(fit.layout(), Layout::PrefixOnly);
        assert_eq!(fit.line().plain_text(), "name");
    }

    #[test]
    fn degraded_postfix_only() {
        let fit = fit("a-very-long-name", "[2 files]", "x, y", 12);
        assert_eq!(fit.layout(), Layout::PostfixOnly);
        assert_eq!(fit.line().plain_text(), "   [2 files]");
        assert_eq!(fit.width(), 12);
    }

    #[test]
    fn degraded_clipped_prefix_then_nothing() {
        let fit = fit("a-very-long-name", "[2 files]", "x, y", 5);
        assert_eq!(fit.layout(), Layout::ClippedPrefix);
        assert_eq!(fit.line().plain_text(), "a-ver");

        for available in [0, -3] {
            let fit = self::fit("a-very-long-name", "[2 files]", "x, y", available);
            assert_eq!(fit.layout(), Layout::Nothing);
            assert!(fit.line().is_empty());
        }
    }

    mod props {
        use super::*;
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        const ALPHABET: &[char] = &['a', 'b', 'z', ' ', ',', '.', '_', '0', 'é', '日', '語'];

        fn word(rng: &mut StdRng, max: usize) -> String {
            let len = rng.random_range(0..=max);
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
                .collect()
        }

        fn postfix(rng: &mut StdRng) -> String {
            match rng.random_range(0..3) {
                0 => "[empty]".to_string(),
                1 => format!("[{} files]", rng.random_range(2..2000)),
                _ => format!("[{} lines]", rng.random_range(2..2000)),
            }
        }

        fn case(rng: &mut StdRng) -> (String, String, String, isize) {
            let mut p = word(rng, 20);
            if p.is_empty() {
                p.push('x');
            }
            (p, postfix(rng), word(rng, 60), rng.random_range(-4i64..100) as isize)
        }

        #[test]
        fn never_wider_than_available() {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            for _ in 0..2000 {
                let (p, q, c, avail) = case(&mut rng);
                let fit = fit(&p, &q, &c, avail);
                if avail <= 0 {
                    assert_eq!(fit.width(), 0);
                } else {
                    assert!(fit.width() <= avail as usize, "{:?} in {}", fit, avail);
                }
            }
        }

        #[test]
        fn postfix_ends_at_last_column() {
            let mut rng = StdRng::seed_from_u64(7);
            for _ in 0..2000 {
                let (p, q, c, avail) = case(&mut rng);
                let fit = fit(&p, &q, &c, avail);
                if matches!(
                    fit.layout(),
                    Layout::Padded | Layout::Full | Layout::Truncated | Layout::PostfixOnly
                ) {
                    assert_eq!(fit.width(), avail as usize);
                    assert!(fit.line().plain_text().ends_with(&q));
                }
            }
        }

        #[test]
        fn content_is_whole_or_strict_head() {
            let mut rng = StdRng::seed_from_u64(42);
            for _ in 0..2000 {
                let (p, q, c, avail) = case(&mut rng);
                let fit = fit(&p, &q, &c, avail);
                let text = fit.line().plain_text();
                match fit.layout() {
                    Layout::Full => {
                        assert!(text.starts_with(&format!("{p} ({c}) ")));
                        assert_eq!(fit.shown(), c.chars().count());
                    }
                    Layout::Truncated => {
                        let head: String = c.chars().take(fit.shown()).collect();
                        assert!(fit.shown() < c.chars().count());
                        assert!(text.starts_with(&format!("{p} ({head}{ELLIPSIS}) ")));
                    }
                    _ => assert_eq!(fit.shown(), 0),
                }
            }
        }

        #[test]
        fn more_room_never_shows_less() {
            let mut rng = StdRng::seed_from_u64(1234);
            for _ in 0..300 {
                let (p, q, c, _) = case(&mut rng);
                let mut last = 0;
                for avail in 0..120 {
                    let shown = fit(&p, &q, &c, avail).shown();
                    assert!(shown >= last, "{p:?} {q:?} {c:?} at {avail}");
                    last = shown;
                }
            }
        }
    }

    #[test]
    fn styles_are_faint_around_content() {
        let fit = fit("n", "[1 line]", "body", 30);
        let tags: Vec<_> = fit.line().segments().iter().map(|s| s.tag()).collect();
        assert_eq!(tags[0], StyleTag::Name(FileKind::File));
        assert!(
            fit.line()
                .segments()
                .iter()
                .filter(|s| s.text().trim() != "")
                .skip(1)
                .all(|s| s.tag() == StyleTag::Faint)
        );
    }
}
