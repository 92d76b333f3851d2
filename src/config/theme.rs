//! Theme configuration options for glimpse
//!
//! This module defines the colours read from the `[theme]` table of the glimpse.toml
//! configuration file, and turns [StyleTag]s into terminal escape sequences.

use crate::core::FileKind;
use crate::ui::style::{StyleTag, StyledLine};
use crate::utils::parse_color;

use crossterm::style::{Color, ContentStyle, Stylize};
use serde::{Deserialize, Deserializer};

use std::fmt::Write;

/// Theme configuration options
/// Holds the colour of every entry kind and of the decorations around it.
/// # Examples
/// ```toml
/// [theme]
/// directory = "blue"
/// executable = "#50fa7b"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    text: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    program: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    makefile: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    dotfile: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    unresolved: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    badge: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    branch: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            directory: Color::DarkBlue,
            symlink: Color::DarkBlue,
            executable: Color::DarkGreen,
            text: Color::DarkYellow,
            program: Color::DarkCyan,
            makefile: Color::DarkMagenta,
            dotfile: Color::DarkGrey,
            unresolved: Color::DarkRed,
            badge: Color::DarkMagenta,
            branch: Color::DarkCyan,
        }
    }
}

impl Theme {
    /// Style for a tag. Attributes are fixed per tag, colours come from the theme.
    pub fn style_for(&self, tag: StyleTag) -> ContentStyle {
        let base = ContentStyle::new();
        match tag {
            StyleTag::Plain => base,
            StyleTag::Faint => base.dim(),
            StyleTag::Emphasis | StyleTag::SizeNumber => base.bold(),
            StyleTag::Name(kind) => self.name_style(kind),
            StyleTag::Badge => base.with(self.badge).dim(),
            StyleTag::Unresolved => base.with(self.unresolved).italic(),
            StyleTag::Branch => base.with(self.branch).bold(),
            StyleTag::Status(code) => status_style(code),
        }
    }

    fn name_style(&self, kind: FileKind) -> ContentStyle {
        let base = ContentStyle::new();
        match kind {
            FileKind::Directory => base.with(self.directory).bold(),
            FileKind::Symlink => base.with(self.symlink).italic(),
            FileKind::Executable => base.with(self.executable).italic(),
            FileKind::Text => base.with(self.text),
            FileKind::Program => base.with(self.program),
            FileKind::Makefile => base.with(self.makefile),
            FileKind::Dotfile => base.with(self.dotfile),
            FileKind::File => base,
        }
    }

    /// Render a line with escape codes, or as plain text when `color` is off.
    pub fn paint(&self, line: &StyledLine, color: bool) -> String {
        if !color {
            return line.plain_text();
        }
        let mut out = String::with_capacity(line.width() * 2);
        for seg in line.segments() {
            match seg.tag() {
                StyleTag::Plain => out.push_str(seg.text()),
                tag => {
                    let _ = write!(out, "{}", self.style_for(tag).apply(seg.text()));
                }
            }
        }
        out
    }
}

/// git status letters: red for modified/deleted, green for added/unmerged,
/// yellow for renames, cyan for copies, faint for untracked/ignored.
fn status_style(code: char) -> ContentStyle {
    let base = ContentStyle::new();
    match code {
        'M' | 'D' => base.with(Color::DarkRed).bold(),
        'A' | 'U' => base.with(Color::DarkGreen).bold(),
        'R' => base.with(Color::DarkYellow).bold(),
        'C' => base.with(Color::DarkCyan).bold(),
        '?' | '!' => base.dim(),
        _ => base.bold(),
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_overrides_from_toml() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str("directory = \"#102030\"\ntext = \"green\"")?;
        assert_eq!(theme.directory, Color::Rgb { r: 16, g: 32, b: 48 });
        assert_eq!(theme.text, Color::DarkGreen);
        // untouched fields keep their defaults
        assert_eq!(theme.symlink, Theme::default().symlink);
        Ok(())
    }

    #[test]
    fn test_paint_plain_has_no_escapes() {
        let mut line = StyledLine::new();
        line.push("src", StyleTag::Name(FileKind::Directory));
        line.push(" (a, b)", StyleTag::Faint);

        let theme = Theme::default();
        assert_eq!(theme.paint(&line, false), "src (a, b)");

        let colored = theme.paint(&line, true);
        assert!(colored.contains("\x1b["), "expected escape codes: {:?}", colored);
        assert!(colored.contains("src"));
    }
}
