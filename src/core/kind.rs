//! File classification for glimpse.
//!
//! Maps a raw name, its permission bits and a coarse type code to a [FileKind].
//! Precedence, highest first: directory, symlink, owner-executable regular file,
//! name or extension based (text, program, makefile), dotfile, plain file.

use crate::utils::with_lowered_stack;

use phf::phf_map;

/// Coarse type as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseType {
    Directory,
    Regular,
    Symlink,
    Other,
}

impl From<std::fs::FileType> for CoarseType {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            CoarseType::Symlink
        } else if ft.is_dir() {
            CoarseType::Directory
        } else if ft.is_file() {
            CoarseType::Regular
        } else {
            CoarseType::Other
        }
    }
}

/// Classification of a listed entry. Drives the name colour and which
/// content summary the row gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Directory,
    Executable,
    Symlink,
    Text,
    Program,
    Makefile,
    Dotfile,
    File,
}

impl FileKind {
    #[inline]
    pub fn is_dir(self) -> bool {
        self == FileKind::Directory
    }

    #[inline]
    pub fn is_symlink(self) -> bool {
        self == FileKind::Symlink
    }
}

/// Owner execute bit.
pub(crate) const OWNER_EXEC: u32 = 0o100;

/// Extension to kind mapping for name-based classification.
static EXT_KIND_MAP: phf::Map<&'static str, FileKind> = phf_map! {
    "md" => FileKind::Text,
    "txt" => FileKind::Text,
    "rst" => FileKind::Text,
    "org" => FileKind::Text,
    "adoc" => FileKind::Text,
    "tex" => FileKind::Text,
    "rs" => FileKind::Program,
    "py" => FileKind::Program,
    "js" => FileKind::Program,
    "ts" => FileKind::Program,
    "tsx" => FileKind::Program,
    "jsx" => FileKind::Program,
    "go" => FileKind::Program,
    "java" => FileKind::Program,
    "kt" => FileKind::Program,
    "c" => FileKind::Program,
    "h" => FileKind::Program,
    "cc" => FileKind::Program,
    "cpp" => FileKind::Program,
    "hpp" => FileKind::Program,
    "cs" => FileKind::Program,
    "rb" => FileKind::Program,
    "php" => FileKind::Program,
    "swift" => FileKind::Program,
    "lua" => FileKind::Program,
    "hs" => FileKind::Program,
    "ml" => FileKind::Program,
    "scala" => FileKind::Program,
    "pl" => FileKind::Program,
    "sh" => FileKind::Program,
    "bash" => FileKind::Program,
    "zsh" => FileKind::Program,
    "fish" => FileKind::Program,
    "sql" => FileKind::Program,
    "vim" => FileKind::Program,
    "mk" => FileKind::Makefile,
};

/// Special file names, matched before extensions.
static SPECIAL_NAME_KIND_MAP: phf::Map<&'static str, FileKind> = phf_map! {
    "README" => FileKind::Text,
    "LICENSE" => FileKind::Text,
    "COPYING" => FileKind::Text,
    "CHANGELOG" => FileKind::Text,
    "AUTHORS" => FileKind::Text,
    "TODO" => FileKind::Text,
    "Makefile" => FileKind::Makefile,
    "makefile" => FileKind::Makefile,
    "GNUmakefile" => FileKind::Makefile,
};

/// Classify a name, its permission bits and its coarse type.
///
/// `mode` only needs the permission triad (`0o777`); higher bits are ignored.
pub fn classify(name: &str, mode: u32, coarse: CoarseType) -> FileKind {
    match coarse {
        CoarseType::Directory => return FileKind::Directory,
        CoarseType::Symlink => return FileKind::Symlink,
        CoarseType::Regular if mode & OWNER_EXEC != 0 => return FileKind::Executable,
        _ => {}
    }

    if let Some(kind) = kind_by_name(name) {
        return kind;
    }

    if is_dotfile(name) {
        return FileKind::Dotfile;
    }

    FileKind::File
}

/// Name or extension based kind, if any rule matches.
fn kind_by_name(name: &str) -> Option<FileKind> {
    if let Some(kind) = SPECIAL_NAME_KIND_MAP.get(name) {
        return Some(*kind);
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
    {
        let ext = &name[dot_idx + 1..];
        if let Some(kind) = EXT_KIND_MAP.get(ext) {
            return Some(*kind);
        }
        return with_lowered_stack(ext, |s| EXT_KIND_MAP.get(s).copied());
    }
    None
}

/// Leading dot, except the parent directory entry.
#[inline]
pub fn is_dotfile(name: &str) -> bool {
    name.starts_with('.') && name != ".."
}
