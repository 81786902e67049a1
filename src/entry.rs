//! Entry kinds and their display labels

use rustix::fs::FileType;
use termcolor::Color;

/// What kind of object a directory entry refers to.
///
/// Derived from the file type the kernel reports alongside each entry;
/// no extra stat call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile,
    Directory,
    Symlink,
    Pipe,
    Socket,
    BlockDevice,
    CharDevice,
    Unknown,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        match file_type {
            FileType::RegularFile => EntryKind::RegularFile,
            FileType::Directory => EntryKind::Directory,
            FileType::Symlink => EntryKind::Symlink,
            FileType::Fifo => EntryKind::Pipe,
            FileType::Socket => EntryKind::Socket,
            FileType::BlockDevice => EntryKind::BlockDevice,
            FileType::CharacterDevice => EntryKind::CharDevice,
            _ => EntryKind::Unknown,
        }
    }
}

/// Short type annotation printed after an entry name.
///
/// The color is an advisory hint for the rendering side; the walker
/// never styles text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeLabel {
    pub text: &'static str,
    pub color: Option<Color>,
}

impl EntryKind {
    pub fn label(self) -> TypeLabel {
        let (text, color) = match self {
            EntryKind::RegularFile => ("file", None),
            EntryKind::Directory => ("dir", Some(Color::Blue)),
            EntryKind::Symlink => ("symlink", Some(Color::Cyan)),
            EntryKind::Pipe => ("pipe", Some(Color::Green)),
            EntryKind::Socket => ("socket", Some(Color::Magenta)),
            EntryKind::BlockDevice => ("dev_blk", Some(Color::Yellow)),
            EntryKind::CharDevice => ("dev_chr", Some(Color::Yellow)),
            EntryKind::Unknown => ("unknown", Some(Color::Red)),
        };
        TypeLabel { text, color }
    }
}
