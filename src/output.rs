//! Listing output - the sink the walker emits entries into

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::TypeLabel;

/// Callback for listing output - receives one line per emitted entry.
///
/// The walker hands over the indentation depth, the already-quoted name,
/// and an optional type label with its advisory color; how that gets
/// styled is entirely the sink's business.
pub trait EntrySink {
    fn entry(&mut self, depth: usize, name: &str, label: Option<TypeLabel>) -> io::Result<()>;
}

/// Writes listing lines to any color-capable stream.
///
/// Indentation is four spaces per depth level; a type label, when
/// present, follows the name after two spaces.
pub struct Printer<W: WriteColor> {
    out: W,
}

impl Printer<StandardStream> {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> EntrySink for Printer<W> {
    fn entry(&mut self, depth: usize, name: &str, label: Option<TypeLabel>) -> io::Result<()> {
        write!(self.out, "{:width$}{}", "", name, width = depth * 4)?;
        if let Some(label) = label {
            write!(self.out, "  ")?;
            match label.color {
                Some(color) => {
                    self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
                    write!(self.out, "{}", label.text)?;
                    self.out.reset()?;
                }
                None => write!(self.out, "{}", label.text)?,
            }
        }
        writeln!(self.out)
    }
}
