//! List formatter
//!
//! Prints each file as a heading followed by its matches:
//!
//! ```text
//! b/c.txt
//!   2.1    1  TODO write docs
//!   2.2    2  TODO add tests
//! ```

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::matcher::FileMatchGroup;
use crate::navigator::CountSummary;

use super::ScanOutput;
use super::config::OutputConfig;

/// Streams groups to a color-capable writer as they arrive.
pub struct ListFormatter<W> {
    out: W,
    groups_written: usize,
}

impl ListFormatter<StandardStream> {
    pub fn stdout(config: &OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> ListFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            groups_written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> ScanOutput for ListFormatter<W> {
    fn output_group(&mut self, group: &FileMatchGroup) -> io::Result<()> {
        if self.groups_written > 0 {
            writeln!(self.out)?;
        }
        self.groups_written += 1;

        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(self.out, "{}", group.path.display())?;
        self.out.reset()?;

        for item in &group.items {
            let address = format!("{}.{}", group.group_index, item.item_index);
            write!(self.out, "  ")?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
            write!(self.out, "{:<5}", address)?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.out, "{:>5}", item.line_number)?;
            self.out.reset()?;
            writeln!(self.out, "  {}", item.content.trim())?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &CountSummary) -> io::Result<()> {
        if summary.total_files == 0 {
            writeln!(self.out, "no todo items found")?;
        }
        self.out.flush()
    }
}
