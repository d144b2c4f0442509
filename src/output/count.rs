//! Count formatter

use std::io::{self, Write};

use termcolor::{ColorSpec, StandardStream, WriteColor};

use crate::navigator::CountSummary;

use super::config::OutputConfig;

pub struct CountFormatter<W> {
    out: W,
}

impl<W: WriteColor> CountFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// One line per file, then the grand total.
    pub fn write_summary(&mut self, summary: &CountSummary) -> io::Result<()> {
        for file in &summary.files {
            writeln!(self.out, "{} items in file {}", file.items, file.path.display())?;
        }
        writeln!(self.out)?;

        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        self.out.set_color(&bold)?;
        writeln!(
            self.out,
            "{} total todo items in {} files",
            summary.total_items, summary.total_files
        )?;
        self.out.reset()?;
        self.out.flush()
    }
}

/// Print count results to stdout with optional color.
pub fn print_count(summary: &CountSummary, config: &OutputConfig) -> io::Result<()> {
    let stdout = StandardStream::stdout(config.color_choice());
    CountFormatter::new(stdout).write_summary(summary)
}
