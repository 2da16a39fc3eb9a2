use core::fmt;
use core::time::Duration;
use std::io::{self, Write};

use crate::cli::Report;

/// Writes results of a run.
pub struct Output<O> {
    out: O,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O) -> Self {
        Self { out }
    }

    /// Write an informational message.
    pub fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out, "info: {m}")
    }

    /// Write the total produced by one part together with how long it took.
    pub fn total(
        &mut self,
        part: usize,
        total: impl fmt::Display,
        elapsed: Duration,
    ) -> io::Result<()> {
        writeln!(self.out, "part {part}, total prio: {total}")?;
        writeln!(self.out, "part {part} took: {} ns", elapsed.as_nanos())?;
        Ok(())
    }

    /// Write a benchmark report for one part.
    pub fn report(&mut self, part: usize, report: &Report) -> io::Result<()> {
        writeln!(self.out, "part {part}: {report}")
    }
}
