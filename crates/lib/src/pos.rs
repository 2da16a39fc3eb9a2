use core::fmt;
use core::ops::Range;

use crate::input::NL;

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
}

impl LineCol {
    pub const EMPTY: Self = Self::new(0, 0);

    pub const fn new(line: usize, start: usize) -> Self {
        Self { line, start }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.start)
    }
}

/// Get the input position of the start of the given span.
pub fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let (line, start) = match memchr::memrchr(NL, d) {
        Some(last) => (
            memchr::memchr_iter(NL, d).count(),
            d.len().saturating_sub(last + 1),
        ),
        None => (0, d.len()),
    };

    LineCol::new(line, start)
}
