use core::ops::Range;

use bstr::BString;
use lib::{IStrError, LineCol};
use thiserror::Error;

use crate::mask::Mask;
use crate::priority::{InvalidCharacter, Priority};

/// A fatal error which aborts the computation of a part.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{error} in line {line:?}")]
    InvalidCharacter {
        error: InvalidCharacter,
        line: BString,
        span: Range<usize>,
    },
    #[error("malformed line")]
    MalformedLine(#[from] IStrError),
}

impl Error {
    /// The span of input which caused the error.
    pub fn span(&self) -> Range<usize> {
        match self {
            Error::InvalidCharacter { span, .. } => span.clone(),
            Error::MalformedLine(error) => error.span(),
        }
    }
}

/// A non-fatal anomaly in the input. Processing continues with a degraded
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// More than one item is repeated across the halves of a line, only the
    /// last one is kept.
    #[error("{at}: more than one repeated item ({previous} and {current}) in line {line:?}")]
    AmbiguousRepeat {
        at: LineCol,
        line: BString,
        previous: Priority,
        current: Priority,
    },
    /// A group has no item in common, it contributes nothing.
    #[error("{at}: group has no common item")]
    EmptyIntersection { at: LineCol },
    /// A group has more than one item in common, the lowest is used.
    #[error("{at}: group has {} common items, using {chosen}", .mask.len())]
    MultipleIntersection {
        at: LineCol,
        mask: Mask,
        chosen: Priority,
    },
}
