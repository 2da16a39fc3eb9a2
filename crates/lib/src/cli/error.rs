use core::fmt;
use core::ops::Range;

use thiserror::Error;

use crate::pos::{pos_from, LineCol};

/// A fatal error surfaced by the command line, classified by how the
/// process should exit.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or missing arguments.
    #[error(transparent)]
    Usage(anyhow::Error),
    /// The input file could not be opened or read.
    #[error(transparent)]
    Open(anyhow::Error),
    /// The input was malformed.
    #[error(transparent)]
    Input(anyhow::Error),
    /// Results could not be written.
    #[error(transparent)]
    Output(anyhow::Error),
}

impl CliError {
    /// The process exit code associated with the error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(..) => 1,
            CliError::Open(..) => 2,
            CliError::Input(..) => 255,
            CliError::Output(..) => 3,
        }
    }

    /// Access the underlying error.
    pub fn error(&self) -> &anyhow::Error {
        match self {
            CliError::Usage(error)
            | CliError::Open(error)
            | CliError::Input(error)
            | CliError::Output(error) => error,
        }
    }
}

/// Associate `path:line:col` context with an error, where the position is
/// resolved from `span` inside of `data`.
pub fn error_context<E>(path: &str, data: &[u8], span: Range<usize>, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let pos = pos_from(data, span);

    error.context(ErrorContext {
        path: path.to_owned(),
        pos,
    })
}

/// Location of an input error.
#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
