//! Input parser.

mod error;


use core::ops::Range;

pub use self::error::{ErrorKind, IStrError};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Size of the line buffer. A line including its terminator must fit into
/// `MAX_LINE - 1` bytes.
pub const MAX_LINE: usize = 1000;

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Absolute index of the data being parsed.
    index: usize,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The absolute span covered by this input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.index..self.index.saturating_add(self.data.len())
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'a [u8] {
        self.data
    }

    /// Parse the next line as `T`.
    ///
    /// Every line has to be terminated by a newline which fits inside of
    /// [MAX_LINE]. Returns `Ok(None)` once the input is exhausted.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        let Some(mut line) = self.split_line()? else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Try parse the next value as `T`.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        T::try_from_input(self)
    }

    /// Split off the next terminated line.
    fn split_line(&mut self) -> Result<Option<IStr<'a>>> {
        if self.data.is_empty() {
            return Ok(None);
        }

        let data = self.data;
        let limit = data.len().min(MAX_LINE - 1);
        let window = data.get(..limit).unwrap_or_default();

        let Some(at) = memchr::memchr(NL, window) else {
            let kind = if data.len() >= MAX_LINE - 1 {
                ErrorKind::Overlong(MAX_LINE)
            } else {
                ErrorKind::Unterminated
            };

            return Err(IStrError::new(self.index..self.index + limit, kind));
        };

        let line = IStr::new(data.get(..at).unwrap_or_default(), self.index);
        self.advance(at + 1);
        Ok(Some(line))
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Try to parse a value, returning `None` if there is nothing to parse.
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>>;
}

impl<'a> FromInput<'a> for IStr<'a> {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let output = *p;
        p.advance(p.data.len());
        Ok(Some(output))
    }
}
