pub mod cli;
pub mod input;
mod pos;
mod stopwatch;

pub use self::input::{FromInput, IStr, IStrError};
pub use self::pos::{pos_from, LineCol};
pub use self::stopwatch::Stopwatch;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::IStr;
    pub use anyhow::{anyhow, bail, Context, Result};
}

/// Time the given expression, evaluating to the value it produced and the
/// time it took.
///
/// # Examples
///
/// ```
/// let (value, elapsed) = lib::timeit!(1 + 2);
/// assert_eq!(value, 3);
/// assert!(elapsed.as_secs() < 60);
/// ```
#[macro_export]
macro_rules! timeit {
    ($($tt:tt)*) => {{
        let s = $crate::Stopwatch::start();
        let out = { $($tt)* };
        (out, s.stop())
    }}
}
