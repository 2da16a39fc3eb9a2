//! Priority sums over rucksack inventories.
//!
//! Every line of input is a rucksack whose items are ASCII letters. Items are
//! collected into a [Mask] of their priorities, and masks are intersected to
//! find the shared item of both halves of a line ([part1]) or the badge of a
//! group of three lines ([part2]).

mod calc;
mod error;
mod mask;
mod priority;

pub use self::calc::{part1, part2, GroupState, Tally};
pub use self::error::{Diagnostic, Error};
pub use self::mask::Mask;
pub use self::priority::{compute_priority, InvalidCharacter, Priority};
