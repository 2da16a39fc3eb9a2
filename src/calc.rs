//! The two passes over rucksack inventories.
//!
//! Both parts read the input line by line and turn items into priority masks
//! through [Mask::from_items]. They only differ in how lines are split or
//! grouped before masks are intersected.

#[cfg(test)]
mod tests;

use core::ops::Range;

use bstr::BString;
use lib::{pos_from, IStr, LineCol};

use crate::error::{Diagnostic, Error};
use crate::mask::Mask;
use crate::priority::{priorities, InvalidCharacter, Priority};

/// The outcome of one part.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Sum of all priorities.
    pub total: u64,
    /// Non-fatal anomalies encountered along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl Tally {
    fn add(&mut self, p: Priority) {
        self.total += u64::from(p.get());
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

/// Which line of a group is expected next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    #[default]
    AwaitingLine1,
    AwaitingLine2,
    AwaitingLine3,
}

/// Sum the priorities of the item found in both halves of each line.
///
/// Empty lines are skipped. A line without a repeated item contributes
/// nothing, a line with more than one keeps the last one found.
pub fn part1(input: IStr<'_>) -> Result<Tally, Error> {
    let origin = input;
    let mut input = input;
    let mut tally = Tally::default();

    while let Some(line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            continue;
        }

        let items = line.as_data();
        let (first, second) = items.split_at(items.len() / 2);

        let mask = items_mask(&line, first)?;
        let mut repeated = None;

        for (n, p) in priorities(second).enumerate() {
            let p = p.map_err(|error| invalid(error, &line, first.len() + n))?;

            if !mask.contains(p) {
                continue;
            }

            if let Some(previous) = repeated {
                if previous != p {
                    tally.warn(Diagnostic::AmbiguousRepeat {
                        at: locate(&origin, line.span()),
                        line: BString::from(items),
                        previous,
                        current: p,
                    });
                }
            }

            repeated = Some(p);
        }

        if let Some(p) = repeated {
            log::debug!("{}: repeated {p}", locate(&origin, line.span()));
            tally.add(p);
        }
    }

    Ok(tally)
}

/// Sum the badge priorities of each group of three lines.
///
/// A trailing group with fewer than three lines is not scored.
pub fn part2(input: IStr<'_>) -> Result<Tally, Error> {
    let origin = input;
    let mut input = input;
    let mut tally = Tally::default();

    let mut state = GroupState::default();
    let mut group = Mask::FULL;

    while let Some(line) = input.try_line::<IStr>()? {
        group &= items_mask(&line, line.as_data())?;

        state = match state {
            GroupState::AwaitingLine1 => GroupState::AwaitingLine2,
            GroupState::AwaitingLine2 => GroupState::AwaitingLine3,
            GroupState::AwaitingLine3 => {
                let at = locate(&origin, line.span());
                score_group(&mut tally, group, at);
                group = Mask::FULL;
                GroupState::AwaitingLine1
            }
        };
    }

    if state != GroupState::AwaitingLine1 {
        log::debug!("ignoring trailing partial group ({state:?})");
    }

    Ok(tally)
}

fn score_group(tally: &mut Tally, group: Mask, at: LineCol) {
    let Some(chosen) = group.lowest() else {
        tally.warn(Diagnostic::EmptyIntersection { at });
        return;
    };

    if group.len() > 1 {
        tally.warn(Diagnostic::MultipleIntersection {
            at,
            mask: group,
            chosen,
        });
    }

    log::debug!("{at}: badge {chosen}");
    tally.add(chosen);
}

/// Build the mask of `items`, which is a prefix of `line`.
fn items_mask(line: &IStr<'_>, items: &[u8]) -> Result<Mask, Error> {
    Mask::from_items(items).map_err(|error| {
        // Masks are built up to the first invalid item.
        let n = items.iter().position(|&c| c == error.0).unwrap_or_default();
        invalid(error, line, n)
    })
}

/// Construct an error for the invalid item at `offset` in `line`.
fn invalid(error: InvalidCharacter, line: &IStr<'_>, offset: usize) -> Error {
    let start = line.index().saturating_add(offset);

    Error::InvalidCharacter {
        error,
        line: BString::from(line.as_data()),
        span: start..start.saturating_add(1),
    }
}

/// Resolve an absolute span to a position relative to where processing
/// started.
fn locate(origin: &IStr<'_>, span: Range<usize>) -> LineCol {
    let start = span.start.saturating_sub(origin.index());
    let end = span.end.saturating_sub(origin.index());
    pos_from(origin.as_data(), start..end)
}
