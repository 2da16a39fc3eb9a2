use bstr::BString;
use lib::input::ErrorKind;
use lib::{pos_from, IStr, LineCol};

use super::{part1, part2, Tally};
use crate::error::{Diagnostic, Error};
use crate::mask::Mask;
use crate::priority::{compute_priority, InvalidCharacter};

const EXAMPLE: &[u8] = b"\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

fn total(tally: Result<Tally, Error>) -> u64 {
    let tally = tally.unwrap();
    assert!(tally.diagnostics.is_empty(), "{:?}", tally.diagnostics);
    tally.total
}

#[test]
fn test_part1_single_line() {
    assert_eq!(total(part1(IStr::new(b"vJrwpWtwJgWrhcsFMMfFFhFp\n", 0))), 16);
}

#[test]
fn test_example() {
    assert_eq!(total(part1(IStr::new(EXAMPLE, 0))), 157);
    assert_eq!(total(part2(IStr::new(EXAMPLE, 0))), 70);
}

#[test]
fn test_single_repeat_is_its_priority() {
    for c in (b'a'..=b'z').chain(b'A'..=b'Z') {
        let other = if c == b'x' { b'y' } else { b'x' };
        let data = [c, other, other.to_ascii_uppercase(), c, b'\n'];

        let expected = compute_priority(c).unwrap().get();
        let tally = part1(IStr::new(&data, 0)).unwrap();
        assert_eq!(tally.total, u64::from(expected), "{:?}", BString::from(&data[..]));
    }
}

#[test]
fn test_idempotent() {
    let input = IStr::new(EXAMPLE, 0);
    assert_eq!(part1(input).unwrap(), part1(input).unwrap());
    assert_eq!(part2(input).unwrap(), part2(input).unwrap());
}

#[test]
fn test_part1_empty_lines() {
    let input = IStr::new(b"\nvJrwpWtwJgWrhcsFMMfFFhFp\n\n\n", 0);
    assert_eq!(total(part1(input)), 16);
    assert_eq!(total(part1(IStr::new(b"", 0))), 0);
}

#[test]
fn test_part1_no_repeat() {
    assert_eq!(total(part1(IStr::new(b"abcd\n", 0))), 0);
}

#[test]
fn test_part1_same_repeat_twice() {
    assert_eq!(total(part1(IStr::new(b"abaa\n", 0))), 1);
}

#[test]
fn test_part1_odd_length() {
    // The extra item ends up in the second half.
    assert_eq!(total(part1(IStr::new(b"abb\n", 0))), 0);
    assert_eq!(total(part1(IStr::new(b"aab\n", 0))), 1);
}

#[test]
fn test_part1_ambiguous_repeat() {
    let tally = part1(IStr::new(b"vJrwpWtwJgWrhcsFMMfFFhFp\nabab\n", 0)).unwrap();

    // Last repeated item is kept.
    assert_eq!(tally.total, 16 + 2);
    assert_eq!(
        tally.diagnostics,
        [Diagnostic::AmbiguousRepeat {
            at: LineCol::new(1, 0),
            line: BString::from("abab"),
            previous: compute_priority(b'a').unwrap(),
            current: compute_priority(b'b').unwrap(),
        }]
    );
}

#[test]
fn test_part1_invalid_character() {
    // Offending byte in the first half, the second half, and a carriage return.
    for data in [&b"ab1b\n"[..], b"a1ab\n", b"abab\r\n"] {
        let (error, span) = match part1(IStr::new(data, 0)) {
            Err(Error::InvalidCharacter { error, span, .. }) => (error, span),
            other => panic!("expected invalid character, got {other:?}"),
        };

        assert!(!error.0.is_ascii_alphabetic());
        assert_eq!(span.len(), 1);
        assert_eq!(data[span.start], error.0);
    }

    let data = b"vJrwpWtwJgWrhcsFMMfFFhFp\nab!b\n";
    let error = part1(IStr::new(data, 0)).unwrap_err();
    assert_eq!(error.span(), 27..28);
    assert_eq!(pos_from(data, error.span()), LineCol::new(1, 2));
    assert_eq!(error.to_string(), "invalid character '!' in line \"ab!b\"");

    assert!(matches!(
        error,
        Error::InvalidCharacter {
            error: InvalidCharacter(b'!'),
            ..
        }
    ));
}

#[test]
fn test_unterminated_line() {
    for result in [
        part1(IStr::new(b"vJrwpWtwJgWrhcsFMMfFFhFp", 0)),
        part2(IStr::new(b"vJrwpWtwJgWrhcsFMMfFFhFp", 0)),
    ] {
        let error = match result {
            Err(Error::MalformedLine(error)) => error,
            other => panic!("expected malformed line, got {other:?}"),
        };

        assert_eq!(error.kind(), &ErrorKind::Unterminated);
    }
}

#[test]
fn test_part2_group() {
    let input = IStr::new(
        b"vJrwpWtwJgWrhcsFMMfFFhFp\njqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL\nPmmdzqPrVvPwwTWBwg\n",
        0,
    );

    assert_eq!(total(part2(input)), 18);
}

#[test]
fn test_part2_identical_lines() {
    assert_eq!(total(part2(IStr::new(b"aaaa\naaaa\naaaa\n", 0))), 1);

    let tally = part2(IStr::new(b"abab\nabab\nabab\n", 0)).unwrap();
    assert_eq!(tally.total, 1);
    assert_eq!(
        tally.diagnostics,
        [Diagnostic::MultipleIntersection {
            at: LineCol::new(2, 0),
            mask: Mask::from_items(b"ab").unwrap(),
            chosen: compute_priority(b'a').unwrap(),
        }]
    );
}

#[test]
fn test_part2_empty_intersection() {
    let tally = part2(IStr::new(b"ab\ncd\nef\naZ\nZb\ncZ\n", 0)).unwrap();
    assert_eq!(tally.total, 52);
    assert_eq!(
        tally.diagnostics,
        [Diagnostic::EmptyIntersection {
            at: LineCol::new(2, 0)
        }]
    );

    let tally = part2(IStr::new(b"ab\n\nab\n", 0)).unwrap();
    assert_eq!(tally.total, 0);
    assert_eq!(tally.diagnostics.len(), 1);
}

#[test]
fn test_part2_trailing_partial_group() {
    let mut data = EXAMPLE.to_vec();
    data.extend_from_slice(b"abc\nabc\n");
    assert_eq!(total(part2(IStr::new(&data, 0))), 70);

    data.extend_from_slice(b"ab1\n");
    assert!(part2(IStr::new(&data, 0)).is_err());
}

#[test]
fn test_positions_relative_to_origin() {
    let data = b"skip\nabab\nabab\nabab\n";
    let mut input = IStr::new(data, 0);
    input.try_line::<IStr>().unwrap();

    let tally = part2(input).unwrap();
    assert_eq!(tally.diagnostics.len(), 1);

    let Diagnostic::MultipleIntersection { at, .. } = &tally.diagnostics[0] else {
        panic!("{:?}", tally.diagnostics);
    };

    assert_eq!(*at, LineCol::new(2, 0));
}

#[test]
fn test_part2_invalid_character_position() {
    let data = b"abc\nab?\n";

    let error = match part2(IStr::new(data, 0)) {
        Err(error @ Error::InvalidCharacter { .. }) => error,
        other => panic!("expected invalid character, got {other:?}"),
    };

    assert_eq!(pos_from(data, error.span()), LineCol::new(1, 2));
}
