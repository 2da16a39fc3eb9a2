use core::time::Duration;
use std::ffi::OsString;
use std::path::Path;

use super::{Bencher, CliError, Mode, Opts, Output, Report};

fn parse(args: &[&str]) -> Result<Opts, CliError> {
    Opts::parse_from(args.iter().map(OsString::from))
}

#[test]
fn test_parse_path() {
    let opts = parse(&["input.txt"]).unwrap();
    assert_eq!(opts.path, Path::new("input.txt"));
    assert_eq!(opts.mode, Mode::Default);
    assert_eq!(opts.level(), log::LevelFilter::Warn);
}

#[test]
fn test_parse_flags() {
    let opts = parse(&["--bench", "--count", "3", "--verbose", "--", "--odd-name"]).unwrap();
    assert_eq!(opts.path, Path::new("--odd-name"));
    assert_eq!(opts.mode, Mode::Bench);
    assert_eq!(opts.count, Some(3));
    assert_eq!(opts.level(), log::LevelFilter::Debug);

    let opts = parse(&["--quiet", "--verbose", "input.txt"]).unwrap();
    assert_eq!(opts.level(), log::LevelFilter::Error);
}

#[test]
fn test_usage_errors() {
    let error = parse(&[]).unwrap_err();
    assert!(matches!(error, CliError::Usage(..)));
    assert_eq!(error.exit_code(), 1);

    assert_eq!(parse(&["a.txt", "b.txt"]).unwrap_err().exit_code(), 1);
    assert_eq!(parse(&["--frobnicate", "a.txt"]).unwrap_err().exit_code(), 1);
    assert_eq!(parse(&["a.txt", "--count"]).unwrap_err().exit_code(), 1);
    assert_eq!(parse(&["a.txt", "--count", "many"]).unwrap_err().exit_code(), 1);
    assert_eq!(parse(&["--bench", "--bench", "a.txt"]).unwrap_err().exit_code(), 1);
}

#[test]
fn test_exit_codes() {
    assert_eq!(CliError::Open(anyhow::anyhow!("missing")).exit_code(), 2);
    assert_eq!(CliError::Input(anyhow::anyhow!("bad")).exit_code(), 255);
    assert_eq!(CliError::Output(anyhow::anyhow!("closed")).exit_code(), 3);
}

#[test]
fn test_report() {
    let mut samples = (1..=100).rev().map(Duration::from_nanos).collect::<Vec<_>>();
    let report = Report::from_samples(&mut samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_nanos(1));
    assert_eq!(report.max, Duration::from_nanos(100));
    assert_eq!(report.p50, Duration::from_nanos(51));
    assert_eq!(report.p99, Duration::from_nanos(100));
    assert_eq!(report.avg, Duration::from_nanos(50));

    assert_eq!(Report::from_samples(&mut []), Report::default());
}

#[test]
fn test_output_total() {
    let mut out = Vec::new();
    Output::new(&mut out)
        .total(1, 157, Duration::from_nanos(42))
        .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "part 1, total prio: 157\npart 1 took: 42 ns\n");
}

#[test]
fn test_bencher() {
    let opts = parse(&["--warmup", "0", "--count", "5", "input.txt"]).unwrap();
    let mut o = Output::new(Vec::new());

    let report = Bencher::new()
        .iter(&mut o, &opts, || Ok::<_, anyhow::Error>(42u32))
        .unwrap();

    assert_eq!(report.count, 5);

    let mut n = 0u32;

    let error = Bencher::new().iter(&mut o, &opts, || {
        n += 1;
        Ok::<_, anyhow::Error>(n)
    });

    assert!(error.is_err());
}
