use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use anyhow::{bail, Error, Result};

use crate::cli::{Opts, Output, Report};
use crate::Stopwatch;

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    ///
    /// Every produced value is compared against the first one, so that a
    /// function which doesn't produce the same output for the same input is
    /// reported as an error.
    pub fn iter<T, O, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut iter: T,
    ) -> Result<Report>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + PartialEq,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let expected = iter()?;

        let mut run = || -> Result<Duration> {
            let s = Stopwatch::start();
            let value = iter()?;
            let elapsed = s.stop();

            if value != expected {
                bail!("{value:?} (value) != {expected:?} (expected)");
            }

            let _ = black_box(value);
            Ok(elapsed)
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;
            let s = Stopwatch::start();

            loop {
                run()?;

                if s.stop() >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(run()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;
            let s = Stopwatch::start();

            loop {
                samples.push(run()?);

                if s.stop() >= time_limit {
                    break;
                }
            }
        }

        Ok(Report::from_samples(&mut samples))
    }
}
