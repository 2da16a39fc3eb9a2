//! CLI helpers.

mod bencher;
mod error;
mod output;
mod stderr_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Context};

pub use self::bencher::Bencher;
pub use self::error::{error_context, CliError};
pub use self::output::Output;

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Path to the input file.
    pub path: PathBuf,
    /// Run in verbose mode.
    verbose: bool,
    /// Only log errors.
    quiet: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options from the environment and install the logger.
    pub fn parse() -> Result<Self, CliError> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        log::set_max_level(opts.level());
        log::set_logger(&STDERR_LOGGER)
            .map_err(|error| CliError::Usage(anyhow!("failed to set log: {error}")))?;

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::inner_parse(args.into_iter()).map_err(CliError::Usage)
    }

    fn inner_parse(mut it: impl Iterator<Item = OsString>) -> anyhow::Result<Self> {
        let mut opts = Self::default();
        let mut path = None;

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                set_path(&mut path, PathBuf::from(&arg))?;
                continue;
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        anyhow::bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--quiet" => {
                    opts.quiet = true;
                }
                "--warmup" => {
                    opts.warmup = Some(flag_value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(flag_value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(flag_value(&mut it, "--count")?);
                }
                "--" => {
                    break;
                }
                other if other.starts_with("--") => {
                    anyhow::bail!("unsupported argument: {other}");
                }
                other => {
                    set_path(&mut path, PathBuf::from(other))?;
                }
            }
        }

        for arg in it {
            set_path(&mut path, PathBuf::from(arg))?;
        }

        opts.path = path.context("provide input file")?;
        Ok(opts)
    }

    /// The log level implied by the options.
    pub fn level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Store the positional input path, of which there can only be one.
fn set_path(path: &mut Option<PathBuf>, value: PathBuf) -> anyhow::Result<()> {
    if let Some(existing) = path {
        anyhow::bail!(
            "expected a single input file, got `{}` and `{}`",
            existing.display(),
            value.display()
        );
    }

    *path = Some(value);
    Ok(())
}

/// Parse the value following the flag `name`.
fn flag_value<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> anyhow::Result<T>
where
    T: core::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{name}`"))?;
    let value = value
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;
    value
        .parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

/// Summary of a benchmark.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report out of the given samples.
    pub fn from_samples(samples: &mut [Duration]) -> Self {
        samples.sort();

        let count = samples.len();
        let sum = samples.iter().copied().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Get the given percentile out of sorted samples, expressed in hundredths of
/// a percent.
fn percentile(samples: &[Duration], n: usize) -> Duration {
    if samples.is_empty() {
        return Duration::default();
    }

    let index = (samples.len() * n / 10000).min(samples.len() - 1);
    samples[index]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(
            f,
            "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, \
             50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}"
        )
    }
}
