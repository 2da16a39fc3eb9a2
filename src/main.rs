use std::fs;
use std::io::Write;
use std::process::ExitCode;

use lib::cli::{error_context, Bencher, CliError, Mode, Opts, Output};
use lib::prelude::*;
use rucksack::{Error, Tally};

type Part = for<'a> fn(IStr<'a>) -> Result<Tally, Error>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {:#}", error.error());
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let opts = Opts::parse()?;
    let path = opts.path.display().to_string();

    let data = fs::read(&opts.path)
        .with_context(|| anyhow!("{path}"))
        .map_err(CliError::Open)?;

    let input = IStr::new(&data, 0);

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock());

    let parts: [(usize, Part); 2] = [(1, rucksack::part1), (2, rucksack::part2)];

    for (part, solve) in parts {
        let (tally, elapsed) = lib::timeit!(solve(input));
        let tally = tally.map_err(|e| CliError::Input(error_context(&path, &data, e.span(), e)))?;
        o.total(part, tally.total, elapsed).map_err(output_error)?;

        if opts.mode == Mode::Bench {
            bench(&mut o, &opts, part, solve, input)?;
        }
    }

    Ok(())
}

fn bench(
    o: &mut Output<impl Write>,
    opts: &Opts,
    part: usize,
    solve: Part,
    input: IStr<'_>,
) -> Result<(), CliError> {
    // Diagnostics have already been reported by the first run.
    let level = log::max_level();
    log::set_max_level(log::LevelFilter::Error);

    let report = Bencher::new().iter(o, opts, || solve(input).map(|tally| tally.total));
    log::set_max_level(level);

    let report = report.map_err(CliError::Input)?;
    o.report(part, &report).map_err(output_error)?;
    Ok(())
}

fn output_error(error: std::io::Error) -> CliError {
    CliError::Output(anyhow::Error::from(error).context("failed to write output"))
}
