//! Writer tool: generates pregap and null data regions.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use env_logger::Env;
use log::debug;

use cdpregap::pregap;
use cdpregap::{CdResult, Timecode};

/// Generate pregap and null data
#[derive(Parser)]
#[command(group(ArgGroup::new("mode").required(true)))]
struct Args {
    /// Audio track pregap: write two seconds of silence
    #[arg(short = 'a', group = "mode")]
    audio: bool,

    /// Data track pregap: write the null prefix and the sector run,
    /// starting at the timecode given as `MM SS FF`
    #[arg(short = 'd', group = "mode")]
    data: bool,

    /// Null data: write the number of zero bytes given as `SIZE`
    #[arg(short = 'n', group = "mode")]
    null: bool,

    /// Output file, created or truncated
    path: PathBuf,

    /// `MM SS FF` with -d, `SIZE` with -n, nothing with -a
    #[arg(value_name = "ARG")]
    rest: Vec<String>,
}

/// What one invocation writes, decided before the output file is touched.
enum Op {
    Audio,
    Data(Timecode),
    Null(u64),
}

fn usage_error(kind: ErrorKind, msg: impl std::fmt::Display) -> clap::Error {
    Args::command().error(kind, msg)
}

fn parse_op(args: &Args) -> Result<Op, clap::Error> {
    if args.audio {
        if !args.rest.is_empty() {
            return Err(usage_error(ErrorKind::TooManyValues, "-a only takes a path"));
        }

        return Ok(Op::Audio);
    }

    if args.data {
        if args.rest.len() != 3 {
            return Err(usage_error(
                ErrorKind::WrongNumberOfValues,
                "-d takes a path and a timing given as `MM SS FF`",
            ));
        }

        let mut msf = [0u32; 3];

        for (i, v) in args.rest.iter().enumerate() {
            msf[i] = v.parse().map_err(|_| {
                usage_error(
                    ErrorKind::InvalidValue,
                    format!("invalid timing value `{}`", v),
                )
            })?;
        }

        return Ok(Op::Data(Timecode::new(msf[0], msf[1], msf[2])));
    }

    if args.null {
        if args.rest.len() != 1 {
            return Err(usage_error(
                ErrorKind::WrongNumberOfValues,
                "-n takes a path and a size",
            ));
        }

        let size = args.rest[0].parse().map_err(|_| {
            usage_error(
                ErrorKind::InvalidValue,
                format!("invalid size `{}`", args.rest[0]),
            )
        })?;

        return Ok(Op::Null(size));
    }

    // The mode group guarantees exactly one of the flags is set
    unreachable!("no mode flag");
}

fn run(path: &Path, op: Op) -> CdResult<()> {
    let mut file = File::create(path)?;

    match op {
        Op::Audio => {
            debug!("audio pregap: {} null bytes", pregap::AUDIO_PREGAP_LEN);

            pregap::write_null(&mut file, pregap::AUDIO_PREGAP_LEN as u64)?;
        }
        Op::Data(tc) => {
            debug!("data pregap starting at {}", tc);

            pregap::write_pregap(&mut file, tc)?;
        }
        Op::Null(count) => {
            debug!("null data: {} bytes", count);

            pregap::write_null(&mut file, count)?;
        }
    }

    Ok(())
}

fn exit_usage(err: clap::Error) -> ! {
    // Help and version go to stdout and are not failures; everything else
    // is a usage error
    let code = if err.use_stderr() { 1 } else { 0 };

    let _ = err.print();

    process::exit(code);
}

fn main() {
    env_logger::Builder::from_env(Env::default()).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => exit_usage(err),
    };

    let op = match parse_op(&args) {
        Ok(op) => op,
        Err(err) => exit_usage(err),
    };

    if let Err(err) = run(&args.path, op) {
        eprintln!("{}: {}", args.path.display(), err);

        process::exit(1);
    }
}
