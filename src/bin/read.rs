//! Reader tool: prints any byte range of a file in hexadecimal.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::debug;

use cdpregap::inspect;
use cdpregap::{CdError, CdResult};

/// Print a byte range of any file in hexadecimal
#[derive(Parser)]
struct Args {
    /// File to read
    path: PathBuf,

    /// Number of bytes to print
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    size: u64,

    /// Number of bytes to skip before printing
    skip: u64,
}

fn run(args: &Args) -> CdResult<()> {
    debug!(
        "reading {} bytes at offset {} from {}",
        args.size,
        args.skip,
        args.path.display()
    );

    let bytes = inspect::read_range(&args.path, args.size, args.skip)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    inspect::write_hex(&mut out, &bytes)?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default()).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version go to stdout and are not failures;
            // everything else is a usage error
            let code = if err.use_stderr() { 1 } else { 0 };

            let _ = err.print();

            process::exit(code);
        }
    };

    match run(&args) {
        Ok(()) => (),
        // Distinct status so callers can tell a short file from a bad
        // invocation or an I/O failure
        Err(err @ CdError::NotEnoughData) => {
            eprintln!("{}", err);

            process::exit(2);
        }
        Err(err) => {
            eprintln!("{}: {}", args.path.display(), err);

            process::exit(1);
        }
    }
}
