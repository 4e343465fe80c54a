//! leibniz-pi - estimate π with the Leibniz series
//!
//! Usage:
//!   leibniz-pi                # Ask for the number of terms
//!   leibniz-pi --terms 1000   # Use 1000 terms
//!   leibniz-pi -n 10 --json   # Print the result as JSON
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=leibniz_pi=debug`.

use clap::Parser as ClapParser;
use leibniz_pi::{num_terms_or_default, Error, Estimate};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "leibniz-pi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate pi with the Leibniz series", long_about = None)]
struct Args {
    /// Number of series terms (asked for interactively if not specified)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    terms: Option<String>,

    /// Print the result as a JSON object (the question goes to stderr)
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

impl Args {
    #[cfg(feature = "serde")]
    fn json(&self) -> bool {
        self.json
    }

    #[cfg(not(feature = "serde"))]
    fn json(&self) -> bool {
        false
    }
}

/// Question asked when the number of terms is not given on the command line
const PROMPT: &str = "How many terms should be used? ";

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leibniz_pi=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match run(&args, &mut input, &mut out, &mut err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Obtains the number of terms, computes the estimate and writes the report to `out`.
/// The question is written to `out`, or to `err` when JSON output keeps `out` machine-readable.
fn run<R: BufRead, W: Write, E: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<(), Error> {
    let num_terms = match &args.terms {
        Some(s) => num_terms_or_default(s),
        None if args.json() => num_terms_or_default(&ask_num_terms(input, err)?),
        None => num_terms_or_default(&ask_num_terms(input, out)?),
    };
    info!(num_terms, "computing estimate");

    let report = Estimate::compute(num_terms);

    #[cfg(feature = "serde")]
    if args.json {
        serde_json::to_writer(&mut *out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }

    writeln!(out)?;
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}

/// Writes the question to `prompt_out` and reads one line of the answer from `input`.
/// End of input gives an empty answer.
fn ask_num_terms<R: BufRead, W: Write>(input: &mut R, prompt_out: &mut W) -> Result<String, Error> {
    write!(prompt_out, "{PROMPT}")?;
    prompt_out.flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        debug!("end of input");
    }
    Ok(line)
}
