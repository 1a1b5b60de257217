//! Cash Register CLI
//!
//! Reads `owed,paid` lines from a file and prints the change breakdown for
//! each line.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.txt
//! cargo run -- input.txt --config register.json --report > report.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use cash_register::{convert_input, ChangeError, ChangeProcessor, RegisterConfig, Result};
use log::{debug, info};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

struct Args {
    input_path: String,
    config_path: Option<String>,
    report: bool,
}

fn parse_args() -> Result<Args> {
    let mut input_path = None;
    let mut config_path = None;
    let mut report = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| ChangeError::MissingOptionValue(arg.clone()))?;
                config_path = Some(path);
            }
            "--report" => report = true,
            _ if arg.starts_with("--") => return Err(ChangeError::UnknownArgument(arg)),
            _ if input_path.is_none() => input_path = Some(arg),
            _ => return Err(ChangeError::UnknownArgument(arg)),
        }
    }

    Ok(Args {
        input_path: input_path.ok_or(ChangeError::MissingArgument)?,
        config_path,
        report,
    })
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path);
            RegisterConfig::from_path(path)?
        }
        None => RegisterConfig::default(),
    };

    let mut input = fs::read_to_string(&args.input_path)?;
    if let Some(rate) = config.exchange_rate {
        info!("Converting input at exchange rate {}", rate);
        input = convert_input(&input, rate)?;
    }

    let mut processor = ChangeProcessor::new(config.denominations.clone(), config.options());
    let output = processor.process(&input)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.report {
        output.write_report(handle)?;
    } else {
        writeln!(handle, "{}", output.output_text)?;
    }

    Ok(())
}
