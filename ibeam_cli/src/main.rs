//! # I-Beam CLI
//!
//! Terminal front end for the section engine: collects the ten input values
//! (from prompts or a JSON file), runs the analysis and prints the report.
//!
//! Any parse or file error is fatal: the error is printed to stderr, as text
//! and as JSON, and the process exits with status 1.

mod config;
mod input;
mod report;

use std::env;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use ibeam_core::{calculate, load_input, CalcError, CalcResult, IBeamInput};

use crate::config::{usage, CliConfig, OutputFormat};
use crate::input::Prompter;
use crate::report::{render_json, render_text};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    if let Err(e) = run(env::args().skip(1), stdin.lock(), &mut io::stdout()) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run<I, R, W>(args: I, reader: R, out: &mut W) -> CalcResult<()>
where
    I: IntoIterator<Item = String>,
    R: BufRead,
    W: Write,
{
    let config = CliConfig::from_args(args)?;
    info!("configuration: {:?}", config);

    if config.show_help {
        return write_out(out, &format!("{}\n", usage()));
    }

    let input = read_input(&config, reader, out)?;

    if let Err(e) = input.validate() {
        warn!("{} - results may be infinite or meaningless", e);
    }

    let result = calculate(&input);

    match config.format {
        OutputFormat::Text => write_out(out, &render_text(&result, config.precision)),
        OutputFormat::Json => write_out(out, &format!("{}\n", render_json(&result)?)),
    }
}

fn read_input<R: BufRead, W: Write>(config: &CliConfig, reader: R, out: &mut W) -> CalcResult<IBeamInput> {
    match &config.input_path {
        Some(path) => {
            info!("reading input from {}", path.display());
            load_input(path)
        }
        None => {
            write_out(out, "\nI-beam: Structural Analysis\n\n")?;
            Prompter::new(reader, out).collect()
        }
    }
}

fn write_out<W: Write>(out: &mut W, text: &str) -> CalcResult<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| CalcError::file_error("write", "<stdout>", e.to_string()))
}
