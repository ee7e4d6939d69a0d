//! Command line configuration.
//!
//! Options are parsed by hand from the argument list:
//!
//! ```text
//! ibeam [--input <file.json>] [--format text|json] [--precision <n>]
//! ```

use std::path::PathBuf;

use ibeam_core::{CalcError, CalcResult};

/// Decimal places used by the text report unless overridden
pub const DEFAULT_PRECISION: usize = 4;

/// How the analysis is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled lines, one value per line
    #[default]
    Text,
    /// Pretty-printed `IBeamResult`
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CalcError::invalid_input("--format", s, "Expected 'text' or 'json'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Read the input record from this JSON file instead of prompting
    pub input_path: Option<PathBuf>,
    pub format: OutputFormat,
    /// Decimal places in the text report
    pub precision: usize,
    pub show_help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            input_path: None,
            format: OutputFormat::default(),
            precision: DEFAULT_PRECISION,
            show_help: false,
        }
    }
}

impl CliConfig {
    /// Parse options from an argument list that excludes the program name.
    pub fn from_args<I>(args: I) -> CalcResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = CliConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "--input" | "-i" => {
                    let path = args.next().ok_or_else(|| CalcError::missing_field("--input <path>"))?;
                    config.input_path = Some(PathBuf::from(path));
                }
                "--format" | "-f" => {
                    let value = args.next().ok_or_else(|| CalcError::missing_field("--format <text|json>"))?;
                    config.format = value.parse()?;
                }
                "--precision" | "-p" => {
                    let value = args.next().ok_or_else(|| CalcError::missing_field("--precision <n>"))?;
                    config.precision = value.parse::<usize>().map_err(|e| {
                        CalcError::invalid_input("--precision", value.as_str(), e.to_string())
                    })?;
                }
                other => {
                    return Err(CalcError::invalid_input("argument", other, "Unknown option"));
                }
            }
        }

        Ok(config)
    }
}

pub fn usage() -> &'static str {
    "Usage: ibeam [options]

Computes section properties and bending capacity of a three-plate I-section.
Without --input, values are prompted for on stdin.

Options:
  -i, --input <path>       Read the input record from a JSON file
  -f, --format <fmt>       Output format: text (default) or json
  -p, --precision <n>      Decimal places in the text report (default 4)
  -h, --help               Show this message

Logging is controlled with RUST_LOG (default: warn)."
}
