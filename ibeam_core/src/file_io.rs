//! # File I/O Module
//!
//! Reads an [`IBeamInput`] record from a JSON file so a section can be
//! analyzed without interactive prompts. Results are never written back;
//! this module only loads.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibeam_core::file_io::load_input;
//! use std::path::Path;
//!
//! let input = load_input(Path::new("beam.json")).unwrap();
//! println!("span = {} m", input.span_m);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::calculations::IBeamInput;
use crate::errors::{CalcError, CalcResult};

/// Parse an input record from a JSON string.
pub fn parse_input(json: &str) -> CalcResult<IBeamInput> {
    serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid I-beam input: {}", e),
    })
}

/// Load an input record from a JSON file.
///
/// # Errors
///
/// * `FileError` - the file could not be opened or read
/// * `SerializationError` - the contents are not a valid input record
pub fn load_input(path: &Path) -> CalcResult<IBeamInput> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let input = parse_input(&contents)?;

    debug!("loaded I-beam input from {}", path.display());
    Ok(input)
}
