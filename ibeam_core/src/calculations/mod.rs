//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`ibeam`] - Built-up I-section bending capacity

pub mod ibeam;

pub use ibeam::{calculate, IBeamInput, IBeamResult};
