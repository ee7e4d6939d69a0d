//! # ibeam_core - Built-Up I-Section Bending Engine
//!
//! `ibeam_core` computes the elastic bending properties of an I-section made
//! from three rectangular plates: neutral axis, moment of inertia, capacity
//! moments, allowable simply-supported loads, and the stresses and force
//! resultants produced by an applied moment.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every quantity is recomputed from the current dimensions
//! - **JSON-First**: input and result records implement Serialize/Deserialize
//! - **Infallible core**: degenerate geometry propagates as inf/NaN; errors
//!   live at the edges (parsing, file loading, optional validation)
//!
//! ## Quick Start
//!
//! ```rust
//! use ibeam_core::section::{CompositeSection, RectangularPart};
//!
//! let beam = CompositeSection::new(
//!     RectangularPart::new(150.0, 20.0), // lower flange
//!     RectangularPart::new(10.0, 300.0), // web
//!     RectangularPart::new(150.0, 20.0), // upper flange
//! )
//! .with_span(6.0)
//! .with_allowable_stresses(150.0, 150.0)
//! .with_applied_moment(50.0);
//!
//! assert_eq!(beam.centroid(), 170.0);
//! assert_eq!(beam.max_total_load(), beam.max_udl() * 6.0);
//! ```
//!
//! ## Modules
//!
//! - [`section`] - Rectangular parts and the composite section
//! - [`calculations`] - Flat input/result records and `calculate`
//! - [`equations`] - Section and beam formulas
//! - [`units`] - Unit wrappers for the mm/N ↔ m/kN conversions
//! - [`errors`] - Structured error types
//! - [`file_io`] - Loading input records from JSON files

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, IBeamInput, IBeamResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_input, parse_input};
pub use section::{CompositeSection, GoverningFiber, PartRole, RectangularPart};
