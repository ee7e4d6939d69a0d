//! # Structural Engineering Equations
//!
//! The fundamental section and beam formulas used by the I-beam analysis.
//! Keeping them in one place allows each to be checked against its reference
//! independently of how the section types compose them.
//!
//! ## Modules
//!
//! - [`section`] - Cross-section properties (A, I, ȳ, Z, parallel-axis transfer)
//! - [`beam`] - Elastic bending and simply-supported capacity formulas
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Elevation**: Measured upward from the bottom of the section

pub mod beam;
pub mod section;

pub use beam::{
    bending_stress,
    moment_capacity_knm,
    point_load_for_moment,
    triangular_block_force,
    uniform_load_for_moment,
};

pub use section::{
    composite_centroid,
    elastic_section_modulus,
    parallel_axis,
    rectangular_area,
    rectangular_centroid,
    rectangular_moment_of_inertia,
};
