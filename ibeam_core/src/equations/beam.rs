//! # Bending Capacity and Simply-Supported Beam Formulas
//!
//! Elastic bending relations (σ = M·y/I) and the simply-supported load cases
//! used to turn a moment of resistance into allowable span loads.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `M` = Bending moment
//! - `P` = Concentrated load at midspan
//! - `w` = Uniform load intensity (force per unit length)
//! - `f` = Bending stress
//! - `I` = Moment of inertia
//! - `y` = Distance from neutral axis to the extreme fiber
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//!
//! Hogging moments are not modelled; the bottom fiber is always the
//! tension fiber.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

use crate::units::NMM_PER_KNM;

// =============================================================================
// ELASTIC BENDING
// =============================================================================

/// Moment a section can carry before the fiber at distance `y` reaches stress `f`
///
/// # Formula
/// M = f × I / (y × 10⁶)
///
/// Takes N/mm², mm⁴ and mm and returns kN·m. The 10⁶ is folded into the
/// divisor, not applied to the N·mm result.
///
/// # Example
/// ```rust
/// use ibeam_core::equations::beam::moment_capacity_knm;
///
/// let m = moment_capacity_knm(150.0, 1_000_000.0, 50.0);
/// assert_eq!(m, 3.0);
/// ```
#[inline]
pub fn moment_capacity_knm(f: f64, i: f64, y: f64) -> f64 {
    f * i / (y * NMM_PER_KNM)
}

/// Bending stress at distance `y` from the neutral axis
///
/// # Formula
/// f = M × y / I
///
/// # Example
/// ```rust
/// use ibeam_core::equations::beam::bending_stress;
///
/// let f = bending_stress(3_000_000.0, 50.0, 1_000_000.0);
/// assert_eq!(f, 150.0);
/// ```
#[inline]
pub fn bending_stress(m: f64, y: f64, i: f64) -> f64 {
    m * y / i
}

/// Resultant of a triangular stress block
///
/// Stress varies linearly from zero at the neutral axis to `f_max` at the
/// extreme fiber, so the average over the zone is half the peak.
///
/// # Formula
/// F = f_max / 2 × A
#[inline]
pub fn triangular_block_force(f_max: f64, area: f64) -> f64 {
    f_max / 2.0 * area
}

// =============================================================================
// SIMPLY-SUPPORTED CAPACITY INVERSIONS
// =============================================================================

/// Largest full-span uniform load whose midspan moment equals `m`
///
/// # Formula (Roark's Table 8.1, Case 2e, M_max = wL²/8 inverted)
/// w = 8M / L²
///
/// # Example
/// ```rust
/// use ibeam_core::equations::beam::uniform_load_for_moment;
///
/// let w = uniform_load_for_moment(90.0, 6.0);
/// assert_eq!(w, 20.0);
/// ```
#[inline]
pub fn uniform_load_for_moment(m: f64, l: f64) -> f64 {
    8.0 * m / l.powi(2)
}

/// Largest midspan concentrated load whose moment equals `m`
///
/// # Formula (Roark's Table 8.1, Case 1e with a = L/2, M_max = PL/4 inverted)
/// P = 4M / L
#[inline]
pub fn point_load_for_moment(m: f64, l: f64) -> f64 {
    4.0 * m / l
}

// =============================================================================
// UNIT TESTS
// =============================================================================
