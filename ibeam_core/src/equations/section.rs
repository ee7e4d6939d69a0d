//! # Cross-Section Property Formulas
//!
//! Formulas for the geometric properties of rectangular parts and of
//! sections built by stacking them.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `Z` = Elastic section modulus (I/y, where y = distance to extreme fiber)
//! - `b` = Width of part
//! - `d` = Depth (height) of part
//! - `ȳ` = Centroid height measured from the section bottom
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3
//! - Hibbeler, Mechanics of Materials, Appendix A (parallel-axis theorem)

// =============================================================================
// RECTANGULAR PART PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for a rectangular part
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use ibeam_core::equations::section::rectangular_area;
///
/// // 150 x 20 mm flange plate
/// assert_eq!(rectangular_area(150.0, 20.0), 3000.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Calculate moment of inertia for a rectangular part about its own centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← centroidal axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula (Strong Axis Bending)
/// I = bd³/12
///
/// # Returns
/// Moment of inertia in fourth power of input units (mm⁴)
///
/// # Example
/// ```rust
/// use ibeam_core::equations::section::rectangular_moment_of_inertia;
///
/// // 10 x 300 mm web
/// let i = rectangular_moment_of_inertia(10.0, 300.0);
/// assert_eq!(i, 22_500_000.0);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Height of a rectangular part's centroid above the section bottom
///
/// # Formula
/// ȳ = e + d/2, where `e` is the elevation of the part's bottom edge
#[inline]
pub fn rectangular_centroid(elevation: f64, d: f64) -> f64 {
    elevation + d / 2.0
}

// =============================================================================
// COMPOSITE SECTION PROPERTIES
// =============================================================================

/// Transfer a centroidal moment of inertia to a parallel axis
///
/// # Formula (Parallel-Axis Theorem)
/// I = I_c + A × h²
///
/// # Arguments
/// * `i_centroidal` - Moment of inertia about the part's own centroid
/// * `area` - Area of the part
/// * `offset` - Distance between the two parallel axes
///
/// # Example
/// ```rust
/// use ibeam_core::equations::section::parallel_axis;
///
/// // 150 x 20 flange, 160 mm from the neutral axis
/// let i = parallel_axis(100_000.0, 3000.0, 160.0);
/// assert_eq!(i, 100_000.0 + 3000.0 * 160.0 * 160.0);
/// ```
#[inline]
pub fn parallel_axis(i_centroidal: f64, area: f64, offset: f64) -> f64 {
    i_centroidal + area * offset.powi(2)
}

/// Area-weighted centroid of a set of parts
///
/// # Formula
/// ȳ = Σ(Aᵢ × ȳᵢ) / ΣAᵢ
///
/// # Arguments
/// * `parts` - `(area, centroid)` pairs
///
/// An empty slice or zero total area yields NaN.
///
/// # Example
/// ```rust
/// use ibeam_core::equations::section::composite_centroid;
///
/// let ybar = composite_centroid(&[(2000.0, 10.0), (2000.0, 30.0), (2000.0, 50.0)]);
/// assert_eq!(ybar, 30.0);
/// ```
pub fn composite_centroid(parts: &[(f64, f64)]) -> f64 {
    let (first_moment, total_area) = parts
        .iter()
        .fold((0.0, 0.0), |(moment, area), &(a, y)| (moment + a * y, area + a));
    first_moment / total_area
}

/// Elastic section modulus for a given extreme fiber
///
/// # Formula
/// Z = I / y
///
/// For an unsymmetric section the top and bottom fibers have different
/// moduli; call once per fiber.
#[inline]
pub fn elastic_section_modulus(i: f64, y: f64) -> f64 {
    i / y
}

// =============================================================================
// UNIT TESTS
// =============================================================================
