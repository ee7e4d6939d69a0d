//! # I-Beam Section Analysis
//!
//! Turns the flat input record (three plate sizes, span, stress limits,
//! applied moment) into a full set of section properties, capacities and
//! induced effects.
//!
//! ## Assumptions
//!
//! - Three rectangular plates stacked lower flange, web, upper flange
//! - Sagging moment: tension at the bottom fiber
//! - Simply-supported span for allowable loads
//! - No shear or deflection checks
//!
//! ## Example
//!
//! ```rust
//! use ibeam_core::calculations::ibeam::{calculate, IBeamInput};
//!
//! let input = IBeamInput {
//!     lower_flange_width_mm: 150.0,
//!     lower_flange_height_mm: 20.0,
//!     web_width_mm: 10.0,
//!     web_height_mm: 300.0,
//!     upper_flange_width_mm: 150.0,
//!     upper_flange_height_mm: 20.0,
//!     span_m: 6.0,
//!     allowable_stress_compression_mpa: 150.0,
//!     allowable_stress_tension_mpa: 150.0,
//!     applied_moment_knm: 50.0,
//! };
//!
//! let result = calculate(&input);
//!
//! println!("I   = {:.4} mm4", result.moment_of_inertia_mm4);
//! println!("MOR = {:.4} kN-m", result.moment_of_resistance_knm);
//! assert!(result.passes());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::section::{CompositeSection, GoverningFiber, RectangularPart};

/// Input parameters for an I-beam section check.
///
/// Field order matches the order values are collected in. Geometry is in mm,
/// span in m, stresses in N/mm², moment in kN·m.
///
/// ## JSON Example
///
/// ```json
/// {
///   "lower_flange_width_mm": 150.0,
///   "lower_flange_height_mm": 20.0,
///   "web_width_mm": 10.0,
///   "web_height_mm": 300.0,
///   "upper_flange_width_mm": 150.0,
///   "upper_flange_height_mm": 20.0,
///   "span_m": 6.0,
///   "allowable_stress_compression_mpa": 150.0,
///   "allowable_stress_tension_mpa": 150.0,
///   "applied_moment_knm": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IBeamInput {
    pub lower_flange_width_mm: f64,
    pub lower_flange_height_mm: f64,
    pub web_width_mm: f64,
    pub web_height_mm: f64,
    pub upper_flange_width_mm: f64,
    pub upper_flange_height_mm: f64,

    /// Simply-supported span (m)
    pub span_m: f64,

    /// Allowable compressive bending stress (N/mm²)
    pub allowable_stress_compression_mpa: f64,

    /// Allowable tensile bending stress (N/mm²)
    pub allowable_stress_tension_mpa: f64,

    /// Applied bending moment (kN·m)
    pub applied_moment_knm: f64,
}

impl IBeamInput {
    /// Check that every value is finite and that dimensions, span and stress
    /// limits are positive.
    ///
    /// Advisory only: [`calculate`] does not call this and will happily
    /// produce inf/NaN for degenerate input.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("lower_flange_width_mm", self.lower_flange_width_mm),
            ("lower_flange_height_mm", self.lower_flange_height_mm),
            ("web_width_mm", self.web_width_mm),
            ("web_height_mm", self.web_height_mm),
            ("upper_flange_width_mm", self.upper_flange_width_mm),
            ("upper_flange_height_mm", self.upper_flange_height_mm),
            ("span_m", self.span_m),
            ("allowable_stress_compression_mpa", self.allowable_stress_compression_mpa),
            ("allowable_stress_tension_mpa", self.allowable_stress_tension_mpa),
        ];

        for (field, value) in positive {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
            }
        }

        if !self.applied_moment_knm.is_finite() {
            return Err(CalcError::invalid_input(
                "applied_moment_knm",
                self.applied_moment_knm.to_string(),
                "Value must be finite",
            ));
        }

        Ok(())
    }

    /// Build the composite section described by this record
    pub fn to_section(&self) -> CompositeSection {
        CompositeSection::new(
            RectangularPart::new(self.lower_flange_width_mm, self.lower_flange_height_mm),
            RectangularPart::new(self.web_width_mm, self.web_height_mm),
            RectangularPart::new(self.upper_flange_width_mm, self.upper_flange_height_mm),
        )
        .with_span(self.span_m)
        .with_allowable_stresses(
            self.allowable_stress_tension_mpa,
            self.allowable_stress_compression_mpa,
        )
        .with_applied_moment(self.applied_moment_knm)
    }
}

/// Results of an I-beam section check.
///
/// The eleven report values come first, in report order. Non-finite values
/// (from degenerate input) serialize as `null`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "moment_of_inertia_mm4": 176300000.0,
///   "max_tensile_moment_knm": 155.5588,
///   "max_compressive_moment_knm": 155.5588,
///   "moment_of_resistance_knm": 155.5588,
///   "max_udl_kn_per_m": 34.5686,
///   "max_total_load_kn": 207.4118,
///   "max_concentrated_load_kn": 103.7059,
///   "max_induced_tensile_stress_mpa": 48.2133,
///   "max_induced_compressive_stress_mpa": 48.2133,
///   "total_tensile_force_kn": 108.4799,
///   "total_compressive_force_kn": 108.4799,
///   "governing_fiber": "Compression",
///   "demand_ratio": 0.3214,
///   "total_height_mm": 340.0,
///   "centroid_mm": 170.0,
///   "y_max_tension_mm": 170.0,
///   "y_max_compression_mm": 170.0,
///   "section_modulus_tension_mm3": 1037058.8,
///   "section_modulus_compression_mm3": 1037058.8
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IBeamResult {
    // === Section Property ===
    /// Moment of inertia about the neutral axis (mm⁴)
    pub moment_of_inertia_mm4: f64,

    // === Capacity ===
    /// Moment at which the bottom fiber reaches the allowable tensile stress (kN·m)
    pub max_tensile_moment_knm: f64,

    /// Moment at which the top fiber reaches the allowable compressive stress (kN·m)
    pub max_compressive_moment_knm: f64,

    /// Smaller of the two capacity moments (kN·m)
    pub moment_of_resistance_knm: f64,

    /// Allowable uniform load over the span: 8·MOR/L² (kN/m)
    pub max_udl_kn_per_m: f64,

    /// Allowable total uniform load: w·L (kN)
    pub max_total_load_kn: f64,

    /// Allowable midspan point load: 4·MOR/L (kN)
    pub max_concentrated_load_kn: f64,

    // === Response to Applied Moment ===
    /// Bottom fiber stress (N/mm²)
    pub max_induced_tensile_stress_mpa: f64,

    /// Top fiber stress (N/mm²)
    pub max_induced_compressive_stress_mpa: f64,

    /// Tensile stress block resultant (kN)
    pub total_tensile_force_kn: f64,

    /// Compressive stress block resultant (kN)
    pub total_compressive_force_kn: f64,

    // === Summary ===
    /// Fiber that sets the moment of resistance
    pub governing_fiber: GoverningFiber,

    /// Applied moment / moment of resistance
    pub demand_ratio: f64,

    // === Geometry (for reference) ===
    pub total_height_mm: f64,
    pub centroid_mm: f64,
    pub y_max_tension_mm: f64,
    pub y_max_compression_mm: f64,
    pub section_modulus_tension_mm3: f64,
    pub section_modulus_compression_mm3: f64,
}

impl IBeamResult {
    /// Evaluate every quantity of a section
    pub fn from_section(section: &CompositeSection) -> Self {
        IBeamResult {
            moment_of_inertia_mm4: section.moment_of_inertia(),
            max_tensile_moment_knm: section.max_tensile_moment(),
            max_compressive_moment_knm: section.max_compressive_moment(),
            moment_of_resistance_knm: section.moment_of_resistance(),
            max_udl_kn_per_m: section.max_udl(),
            max_total_load_kn: section.max_total_load(),
            max_concentrated_load_kn: section.max_concentrated_load(),
            max_induced_tensile_stress_mpa: section.max_induced_tensile_stress(),
            max_induced_compressive_stress_mpa: section.max_induced_compressive_stress(),
            total_tensile_force_kn: section.total_tensile_force(),
            total_compressive_force_kn: section.total_compressive_force(),
            governing_fiber: section.governing_fiber(),
            demand_ratio: section.demand_ratio(),
            total_height_mm: section.total_height(),
            centroid_mm: section.centroid(),
            y_max_tension_mm: section.y_max_tension(),
            y_max_compression_mm: section.y_max_compression(),
            section_modulus_tension_mm3: section.section_modulus_tension(),
            section_modulus_compression_mm3: section.section_modulus_compression(),
        }
    }

    /// The applied moment is within the moment of resistance
    pub fn passes(&self) -> bool {
        self.demand_ratio <= 1.0
    }
}

/// Analyze an I-beam section.
///
/// Pure and infallible: inputs are taken as given. Use
/// [`IBeamInput::validate`] beforehand to screen degenerate values.
///
/// # Example
///
/// ```rust
/// use ibeam_core::calculations::ibeam::{calculate, IBeamInput};
///
/// let input = IBeamInput {
///     lower_flange_width_mm: 100.0,
///     lower_flange_height_mm: 20.0,
///     web_width_mm: 100.0,
///     web_height_mm: 20.0,
///     upper_flange_width_mm: 100.0,
///     upper_flange_height_mm: 20.0,
///     span_m: 3.0,
///     allowable_stress_compression_mpa: 100.0,
///     allowable_stress_tension_mpa: 100.0,
///     applied_moment_knm: 1.0,
/// };
///
/// let result = calculate(&input);
/// assert_eq!(result.centroid_mm, 30.0);
/// ```
pub fn calculate(input: &IBeamInput) -> IBeamResult {
    let mut section = input.to_section();
    section.finalize_geometry();
    let result = IBeamResult::from_section(&section);

    debug!(
        "I-beam: H = {} mm, ybar = {} mm, I = {} mm4, MOR = {} kN-m ({:?} governs)",
        result.total_height_mm,
        result.centroid_mm,
        result.moment_of_inertia_mm4,
        result.moment_of_resistance_knm,
        result.governing_fiber
    );

    result
}
