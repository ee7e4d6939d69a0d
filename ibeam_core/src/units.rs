//! # Unit Types
//!
//! Type-safe wrappers for the handful of SI units the section engine mixes.
//! Geometry is entered in millimetres and stresses in N/mm², while moments
//! and forces are reported in kN·m and kN. The conversions between the two
//! families live here so the formulas never carry bare `1e6` or `1000` factors.
//!
//! ## Fixed Convention
//!
//! - Length: millimetres (mm) for section geometry, metres (m) for span
//! - Stress: newtons per square millimetre (N/mm²)
//! - Moment: newton-millimetres (N·mm) internally, kilonewton-metres (kN·m) reported
//! - Force: newtons (N) internally, kilonewtons (kN) reported
//!
//! ## Example
//!
//! ```rust
//! use ibeam_core::units::{KilonewtonMeters, NewtonMillimeters};
//!
//! let applied = KilonewtonMeters(50.0);
//! let internal: NewtonMillimeters = applied.into();
//! assert_eq!(internal.0, 50_000_000.0);
//! ```

use serde::{Deserialize, Serialize};

/// N·mm per kN·m (1000 N/kN × 1000 mm/m)
pub const NMM_PER_KNM: f64 = 1_000_000.0;

/// N per kN
pub const N_PER_KN: f64 = 1_000.0;

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<KilonewtonMeters> for NewtonMillimeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * NMM_PER_KNM)
    }
}

impl NewtonMillimeters {
    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / N_PER_KN)
    }
}

impl Kilonewtons {
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let m = KilonewtonMeters(2.5);
        let nmm: NewtonMillimeters = m.into();
        assert_eq!(nmm.0, 2_500_000.0);
    }

    #[test]
    fn test_newtons_to_kilonewtons() {
        let kn: Kilonewtons = Newtons(1500.0).into();
        assert_eq!(kn.value(), 1.5);
    }

    #[test]
    fn test_serialization() {
        let m = KilonewtonMeters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: KilonewtonMeters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
