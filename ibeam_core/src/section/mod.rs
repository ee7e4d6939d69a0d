//! # Built-Up Sections
//!
//! A three-part I-section assembled from rectangles: lower flange, web and
//! upper flange, stacked bottom to top.
//!
//! ```text
//!     ┌───────────────┐  upper flange   ← compression fiber
//!     └─────┐   ┌─────┘
//!           │   │        web
//!     ─ ─ ─ │ ─ │ ─ ─ ─  neutral axis (ȳ above bottom)
//!           │   │
//!     ┌─────┘   └─────┐
//!     └───────────────┘  lower flange   ← tension fiber
//! ```
//!
//! - [`RectangularPart`] - one plate with its own area, centroid and inertia
//! - [`CompositeSection`] - the stacked section and every capacity derived from it

pub mod composite;
pub mod part;

pub use composite::CompositeSection;
pub use part::RectangularPart;

use serde::{Deserialize, Serialize};

/// Position of a part within the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartRole {
    /// Bottom plate, carries the tension fiber
    LowerFlange,
    /// Vertical plate between the flanges
    Web,
    /// Top plate, carries the compression fiber
    UpperFlange,
}

impl PartRole {
    /// All roles in stacking order (bottom to top)
    pub const STACKING_ORDER: [PartRole; 3] =
        [PartRole::LowerFlange, PartRole::Web, PartRole::UpperFlange];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PartRole::LowerFlange => "Lower flange",
            PartRole::Web => "Web",
            PartRole::UpperFlange => "Upper flange",
        }
    }
}

impl std::fmt::Display for PartRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Extreme fiber whose stress limit sets the moment of resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningFiber {
    /// Bottom fiber reaches the allowable tensile stress first
    Tension,
    /// Top fiber reaches the allowable compressive stress first
    Compression,
}

impl GoverningFiber {
    pub fn display_name(&self) -> &'static str {
        match self {
            GoverningFiber::Tension => "Tension (bottom fiber)",
            GoverningFiber::Compression => "Compression (top fiber)",
        }
    }
}

impl std::fmt::Display for GoverningFiber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
