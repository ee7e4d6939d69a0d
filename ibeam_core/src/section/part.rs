//! # Rectangular Part
//!
//! One rectangular region of a built-up section: a flange plate or the web.
//! A part knows its own dimensions, where its bottom edge sits within the
//! section, and how far its centroid is from the composite neutral axis.

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    parallel_axis, rectangular_area, rectangular_centroid, rectangular_moment_of_inertia,
};

/// A rectangular sub-region of a composite cross-section.
///
/// All dimensions are in millimetres. `elevation_mm` and `axis_offset_mm`
/// are owned by the stacking step of
/// [`CompositeSection`](super::CompositeSection); a freshly built part has
/// both at zero.
///
/// # Example
///
/// ```rust
/// use ibeam_core::section::RectangularPart;
///
/// let mut flange = RectangularPart::new(150.0, 20.0);
/// flange.set_elevation(320.0);
/// flange.set_axis_offset(170.0);
///
/// assert_eq!(flange.centroid(), 330.0);
/// assert_eq!(flange.axis_offset(), 160.0);
/// assert_eq!(
///     flange.moment_of_inertia_about_neutral_axis(),
///     flange.self_moment_of_inertia() + 3000.0 * 160.0 * 160.0
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectangularPart {
    width_mm: f64,
    height_mm: f64,
    #[serde(default)]
    elevation_mm: f64,
    #[serde(default)]
    axis_offset_mm: f64,
}

impl RectangularPart {
    /// Create a part with the given width and height, not yet stacked.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        RectangularPart {
            width_mm,
            height_mm,
            elevation_mm: 0.0,
            axis_offset_mm: 0.0,
        }
    }

    pub fn set_width(&mut self, width_mm: f64) {
        self.width_mm = width_mm;
    }

    pub fn set_height(&mut self, height_mm: f64) {
        self.height_mm = height_mm;
    }

    /// Set the distance from the section bottom to this part's bottom edge.
    pub fn set_elevation(&mut self, elevation_mm: f64) {
        self.elevation_mm = elevation_mm;
    }

    /// Record the distance between this part's centroid and the composite
    /// centroid `composite_centroid_mm`. Always stored as a magnitude.
    pub fn set_axis_offset(&mut self, composite_centroid_mm: f64) {
        self.axis_offset_mm = (composite_centroid_mm - self.centroid()).abs();
    }

    pub fn width(&self) -> f64 {
        self.width_mm
    }

    pub fn height(&self) -> f64 {
        self.height_mm
    }

    pub fn elevation(&self) -> f64 {
        self.elevation_mm
    }

    pub fn axis_offset(&self) -> f64 {
        self.axis_offset_mm
    }

    /// Height of this part's centroid above the section bottom (mm)
    pub fn centroid(&self) -> f64 {
        rectangular_centroid(self.elevation_mm, self.height_mm)
    }

    /// Cross-sectional area (mm²)
    pub fn area(&self) -> f64 {
        rectangular_area(self.width_mm, self.height_mm)
    }

    /// Second moment of area about the part's own horizontal centroidal axis (mm⁴)
    pub fn self_moment_of_inertia(&self) -> f64 {
        rectangular_moment_of_inertia(self.width_mm, self.height_mm)
    }

    /// Second moment of area about the composite neutral axis (mm⁴)
    ///
    /// Only meaningful after [`set_axis_offset`](Self::set_axis_offset).
    pub fn moment_of_inertia_about_neutral_axis(&self) -> f64 {
        parallel_axis(self.self_moment_of_inertia(), self.area(), self.axis_offset_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_part_is_unstacked() {
        let part = RectangularPart::new(100.0, 20.0);
        assert_eq!(part.elevation(), 0.0);
        assert_eq!(part.axis_offset(), 0.0);
        assert_eq!(RectangularPart::default().area(), 0.0);
    }

    #[test]
    fn test_area_and_self_inertia_exact() {
        for (w, h) in [(150.0, 20.0), (10.0, 300.0), (7.5, 12.25), (0.3, 1e3)] {
            let part = RectangularPart::new(w, h);
            assert_eq!(part.area(), w * h);
            assert_eq!(part.self_moment_of_inertia(), w * h.powi(3) / 12.0);
        }
    }

    #[test]
    fn test_setters_assign_verbatim() {
        let mut part = RectangularPart::default();
        part.set_width(12.5);
        part.set_height(40.0);
        part.set_elevation(7.0);
        assert_eq!(part.width(), 12.5);
        assert_eq!(part.height(), 40.0);
        assert_eq!(part.elevation(), 7.0);
        assert_eq!(part.centroid(), 27.0);
    }

    #[test]
    fn test_axis_offset_is_magnitude() {
        let mut part = RectangularPart::new(100.0, 20.0);
        part.set_elevation(40.0); // centroid at 50

        part.set_axis_offset(80.0);
        assert_eq!(part.axis_offset(), 30.0);

        part.set_axis_offset(20.0);
        assert_eq!(part.axis_offset(), 30.0);

        part.set_axis_offset(50.0);
        assert_eq!(part.axis_offset(), 0.0);
    }

    #[test]
    fn test_parallel_axis_never_below_self_inertia() {
        let mut part = RectangularPart::new(80.0, 15.0);
        for ybar in [0.0, 3.0, 7.5, 100.0, -25.0] {
            part.set_axis_offset(ybar);
            assert!(part.moment_of_inertia_about_neutral_axis() >= part.self_moment_of_inertia());
        }
    }

    #[test]
    fn test_serde_defaults_for_stacking_fields() {
        let part: RectangularPart =
            serde_json::from_str(r#"{ "width_mm": 150.0, "height_mm": 20.0 }"#).unwrap();
        assert_eq!(part, RectangularPart::new(150.0, 20.0));
    }
}
