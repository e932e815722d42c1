//! Point light distance attenuation
//!
//! Light intensity falls off as `1 / (constant + linear * d + quadratic * d^2)`.
//! [`Attenuation::for_range`] picks coefficients from the widely used table
//! that maps a desired light range to terms that fade the light out by that
//! distance.

use serde::{Serialize, Deserialize};

/// Attenuation table rows: (range, constant, linear, quadratic)
pub const ATTENUATION_TABLE: [(f32, f32, f32, f32); 12] = [
    (7.0, 1.0, 0.7, 1.8),
    (13.0, 1.0, 0.35, 0.44),
    (20.0, 1.0, 0.22, 0.20),
    (32.0, 1.0, 0.14, 0.07),
    (50.0, 1.0, 0.09, 0.032),
    (65.0, 1.0, 0.07, 0.017),
    (100.0, 1.0, 0.045, 0.0075),
    (160.0, 1.0, 0.027, 0.0028),
    (200.0, 1.0, 0.022, 0.0019),
    (325.0, 1.0, 0.014, 0.0007),
    (600.0, 1.0, 0.007, 0.0002),
    (3250.0, 1.0, 0.0014, 0.000007),
];

/// Constant, linear and quadratic attenuation terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Create attenuation terms
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Terms for a light that should reach `range` units
    ///
    /// Uses the smallest table row whose range covers `range`. Ranges past the
    /// end of the table use the last row.
    pub fn for_range(range: f32) -> Self {
        let row = ATTENUATION_TABLE
            .iter()
            .find(|(max_range, ..)| range <= *max_range)
            .unwrap_or(&ATTENUATION_TABLE[ATTENUATION_TABLE.len() - 1]);
        Self::new(row.1, row.2, row.3)
    }

    /// Intensity multiplier at `distance`
    pub fn factor(&self, distance: f32) -> f32 {
        let denominator = self.constant + self.linear * distance + self.quadratic * distance * distance;
        if denominator > 0.0 { 1.0 / denominator } else { 1.0 }
    }
}

impl Default for Attenuation {
    /// The range-50 row: 1.0, 0.09, 0.032
    fn default() -> Self {
        Self::for_range(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_range_50() {
        assert_eq!(Attenuation::default(), Attenuation::new(1.0, 0.09, 0.032));
    }

    #[test]
    fn test_for_range_picks_covering_row() {
        assert_eq!(Attenuation::for_range(7.0), Attenuation::new(1.0, 0.7, 1.8));
        assert_eq!(Attenuation::for_range(8.0), Attenuation::new(1.0, 0.35, 0.44));
        assert_eq!(Attenuation::for_range(0.5), Attenuation::new(1.0, 0.7, 1.8));
        assert_eq!(Attenuation::for_range(100.0), Attenuation::new(1.0, 0.045, 0.0075));
        assert_eq!(Attenuation::for_range(10_000.0), Attenuation::new(1.0, 0.0014, 0.000007));
    }

    #[test]
    fn test_factor() {
        let attenuation = Attenuation::default();
        assert_relative_eq!(attenuation.factor(0.0), 1.0);
        assert_relative_eq!(attenuation.factor(10.0), 1.0 / (1.0 + 0.9 + 3.2), epsilon = 1e-6);
        assert!(attenuation.factor(50.0) < 0.02);
    }

    #[test]
    fn test_factor_decreases_with_distance() {
        for (range, ..) in ATTENUATION_TABLE {
            let attenuation = Attenuation::for_range(range);
            assert!(attenuation.factor(range * 0.5) > attenuation.factor(range));
        }
    }

    #[test]
    fn test_degenerate_terms_do_not_divide_by_zero() {
        assert_eq!(Attenuation::new(0.0, 0.0, 0.0).factor(3.0), 1.0);
    }
}
