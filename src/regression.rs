//! Optimal point weight regression model.
//!
//! The point-weight recommendation is an affine function of draw weight,
//! arrow length, and spine rating. Its four coefficients were fitted
//! offline against spine-deflection chart data; nothing is retrained at
//! runtime, the model is plain configuration injected into the evaluator.

/// Offline-fitted coefficients of the spine regression.
///
/// The fit is two-level: arrow length sets both the slope and the
/// intercept of a per-spine linear model, hence the slope-of-slope /
/// intercept-of-intercept naming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointWeightModel {
    pub slope_slope: f64,
    pub slope_intercept: f64,
    pub intercept_slope: f64,
    pub intercept_intercept: f64,
}

impl Default for PointWeightModel {
    fn default() -> Self {
        Self {
            slope_slope: -0.001,
            slope_intercept: -0.174,
            intercept_slope: -3.885,
            intercept_intercept: 237.637,
        }
    }
}

impl PointWeightModel {
    /// Recommended point weight (grains) for one draw weight sample.
    ///
    /// `150 + 5·(-0.252·ibo + 81.8 - draw_weight + spine·(ss·len + si)
    /// + is·len + ii)`. The leading terms fold the bow's IBO rating and
    /// poundage into the spine-chart prediction.
    pub fn optimal_point_weight(
        &self,
        draw_weight: f64,
        arrow_length: f64,
        spine: f64,
        ibo: f64,
    ) -> f64 {
        150.0
            + 25.0 / 5.0
                * (-0.252 * ibo + 81.8 - draw_weight
                    + (self.slope_slope * arrow_length + self.slope_intercept) * spine
                    + self.intercept_slope * arrow_length
                    + self.intercept_intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_setup_point_weight_matches_reference() {
        let model = PointWeightModel::default();
        // spine 200, 28.25" arrow, 335 IBO: the whole expression collapses
        // to 574.07875 - 5 * draw_weight.
        let w = model.optimal_point_weight(70.0, 28.25, 200.0, 335.0);
        assert!((w - (574.07875 - 350.0)).abs() < 1e-9);
    }

    #[test]
    fn point_weight_decreases_with_draw_weight() {
        let model = PointWeightModel::default();
        let light = model.optimal_point_weight(40.0, 28.25, 200.0, 335.0);
        let heavy = model.optimal_point_weight(80.0, 28.25, 200.0, 335.0);
        assert!(heavy < light);
    }
}
