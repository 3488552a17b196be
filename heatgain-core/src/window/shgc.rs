//! Angle-of-incidence correction of the solar heat gain coefficient.

use itertools::Itertools;

use crate::window::{Construction, Window};

const INCIDENCE_ANGLES: [f64; 10] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// Relative SHGC at [`INCIDENCE_ANGLES`], falling from unity at normal incidence to zero at grazing.
type CorrectionCurve = [f64; 10];

const HISTORIC: CorrectionCurve = [1.0, 1.0, 0.995, 0.99, 0.977, 0.953, 0.907, 0.779, 0.488, 0.0];
const OLDER_DOUBLE: CorrectionCurve = [1.0, 1.0, 0.99, 0.98, 0.974, 0.934, 0.842, 0.658, 0.342, 0.0];
const STANDARD: CorrectionCurve = [1.0, 1.0, 0.99, 0.98, 0.97, 0.93, 0.83, 0.64, 0.33, 0.0];
const MODERN: CorrectionCurve = [1.0, 0.99, 0.98, 0.97, 0.95, 0.90, 0.80, 0.60, 0.30, 0.0];

impl Construction {
    const fn correction_curve(self) -> &'static CorrectionCurve {
        match self.table_key() {
            Self::Historic => &HISTORIC,
            Self::OlderDouble => &OLDER_DOUBLE,
            Self::Modern => &MODERN,
            Self::Custom | Self::Standard => &STANDARD,
        }
    }

    /// Hemispherically averaged SHGC relative to normal incidence.
    #[must_use]
    pub const fn diffuse_multiplier(self) -> f64 {
        match self.table_key() {
            Self::Historic => 0.91,
            Self::OlderDouble => 0.87,
            Self::Modern => 0.84,
            Self::Custom | Self::Standard => 0.86,
        }
    }

    /// Relative SHGC at the incidence angle in degrees.
    ///
    /// Linear between the breakpoints, angles outside 0..=90° are clamped.
    #[must_use]
    pub fn angular_factor(self, incidence_angle: f64) -> f64 {
        let curve = self.correction_curve();
        let angle = incidence_angle.clamp(INCIDENCE_ANGLES[0], INCIDENCE_ANGLES[9]);
        INCIDENCE_ANGLES
            .iter()
            .zip(curve)
            .tuple_windows()
            .find(|(_, (upper_angle, _))| angle <= **upper_angle)
            .map_or(curve[9], |((x0, y0), (x1, y1))| y0 + (angle - x0) * (y1 - y0) / (x1 - x0))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CorrectedShgc {
    pub direct: f64,
    pub diffuse: f64,
}

/// Effective SHGC for beam and diffuse radiation at the incidence angle in degrees.
pub fn corrected_shgc(window: &Window, incidence_angle: f64) -> CorrectedShgc {
    let construction = window.construction;
    let direct = if incidence_angle >= 90.0 || incidence_angle.is_nan() {
        0.0
    } else {
        window.shgc * construction.angular_factor(incidence_angle)
    };
    CorrectedShgc { direct, diffuse: window.shgc * construction.diffuse_multiplier() }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::window::WindowId;

    const CONSTRUCTIONS: [Construction; 5] = [
        Construction::Custom,
        Construction::Modern,
        Construction::Standard,
        Construction::OlderDouble,
        Construction::Historic,
    ];

    #[test]
    fn test_endpoints() {
        for construction in CONSTRUCTIONS {
            assert_abs_diff_eq!(construction.angular_factor(0.0), 1.0);
            assert_abs_diff_eq!(construction.angular_factor(90.0), 0.0);
            assert_abs_diff_eq!(construction.angular_factor(-15.0), 1.0);
        }
    }

    #[test]
    fn test_monotonic() {
        for construction in CONSTRUCTIONS {
            let mut previous = construction.angular_factor(0.0);
            for step in 1..=180 {
                let factor = construction.angular_factor(f64::from(step) * 0.5);
                assert!(factor <= previous + 1e-12, "{construction:?} rises at {step}");
                previous = factor;
            }
        }
    }

    #[test]
    fn test_interpolation() {
        // Halfway between 0.83 and 0.64.
        assert_abs_diff_eq!(Construction::Standard.angular_factor(65.0), 0.735, epsilon = 1e-9);
        assert_abs_diff_eq!(
            Construction::Custom.angular_factor(65.0),
            Construction::Standard.angular_factor(65.0),
        );
    }

    #[test]
    fn test_corrected_shgc() {
        let window = Window::new(WindowId(1));
        let shgc = corrected_shgc(&window, 60.0);
        assert_abs_diff_eq!(shgc.direct, 0.5 * 0.80);
        assert_abs_diff_eq!(shgc.diffuse, 0.5 * 0.84);
        assert_abs_diff_eq!(corrected_shgc(&window, 95.0).direct, 0.0);
        assert_abs_diff_eq!(corrected_shgc(&window, 95.0).diffuse, 0.5 * 0.84);
    }
}
