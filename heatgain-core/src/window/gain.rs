//! Hourly solar and conduction gain of a single window.

use bon::builder;
use heatgain_quantities::{power::Watts, temperature::Celsius};

use crate::{
    climate::DirectionClimate,
    results::Scenario,
    shading::Attenuation,
    window::{Window, shgc::corrected_shgc},
};

/// Radiant fraction of the conduction gain.
///
/// High-SHGC glazing runs cooler and radiates a smaller share of its conduction gain.
#[must_use]
pub const fn conduction_radiant_fraction(shgc: f64) -> f64 {
    if shgc <= 0.55 { 0.46 } else { 0.33 }
}

/// Gain of one window at one hour, split the way the RTS stage consumes it.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindowGain {
    /// Total transmitted solar gain.
    pub solar: Watts,

    /// Radiant solar gain that follows the solar RTS series.
    pub solar_radiant: Watts,

    /// Radiant solar gain that follows the non-solar RTS series.
    pub diffuse_radiant: Watts,

    pub solar_convective: Watts,
    pub conduction_radiant: Watts,
    pub conduction_convective: Watts,
}

impl WindowGain {
    pub fn conduction(&self) -> Watts {
        self.conduction_radiant + self.conduction_convective
    }
}

#[builder]
pub fn window_gain(
    window: &Window,
    climate: &DirectionClimate,
    scenario: Scenario,
    hour: usize,
    outdoor_temperature: Celsius,
    indoor_temperature: Celsius,
    attenuation: Attenuation,
) -> WindowGain {
    let area = window.area();

    let conduction =
        (window.u_value * area * (outdoor_temperature - indoor_temperature)).finite_or_zero();
    let conduction_radiant = conduction * conduction_radiant_fraction(window.shgc);

    let irradiance = climate.irradiance(scenario, hour);
    let shgc = corrected_shgc(window, climate.incidence_angle[hour]);
    let beam = (irradiance.beam * area * (shgc.direct * attenuation.beam)).finite_or_zero();
    let diffuse =
        (irradiance.diffuse * area * (shgc.diffuse * attenuation.diffuse)).finite_or_zero();
    let radiant_fraction = attenuation.radiant_fraction;

    // Indoor devices absorb the beam and re-radiate it diffusely.
    let (solar_radiant, diffuse_radiant) = if attenuation.is_indoor {
        (Watts::ZERO, (beam + diffuse) * radiant_fraction)
    } else {
        (beam * radiant_fraction, diffuse * radiant_fraction)
    };

    WindowGain {
        solar: beam + diffuse,
        solar_radiant,
        diffuse_radiant,
        solar_convective: (beam + diffuse) * (1.0 - radiant_fraction),
        conduction_radiant,
        conduction_convective: conduction - conduction_radiant,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use heatgain_quantities::{irradiance::WattsPerSquareMeter, transmittance::UValue};

    use super::*;
    use crate::{climate::tests::sunny_day, profile::HOURS_PER_DAY, window::WindowId};

    fn south_window() -> Window {
        let mut window = Window::new(WindowId(1));
        window.u_value = UValue::from(1.1);
        window.shgc = 0.6;
        window.width = 1.0;
        window.height = 2.0;
        window
    }

    fn gain(window: &Window, hour: usize, outdoor: f64, attenuation: Attenuation) -> WindowGain {
        window_gain()
            .window(window)
            .climate(&sunny_day(600.0, 0.7))
            .scenario(Scenario::Design)
            .hour(hour)
            .outdoor_temperature(Celsius::from(outdoor))
            .indoor_temperature(Celsius::from(24.0))
            .attenuation(attenuation)
            .call()
    }

    #[test]
    fn test_conduction() {
        let gain = gain(&south_window(), 2, 32.0, Attenuation::NONE);
        assert_abs_diff_eq!(gain.conduction().value(), 17.6, epsilon = 1e-9);
        assert_abs_diff_eq!(gain.conduction_radiant.value(), 17.6 * 0.33, epsilon = 1e-9);
        assert_eq!(gain.solar, Watts::ZERO);
    }

    #[test]
    fn test_low_shgc_conduction_split() {
        let mut window = south_window();
        window.shgc = 0.5;
        let gain = gain(&window, 2, 32.0, Attenuation::NONE);
        assert_abs_diff_eq!(gain.conduction_radiant.value(), 17.6 * 0.46, epsilon = 1e-9);
    }

    #[test]
    fn test_unshaded_pooling() {
        let gain = gain(&south_window(), 12, 24.0, Attenuation::NONE);
        assert!(gain.solar > Watts::ZERO);
        assert!(gain.solar_radiant > Watts::ZERO);
        assert!(gain.diffuse_radiant > Watts::ZERO);
        assert_eq!(gain.solar_convective, Watts::ZERO);
        assert_abs_diff_eq!(
            (gain.solar_radiant + gain.diffuse_radiant).value(),
            gain.solar.value(),
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_indoor_shading_pools_everything_as_diffuse() {
        let attenuation =
            Attenuation { beam: 0.6, diffuse: 0.6, radiant_fraction: 0.7, is_indoor: true };
        let shaded = gain(&south_window(), 12, 24.0, attenuation);
        let unshaded = gain(&south_window(), 12, 24.0, Attenuation::NONE);
        assert_eq!(shaded.solar_radiant, Watts::ZERO);
        assert_abs_diff_eq!(shaded.solar.value(), unshaded.solar.value() * 0.6, epsilon = 1e-9);
        let solar = shaded.solar.value();
        assert_abs_diff_eq!(shaded.diffuse_radiant.value(), solar * 0.7, epsilon = 1e-9);
        assert_abs_diff_eq!(shaded.solar_convective.value(), solar * 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_scenario_irradiance() {
        let constant = |value: f64| [WattsPerSquareMeter::from(value); HOURS_PER_DAY];
        let climate = DirectionClimate {
            clear_sky_global: constant(500.0),
            clear_sky_beam: constant(300.0),
            incidence_angle: [0.0; HOURS_PER_DAY],
            profile_angle: [0.0; HOURS_PER_DAY],
            typical_global: constant(200.0),
            typical_beam: constant(50.0),
        };
        let window = south_window();
        let solar = |scenario: Scenario| {
            window_gain()
                .window(&window)
                .climate(&climate)
                .scenario(scenario)
                .hour(12)
                .outdoor_temperature(Celsius::from(24.0))
                .indoor_temperature(Celsius::from(24.0))
                .attenuation(Attenuation::NONE)
                .call()
                .solar
                .value()
        };

        // Modern glazing: direct 0.6 at normal incidence, diffuse 0.6 × 0.84.
        let design = 300.0 * 2.0 * 0.6 + 200.0 * 2.0 * 0.504;
        assert_abs_diff_eq!(solar(Scenario::Design), design, epsilon = 1e-9);
        let typical = 50.0 * 2.0 * 0.6 + 150.0 * 2.0 * 0.504;
        assert_abs_diff_eq!(solar(Scenario::Typical), typical, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_is_zero() {
        let mut window = south_window();
        window.u_value = UValue::from(f64::NAN);
        let gain = gain(&window, 12, 30.0, Attenuation::NONE);
        assert_eq!(gain.conduction(), Watts::ZERO);
        assert!(gain.solar > Watts::ZERO);
    }
}
