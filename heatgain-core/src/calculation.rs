//! Month selection and the hourly heat gain pipeline.

use bon::Builder;
use chrono::Month;
use heatgain_quantities::{
    area::SquareMeters,
    energy::{Hours, KilowattHours},
    power::Watts,
    temperature::Celsius,
};
use serde::Serialize;

use crate::{
    calendar::{COOLING_SEASON, FALLBACK_MONTH},
    climate::ClimateProvider,
    internal::{InternalGains, InternalLoads, internal_loads},
    prelude::*,
    profile::{DailyProfile, HOURS_PER_DAY},
    results::{CalculationResults, Components, Scenario, ScenarioResults},
    rts::{AccumulationSettings, RadiationKind, RtsFactors},
    shading::{ShadingMode, ShadingResponse},
    temperature::{TemperatureProfile, temperature_profile},
    ventilation::Ventilation,
    window::{
        Window,
        gain::{WindowGain, window_gain},
    },
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MonthSelection {
    /// Search the cooling season for the strongest solar exposure.
    #[default]
    Worst,

    Explicit(Month),
}

/// Everything the engine needs besides the climate data.
#[must_use]
#[derive(Builder)]
pub struct CalculationRequest<'a> {
    pub windows: &'a [Window],
    pub indoor_temperature: Celsius,

    /// Design maximum of the outdoor temperature.
    pub outdoor_temperature: Celsius,

    #[builder(default = SquareMeters::ZERO)]
    pub room_area: SquareMeters,

    #[builder(default)]
    pub accumulation: AccumulationSettings,

    #[builder(default)]
    pub internal_gains: InternalGains,

    #[builder(default)]
    pub ventilation: Ventilation,

    #[builder(default)]
    pub month: MonthSelection,
}

/// Results of both shading views for one month.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Calculation {
    pub month: Month,

    /// Whether the month came out of the worst-month search.
    pub worst_month_searched: bool,

    pub temperature_profile: TemperatureProfile,
    pub with_shading: CalculationResults,
    pub without_shading: CalculationResults,
}

impl Calculation {
    pub const fn results(&self, shading: ShadingMode) -> &CalculationResults {
        match shading {
            ShadingMode::Configured => &self.with_shading,
            ShadingMode::ForcedOff => &self.without_shading,
        }
    }
}

/// Daily clear-sky solar gain of the windows at their nominal SHGC, without angle or shading
/// corrections.
pub fn solar_potential(
    windows: &[Window],
    month: Month,
    provider: &impl ClimateProvider,
) -> KilowattHours {
    let power: Watts = windows
        .iter()
        .filter_map(|window| {
            let climate = provider.direction(month, window.direction)?;
            let area = window.area();
            let daily: Watts =
                climate.clear_sky_global.iter().map(|irradiance| *irradiance * area).sum();
            Some((daily * window.shgc).finite_or_zero())
        })
        .sum();
    power * Hours::ONE
}

/// Cooling-season month with the highest solar potential.
///
/// Ties go to the earlier month. Without any solar potential, the fallback month is returned.
#[must_use]
#[instrument(skip_all)]
pub fn worst_month(windows: &[Window], provider: &impl ClimateProvider) -> Month {
    let mut worst: Option<(Month, KilowattHours)> = None;
    for month in COOLING_SEASON {
        let potential = solar_potential(windows, month, provider);
        debug!(?month, %potential, "solar potential");
        if potential > worst.map_or(KilowattHours::ZERO, |(_, potential)| potential) {
            worst = Some((month, potential));
        }
    }
    let month = worst.map_or(FALLBACK_MONTH, |(month, _)| month);
    info!(?month, "selected the worst month");
    month
}

/// Gains accumulated by the RTS pool they end up in, along with the reported components.
#[derive(Default)]
struct Pools {
    solar_radiant: DailyProfile,
    nonsolar_radiant: DailyProfile,
    convective: DailyProfile,
    components: Components,
}

impl Pools {
    fn add_window(&mut self, hour: usize, gain: &WindowGain) {
        self.solar_radiant[hour] += gain.solar_radiant;
        self.nonsolar_radiant[hour] += gain.diffuse_radiant + gain.conduction_radiant;
        self.convective[hour] += gain.solar_convective + gain.conduction_convective;
        self.components.solar[hour] += gain.solar;
        self.components.conduction_radiant[hour] += gain.conduction_radiant;
        self.components.conduction_convective[hour] += gain.conduction_convective;
    }

    fn finish(
        mut self,
        internal: &InternalLoads,
        ventilation: DailyProfile,
        rts: Option<(RtsFactors, RtsFactors)>,
    ) -> ScenarioResults {
        self.nonsolar_radiant += internal.radiant;
        self.convective += internal.convective + ventilation;
        self.components.internal_radiant = internal.radiant;
        self.components.internal_convective = internal.convective;
        self.components.internal_latent = internal.latent;
        self.components.ventilation = ventilation;

        let radiant = match rts {
            Some((solar, nonsolar)) => {
                solar.apply(&self.solar_radiant) + nonsolar.apply(&self.nonsolar_radiant)
            }
            None => self.solar_radiant + self.nonsolar_radiant,
        };
        let sensible = (self.convective + radiant).finite_or_zero();
        let latent = internal.latent.finite_or_zero();
        ScenarioResults { sensible, latent, total: sensible + latent, components: self.components }
    }
}

/// Hourly loads of both scenarios in the month.
#[instrument(skip_all, fields(month = ?month, shading = ?shading))]
pub fn gains_for_month(
    request: &CalculationRequest<'_>,
    month: Month,
    outdoor: &TemperatureProfile,
    shading: ShadingMode,
    provider: &impl ClimateProvider,
) -> CalculationResults {
    let mut design = Pools::default();
    let mut typical = Pools::default();
    let mut incident_solar_power = DailyProfile::ZERO;

    for window in request.windows {
        let Some(climate) = provider.direction(month, window.direction) else {
            warn!(
                window = %window.id,
                direction = %window.direction,
                ?month,
                "no climate data, the window contributes nothing"
            );
            continue;
        };
        let area = window.area();
        for hour in 0..HOURS_PER_DAY {
            incident_solar_power[hour] += (climate.clear_sky_global[hour] * area).finite_or_zero();
        }
        let response = ShadingResponse::resolve(window, provider.shading(), shading);
        for (scenario, pools) in [(Scenario::Design, &mut design), (Scenario::Typical, &mut typical)]
        {
            for hour in 0..HOURS_PER_DAY {
                let gain = window_gain()
                    .window(window)
                    .climate(climate)
                    .scenario(scenario)
                    .hour(hour)
                    .outdoor_temperature(outdoor[hour])
                    .indoor_temperature(request.indoor_temperature)
                    .attenuation(response.at(climate.profile_angle[hour]))
                    .call();
                pools.add_window(hour, &gain);
            }
        }
    }

    let internal = internal_loads(&request.internal_gains, request.room_area);
    let ventilation = request.ventilation.gains(outdoor, request.indoor_temperature);
    let accumulation = request.accumulation;
    let rts = accumulation.include.then(|| {
        (
            RtsFactors::select(provider.rts(), accumulation, RadiationKind::Solar),
            RtsFactors::select(provider.rts(), accumulation, RadiationKind::Nonsolar),
        )
    });

    CalculationResults {
        design: design.finish(&internal, ventilation, rts),
        typical: typical.finish(&internal, ventilation, rts),
        incident_solar_power,
    }
}

/// Resolve the month and compute the loads with the configured shading and without any.
#[instrument(skip_all)]
pub fn calculate(request: &CalculationRequest<'_>, provider: &impl ClimateProvider) -> Calculation {
    let (month, worst_month_searched) = match request.month {
        MonthSelection::Explicit(month) => (month, false),
        MonthSelection::Worst => (worst_month(request.windows, provider), true),
    };
    info!(?month, n_windows = request.windows.len(), "calculating…");
    let temperature_profile = temperature_profile(request.outdoor_temperature, month, provider);
    let with_shading =
        gains_for_month(request, month, &temperature_profile, ShadingMode::Configured, provider);
    let without_shading =
        gains_for_month(request, month, &temperature_profile, ShadingMode::ForcedOff, provider);
    Calculation { month, worst_month_searched, temperature_profile, with_shading, without_shading }
}
