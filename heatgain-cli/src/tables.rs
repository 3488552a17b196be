use chrono::Month;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use heatgain_core::{
    calendar::local_hour,
    profile::{DailyProfile, HOURS_PER_DAY},
    project::Project,
    results::{CalculationResults, Components, Scenario},
    shading::ShadingDevice,
    summary::{InternalGainsSummary, Peak, PeakSummary},
    window::Window,
};
use heatgain_quantities::power::Watts;
use itertools::Itertools;

use crate::fmt::{FormattedHour, FormattedPercentage};

fn power_cell(watts: Watts) -> Cell {
    let cell = Cell::new(watts).set_alignment(CellAlignment::Right);
    if watts == Watts::ZERO { cell.add_attribute(Attribute::Dim) } else { cell }
}

fn hour_cells(hour: usize, month: Month) -> [Cell; 2] {
    [
        Cell::new(FormattedHour(local_hour(hour, month))),
        Cell::new(FormattedHour(hour)).add_attribute(Attribute::Dim),
    ]
}

/// Hourly sensible, latent and total loads of the selected scenarios.
pub fn build_hourly_table(
    results: &CalculationResults,
    month: Month,
    scenarios: EnumSet<Scenario>,
) -> Table {
    let peaks = scenarios
        .iter()
        .map(|scenario| (scenario, results.scenario(scenario).total.peak().0))
        .collect_vec();

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    let mut header = vec!["Local".to_string(), "UTC".to_string()];
    for scenario in scenarios {
        let label = scenario.label();
        header.extend([
            format!("{label} sensible"),
            format!("{label} latent"),
            format!("{label} total"),
        ]);
    }
    header.push("Incident solar".to_string());
    table.set_header(header);

    for hour in 0..HOURS_PER_DAY {
        let mut row = hour_cells(hour, month).to_vec();
        for (scenario, peak_hour) in &peaks {
            let results = results.scenario(*scenario);
            row.push(power_cell(results.sensible[hour]));
            row.push(power_cell(results.latent[hour]));
            let total = power_cell(results.total[hour]);
            row.push(if hour == *peak_hour {
                total.fg(Color::Red).add_attribute(Attribute::Bold)
            } else {
                total
            });
        }
        row.push(power_cell(results.incident_solar_power[hour]).fg(Color::DarkYellow));
        table.add_row(row);
    }
    table
}

/// Hourly load components of one scenario.
pub fn build_components_table(components: &Components, month: Month) -> Table {
    let columns: [(&str, DailyProfile); 7] = [
        ("Solar", components.solar),
        ("Cond. rad.", components.conduction_radiant),
        ("Cond. conv.", components.conduction_convective),
        ("Int. rad.", components.internal_radiant),
        ("Int. conv.", components.internal_convective),
        ("Int. latent", components.internal_latent),
        ("Ventilation", components.ventilation),
    ];

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(
        ["Local", "UTC"].into_iter().chain(columns.iter().map(|(label, _)| *label)).collect_vec(),
    );
    for hour in 0..HOURS_PER_DAY {
        table.add_row(
            hour_cells(hour, month)
                .into_iter()
                .chain(columns.iter().map(|(_, profile)| power_cell(profile[hour])))
                .collect_vec(),
        );
    }
    table.add_row(
        [Cell::new("Σ kWh").add_attribute(Attribute::Bold), Cell::new("")]
            .into_iter()
            .chain(columns.iter().map(|(_, profile)| {
                Cell::new(profile.energy()).set_alignment(CellAlignment::Right)
            }))
            .collect_vec(),
    );
    table
}

fn peak_time_cell(peak: Peak) -> Cell {
    Cell::new(format!(
        "{} local, {} UTC",
        FormattedHour(peak.local_hour),
        FormattedHour(peak.utc_hour),
    ))
}

pub fn build_peak_table(summary: &PeakSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["", "Value", "When"]);
    table.add_row(vec![
        Cell::new("Design peak"),
        power_cell(summary.design.load).fg(Color::Red),
        peak_time_cell(summary.design),
    ]);
    table.add_row(vec![
        Cell::new("Typical peak"),
        power_cell(summary.typical.load).fg(Color::DarkYellow),
        peak_time_cell(summary.typical),
    ]);
    table.add_row(vec![
        Cell::new("Solar at design peak"),
        power_cell(summary.solar_at_peak),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Conduction at design peak"),
        power_cell(summary.conduction_at_peak),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Typical / design"),
        Cell::new(summary.typical_to_design.map_or_else(
            || "n/a".to_string(),
            |ratio| FormattedPercentage(ratio).to_string(),
        ))
        .set_alignment(CellAlignment::Right),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Design energy"),
        Cell::new(summary.design_energy).set_alignment(CellAlignment::Right),
        Cell::new("per day").add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Typical energy"),
        Cell::new(summary.typical_energy).set_alignment(CellAlignment::Right),
        Cell::new("per day").add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_internal_gains_table(summary: &InternalGainsSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Source", "Sensible", "Latent"]);
    table.add_row(vec![
        Cell::new("People"),
        power_cell(summary.people_sensible),
        power_cell(summary.people_latent),
    ]);
    table.add_row(vec![
        Cell::new("Lighting"),
        power_cell(summary.lighting),
        power_cell(Watts::ZERO),
    ]);
    table.add_row(vec![
        Cell::new("Equipment"),
        power_cell(summary.equipment),
        power_cell(Watts::ZERO),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        power_cell(summary.sensible()).add_attribute(Attribute::Bold),
        power_cell(summary.latent()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Overall").add_attribute(Attribute::Dim),
        power_cell(summary.total()).fg(Color::Red),
        Cell::new(""),
    ]);
    table
}

fn shading_cell(window: &Window) -> Cell {
    let shading = window.shading;
    let description = match shading.device {
        ShadingDevice::Louvers { location, color, setting } => {
            format!("louvers, {location:?}, {color:?}, {setting:?}")
        }
        ShadingDevice::Draperies { material, color } => {
            format!("draperies, {material:?}, {color:?}")
        }
        ShadingDevice::RollerShades { setting } => format!("roller shades, {setting:?}"),
        ShadingDevice::InsectScreens { location } => format!("insect screens, {location:?}"),
    }
    .to_lowercase();
    let cell = Cell::new(description);
    if shading.enabled { cell.fg(Color::Green) } else { cell.add_attribute(Attribute::Dim) }
}

pub fn build_windows_table(windows: &[Window]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "ID", "Construction", "Facing", "U", "SHGC", "Width", "Height", "Area", "Shading",
    ]);
    for window in windows {
        table.add_row(vec![
            Cell::new(window.id).add_attribute(Attribute::Bold),
            Cell::new(window.construction.label()),
            Cell::new(window.direction),
            Cell::new(window.u_value).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", window.shgc)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2} m", window.width)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2} m", window.height)).set_alignment(CellAlignment::Right),
            Cell::new(window.area()).set_alignment(CellAlignment::Right),
            shading_cell(window),
        ]);
    }
    table
}

/// Room-level settings of the project.
pub fn build_project_table(project: &Project) -> Table {
    let accumulation = project.accumulation;
    let ventilation = project.ventilation;
    let gains = &project.internal_gains;

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![Cell::new("Indoor"), Cell::new(project.indoor_temperature)]);
    table.add_row(vec![Cell::new("Outdoor maximum"), Cell::new(project.outdoor_temperature)]);
    table.add_row(vec![Cell::new("Room area"), Cell::new(project.room_area)]);
    table.add_row(vec![
        Cell::new("Accumulation"),
        if accumulation.include {
            Cell::new(format!(
                "{:?} mass, {:?} floor, {}% glass",
                accumulation.thermal_mass,
                accumulation.floor_type,
                accumulation.glass_bucket(),
            ))
        } else {
            Cell::new("off").add_attribute(Attribute::Dim)
        },
    ]);
    table.add_row(vec![
        Cell::new("Ventilation"),
        if ventilation.enabled {
            let (airflow, exchanger) = (ventilation.airflow, ventilation.exchanger);
            Cell::new(format!("{airflow} m³/h, {exchanger:?} exchanger"))
        } else {
            Cell::new("off").add_attribute(Attribute::Dim)
        },
    ]);
    table.add_row(vec![
        Cell::new("People"),
        if gains.people.enabled {
            Cell::new(format!(
                "{} × {:?}, {:?} UTC",
                gains.people.count, gains.people.activity, gains.people.hours,
            ))
        } else {
            Cell::new("off").add_attribute(Attribute::Dim)
        },
    ]);
    table.add_row(vec![
        Cell::new("Lighting"),
        if gains.lighting.enabled {
            Cell::new(format!(
                "{:?} at {}, {:?} UTC",
                gains.lighting.fixture,
                gains.lighting.power_density(),
                gains.lighting.hours,
            ))
        } else {
            Cell::new("off").add_attribute(Attribute::Dim)
        },
    ]);
    table.add_row(vec![
        Cell::new("Equipment"),
        Cell::new(
            gains
                .equipment
                .iter()
                .map(|item| {
                    let (quantity, name, power) = (item.quantity, &item.name, item.power);
                    format!("{quantity} × {name} ({power}), {:?} UTC", item.hours)
                })
                .join("\n"),
        ),
    ]);
    table
}
