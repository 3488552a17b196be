use std::{fs, path::PathBuf};

use chrono::Month;
use clap::{Parser, ValueEnum};
use enumset::EnumSet;
use heatgain_core::{
    calculation::{Calculation, MonthSelection, calculate},
    climate::ClimateDataset,
    project::Project,
    results::Scenario,
    shading::ShadingMode,
    summary::{InternalGainsSummary, PeakSummary},
};

use crate::{
    cli::{project::read_project_file, store::StoreArgs},
    prelude::*,
    tables::{
        build_components_table,
        build_hourly_table,
        build_internal_gains_table,
        build_peak_table,
    },
};

#[derive(Copy, Clone, ValueEnum)]
pub enum View {
    /// With the configured shading.
    Shaded,

    /// As if no window had shading.
    Unshaded,

    Both,
}

impl View {
    fn modes(self) -> &'static [ShadingMode] {
        match self {
            Self::Shaded => &[ShadingMode::Configured],
            Self::Unshaded => &[ShadingMode::ForcedOff],
            Self::Both => &[ShadingMode::Configured, ShadingMode::ForcedOff],
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
pub struct CalculateArgs {
    /// Climate dataset (JSON).
    #[clap(long, env = "HEATGAIN_CLIMATE")]
    climate: PathBuf,

    /// Project file (TOML) to use instead of the saved project.
    #[clap(long)]
    project: Option<PathBuf>,

    #[clap(flatten)]
    store: StoreArgs,

    /// Month number. By default, the cooling-season month with the most sun.
    #[clap(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: Option<u8>,

    /// Scenarios to show in the hourly table.
    #[clap(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Scenario::Design, Scenario::Typical],
    )]
    scenarios: Vec<Scenario>,

    #[clap(long, value_enum, default_value_t = View::Shaded)]
    view: View,

    /// Also show the hourly load components.
    #[clap(long)]
    components: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl CalculateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let climate = load_climate(&self.climate)?;
        let project = match &self.project {
            Some(path) => read_project_file(path)?,
            None => self.store.load_project()?,
        };
        project.validate().context("the project is invalid")?;

        let month = match self.month {
            Some(number) => MonthSelection::Explicit(
                Month::try_from(number).ok().with_context(|| format!("invalid month `{number}`"))?,
            ),
            None => MonthSelection::Worst,
        };
        let calculation = calculate(&project.request(month), &climate);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&calculation)?),
            OutputFormat::Table => self.print_tables(&project, &calculation),
        }
        Ok(())
    }

    fn print_tables(&self, project: &Project, calculation: &Calculation) {
        let month = calculation.month;
        let scenarios: EnumSet<Scenario> = self.scenarios.iter().copied().collect();
        println!(
            "{}{}",
            month.name(),
            if calculation.worst_month_searched { " (worst month)" } else { "" },
        );

        for mode in self.view.modes() {
            let results = calculation.results(*mode);
            println!();
            println!(
                "{}",
                match mode {
                    ShadingMode::Configured => "With shading",
                    ShadingMode::ForcedOff => "Without shading",
                },
            );
            println!("{}", build_hourly_table(results, month, scenarios));
            println!("{}", build_peak_table(&PeakSummary::new(results, month)));
            if self.components {
                for scenario in scenarios {
                    println!("{} components", scenario.label());
                    println!(
                        "{}",
                        build_components_table(&results.scenario(scenario).components, month),
                    );
                }
            }
        }

        println!();
        println!("Internal gains");
        println!(
            "{}",
            build_internal_gains_table(&InternalGainsSummary::new(
                &project.internal_gains,
                project.room_area,
            )),
        );
    }
}

#[instrument(skip_all, fields(path = %path.display()))]
fn load_climate(path: &std::path::Path) -> Result<ClimateDataset> {
    info!("loading the climate dataset…");
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let dataset: ClimateDataset = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;
    info!(n_months = dataset.months.len(), "loaded");
    Ok(dataset)
}
