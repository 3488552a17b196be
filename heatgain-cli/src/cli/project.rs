use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand, ValueEnum};
use heatgain_core::{
    climate::Direction,
    internal::{Equipment, EquipmentPreset},
    ops::HourRange,
    project::Project,
    shading::{
        Color,
        DraperyMaterial,
        Location,
        LouverSetting,
        RollerShadeSetting,
        Shading,
        ShadingDevice,
    },
    window::{Construction, Window, WindowId},
};
use heatgain_quantities::{power::Watts, transmittance::UValue};

use crate::{
    cli::store::StoreArgs,
    prelude::*,
    tables::{build_project_table, build_windows_table},
};

#[derive(Parser)]
pub struct ProjectArgs {
    #[clap(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// Start over with an empty project.
    New {
        /// Replace the saved project.
        #[clap(long)]
        force: bool,
    },

    /// Print the saved project.
    Show,

    /// Add a window.
    AddWindow(WindowArgs),

    /// Add a copy of a window.
    DuplicateWindow { id: WindowId },

    DeleteWindow { id: WindowId },

    /// Configure the shading of one or all windows.
    SetShading(ShadingArgs),

    /// Add an equipment item.
    AddEquipment(EquipmentArgs),

    /// Replace the saved project with a TOML file.
    Import { path: PathBuf },

    /// Write the saved project as TOML, to the standard output by default.
    Export { path: Option<PathBuf> },
}

impl ProjectArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let mut states = self.store.open();
        let project = match self.command {
            ProjectCommand::New { force } => {
                ensure!(
                    force || states.get::<Project>()?.is_none(),
                    "a project is already saved, pass `--force` to replace it"
                );
                Project::default()
            }
            ProjectCommand::Show => {
                let project = self.store.load_project()?;
                println!("{}", build_project_table(&project));
                println!("{}", build_windows_table(&project.windows));
                return Ok(());
            }
            ProjectCommand::AddWindow(args) => {
                let mut project = self.store.load_project()?;
                let mut ids = project.ids();
                args.apply(project.add_window(&mut ids)?);
                project
            }
            ProjectCommand::DuplicateWindow { id } => {
                let mut project = self.store.load_project()?;
                let mut ids = project.ids();
                let new_id = project.duplicate_window(id, &mut ids)?;
                println!("{new_id}");
                project
            }
            ProjectCommand::DeleteWindow { id } => {
                let mut project = self.store.load_project()?;
                project.delete_window(id)?;
                project
            }
            ProjectCommand::SetShading(args) => {
                let mut project = self.store.load_project()?;
                let shading = args.shading();
                if let Some(id) = args.window {
                    let mut window = project.window(id)?.clone();
                    window.shading = shading;
                    project.update_window(window)?;
                } else {
                    project.set_shading_all(shading);
                }
                project
            }
            ProjectCommand::AddEquipment(args) => {
                let mut project = self.store.load_project()?;
                let id = project.internal_gains.next_equipment_id()?;
                project.internal_gains.equipment.push(args.equipment(id));
                project
            }
            ProjectCommand::Import { path } => read_project_file(&path)?,
            ProjectCommand::Export { path } => {
                let project = self.store.load_project()?;
                let contents = toml::to_string_pretty(&project)?;
                match path {
                    Some(path) => fs::write(&path, contents)
                        .with_context(|| format!("failed to write `{}`", path.display()))?,
                    None => print!("{contents}"),
                }
                return Ok(());
            }
        };

        project.validate()?;
        states.set(&project)?;
        println!("{}", build_windows_table(&project.windows));
        Ok(())
    }
}

/// Read and validate a TOML project.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_project_file(path: &Path) -> Result<Project> {
    info!("reading the project…");
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let project: Project =
        toml::from_str(&contents).with_context(|| format!("failed to parse `{}`", path.display()))?;
    project.validate().with_context(|| format!("`{}` is invalid", path.display()))?;
    info!(n_windows = project.windows.len(), "read");
    Ok(project)
}

#[derive(Parser)]
struct WindowArgs {
    #[clap(long, value_enum, default_value_t = Construction::Modern)]
    construction: Construction,

    #[clap(long, value_enum, ignore_case = true, default_value_t = Direction::S)]
    direction: Direction,

    /// Overrides the construction's U-value, W/m²K.
    #[clap(long)]
    u_value: Option<f64>,

    /// Overrides the construction's SHGC.
    #[clap(long)]
    shgc: Option<f64>,

    /// Meters.
    #[clap(long, default_value_t = 1.5)]
    width: f64,

    /// Meters.
    #[clap(long, default_value_t = 1.5)]
    height: f64,
}

impl WindowArgs {
    fn apply(self, window: &mut Window) {
        let (u_value, shgc) = self.construction.preset();
        window.construction = self.construction;
        window.direction = self.direction;
        window.u_value = self.u_value.map_or(u_value, UValue::from);
        window.shgc = self.shgc.unwrap_or(shgc);
        window.width = self.width;
        window.height = self.height;
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum DeviceType {
    Louvers,
    Draperies,
    RollerShades,
    InsectScreens,
}

#[derive(Parser)]
struct ShadingArgs {
    /// Window to configure. All windows if omitted.
    #[clap(long)]
    window: Option<WindowId>,

    /// Keep the device but switch it off.
    #[clap(long)]
    disable: bool,

    #[clap(long = "type", value_enum, default_value_t = DeviceType::Louvers)]
    device: DeviceType,

    /// Louver and insect screen placement.
    #[clap(long, value_enum, default_value_t = Location::Indoor)]
    location: Location,

    /// Louver and drapery color.
    #[clap(long, value_enum, default_value_t = Color::Light)]
    color: Color,

    #[clap(long, value_enum, default_value_t = LouverSetting::Tilted45)]
    louver_setting: LouverSetting,

    #[clap(long, value_enum, default_value_t = DraperyMaterial::Semiopen)]
    material: DraperyMaterial,

    #[clap(long, value_enum, default_value_t = RollerShadeSetting::LightTranslucent)]
    roller_setting: RollerShadeSetting,
}

impl ShadingArgs {
    fn shading(&self) -> Shading {
        let device = match self.device {
            DeviceType::Louvers => ShadingDevice::Louvers {
                location: self.location,
                color: self.color,
                setting: self.louver_setting,
            },
            DeviceType::Draperies => {
                ShadingDevice::Draperies { material: self.material, color: self.color }
            }
            DeviceType::RollerShades => {
                ShadingDevice::RollerShades { setting: self.roller_setting }
            }
            DeviceType::InsectScreens => ShadingDevice::InsectScreens { location: self.location },
        };
        Shading { enabled: !self.disable, device }
    }
}

#[derive(Parser)]
struct EquipmentArgs {
    #[clap(long, value_enum)]
    preset: EquipmentPreset,

    /// Name to show instead of the preset's.
    #[clap(long)]
    name: Option<String>,

    /// Power of one unit in watts, instead of the preset's.
    #[clap(long)]
    power: Option<f64>,

    #[clap(long, default_value_t = 1)]
    quantity: u32,

    /// First active UTC hour.
    #[clap(long, default_value_t = 8)]
    start: u8,

    /// UTC hour when the equipment switches off.
    #[clap(long, default_value_t = 16)]
    end: u8,
}

impl EquipmentArgs {
    fn equipment(self, id: u32) -> Equipment {
        let mut equipment = Equipment::from_preset(id, self.preset);
        if let Some(name) = self.name {
            equipment.name = name;
        }
        if let Some(power) = self.power {
            equipment.power = Watts::from(power);
        }
        equipment.quantity = self.quantity;
        equipment.hours = HourRange::from(self.start..self.end);
        equipment
    }
}
