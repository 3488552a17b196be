//! Room project: the windows and everything else the calculation takes from the user.

pub mod ids;
pub mod store;

use heatgain_quantities::{area::SquareMeters, temperature::Celsius};
use serde::{Deserialize, Serialize};

pub use self::{
    ids::{IdSequence, NextAfterMax},
    store::{MemoryStore, State, States, Store},
};
use crate::{
    calculation::{CalculationRequest, MonthSelection},
    internal::InternalGains,
    prelude::*,
    rts::AccumulationSettings,
    shading::Shading,
    ventilation::Ventilation,
    window::{Window, WindowId},
};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Room design temperature.
    pub indoor_temperature: Celsius,

    /// Outdoor design maximum.
    pub outdoor_temperature: Celsius,

    /// Floor area, used for the lighting density.
    pub room_area: SquareMeters,

    pub accumulation: AccumulationSettings,
    pub internal_gains: InternalGains,
    pub ventilation: Ventilation,
    pub windows: Vec<Window>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            indoor_temperature: Celsius::from(24.0),
            outdoor_temperature: Celsius::from(32.0),
            room_area: SquareMeters::ZERO,
            accumulation: AccumulationSettings::default(),
            internal_gains: InternalGains::default(),
            ventilation: Ventilation::default(),
            windows: Vec::new(),
        }
    }
}

impl State for Project {
    const KEY: &'static str = "project";
}

impl Project {
    /// Id generator that continues after the windows of this project.
    pub fn ids(&self) -> NextAfterMax {
        NextAfterMax::new(self.windows.iter().map(|window| window.id))
    }

    pub fn window(&self, id: WindowId) -> Result<&Window> {
        self.windows
            .iter()
            .find(|window| window.id == id)
            .with_context(|| format!("no window {id}"))
    }

    fn position(&self, id: WindowId) -> Result<usize> {
        self.windows
            .iter()
            .position(|window| window.id == id)
            .with_context(|| format!("no window {id}"))
    }

    /// Append a window with the default properties.
    pub fn add_window(&mut self, ids: &mut impl IdSequence) -> Result<&mut Window> {
        let id = ids.next_id()?;
        info!(%id, "adding a window");
        self.windows.push(Window::new(id));
        let index = self.windows.len() - 1;
        Ok(&mut self.windows[index])
    }

    /// Replace the window with the same id.
    pub fn update_window(&mut self, window: Window) -> Result {
        let index = self.position(window.id)?;
        self.windows[index] = window;
        Ok(())
    }

    pub fn delete_window(&mut self, id: WindowId) -> Result<Window> {
        let index = self.position(id)?;
        info!(%id, "deleting the window");
        Ok(self.windows.remove(index))
    }

    /// Append a copy of the window under a fresh id.
    pub fn duplicate_window(
        &mut self,
        id: WindowId,
        ids: &mut impl IdSequence,
    ) -> Result<WindowId> {
        let mut window = self.window(id)?.clone();
        window.id = ids.next_id()?;
        info!(source = %id, id = %window.id, "duplicating the window");
        let new_id = window.id;
        self.windows.push(window);
        Ok(new_id)
    }

    /// Apply the same shading to every window.
    pub fn set_shading_all(&mut self, shading: Shading) {
        for window in &mut self.windows {
            window.shading = shading;
        }
    }

    /// Reject inputs the engine cannot make sense of.
    pub fn validate(&self) -> Result {
        ensure!(self.room_area.value() >= 0.0, "room area must not be negative");
        ensure!(
            self.ventilation.airflow.is_finite() && self.ventilation.airflow >= 0.0,
            "ventilation airflow must not be negative"
        );
        ensure!(self.accumulation.glass_percentage <= 100, "glass percentage is above 100");
        for window in &self.windows {
            let id = window.id;
            ensure!(window.width > 0.0, "window {id} must be wider than zero");
            ensure!(window.height > 0.0, "window {id} must be taller than zero");
            ensure!(window.u_value.value() > 0.0, "window {id} must have a positive U-value");
            ensure!((0.0..=1.0).contains(&window.shgc), "window {id} SHGC is outside 0..=1");
        }
        let mut ids: Vec<_> = self.windows.iter().map(|window| window.id).collect();
        ids.sort_unstable();
        if let Some(duplicate) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            bail!("window {} appears more than once", duplicate[0]);
        }
        let gains = &self.internal_gains;
        let schedules = [("people", gains.people.hours), ("lighting", gains.lighting.hours)]
            .into_iter()
            .chain(gains.equipment.iter().map(|item| (item.name.as_str(), item.hours)));
        for (source, hours) in schedules {
            ensure!(hours.start <= 24 && hours.end <= 24, "{source} hours {hours:?} are past 24");
        }
        Ok(())
    }

    /// Calculation request over this project.
    pub fn request(&self, month: MonthSelection) -> CalculationRequest<'_> {
        CalculationRequest::builder()
            .windows(&self.windows)
            .indoor_temperature(self.indoor_temperature)
            .outdoor_temperature(self.outdoor_temperature)
            .room_area(self.room_area)
            .accumulation(self.accumulation)
            .internal_gains(self.internal_gains.clone())
            .ventilation(self.ventilation)
            .month(month)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        climate::Direction,
        ops::HourRange,
        shading::{RollerShadeSetting, ShadingDevice},
        window::Construction,
    };

    #[test]
    fn test_add_window() -> Result {
        let mut project = Project::default();
        let mut ids = project.ids();
        project.add_window(&mut ids)?.direction = Direction::E;
        let id = project.add_window(&mut ids)?.id;
        assert_eq!(project.windows[0].id, WindowId(1));
        assert_eq!(project.windows[0].direction, Direction::E);
        assert_eq!(id, WindowId(2));
        assert_eq!(project.windows[1], Window::new(WindowId(2)));
        Ok(())
    }

    #[test]
    fn test_add_window_after_largest_id() {
        let mut project = Project::default();
        project.windows.push(Window::new(WindowId(u32::MAX)));
        let mut ids = project.ids();
        assert!(project.add_window(&mut ids).is_err());
        assert!(project.duplicate_window(WindowId(u32::MAX), &mut ids).is_err());
        assert_eq!(project.windows.len(), 1);
    }

    #[test]
    fn test_duplicate_window() -> Result {
        let mut project = Project::default();
        let mut ids = project.ids();
        let window = project.add_window(&mut ids)?;
        window.construction = Construction::Historic;
        window.width = 0.8;
        let source = window.id;

        let mut ids = project.ids();
        let copy = project.duplicate_window(source, &mut ids)?;
        assert_ne!(copy, source);
        let copy = project.window(copy)?;
        assert_eq!(copy.construction, Construction::Historic);
        assert_eq!(Window { id: source, ..copy.clone() }, *project.window(source)?);
        assert!(project.duplicate_window(WindowId(99), &mut ids).is_err());
        Ok(())
    }

    #[test]
    fn test_update_and_delete() -> Result {
        let mut project = Project::default();
        let mut ids = project.ids();
        let id = project.add_window(&mut ids)?.id;

        let mut window = project.window(id)?.clone();
        window.shgc = 0.3;
        project.update_window(window)?;
        assert!((project.window(id)?.shgc - 0.3).abs() < f64::EPSILON);
        assert!(project.update_window(Window::new(WindowId(5))).is_err());

        assert_eq!(project.delete_window(id)?.id, id);
        assert!(project.windows.is_empty());
        assert!(project.delete_window(id).is_err());
        Ok(())
    }

    #[test]
    fn test_set_shading_all() -> Result {
        let mut project = Project::default();
        let mut ids = project.ids();
        project.add_window(&mut ids)?;
        project.add_window(&mut ids)?;
        let shading = Shading {
            enabled: true,
            device: ShadingDevice::RollerShades { setting: RollerShadeSetting::LightOpaque },
        };
        project.set_shading_all(shading);
        assert!(project.windows.iter().all(|window| window.shading == shading));
        Ok(())
    }

    #[test]
    fn test_validate() -> Result {
        let mut project = Project::default();
        let mut ids = project.ids();
        project.add_window(&mut ids)?;
        assert!(project.validate().is_ok());

        project.windows[0].shgc = 1.2;
        assert!(project.validate().is_err());
        project.windows[0].shgc = 0.5;

        project.windows[0].width = 0.0;
        assert!(project.validate().is_err());
        project.windows[0].width = 1.0;

        project.windows.push(project.windows[0].clone());
        assert!(project.validate().is_err());
        project.windows.pop();

        project.internal_gains.people.hours = HourRange::from(8..25);
        assert!(project.validate().is_err());
        project.internal_gains.people.hours = HourRange::from(20..4);
        assert!(project.validate().is_ok());

        project.room_area = SquareMeters::from(-1.0);
        assert!(project.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_store_round_trip() -> Result {
        let mut project = Project::default();
        let mut ids = project.ids();
        project.add_window(&mut ids)?.shading.enabled = true;
        project.room_area = SquareMeters::from(18.5);

        let mut states = States(MemoryStore::default());
        states.set(&project)?;
        assert_eq!(states.get::<Project>()?, Some(project));
        Ok(())
    }

    #[test]
    fn test_toml() -> Result {
        let project: Project = toml::from_str(
            r#"
                indoor_temperature = 25
                room_area = 20

                [accumulation]
                thermal_mass = "heavy"
                floor_type = "carpet"

                [[windows]]
                id = 1
                construction = "standard"
                direction = "W"
                u_value = 1.1
                shgc = 0.6
                width = 1.2
                height = 1.4

                [windows.shading]
                enabled = true
                device = { type = "louvers", location = "outdoor", color = "dark", setting = "closed_90" }
            "#,
        )?;
        assert_eq!(project.indoor_temperature, Celsius::from(25.0));
        assert_eq!(project.outdoor_temperature, Celsius::from(32.0));
        assert!(project.accumulation.include);
        assert_eq!(project.accumulation.glass_percentage, 50);
        assert_eq!(project.windows[0].direction, Direction::W);
        assert!(project.windows[0].shading.enabled);
        project.validate()?;

        let exported = toml::to_string(&project)?;
        assert_eq!(toml::from_str::<Project>(&exported)?, project);
        Ok(())
    }
}
