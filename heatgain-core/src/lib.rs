//! Window solar and conduction heat gains for a single room, with internal gains, ventilation
//! and the Radiant Time Series delay of radiant gains.
//!
//! The entry point is [`calculation::calculate`]: it picks the month, builds the outdoor
//! temperature curve and runs the hourly pipeline with and without shading.

pub mod calculation;
pub mod calendar;
pub mod climate;
pub mod internal;
pub mod ops;
mod prelude;
pub mod profile;
pub mod project;
pub mod results;
pub mod rts;
pub mod shading;
pub mod summary;
pub mod temperature;
pub mod ventilation;
pub mod window;
