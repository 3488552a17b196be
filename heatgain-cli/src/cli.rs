mod calculate;
mod project;
mod store;

use clap::{Parser, Subcommand};

use crate::{
    cli::{calculate::CalculateArgs, project::ProjectArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate the hourly heat gains of the room in the worst or a given month.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Manage the saved project.
    #[clap(name = "project")]
    Project(Box<ProjectArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Calculate(args) => args.run(),
            Self::Project(args) => args.run(),
        }
    }
}
