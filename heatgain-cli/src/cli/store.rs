use std::path::PathBuf;

use clap::Parser;
use heatgain_core::project::{Project, States};

use crate::{prelude::*, store::FileStore};

#[derive(Parser)]
pub struct StoreArgs {
    /// Directory that keeps the saved project.
    #[clap(long = "store-dir", env = "HEATGAIN_STORE_DIR", default_value = ".heatgain")]
    path: PathBuf,
}

impl StoreArgs {
    pub fn open(&self) -> States<FileStore> {
        States(FileStore::new(&self.path))
    }

    pub fn load_project(&self) -> Result<Project> {
        self.open()
            .get::<Project>()?
            .context("no saved project, run `heatgain project new` or import one")
    }
}
