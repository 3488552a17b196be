use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use heatgain_core::project::Store;

use crate::prelude::*;

/// Store that keeps each key as a JSON file in a directory.
#[must_use]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error).with_context(|| format!("failed to read `{}`", path.display())),
        }
    }

    /// Write a sibling file first and rename it over the old one.
    fn set(&mut self, key: &str, value: &str) -> Result {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create `{}`", self.root.display()))?;
        let path = self.path(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)
            .with_context(|| format!("failed to write `{}`", staging.display()))?;
        fs::rename(&staging, &path)
            .with_context(|| format!("failed to replace `{}`", path.display()))?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Err(error) if error.kind() != ErrorKind::NotFound => {
                Err(error).with_context(|| format!("failed to remove `{}`", path.display()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use heatgain_core::project::{Project, States};

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("heatgain-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        path
    }

    #[test]
    fn test_missing_key() -> Result {
        let store = FileStore::new(scratch_dir("missing"));
        assert_eq!(store.get("project")?, None);
        Ok(())
    }

    #[test]
    fn test_project_round_trip() -> Result {
        let root = scratch_dir("round-trip");
        let mut states = States(FileStore::new(&root));
        let mut project = Project::default();
        let mut ids = project.ids();
        project.add_window(&mut ids)?;
        states.set(&project)?;
        assert!(root.join("project.json").is_file());
        assert_eq!(states.get::<Project>()?, Some(project));
        states.remove::<Project>()?;
        states.remove::<Project>()?;
        assert_eq!(states.get::<Project>()?, None);
        fs::remove_dir_all(root)?;
        Ok(())
    }
}
