//! Key-value persistence port.

use std::collections::BTreeMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::prelude::*;

/// Raw string storage, provided by the host application.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result;

    fn remove(&mut self, key: &str) -> Result;
}

/// Value persisted under a fixed key.
pub trait State: Serialize + DeserializeOwned {
    const KEY: &'static str;
}

/// Typed view over a [`Store`].
#[must_use]
pub struct States<S>(pub S);

impl<S: Store> States<S> {
    #[instrument(skip_all, fields(key = T::KEY))]
    pub fn get<T: State>(&self) -> Result<Option<T>> {
        debug!("loading the state…");
        self.0
            .get(T::KEY)?
            .map(|value| serde_json::from_str(&value))
            .transpose()
            .with_context(|| format!("failed to deserialize `{}`", T::KEY))
    }

    /// Serialize the state before touching the store, so that a failure keeps the old value.
    #[instrument(skip_all, fields(key = T::KEY))]
    pub fn set<T: State>(&mut self, state: &T) -> Result {
        debug!("saving the state…");
        let value = serde_json::to_string_pretty(state)
            .with_context(|| format!("failed to serialize `{}`", T::KEY))?;
        self.0.set(T::KEY, &value).with_context(|| format!("failed to save `{}`", T::KEY))
    }

    #[instrument(skip_all, fields(key = T::KEY))]
    pub fn remove<T: State>(&mut self) -> Result {
        debug!("removing the state…");
        self.0.remove(T::KEY).with_context(|| format!("failed to remove `{}`", T::KEY))
    }
}

/// Store that lives as long as the process.
#[must_use]
#[derive(Debug, Default)]
pub struct MemoryStore(BTreeMap<String, String>);

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result {
        self.0.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    impl State for Counter {
        const KEY: &'static str = "counter";
    }

    #[test]
    fn test_round_trip() -> Result {
        let mut states = States(MemoryStore::default());
        assert_eq!(states.get::<Counter>()?, None);
        states.set(&Counter { value: 42 })?;
        assert_eq!(states.get::<Counter>()?, Some(Counter { value: 42 }));
        states.remove::<Counter>()?;
        assert_eq!(states.get::<Counter>()?, None);
        Ok(())
    }

    #[test]
    fn test_corrupted_value() -> Result {
        let mut store = MemoryStore::default();
        store.set(Counter::KEY, "{")?;
        assert!(States(store).get::<Counter>().is_err());
        Ok(())
    }
}
