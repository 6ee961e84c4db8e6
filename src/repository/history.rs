use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::domain::Severity;

pub const LAST_NAME_KEY: &str = "ftn_name";
pub const HISTORY_KEY: &str = "ftn_history";
pub const HISTORY_CAPACITY: usize = 10;

/// Names that evaluated `ok`, newest first, at most [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<String>);

impl History {
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Prepends `name` when it rated `ok` and is new. Returns whether the
    /// history changed.
    pub fn record(&mut self, name: &str, worst: Severity) -> bool {
        if worst != Severity::Ok || name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.insert(0, name.to_string());
        self.0.truncate(HISTORY_CAPACITY);
        true
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[tracing::instrument(skip_all)]
pub fn load_last_name(store: &impl KeyValueStore) -> Result<String, anyhow::Error> {
    let name = store
        .get(LAST_NAME_KEY)
        .context("Failed to read the last entered name")?;
    Ok(name.unwrap_or_default())
}

#[tracing::instrument(skip_all)]
pub fn save_last_name(store: &mut impl KeyValueStore, name: &str) -> Result<(), anyhow::Error> {
    store
        .set(LAST_NAME_KEY, name)
        .context("Failed to store the last entered name")
}

/// A corrupt history entry is logged and treated as empty.
#[tracing::instrument(skip_all)]
pub fn load_history(store: &impl KeyValueStore) -> Result<History, anyhow::Error> {
    let Some(raw) = store
        .get(HISTORY_KEY)
        .context("Failed to read the name history")?
    else {
        return Ok(History::default());
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(mut names) => {
            names.truncate(HISTORY_CAPACITY);
            Ok(History(names))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable name history");
            Ok(History::default())
        }
    }
}

#[tracing::instrument(skip_all, fields(entries = history.len()))]
pub fn save_history(store: &mut impl KeyValueStore, history: &History) -> Result<(), anyhow::Error> {
    let raw = serde_json::to_string(history).context("Failed to serialize the name history")?;
    store
        .set(HISTORY_KEY, &raw)
        .context("Failed to store the name history")
}
