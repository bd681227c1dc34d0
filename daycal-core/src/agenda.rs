//! Read-only agenda files.
//!
//! An agenda is a TOML list of activity drafts used to fill a store at
//! start-up. The store is never written back.
//!
//! ```toml
//! [[activity]]
//! name = "Standup"
//! date = "2026-10-19"
//! start = "09:00"
//! end = "09:15"
//! repeat = "daily"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::activity::ActivityDraft;
use crate::error::{DayCalError, DayCalResult};
use crate::store::ActivityStore;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Agenda {
    #[serde(default, rename = "activity")]
    pub activities: Vec<ActivityDraft>,
}

impl Agenda {
    pub fn from_toml_str(content: &str) -> DayCalResult<Self> {
        toml::from_str(content).map_err(|e| DayCalError::AgendaParse(e.to_string()))
    }

    pub fn load(path: &Path) -> DayCalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let agenda: Self = toml::from_str(&content)
            .map_err(|e| DayCalError::AgendaParse(format!("{}: {}", path.display(), e)))?;
        log::info!(
            "loaded {} activities from {}",
            agenda.activities.len(),
            path.display()
        );
        Ok(agenda)
    }

    /// Validate every draft and collect them into a store, in file order.
    /// Entry numbers in errors start at 1.
    pub fn into_store(self) -> DayCalResult<ActivityStore> {
        let mut store = ActivityStore::new();

        for (idx, draft) in self.activities.into_iter().enumerate() {
            let name = draft.name.clone();
            let activity = draft.build().map_err(|e| DayCalError::AgendaEntry {
                index: idx + 1,
                name,
                source: Box::new(e),
            })?;
            store.add(activity);
        }

        Ok(store)
    }
}
