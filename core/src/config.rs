use crate::{
    error::{GenError, GenResult},
    types::{SurvivorId, DEFAULT_SURVIVORS},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ordered list of survivors to seed. Duplicates are allowed and are
/// simply written twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub survivors: Vec<SurvivorId>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            survivors: DEFAULT_SURVIVORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Roster {
    /// Load a roster from a JSON file of the form `{"survivors": [...]}`.
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GenError::RosterIo {
            path: path.to_path_buf(),
            source,
        })?;
        let roster: Roster = serde_json::from_str(&content).map_err(|source| GenError::Roster {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Loaded roster {} ({} survivors)",
            path.display(),
            roster.survivors.len()
        );
        Ok(roster)
    }
}

/// Everything a generator run needs. No process-wide state (current
/// directory, environment) is consulted.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_dir: PathBuf,
    pub survivors: Vec<SurvivorId>,
}

impl GeneratorConfig {
    /// Config for `base_dir` with the built-in roster.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            survivors: Roster::default().survivors,
        }
    }

    pub fn with_survivors<I, S>(mut self, survivors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SurvivorId>,
    {
        self.survivors = survivors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_roster(self, roster: Roster) -> Self {
        self.with_survivors(roster.survivors)
    }
}
