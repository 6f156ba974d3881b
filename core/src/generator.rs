//! The stats-file generator.
//!
//! ORDER: survivors are written strictly in roster order, one file at a time.
//!
//! RULES:
//!   - Existing `stats.ron` files are truncated and replaced, never appended.
//!   - Missing survivor directories are an error; nothing is created.
//!   - The first failure aborts the run. Earlier writes are left in place.

use crate::{
    config::GeneratorConfig,
    error::{GenError, GenResult},
    stats::DEFAULT_STATS_PAYLOAD,
    types::{SurvivorId, STATS_FILE_NAME, SURVIVORS_DIR},
};
use serde::Serialize;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// One successfully written stats file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub survivor: SurvivorId,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub base_dir: PathBuf,
    pub files: Vec<WrittenFile>,
}

pub struct StatsFileGenerator {
    config: GeneratorConfig,
}

impl StatsFileGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Write one stats file per survivor, in roster order.
    pub fn run(&self) -> GenResult<GenerationReport> {
        let base = &self.config.base_dir;
        log::info!(
            "Seeding stats for {} survivors under {}",
            self.config.survivors.len(),
            base.display()
        );

        let mut files = Vec::with_capacity(self.config.survivors.len());
        for survivor in &self.config.survivors {
            match write_stats_file(base, survivor) {
                Ok(written) => files.push(written),
                Err(e) => {
                    log::error!(
                        "Aborting after {} of {} survivors: {e}",
                        files.len(),
                        self.config.survivors.len()
                    );
                    return Err(e);
                }
            }
        }

        log::info!("Wrote {} stats files", files.len());
        Ok(GenerationReport {
            base_dir: base.clone(),
            files,
        })
    }
}

/// `<base>/survivors/<survivor>/stats.ron`
pub fn stats_path(base: &Path, survivor: &str) -> PathBuf {
    base.join(SURVIVORS_DIR).join(survivor).join(STATS_FILE_NAME)
}

/// Write the stats payload for a single survivor, replacing any existing
/// content. The survivor directory must already exist.
pub fn write_stats_file(base: &Path, survivor: &str) -> GenResult<WrittenFile> {
    validate_survivor(survivor)?;
    let path = stats_path(base, survivor);

    let io_err = |source| GenError::Io {
        path: path.clone(),
        source,
    };
    let mut file = File::create(&path).map_err(io_err)?;
    file.write_all(DEFAULT_STATS_PAYLOAD.as_bytes())
        .map_err(io_err)?;

    log::debug!("Wrote {}", path.display());
    Ok(WrittenFile {
        survivor: survivor.to_string(),
        path,
        bytes: DEFAULT_STATS_PAYLOAD.len(),
    })
}

fn validate_survivor(survivor: &str) -> GenResult<()> {
    let reason = if survivor.is_empty() {
        "identifier is empty"
    } else if survivor.contains(['/', '\\']) {
        "identifier contains a path separator"
    } else if survivor == "." || survivor == ".." {
        "identifier is a relative path component"
    } else {
        return Ok(());
    };
    Err(GenError::InvalidSurvivor {
        id: survivor.to_string(),
        reason,
    })
}
