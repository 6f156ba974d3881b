use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid survivor identifier '{id}': {reason}")]
    InvalidSurvivor { id: String, reason: &'static str },

    #[error("Cannot read roster {}: {source}", .path.display())]
    RosterIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster {}: {source}", .path.display())]
    Roster {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type GenResult<T> = Result<T, GenError>;
