//! The stats payload written for every survivor.
//!
//! The payload is the RON text of the game's stats list holding a single
//! `Health` entry. It is kept as a literal; the game reads it back with
//! `ron`, this crate never does.

/// Initial stats for every survivor: full health at 50.
pub const DEFAULT_STATS_PAYLOAD: &str = "([Health((max: 50.0, current: 50.0))])";
