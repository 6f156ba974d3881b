//! Shared primitive types used across the stats seeder.

/// A survivor identifier, e.g. "dewey". Used as a directory name under
/// `survivors/`, never parsed.
pub type SurvivorId = String;

/// The built-in roster, in generation order.
pub const DEFAULT_SURVIVORS: [&str; 8] = [
    "dewey", "matthew", "mark", "shaunt", "paul", "ryan", "gabe", "finn",
];

/// Directory under the base directory that holds one folder per survivor.
pub const SURVIVORS_DIR: &str = "survivors";

/// File name written inside each survivor folder.
pub const STATS_FILE_NAME: &str = "stats.ron";
