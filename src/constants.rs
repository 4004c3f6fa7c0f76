// src/constants.rs

/// Rule placed on both sides of the path in a file header line.
pub const HEADER_RULE: &str = "============";

/// Number of leading bytes sampled when classifying a file as binary.
pub const BINARY_SAMPLE_BYTES: usize = 8192;

/// Default per-file size cap, in megabytes.
pub const DEFAULT_MAX_MB: f64 = 5.0;

/// Bytes per megabyte used when deriving the size cap.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// The only extension routed through the external code cleaner.
pub const CLEANABLE_EXTENSION: &str = ".cs";

/// Environment variable pointing at the external cleaner (executable or `.dll`).
pub const CLEANER_ENV_VAR: &str = "FILECAT_CLEANER";

/// Name of the profile created when the settings store has none.
pub const DEFAULT_PROFILE_NAME: &str = "Default";
