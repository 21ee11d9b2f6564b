//! CLI exit code registry.
//!
//! Single source of truth for `planrecon` exit codes. Exit codes are
//! part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | General error (unspecified)               |
//! | 2    | Usage error (bad arguments)               |
//! | 3    | Side-file parse error                     |
//! | 4    | IO error (read/write)                     |
//! | 5    | Export serialization unavailable / failed |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error. Avoid; prefer a specific code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, conflicting options.
pub const EXIT_USAGE: u8 = 2;

/// A side file failed to parse as TOML.
pub const EXIT_PARSE: u8 = 3;

/// Reading input or writing output failed.
pub const EXIT_IO: u8 = 4;

/// The xlsx serialization boundary failed. Retryable: the comparison
/// itself succeeded and re-running export recomputes nothing.
pub const EXIT_EXPORT: u8 = 5;
