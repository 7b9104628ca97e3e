//! Shared test utilities.

use tempfile::TempDir;

/// Creates a temporary directory used as the home and working directory of
/// a spawned binary.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}
