//! Path utilities for locating test data files.

use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// This is determined by walking up from the test-utils manifest directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Returns the shared testdata directory (`crates/test-utils/testdata/`).
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Path to the bundled sample storm collection.
///
/// Contains ANDREW (1992, six points), KATRINA (2005, three points),
/// HAIYAN (2013, two points with a null wind speed) and an EMPTY storm
/// with no track that parsers are expected to skip.
pub fn sample_storms_path() -> PathBuf {
    testdata_dir().join("sample_storms.geojson")
}

/// Reads the bundled sample storm collection as text.
pub fn sample_storms_json() -> String {
    std::fs::read_to_string(sample_storms_path()).expect("sample_storms.geojson is bundled")
}

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}
