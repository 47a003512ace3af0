//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific data directory for the planner
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/pedigree`
/// - Linux: `~/.local/share/pedigree` (or `$XDG_DATA_HOME/pedigree`)
/// - Windows: `%APPDATA%\pedigree`
/// - Fallback: `./data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "pedigree")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
