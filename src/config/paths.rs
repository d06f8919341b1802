//! Cross-platform directory path resolution
//!
//! Resolves the per-user configuration directory:
//! - Linux/macOS: XDG Base Directory specification (~/.config)
//! - Windows: Known Folder API (AppData\Roaming)

use std::path::PathBuf;

/// Get the configuration directory path
///
/// Checks the DESK_BLUETOOTH_CONFIG_DIR environment variable first, then
/// falls back to:
/// - Unix (Linux/macOS): XDG_CONFIG_HOME/desk-bluetooth or ~/.config/desk-bluetooth
/// - Windows: %APPDATA%\desk-bluetooth\config
pub fn config_dir() -> PathBuf {
    std::env::var("DESK_BLUETOOTH_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "desk-bluetooth")
                    .map(|dirs| dirs.config_dir().to_path_buf())
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join("desk-bluetooth"))
            }
            #[cfg(not(windows))]
            {
                use directories::BaseDirs;
                std::env::var("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".config"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".config"))
                    })
                    .join("desk-bluetooth")
            }
        })
}

/// Get the default configuration file path
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}
