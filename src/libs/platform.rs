//! Platform detection and the per-platform install/launch strategy.
//!
//! The host OS is inspected exactly once, producing a [`PlatformProfile`]
//! that every later step receives as a parameter. Build target naming,
//! artifact paths, and launch path construction all live here, so adding a
//! third platform touches one file.

use crate::libs::messages::Message;
use crate::msg_warning;
use std::env;
use std::path::PathBuf;

/// Build variant identifier understood by the build service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformTag {
    Windows,
    MacLike,
}

impl PlatformTag {
    /// Platform name used in the build service query string.
    pub fn api_name(&self) -> &'static str {
        match self {
            PlatformTag::Windows => "standalonewindows",
            PlatformTag::MacLike => "standaloneosxintel",
        }
    }
}

/// Per-platform strategy derived fresh each run; never persisted.
///
/// Windows treats the client as a file (.exe) inside an install folder,
/// macOS as an app bundle directory extracted next to the launcher.
#[derive(Debug, Clone)]
pub struct PlatformProfile {
    pub tag: PlatformTag,
    /// Expected path of the installed artifact after extraction.
    pub artifact_path: PathBuf,
    /// Folder the Windows archive is extracted into.
    pub install_dir: PathBuf,
}

impl PlatformProfile {
    /// Detects the running OS and returns its profile.
    pub fn detect() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Maps an OS identifier to a profile. Total: unrecognized identifiers
    /// fall back to Windows with a warning so the tool stays usable even
    /// on misdetection.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::windows(),
            "macos" => Self::mac_like(),
            other => {
                msg_warning!(Message::OsDetectFallback(other.to_string()));
                Self::windows()
            }
        }
    }

    fn windows() -> Self {
        Self {
            tag: PlatformTag::Windows,
            artifact_path: PathBuf::from("Default Windows desktop 32-bit.exe"),
            install_dir: PathBuf::from("game"),
        }
    }

    fn mac_like() -> Self {
        Self {
            tag: PlatformTag::MacLike,
            artifact_path: PathBuf::from("Default Mac desktop 32-bit.app"),
            install_dir: PathBuf::from("game"),
        }
    }

    /// Path the launcher starts: install-folder-prefixed on Windows, the
    /// bare bundle path on macOS.
    pub fn launch_target(&self) -> PathBuf {
        match self.tag {
            PlatformTag::Windows => self.install_dir.join(&self.artifact_path),
            PlatformTag::MacLike => self.artifact_path.clone(),
        }
    }
}
