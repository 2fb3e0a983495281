//! Platform-specific installation of a downloaded build archive.
//!
//! The install step replaces whatever was there before. On Windows the
//! archive is a zip extracted into the install folder. On macOS the
//! downloaded image is handed to the OS handler, and completion is only
//! observable through the bundle path appearing, so the step polls for it
//! with a bounded wait.
//!
//! Either way the archive is removed afterwards, successful or not: it is
//! single-use, and keeping a stale copy would confuse the next run.

use crate::libs::error::PatchError;
use crate::libs::messages::Message;
use crate::libs::platform::{PlatformProfile, PlatformTag};
use crate::libs::wait::wait_for_path;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use std::fs::{self, File};
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// Interval between checks for the extracted bundle on macOS.
pub const EXTRACT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maximum number of checks before the macOS extraction is declared
/// timed out (100 × 100 ms = 10 s).
pub const EXTRACT_MAX_ATTEMPTS: u32 = 100;

/// Installs the downloaded archive for the given platform, replacing any
/// previous installation, then deletes the archive.
pub fn install(profile: &PlatformProfile, archive: &Path) -> Result<()> {
    let result = match profile.tag {
        PlatformTag::Windows => install_windows(profile, archive),
        PlatformTag::MacLike => install_mac_like(profile, archive),
    };

    // Single-use archive: removed whether or not extraction succeeded.
    if archive.exists() {
        let _ = fs::remove_file(archive);
    }

    result
}

/// Windows path: wipe the install folder and extract the zip into it.
///
/// A missing archive means the download step already dealt with it, so the
/// step is silently skipped rather than treated as an error.
fn install_windows(profile: &PlatformProfile, archive: &Path) -> Result<()> {
    if profile.install_dir.exists() {
        msg_print!(Message::RemovingPreviousInstall(profile.install_dir.display().to_string()));
        fs::remove_dir_all(&profile.install_dir).map_err(|e| PatchError::Install(e.to_string()))?;
    }

    if !archive.exists() {
        return Ok(());
    }

    msg_print!(Message::Extracting(archive.display().to_string()));
    extract_zip(archive, &profile.install_dir).map_err(|e| PatchError::Install(e.to_string()).into())
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    fs::create_dir_all(dest)?;
    zip.extract(dest)?;
    Ok(())
}

/// macOS path: wipe the old bundle, hand the image to the OS handler, and
/// poll for the new bundle to appear.
///
/// Extraction happens asynchronously at the OS level, so completion is
/// awaited with a bounded retry. A timeout is a warning, not a failure:
/// the launcher will correctly report a missing client if nothing showed
/// up.
fn install_mac_like(profile: &PlatformProfile, archive: &Path) -> Result<()> {
    let bundle = &profile.artifact_path;

    if bundle.exists() {
        msg_print!(Message::RemovingPreviousInstall(bundle.display().to_string()));
        fs::remove_dir_all(bundle).map_err(|e| PatchError::Install(e.to_string()))?;
    }

    msg_print!(Message::Extracting(archive.display().to_string()));
    let _ = Command::new("open")
        .arg("-W")
        .arg(archive)
        .status()
        .map_err(|e| PatchError::Install(e.to_string()))?;

    if !wait_for_path(bundle, EXTRACT_POLL_INTERVAL, EXTRACT_MAX_ATTEMPTS) {
        msg_warning!(Message::ExtractTimedOut);
    }

    Ok(())
}
