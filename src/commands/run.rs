//! The update-and-launch pipeline.
//!
//! This is the whole point of the program: probe connectivity, query the
//! build service, decide, download, install, persist, launch. Every step
//! that can fail degrades toward launching whatever is already installed;
//! nothing in the update pipeline is allowed to keep the run from reaching
//! the launch step.

use crate::api::cloud_build::CloudBuild;
use crate::libs::confirm::{Confirm, ConsoleConfirm};
use crate::libs::messages::Message;
use crate::libs::platform::PlatformProfile;
use crate::libs::settings::AppSettings;
use crate::libs::update::{self, Decision, UpdateOutcome};
use crate::libs::{connectivity, download, installer, launcher};
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// Connect deadline for every request the pipeline makes.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Executes one full launcher run.
pub async fn cmd() -> Result<()> {
    let mut confirm = ConsoleConfirm;

    // First run bootstraps the settings record interactively.
    let mut settings = match AppSettings::load()? {
        Some(settings) => settings,
        None => AppSettings::bootstrap(&mut confirm)?,
    };

    msg_print!(Message::Greeting(settings.greeting.clone()));

    let profile = PlatformProfile::detect();
    let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;

    if connectivity::is_online(&client).await {
        match try_update(&client, &profile, &settings, &mut confirm).await {
            UpdateOutcome::Applied(version) => {
                // Best-effort persistence: a write failure is logged and
                // the run continues with the old version recorded on disk.
                if let Err(e) = settings.persist_version(version) {
                    msg_error!(Message::SettingsSaveFailed(e.to_string()));
                }
                msg_success!(Message::ClientUpdated(version));
            }
            UpdateOutcome::NoUpdateNeeded => msg_print!(Message::NoUpdateRequired),
            UpdateOutcome::DeclinedByUser => msg_print!(Message::UpdateDeclined),
            // Already reported where it happened; fall through to launch.
            UpdateOutcome::Failed(_) => {}
        }
    } else {
        msg_warning!(Message::Offline);
    }

    launcher::launch(&profile)
}

/// Runs the remote half of the pipeline and reports what happened.
///
/// Failures are logged here, at the step where they occur, and folded into
/// the outcome instead of propagating: a query error means "no update",
/// download and install errors fail only this update attempt.
async fn try_update(client: &Client, profile: &PlatformProfile, settings: &AppSettings, confirm: &mut dyn Confirm) -> UpdateOutcome {
    msg_print!(Message::CheckingForUpdate);

    let api = CloudBuild::new(client.clone(), settings);
    let remote = match api.fetch_latest_build(profile.tag).await {
        Ok(remote) => remote,
        Err(e) => {
            msg_error!(Message::QueryFailed(e.to_string()));
            return UpdateOutcome::NoUpdateNeeded;
        }
    };

    match update::decide(&remote, settings, confirm) {
        Ok(Decision::Proceed) => {}
        Ok(Decision::NoUpdateNeeded) => return UpdateOutcome::NoUpdateNeeded,
        Ok(Decision::Declined) => return UpdateOutcome::DeclinedByUser,
        Err(e) => return UpdateOutcome::Failed(e.to_string()),
    }

    let archive = match download::download(client, &remote.download_url).await {
        Ok(archive) => archive,
        Err(e) => {
            msg_error!(Message::DownloadFailed(e.to_string()));
            return UpdateOutcome::Failed(e.to_string());
        }
    };

    if let Err(e) = installer::install(profile, &archive.file_name) {
        msg_error!(Message::InstallFailed(e.to_string()));
        return UpdateOutcome::Failed(e.to_string());
    }

    UpdateOutcome::Applied(remote.build_number)
}
