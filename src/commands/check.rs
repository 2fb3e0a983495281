//! Query-only update check.
//!
//! Asks the build service for the newest successful build and reports
//! whether it is newer than the installed version. Nothing is downloaded.

use crate::api::cloud_build::CloudBuild;
use crate::libs::connectivity;
use crate::libs::messages::Message;
use crate::libs::platform::PlatformProfile;
use crate::libs::settings::AppSettings;
use crate::{msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

pub async fn cmd() -> Result<()> {
    let settings = match AppSettings::load()? {
        Some(settings) => settings,
        None => {
            msg_warning!(Message::SettingsNotFound);
            return Ok(());
        }
    };

    let profile = PlatformProfile::detect();
    let client = Client::builder().connect_timeout(Duration::from_secs(10)).build()?;

    if !connectivity::is_online(&client).await {
        msg_warning!(Message::Offline);
        return Ok(());
    }

    msg_print!(Message::CheckingForUpdate);

    match CloudBuild::new(client, &settings).fetch_latest_build(profile.tag).await {
        Ok(remote) if remote.build_number > settings.version => {
            msg_info!(Message::UpdateAvailable {
                remote: remote.build_number,
                installed: settings.version,
            });
        }
        Ok(_) => msg_print!(Message::NoUpdateRequired),
        Err(e) => msg_error!(Message::QueryFailed(e.to_string())),
    }

    Ok(())
}
