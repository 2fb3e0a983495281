//! Launches the installed client as an independent process.

use crate::libs::messages::Message;
use crate::libs::platform::{PlatformProfile, PlatformTag};
use crate::{msg_error, msg_print};
use anyhow::Result;
use std::process::Command;

/// Starts the installed client and returns immediately.
///
/// The spawned process is not waited on and its exit code is not observed.
/// A missing client is reported with guidance but is not an error: the run
/// still finishes cleanly so the operator can fix connectivity or
/// configuration and try again.
pub fn launch(profile: &PlatformProfile) -> Result<()> {
    let target = profile.launch_target();

    if !target.exists() {
        msg_error!(Message::ClientNotFound);
        return Ok(());
    }

    msg_print!(Message::LaunchingClient);

    // App bundles need the OS handler; the Windows exe starts directly.
    let spawned = match profile.tag {
        PlatformTag::Windows => Command::new(&target).spawn(),
        PlatformTag::MacLike => Command::new("open").arg(&target).spawn(),
    };

    if let Err(e) = spawned {
        msg_error!(Message::LaunchFailed(e.to_string()));
    }

    Ok(())
}
