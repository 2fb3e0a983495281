//! Update decision logic.
//!
//! Compares the newest remote build against the installed version and,
//! when the operator has a say, asks. The decision is pure apart from the
//! injected confirmation capability, which keeps it testable without a
//! terminal.

use crate::api::cloud_build::RemoteBuild;
use crate::libs::confirm::Confirm;
use crate::libs::messages::Message;
use crate::libs::settings::AppSettings;
use crate::msg_print;
use anyhow::Result;

/// What one run of the update pipeline did. Drives whether the installed
/// version is persisted and what the operator is told before launch.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Remote build is not newer than the installed one.
    NoUpdateNeeded,
    /// A newer build exists but the operator said no.
    DeclinedByUser,
    /// A newer build was downloaded and installed.
    Applied(i64),
    /// The download or install step failed; the old install stays.
    Failed(String),
}

/// Verdict of the decision step, before any download happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    NoUpdateNeeded,
    Declined,
}

/// Decides whether to apply an available remote build.
///
/// An update is available iff `remote.build_number > settings.version`;
/// the `-1` never-installed sentinel makes a first run always eligible.
/// With auto-update on, an available update proceeds unconditionally.
/// Otherwise the operator is asked and anything but a yes leaves the old
/// install in place.
pub fn decide(remote: &RemoteBuild, settings: &AppSettings, confirm: &mut dyn Confirm) -> Result<Decision> {
    if remote.build_number <= settings.version {
        return Ok(Decision::NoUpdateNeeded);
    }

    msg_print!(Message::NewBuildFound(remote.build_number));

    if settings.auto_update {
        return Ok(Decision::Proceed);
    }

    if confirm.confirm(&Message::PromptConfirmUpdate.to_string())? {
        Ok(Decision::Proceed)
    } else {
        Ok(Decision::Declined)
    }
}
