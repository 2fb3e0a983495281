//! Launch the installed client without touching the update pipeline.

use crate::libs::launcher;
use crate::libs::messages::Message;
use crate::libs::platform::PlatformProfile;
use crate::libs::settings::AppSettings;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    // The greeting is a courtesy; launching works without settings.
    if let Some(settings) = AppSettings::load()? {
        msg_print!(Message::Greeting(settings.greeting));
    }

    launcher::launch(&PlatformProfile::detect())
}
