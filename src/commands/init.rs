//! Settings initialization command.
//!
//! Runs the interactive wizard that collects the greeting, build service
//! credentials, and the auto-update choice. The same wizard runs
//! automatically on a first `patchup run`; this command exists to redo it.

use crate::libs::confirm::ConsoleConfirm;
use crate::libs::messages::Message;
use crate::libs::settings::AppSettings;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing settings file instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        AppSettings::delete()?;
        msg_success!(Message::SettingsDeleted);
        return Ok(());
    }

    AppSettings::bootstrap(&mut ConsoleConfirm)?;
    msg_success!(Message::SettingsSaved);
    Ok(())
}
