//! Display implementation for patchup application messages.
//!
//! All user-facing text lives here, in one place, so every component emits
//! messages through the `Message` enum instead of formatting strings inline.
//! Parameters are typed, which keeps interpolation checked at compile time.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SETTINGS MESSAGES ===
            Message::Greeting(greeting) => greeting.clone(),
            Message::SettingsBootstrapIntro => {
                "No settings found. Generating new ones. These can be changed at any time by editing 'settings.json'".to_string()
            }
            Message::SettingsSaved => "Settings saved".to_string(),
            Message::SettingsSaveFailed(e) => format!("Something went wrong with saving the settings: {}", e),
            Message::SettingsDeleted => "Settings file removed".to_string(),
            Message::SettingsNotFound => "No settings file found. Run 'patchup init' first".to_string(),
            Message::PromptGreeting => "Enter a greeting".to_string(),
            Message::PromptOrgId => "Enter your organization ID".to_string(),
            Message::PromptProjectId => "Enter your project ID".to_string(),
            Message::PromptApiKey => "Enter your API key".to_string(),
            Message::PromptAutoUpdate => "Would you like files to automatically update?".to_string(),

            // === PLATFORM MESSAGES ===
            Message::OsDetectFallback(os) => {
                format!("There was an issue detecting your operating system ('{}'). Defaulting to Windows.", os)
            }

            // === CONNECTIVITY MESSAGES ===
            Message::Offline => "No internet connection. Skipping the update check.".to_string(),

            // === UPDATE CHECK MESSAGES ===
            Message::CheckingForUpdate => "Checking for a new build...".to_string(),
            Message::NewBuildFound(build) => format!("New version found! (build {})", build),
            Message::UpdateAvailable { remote, installed } => {
                format!("Build {} is available (installed: {})", remote, installed)
            }
            Message::NoUpdateRequired => "Client is up to date".to_string(),
            Message::UpdateDeclined => "Update skipped. Launching the installed client.".to_string(),
            Message::QueryFailed(e) => format!("Could not query the build service: {}", e),
            Message::PromptConfirmUpdate => "Would you like to update your client?".to_string(),

            // === DOWNLOAD MESSAGES ===
            Message::Connecting => "Connecting...".to_string(),
            Message::DownloadSizeMb(mb) => format!("File size: {}mb", mb),
            Message::DownloadStarted => "Downloading. This may take a minute.".to_string(),
            Message::DownloadSaved(name) => format!("Saved {}", name),
            Message::DownloadComplete => "Download complete!".to_string(),
            Message::DownloadFailed(e) => format!("Download failed: {}", e),

            // === INSTALL MESSAGES ===
            Message::RemovingPreviousInstall(path) => format!("Removing previous install at {}", path),
            Message::Extracting(path) => format!("Extracting {}", path),
            Message::ExtractTimedOut => "Unzipping timed out!".to_string(),
            Message::InstallFailed(e) => format!("Install failed: {}", e),
            Message::ClientUpdated(build) => format!("Client updated to build {}", build),

            // === LAUNCH MESSAGES ===
            Message::LaunchingClient => "Launching client!".to_string(),
            Message::ClientNotFound => {
                "No client found. Make sure you are connected to the internet and a build exists for this operating system.".to_string()
            }
            Message::LaunchFailed(e) => format!("Could not launch the client: {}", e),
        };
        write!(f, "{}", text)
    }
}
