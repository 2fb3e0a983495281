#[derive(Debug, Clone)]
pub enum Message {
    // === SETTINGS MESSAGES ===
    Greeting(String),
    SettingsBootstrapIntro,
    SettingsSaved,
    SettingsSaveFailed(String),
    SettingsDeleted,
    SettingsNotFound,
    PromptGreeting,
    PromptOrgId,
    PromptProjectId,
    PromptApiKey,
    PromptAutoUpdate,

    // === PLATFORM MESSAGES ===
    OsDetectFallback(String),

    // === CONNECTIVITY MESSAGES ===
    Offline,

    // === UPDATE CHECK MESSAGES ===
    CheckingForUpdate,
    NewBuildFound(i64),
    UpdateAvailable { remote: i64, installed: i64 },
    NoUpdateRequired,
    UpdateDeclined,
    QueryFailed(String),
    PromptConfirmUpdate,

    // === DOWNLOAD MESSAGES ===
    Connecting,
    DownloadSizeMb(u64),
    DownloadStarted,
    DownloadSaved(String),
    DownloadComplete,
    DownloadFailed(String),

    // === INSTALL MESSAGES ===
    RemovingPreviousInstall(String),
    Extracting(String),
    ExtractTimedOut,
    InstallFailed(String),
    ClientUpdated(i64),

    // === LAUNCH MESSAGES ===
    LaunchingClient,
    ClientNotFound,
    LaunchFailed(String),
}
