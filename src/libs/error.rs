//! Error taxonomy for the update pipeline.
//!
//! Every failure class in the pipeline has a variant here so callers can
//! match on what went wrong. The pipeline policy is that none of these stop
//! the process from reaching the launch step; they only decide how loudly
//! a step is skipped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    /// The settings file exists but could not be parsed. Unlike a missing
    /// file this aborts the run: regenerating would clobber a hand-edited
    /// record, and without it there is no installed-version source of truth.
    #[error("settings file is corrupt: {0}")]
    CorruptSettings(String),

    /// The build service could not be reached or answered with something
    /// other than a usable build list. Treated as "no update available".
    #[error("build query failed: {0}")]
    Query(String),

    /// The artifact download did not complete. Fatal to this update
    /// attempt, not to the run.
    #[error("download failed: {0}")]
    Download(String),

    /// Extraction or installation of the downloaded archive failed.
    #[error("install failed: {0}")]
    Install(String),

    /// The settings record could not be rewritten after a successful
    /// install. The in-memory version is still current for this run.
    #[error("could not persist settings: {0}")]
    Persistence(String),
}
