//! Core library modules for the patchup application.
//!
//! Serves as the main entry point for all patchup library components.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Settings, data storage, messaging, error taxonomy
//! - **Update Pipeline**: Connectivity probe, update decision, download, install
//! - **System Integration**: Platform detection, process launch, bounded waits
//!
//! ## Usage
//!
//! ```rust,no_run
//! use patchup::libs::platform::PlatformProfile;
//! use patchup::libs::settings::AppSettings;
//!
//! let profile = PlatformProfile::detect();
//! let settings = AppSettings::load().expect("readable settings");
//! ```

pub mod confirm;
pub mod connectivity;
pub mod data_storage;
pub mod download;
pub mod error;
pub mod installer;
pub mod launcher;
pub mod messages;
pub mod platform;
pub mod settings;
pub mod update;
pub mod wait;
