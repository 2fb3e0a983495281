//! # Patchup - self-updating client launcher
//!
//! A command-line launcher that keeps a cloud-built client application
//! up to date. On each run it checks the build service for a newer build,
//! optionally downloads and installs it, then launches the local copy.
//!
//! ## Features
//!
//! - **Update Check**: Queries the build service for the newest successful build
//! - **Conditional Download**: Applies updates automatically or after confirmation
//! - **Platform Install**: Zip extraction on Windows, OS-handled images on macOS
//! - **Graceful Degradation**: Any update failure still falls through to launch
//! - **Interactive Setup**: First-run wizard for organization and API credentials
//!
//! ## Usage
//!
//! ```rust,no_run
//! use patchup::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
