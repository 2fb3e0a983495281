//! Build service API client.
//!
//! One endpoint matters to the launcher: the list of successful builds for
//! an (organization, project, platform) triple, newest first. The client
//! pulls the numeric build identifier and the signed download URL out of
//! the first record and discards the rest.
//!
//! ## Authentication
//!
//! The service uses basic auth with the API key as the username and an
//! empty password.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use patchup::api::cloud_build::CloudBuild;
//! use patchup::libs::platform::PlatformTag;
//! use patchup::libs::settings::AppSettings;
//!
//! # async fn check(settings: AppSettings) -> anyhow::Result<()> {
//! let api = CloudBuild::new(reqwest::Client::new(), &settings);
//! let build = api.fetch_latest_build(PlatformTag::Windows).await?;
//! println!("newest build: {}", build.build_number);
//! # Ok(())
//! # }
//! ```

use crate::libs::error::PatchError;
use crate::libs::platform::PlatformTag;
use crate::libs::settings::AppSettings;
use crate::msg_debug;
use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

/// Base URL of the build service REST API.
pub const API_BASE_URL: &str = "https://build-api.cloud.unity3d.com/api/v1";

/// Build target scope covering every target configured for the project.
const ALL_BUILD_TARGETS: &str = "_all";

/// The two fields the launcher needs from one build record. Ephemeral:
/// parsed from a single response and discarded after the update decision.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteBuild {
    pub build_number: i64,
    pub download_url: String,
}

/// One build record from the builds listing.
#[derive(Debug, Deserialize)]
struct BuildRecord {
    /// Numeric build identifier, increasing with each build.
    build: i64,
    /// Nested download descriptors for the build artifacts.
    links: Option<BuildLinks>,
}

#[derive(Debug, Deserialize)]
struct BuildLinks {
    /// Descriptor for the primary artifact download.
    download_primary: Option<DownloadLink>,
}

#[derive(Debug, Deserialize)]
struct DownloadLink {
    /// Signed URL for fetching the artifact.
    href: String,
}

/// Build service client scoped to one organization and project.
#[derive(Debug)]
pub struct CloudBuild {
    client: Client,
    base_url: String,
    org_id: String,
    project_id: String,
    api_key: String,
}

impl CloudBuild {
    pub fn new(client: Client, settings: &AppSettings) -> Self {
        Self::with_base_url(client, settings, API_BASE_URL)
    }

    /// Client against a non-default API base, so tests can point it at a
    /// local service.
    pub fn with_base_url(client: Client, settings: &AppSettings, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            org_id: settings.org_id.clone(),
            project_id: settings.project_id.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Fetches the most recent successful build for the given platform.
    ///
    /// The listing is filtered to successful builds server-side and comes
    /// back newest first; the first record wins. A build without a primary
    /// download descriptor, an empty listing, or any transport/auth failure
    /// is a [`PatchError::Query`], which the pipeline treats as "no update
    /// available" rather than fatal.
    pub async fn fetch_latest_build(&self, platform: PlatformTag) -> Result<RemoteBuild> {
        let url = format!(
            "{}/orgs/{}/projects/{}/buildtargets/{}/builds?buildStatus=success&platform={}",
            self.base_url,
            self.org_id,
            self.project_id,
            ALL_BUILD_TARGETS,
            platform.api_name()
        );

        msg_debug!(format!("querying {}", url));

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.api_key, Some(""))
            .send()
            .await
            .map_err(|e| PatchError::Query(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PatchError::Query(format!("build service answered {}", response.status())).into());
        }

        let body = response.text().await.map_err(|e| PatchError::Query(e.to_string()))?;
        parse_build_listing(&body)
    }
}

/// Extracts the newest build's number and primary download URL from a
/// builds listing body.
///
/// The listing comes back newest first, so the first record wins. A
/// malformed document, an empty listing, or a record without a primary
/// download descriptor is a [`PatchError::Query`].
pub fn parse_build_listing(body: &str) -> Result<RemoteBuild> {
    let builds: Vec<BuildRecord> = serde_json::from_str(body).map_err(|e| PatchError::Query(e.to_string()))?;

    let newest = builds
        .into_iter()
        .next()
        .ok_or_else(|| PatchError::Query("no successful builds for this platform".to_string()))?;

    let href = newest
        .links
        .and_then(|links| links.download_primary)
        .map(|link| link.href)
        .ok_or_else(|| PatchError::Query("newest build has no primary download".to_string()))?;

    Ok(RemoteBuild {
        build_number: newest.build,
        download_url: href,
    })
}
