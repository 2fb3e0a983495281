//! Artifact downloader.
//!
//! Fetches the signed download URL the build service handed out, reports
//! the size, works out a local file name from the response metadata, and
//! writes the payload to disk. On any failure after the file was created
//! the partial file is removed, so a later run never sees a half-written
//! archive.

use crate::libs::error::PatchError;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::Client;
use std::fs;
use std::path::PathBuf;

/// Fallback archive name when the response carries no usable
/// content-disposition header.
pub const DEFAULT_ARCHIVE_NAME: &str = "client-build.zip";

/// A completed download: where it landed and how big it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_name: PathBuf,
    pub bytes: u64,
}

/// Downloads the artifact at `url` into the working directory.
pub async fn download(client: &Client, url: &str) -> Result<Download> {
    msg_print!(Message::Connecting);

    let response = client.get(url).send().await.map_err(|e| PatchError::Download(e.to_string()))?;
    if !response.status().is_success() {
        return Err(PatchError::Download(format!("server answered {}", response.status())).into());
    }

    if let Some(len) = response.content_length() {
        msg_print!(Message::DownloadSizeMb(megabytes_rounded_up(len)));
    }

    let file_name = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(file_name_from_disposition)
        .unwrap_or_else(|| DEFAULT_ARCHIVE_NAME.to_string());

    msg_print!(Message::DownloadStarted);

    let content = response.bytes().await.map_err(|e| PatchError::Download(e.to_string()))?;

    let path = PathBuf::from(&file_name);
    if let Err(e) = fs::write(&path, &content) {
        // Never leave a half-written archive behind.
        let _ = fs::remove_file(&path);
        return Err(PatchError::Download(e.to_string()).into());
    }

    msg_print!(Message::DownloadSaved(file_name));
    msg_print!(Message::DownloadComplete);

    Ok(Download {
        file_name: path,
        bytes: content.len() as u64,
    })
}

/// Size figure shown to the operator, rounded up to whole megabytes.
pub fn megabytes_rounded_up(bytes: u64) -> u64 {
    bytes.div_ceil(1_000_000)
}

/// Extracts the `filename=` parameter from a content-disposition header
/// value, keyed by parameter name rather than substring offsets. Quotes
/// around the name are stripped, and only the final path component is
/// kept: the header is server-supplied and must not steer the write
/// outside the working directory.
pub fn file_name_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"'))
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .map(|name| name.to_string())
        .filter(|name| !name.is_empty() && name != "." && name != "..")
}
