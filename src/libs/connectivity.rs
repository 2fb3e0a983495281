//! Outbound connectivity probe.
//!
//! One lightweight fetch against a well-known host decides whether any
//! remote work is attempted this run. The response content is ignored;
//! only reachability matters.

use crate::msg_debug;
use reqwest::Client;
use std::time::Duration;

/// Well-known host used to test for a working internet connection.
pub const PROBE_URL: &str = "http://www.google.com";

/// Timeout for the probe request. Kept short so an offline run falls
/// through to the launcher quickly.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Returns whether outbound network access is currently available.
///
/// Any response counts as online; any transport-level error (DNS, timeout,
/// refused connection) counts as offline. Never returns an error.
pub async fn is_online(client: &Client) -> bool {
    msg_debug!(format!("checking connectivity against {}", PROBE_URL));
    client.get(PROBE_URL).timeout(PROBE_TIMEOUT).send().await.is_ok()
}
