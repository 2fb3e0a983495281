//! Bounded await-external-completion primitive.
//!
//! Some install steps hand work to the OS (mounting a disk image, copying a
//! bundle) and can only observe completion through the filesystem. This
//! module provides the retry-with-timeout loop for that: a fixed interval,
//! a fixed number of attempts, never an unbounded wait.

use std::path::Path;
use std::thread;
use std::time::Duration;

/// Polls until `path` exists, sleeping `interval` between checks, for at
/// most `max_attempts` checks. Returns `true` as soon as the path appears,
/// `false` once the attempt budget is spent.
pub fn wait_for_path(path: &Path, interval: Duration, max_attempts: u32) -> bool {
    let mut attempts = 0;
    while !path.exists() && attempts < max_attempts {
        thread::sleep(interval);
        attempts += 1;
    }
    path.exists()
}
