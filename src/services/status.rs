//! Server status and system metrics.
//!
//! The process start instant and logical CPU count are captured once at
//! construction; memory counters are read fresh on every call. Nothing here
//! mutates shared state, so handlers can share one instance freely.

use std::time::Instant;

use chrono::Utc;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::api::v1::dto::status::ServerStatusResponse;

pub struct ServerStatus {
    version: String,
    started: Instant,
    available_processors: usize,
}

impl ServerStatus {
    pub fn new(version: &str) -> Self {
        let started = Instant::now();
        tracing::info!(version, "server status provider initialized");

        Self {
            version: version.to_string(),
            started,
            // logical CPU count does not change over the process lifetime
            available_processors: System::new_all().cpus().len(),
        }
    }

    /// Build a point-in-time status snapshot.
    ///
    /// `used_memory` is derived as `total - free` so the invariant holds on
    /// every call regardless of what the platform reports.
    pub fn snapshot(&self) -> ServerStatusResponse {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::everything()),
        );

        let total_memory = sys.total_memory();
        let free_memory = sys.free_memory();

        ServerStatusResponse {
            status: "UP",
            version: self.version.clone(),
            timestamp: Utc::now(),
            uptime: self.uptime_millis(),
            available_processors: self.available_processors,
            total_memory,
            free_memory,
            used_memory: total_memory - free_memory,
        }
    }

    /// Elapsed milliseconds since process start, monotonic.
    pub fn uptime_millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_up_with_configured_version() {
        let status = ServerStatus::new("1.0.0");
        let snap = status.snapshot();

        assert_eq!(snap.status, "UP");
        assert_eq!(snap.version, "1.0.0");
        assert!(snap.available_processors > 0);
        assert!(snap.total_memory > 0);
    }

    #[test]
    fn used_memory_is_total_minus_free() {
        let status = ServerStatus::new("1.0.0");
        let snap = status.snapshot();

        assert_eq!(snap.used_memory, snap.total_memory - snap.free_memory);
        assert!(snap.free_memory <= snap.total_memory);
    }

    #[test]
    fn uptime_is_monotonically_non_decreasing() {
        let status = ServerStatus::new("1.0.0");

        let first = status.uptime_millis();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = status.uptime_millis();

        assert!(second >= first);
    }

    #[test]
    fn snapshot_uptime_stays_consistent_with_uptime_millis() {
        let status = ServerStatus::new("1.0.0");

        let before = status.uptime_millis();
        let snap = status.snapshot();
        let after = status.uptime_millis();

        assert!(snap.uptime >= before);
        assert!(snap.uptime <= after);
    }
}
