/*
 * Responsibility
 * - Server status の response DTO
 */
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Point-in-time server status. Computed fresh per request, never cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusResponse {
    /// Always "UP" while the process is able to answer.
    pub status: &'static str,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Milliseconds since process start.
    pub uptime: u64,
    pub available_processors: usize,
    /// Memory counters in bytes; `used_memory == total_memory - free_memory`.
    pub total_memory: u64,
    pub free_memory: u64,
    pub used_memory: u64,
}

/// Body of `GET /status/uptime`.
#[derive(Debug, Clone, Serialize)]
pub struct UptimeResponse {
    pub uptime: u64,
}
