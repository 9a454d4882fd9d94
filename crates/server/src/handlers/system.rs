//! System monitoring API handlers.
//!
//! Provides a process and system resource snapshot for operators.

use axum::{extract::State, Json};
use serde::Serialize;
use sysinfo::{Pid, System};

use crate::error::AppError;
use crate::state::AppState;

/// System resource utilization.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStatus {
    /// CPU usage percentage (0-100).
    pub cpu_percent: f32,

    /// Memory usage percentage (0-100).
    pub memory_percent: f32,

    /// Total memory in MB.
    pub total_memory_mb: f64,

    /// Used memory in MB.
    pub used_memory_mb: f64,
}

/// Process resource utilization.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessStatus {
    /// Process ID.
    pub pid: u32,

    /// CPU usage percentage.
    pub cpu_percent: f32,

    /// Resident set size (physical memory) in MB.
    pub memory_rss_mb: f64,

    /// Process uptime in seconds.
    pub uptime_seconds: u64,
}

/// Combined status response.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// System resource utilization.
    pub system: SystemStatus,

    /// Process resource utilization.
    pub process: ProcessStatus,
}

/// Get system and process status.
///
/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let mut sys = System::new_all();
    sys.refresh_all();

    let total_memory = sys.total_memory();
    let used_memory = sys.used_memory();

    let system = SystemStatus {
        cpu_percent: sys.global_cpu_usage(),
        memory_percent: (used_memory as f32 / total_memory as f32) * 100.0,
        total_memory_mb: total_memory as f64 / 1_048_576.0,
        used_memory_mb: used_memory as f64 / 1_048_576.0,
    };

    let pid = std::process::id();
    let process = if let Some(process) = sys.process(Pid::from_u32(pid)) {
        ProcessStatus {
            pid,
            cpu_percent: process.cpu_usage(),
            memory_rss_mb: process.memory() as f64 / 1_048_576.0,
            uptime_seconds: state.uptime_seconds(),
        }
    } else {
        ProcessStatus {
            pid,
            cpu_percent: 0.0,
            memory_rss_mb: 0.0,
            uptime_seconds: state.uptime_seconds(),
        }
    };

    Ok(Json(StatusResponse { system, process }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let response = StatusResponse {
            system: SystemStatus {
                cpu_percent: 12.5,
                memory_percent: 40.0,
                total_memory_mb: 16384.0,
                used_memory_mb: 6553.6,
            },
            process: ProcessStatus {
                pid: 1234,
                cpu_percent: 1.5,
                memory_rss_mb: 64.0,
                uptime_seconds: 3600,
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"system\""));
        assert!(json.contains("\"pid\":1234"));
    }
}
