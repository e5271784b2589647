//! Request dispatch for the telemetry service.
//!
//! Dispatch is a pure mapping from telemetry type to a mock payload, stamped
//! with the wall-clock time and the echoed type. Both the gRPC path and the
//! legacy in-process path call [`handle`], so the dispatch table exists
//! exactly once and the two paths cannot drift apart.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, TelemetryError};
use crate::proto::telemetry_response::TelemetryData;
use crate::proto::{
    CpuUsageTelemetry, HeartbeatTelemetry, LogTelemetry, TelemetryRequest, TelemetryResponse,
    TelemetryType,
};

/// Placeholder log line for log telemetry. A real deployment would read from
/// an actual log buffer here.
pub const SAMPLE_LOG_DATA: &str = "Sample log data from server";

/// Placeholder CPU usage for CPU telemetry. A real deployment would sample
/// host metrics here.
pub const MOCK_CPU_USAGE: f64 = 42.5;

/// Telemetry types the dispatcher has a payload rule for.
///
/// Kept separate from the wire enum so that the unspecified sentinel and any
/// unknown future ordinal are rejected before payload construction, and so
/// that adding a wire value without a payload rule fails to compile instead
/// of falling into a default arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SupportedType {
    Heartbeat,
    Log,
    CpuUsage,
}

impl SupportedType {
    /// Narrows a raw wire value. Unspecified and unknown ordinals are
    /// treated identically: neither is dispatchable.
    fn from_wire(raw: i32) -> Option<Self> {
        match TelemetryType::try_from(raw) {
            Ok(TelemetryType::Heartbeat) => Some(Self::Heartbeat),
            Ok(TelemetryType::Log) => Some(Self::Log),
            Ok(TelemetryType::CpuUsage) => Some(Self::CpuUsage),
            Ok(TelemetryType::Unspecified) | Err(_) => None,
        }
    }

    fn wire(self) -> TelemetryType {
        match self {
            Self::Heartbeat => TelemetryType::Heartbeat,
            Self::Log => TelemetryType::Log,
            Self::CpuUsage => TelemetryType::CpuUsage,
        }
    }
}

/// Routes a telemetry request to its payload rule.
///
/// On success the response echoes the requested type, carries the current
/// Unix timestamp, and holds the payload variant matching the type. Requests
/// with an unsupported type are rejected with
/// [`TelemetryError::UnsupportedType`] carrying the offending raw value; no
/// partial response is constructed.
///
/// Dispatch holds no state and performs no I/O beyond reading the clock, so
/// it is safe to call concurrently without coordination.
pub fn handle(request: &TelemetryRequest) -> Result<TelemetryResponse> {
    tracing::debug!(
        telemetry_type = request.telemetry_type,
        "Received telemetry request"
    );

    let Some(telemetry_type) = SupportedType::from_wire(request.telemetry_type) else {
        tracing::warn!(
            telemetry_type = request.telemetry_type,
            "Unknown telemetry type"
        );
        return Err(TelemetryError::UnsupportedType(request.telemetry_type));
    };

    let response = TelemetryResponse {
        telemetry_type: telemetry_type.wire() as i32,
        timestamp: unix_timestamp(),
        telemetry_data: Some(build_payload(telemetry_type)),
    };

    tracing::debug!(
        telemetry_type = response.telemetry_type,
        timestamp = response.timestamp,
        "Sending telemetry response"
    );
    Ok(response)
}

/// Produces the mock payload for a supported telemetry type. Total over the
/// supported set; [`handle`] filters unsupported values first.
fn build_payload(telemetry_type: SupportedType) -> TelemetryData {
    match telemetry_type {
        SupportedType::Heartbeat => TelemetryData::Heartbeat(HeartbeatTelemetry {}),
        SupportedType::Log => TelemetryData::Log(LogTelemetry {
            log_data: SAMPLE_LOG_DATA.to_string(),
        }),
        SupportedType::CpuUsage => TelemetryData::CpuUsage(CpuUsageTelemetry {
            cpu_usage: MOCK_CPU_USAGE,
        }),
    }
}

fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
