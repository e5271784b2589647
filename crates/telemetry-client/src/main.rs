//! Telemetry Client - thin driver exercising the query RPC.
//!
//! Connects to the telemetry server and issues one query per telemetry type,
//! including the unspecified sentinel, logging each outcome. Exists only to
//! demonstrate the wire contract end to end.

use std::time::Duration;

use anyhow::{Context, Result};
use telemetry_common::proto::telemetry_service_client::TelemetryServiceClient;
use telemetry_common::proto::{TelemetryRequest, TelemetryType};
use telemetry_common::{init_tracing, Config};
use tonic::transport::{Channel, Uri};
use tonic::Request;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("telemetry-client");
    let config = Config::from_env()?;

    let uri = config
        .grpc_endpoint
        .parse::<Uri>()
        .context("Invalid gRPC endpoint")?;
    let channel = Channel::builder(uri)
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(10))
        .connect()
        .await
        .context("Failed to connect to telemetry server")?;
    let mut client = TelemetryServiceClient::new(channel);

    // The unspecified sentinel is queried on purpose to show the rejection path
    let telemetry_types = [
        TelemetryType::Heartbeat,
        TelemetryType::Log,
        TelemetryType::CpuUsage,
        TelemetryType::Unspecified,
    ];

    for telemetry_type in telemetry_types {
        let request = Request::new(TelemetryRequest {
            telemetry_type: telemetry_type as i32,
        });

        match client.query_telemetry(request).await {
            Ok(response) => {
                let response = response.into_inner();
                tracing::info!(
                    telemetry_type = response.telemetry_type,
                    timestamp = response.timestamp,
                    data = ?response.telemetry_data,
                    "Query succeeded"
                );
            }
            Err(status) => {
                tracing::warn!(
                    telemetry_type = telemetry_type as i32,
                    code = ?status.code(),
                    message = status.message(),
                    "Query rejected"
                );
            }
        }
    }

    Ok(())
}
