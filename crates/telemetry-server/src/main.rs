//! Telemetry Server - gRPC endpoint serving mock telemetry payloads.
//!
//! Exposes `TelemetryService/QueryTelemetry`: heartbeat, log, and CPU-usage
//! queries are answered with canned payloads; anything else is rejected with
//! an invalid-argument status. The handler is stateless, so the server needs
//! no coordination beyond what tonic provides.

mod service;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use telemetry_common::proto::telemetry_service_server::TelemetryServiceServer;
use telemetry_common::{init_tracing, Config};
use tokio::signal;
use tonic::transport::Server;

use crate::service::TelemetryEndpoint;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("telemetry-server");
    let config = Config::from_env()?;

    let addr: SocketAddr = config
        .grpc_addr
        .parse()
        .context("Invalid gRPC listen address")?;

    tracing::info!("Telemetry server listening on {}", addr);

    Server::builder()
        .add_service(TelemetryServiceServer::new(TelemetryEndpoint::default()))
        .serve_with_shutdown(addr, async {
            let _ = signal::ctrl_c().await;
            tracing::info!("Shutdown signal received.");
        })
        .await
        .context("gRPC server error")?;

    tracing::info!("Shutdown complete.");
    Ok(())
}
