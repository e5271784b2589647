//! gRPC handler and the legacy in-process call path.
//!
//! Both paths delegate to `telemetry_common::dispatch::handle` and only
//! translate its result into their external signaling convention: a gRPC
//! status for the RPC surface, an `Option` for legacy callers.

use telemetry_common::dispatch;
use telemetry_common::ids::request_id;
use telemetry_common::proto::telemetry_service_server::TelemetryService;
use telemetry_common::proto::{TelemetryRequest, TelemetryResponse};
use tonic::{Request, Response, Status};

/// Stateless handler behind the `TelemetryService` RPC surface.
#[derive(Debug, Default)]
pub struct TelemetryEndpoint;

#[tonic::async_trait]
impl TelemetryService for TelemetryEndpoint {
    async fn query_telemetry(
        &self,
        request: Request<TelemetryRequest>,
    ) -> Result<Response<TelemetryResponse>, Status> {
        let req_id = request_id();
        let request = request.into_inner();
        tracing::info!(
            %req_id,
            telemetry_type = request.telemetry_type,
            "Received gRPC telemetry request"
        );

        match dispatch::handle(&request) {
            Ok(response) => {
                tracing::info!(
                    %req_id,
                    timestamp = response.timestamp,
                    "Sending gRPC telemetry response"
                );
                Ok(Response::new(response))
            }
            Err(e) => {
                tracing::warn!(%req_id, error = %e, "Rejecting gRPC telemetry request");
                Err(Status::invalid_argument(e.to_string()))
            }
        }
    }
}

impl TelemetryEndpoint {
    /// Legacy in-process entry point kept for callers that predate the gRPC
    /// surface. Mirrors `query_telemetry` result-for-result but signals
    /// failure with `None` instead of a status code.
    pub fn process_telemetry_request(
        &self,
        request: &TelemetryRequest,
    ) -> Option<TelemetryResponse> {
        tracing::info!(
            telemetry_type = request.telemetry_type,
            "Processing telemetry request"
        );

        match dispatch::handle(request) {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::warn!(error = %e, "Legacy telemetry request failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemetry_common::proto::telemetry_response::TelemetryData;
    use telemetry_common::proto::TelemetryType;
    use tonic::Code;

    fn request(raw: i32) -> TelemetryRequest {
        TelemetryRequest { telemetry_type: raw }
    }

    #[tokio::test]
    async fn grpc_path_answers_all_supported_types() {
        let endpoint = TelemetryEndpoint::default();

        for telemetry_type in [
            TelemetryType::Heartbeat,
            TelemetryType::Log,
            TelemetryType::CpuUsage,
        ] {
            let response = endpoint
                .query_telemetry(Request::new(request(telemetry_type as i32)))
                .await
                .unwrap()
                .into_inner();

            assert_eq!(response.telemetry_type, telemetry_type as i32);
            assert!(response.telemetry_data.is_some());
        }
    }

    #[tokio::test]
    async fn grpc_path_rejects_unspecified_with_invalid_argument() {
        let endpoint = TelemetryEndpoint::default();

        let status = endpoint
            .query_telemetry(Request::new(request(
                TelemetryType::Unspecified as i32,
            )))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("Unsupported telemetry type: 0"));
    }

    #[tokio::test]
    async fn legacy_path_mirrors_grpc_path() {
        let endpoint = TelemetryEndpoint::default();

        // Supported types: both paths succeed with identical payload content
        for telemetry_type in [
            TelemetryType::Heartbeat,
            TelemetryType::Log,
            TelemetryType::CpuUsage,
        ] {
            let grpc = endpoint
                .query_telemetry(Request::new(request(telemetry_type as i32)))
                .await
                .unwrap()
                .into_inner();
            let legacy = endpoint
                .process_telemetry_request(&request(telemetry_type as i32))
                .unwrap();

            assert_eq!(grpc.telemetry_type, legacy.telemetry_type);
            assert_eq!(grpc.telemetry_data, legacy.telemetry_data);
        }

        // Unsupported types: both paths fail
        for raw in [TelemetryType::Unspecified as i32, 42] {
            assert!(endpoint
                .query_telemetry(Request::new(request(raw)))
                .await
                .is_err());
            assert!(endpoint.process_telemetry_request(&request(raw)).is_none());
        }
    }

    #[tokio::test]
    async fn log_payload_carries_placeholder_text() {
        let endpoint = TelemetryEndpoint::default();

        let response = endpoint
            .query_telemetry(Request::new(request(TelemetryType::Log as i32)))
            .await
            .unwrap()
            .into_inner();

        match response.telemetry_data {
            Some(TelemetryData::Log(log)) => {
                assert_eq!(log.log_data, dispatch::SAMPLE_LOG_DATA)
            }
            other => panic!("Expected log payload, got {:?}", other),
        }
    }
}
