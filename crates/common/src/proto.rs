//! Generated Protocol Buffers types and gRPC stubs for telemetry.proto.

tonic::include_proto!("telemetry.v1");
