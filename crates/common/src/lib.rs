//! Common library for the telemetry query service.
//!
//! This crate provides shared functionality across the telemetry services,
//! including Protocol Buffers definitions, configuration management, error
//! handling, logging setup, and the request dispatch core.

// Protocol Buffers module containing generated types from telemetry.proto
pub mod proto;

// Re-export all Protocol Buffers types for convenient access
pub use proto::*;

// Configuration management
pub mod config;
pub use config::Config;

// Error handling types
pub mod error;
pub use error::{Result, TelemetryError};

// Logging and observability
pub mod logging;
pub use logging::init_tracing;

// Request-id generation for log correlation
pub mod ids;

// Dispatch core shared by the gRPC and legacy call paths
pub mod dispatch;
