use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Address the gRPC server binds to.
    #[serde(default = "default_grpc_addr")]
    pub grpc_addr: String,
    /// Endpoint the client driver connects to.
    #[serde(default = "default_grpc_endpoint")]
    pub grpc_endpoint: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_grpc_addr() -> String {
    "0.0.0.0:50051".to_string()
}

fn default_grpc_endpoint() -> String {
    "http://localhost:50051".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        // Parse environment variables into the Config struct
        envy::from_env().context("Failed to load config from environment")
    }
}
