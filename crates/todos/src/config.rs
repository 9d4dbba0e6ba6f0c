use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
/// The store connection settings are only read by the `dynamodb` backend.
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
pub struct Config {
    /// DynamoDB endpoint URL (default: "http://localhost:8000")
    pub dynamodb_endpoint: String,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Access key for the static credentials (default: "dummy")
    pub aws_access_key_id: String,
    /// Secret key for the static credentials (default: "dummy")
    pub aws_secret_access_key: String,
    /// Delay between table status checks in milliseconds (default: 1,000)
    pub table_poll_interval_ms: u64,
    /// Status checks before giving up on the table (default: 60)
    pub table_ready_max_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_ENDPOINT` - Store endpoint (default: "http://localhost:8000")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ACCESS_KEY_ID` - Access key (default: "dummy")
    /// - `AWS_SECRET_ACCESS_KEY` - Secret key (default: "dummy")
    /// - `TABLE_POLL_INTERVAL_MS` - Table status poll interval (default: 1,000)
    /// - `TABLE_READY_MAX_ATTEMPTS` - Table status polls before failing (default: 60)
    pub fn from_env() -> Self {
        Self {
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_access_key_id: env::var("AWS_ACCESS_KEY_ID")
                .unwrap_or_else(|_| "dummy".to_string()),
            aws_secret_access_key: env::var("AWS_SECRET_ACCESS_KEY")
                .unwrap_or_else(|_| "dummy".to_string()),
            table_poll_interval_ms: env::var("TABLE_POLL_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            table_ready_max_attempts: env::var("TABLE_READY_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Get the table poll interval as a Duration.
    pub fn table_poll_interval(&self) -> Duration {
        Duration::from_millis(self.table_poll_interval_ms)
    }
}
