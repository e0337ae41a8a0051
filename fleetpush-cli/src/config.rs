//! Configuration module
//!
//! Handles CLI configuration including the platform URL and other settings.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the platform data API
    pub platform_url: String,
}
