//! Tracking endpoint configuration.
//!
//! The transform never hardcodes collector endpoints: both base URLs are
//! supplied explicitly, either programmatically via [`TrackingConfig::new`]
//! or from the environment at startup.
//!
//! ## Environment Variables
//!
//! - `TRACK_OPEN_URL` (required): base URL of the open-tracking collector.
//!   The generated pixel points at
//!   `{TRACK_OPEN_URL}?id={trackingId}&email={recipient}`.
//! - `TRACK_CLICK_URL` (required): base URL of the click-tracking collector.
//!   Rewritten links point at
//!   `{TRACK_CLICK_URL}?id={trackingId}&email={recipient}&url={base64}`.
//!
//! Both must be absolute `http://` or `https://` URLs. There are no
//! fallback endpoints; a missing variable is a startup error.

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Base URLs of the open/click tracking collectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    /// Endpoint hit when the recipient's mail client loads the pixel.
    pub open_base_url: String,
    /// Endpoint hit when the recipient clicks a rewritten link.
    pub click_base_url: String,
}

impl TrackingConfig {
    /// Creates a configuration from explicit base URLs.
    pub fn new(open_base_url: impl Into<String>, click_base_url: impl Into<String>) -> Self {
        Self {
            open_base_url: open_base_url.into(),
            click_base_url: click_base_url.into(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TRACK_OPEN_URL` or `TRACK_CLICK_URL` is not set.
    pub fn from_env() -> Result<Self> {
        let open_base_url = env::var("TRACK_OPEN_URL").context("TRACK_OPEN_URL must be set")?;
        let click_base_url = env::var("TRACK_CLICK_URL").context("TRACK_CLICK_URL must be set")?;

        Ok(Self {
            open_base_url,
            click_base_url,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either base URL does not parse or uses a scheme
    /// other than `http` / `https`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("TRACK_OPEN_URL", &self.open_base_url),
            ("TRACK_CLICK_URL", &self.click_base_url),
        ] {
            let url = Url::parse(value)
                .with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;

            match url.scheme() {
                "http" | "https" => {}
                other => anyhow::bail!("{} must use http or https, got '{}'", name, other),
            }
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Tracking configuration loaded:");
        tracing::info!("  Open collector: {}", self.open_base_url);
        tracing::info!("  Click collector: {}", self.click_base_url);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<TrackingConfig> {
    let config = TrackingConfig::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_validate_accepts_http_and_https() {
        let config = TrackingConfig::new("https://open.example.com/t", "http://click.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = TrackingConfig::new("ftp://open.example.com", "https://click.example.com");

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let config = TrackingConfig::new("not a url", "https://click.example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_both_urls() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("TRACK_OPEN_URL", "https://open.test/collect");
            env::set_var("TRACK_CLICK_URL", "https://click.test/collect");
        }

        let config = TrackingConfig::from_env().unwrap();

        assert_eq!(config.open_base_url, "https://open.test/collect");
        assert_eq!(config.click_base_url, "https://click.test/collect");

        // Cleanup
        unsafe {
            env::remove_var("TRACK_OPEN_URL");
            env::remove_var("TRACK_CLICK_URL");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_open_url() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("TRACK_OPEN_URL");
            env::set_var("TRACK_CLICK_URL", "https://click.test/collect");
        }

        let err = TrackingConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("TRACK_OPEN_URL"));

        // Cleanup
        unsafe {
            env::remove_var("TRACK_CLICK_URL");
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_validates() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("TRACK_OPEN_URL", "mailto:open@test");
            env::set_var("TRACK_CLICK_URL", "https://click.test/collect");
        }

        assert!(load_from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("TRACK_OPEN_URL");
            env::remove_var("TRACK_CLICK_URL");
        }
    }
}
