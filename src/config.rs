//! Configuration options for the Centrifuge API client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Configuration for the Centrifuge client.
///
/// Overrides are merged over the defaults, either with struct update syntax
/// or by deserializing a partial document:
///
/// ```
/// use centrifuge_api_rs::config::Config;
///
/// let config = Config {
///     host: "example.com".into(),
///     api_key: "KEY".into(),
///     ..Default::default()
/// };
/// assert_eq!(config.port, 8000);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL scheme, "http" or "https".
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Shared secret used for HMAC signing of tokens and channel signs.
    pub secret: String,
    /// Credential sent as `Authorization: apikey <api_key>`.
    pub api_key: String,
    /// Connect timeout in seconds. For all four timeouts, 0 means no limit.
    pub connect_timeout: u64,
    /// Send timeout in seconds.
    pub send_timeout: u64,
    /// Receive timeout in seconds.
    pub receive_timeout: u64,
    /// Idle keep-alive timeout for pooled connections, in seconds.
    pub keep_alive_timeout: u64,
    /// Reserved for caller policy; the client itself never reads it.
    pub safety: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: "http".into(),
            host: "localhost".into(),
            port: 8000,
            secret: String::new(),
            api_key: String::new(),
            connect_timeout: 5,
            send_timeout: 5,
            receive_timeout: 5,
            keep_alive_timeout: 30,
            safety: true,
        }
    }
}

impl Config {
    /// Returns `{scheme}://{host}:{port}`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    pub fn connect_timeout_duration(&self) -> Option<Duration> {
        seconds(self.connect_timeout)
    }

    pub fn send_timeout_duration(&self) -> Option<Duration> {
        seconds(self.send_timeout)
    }

    pub fn receive_timeout_duration(&self) -> Option<Duration> {
        seconds(self.receive_timeout)
    }

    pub fn keep_alive_timeout_duration(&self) -> Option<Duration> {
        seconds(self.keep_alive_timeout)
    }

    /// Overall budget for one request: send plus receive.
    ///
    /// Unlimited if either part is unlimited. Saturates instead of overflowing.
    pub fn request_timeout_duration(&self) -> Option<Duration> {
        if self.send_timeout == 0 || self.receive_timeout == 0 {
            return None;
        }
        seconds(self.send_timeout.saturating_add(self.receive_timeout))
    }
}

/// Zero means no limit.
fn seconds(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret", &"<redacted>")
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("send_timeout", &self.send_timeout)
            .field("receive_timeout", &self.receive_timeout)
            .field("keep_alive_timeout", &self.keep_alive_timeout)
            .field("safety", &self.safety)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scheme, "http");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8000);
        assert_eq!(config.connect_timeout, 5);
        assert_eq!(config.send_timeout, 5);
        assert_eq!(config.receive_timeout, 5);
        assert_eq!(config.keep_alive_timeout, 30);
        assert!(config.safety);
        assert!(config.secret.is_empty());
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_partial_document_merges_over_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"host": "example.com", "port": 9000, "secret": "s"}"#).unwrap();
        assert_eq!(config.host, "example.com");
        assert_eq!(config.port, 9000);
        assert_eq!(config.secret, "s");
        assert_eq!(config.scheme, "http");
        assert_eq!(config.keep_alive_timeout, 30);
    }

    #[test]
    fn test_base_url() {
        let config = Config {
            scheme: "https".into(),
            host: "example.com".into(),
            port: 443,
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://example.com:443");
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.connect_timeout_duration(), Some(Duration::from_secs(5)));
        assert_eq!(config.keep_alive_timeout_duration(), Some(Duration::from_secs(30)));
        assert_eq!(config.request_timeout_duration(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_zero_timeout_means_no_limit() {
        let config = Config {
            connect_timeout: 0,
            send_timeout: 0,
            receive_timeout: 5,
            keep_alive_timeout: 0,
            ..Default::default()
        };
        assert_eq!(config.connect_timeout_duration(), None);
        assert_eq!(config.send_timeout_duration(), None);
        assert_eq!(config.receive_timeout_duration(), Some(Duration::from_secs(5)));
        assert_eq!(config.keep_alive_timeout_duration(), None);
        assert_eq!(config.request_timeout_duration(), None);
    }

    #[test]
    fn test_request_timeout_saturates() {
        let config = Config {
            send_timeout: u64::MAX,
            receive_timeout: 1,
            ..Default::default()
        };
        assert_eq!(config.request_timeout_duration(), Some(Duration::from_secs(u64::MAX)));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = Config {
            secret: "top-secret".into(),
            api_key: "KEY123".into(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("top-secret"));
        assert!(!rendered.contains("KEY123"));
        assert!(rendered.contains("localhost"));
    }
}
