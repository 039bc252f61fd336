//! # Centrifuge Client
//!
//! Holds the connection settings and exposes one method per server API
//! action. Every action is a signed-by-API-key POST to `/api`, built by
//! [`RequestBuilder`] and returned to the caller untouched. The client also
//! produces the HMAC signatures used for connection tokens and private
//! channel subscriptions.

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client as HttpClient, Response,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::{self, Display};
use tokio::sync::OnceCell;
use tracing::trace;

use crate::{config::Config, error::Result, request::RequestBuilder, signature};

/// Builds the HTTP transport from the timeouts currently in `config`.
fn build_transport(config: &Config) -> Result<HttpClient> {
    trace!(
        connect_timeout = config.connect_timeout,
        send_timeout = config.send_timeout,
        receive_timeout = config.receive_timeout,
        keep_alive_timeout = config.keep_alive_timeout,
        "building HTTP transport"
    );
    let mut builder = HttpClient::builder().pool_idle_timeout(config.keep_alive_timeout_duration());
    if let Some(timeout) = config.connect_timeout_duration() {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = config.request_timeout_duration() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// The Centrifuge API client.
pub struct Client {
    config: Config,
    /// Created on first use and reused for the life of the client.
    transport: OnceCell<HttpClient>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Client {
    /// Creates a new client. No connection is made until the first request.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            transport: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scheme(&self) -> &str {
        &self.config.scheme
    }

    pub fn set_scheme<S: Into<String>>(&mut self, scheme: S) {
        self.config.scheme = scheme.into();
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn set_host<S: Into<String>>(&mut self, host: S) {
        self.config.host = host.into();
    }

    pub fn port(&self) -> u16 {
        self.config.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.config.port = port;
    }

    pub fn secret(&self) -> &str {
        &self.config.secret
    }

    pub fn set_secret<S: Into<String>>(&mut self, secret: S) {
        self.config.secret = secret.into();
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn set_api_key<S: Into<String>>(&mut self, api_key: S) {
        self.config.api_key = api_key.into();
    }

    pub fn safety(&self) -> bool {
        self.config.safety
    }

    pub fn set_safety(&mut self, safety: bool) {
        self.config.safety = safety;
    }

    /// Sets the connect timeout in seconds; 0 means no limit.
    ///
    /// Only takes effect if the transport has not been created yet; once the
    /// first request has been made the existing transport keeps its timeouts.
    /// The same holds for the other timeout setters.
    pub fn set_connect_timeout(&mut self, secs: u64) {
        self.config.connect_timeout = secs;
    }

    pub fn set_send_timeout(&mut self, secs: u64) {
        self.config.send_timeout = secs;
    }

    pub fn set_receive_timeout(&mut self, secs: u64) {
        self.config.receive_timeout = secs;
    }

    pub fn set_keep_alive_timeout(&mut self, secs: u64) {
        self.config.keep_alive_timeout = secs;
    }

    /// Returns `{scheme}://{host}:{port}/api`, with `/{path}` appended if given.
    pub fn url(&self, path: Option<&str>) -> String {
        match path {
            Some(path) => format!("{}/api/{}", self.config.base_url(), path),
            None => format!("{}/api", self.config.base_url()),
        }
    }

    /// Headers sent with every API call.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("apikey {}", self.config.api_key))?,
        );
        Ok(headers)
    }

    /// Returns the HTTP transport, creating it on first call.
    pub async fn transport(&self) -> Result<&HttpClient> {
        self.transport
            .get_or_try_init(|| async { build_transport(&self.config) })
            .await
    }

    /// Sends an arbitrary API method with the given params.
    pub async fn request(&self, method: &str, params: Value) -> Result<Response> {
        let headers = self.headers()?;
        let transport = self.transport().await?;
        RequestBuilder::new(method, params)
            .process(transport, &self.url(None), headers)
            .await
    }

    /// Publishes the same data into several channels at once.
    pub async fn broadcast<C, T>(&self, channels: &[C], data: &T) -> Result<Response>
    where
        C: AsRef<str>,
        T: Serialize + ?Sized,
    {
        let channels: Vec<&str> = channels.iter().map(AsRef::as_ref).collect();
        let data = serde_json::to_value(data)?;
        self.request("broadcast", json!({ "channels": channels, "data": data }))
            .await
    }

    /// Publishes data into a single channel.
    pub async fn publish<T: Serialize + ?Sized>(&self, channel: &str, data: &T) -> Result<Response> {
        let data = serde_json::to_value(data)?;
        self.request("publish", json!({ "channel": channel, "data": data }))
            .await
    }

    /// Unsubscribes a user from a channel.
    pub async fn unsubscribe(&self, channel: &str, user: &str) -> Result<Response> {
        self.request("unsubscribe", json!({ "channel": channel, "user": user }))
            .await
    }

    /// Disconnects every connection of a user.
    pub async fn disconnect(&self, user: &str) -> Result<Response> {
        self.request("disconnect", json!({ "user": user })).await
    }

    /// Clients currently subscribed to a channel.
    pub async fn presence(&self, channel: &str) -> Result<Response> {
        self.request("presence", json!({ "channel": channel })).await
    }

    /// Client and user counts for a channel.
    pub async fn presence_stats(&self, channel: &str) -> Result<Response> {
        self.request("presence_stats", json!({ "channel": channel }))
            .await
    }

    /// Recent messages kept for a channel.
    pub async fn history(&self, channel: &str) -> Result<Response> {
        self.request("history", json!({ "channel": channel })).await
    }

    /// Drops the message history of a channel.
    pub async fn history_remove(&self, channel: &str) -> Result<Response> {
        self.request("history_remove", json!({ "channel": channel }))
            .await
    }

    /// Lists active channels.
    pub async fn channels(&self) -> Result<Response> {
        self.request("channels", json!({})).await
    }

    /// Server node information.
    pub async fn info(&self) -> Result<Response> {
        self.request("info", json!({})).await
    }

    /// Connection token for `user` at `timestamp`, with optional user info.
    pub fn token_for(&self, user: &str, timestamp: impl Display, user_info: &str) -> String {
        signature::token_for(&self.config.secret, user, timestamp, user_info)
    }

    /// Sign authorizing `client` to subscribe to a private `channel`.
    pub fn generate_channel_sign(&self, client: &str, channel: &str, user_info: &str) -> String {
        signature::channel_sign(&self.config.secret, client, channel, user_info)
    }

    /// HMAC-SHA256 hex digest of `body` keyed by the client secret.
    pub fn sign(&self, body: &str) -> String {
        signature::sign(&self.config.secret, body)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("transport_initialized", &self.transport.initialized())
            .finish()
    }
}
