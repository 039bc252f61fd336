//! # Request building
//!
//! Every API action is a POST to `/api` with a JSON body of the form
//! `{"method": "<name>", "params": {...}}`. The builder serializes that
//! body and dispatches it through whatever `reqwest::Client`, URL and
//! headers it is handed.

use reqwest::{header::HeaderMap, Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

#[derive(Serialize)]
struct Payload<'a> {
    method: &'a str,
    params: &'a Value,
}

/// A fully assembled API request, ready to send.
#[derive(Debug, Clone)]
pub struct Request {
    pub url: String,
    /// Always POST for this API.
    pub method: Method,
    /// JSON-encoded `{method, params}` body.
    pub body: String,
    pub headers: HeaderMap,
}

/// Builds and dispatches a single API call.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: String,
    params: Value,
}

impl RequestBuilder {
    pub fn new<M: Into<String>>(method: M, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn params(&self) -> &Value {
        &self.params
    }

    /// Serializes the call as `{"method": ..., "params": ...}`.
    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(&Payload {
            method: &self.method,
            params: &self.params,
        })?)
    }

    /// Assembles the request without sending it.
    pub fn build(&self, url: &str, headers: HeaderMap) -> Result<Request> {
        Ok(Request {
            url: url.to_string(),
            method: Method::POST,
            body: self.json()?,
            headers,
        })
    }

    /// POSTs the call and returns the response as received.
    ///
    /// The status code is not inspected; only transport failures are errors.
    pub async fn process(&self, transport: &Client, url: &str, headers: HeaderMap) -> Result<Response> {
        let request = self.build(url, headers)?;
        debug!(method = %self.method, url = %request.url, "dispatching API request");
        let resp = transport
            .request(request.method, &request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;
        debug!(method = %self.method, status = %resp.status(), "API response received");
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, AUTHORIZATION};
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let builder = RequestBuilder::new("publish", json!({"channel": "room1", "data": {"text": "hi"}}));
        assert_eq!(
            builder.json().unwrap(),
            r#"{"method":"publish","params":{"channel":"room1","data":{"text":"hi"}}}"#
        );
    }

    #[test]
    fn test_empty_params() {
        let builder = RequestBuilder::new("info", json!({}));
        assert_eq!(builder.json().unwrap(), r#"{"method":"info","params":{}}"#);
    }

    #[test]
    fn test_json_has_only_method_and_params() {
        let params = json!({"channels": ["a", "b"], "data": [1, 2, {"nested": null}]});
        let builder = RequestBuilder::new("broadcast", params.clone());
        let parsed: Value = serde_json::from_str(&builder.json().unwrap()).unwrap();
        let obj = parsed.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["method"], "broadcast");
        assert_eq!(obj["params"], params);
    }

    #[test]
    fn test_build_request() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("apikey KEY"));
        let builder = RequestBuilder::new("channels", json!({}));
        let request = builder.build("http://localhost:8000/api", headers).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "http://localhost:8000/api");
        assert_eq!(request.body, r#"{"method":"channels","params":{}}"#);
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "apikey KEY");
    }
}
