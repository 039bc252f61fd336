//! HMAC-SHA256 signing for client tokens and private channel access.
//!
//! Fields are concatenated with no delimiter and signed with the shared
//! secret; the server recomputes the same digest to verify them.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt::Display;

type HmacSha256 = Hmac<Sha256>;

/// Computes the lowercase hex HMAC-SHA256 digest of `body` keyed by `secret`.
pub fn sign(secret: &str, body: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take any size");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Signs `user + timestamp + info` for a client connection token.
///
/// The timestamp is supplied by the caller, usually unix seconds.
pub fn token_for(secret: &str, user: &str, timestamp: impl Display, info: &str) -> String {
    sign(secret, &format!("{}{}{}", user, timestamp, info))
}

/// Signs `client + channel + info` to authorize a private channel subscription.
pub fn channel_sign(secret: &str, client: &str, channel: &str, info: &str) -> String {
    sign(secret, &format!("{}{}{}", client, channel, info))
}
