//! Request signing for the iTransact API.
//!
//! Every request body is authenticated with an HMAC-SHA256 signature keyed by
//! the API secret key. The signature travels in the `Authorization` header as
//! `<username>:<signature>`.
//!
//! # Signing Flow
//!
//! 1. Serialize the payload once with [`canonical_json`]
//! 2. HMAC-SHA256 the serialized bytes with the secret key
//! 3. Base64-encode the digest
//! 4. Transmit the same serialized bytes as the request body
//!
//! The signature binds only the body and the key. There is no nonce or
//! timestamp, so a captured (signature, body) pair stays valid.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::network::Environment;

/// HMAC-SHA256 as used by the API.
pub type HmacSha256 = Hmac<Sha256>;

/// Serialize a payload with the one routine used for both signing and transmission.
///
/// Compact output, fields in declaration order.
pub fn canonical_json<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(payload)
}

/// Sign already-serialized bytes, returning the base64 HMAC-SHA256 digest.
pub fn sign_bytes(secret_key: &str, bytes: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(bytes);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Serialize `payload` canonically and sign it.
///
/// # Errors
///
/// Returns the serializer error if `payload` cannot be represented as JSON.
pub fn sign<T: Serialize + ?Sized>(secret_key: &str, payload: &T) -> Result<String, serde_json::Error> {
    let bytes = canonical_json(payload)?;
    Ok(sign_bytes(secret_key, &bytes))
}

/// Serialized body together with the signature computed over exactly those bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// Bytes to transmit as the request body
    pub body: Vec<u8>,
    /// Base64 HMAC-SHA256 of `body`
    pub signature: String,
}

/// Holds the API secret key and signs payloads with it.
#[derive(Clone)]
pub struct Signer {
    secret_key: String,
}

impl Signer {
    /// Create a signer for the given API secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    /// Sign already-serialized bytes.
    pub fn sign_bytes(&self, bytes: &[u8]) -> String {
        sign_bytes(&self.secret_key, bytes)
    }

    /// Serialize `payload` once and sign the resulting bytes.
    pub fn sign_payload<T: Serialize + ?Sized>(
        &self,
        payload: &T,
    ) -> Result<SignedPayload, serde_json::Error> {
        let body = canonical_json(payload)?;
        let signature = self.sign_bytes(&body);
        Ok(SignedPayload { body, signature })
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Environment and API credentials a client is constructed from.
#[derive(Clone)]
pub struct Credentials {
    /// Deployment target
    pub environment: Environment,
    /// API username, sent in clear in the `Authorization` header
    pub api_username: String,
    /// API secret key, never transmitted
    pub api_secret_key: String,
}

impl Credentials {
    /// Bundle an environment selector with the API username and secret key.
    pub fn new(
        environment: impl Into<Environment>,
        api_username: impl Into<String>,
        api_secret_key: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            api_username: api_username.into(),
            api_secret_key: api_secret_key.into(),
        }
    }

    /// A [`Signer`] keyed with these credentials.
    pub fn signer(&self) -> Signer {
        Signer::new(self.api_secret_key.clone())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("environment", &self.environment)
            .field("api_username", &self.api_username)
            .field("api_secret_key", &"<redacted>")
            .finish()
    }
}
