//! iTransact REST API client implementation.
//!
//! The [`ITransactClient`] signs every request body with the API secret key and
//! posts it to the environment's base URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use itransact_sdk::api::{ITransactClient, CustomerCreateRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ITransactClient::new("stage", "api_user", "api_key")?;
//!
//!     let customer = client.create_customer(&CustomerCreateRequest::new()).await?;
//!     println!("Created customer {}", customer.id);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::endpoints;
use crate::api::error::{classify_response, ApiError, ApiResult};
use crate::api::types::*;
use crate::auth::{Credentials, Signer};
use crate::network::Environment;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("itransact-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring [`ITransactClient`].
#[derive(Debug, Clone)]
pub struct ITransactClientBuilder {
    credentials: Credentials,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ITransactClientBuilder {
    /// Create a new builder for the given environment and credentials.
    pub fn new(
        environment: impl Into<Environment>,
        api_username: impl Into<String>,
        api_secret_key: impl Into<String>,
    ) -> Self {
        Self::from_credentials(Credentials::new(environment, api_username, api_secret_key))
    }

    /// Create a new builder from existing [`Credentials`].
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Send requests to `base_url` instead of the environment's URL.
    ///
    /// Meant for proxies and mock servers. Normalised to a single trailing `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into().trim_end_matches('/').to_string();
        url.push('/');
        self.base_url = Some(url);
        self
    }

    /// Fail requests that take longer than `timeout`. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the identifying `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client. Performs no I/O.
    pub fn build(self) -> ApiResult<ITransactClient> {
        // The username ends up in a header on every request
        HeaderValue::from_str(&self.credentials.api_username).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid API username: {}", e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid user agent '{}': {}", self.user_agent, e))
            })?,
        );

        let mut builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            // Connections are not reused across calls
            builder = builder.pool_max_idle_per_host(0);
            // 3xx answers are classified like any other status, never followed
            builder = builder.redirect(reqwest::redirect::Policy::none());
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
        }

        let http_client = builder.build().map_err(|e| {
            ApiError::InvalidParameter(format!("Failed to initialise HTTP client: {}", e))
        })?;

        let environment = self.credentials.environment;
        let base_url = self
            .base_url
            .unwrap_or_else(|| environment.base_url().to_string());

        Ok(ITransactClient {
            http_client,
            base_url,
            environment,
            signer: self.credentials.signer(),
            api_username: self.credentials.api_username,
        })
    }
}

/// iTransact REST API client.
///
/// Cheap to clone; clones share only immutable configuration and can issue
/// requests concurrently.
#[derive(Debug, Clone)]
pub struct ITransactClient {
    http_client: Client,
    base_url: String,
    environment: Environment,
    api_username: String,
    signer: Signer,
}

impl ITransactClient {
    /// Create a client with default settings (no timeout, default user agent).
    ///
    /// # Errors
    ///
    /// Returns an error if the username is not a valid header value or the
    /// HTTP client cannot be initialized.
    pub fn new(
        environment: impl Into<Environment>,
        api_username: impl Into<String>,
        api_secret_key: impl Into<String>,
    ) -> ApiResult<Self> {
        ITransactClientBuilder::new(environment, api_username, api_secret_key).build()
    }

    /// Create a client with default settings from existing [`Credentials`].
    pub fn from_credentials(credentials: Credentials) -> ApiResult<Self> {
        ITransactClientBuilder::from_credentials(credentials).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(
        environment: impl Into<Environment>,
        api_username: impl Into<String>,
        api_secret_key: impl Into<String>,
    ) -> ITransactClientBuilder {
        ITransactClientBuilder::new(environment, api_username, api_secret_key)
    }

    /// Get the base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the environment the client was created for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Get the API username sent with every request.
    pub fn api_username(&self) -> &str {
        &self.api_username
    }

    // =========================================================================
    // Signed request pipeline
    // =========================================================================

    /// Sign `payload` and `POST` it to `endpoint`, parsing the response as `T`.
    ///
    /// The payload is serialized once; the signature is computed over exactly
    /// the bytes that are sent.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Serialize`] if `payload` cannot be serialized (nothing is sent)
    /// * [`ApiError::Transport`] if no response is obtained
    /// * [`ApiError::Api`] for any status other than 200 or 201
    /// * [`ApiError::MalformedResponse`] if a 200/201 body does not parse
    pub async fn execute<B, T>(&self, endpoint: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let signed = self
            .signer
            .sign_payload(payload)
            .map_err(ApiError::Serialize)?;
        let authorization = self.authorization(&signed.signature)?;
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(endpoint, bytes = signed.body.len(), "Sending signed request");

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, authorization)
            .body(signed.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        // Raw bytes: `text()` sniffs the charset and strips a BOM
        let bytes = response.bytes().await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        tracing::debug!(endpoint, status, "Received response");

        classify_response(status, body)
    }

    /// `Authorization: <username>:<signature>`
    fn authorization(&self, signature: &str) -> ApiResult<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("{}:{}", self.api_username, signature))
            .map_err(|e| ApiError::InvalidParameter(format!("Invalid authorization header: {}", e)))?;
        value.set_sensitive(true);
        Ok(value)
    }

    // =========================================================================
    // Customer endpoints
    // =========================================================================

    /// Create a customer, optionally with an address and a payment source.
    pub async fn create_customer(&self, request: &CustomerCreateRequest) -> ApiResult<Customer> {
        self.execute(endpoints::CUSTOMERS, request).await
    }

    /// Update the customer identified by `request.id`.
    pub async fn update_customer(&self, request: &CustomerUpdateRequest) -> ApiResult<Customer> {
        self.execute(&endpoints::customer_update(&request.id), request)
            .await
    }

    // =========================================================================
    // Payout endpoints
    // =========================================================================

    /// Push funds to a customer, card or token.
    pub async fn create_payout(&self, request: &PayoutRequest) -> ApiResult<Payout> {
        self.execute(endpoints::PAYOUTS, request).await
    }

    /// Fetch a payout by id. The service expects `POST` with an empty object body.
    pub async fn get_payout(&self, id: &str) -> ApiResult<Payout> {
        self.execute(&endpoints::payout(id), &EmptyRequest {}).await
    }

    // =========================================================================
    // Token endpoints
    // =========================================================================

    /// Tokenize card or ACH details for later use.
    pub async fn create_token(&self, request: &TokenCreateRequest) -> ApiResult<Token> {
        self.execute(endpoints::TOKENS, request).await
    }

    // =========================================================================
    // Transaction endpoints
    // =========================================================================

    /// Charge or authorize a payment.
    pub async fn create_transaction(
        &self,
        request: &TransactionCreateRequest,
    ) -> ApiResult<Transaction> {
        self.execute(endpoints::TRANSACTIONS, request).await
    }

    /// Fetch a transaction by id. The service expects `POST` with an empty object body.
    pub async fn get_transaction(&self, id: &str) -> ApiResult<Transaction> {
        self.execute(&endpoints::transaction(id), &EmptyRequest {})
            .await
    }
}
