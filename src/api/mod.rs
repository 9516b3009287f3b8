//! REST API client module for iTransact.
//!
//! This module provides a type-safe HTTP client for the iTransact payments
//! API: customers, tokens, transactions and payouts.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use itransact_sdk::api::{ITransactClient, TransactionCreateRequest};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ITransactClient::new("stage", "api_user", "api_key")?;
//!
//!     let request = TransactionCreateRequest::new(dec!(12.50), "ORDER-1")
//!         .with_token("tok_123");
//!     let transaction = client.create_transaction(&request).await?;
//!     println!("Transaction {} is {}", transaction.id, transaction.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use itransact_sdk::api::ITransactClient;
//! use std::time::Duration;
//!
//! let client = ITransactClient::builder("production", "api_user", "api_key")
//!     .timeout(Duration::from_secs(60))
//!     .user_agent("my-shop/2.1")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//! Error bodies from the service are handed back unparsed:
//!
//! ```rust,ignore
//! use itransact_sdk::api::ApiError;
//!
//! match client.get_payout("p_42").await {
//!     Ok(payout) => println!("Payout status: {}", payout.status),
//!     Err(ApiError::Api { status, body }) => println!("Rejected ({}): {}", status, body),
//!     Err(ApiError::Transport(e)) => println!("Network failure: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "http")]
pub use client::{ITransactClient, ITransactClientBuilder, DEFAULT_USER_AGENT};
pub use error::{classify_response, ApiError, ApiResult};
pub use types::*;
