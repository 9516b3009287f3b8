//! # iTransact Rust SDK
//!
//! A Rust SDK for the iTransact payments API.
//!
//! ## Modules
//!
//! - [`auth`]: HMAC-SHA256 request signing and credentials
//! - [`api`]: signed REST client, entity types and errors
//! - [`network`]: deployment environments and their base URLs
//! - [`shared`]: value types shared across entities (addresses, metadata)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use itransact_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ITransactClient::new(Environment::Stage, "api_user", "api_key")?;
//!
//!     let token = client
//!         .create_token(
//!             &TokenCreateRequest::new(Address::new("1 Main St", "Provo", "UT", "84601"))
//!                 .with_card(Card::new("Jane Doe", "4111111111111111", "123", "12", "2030")),
//!         )
//!         .await?;
//!
//!     let customer = client
//!         .create_customer(&CustomerCreateRequest::new().with_token(token.token))
//!         .await?;
//!     println!("Customer {}", customer.id);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Request signing: canonical serialization and HMAC-SHA256.
pub mod auth;

/// Environment selection and base URL constants.
pub mod network;

/// Shared value types.
pub mod shared;

/// REST API client module. The client itself requires the `http` feature.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use itransact_sdk::prelude::*;
/// ```
pub mod prelude {
    // Signing
    pub use crate::auth::{sign, sign_bytes, Credentials, SignedPayload, Signer};

    // Network
    pub use crate::network::{Environment, LOCAL_API_URL, PRODUCTION_API_URL, STAGE_API_URL};

    // Shared types
    pub use crate::shared::{Address, Metadata, MetadataEntry};

    // API module exports
    pub use crate::api::{
        ApiError, ApiResult,
        // Entities
        Ach, Card, Credit, Customer, PaymentSource, Payout, Subscription, Token, TokenId,
        Transaction,
        // Requests
        CustomerCreateRequest, CustomerUpdateRequest, EmptyRequest, PayoutRequest,
        TokenCreateRequest, TransactionCreateRequest,
    };

    // Client (conditionally exported)
    #[cfg(feature = "http")]
    pub use crate::api::{ITransactClient, ITransactClientBuilder};
}
