//! API response and request types for the iTransact REST API.
//!
//! This module contains all the type definitions used by the API client,
//! organized by entity.

pub mod customer;
pub mod payment_source;
pub mod payout;
pub mod token;
pub mod transaction;

use serde::{Deserialize, Serialize};

// Re-export all types for convenience
pub use customer::*;
pub use payment_source::*;
pub use payout::*;
pub use token::*;
pub use transaction::*;

/// Empty JSON object body (`{}`) sent by the fetch-by-id endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRequest {}
