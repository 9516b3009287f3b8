//! Customer-related types for the iTransact API.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::api::types::payment_source::{Ach, Card, PaymentSource};
use crate::api::types::token::TokenId;
use crate::shared::{Address, Metadata};

/// Recurring billing subscription attached to a customer.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reps: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total: String,
    /// Billing recipe, passed through untouched
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub recipe: serde_json::Map<String, serde_json::Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payment_source: PaymentSource,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub surcharge_amount: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payment_source_will_surcharge: String,
}

/// Customer record returned by `POST customers`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub addresses: Vec<Address>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payment_sources: Vec<PaymentSource>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subscriptions: Vec<Subscription>,
}

/// Request for `POST customers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach: Option<Ach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Raw magnetic stripe data from a card reader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_data: Option<String>,
}

impl CustomerCreateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Attach a payment source from a previously created token.
    pub fn with_token(mut self, token: impl Into<TokenId>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_ach(mut self, ach: Ach) -> Self {
        self.ach = Some(ach);
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_swipe_data(mut self, swipe_data: impl Into<String>) -> Self {
        self.swipe_data = Some(swipe_data.into());
        self
    }
}

/// Request for `POST customers?id=<id>`.
///
/// `id` selects the customer in the path and is also sent in the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdateRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach: Option<Ach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_payment_source_id: Option<String>,
}

impl CustomerUpdateRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_token(mut self, token: impl Into<TokenId>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_ach(mut self, ach: Ach) -> Self {
        self.ach = Some(ach);
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    /// Make an existing payment source the customer's default.
    pub fn with_default_payment_source_id(mut self, id: impl Into<String>) -> Self {
        self.default_payment_source_id = Some(id.into());
        self
    }
}
