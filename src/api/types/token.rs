//! Payment token types.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::api::types::payment_source::{Ach, Card, PaymentSource};
use crate::shared::Address;

/// Opaque token identifier, usable in place of raw card or ACH details.
pub type TokenId = String;

/// Token returned by `POST tokens`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub token: TokenId,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub used: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payment_source: PaymentSource,
}

/// Request for `POST tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCreateRequest {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach: Option<Ach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

impl TokenCreateRequest {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ach: None,
            card: None,
        }
    }

    pub fn with_ach(mut self, ach: Ach) -> Self {
        self.ach = Some(ach);
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }
}
