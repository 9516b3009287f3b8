//! Payout types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::api::types::payment_source::{Card, PaymentSource};
use crate::api::types::token::TokenId;
use crate::shared::{Address, DecimalFloat, Metadata};

/// Payout record returned by `POST payouts` and `POST payouts/<id>`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payout {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull<DecimalFloat>")]
    pub amount: Decimal,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub authorization_code: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub avs_category: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub avs_response: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cvv_response: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payment_source: PaymentSource,
}

/// Request for `POST payouts`.
///
/// Funds are pushed to exactly one of `customer_id`/`payment_source_id`,
/// `card` or `token`; the service validates the combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub order_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub send_merchant_receipt: bool,
    pub send_customer_receipt: bool,
}

impl PayoutRequest {
    /// Create a payout request with receipts disabled.
    pub fn new(amount: Decimal, order_number: impl Into<String>) -> Self {
        Self {
            amount,
            order_number: order_number.into(),
            ..Default::default()
        }
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_token(mut self, token: impl Into<TokenId>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_payment_source_id(mut self, payment_source_id: impl Into<String>) -> Self {
        self.payment_source_id = Some(payment_source_id.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set which parties receive an emailed receipt.
    pub fn with_receipts(mut self, merchant: bool, customer: bool) -> Self {
        self.send_merchant_receipt = merchant;
        self.send_customer_receipt = customer;
        self
    }
}
