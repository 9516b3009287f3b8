//! Transaction (charge) types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::api::types::payment_source::{Ach, Card, PaymentSource};
use crate::api::types::token::TokenId;
use crate::shared::{Address, DecimalFloat, Metadata};

/// Credit (refund) applied against a transaction.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credit {
    #[serde_as(as = "DefaultOnNull<DecimalFloat>")]
    pub amount: Decimal,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub state: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub settled: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub surcharge_amount: String,
}

/// Transaction record returned by `POST transactions` and `POST transactions/<id>`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub xid: String,
    /// Creation timestamp as sent by the service
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created: String,
    #[serde_as(as = "DefaultOnNull<DecimalFloat>")]
    pub amount: Decimal,
    #[serde_as(as = "DefaultOnNull<DecimalFloat>")]
    pub tax: Decimal,
    #[serde_as(as = "DefaultOnNull<DecimalFloat>")]
    pub surcharge_amount: Decimal,
    #[serde_as(as = "DefaultOnNull<DecimalFloat>")]
    pub authorized_amount: Decimal,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub authorization_code: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub avs_category: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub avs_response: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub cvv_response: String,
    #[serde_as(as = "DefaultOnNull<DecimalFloat>")]
    pub balance: Decimal,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub settled: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub instrument: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payment_source: PaymentSource,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub credits: Vec<Credit>,
}

/// Request for `POST transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCreateRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach: Option<Ach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Capture immediately (`true`) or only authorize (`false`)
    pub capture: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    pub order_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub send_merchant_receipt: bool,
    pub send_customer_receipt: bool,
}

impl TransactionCreateRequest {
    /// Create a captured sale with zero tax and receipts disabled.
    pub fn new(amount: Decimal, order_number: impl Into<String>) -> Self {
        Self {
            amount,
            order_number: order_number.into(),
            capture: true,
            ..Default::default()
        }
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_payment_source_id(mut self, payment_source_id: impl Into<String>) -> Self {
        self.payment_source_id = Some(payment_source_id.into());
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_ach(mut self, ach: Ach) -> Self {
        self.ach = Some(ach);
        self
    }

    pub fn with_token(mut self, token: impl Into<TokenId>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_swipe_data(mut self, swipe_data: impl Into<String>) -> Self {
        self.swipe_data = Some(swipe_data.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Authorize only; capture later.
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
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
