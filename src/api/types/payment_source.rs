//! Payment instruments: stored payment sources, raw cards and ACH accounts.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Stored payment source as returned by the API.
///
/// Flags such as `credit_card` or `expired` are transported as strings.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSource {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub savings_account: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub default: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub credit_card: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub check_card: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub debit_card: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub commercial_card: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub prepaid_card: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub hsa_fsa_account: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub international_bin: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub push_funds: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub fast_funds: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_four_digits: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub drivers_license_last_four: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub drivers_license_state: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ssn_last_four: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub expired: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub month: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub year: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub brand: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub sec_code: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bank_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub routing_number: String,
}

/// Raw card details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Cardholder name
    pub name: String,
    /// Primary account number
    pub number: String,
    pub cvv: String,
    pub exp_month: String,
    pub exp_year: String,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        cvv: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            cvv: cvv.into(),
            exp_month: exp_month.into(),
            exp_year: exp_year.into(),
        }
    }
}

/// Bank account details for ACH payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ach {
    pub account_number: String,
    pub routing_number: String,
    pub phone_number: String,
    /// Standard Entry Class code (e.g. `PPD`, `WEB`)
    pub sec_code: String,
    pub savings_account: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drivers_license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drivers_license_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn_last_four: Option<String>,
}

impl Ach {
    pub fn new(
        account_number: impl Into<String>,
        routing_number: impl Into<String>,
        phone_number: impl Into<String>,
        sec_code: impl Into<String>,
        savings_account: bool,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            routing_number: routing_number.into(),
            phone_number: phone_number.into(),
            sec_code: sec_code.into(),
            savings_account,
            ..Default::default()
        }
    }

    /// Set the account holder name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the check number.
    pub fn with_check_number(mut self, check_number: impl Into<String>) -> Self {
        self.check_number = Some(check_number.into());
        self
    }

    /// Set driver's license number and issuing state.
    pub fn with_drivers_license(
        mut self,
        number: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        self.drivers_license_number = Some(number.into());
        self.drivers_license_state = Some(state.into());
        self
    }

    /// Set the last four digits of the SSN.
    pub fn with_ssn_last_four(mut self, ssn_last_four: impl Into<String>) -> Self {
        self.ssn_last_four = Some(ssn_last_four.into());
        self
    }
}
