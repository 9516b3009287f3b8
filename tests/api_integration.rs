//! Integration tests for the iTransact API types.
//!
//! These tests pin the JSON wire shape of request and response entities.

use itransact_sdk::api::*;
use itransact_sdk::shared::{Address, Metadata};
use rust_decimal_macros::dec;
use serde_json::json;

fn address() -> Address {
    Address::new("1 Main St", "Provo", "UT", "84601")
}

fn card() -> Card {
    Card::new("Jane Doe", "4111111111111111", "123", "12", "2030")
}

// =============================================================================
// Payment instruments
// =============================================================================

mod payment_source_types {
    use super::*;

    #[test]
    fn test_payment_source_deserialize() {
        let json = r#"{
            "id": "ps_1",
            "name": "Jane Doe",
            "type": "card",
            "savings_account": "false",
            "default": "true",
            "credit_card": "true",
            "check_card": "false",
            "debit_card": "false",
            "commercial_card": "false",
            "prepaid_card": "false",
            "hsa_fsa_account": "false",
            "international_bin": "false",
            "push_funds": "false",
            "fast_funds": "false",
            "last_four_digits": "1111",
            "drivers_license_last_four": "",
            "drivers_license_state": "",
            "ssn_last_four": "",
            "expired": "false",
            "month": "12",
            "year": "2030",
            "brand": "visa",
            "sec_code": "",
            "bank_name": "",
            "routing_number": ""
        }"#;
        let source: PaymentSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.id, "ps_1");
        assert_eq!(source.source_type, "card");
        assert_eq!(source.default, "true");
        assert_eq!(source.last_four_digits, "1111");
        assert_eq!(source.brand, "visa");
    }

    #[test]
    fn test_payment_source_null_fields_read_as_empty() {
        let json = r#"{"id": "ps_1", "type": "card", "bank_name": null, "routing_number": null, "sec_code": null}"#;
        let source: PaymentSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.id, "ps_1");
        assert_eq!(source.bank_name, "");
        assert_eq!(source.routing_number, "");
    }

    #[test]
    fn test_payment_source_type_field_renamed() {
        let source = PaymentSource {
            source_type: "ach".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["type"], "ach");
        assert!(value.get("source_type").is_none());
    }

    #[test]
    fn test_ach_serialize_omits_unset_optionals() {
        let ach = Ach::new("000123456789", "110000000", "8015550100", "PPD", true);
        let value = serde_json::to_value(&ach).unwrap();
        assert_eq!(
            value,
            json!({
                "account_number": "000123456789",
                "routing_number": "110000000",
                "phone_number": "8015550100",
                "sec_code": "PPD",
                "savings_account": true
            })
        );

        let ach = ach
            .with_name("Jane Doe")
            .with_check_number("1001")
            .with_drivers_license("D1234567", "UT")
            .with_ssn_last_four("6789");
        let value = serde_json::to_value(&ach).unwrap();
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["check_number"], "1001");
        assert_eq!(value["drivers_license_number"], "D1234567");
        assert_eq!(value["drivers_license_state"], "UT");
        assert_eq!(value["ssn_last_four"], "6789");
    }
}

// =============================================================================
// Customers
// =============================================================================

mod customer_types {
    use super::*;

    #[test]
    fn test_customer_deserialize() {
        let json = r#"{
            "id": "cus_9",
            "addresses": [{"line1": "1 Main St", "city": "Provo", "state": "UT", "postal_code": "84601"}],
            "metadata": [{"key": "tier", "value": "gold"}, {"key": "tier", "value": "silver"}],
            "payment_sources": [{"id": "ps_1", "type": "card"}],
            "subscriptions": [{
                "id": "sub_1",
                "description": "Monthly",
                "status": "active",
                "reps": "12",
                "total": "120.00",
                "recipe": {"interval": "month"},
                "payment_source": {"id": "ps_1"},
                "surcharge_amount": "0",
                "payment_source_will_surcharge": "false"
            }]
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, "cus_9");
        assert_eq!(customer.addresses[0].line2, None);
        assert_eq!(customer.metadata.get_all("tier").collect::<Vec<_>>(), vec!["gold", "silver"]);
        assert_eq!(customer.payment_sources[0].source_type, "card");
        assert_eq!(customer.subscriptions[0].recipe["interval"], "month");
        assert_eq!(customer.subscriptions[0].payment_source.id, "ps_1");
    }

    #[test]
    fn test_customer_tolerates_missing_and_unknown_fields() {
        let customer: Customer = serde_json::from_str(r#"{"id": "c_1", "extra": 5}"#).unwrap();
        assert_eq!(customer.id, "c_1");
        assert!(customer.addresses.is_empty());
        assert!(customer.metadata.is_empty());
    }

    #[test]
    fn test_customer_tolerates_null_fields() {
        let json = r#"{
            "id": "c_1",
            "addresses": null,
            "metadata": null,
            "payment_sources": [{"id": "ps", "bank_name": null}],
            "subscriptions": [{"id": "sub_1", "recipe": null, "payment_source": null}]
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, "c_1");
        assert!(customer.addresses.is_empty());
        assert!(customer.metadata.is_empty());
        assert_eq!(customer.payment_sources[0].bank_name, "");
        assert!(customer.subscriptions[0].recipe.is_empty());
        assert_eq!(customer.subscriptions[0].payment_source, PaymentSource::default());
    }

    #[test]
    fn test_empty_create_request_is_empty_object() {
        let json = serde_json::to_string(&CustomerCreateRequest::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_create_request_field_order() {
        let request = CustomerCreateRequest::new()
            .with_metadata(Metadata::new().with("source", "web"))
            .with_address(address())
            .with_token("tok_1")
            .with_swipe_data("%B4111");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"metadata":[{"key":"source","value":"web"}],"#,
                r#""address":{"line1":"1 Main St","city":"Provo","state":"UT","postal_code":"84601"},"#,
                r#""token":"tok_1","swipe_data":"%B4111"}"#
            )
        );
    }

    #[test]
    fn test_update_request_serialize() {
        let request = CustomerUpdateRequest::new("cus_9")
            .with_card(card())
            .with_default_payment_source_id("ps_2");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["id"], "cus_9");
        assert_eq!(value["card"]["number"], "4111111111111111");
        assert_eq!(value["default_payment_source_id"], "ps_2");
        assert!(value.get("ach").is_none());
        assert!(value.get("metadata").is_none());
    }
}

// =============================================================================
// Tokens
// =============================================================================

mod token_types {
    use super::*;

    #[test]
    fn test_token_create_request_serialize() {
        let request = TokenCreateRequest::new(address()).with_card(card());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["address"]["city"], "Provo");
        assert_eq!(value["card"]["cvv"], "123");
        assert!(value.get("ach").is_none());
    }

    #[test]
    fn test_token_deserialize() {
        let json = r#"{"token": "tok_1", "used": "false", "payment_source": {"id": "ps_1", "brand": "visa"}}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.token, "tok_1");
        assert_eq!(token.used, "false");
        assert_eq!(token.payment_source.brand, "visa");
    }
}

// =============================================================================
// Payouts
// =============================================================================

mod payout_types {
    use super::*;

    #[test]
    fn test_payout_request_serialize() {
        let request = PayoutRequest::new(dec!(12.50), "ORDER-1").with_customer_id("cus_9");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 12.5,
                "customer_id": "cus_9",
                "order_number": "ORDER-1",
                "send_merchant_receipt": false,
                "send_customer_receipt": false
            })
        );
    }

    #[test]
    fn test_payout_request_receipts_and_instruments() {
        let request = PayoutRequest::new(dec!(5), "ORDER-2")
            .with_token("tok_1")
            .with_payment_source_id("ps_1")
            .with_address(address())
            .with_metadata(Metadata::new().with("k", "v"))
            .with_receipts(true, false);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], 5.0);
        assert_eq!(value["token"], "tok_1");
        assert_eq!(value["payment_source_id"], "ps_1");
        assert_eq!(value["metadata"][0]["key"], "k");
        assert_eq!(value["send_merchant_receipt"], true);
        assert_eq!(value["send_customer_receipt"], false);
    }

    #[test]
    fn test_payout_deserialize() {
        let json = r#"{
            "id": "p_42",
            "amount": 12.5,
            "authorization_code": "A1",
            "avs_category": "full",
            "avs_response": "Y",
            "cvv_response": "M",
            "status": "settled",
            "metadata": [],
            "payment_source": {"id": "ps_1"}
        }"#;
        let payout: Payout = serde_json::from_str(json).unwrap();
        assert_eq!(payout.id, "p_42");
        assert_eq!(payout.amount, dec!(12.5));
        assert_eq!(payout.status, "settled");
    }

    #[test]
    fn test_payout_integer_amount() {
        let payout: Payout = serde_json::from_str(r#"{"id": "p_1", "amount": 100}"#).unwrap();
        assert_eq!(payout.amount, dec!(100));
    }
}

// =============================================================================
// Transactions
// =============================================================================

mod transaction_types {
    use super::*;

    #[test]
    fn test_transaction_request_defaults() {
        let request = TransactionCreateRequest::new(dec!(1.25), "ORDER-3");
        assert!(request.capture);
        assert_eq!(request.tax, dec!(0));
        assert!(!request.send_merchant_receipt);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 1.25,
                "capture": true,
                "tax": 0.0,
                "order_number": "ORDER-3",
                "send_merchant_receipt": false,
                "send_customer_receipt": false
            })
        );
    }

    #[test]
    fn test_transaction_request_builders() {
        let request = TransactionCreateRequest::new(dec!(20), "ORDER-4")
            .with_ach(Ach::new("1", "2", "3", "WEB", false))
            .with_address(address())
            .with_capture(false)
            .with_tax(dec!(0.75))
            .with_receipts(true, true);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["ach"]["sec_code"], "WEB");
        assert_eq!(value["capture"], false);
        assert_eq!(value["tax"], 0.75);
        assert_eq!(value["send_customer_receipt"], true);
        assert!(value.get("card").is_none());
    }

    #[test]
    fn test_transaction_deserialize() {
        let json = r#"{
            "id": "t_1",
            "xid": "x_1",
            "created": "2024-01-15T10:30:00Z",
            "amount": 20.5,
            "tax": 0.75,
            "surcharge_amount": 0,
            "authorized_amount": 20.5,
            "authorization_code": "OK123",
            "avs_category": "full",
            "avs_response": "Y",
            "cvv_response": "M",
            "balance": 0,
            "status": "captured",
            "settled": true,
            "instrument": "card",
            "metadata": [{"key": "order", "value": "ORDER-4"}],
            "payment_source": {"id": "ps_1"},
            "credits": [{"amount": 5.5, "state": "pending", "settled": false, "surcharge_amount": "0"}]
        }"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.id, "t_1");
        assert_eq!(transaction.amount, dec!(20.5));
        assert_eq!(transaction.tax, dec!(0.75));
        assert_eq!(transaction.balance, dec!(0));
        assert!(transaction.settled);
        assert_eq!(transaction.metadata.get("order"), Some("ORDER-4"));
        assert_eq!(transaction.credits.len(), 1);
        assert_eq!(transaction.credits[0].amount, dec!(5.5));
        assert!(!transaction.credits[0].settled);
    }

    #[test]
    fn test_transaction_null_amounts_read_as_zero() {
        let json = r#"{
            "id": "t_2",
            "amount": 10,
            "surcharge_amount": null,
            "balance": null,
            "settled": null,
            "credits": [{"amount": null, "state": null}]
        }"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.amount, dec!(10));
        assert_eq!(transaction.surcharge_amount, dec!(0));
        assert_eq!(transaction.balance, dec!(0));
        assert!(!transaction.settled);
        assert_eq!(transaction.credits[0].amount, dec!(0));
        assert_eq!(transaction.credits[0].state, "");
    }
}

// =============================================================================
// Fetch-by-id body
// =============================================================================

#[test]
fn test_empty_request_serializes_as_object() {
    assert_eq!(serde_json::to_string(&EmptyRequest {}).unwrap(), "{}");
}
