//! Endpoint paths, relative to the environment base URL.
//!
//! Every endpoint is called with `POST`, fetch-by-id included.

/// `POST customers`
pub const CUSTOMERS: &str = "customers";

/// `POST payouts`
pub const PAYOUTS: &str = "payouts";

/// `POST tokens`
pub const TOKENS: &str = "tokens";

/// `POST transactions`
pub const TRANSACTIONS: &str = "transactions";

/// `POST customers?id=<id>`
pub fn customer_update(id: &str) -> String {
    format!("{}?id={}", CUSTOMERS, urlencoding::encode(id))
}

/// `POST payouts/<id>`
pub fn payout(id: &str) -> String {
    format!("{}/{}", PAYOUTS, urlencoding::encode(id))
}

/// `POST transactions/<id>`
pub fn transaction(id: &str) -> String {
    format!("{}/{}", TRANSACTIONS, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_paths() {
        assert_eq!(payout("p_42"), "payouts/p_42");
        assert_eq!(transaction("t-7.x~"), "transactions/t-7.x~");
        assert_eq!(customer_update("cus_9"), "customers?id=cus_9");
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        assert_eq!(payout("a/b"), "payouts/a%2Fb");
        assert_eq!(customer_update("x&id=y"), "customers?id=x%26id%3Dy");
    }
}
