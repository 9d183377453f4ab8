use rust_decimal::Decimal;
use serde::Deserialize;

/// A customer order to be allocated to one or more payment methods.
///
/// Orders are read-only: constructed once from the input file and never
/// mutated. The `id` is only used for diagnostics.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: String,
    /// Original price, before any discount.
    pub value: Decimal,
    /// Payment-method ids this order may use for a promotional discount.
    /// List order matters: it is the tie-breaking order among equal-discount
    /// promoted cards.
    #[serde(default)]
    pub promotions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_deserialization() {
        let json = r#"{"id": "ORDER1", "value": "100.00", "promotions": ["mZysk"]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "ORDER1");
        assert_eq!(order.value, dec!(100.00));
        assert_eq!(order.promotions, vec!["mZysk".to_string()]);
    }

    #[test]
    fn test_order_without_promotions() {
        // The promotions field is optional in the input files
        let json = r#"{"id": "ORDER4", "value": "50.00"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.promotions, Vec::<String>::new());
    }

    #[test]
    fn test_order_numeric_value() {
        let json = r#"{"id": "ORDER1", "value": 100.0}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.value, dec!(100.0));
    }
}
