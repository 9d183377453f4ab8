use rust_decimal::Decimal;
use serde::Deserialize;

/// Reserved identifier of the loyalty-points account.
pub const POINTS_ID: &str = "PUNKTY";

/// A payment method: the loyalty-points account or a promotional card.
///
/// `limit` is the remaining spendable amount. In the input file it is the
/// original limit; in a registry snapshot it reflects all debits committed
/// so far.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentMethod {
    pub id: String,
    /// Percentage (0-100) applied when this method pays an order in full.
    pub discount: Decimal,
    pub limit: Decimal,
}

impl PaymentMethod {
    pub fn is_points(&self) -> bool {
        self.id == POINTS_ID
    }
}

/// Accumulated spend for a single payment method, one row of the final
/// report. Methods that received no spend are reported with zero.
#[derive(Debug, PartialEq, Clone)]
pub struct MethodSpend {
    pub id: String,
    pub spent: Decimal,
}
