use super::method::{MethodSpend, PaymentMethod};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Storage port for the payment-method registry.
///
/// The registry is built once per run and exclusively mutated by the
/// allocation engine; `debit` trusts the caller to have checked the amount
/// against the current limit.
#[async_trait]
pub trait MethodStore: Send + Sync {
    /// Current state of every method, in registration order.
    async fn snapshot(&self) -> Result<Vec<PaymentMethod>>;
    /// Decreases the method's remaining limit and increases its spend.
    async fn debit(&self, id: &str, amount: Decimal) -> Result<()>;
    /// Accumulated spend per method, in registration order, zeros included.
    async fn spend_report(&self) -> Result<Vec<MethodSpend>>;
}

pub type MethodStoreBox = Box<dyn MethodStore>;
pub type MethodStoreFactory = Box<dyn Fn() -> MethodStoreBox + Send>;
