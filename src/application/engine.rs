use crate::domain::allocation::choose_allocation;
use crate::domain::method::MethodSpend;
use crate::domain::order::Order;
use crate::domain::ports::MethodStoreBox;
use crate::error::{PaymentError, Result};

/// The main entry point for order allocation.
///
/// `AllocationEngine` owns the method registry for the duration of a run
/// and processes orders strictly in sequence: each order sees the limits
/// left behind by every order before it. It ensures sequential consistency
/// by awaiting every registry operation before touching the next order.
pub struct AllocationEngine {
    methods: MethodStoreBox,
}

impl AllocationEngine {
    pub fn new(methods: MethodStoreBox) -> Self {
        Self { methods }
    }

    /// Allocates a single order to the most profitable payment strategy
    /// and commits the resulting charges to the registry.
    ///
    /// Returns `PaymentError::UnpayableOrder` when no strategy covers the
    /// order within current limits; the registry is left untouched in that
    /// case and later orders may still be allocated.
    pub async fn process_order(&self, order: &Order) -> Result<()> {
        let snapshot = self.methods.snapshot().await?;
        let Some(allocation) = choose_allocation(order, &snapshot) else {
            return Err(PaymentError::UnpayableOrder(order.id.clone()));
        };

        tracing::debug!(
            order = %order.id,
            discount = %allocation.discount,
            "committing allocation"
        );
        for charge in &allocation.charges {
            self.methods.debit(&charge.method_id, charge.amount).await?;
        }
        Ok(())
    }

    /// Consumes the engine and returns the accumulated spend per method.
    pub async fn into_results(self) -> Result<Vec<MethodSpend>> {
        self.methods.spend_report().await
    }
}
