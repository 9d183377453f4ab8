use crate::domain::method::{MethodSpend, PaymentMethod};
use crate::domain::ports::MethodStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct MethodAccount {
    discount: Decimal,
    limit: Decimal,
    spent: Decimal,
}

/// A thread-safe in-memory registry of payment methods.
///
/// Uses an insertion-ordered map behind `Arc<RwLock<…>>` so snapshots and
/// reports come back in registration order, which the allocator's
/// tie-breaking depends on. Duplicate ids in the input overwrite earlier
/// entries (last value wins); the first occurrence keeps its position.
#[derive(Default, Clone)]
pub struct InMemoryMethodStore {
    methods: Arc<RwLock<IndexMap<String, MethodAccount>>>,
}

impl InMemoryMethodStore {
    /// Builds the registry from the input method list, with zero spend
    /// everywhere.
    pub fn from_methods(methods: &[PaymentMethod]) -> Self {
        let mut map = IndexMap::with_capacity(methods.len());
        for method in methods {
            map.insert(
                method.id.clone(),
                MethodAccount {
                    discount: method.discount,
                    limit: method.limit,
                    spent: Decimal::ZERO,
                },
            );
        }
        Self {
            methods: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl MethodStore for InMemoryMethodStore {
    async fn snapshot(&self) -> Result<Vec<PaymentMethod>> {
        let methods = self.methods.read().await;
        Ok(methods
            .iter()
            .map(|(id, account)| PaymentMethod {
                id: id.clone(),
                discount: account.discount,
                limit: account.limit,
            })
            .collect())
    }

    async fn debit(&self, id: &str, amount: Decimal) -> Result<()> {
        let mut methods = self.methods.write().await;
        let account = methods
            .get_mut(id)
            .ok_or_else(|| PaymentError::UnknownMethod(id.to_string()))?;
        account.limit -= amount;
        account.spent += amount;
        Ok(())
    }

    async fn spend_report(&self) -> Result<Vec<MethodSpend>> {
        let methods = self.methods.read().await;
        Ok(methods
            .iter()
            .map(|(id, account)| MethodSpend {
                id: id.clone(),
                spent: account.spent,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn method(id: &str, discount: Decimal, limit: Decimal) -> PaymentMethod {
        PaymentMethod {
            id: id.to_string(),
            discount,
            limit,
        }
    }

    #[tokio::test]
    async fn test_snapshot_preserves_registration_order() {
        let store = InMemoryMethodStore::from_methods(&[
            method("PUNKTY", dec!(15), dec!(100)),
            method("mZysk", dec!(10), dec!(180)),
            method("BosBankrut", dec!(5), dec!(200)),
        ]);

        let snapshot = store.snapshot().await.unwrap();
        let ids: Vec<&str> = snapshot.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["PUNKTY", "mZysk", "BosBankrut"]);
    }

    #[tokio::test]
    async fn test_debit_updates_limit_and_spend() {
        let store = InMemoryMethodStore::from_methods(&[method("mZysk", dec!(10), dec!(180))]);

        store.debit("mZysk", dec!(30)).await.unwrap();
        store.debit("mZysk", dec!(12.5)).await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot[0].limit, dec!(137.5));

        let report = store.spend_report().await.unwrap();
        assert_eq!(report[0].spent, dec!(42.5));
        // spent + limit stays equal to the original limit
        assert_eq!(report[0].spent + snapshot[0].limit, dec!(180));
    }

    #[tokio::test]
    async fn test_debit_unknown_method_is_an_error() {
        let store = InMemoryMethodStore::from_methods(&[]);
        let result = store.debit("NieMa", dec!(1)).await;
        assert!(matches!(result, Err(PaymentError::UnknownMethod(id)) if id == "NieMa"));
    }

    #[tokio::test]
    async fn test_duplicate_ids_last_value_wins() {
        let store = InMemoryMethodStore::from_methods(&[
            method("mZysk", dec!(10), dec!(180)),
            method("mZysk", dec!(20), dec!(90)),
        ]);

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].discount, dec!(20));
        assert_eq!(snapshot[0].limit, dec!(90));
    }

    #[tokio::test]
    async fn test_spend_report_covers_untouched_methods() {
        let store = InMemoryMethodStore::from_methods(&[
            method("PUNKTY", dec!(15), dec!(100)),
            method("mZysk", dec!(10), dec!(180)),
        ]);

        store.debit("PUNKTY", dec!(85)).await.unwrap();

        let report = store.spend_report().await.unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report[1].id, "mZysk");
        assert_eq!(report[1].spent, dec!(0));
    }
}
