use crate::domain::method::{POINTS_ID, PaymentMethod};
use crate::domain::order::Order;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Minimum share of the order value that points must cover in a split
/// payment.
const MIN_POINTS_SHARE: Decimal = dec!(0.10);

/// Flat percentage granted by the split-payment tier, independent of the
/// paired card's own rate.
const SPLIT_DISCOUNT_PERCENT: Decimal = dec!(10);

/// A single charge against one payment method.
#[derive(Debug, PartialEq, Clone)]
pub struct Charge {
    pub method_id: String,
    pub amount: Decimal,
}

/// The winning payment strategy for one order: the discount it earns and
/// the charges (at most two: points and/or one card) that realize it.
#[derive(Debug, PartialEq, Clone)]
pub struct Allocation {
    pub discount: Decimal,
    pub charges: Vec<Charge>,
}

impl Allocation {
    fn full_payment(method: &PaymentMethod, value: Decimal, discount: Decimal) -> Self {
        Self {
            discount,
            charges: vec![Charge {
                method_id: method.id.clone(),
                amount: value - discount,
            }],
        }
    }
}

/// Picks the payment strategy with the largest discount for a single order.
///
/// `methods` is a snapshot of the registry with current limits, in
/// registration order. Three candidate families are evaluated in a fixed
/// order: full payment with points, full payment with a card from the
/// order's promotion list, and a points-plus-card split. Comparison is
/// strict (`>`), so among equal discounts the earliest-found candidate is
/// kept; the evaluation order is part of the contract and must not be
/// re-sorted.
///
/// Returns `None` when no strategy covers the order within current limits.
/// The snapshot is not mutated; committing the charges is the caller's job.
pub fn choose_allocation(order: &Order, methods: &[PaymentMethod]) -> Option<Allocation> {
    let value = order.value;
    let mut best: Option<Allocation> = None;

    let points = methods.iter().find(|m| m.is_points());

    // Full payment with loyalty points.
    if let Some(points) = points {
        let discount = value * points.discount / Decimal::ONE_HUNDRED;
        if points.limit >= value - discount {
            consider(&mut best, Allocation::full_payment(points, value, discount));
        }
    }

    // Full payment with one of the cards the order is promoted for.
    // Unknown ids are treated as "no capacity" and skipped silently.
    for promo in &order.promotions {
        let Some(card) = methods.iter().find(|m| &m.id == promo) else {
            continue;
        };
        if card.is_points() {
            continue;
        }
        let discount = value * card.discount / Decimal::ONE_HUNDRED;
        if card.limit >= value - discount {
            consider(&mut best, Allocation::full_payment(card, value, discount));
        }
    }

    // Split payment: points cover at least MIN_POINTS_SHARE of the value,
    // any card covers the rest, for a flat SPLIT_DISCOUNT_PERCENT off.
    // Eligibility does not depend on the order's promotion list.
    if let Some(points) = points {
        let min_points = value * MIN_POINTS_SHARE;
        if points.limit >= min_points {
            for card in methods.iter().filter(|m| !m.is_points()) {
                let discount = value * SPLIT_DISCOUNT_PERCENT / Decimal::ONE_HUNDRED;
                let cost = value - discount;
                // Spend as many points as possible, but never less than the
                // minimum share and never more than the remaining cost.
                let points_used = min_points.max(points.limit.min(cost));
                let card_used = cost - points_used;
                if card_used >= Decimal::ZERO && card.limit >= card_used {
                    let mut charges = Vec::new();
                    if points_used > Decimal::ZERO {
                        charges.push(Charge {
                            method_id: points.id.clone(),
                            amount: points_used,
                        });
                    }
                    if card_used > Decimal::ZERO {
                        charges.push(Charge {
                            method_id: card.id.clone(),
                            amount: card_used,
                        });
                    }
                    consider(&mut best, Allocation { discount, charges });
                }
            }
        }
    }

    best
}

/// Strict comparison: an equal-discount candidate never displaces the
/// running best.
fn consider(best: &mut Option<Allocation>, candidate: Allocation) {
    if best.as_ref().is_none_or(|b| candidate.discount > b.discount) {
        *best = Some(candidate);
    }
}
