use crate::model::{Condition, Listed, Offer};
use std::cmp::Ordering;

/// Cheaper offers first; at equal price, new before used.
pub fn compare_offers(left: &Offer, right: &Offer) -> Ordering {
    left.price
        .cmp(&right.price)
        .then_with(|| condition_rank(left.condition).cmp(&condition_rank(right.condition)))
}

fn condition_rank(condition: Condition) -> u8 {
    match condition {
        Condition::New => 0,
        Condition::Used => 1,
    }
}

/// Sorts a name-group in place. The sort is stable, so offers that compare
/// equal keep their listing order.
pub fn rank<T>(offers: &mut [Listed<T>]) {
    offers.sort_by(|a, b| compare_offers(&a.offer, &b.offer));
}
