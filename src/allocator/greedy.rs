use crate::model::{Allocated, Listed};

/// Walks a ranked name-group and takes as much as possible from each offer
/// until `wanted` is reached. Every offer comes back with an explicit
/// allocation; those after the demand is met get 0.
pub fn distribute<T>(wanted: u32, ranked: Vec<Listed<T>>) -> Vec<Allocated<T>> {
    let mut remaining = wanted;

    ranked
        .into_iter()
        .map(|Listed { offer, target }| {
            let allocation = remaining.min(offer.available_quantity);
            remaining -= allocation;
            Allocated {
                offer,
                target,
                allocation,
                group_wanted: wanted,
            }
        })
        .collect()
}
