// Allocator module: decides how many units to take from each offer.

pub mod greedy;
pub mod ranking;
pub mod summary;

use crate::model::{Allocated, Listed};
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub use summary::{summarize, AllocationReport, GroupSummary};

/// Trait defining the interface for an offer allocator.
pub trait Allocator {
    /// Returns every input offer exactly once, each with an explicit allocation.
    fn allocate<T>(&self, listed: Vec<Listed<T>>) -> Vec<Allocated<T>>;
}

/// Offers sharing a product name, in listing order.
#[derive(Debug)]
pub struct NameGroup<T> {
    pub name: String,
    pub wanted_quantity: u32,
    pub offers: Vec<Listed<T>>,
}

/// Partitions offers by name. Groups come out in order of first appearance
/// and the wanted quantity of a group is taken from its first offer.
pub fn group_by_name<T>(listed: Vec<Listed<T>>) -> Vec<NameGroup<T>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<NameGroup<T>> = Vec::new();

    for item in listed {
        match index.get(&item.offer.name) {
            Some(&slot) => {
                let group = &mut groups[slot];
                if item.offer.wanted_quantity != group.wanted_quantity {
                    warn!(
                        "⚠️ Offer {} of {} wants {} but the group wants {}",
                        item.offer.product_key,
                        group.name,
                        item.offer.wanted_quantity,
                        group.wanted_quantity
                    );
                }
                group.offers.push(item);
            }
            None => {
                index.insert(item.offer.name.clone(), groups.len());
                groups.push(NameGroup {
                    name: item.offer.name.clone(),
                    wanted_quantity: item.offer.wanted_quantity,
                    offers: vec![item],
                });
            }
        }
    }

    groups
}

/// Cheapest-first greedy allocation, new before used on equal price.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    pub fn new() -> Self {
        Self
    }
}

impl Allocator for GreedyAllocator {
    fn allocate<T>(&self, listed: Vec<Listed<T>>) -> Vec<Allocated<T>> {
        let total = listed.len();
        let groups = group_by_name(listed);
        info!("Allocating {} offers across {} products", total, groups.len());

        let mut result = Vec::with_capacity(total);
        for NameGroup {
            name,
            wanted_quantity,
            mut offers,
        } in groups
        {
            ranking::rank(&mut offers);
            let allocated = greedy::distribute(wanted_quantity, offers);

            let filled: u32 = allocated.iter().map(|a| a.allocation).sum();
            if filled < wanted_quantity {
                warn!(
                    "⚠️ Couldn't find enough {}: wanted {}, available {}",
                    name, wanted_quantity, filled
                );
            } else {
                debug!("{}: {} units from {} offers", name, filled, allocated.len());
            }

            result.extend(allocated);
        }

        result
    }
}
