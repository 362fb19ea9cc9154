// Per-group totals for a finished allocation
use crate::model::Allocated;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub wanted: u32,
    pub allocated: u32,
    /// Units that could not be covered by any offer.
    pub shortfall: u32,
    pub offers_used: usize,
    pub cost: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    pub generated_at: DateTime<Utc>,
    pub groups: Vec<GroupSummary>,
    pub total_cost: Decimal,
}

impl AllocationReport {
    /// True when every name-group got its full wanted quantity.
    pub fn is_fully_covered(&self) -> bool {
        self.groups.iter().all(|g| g.shortfall == 0)
    }

    pub fn group(&self, name: &str) -> Option<&GroupSummary> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn total_shortfall(&self) -> u64 {
        self.groups.iter().map(|g| g.shortfall as u64).sum()
    }
}

pub fn summarize<T>(allocated: &[Allocated<T>]) -> AllocationReport {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupSummary> = Vec::new();

    for item in allocated {
        let offer = &item.offer;
        let slot = *index.entry(offer.name.as_str()).or_insert_with(|| {
            groups.push(GroupSummary {
                name: offer.name.clone(),
                wanted: item.group_wanted,
                allocated: 0,
                shortfall: 0,
                offers_used: 0,
                cost: Decimal::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        if item.allocation > 0 {
            group.allocated += item.allocation;
            group.offers_used += 1;
            group.cost = offer
                .price
                .checked_mul(Decimal::from(item.allocation))
                .and_then(|line| group.cost.checked_add(line))
                .unwrap_or_else(|| {
                    warn!("⚠️ Cost of {} overflows, capping at {}", group.name, Decimal::MAX);
                    Decimal::MAX
                });
        }
    }

    for group in &mut groups {
        group.shortfall = group.wanted.saturating_sub(group.allocated);
    }

    let total_cost = groups
        .iter()
        .try_fold(Decimal::ZERO, |total, g| total.checked_add(g.cost))
        .unwrap_or_else(|| {
            warn!("⚠️ Total cost overflows, capping at {}", Decimal::MAX);
            Decimal::MAX
        });

    AllocationReport {
        generated_at: Utc::now(),
        groups,
        total_cost,
    }
}
