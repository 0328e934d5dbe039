use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use precifica_catalog::{Product, ProductId};
use precifica_core::{pct_of, ratio, share_of};
use precifica_costing::CostPools;

/// One product's allocation result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Share of the General pool, % of total sales volume.
    pub share_general: f64,
    /// Share of the Operational pool, % of manufactured production volume.
    /// `None` for outsourced products — they never touch that pool.
    pub share_operational: Option<f64>,
    /// Absorbed Operational cost, R$ per month.
    pub absorbed_operational: f64,
    /// Absorbed General cost plus any redistributed Operational leftover,
    /// R$ per month.
    pub absorbed_general: f64,
}

/// The caller-facing share view for the allocation page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub share_general: f64,
    pub share_operational: Option<f64>,
}

/// Allocation results for a whole snapshot, keyed by product.
///
/// A `BTreeMap` keeps iteration order deterministic, so repeated runs over
/// an unchanged snapshot are bit-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationSet {
    entries: BTreeMap<ProductId, Allocation>,
}

impl AllocationSet {
    /// Distribute the pool totals across the product set.
    ///
    /// General-pool shares are sales-volume based over all products;
    /// Operational-pool shares are production-volume based over
    /// manufactured products only. The Operational fraction nominally
    /// attributable to outsourced sales (`leftover`) is redistributed onto
    /// manufactured products in proportion to their sales shares. Every
    /// zero denominator yields a 0 term, never an error.
    pub fn compute(products: &[Product], pools: &CostPools) -> Self {
        let total_sales: f64 = products.iter().map(|p| p.monthly_sales).sum();
        let total_production: f64 = products
            .iter()
            .filter(|p| p.is_manufactured())
            .map(|p| p.monthly_production)
            .sum();

        let outsourced_share_sum: f64 = products
            .iter()
            .filter(|p| p.is_outsourced())
            .map(|p| share_of(p.monthly_sales, total_sales))
            .sum();
        let manufactured_share_sum: f64 = products
            .iter()
            .filter(|p| p.is_manufactured())
            .map(|p| share_of(p.monthly_sales, total_sales))
            .sum();

        // Operational cost "paid for" by outsourced sales shares, pushed
        // onto the manufactured line instead.
        let leftover = pct_of(pools.operational, outsourced_share_sum);

        let entries = products
            .iter()
            .map(|p| {
                let share_general = share_of(p.monthly_sales, total_sales);
                let allocation = if p.is_manufactured() {
                    let share_operational = share_of(p.monthly_production, total_production);
                    let redistributed =
                        leftover * ratio(share_general, manufactured_share_sum);
                    Allocation {
                        share_general,
                        share_operational: Some(share_operational),
                        absorbed_operational: pct_of(pools.operational, share_operational),
                        absorbed_general: pct_of(pools.general, share_general) + redistributed,
                    }
                } else {
                    Allocation {
                        share_general,
                        share_operational: None,
                        absorbed_operational: 0.0,
                        absorbed_general: pct_of(pools.general, share_general),
                    }
                };
                (p.id, allocation)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, id: ProductId) -> Option<&Allocation> {
        self.entries.get(&id)
    }

    pub fn summary(&self, id: ProductId) -> Option<AllocationSummary> {
        self.entries.get(&id).map(|a| AllocationSummary {
            share_general: a.share_general,
            share_operational: a.share_operational,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &Allocation)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
