use serde::{Deserialize, Serialize};
use thiserror::Error;

use precifica_allocation::{AllocationSet, AllocationSummary};
use precifica_catalog::{PricingSnapshot, ProductId};
use precifica_core::ratio;
use precifica_costing::{real_cost_for, CostingError, CostPools};
use precifica_fiscal::{resolve, FiscalContext};

use crate::solver::{solve, MarkupComponents, PriceQuote};

/// Everything the operator selected for one quote: fiscal context plus
/// the margin/freight/commission triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub fiscal: FiscalContext,
    pub components: MarkupComponents,
}

/// Conditions under which no quote can be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("product {product_id} not found in snapshot")]
    UnknownProduct { product_id: ProductId },

    #[error(transparent)]
    Costing(#[from] CostingError),
}

/// Compute the full cost/price breakdown for one product.
///
/// Runs the whole chain — pool aggregation, allocation, costing, tax
/// resolution, markup inversion — from scratch over the snapshot. The
/// pipeline retains nothing between invocations, so callers can re-run it
/// on every input change; identical snapshots produce identical quotes.
pub fn quote_product(
    snapshot: &PricingSnapshot,
    product_id: ProductId,
    config: &QuoteConfig,
) -> Result<PriceQuote, QuoteError> {
    let product = snapshot
        .product(product_id)
        .ok_or(QuoteError::UnknownProduct { product_id })?;

    let pools = CostPools::aggregate(&snapshot.costs);
    let allocations = AllocationSet::compute(&snapshot.products, &pools);
    // Every snapshot product has an allocation entry by construction.
    let allocation = allocations.get(product_id).copied().unwrap_or_default();

    let real = real_cost_for(snapshot, product, config.fiscal.issuer)?;
    let resolved = resolve(config.fiscal, &product.rates);

    // Absorbed pool amounts are monthly R$; spread them over the units
    // sold each month (0 per unit when no volume is declared).
    let absorbed_operational = ratio(allocation.absorbed_operational, product.monthly_sales);
    let absorbed_general = ratio(allocation.absorbed_general, product.monthly_sales);

    let quote = solve(
        real.real_cost,
        absorbed_operational,
        absorbed_general,
        &config.components,
        &resolved,
    );

    tracing::debug!(
        product = %product.name,
        cost_final = quote.cost_final,
        price = quote.price,
        valid = quote.valid,
        "price quote computed"
    );

    Ok(quote)
}

/// The per-product share view for the allocation page.
pub fn allocation_summary(
    snapshot: &PricingSnapshot,
    product_id: ProductId,
) -> Option<AllocationSummary> {
    let pools = CostPools::aggregate(&snapshot.costs);
    AllocationSet::compute(&snapshot.products, &pools).summary(product_id)
}
