use serde::{Deserialize, Serialize};
use thiserror::Error;

use precifica_catalog::{PricingSnapshot, Product, ProductId};
use precifica_fiscal::Issuer;

use crate::purchase_cost::purchase_real_cost;
use crate::recipe_cost::recipe_real_cost;

/// A product's per-unit cost after recoverable input tax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealCost {
    /// Gross cost per unit before any tax credit.
    pub unit_cost: f64,
    /// Recoverable input-tax credit per unit.
    pub unit_tax_credit: f64,
    /// `unit_cost − unit_tax_credit`.
    pub real_cost: f64,
}

impl RealCost {
    pub fn new(unit_cost: f64, unit_tax_credit: f64) -> Self {
        Self {
            unit_cost,
            unit_tax_credit,
            real_cost: unit_cost - unit_tax_credit,
        }
    }
}

/// Missing-data conditions of the costing step.
///
/// These are explicit "incomplete" results: a manufactured product with no
/// recipe must never silently report a real cost of 0.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CostingError {
    #[error("manufactured product {product_id} has no recipe")]
    MissingRecipe { product_id: ProductId },
}

/// Derive a product's real unit cost, selecting the costing path by
/// category: manufactured products cost through their recipe, outsourced
/// ones through their purchase price.
pub fn real_cost_for(
    snapshot: &PricingSnapshot,
    product: &Product,
    issuer: Issuer,
) -> Result<RealCost, CostingError> {
    if product.is_manufactured() {
        let recipe = snapshot
            .recipe_for(product.id)
            .ok_or(CostingError::MissingRecipe {
                product_id: product.id,
            })?;
        Ok(recipe_real_cost(recipe, snapshot, issuer))
    } else {
        Ok(purchase_real_cost(product, issuer))
    }
}
