use precifica_catalog::{PricingSnapshot, Recipe};
use precifica_core::pct_of;
use precifica_fiscal::Issuer;

use crate::real_cost::RealCost;

/// Per-unit material cost and recoverable input-tax credit of a
/// manufactured product's recipe.
///
/// Ingredient lines referencing a raw material missing from the snapshot
/// still cost their material (quantity × price) but contribute no credit.
/// A zero batch yield divides by 1, not by 0. When the issuer cannot
/// recover input tax (RMC), the credit is forced to 0.
pub fn recipe_real_cost(recipe: &Recipe, snapshot: &PricingSnapshot, issuer: Issuer) -> RealCost {
    let total_ingredient_cost: f64 = recipe
        .ingredients
        .iter()
        .map(|line| line.quantity * line.price_per_kg)
        .sum();

    let total_input_tax_credit: f64 = recipe
        .ingredients
        .iter()
        .map(|line| {
            let rate = snapshot
                .raw_material(line.raw_material_id)
                .map(|m| m.purchase_icms_rate)
                .unwrap_or(0.0);
            pct_of(line.quantity * line.price_per_kg, rate)
        })
        .sum();

    let batch_yield = recipe.effective_yield();
    let unit_cost = total_ingredient_cost / batch_yield;
    let unit_tax_credit = if issuer.recovers_input_tax() {
        total_input_tax_credit / batch_yield
    } else {
        0.0
    };

    RealCost::new(unit_cost, unit_tax_credit)
}
