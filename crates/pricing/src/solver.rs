use serde::{Deserialize, Serialize};

use precifica_catalog::OutputTax;
use precifica_core::pct_of;
use precifica_fiscal::ResolvedRates;

/// A markup component specified either as a fixed R$ value or as a
/// percentage of the final price.
///
/// Fixed values land in the cost base (Custo Final); percentages join the
/// tax rates in the inverse markup equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Fixed(f64),
    Percent(f64),
}

impl Component {
    pub fn fixed_part(&self) -> f64 {
        match self {
            Component::Fixed(v) => *v,
            Component::Percent(_) => 0.0,
        }
    }

    pub fn percent_part(&self) -> f64 {
        match self {
            Component::Fixed(_) => 0.0,
            Component::Percent(p) => *p,
        }
    }

    /// The component's R$ value in the breakdown: fixed values pass
    /// through, percentages are back-computed from the solved price.
    pub fn value_at(&self, price: f64) -> f64 {
        match self {
            Component::Fixed(v) => *v,
            Component::Percent(p) => pct_of(price, *p),
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Component::Fixed(0.0)
    }
}

/// The margin/freight/commission triple of one quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkupComponents {
    pub margin: Component,
    pub freight: Component,
    pub commission: Component,
}

impl MarkupComponents {
    fn fixed_sum(&self) -> f64 {
        self.margin.fixed_part() + self.freight.fixed_part() + self.commission.fixed_part()
    }

    fn percent_sum(&self) -> f64 {
        self.margin.percent_part() + self.freight.percent_part() + self.commission.percent_part()
    }
}

/// One resolved output tax in the price breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComponent {
    pub name: String,
    pub pct: f64,
    pub value: f64,
}

/// Cost/price breakdown for one product.
///
/// `valid` is false when the percentage components reach 100% — the
/// markup equation has no finite positive solution there, and `price`
/// falls back to `cost_final` so the caller never sees a negative or
/// infinite value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub real_cost: f64,
    /// Absorbed Operational cost, R$ per unit sold.
    pub absorbed_operational: f64,
    /// Absorbed General cost, R$ per unit sold.
    pub absorbed_general: f64,
    /// Fixed-value cost base (Custo Final).
    pub cost_final: f64,
    /// Solved sale price.
    pub price: f64,
    pub tax_components: Vec<TaxComponent>,
    pub margin_value: f64,
    pub freight_value: f64,
    pub commission_value: f64,
    pub valid: bool,
    /// Operator-entered display price, if any. The solved `price` keeps
    /// driving the breakdown proportions; this substitution is for
    /// display and persistence only.
    pub manual_price: Option<f64>,
}

impl PriceQuote {
    /// The price the caller should show/persist: the manual override when
    /// present, the solved price otherwise.
    pub fn display_price(&self) -> f64 {
        self.manual_price.unwrap_or(self.price)
    }

    pub fn with_manual_price(mut self, price: f64) -> Self {
        self.manual_price = Some(price);
        self
    }
}

/// Solve the inverse markup equation for one product.
///
/// Step 1 builds the fixed-value cost base; step 2 inverts the markup
/// (`price = cost_final / (1 − total_pct/100)` while `total_pct < 100`);
/// step 3 back-computes every percentage component's R$ value from the
/// solved price.
pub fn solve(
    real_cost: f64,
    absorbed_operational: f64,
    absorbed_general: f64,
    components: &MarkupComponents,
    rates: &ResolvedRates,
) -> PriceQuote {
    let cost_final =
        real_cost + absorbed_operational + absorbed_general + components.fixed_sum();

    let total_pct = rates.total_pct() + components.percent_sum();
    let valid = total_pct < 100.0;
    let price = if valid {
        cost_final / (1.0 - total_pct / 100.0)
    } else {
        cost_final
    };

    let tax_components = OutputTax::ALL
        .iter()
        .filter(|tax| rates.is_visible(**tax))
        .map(|tax| {
            let pct = rates.rates.get(*tax);
            TaxComponent {
                name: tax.name().to_string(),
                pct,
                value: pct_of(price, pct),
            }
        })
        .collect();

    PriceQuote {
        real_cost,
        absorbed_operational,
        absorbed_general,
        cost_final,
        price,
        tax_components,
        margin_value: components.margin.value_at(price),
        freight_value: components.freight.value_at(price),
        commission_value: components.commission.value_at(price),
        valid,
        manual_price: None,
    }
}
