use serde::{Deserialize, Serialize};

use precifica_core::RecordId;

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product line: manufactured in-house (costed by recipe) or
/// outsourced/resold (costed by purchase price).
///
/// The category deterministically selects the costing path and the
/// pool-absorption rules; a product is never costed both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Manufactured,
    Outsourced,
}

/// The fixed set of output-tax categories applied as percentages of the
/// sale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTax {
    Icms,
    Pis,
    Cofins,
    Ir,
    Cs,
    Ibs,
    Cbs,
}

impl OutputTax {
    /// All taxes, in the order they appear on the pricing page.
    pub const ALL: [OutputTax; 7] = [
        OutputTax::Icms,
        OutputTax::Pis,
        OutputTax::Cofins,
        OutputTax::Ir,
        OutputTax::Cs,
        OutputTax::Ibs,
        OutputTax::Cbs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputTax::Icms => "ICMS",
            OutputTax::Pis => "PIS",
            OutputTax::Cofins => "COFINS",
            OutputTax::Ir => "IR",
            OutputTax::Cs => "CS",
            OutputTax::Ibs => "IBS",
            OutputTax::Cbs => "CBS",
        }
    }
}

/// Per-product stored output-tax rates (%).
///
/// Absent fields deserialize to 0 — the documented coercion default for
/// numeric inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredRates {
    #[serde(default)]
    pub icms: f64,
    #[serde(default)]
    pub pis: f64,
    #[serde(default)]
    pub cofins: f64,
    #[serde(default)]
    pub ir: f64,
    #[serde(default)]
    pub cs: f64,
    #[serde(default)]
    pub ibs: f64,
    #[serde(default)]
    pub cbs: f64,
}

impl StoredRates {
    pub fn get(&self, tax: OutputTax) -> f64 {
        match tax {
            OutputTax::Icms => self.icms,
            OutputTax::Pis => self.pis,
            OutputTax::Cofins => self.cofins,
            OutputTax::Ir => self.ir,
            OutputTax::Cs => self.cs,
            OutputTax::Ibs => self.ibs,
            OutputTax::Cbs => self.cbs,
        }
    }

    pub fn set(&mut self, tax: OutputTax, rate: f64) {
        match tax {
            OutputTax::Icms => self.icms = rate,
            OutputTax::Pis => self.pis = rate,
            OutputTax::Cofins => self.cofins = rate,
            OutputTax::Ir => self.ir = rate,
            OutputTax::Cs => self.cs = rate,
            OutputTax::Ibs => self.ibs = rate,
            OutputTax::Cbs => self.cbs = rate,
        }
    }
}

/// Catalog record: Product.
///
/// Volume fields (`monthly_sales`, `monthly_production`) are edited inline
/// on the allocation page; purchase fields are meaningful for outsourced
/// products only, `monthly_production` for manufactured ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    /// Declared units sold per month.
    #[serde(default)]
    pub monthly_sales: f64,
    /// Declared units produced per month (manufactured only).
    #[serde(default)]
    pub monthly_production: f64,
    /// Purchase price per unit (outsourced only).
    #[serde(default)]
    pub purchase_price: f64,
    /// Recoverable input-tax rate on the purchase, % (outsourced only).
    #[serde(default)]
    pub purchase_icms_rate: f64,
    /// Stored output-tax rates, raw material for the regime resolver.
    #[serde(default)]
    pub rates: StoredRates,
}

impl Product {
    pub fn is_manufactured(&self) -> bool {
        self.category == ProductCategory::Manufactured
    }

    pub fn is_outsourced(&self) -> bool {
        self.category == ProductCategory::Outsourced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precifica_core::RecordId;

    #[test]
    fn absent_numeric_fields_coerce_to_zero() {
        let json = format!(
            r#"{{"id":"{}","name":"Pão de queijo","category":"manufactured"}}"#,
            RecordId::new()
        );
        let product: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product.monthly_sales, 0.0);
        assert_eq!(product.monthly_production, 0.0);
        assert_eq!(product.purchase_price, 0.0);
        assert_eq!(product.rates, StoredRates::default());
    }

    #[test]
    fn stored_rates_get_and_set_cover_every_tax() {
        let mut rates = StoredRates::default();
        for (i, tax) in OutputTax::ALL.iter().enumerate() {
            rates.set(*tax, i as f64 + 1.0);
        }
        for (i, tax) in OutputTax::ALL.iter().enumerate() {
            assert_eq!(rates.get(*tax), i as f64 + 1.0);
        }
    }

    #[test]
    fn category_flags_are_mutually_exclusive() {
        let mut product = Product {
            id: ProductId::new(RecordId::new()),
            name: "Queijo minas".to_string(),
            category: ProductCategory::Manufactured,
            monthly_sales: 0.0,
            monthly_production: 0.0,
            purchase_price: 0.0,
            purchase_icms_rate: 0.0,
            rates: StoredRates::default(),
        };
        assert!(product.is_manufactured());
        assert!(!product.is_outsourced());

        product.category = ProductCategory::Outsourced;
        assert!(product.is_outsourced());
        assert!(!product.is_manufactured());
    }
}
