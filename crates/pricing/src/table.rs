use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use precifica_catalog::Product;
use precifica_fiscal::resolve;

use crate::quote::QuoteConfig;
use crate::solver::PriceQuote;

/// The record persisted when the operator confirms a quote.
///
/// Built by the engine, written by the caller through its own interface,
/// and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTableEntry {
    /// Product name, or the friendly alias the operator typed.
    pub product_name: String,
    /// Human-readable regime label, honoring an issuer-locked regime.
    pub regime_badge: String,
    /// Which pricing table variant the entry belongs to.
    pub table_variant: String,
    /// Issuing entity label.
    pub issuer: String,
    pub final_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Build the persistable entry for a confirmed quote.
///
/// The price recorded is the quote's display price, so an operator's
/// manual override is what lands in the table. The badge reflects the
/// regime actually in force: RMC locks it to Simples Nacional no matter
/// what the selector said.
pub fn price_table_entry(
    product: &Product,
    quote: &PriceQuote,
    config: &QuoteConfig,
    table_variant: impl Into<String>,
    alias: Option<String>,
    created_at: DateTime<Utc>,
) -> PriceTableEntry {
    let resolved = resolve(config.fiscal, &product.rates);
    let regime = resolved.locked_regime.unwrap_or(config.fiscal.regime);

    PriceTableEntry {
        product_name: alias.unwrap_or_else(|| product.name.clone()),
        regime_badge: regime.badge().to_string(),
        table_variant: table_variant.into(),
        issuer: config.fiscal.issuer.name().to_string(),
        final_price: quote.display_price(),
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve, MarkupComponents};
    use precifica_catalog::{ProductCategory, ProductId, StoredRates};
    use precifica_core::RecordId;
    use precifica_fiscal::{FiscalContext, Issuer, Locality, ResolvedRates, TaxRegime};

    fn product() -> Product {
        Product {
            id: ProductId::new(RecordId::new()),
            name: "Queijo minas".to_string(),
            category: ProductCategory::Outsourced,
            monthly_sales: 10.0,
            monthly_production: 0.0,
            purchase_price: 20.0,
            purchase_icms_rate: 0.0,
            rates: StoredRates::default(),
        }
    }

    fn quote() -> PriceQuote {
        let rates = ResolvedRates {
            rates: StoredRates::default(),
            manual_entry: false,
            locked_regime: None,
        };
        solve(20.0, 0.0, 0.0, &MarkupComponents::default(), &rates)
    }

    fn config(regime: TaxRegime, issuer: Issuer) -> QuoteConfig {
        QuoteConfig {
            fiscal: FiscalContext {
                regime,
                locality: Locality::InState,
                issuer,
            },
            components: MarkupComponents::default(),
        }
    }

    #[test]
    fn entry_carries_the_display_price_and_labels() {
        let p = product();
        let q = quote().with_manual_price(25.0);
        let entry = price_table_entry(
            &p,
            &q,
            &config(TaxRegime::LucroPresumido, Issuer::Romica),
            "Atacado",
            None,
            Utc::now(),
        );
        assert_eq!(entry.product_name, "Queijo minas");
        assert_eq!(entry.regime_badge, "Lucro Presumido");
        assert_eq!(entry.table_variant, "Atacado");
        assert_eq!(entry.issuer, "ROMICA");
        assert_eq!(entry.final_price, 25.0);
    }

    #[test]
    fn alias_replaces_the_product_name() {
        let entry = price_table_entry(
            &product(),
            &quote(),
            &config(TaxRegime::SemNfe, Issuer::Romica),
            "Varejo",
            Some("Queijo 500g".to_string()),
            Utc::now(),
        );
        assert_eq!(entry.product_name, "Queijo 500g");
        assert_eq!(entry.regime_badge, "Sem NFe");
    }

    #[test]
    fn rmc_badge_is_the_locked_regime() {
        let entry = price_table_entry(
            &product(),
            &quote(),
            &config(TaxRegime::LucroPresumido, Issuer::Rmc),
            "Varejo",
            None,
            Utc::now(),
        );
        assert_eq!(entry.regime_badge, "Simples Nacional");
        assert_eq!(entry.issuer, "RMC");
    }
}
