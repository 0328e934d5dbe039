use serde::{Deserialize, Serialize};

use precifica_catalog::{OutputTax, StoredRates};

/// Fiscal regime governing which tax rules apply to a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    SimplesNacional,
    LucroPresumido,
    SemNfe,
}

impl TaxRegime {
    pub fn badge(&self) -> &'static str {
        match self {
            TaxRegime::SimplesNacional => "Simples Nacional",
            TaxRegime::LucroPresumido => "Lucro Presumido",
            TaxRegime::SemNfe => "Sem NFe",
        }
    }
}

/// Whether the operation stays inside the issuing entity's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    InState,
    OutOfState,
}

/// The legal entity issuing the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Issuer {
    Romica,
    Rmc,
}

impl Issuer {
    /// RMC operates under the simplified regime and cannot recover input
    /// tax on purchases.
    pub fn recovers_input_tax(&self) -> bool {
        *self == Issuer::Romica
    }

    pub fn name(&self) -> &'static str {
        match self {
            Issuer::Romica => "ROMICA",
            Issuer::Rmc => "RMC",
        }
    }
}

/// The full fiscal selection made by the operator for one quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalContext {
    pub regime: TaxRegime,
    pub locality: Locality,
    pub issuer: Issuer,
}

/// Output-tax rates after resolution, plus the UI-facing flags the
/// resolution produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRates {
    pub rates: StoredRates,
    /// Out-of-state operations reset every rate to 0 and require the
    /// operator to type them in.
    pub manual_entry: bool,
    /// Set when the issuing entity forces the regime selector (RMC locks
    /// it to Simples Nacional).
    pub locked_regime: Option<TaxRegime>,
}

impl ResolvedRates {
    /// Sum of every resolved rate, the tax share of the markup equation.
    pub fn total_pct(&self) -> f64 {
        OutputTax::ALL.iter().map(|t| self.rates.get(*t)).sum()
    }

    /// Whether the pricing page shows this tax to the operator: non-zero
    /// resolved rate, or manual-entry mode (which shows all of them).
    pub fn is_visible(&self, tax: OutputTax) -> bool {
        self.manual_entry || self.rates.get(tax) != 0.0
    }
}

/// One step of the resolution chain. Later steps fully override earlier
/// ones; precedence is the array order in [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Regime(TaxRegime),
    Locality(Locality),
    Issuer(Issuer),
}

impl Step {
    fn apply(self, acc: ResolvedRates, stored: &StoredRates) -> ResolvedRates {
        match self {
            Step::Regime(TaxRegime::SemNfe) => ResolvedRates {
                rates: StoredRates::default(),
                ..acc
            },
            Step::Regime(TaxRegime::SimplesNacional) => {
                let mut rates = positive_rates(stored);
                rates.icms = 18.0;
                ResolvedRates { rates, ..acc }
            }
            Step::Regime(TaxRegime::LucroPresumido) => ResolvedRates {
                rates: positive_rates(stored),
                ..acc
            },
            Step::Locality(Locality::InState) => acc,
            Step::Locality(Locality::OutOfState) => ResolvedRates {
                rates: StoredRates::default(),
                manual_entry: true,
                ..acc
            },
            Step::Issuer(Issuer::Romica) => acc,
            Step::Issuer(Issuer::Rmc) => {
                let mut rates = StoredRates::default();
                rates.icms = 4.0;
                ResolvedRates {
                    rates,
                    // RMC's overrides are unconditional; they replace the
                    // out-of-state manual mode too.
                    manual_entry: false,
                    locked_regime: Some(TaxRegime::SimplesNacional),
                }
            }
        }
    }
}

/// Stored rate per tax if > 0, else 0.
fn positive_rates(stored: &StoredRates) -> StoredRates {
    let mut rates = StoredRates::default();
    for tax in OutputTax::ALL {
        let r = stored.get(tax);
        if r > 0.0 {
            rates.set(tax, r);
        }
    }
    rates
}

/// Resolve the output-tax rates for one product under a fiscal context.
///
/// Precedence: regime, then locality, then issuing entity —
/// each step sees the accumulated result and may replace it entirely.
pub fn resolve(ctx: FiscalContext, stored: &StoredRates) -> ResolvedRates {
    let initial = ResolvedRates {
        rates: StoredRates::default(),
        manual_entry: false,
        locked_regime: None,
    };
    [
        Step::Regime(ctx.regime),
        Step::Locality(ctx.locality),
        Step::Issuer(ctx.issuer),
    ]
    .into_iter()
    .fold(initial, |acc, step| step.apply(acc, stored))
}
