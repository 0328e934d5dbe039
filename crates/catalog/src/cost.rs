use serde::{Deserialize, Serialize};

use precifica_core::{mean, ratio, RecordId};

/// Cost record identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostId(pub RecordId);

impl CostId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CostId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Kind of a registered recurring cost.
///
/// `Operational` feeds the Operational pool; everything else feeds the
/// General pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostKind {
    Operational,
    Direct,
    Cash,
    Vehicle,
}

/// Usage parameters of a vehicle-type cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleParams {
    /// Fuel economy, km per liter.
    #[serde(default)]
    pub fuel_economy_km_per_liter: f64,
    /// Distance driven per month, km.
    #[serde(default)]
    pub monthly_distance_km: f64,
    /// Fuel price per liter.
    #[serde(default)]
    pub fuel_price_per_liter: f64,
    #[serde(default)]
    pub monthly_insurance: f64,
    /// Annual licensing fee.
    #[serde(default)]
    pub annual_licensing: f64,
    /// Annual maintenance estimate.
    #[serde(default)]
    pub annual_maintenance: f64,
}

impl VehicleParams {
    /// Derived amortized monthly cost of the vehicle.
    ///
    /// A fuel economy of 0 makes the fuel term 0 instead of dividing.
    pub fn monthly_cost(&self) -> f64 {
        let consumption_liters = ratio(self.monthly_distance_km, self.fuel_economy_km_per_liter);
        let fuel = consumption_liters * self.fuel_price_per_liter;
        fuel + self.monthly_insurance + self.annual_licensing + self.annual_maintenance / 12.0
    }
}

/// Catalog record: a registered recurring cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: CostId,
    pub name: String,
    pub kind: CostKind,
    /// Observed values for the last three months (mes 1..3).
    #[serde(default)]
    pub monthly_values: [f64; 3],
    /// Manual override of the derived average (non-vehicle kinds only).
    #[serde(default)]
    pub average_override: Option<f64>,
    /// Usage parameters, meaningful for `CostKind::Vehicle`.
    #[serde(default)]
    pub vehicle: Option<VehicleParams>,
}

impl Cost {
    /// The cost's steady-state monthly burden (valor médio).
    ///
    /// Vehicle costs are always the derived amortized value and ignore any
    /// override; for other kinds the manual override wins, otherwise the
    /// arithmetic mean of the three observed months.
    pub fn average_monthly_value(&self) -> f64 {
        if self.kind == CostKind::Vehicle {
            return self.vehicle.map(|v| v.monthly_cost()).unwrap_or(0.0);
        }
        match self.average_override {
            Some(value) => value,
            None => mean(&self.monthly_values),
        }
    }
}
