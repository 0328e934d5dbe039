use serde::{Deserialize, Serialize};

use precifica_catalog::{Cost, CostKind};

/// Monthly totals of the two cost pools.
///
/// Operational costs are the business's own production overhead; every
/// other kind (direct, cash, vehicle) lands in the General pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostPools {
    pub operational: f64,
    pub general: f64,
}

impl CostPools {
    /// Classify the registered costs and total each pool.
    pub fn aggregate(costs: &[Cost]) -> Self {
        costs.iter().fold(Self::default(), |mut pools, cost| {
            let value = cost.average_monthly_value();
            match cost.kind {
                CostKind::Operational => pools.operational += value,
                CostKind::Direct | CostKind::Cash | CostKind::Vehicle => pools.general += value,
            }
            pools
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precifica_catalog::{CostId, VehicleParams};
    use precifica_core::RecordId;

    fn cost(kind: CostKind, months: [f64; 3]) -> Cost {
        Cost {
            id: CostId::new(RecordId::new()),
            name: "custo".to_string(),
            kind,
            monthly_values: months,
            average_override: None,
            vehicle: None,
        }
    }

    #[test]
    fn empty_cost_set_totals_zero() {
        assert_eq!(CostPools::aggregate(&[]), CostPools::default());
    }

    #[test]
    fn operational_and_general_pools_are_disjoint() {
        let costs = vec![
            cost(CostKind::Operational, [1000.0, 1000.0, 1000.0]),
            cost(CostKind::Direct, [300.0, 300.0, 300.0]),
            cost(CostKind::Cash, [200.0, 200.0, 200.0]),
        ];
        let pools = CostPools::aggregate(&costs);
        assert_eq!(pools.operational, 1000.0);
        assert_eq!(pools.general, 500.0);
    }

    #[test]
    fn vehicle_costs_feed_the_general_pool_with_the_derived_value() {
        let mut vehicle = cost(CostKind::Vehicle, [0.0; 3]);
        vehicle.vehicle = Some(VehicleParams {
            fuel_economy_km_per_liter: 10.0,
            monthly_distance_km: 1000.0,
            fuel_price_per_liter: 5.0,
            monthly_insurance: 200.0,
            annual_licensing: 120.0,
            annual_maintenance: 1200.0,
        });
        let pools = CostPools::aggregate(&[vehicle]);
        assert_eq!(pools.operational, 0.0);
        assert_eq!(pools.general, 920.0);
    }
}
