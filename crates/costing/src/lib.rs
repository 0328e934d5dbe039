//! Costing for the pricing engine.
//!
//! Classifies registered costs into the Operational and General pools and
//! derives a product's real unit cost — from its recipe for manufactured
//! products, from its purchase price for outsourced ones. Pure
//! computation over a snapshot; no IO, no retained state.

pub mod pools;
pub mod purchase_cost;
pub mod real_cost;
pub mod recipe_cost;

pub use pools::CostPools;
pub use purchase_cost::purchase_real_cost;
pub use real_cost::{real_cost_for, CostingError, RealCost};
pub use recipe_cost::recipe_real_cost;
