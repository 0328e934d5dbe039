//! Proportional cost allocation (rateio) for the pricing engine.
//!
//! Distributes the Operational and General pool totals across the product
//! set by volume shares, with the cross-subsidy rule that shifts the
//! Operational cost nominally attributable to outsourced sales onto the
//! manufactured product line.

pub mod engine;

pub use engine::{Allocation, AllocationSet, AllocationSummary};
