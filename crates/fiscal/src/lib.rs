//! Fiscal policy for the pricing engine.
//!
//! Resolves which output-tax rates apply to a product under a chosen
//! regime, operation locality and issuing entity. Deterministic domain
//! logic only — the resolver is an ordered chain of pure transformation
//! steps over a rate map, never mutating shared state.

pub mod resolver;

pub use resolver::{resolve, FiscalContext, Issuer, Locality, ResolvedRates, TaxRegime};
