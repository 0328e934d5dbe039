//! Price formation for the pricing engine.
//!
//! Combines real unit cost, absorbed allocations, fixed adjustments and
//! the resolved tax/margin/freight/commission percentages into a final
//! sale price via an inverse markup computation, plus the full pipeline
//! callers re-run on every relevant input change.

pub mod quote;
pub mod solver;
pub mod table;

pub use quote::{allocation_summary, quote_product, QuoteConfig, QuoteError};
pub use solver::{solve, Component, MarkupComponents, PriceQuote, TaxComponent};
pub use table::{price_table_entry, PriceTableEntry};
