//! `precifica-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod num;

pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use num::{mean, pct_of, ratio, share_of};
