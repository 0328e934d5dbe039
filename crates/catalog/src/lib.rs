//! Catalog data model for the pricing engine.
//!
//! Plain record types mirroring what the persistence collaborator stores:
//! products, registered costs, raw materials and recipes, plus the
//! immutable [`PricingSnapshot`] bundle the engine computes over. All
//! deterministic domain data, no IO, no storage.

pub mod cost;
pub mod material;
pub mod product;
pub mod recipe;
pub mod snapshot;

pub use cost::{Cost, CostId, CostKind, VehicleParams};
pub use material::{RawMaterial, RawMaterialId};
pub use product::{OutputTax, Product, ProductCategory, ProductId, StoredRates};
pub use recipe::{Recipe, RecipeId, RecipeIngredient};
pub use snapshot::PricingSnapshot;
