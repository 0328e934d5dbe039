use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::material::{RawMaterial, RawMaterialId};
use crate::product::{Product, ProductId};
use crate::recipe::Recipe;

/// Immutable snapshot of the four input collections the engine computes
/// over.
///
/// Supplied read-only by the persistence collaborator. The engine holds no
/// state between invocations: callers re-run the full pipeline on a fresh
/// snapshot whenever any relevant record changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    pub products: Vec<Product>,
    pub costs: Vec<Cost>,
    pub recipes: Vec<Recipe>,
    pub raw_materials: Vec<RawMaterial>,
}

impl PricingSnapshot {
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The recipe owned by a manufactured product, if one was registered.
    pub fn recipe_for(&self, product_id: ProductId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.product_id == product_id)
    }

    pub fn raw_material(&self, id: RawMaterialId) -> Option<&RawMaterial> {
        self.raw_materials.iter().find(|m| m.id == id)
    }
}
