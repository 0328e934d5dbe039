use serde::{Deserialize, Serialize};

use precifica_core::RecordId;

use crate::material::RawMaterialId;
use crate::product::ProductId;

/// Recipe identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub RecordId);

impl RecipeId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub raw_material_id: RawMaterialId,
    /// Quantity consumed per batch, kg.
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price_per_kg: f64,
}

/// Catalog record: a manufactured product's bill of materials.
///
/// One-to-one with a manufactured product; ingredient order is the order
/// the operator entered the lines in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub product_id: ProductId,
    /// Units produced per batch (produção da receita).
    #[serde(default)]
    pub batch_yield: f64,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Batch yield used as a divisor: an unset/zero yield divides by 1,
    /// not by 0.
    pub fn effective_yield(&self) -> f64 {
        if self.batch_yield == 0.0 {
            1.0
        } else {
            self.batch_yield
        }
    }
}
