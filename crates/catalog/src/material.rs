use serde::{Deserialize, Serialize};

use precifica_core::RecordId;

/// Raw material identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMaterialId(pub RecordId);

impl RawMaterialId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for RawMaterialId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog record: a purchasable raw material (recipe input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: RawMaterialId,
    pub name: String,
    /// Recoverable input-tax rate on purchases of this material, %.
    #[serde(default)]
    pub purchase_icms_rate: f64,
}
