use serde::{Deserialize, Serialize};

use agrimart_catalog::{Product, ProductId, Variant, VariantLabel};
use agrimart_core::Money;

/// Identity of a cart entry: product plus chosen variant.
///
/// This composite key is the sole mergeability rule. Two picks collapse into
/// one entry exactly when both components match; the same product in another
/// package size stays a separate entry. No fuzzy matching, no price-based
/// merging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemKey {
    pub product_id: ProductId,
    pub variant_label: VariantLabel,
}

impl LineItemKey {
    pub fn new(product_id: ProductId, variant_label: VariantLabel) -> Self {
        Self {
            product_id,
            variant_label,
        }
    }
}

/// Canonical join of the two components, usable as a map/log key.
impl core::fmt::Display for LineItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}::{}", self.product_id, self.variant_label)
    }
}

/// One (product variant, quantity) pair in a cart.
///
/// `unit_price`, `title` and `image_ref` are snapshots taken when the item
/// entered the cart; they are never re-read from the catalog, so a later
/// catalog edit does not reprice lines already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub variant_label: VariantLabel,
    pub unit_price: Money,
    /// Always >= 1 once inside a cart.
    pub quantity: u32,
    pub title: String,
    pub image_ref: String,
}

impl LineItem {
    /// Capture a catalog product/variant pair as a cart line.
    pub fn snapshot(product: &Product, variant: &Variant, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            variant_label: variant.label.clone(),
            unit_price: variant.price,
            quantity,
            title: product.title.clone(),
            image_ref: product.image_ref.clone(),
        }
    }

    pub fn key(&self) -> LineItemKey {
        LineItemKey::new(self.product_id.clone(), self.variant_label.clone())
    }

    /// Whether this line carries the given composite identity.
    pub fn is_for(&self, product_id: &ProductId, variant_label: &VariantLabel) -> bool {
        &self.product_id == product_id && &self.variant_label == variant_label
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
