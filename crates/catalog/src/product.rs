use serde::{Deserialize, Serialize};

use agrimart_core::Money;

/// Identifier of a catalog product.
///
/// Owned by the external catalog and treated as opaque here; the backing
/// store uses document id strings, not UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Package-size descriptor of a variant (`"5 kg"`, `"250ml"`).
///
/// Free-form text owned by the catalog. The empty string is permitted and is
/// a distinct label, not an alias of [`VariantLabel::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantLabel(String);

impl VariantLabel {
    /// Label of the synthesized variant of a product without size options.
    pub const DEFAULT: &'static str = "default";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for VariantLabel {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl core::fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One selectable package size with its own price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub label: VariantLabel,
    pub price: Money,
}

/// Catalog entry as supplied to the cart at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Opaque pointer into the external asset host.
    pub image_ref: String,
    /// Base display price, applied when no size variants exist.
    pub price: Money,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Exact-label variant lookup. No fuzzy matching: `"5 kg"` and `"5kg"`
    /// are different labels.
    pub fn variant(&self, label: &VariantLabel) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.label == label)
    }

    /// The variant selected when the shopper has not picked a size.
    ///
    /// First listed variant if any; otherwise a synthesized `default` variant
    /// at the base price.
    pub fn default_variant(&self) -> Variant {
        self.variants.first().cloned().unwrap_or_else(|| Variant {
            label: VariantLabel::default(),
            price: self.price,
        })
    }
}
