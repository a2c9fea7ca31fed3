//! Product variation ("combination") types.

use serde::{Deserialize, Serialize};

use super::attribute::Attributes;
use super::common::{Id, OptionValue, WholesalePrice};

/// Writable variation fields, used by `product_variation_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductVariation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_to_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shipping_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wholesale_prices: Vec<WholesalePrice>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// A variation as returned by the combinations endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    #[serde(flatten)]
    pub fields: NewProductVariation,
    pub id: Id,
    #[serde(default)]
    pub combination_number: u32,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub small_thumbnail_url: Option<String>,
    #[serde(default)]
    pub hd_thumbnail_url: Option<String>,
    #[serde(default)]
    pub original_image_url: Option<String>,
}

impl std::ops::Deref for ProductVariation {
    type Target = NewProductVariation;

    fn deref(&self) -> &NewProductVariation {
        &self.fields
    }
}

impl std::ops::DerefMut for ProductVariation {
    fn deref_mut(&mut self) -> &mut NewProductVariation {
        &mut self.fields
    }
}
