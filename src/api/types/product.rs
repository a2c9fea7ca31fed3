//! Product types for the Ecwid REST API.

use serde::{Deserialize, Serialize};

use super::attribute::Attributes;
use super::common::{Id, ImageDetails, ModifierType, ProductDimensions, WholesalePrice};
use super::variation::ProductVariation;

/// Kind of a product option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductOptionType {
    Select,
    Radio,
    Checkbox,
    Textfield,
    Textarea,
    Date,
    Files,
}

/// A selectable value of a SELECT, RADIO or CHECKBOX option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptionChoice {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default)]
    pub price_modifier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_modifier_type: Option<ModifierType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProductOptionType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ProductOptionChoice>,
    #[serde(default)]
    pub default_choice: u32,
}

/// How shipping is charged for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingSettingsType {
    GlobalMethods,
    SelectedMethods,
    FlatRate,
    FreeShipping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSettings {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShippingSettingsType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_markup: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_methods: Vec<String>,
}

/// "N random products from a category" part of related products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCategory {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub category_id: Id,
    #[serde(default)]
    pub product_count: u32,
}

/// "You may also like" products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProducts {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_ids: Vec<Id>,
    #[serde(default)]
    pub related_category: RelatedCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInfo {
    #[serde(default)]
    pub default_location_included_tax_rate: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_manual_taxes: Vec<Id>,
}

/// One image of the product media gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_main: Option<bool>,
    #[serde(default, rename = "image160pxUrl", skip_serializing_if = "Option::is_none")]
    pub image_160px_url: Option<String>,
    #[serde(default, rename = "image400pxUrl", skip_serializing_if = "Option::is_none")]
    pub image_400px_url: Option<String>,
    #[serde(default, rename = "image800pxUrl", skip_serializing_if = "Option::is_none")]
    pub image_800px_url: Option<String>,
    #[serde(default, rename = "image1500pxUrl", skip_serializing_if = "Option::is_none")]
    pub image_1500px_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_original_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductMedia {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
}

/// Category membership of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesInfo {
    pub id: Id,
    #[serde(default)]
    pub enabled: bool,
}

/// Writable product fields, used by `product_add` and `product_update`.
///
/// `name` is mandatory when adding a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_to_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shipping_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_class_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_shipping_rate_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_shipping_rate: Option<f64>,
    /// HTML description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_on_frontpage: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<Id>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wholesale_prices: Vec<WholesalePrice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProductOption>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<TaxInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_products: Option<RelatedProducts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<ProductMedia>,
}

impl NewProduct {
    /// Minimal product with a name, SKU and price.
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            sku: Some(sku.into()),
            price: Some(price),
            ..Default::default()
        }
    }
}

/// A product as returned by `product_get` and product searches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    pub fields: NewProduct,
    pub id: Id,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub default_displayed_price: f64,
    #[serde(default)]
    pub default_displayed_price_formatted: String,
    #[serde(default)]
    pub compare_to_price_formatted: String,
    #[serde(default)]
    pub compare_to_price_discount: f64,
    #[serde(default)]
    pub compare_to_price_discount_percent: f64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub create_timestamp: i64,
    #[serde(default)]
    pub update_timestamp: i64,
    #[serde(default)]
    pub default_combination_id: Id,
    #[serde(default)]
    pub is_sample_product: bool,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub original_image: Option<ImageDetails>,
    #[serde(default)]
    pub combinations: Vec<ProductVariation>,
    #[serde(default)]
    pub categories: Vec<CategoriesInfo>,
}

impl std::ops::Deref for Product {
    type Target = NewProduct;

    fn deref(&self) -> &NewProduct {
        &self.fields
    }
}

impl std::ops::DerefMut for Product {
    fn deref_mut(&mut self) -> &mut NewProduct {
        &mut self.fields
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        product.fields
    }
}
