//! Category types for the Ecwid REST API.

use serde::{Deserialize, Serialize};

use super::common::{Id, ImageDetails};

/// Writable category fields, used by `category_add` and `category_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parent category, root when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<i32>,
    /// HTML description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_ids: Vec<Id>,
}

impl NewCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// A category as returned by `category_get` and category searches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(flatten)]
    pub fields: NewCategory,
    pub id: Id,
    #[serde(default)]
    pub hd_thumbnail_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub original_image_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub product_count: u32,
    #[serde(default)]
    pub enabled_product_count: u32,
    #[serde(default)]
    pub original_image: Option<ImageDetails>,
}

impl std::ops::Deref for Category {
    type Target = NewCategory;

    fn deref(&self) -> &NewCategory {
        &self.fields
    }
}

impl std::ops::DerefMut for Category {
    fn deref_mut(&mut self) -> &mut NewCategory {
        &mut self.fields
    }
}

impl From<Category> for NewCategory {
    fn from(category: Category) -> Self {
        category.fields
    }
}
