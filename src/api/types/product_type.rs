//! Product types ("classes"): groups of products sharing the same attributes.

use serde::{Deserialize, Serialize};

use super::attribute::Attributes;
use super::common::Id;

/// A product type.
///
/// `id` is required for updates. When updating, send all existing attributes
/// along with new ones; omitted attributes are removed from the type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    #[serde(default, skip_serializing_if = "Id::is_zero")]
    pub id: Id,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl ProductType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
