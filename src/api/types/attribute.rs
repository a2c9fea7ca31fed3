//! Product attributes (key/value pairs attached to products and product types).

use serde::{Deserialize, Serialize};

use super::common::Id;

/// A single attribute.
///
/// Which fields are meaningful depends on the call: product writes use
/// `id`/`alias`/`value`, product reads add `name`/`type`/`show`, and product
/// types carry no `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// Required when updating an existing attribute
    #[serde(default, skip_serializing_if = "Id::is_zero")]
    pub id: Id,
    /// Alias of a system attribute such as `UPC` or `BRAND`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// One of CUSTOM, UPC, BRAND, GENDER, AGE_GROUP, COLOR, SIZE,
    /// PRICE_PER_UNIT, UNITS_IN_PRODUCT
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// One of NOTSHOW, DESCR, PRICE
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub show: String,
}

impl Attribute {
    /// Attribute with just a name and value.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// Ordered list of attributes, serialized as a plain JSON array.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    /// First attribute with the given name.
    pub fn get_by_name(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.0.iter_mut().find(|a| a.name == name)
    }

    /// First attribute with the given id.
    pub fn get_by_id(&self, id: Id) -> Option<&Attribute> {
        self.0.iter().find(|a| a.id == id)
    }

    pub fn get_by_id_mut(&mut self, id: Id) -> Option<&mut Attribute> {
        self.0.iter_mut().find(|a| a.id == id)
    }

    /// Append an attribute and return a handle to the stored copy.
    pub fn append(&mut self, attribute: Attribute) -> &mut Attribute {
        self.0.push(attribute);
        let last = self.0.len() - 1;
        &mut self.0[last]
    }

    /// Remove the first attribute with the given name.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Attribute> {
        let pos = self.0.iter().position(|a| a.name == name)?;
        Some(self.0.remove(pos))
    }

    /// Remove the first attribute with the given id.
    pub fn remove_by_id(&mut self, id: Id) -> Option<Attribute> {
        let pos = self.0.iter().position(|a| a.id == id)?;
        Some(self.0.remove(pos))
    }

    pub fn into_vec(self) -> Vec<Attribute> {
        self.0
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut visited = vec![false; other.0.len()];
        self.0.iter().all(|a| {
            let found = other
                .0
                .iter()
                .enumerate()
                .find(|(j, b)| !visited[*j] && *b == a)
                .map(|(j, _)| j);
            match found {
                Some(j) => {
                    visited[j] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self(attributes)
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Attributes {
    type Item = Attribute;
    type IntoIter = std::vec::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
