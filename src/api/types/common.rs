//! Scalar types shared across Ecwid resources.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Entity identifier.
///
/// Ecwid uses zero, negative or `null` ids to mean "none"; all of them are
/// read as `Id(0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub u64);

impl Id {
    /// Whether this id is the "none" value.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id(value)
    }
}

impl From<Id> for u64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer id")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
                Ok(Id(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
                Ok(Id(u64::try_from(v).unwrap_or(0)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Id, E> {
                Ok(Id(0))
            }

            fn visit_none<E: de::Error>(self) -> Result<Id, E> {
                Ok(Id(0))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Date/time string as Ecwid formats it, e.g. `2015-09-20 19:59:43 +0000`.
///
/// Kept verbatim so updates send back exactly what was read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EcwidDateTime(pub String);

/// `strftime` pattern of [`EcwidDateTime`].
pub const ECWID_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

impl EcwidDateTime {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse into a chrono timestamp, `None` when empty or malformed.
    pub fn parse(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.0, ECWID_DATETIME_FORMAT).ok()
    }

    /// Format a timestamp the way Ecwid expects it.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        EcwidDateTime(dt.format(ECWID_DATETIME_FORMAT).to_string())
    }
}

impl From<&str> for EcwidDateTime {
    fn from(value: &str) -> Self {
        EcwidDateTime(value.to_string())
    }
}

/// Price modifier type of product options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModifierType {
    Percent,
    Absolute,
}

/// Option name/value pair identifying a variation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionValue {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// One tier of wholesale pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WholesalePrice {
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

/// Dimensions of a product or package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDimensions {
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Image thumbnail details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}
