use serde::de::{self, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod render_config;

pub use render_config::{Column, DocumentKind, RenderConfig};

/// Top-level grouping of channels, rendered as a `##` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// Nested grouping inside a category, rendered as a `###` section
///
/// Subcategories cannot nest further: a `subcategories` key inside one is a
/// parse error. Other unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawSubcategory")]
pub struct Subcategory {
    pub name: String,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Deserialize)]
struct RawSubcategory {
    name: String,
    #[serde(default)]
    channels: Vec<Channel>,
    #[serde(default)]
    subcategories: Option<IgnoredAny>,
}

impl TryFrom<RawSubcategory> for Subcategory {
    type Error = String;

    fn try_from(raw: RawSubcategory) -> Result<Self, Self::Error> {
        if raw.subcategories.is_some() {
            return Err(format!(
                "subcategory '{}' cannot contain subcategories",
                raw.name
            ));
        }
        Ok(Self {
            name: raw.name,
            channels: raw.channels,
        })
    }
}

/// Text of a single channel field
///
/// Only scalars are accepted. Numbers and booleans keep their YAML spelling;
/// sequences and mappings fail to parse, since they cannot live in one table
/// cell.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
                Ok(FieldValue(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
                Ok(FieldValue(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldValue, E> {
                Ok(FieldValue(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
                Ok(FieldValue(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
                Ok(FieldValue(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldValue, E> {
                Ok(FieldValue(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// One listing entry: a TV channel or a radio station
///
/// Fields are free-form (`name`, `m3u8`, `stream`, `web`, `logo`, `epg_id`,
/// `info`, ...). Which of them appear in a document, and in what order, is
/// decided by the [`RenderConfig`]. A `null` field counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Channel {
    fields: BTreeMap<String, Option<FieldValue>>,
}

impl Channel {
    /// Text of a field, or `None` when the field is absent or null
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name)?.as_ref().map(FieldValue::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name")
    }

    /// Build a channel from `(field, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Some(FieldValue::from(v.into()))))
                .collect(),
        }
    }
}

impl Category {
    /// Channels in this category, including those of its subcategories
    pub fn channel_count(&self) -> usize {
        self.channels.len()
            + self
                .subcategories
                .iter()
                .map(|s| s.channels.len())
                .sum::<usize>()
    }
}
