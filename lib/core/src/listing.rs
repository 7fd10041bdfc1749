use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::seed;

/// Column holding the listing identifier
pub const ID_FIELD: &str = "id";
/// Column holding the display name
pub const NAME_FIELD: &str = "NAME";
/// Column holding the nightly price, usually with a currency sign
pub const PRICE_FIELD: &str = "price";
pub const THUMBNAIL_FIELD: &str = "thumbnail";
pub const IMAGES_FIELD: &str = "images";

/// One record of the dataset.
///
/// The column set comes from the source file and is not known in advance, so a
/// listing is a JSON object with its original column order. Enriched listings
/// additionally carry `thumbnail` and `images`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing {
    fields: Map<String, Value>,
}

impl Listing {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a raw record from header/value pairs. Later duplicates of a column
    /// name overwrite earlier ones.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { fields }
    }

    /// Attach the derived image fields for a record at `position` in its source.
    ///
    /// Deterministic: the same record at the same position always yields the
    /// same URLs.
    #[must_use]
    pub fn enrich(mut self, position: usize) -> Self {
        let seed = seed::seed_for(&self, position);
        let images = seed::image_urls(seed)
            .into_iter()
            .map(Value::String)
            .collect();
        self.fields.insert(
            THUMBNAIL_FIELD.to_string(),
            Value::String(seed::thumbnail_url(seed)),
        );
        self.fields.insert(IMAGES_FIELD.to_string(), Value::Array(images));
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field value coerced to text. Strings are returned as-is, numbers and
    /// booleans through their display form; null, arrays and objects count as
    /// absent.
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.fields.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    #[inline]
    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.text(ID_FIELD)
    }

    #[inline]
    pub fn name(&self) -> Option<Cow<'_, str>> {
        self.text(NAME_FIELD)
    }

    #[inline]
    pub fn price(&self) -> Option<Cow<'_, str>> {
        self.text(PRICE_FIELD)
    }

    #[inline]
    pub fn thumbnail(&self) -> Option<&str> {
        self.fields.get(THUMBNAIL_FIELD).and_then(Value::as_str)
    }

    pub fn images(&self) -> Vec<&str> {
        self.fields
            .get(IMAGES_FIELD)
            .and_then(Value::as_array)
            .map(|urls| urls.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Column names in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Listing {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
