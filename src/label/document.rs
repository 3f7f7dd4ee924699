//! The persisted label record.
//!
//! A label is a flat JSON object. Keys are either tool names, holding an
//! array of shapes in pixel space, or classification field names, holding
//! the answer:
//!
//! ```json
//! {"Car":[[{"x":10,"y":20},{"x":40,"y":60}]],"Pin":[{"x":3,"y":11}],"weather":"rain"}
//! ```
//!
//! A shape is either a single point `{"x":..,"y":..}` or an array of points.
//! Key order is preserved in both directions.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::error::LabelError;
use crate::model::{Geometry, LatLng, PixelShape};

/// Label written when the user intentionally leaves an image blank.
pub const SKIP_LABEL: &str = "Skip";

/// Serialized form of a label with no shapes and no answers.
pub const EMPTY_LABEL: &str = "{}";

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl RawPoint {
    fn to_lat_lng(self) -> LatLng {
        LatLng::new(self.y, self.x)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawShape {
    Sequence(Vec<RawPoint>),
    Point(RawPoint),
}

impl RawShape {
    fn into_geometry(self) -> Geometry {
        match self {
            RawShape::Sequence(points) => {
                Geometry::Sequence(points.into_iter().map(RawPoint::to_lat_lng).collect())
            }
            RawShape::Point(point) => Geometry::Point(point.to_lat_lng()),
        }
    }
}

/// Value under a tool key. Hand-edited labels sometimes hold a bare point
/// instead of a one-element array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Shapes(Vec<RawShape>),
    Single(RawPoint),
}

/// A parsed label record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDocument {
    entries: Map<String, Value>,
}

impl LabelDocument {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse label text.
    ///
    /// Fails if the text is not JSON or the JSON is not an object. Entry
    /// values are not validated until they are read.
    pub fn parse(text: &str) -> Result<Self, LabelError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(LabelError::NotAnObject),
        }
    }

    /// Keys in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Check if the record has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the shapes stored under a tool key, converted to display space.
    ///
    /// A missing key yields no shapes.
    pub fn shapes(&self, key: &str) -> Result<Vec<Geometry>, LabelError> {
        let Some(value) = self.entries.get(key) else {
            return Ok(Vec::new());
        };

        let entry = RawEntry::deserialize(value).map_err(|source| LabelError::InvalidShape {
            key: key.to_string(),
            source,
        })?;

        Ok(match entry {
            RawEntry::Shapes(shapes) => shapes.into_iter().map(RawShape::into_geometry).collect(),
            RawEntry::Single(point) => vec![Geometry::Point(point.to_lat_lng())],
        })
    }

    /// Read the answer stored under a field key. `null` reads as no answer.
    pub fn answer(&self, key: &str) -> Option<Value> {
        self.entries
            .get(key)
            .filter(|value| !value.is_null())
            .cloned()
    }

    /// Append a tool entry. Replaces an existing entry with the same key.
    pub fn insert_shapes(&mut self, key: &str, shapes: &[PixelShape]) {
        self.entries.insert(key.to_string(), json!(shapes));
    }

    /// Append a field answer. Replaces an existing entry with the same key.
    pub fn insert_answer(&mut self, key: &str, answer: Value) {
        self.entries.insert(key.to_string(), answer);
    }

    /// Serialize to the canonical compact label string.
    pub fn to_label_string(&self) -> String {
        Value::Object(self.entries.clone()).to_string()
    }
}
