//! Annotation data structures and the two coordinate spaces they live in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tool::{Tool, ToolId, ToolKind};

/// Unique identifier for an annotation.
pub type AnnotationId = Uuid;

/// A coordinate in display space (the map surface the shapes are drawn on).
///
/// The map surface reports latitude/longitude-like pairs with many fractional
/// digits; `lat` runs along the image rows and `lng` along the columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to integer pixel coordinates (`x = lng`, `y = lat`).
    pub fn to_pixel(self) -> PixelPoint {
        PixelPoint {
            x: round_half_up(self.lng),
            y: round_half_up(self.lat),
        }
    }
}

/// Round to the nearest integer, halves going toward positive infinity.
///
/// Matches the rounding used by the web labeling frontend so labels written
/// by either side serialize to the same bytes.
/// `value + 0.5` is not used because the addition itself can round, e.g.
/// `0.49999999999999994 + 0.5 == 1.0`.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// A coordinate in image pixel space, as stored in labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Shape of an annotation in display space.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Single point marker.
    Point(LatLng),
    /// Ordered vertices (rectangle corners, polygon or line vertices).
    Sequence(Vec<LatLng>),
}

impl Geometry {
    /// Check whether this geometry is a sequence of points.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Geometry::Sequence(_))
    }

    /// Convert to pixel space, keeping the point/sequence distinction.
    pub fn to_pixels(&self) -> PixelShape {
        match self {
            Geometry::Point(p) => PixelShape::Point(p.to_pixel()),
            Geometry::Sequence(points) => {
                PixelShape::Sequence(points.iter().map(|p| p.to_pixel()).collect())
            }
        }
    }
}

/// Shape of an annotation in pixel space, as written to a label.
///
/// Serializes untagged: a point is `{"x":..,"y":..}` and a sequence is an
/// array of those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PixelShape {
    Point(PixelPoint),
    Sequence(Vec<PixelPoint>),
}

/// A drawn annotation tagged with the tool that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Unique identifier.
    pub id: AnnotationId,
    /// The shape geometry.
    pub geometry: Geometry,
    /// Display color, copied from the tool.
    pub color: String,
    /// Whether the shape is currently in edit mode on the map.
    pub editing: bool,
    /// Drawing modality of the tool that created this annotation.
    pub tool_kind: ToolKind,
    /// ID of the tool that created this annotation.
    pub tool_id: ToolId,
}

impl Annotation {
    /// Create a new, non-editing annotation for `tool` with a fresh ID.
    pub fn new(tool: &Tool, geometry: Geometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            color: tool.color.clone(),
            editing: false,
            tool_kind: tool.kind,
            tool_id: tool.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel_rounds_to_nearest() {
        assert_eq!(LatLng::new(10.6, 3.2).to_pixel(), PixelPoint::new(3, 11));
        assert_eq!(LatLng::new(0.4999, 7.5).to_pixel(), PixelPoint::new(8, 0));
    }

    #[test]
    fn test_to_pixel_values_just_below_half() {
        assert_eq!(
            LatLng::new(0.49999999999999994, -0.49999999999999994).to_pixel(),
            PixelPoint::new(0, 0)
        );
        assert_eq!(
            LatLng::new(4503599627370497.0, 0.0).to_pixel(),
            PixelPoint::new(0, 4503599627370497)
        );
    }

    #[test]
    fn test_to_pixel_negative_halves_round_up() {
        assert_eq!(LatLng::new(-2.5, -0.5).to_pixel(), PixelPoint::new(0, -2));
        assert_eq!(LatLng::new(-2.6, -1.4).to_pixel(), PixelPoint::new(-1, -3));
    }

    #[test]
    fn test_geometry_keeps_shape_in_pixel_space() {
        let point = Geometry::Point(LatLng::new(1.0, 2.0));
        assert!(!point.is_sequence());
        assert_eq!(point.to_pixels(), PixelShape::Point(PixelPoint::new(2, 1)));

        let seq = Geometry::Sequence(vec![LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0)]);
        assert!(seq.is_sequence());
        assert_eq!(
            seq.to_pixels(),
            PixelShape::Sequence(vec![PixelPoint::new(2, 1), PixelPoint::new(4, 3)])
        );
    }

    #[test]
    fn test_pixel_shape_serializes_untagged() {
        let point = PixelShape::Point(PixelPoint::new(3, 11));
        assert_eq!(serde_json::to_string(&point).unwrap(), r#"{"x":3,"y":11}"#);

        let seq = PixelShape::Sequence(vec![PixelPoint::new(0, 0), PixelPoint::new(5, 6)]);
        assert_eq!(
            serde_json::to_string(&seq).unwrap(),
            r#"[{"x":0,"y":0},{"x":5,"y":6}]"#
        );
    }

    #[test]
    fn test_new_annotation_copies_tool() {
        let tool = Tool::new("t1", "Car", ToolKind::Polygon, "#ff0000");
        let a = Annotation::new(&tool, Geometry::Sequence(Vec::new()));
        let b = Annotation::new(&tool, Geometry::Sequence(Vec::new()));

        assert_eq!(a.tool_id, "t1");
        assert_eq!(a.tool_kind, ToolKind::Polygon);
        assert_eq!(a.color, "#ff0000");
        assert!(!a.editing);
        assert_ne!(a.id, b.id);
    }
}
