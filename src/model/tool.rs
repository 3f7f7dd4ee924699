//! Drawing tool definitions.

use serde::{Deserialize, Serialize};

/// Identifier of a configured tool.
pub type ToolId = String;

/// Drawing modality of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Axis-aligned box drawn from two corner clicks
    Rectangle,
    /// Closed polygon
    Polygon,
    /// Single point marker
    Point,
    /// Open polyline
    Line,
}

impl ToolKind {
    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Polygon => "Polygon",
            ToolKind::Point => "Point",
            ToolKind::Line => "Line",
        }
    }
}

/// A configured drawing tool with a name and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique identifier for the tool
    pub id: ToolId,
    /// Display name, also used as the tool's key in labels
    pub name: String,
    /// Drawing modality
    #[serde(rename = "tool")]
    pub kind: ToolKind,
    /// Display color (CSS color string)
    pub color: String,
}

impl Tool {
    /// Create a new tool.
    pub fn new(id: &str, name: &str, kind: ToolKind, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            color: color.to_string(),
        }
    }
}
