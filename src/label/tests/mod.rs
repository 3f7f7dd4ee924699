//! Unit tests for the label codec.
//!
//! These tests verify decoding of persisted labels, encoding of labeling
//! state, and that the two directions agree.


use crate::model::{ClassificationField, FieldKind, Tool, ToolKind};
use crate::state::AppState;

/// Create a state with one tool of each kind and two classification fields.
fn create_test_state() -> AppState {
    AppState::new(
        vec![
            Tool::new("tool-car", "Car", ToolKind::Rectangle, "#ff0000"),
            Tool::new("tool-tree", "Tree", ToolKind::Polygon, "#00ff00"),
            Tool::new("tool-pin", "Pin", ToolKind::Point, "#0000ff"),
            Tool::new("tool-road", "Road", ToolKind::Line, "#ffff00"),
        ],
        vec![
            ClassificationField::new("weather", "Weather?", FieldKind::Radio)
                .with_option("sunny", "Sunny")
                .with_option("rain", "Rain"),
            ClassificationField::new("notes", "Notes", FieldKind::Text),
        ],
    )
}
