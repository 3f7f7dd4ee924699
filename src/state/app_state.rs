//! Labeling state for a single image.

use crate::label::{parse_annotations, parse_classifications};
use crate::model::{Annotation, AnnotationId, ClassificationField, LatLng, Tool, ToolId, ToolKind};

/// Snapshot of the labeling screen that all derived views are computed from.
///
/// Owned and mutated by the surrounding application; everything in this
/// crate only reads it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Configured tools, in display order
    pub tools: Vec<Tool>,
    /// Currently selected tool, if any
    pub current_tool_id: Option<ToolId>,
    /// Corner clicks collected while drawing a rectangle (0..=2 entries)
    pub drawn_annotation_bounds: Vec<LatLng>,
    /// Annotations on the current image
    pub annotations: Vec<Annotation>,
    /// One entry per configured classification field, in configuration order
    pub classification_fields: Vec<ClassificationField>,
    /// Last persisted label, if the image was ever saved
    pub label: Option<String>,
    /// Annotation being drawn with the rectangle tool
    pub rectangle_in_progress_id: Option<AnnotationId>,
}

impl AppState {
    /// Create an empty state for the given configuration.
    pub fn new(tools: Vec<Tool>, classification_fields: Vec<ClassificationField>) -> Self {
        Self {
            tools,
            classification_fields,
            ..Self::default()
        }
    }

    /// Find a tool by its ID.
    pub fn find_tool_by_id(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Find a tool by its name.
    pub fn find_tool_by_name(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// The currently selected tool, if any.
    pub fn current_tool(&self) -> Option<&Tool> {
        self.current_tool_id
            .as_deref()
            .and_then(|id| self.find_tool_by_id(id))
    }

    /// The currently selected tool if it draws rectangles.
    pub fn selected_rectangle_tool(&self) -> Option<&Tool> {
        self.current_tool()
            .filter(|tool| tool.kind == ToolKind::Rectangle)
    }

    /// Check if a rectangle is being drawn.
    pub fn is_drawing_rectangle(&self) -> bool {
        self.rectangle_in_progress_id.is_some()
    }

    /// Replace annotations and answers with the contents of a persisted label.
    ///
    /// `None` means the image was never labeled: annotations are cleared and
    /// every field is left unanswered.
    pub fn restore_from_label(mut self, label: Option<String>) -> Self {
        match label.as_deref() {
            Some(text) => {
                self.annotations = parse_annotations(&self, text);
                self.classification_fields = parse_classifications(&self, text);
            }
            None => {
                self.annotations.clear();
                self.classification_fields = self
                    .classification_fields
                    .iter()
                    .map(ClassificationField::without_answer)
                    .collect();
            }
        }
        self.label = label;
        self.drawn_annotation_bounds.clear();
        self.rectangle_in_progress_id = None;
        self
    }
}
