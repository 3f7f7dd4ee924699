//! Click intent resolution.
//!
//! The map surface reports raw clicks; which user action a click stands for
//! depends on the selected tool and on what is being drawn.

use crate::model::AnnotationId;
use crate::state::{AppState, MapClick};

/// Number of corner clicks that complete a rectangle.
pub const RECTANGLE_CORNER_COUNT: usize = 2;

/// User action a map click resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Both rectangle corners are placed; turn them into an annotation
    CompleteBoundingBox,
    /// Clear the current annotation selection
    DeselectAnnotation,
    /// Select the annotation that was clicked
    SelectAnnotation(AnnotationId),
}

/// Decide what a click on the map should do.
///
/// Rules are checked in order and the first match wins:
///
/// 1. Rectangle tool selected and both corners drawn: complete the box,
///    wherever the click landed.
/// 2. No tool selected and the click missed every shape: deselect.
/// 3. The click hit a shape: select it.
///
/// Returns `None` when no rule applies, e.g. a click on empty space while a
/// drawing tool is active.
pub fn resolve_intent(state: &AppState, click: &MapClick) -> Option<Intent> {
    if state.selected_rectangle_tool().is_some()
        && state.drawn_annotation_bounds.len() == RECTANGLE_CORNER_COUNT
    {
        return Some(Intent::CompleteBoundingBox);
    }

    match (state.current_tool_id.as_ref(), click.shape_id) {
        (None, None) => Some(Intent::DeselectAnnotation),
        (_, Some(shape_id)) => Some(Intent::SelectAnnotation(shape_id)),
        (Some(_), None) => None,
    }
}
