//! Unsaved change detection.
//!
//! There is no dirty flag. The current state is serialized on every query
//! and compared with the last saved label, so the answer can never drift
//! from the data. Labels are small, so the cost is a few microseconds.

use crate::label::{self, EMPTY_LABEL, LabelError, SKIP_LABEL};
use crate::state::AppState;

/// Check whether `state` holds changes that are not in the saved label.
///
/// A saved `"Skip"` label counts as equal to an empty label. Before the
/// first save (no label, or an empty one), any annotation or answered field
/// is an unsaved change.
///
/// # Errors
///
/// Propagates the serialization errors of [`label::serialize_label`].
pub fn has_unsaved_changes(state: &AppState) -> Result<bool, LabelError> {
    let Some(saved) = state.label.as_deref().filter(|saved| !saved.is_empty()) else {
        return Ok(!state.annotations.is_empty()
            || state
                .classification_fields
                .iter()
                .any(|field| field.has_answer()));
    };

    let current = label::serialize_label(state)?;
    if saved == SKIP_LABEL && current == EMPTY_LABEL {
        return Ok(false);
    }

    Ok(saved != current)
}
