//! Label → in-memory state.
//!
//! Decoding never fails: a label that cannot be read yields no annotations
//! and unanswered fields, and entries for tools that are no longer
//! configured are dropped.

use super::document::{LabelDocument, SKIP_LABEL};
use super::error::LabelError;
use crate::model::{Annotation, ClassificationField};
use crate::state::AppState;

/// Rebuild annotations from a label.
///
/// Every shape gets a fresh annotation ID and takes its color and kind from
/// the tool whose name matches the label key.
pub fn parse_annotations(state: &AppState, label: &str) -> Vec<Annotation> {
    if label == SKIP_LABEL {
        return Vec::new();
    }

    match try_parse_annotations(state, label) {
        Ok(annotations) => annotations,
        Err(e) => {
            log::warn!("Ignoring annotations from unreadable label: {}", e);
            Vec::new()
        }
    }
}

fn try_parse_annotations(state: &AppState, label: &str) -> Result<Vec<Annotation>, LabelError> {
    let document = LabelDocument::parse(label)?;
    let mut annotations = Vec::new();

    for key in document.keys() {
        let Some(tool) = state.find_tool_by_name(key) else {
            log::debug!("Skipping label entry '{}': no tool with that name", key);
            continue;
        };

        let shapes = document.shapes(key)?;
        log::debug!("Restored {} shapes for tool '{}'", shapes.len(), tool.name);
        annotations.extend(
            shapes
                .into_iter()
                .map(|geometry| Annotation::new(tool, geometry)),
        );
    }

    Ok(annotations)
}

/// Rebuild the classification fields from a label.
///
/// Always returns one field per configured field, in configuration order.
/// Answers come from the label entry named after the field.
pub fn parse_classifications(state: &AppState, label: &str) -> Vec<ClassificationField> {
    let unanswered = state
        .classification_fields
        .iter()
        .map(ClassificationField::without_answer);

    if label == SKIP_LABEL {
        return unanswered.collect();
    }

    let document = match LabelDocument::parse(label) {
        Ok(document) => document,
        Err(e) => {
            log::warn!("Ignoring answers from unreadable label: {}", e);
            return unanswered.collect();
        }
    };

    unanswered
        .map(|mut field| {
            field.user_answer = document.answer(&field.name);
            field
        })
        .collect()
}
