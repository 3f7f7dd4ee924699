//! In-memory state → label.

use std::collections::HashMap;

use super::document::LabelDocument;
use super::error::LabelError;
use crate::model::PixelShape;
use crate::state::AppState;

/// Serialize the annotations and answers in `state` to a label string.
///
/// Tool entries come first, in the order each tool is first used by an
/// annotation, followed by answered classification fields in configuration
/// order. Unanswered fields are left out.
///
/// # Errors
///
/// Returns `ToolNotFound` if an annotation references a tool that is not in
/// `state.tools`, and `NameCollision` if an answered field has the same name
/// as a tool entry. Both mean the state is inconsistent; nothing is dropped
/// to work around them.
pub fn serialize_label(state: &AppState) -> Result<String, LabelError> {
    Ok(build_document(state)?.to_label_string())
}

/// Build the label record for `state` without serializing it.
pub fn build_document(state: &AppState) -> Result<LabelDocument, LabelError> {
    let mut groups: Vec<(&str, Vec<PixelShape>)> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();

    for annotation in &state.annotations {
        let idx = *group_index
            .entry(annotation.tool_id.as_str())
            .or_insert_with(|| {
                groups.push((annotation.tool_id.as_str(), Vec::new()));
                groups.len() - 1
            });
        groups[idx].1.push(annotation.geometry.to_pixels());
    }

    let mut document = LabelDocument::new();

    for (tool_id, shapes) in &groups {
        let Some(tool) = state.find_tool_by_id(tool_id) else {
            log::error!(
                "{} annotations reference missing tool '{}'",
                shapes.len(),
                tool_id
            );
            return Err(LabelError::tool_not_found(*tool_id));
        };
        if document.contains_key(&tool.name) {
            return Err(LabelError::name_collision(&tool.name));
        }
        document.insert_shapes(&tool.name, shapes);
    }

    for field in &state.classification_fields {
        let Some(answer) = field.answer() else {
            continue;
        };
        if document.contains_key(&field.name) {
            log::error!(
                "Classification field '{}' collides with a tool of the same name",
                field.name
            );
            return Err(LabelError::name_collision(&field.name));
        }
        document.insert_answer(&field.name, answer.clone());
    }

    log::debug!(
        "Built label with {} tool groups and {} answers",
        groups.len(),
        document.len() - groups.len()
    );

    Ok(document)
}
