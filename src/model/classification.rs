//! Classification fields: image-level questions with an optional answer.
//!
//! Unlike tools, which produce shapes, classification fields describe the
//! whole image. Their answers share the label record with the tool entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer input style for a classification field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Pick exactly one option
    #[default]
    Radio,
    /// Pick any number of options
    Checklist,
    /// Free text
    Text,
}

/// A selectable option for radio and checklist fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Value written into the label
    pub value: String,
    /// Display label
    pub label: String,
}

/// A classification question with an optional user answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationField {
    /// Field name, also used as the field's key in labels
    pub name: String,
    /// Question shown to the user
    #[serde(default)]
    pub title: String,
    /// Input style
    #[serde(default, rename = "type")]
    pub kind: FieldKind,
    /// Options for radio/checklist fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    /// The user's answer, absent until answered or restored from a label
    #[serde(default, rename = "userAnswer", skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<Value>,
}

impl ClassificationField {
    /// Create a new unanswered field.
    pub fn new(name: &str, title: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            kind,
            options: Vec::new(),
            user_answer: None,
        }
    }

    /// Add an option.
    pub fn with_option(mut self, value: &str, label: &str) -> Self {
        self.options.push(FieldOption {
            value: value.to_string(),
            label: label.to_string(),
        });
        self
    }

    /// Set the user's answer.
    pub fn with_answer(mut self, answer: impl Into<Value>) -> Self {
        self.user_answer = Some(answer.into());
        self
    }

    /// Copy of this field with the answer stripped.
    pub fn without_answer(&self) -> Self {
        Self {
            user_answer: None,
            ..self.clone()
        }
    }

    /// The answer, if one has been given.
    ///
    /// Falsy JSON values (`null`, `false`, `0`, `""`) count as unanswered,
    /// the same test the web labeling frontend applies before writing a
    /// label. Arrays and objects are answers even when empty.
    pub fn answer(&self) -> Option<&Value> {
        match &self.user_answer {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::Number(n)) if n.as_f64().is_none_or(|v| v == 0.0) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(value) => Some(value),
        }
    }

    /// Check if the field has an answer.
    pub fn has_answer(&self) -> bool {
        self.answer().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_presence() {
        let field = ClassificationField::new("weather", "Weather?", FieldKind::Radio);
        assert!(!field.has_answer());
        assert!(!field.clone().with_answer(Value::Null).has_answer());
        assert!(!field.clone().with_answer("").has_answer());
        assert!(field.clone().with_answer("sunny").has_answer());
        assert!(field.clone().with_answer(json!(["a", "b"])).has_answer());
        assert!(field.clone().with_answer(json!([])).has_answer());
        assert!(field.clone().with_answer(true).has_answer());
        assert!(field.clone().with_answer(3).has_answer());
        assert!(field.clone().with_answer(-0.5).has_answer());
    }

    #[test]
    fn test_falsy_answers_are_unanswered() {
        let field = ClassificationField::new("ok", "Ok?", FieldKind::Radio);
        assert!(!field.clone().with_answer(false).has_answer());
        assert!(!field.clone().with_answer(0).has_answer());
        assert!(!field.clone().with_answer(0.0).has_answer());
        assert!(!field.with_answer(-0.0).has_answer());
    }

    #[test]
    fn test_without_answer_keeps_metadata() {
        let field = ClassificationField::new("weather", "Weather?", FieldKind::Radio)
            .with_option("sunny", "Sunny")
            .with_answer("sunny");
        let stripped = field.without_answer();

        assert_eq!(stripped.user_answer, None);
        assert_eq!(stripped.options, field.options);
        assert_eq!(stripped.title, "Weather?");
    }

    #[test]
    fn test_deserialize_template_field() {
        let field: ClassificationField = serde_json::from_value(json!({
            "name": "model",
            "title": "Car model",
            "type": "checklist",
            "options": [{"value": "sedan", "label": "Sedan"}]
        }))
        .unwrap();

        assert_eq!(field.kind, FieldKind::Checklist);
        assert_eq!(field.options.len(), 1);
        assert!(!field.has_answer());
    }
}
