//! seglabel - labeling state logic for image segmentation
//!
//! Converts between persisted labels and the in-memory annotation model,
//! resolves map clicks into user intents, and detects unsaved changes by
//! comparing the current state against the last saved label.

pub mod config;
pub mod dirty;
pub mod intent;
pub mod label;
pub mod model;
pub mod state;

pub use config::{ConfigError, LabelerConfig, LogLevel};
pub use dirty::has_unsaved_changes;
pub use intent::{Intent, resolve_intent};
pub use label::{LabelError, parse_annotations, parse_classifications, serialize_label};
pub use state::{AppState, MapClick};
