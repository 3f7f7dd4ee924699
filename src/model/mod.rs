//! Data models for the labeling state.

mod annotation;
mod classification;
mod tool;

pub use annotation::{Annotation, AnnotationId, Geometry, LatLng, PixelPoint, PixelShape};
pub use classification::{ClassificationField, FieldKind, FieldOption};
pub use tool::{Tool, ToolId, ToolKind};
