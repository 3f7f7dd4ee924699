//! Pointer events coming from the map surface.

use crate::model::{AnnotationId, LatLng};

/// A click on the map surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapClick {
    /// Annotation under the pointer, if the click hit one
    pub shape_id: Option<AnnotationId>,
    /// Where the click landed, in display space
    pub location: Option<LatLng>,
}

impl MapClick {
    /// A click on empty map space.
    pub fn at(location: LatLng) -> Self {
        Self {
            shape_id: None,
            location: Some(location),
        }
    }

    /// A click that hit an existing annotation.
    pub fn on_shape(shape_id: AnnotationId) -> Self {
        Self {
            shape_id: Some(shape_id),
            location: None,
        }
    }
}
