//! Label codec: conversion between persisted labels and labeling state.
//!
//! A label is the serialized record of one image's annotations and
//! classification answers. Decoding ([`parse_annotations`],
//! [`parse_classifications`]) is lenient and never fails; encoding
//! ([`serialize_label`]) is strict and reports inconsistent state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seglabel::label;
//!
//! let annotations = label::parse_annotations(&state, &text);
//! let answers = label::parse_classifications(&state, &text);
//! let saved = label::serialize_label(&state)?;
//! ```

mod decode;
mod document;
mod encode;
mod error;

#[cfg(test)]
mod tests;

pub use decode::{parse_annotations, parse_classifications};
pub use document::{EMPTY_LABEL, LabelDocument, SKIP_LABEL};
pub use encode::{build_document, serialize_label};
pub use error::LabelError;
