//! Exact-size SVG fixture generation.
//!
//! Builds a fixed prologue, a grid of rotated triangles and a closing tag,
//! then appends padding comments until the text reaches the byte target and
//! cuts it to exactly that length. The cut ignores markup structure, so the
//! tail of the output is not guaranteed to be well-formed.
//!
//! Output is deterministic: no randomness is involved.

mod config;
mod document;
mod writer;

pub use config::MarkupConfig;
pub use document::{
    build_document, padding_comment, MarkupDocument, Shape, CLOSING_TAG, GRADIENT_ID, PROLOGUE,
    ROTATION_STEP,
};
pub use writer::{generate_file, DEFAULT_OUTPUT_PATH};
