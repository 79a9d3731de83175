//! Document text assembly: prologue, shapes, padding, truncation.

use std::fmt;

use crate::config::MarkupConfig;

/// Declaration, root element and gradient definitions shared by every run.
pub const PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="2000" height="2000" viewBox="0 0 2000 2000">
  <defs>
    <linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:rgb(255,0,0);stop-opacity:1" />
      <stop offset="100%" style="stop-color:rgb(0,0,255);stop-opacity:1" />
    </linearGradient>
  </defs>
"#;

/// Closes the root element. No trailing newline.
pub const CLOSING_TAG: &str = "</svg>";

/// Degrees of rotation added per shape index.
pub const ROTATION_STEP: f64 = 0.36;

/// Id of the gradient every shape is filled with.
pub const GRADIENT_ID: &str = "grad1";

/// One triangle in the grid, anchored at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub x: u32,
    pub y: u32,
    /// Degrees, applied about `(x + 15, y + 15)`.
    pub rotation: f64,
}

impl Shape {
    pub fn at(index: u32, config: &MarkupConfig) -> Self {
        Self {
            x: (index % config.grid_columns) * config.cell_size,
            y: (index / config.grid_columns) * config.cell_size,
            rotation: f64::from(index) * ROTATION_STEP,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, rotation } = *self;
        // Debug keeps the fractional part on whole angles ("0.0", "36.0").
        writeln!(
            f,
            "  <path d=\"M {x} {y} L {} {y} L {} {} Z\" ",
            x + 30,
            x + 15,
            y + 30
        )?;
        writeln!(f, "    fill=\"url(#{GRADIENT_ID})\" ")?;
        writeln!(f, "    stroke=\"black\" ")?;
        writeln!(f, "    stroke-width=\"2\"")?;
        writeln!(f, "    opacity=\"0.8\"")?;
        writeln!(
            f,
            "    transform=\"rotate({rotation:?} {} {})\" />",
            x + 15,
            y + 15
        )
    }
}

/// Builds one padding comment holding `fill` filler characters.
pub fn padding_comment(fill: usize) -> String {
    format!("<!-- {} -->\n", "x".repeat(fill))
}

/// Markup text accumulated in order. Only ever appended to, so any byte
/// prefix of it is a valid truncation.
#[derive(Debug, Clone)]
pub struct MarkupDocument {
    text: String,
    shapes: u32,
    padding_comments: usize,
}

impl Default for MarkupDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupDocument {
    /// Starts a document containing only the [`PROLOGUE`].
    pub fn new() -> Self {
        Self {
            text: String::from(PROLOGUE),
            shapes: 0,
            padding_comments: 0,
        }
    }

    pub fn push_shape(&mut self, shape: &Shape) {
        self.text.push_str(&shape.to_string());
        self.shapes += 1;
    }

    pub fn close(&mut self) {
        self.text.push_str(CLOSING_TAG);
    }

    /// Appends padding comments until the document is at least `target`
    /// bytes long.
    pub fn pad_to(&mut self, target: usize, fill: usize) {
        let comment = padding_comment(fill);
        while self.text.len() < target {
            self.text.push_str(&comment);
            self.padding_comments += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub const fn shape_count(&self) -> u32 {
        self.shapes
    }

    pub const fn padding_comments(&self) -> usize {
        self.padding_comments
    }

    /// Cuts the encoded bytes to at most `len`, regardless of markup
    /// structure.
    pub fn into_truncated(self, len: usize) -> Vec<u8> {
        let mut bytes = self.text.into_bytes();
        bytes.truncate(len);
        bytes
    }
}

/// Assembles the complete fixture: prologue, `element_count` shapes, the
/// closing tag, then padding, truncated to exactly `target_bytes`.
pub fn build_document(config: &MarkupConfig) -> Vec<u8> {
    let mut document = MarkupDocument::new();
    for index in 0..config.element_count {
        document.push_shape(&Shape::at(index, config));
    }
    document.close();
    document.pad_to(config.target_bytes, config.padding_fill);

    tracing::debug!(
        shapes = document.shape_count(),
        padding_comments = document.padding_comments(),
        untruncated_bytes = document.len(),
        "markup document assembled"
    );
    document.into_truncated(config.target_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_SHAPE: &str = "  <path d=\"M 0 0 L 30 0 L 15 30 Z\" \n    fill=\"url(#grad1)\" \n    stroke=\"black\" \n    stroke-width=\"2\"\n    opacity=\"0.8\"\n    transform=\"rotate(0.0 15 15)\" />\n";

    #[test]
    fn prologue_declares_namespace_and_dimensions() {
        assert!(PROLOGUE.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(PROLOGUE.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(PROLOGUE.contains("width=\"2000\" height=\"2000\""));
        assert!(PROLOGUE.contains("<linearGradient id=\"grad1\""));
        assert!(PROLOGUE.ends_with("  </defs>\n"));
    }

    #[test]
    fn first_shape_renders_exactly() {
        let shape = Shape::at(0, &MarkupConfig::default());
        assert_eq!(shape.to_string(), FIRST_SHAPE);
    }

    #[test]
    fn shape_positions_follow_grid() {
        let config = MarkupConfig::default();
        let shape = Shape::at(123, &config);
        assert_eq!(shape.x, 23 * 40);
        assert_eq!(shape.y, 2 * 40);

        let last = Shape::at(999, &config);
        assert_eq!((last.x, last.y), (49 * 40, 19 * 40));
    }

    #[test]
    fn rotation_prints_shortest_float() {
        let config = MarkupConfig::default();
        let rendered = Shape::at(1, &config).to_string();
        assert!(rendered.contains("rotate(0.36 55 15)"));

        let rendered = Shape::at(100, &config).to_string();
        assert!(rendered.contains("rotate(36.0 15 95)"));

        let rendered = Shape::at(51, &config).to_string();
        assert!(rendered.contains("d=\"M 40 40 L 70 40 L 55 70 Z\""));
    }

    #[test]
    fn padding_comment_has_fixed_size() {
        let comment = padding_comment(1000);
        assert_eq!(comment.len(), 1010);
        assert!(comment.starts_with("<!-- x"));
        assert!(comment.ends_with("x -->\n"));
    }

    #[test]
    fn pad_to_stops_at_first_length_past_target() {
        let mut document = MarkupDocument::new();
        document.close();
        let before = document.len();
        document.pad_to(before + 25, 10);
        assert_eq!(document.padding_comments(), 2);
        assert_eq!(document.len(), before + 2 * padding_comment(10).len());
    }

    #[test]
    fn pad_to_is_noop_when_already_large_enough() {
        let mut document = MarkupDocument::new();
        assert!(!document.is_empty());
        let before = document.len();
        assert_eq!(before, PROLOGUE.len());
        document.pad_to(before, 1000);
        assert_eq!(document.len(), before);
        assert_eq!(document.padding_comments(), 0);
    }

    #[test]
    fn build_document_hits_exact_default_size() {
        let bytes = build_document(&MarkupConfig::default());
        assert_eq!(bytes.len(), 1_048_576);
        assert!(bytes.starts_with(PROLOGUE.as_bytes()));
        assert!(bytes[PROLOGUE.len()..].starts_with(FIRST_SHAPE.as_bytes()));
    }

    #[test]
    fn build_document_contains_every_shape_then_closing_tag() {
        let config = MarkupConfig::for_testing();
        let bytes = build_document(&config);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.matches("<path ").count(), 10);
        let close = text.find(CLOSING_TAG).unwrap();
        assert!(text[close + CLOSING_TAG.len()..].starts_with("<!-- "));
    }

    #[test]
    fn truncation_below_prologue_keeps_a_prefix() {
        let config = MarkupConfig::for_testing().with_target_bytes(100);
        let bytes = build_document(&config);
        assert_eq!(bytes, PROLOGUE.as_bytes()[..100].to_vec());
    }

    #[test]
    fn build_document_is_deterministic() {
        let config = MarkupConfig::default();
        assert_eq!(build_document(&config), build_document(&config));
    }
}
