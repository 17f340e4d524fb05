//! Ordered assembly of a box fragment
//!
//! Each render step writes into its own slot; [`BoxMarkup::build`] concatenates the
//! slots in the one order that produces correct stacking:
//!
//! defs, shadow (before), overflow clip, opacity group open, shapes, opacity group
//! close, shadow (after), debug outline.

use crate::xml::XmlElement;

/// Fragments of one box, filled in by the render steps
#[derive(Debug, Default)]
pub struct BoxMarkup {
    defs: String,
    shadow: Option<(String, String)>,
    clip: String,
    opacity: Option<f64>,
    shapes: String,
    background_shapes: String,
    debug: String,
}

impl BoxMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add definition markup to the `<defs>` block
    pub fn add_defs(&mut self, defs: &str) {
        self.defs.push_str(defs);
    }

    pub fn set_shadow(&mut self, shadow: Option<(String, String)>) {
        self.shadow = shadow;
    }

    pub fn set_clip(&mut self, clip: String) {
        self.clip = clip;
    }

    /// Group the shapes under this opacity; 1 means no group
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = if opacity != 1.0 { Some(opacity) } else { None };
    }

    /// Add a fill shape, image or border to the shape stack
    pub fn add_shape(&mut self, shape: &str) {
        self.shapes.push_str(shape);
    }

    /// Add shapes of a background layer; when present they replace the shape stack
    pub fn add_background_shapes(&mut self, shapes: &str) {
        self.background_shapes.push_str(shapes);
    }

    pub fn set_debug(&mut self, debug: String) {
        self.debug = debug;
    }

    /// Concatenate all slots in paint order
    pub fn build(self) -> String {
        let mut out = String::new();

        if !self.defs.is_empty() {
            out.push_str(&XmlElement::new("defs").children(self.defs).build());
        }

        let (shadow_before, shadow_after) = self.shadow.unwrap_or_default();
        out.push_str(&shadow_before);
        out.push_str(&self.clip);

        if let Some(opacity) = self.opacity {
            out.push_str(&format!(r#"<g opacity="{}">"#, opacity));
        }
        if self.background_shapes.is_empty() {
            out.push_str(&self.shapes);
        } else {
            out.push_str(&self.background_shapes);
        }
        if self.opacity.is_some() {
            out.push_str("</g>");
        }

        out.push_str(&shadow_after);
        out.push_str(&self.debug);
        out
    }
}
