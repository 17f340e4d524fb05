//! Box geometry produced by layout, and the context inherited from ancestors

use serde::Deserialize;

/// One laid-out box
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxGeometry {
    /// Caller-unique id; namespaces every definition this box emits
    pub id: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub is_inheriting_transform: bool,
    /// Image source; its presence makes this an image box
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

impl BoxGeometry {
    pub fn new(id: impl Into<String>, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            left,
            top,
            width,
            height,
            ..Default::default()
        }
    }

    /// Mark this box as an image box
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Enable the debug outline
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn is_image(&self) -> bool {
        self.src.is_some()
    }

    /// Position and size only
    pub fn rect(&self) -> BoxRect {
        BoxRect {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
        }
    }
}

/// Position and size of a box in parent coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// State handed down by the enclosing box renderer
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InheritedContext {
    /// Clip path defined by an ancestor that also clips this box
    pub clip_path_id: Option<String>,
    /// Overflow mask defined by an ancestor; passed on to descendants, never applied here
    pub mask_id: Option<String>,
    /// Uniform scale of the ancestor; image boxes use it instead of their own scale
    pub parent_scale: Option<f64>,
}

impl InheritedContext {
    pub fn with_clip_path(mut self, id: impl Into<String>) -> Self {
        self.clip_path_id = Some(id.into());
        self
    }

    pub fn with_mask(mut self, id: impl Into<String>) -> Self {
        self.mask_id = Some(id.into());
        self
    }

    pub fn with_parent_scale(mut self, scale: f64) -> Self {
        self.parent_scale = Some(scale);
        self
    }

    /// `url(#…)` reference to the inherited clip path
    pub fn clip_path_ref(&self) -> Option<String> {
        self.clip_path_id.as_ref().map(|id| format!("url(#{})", id))
    }
}
