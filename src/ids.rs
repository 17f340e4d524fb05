//! Identifiers of the definitions a box emits
//!
//! Every id is `<prefix>_<kind>-<box id>`, so two boxes with different ids never
//! define the same clip path, mask, filter or paint server.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefIds {
    prefix: String,
}

impl DefIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Clip path produced by the text renderer for `background-clip: text`
    pub fn text_clip(&self, box_id: &str) -> String {
        format!("{}_bct-{}", self.prefix, box_id)
    }

    /// Overflow clip path offered to descendants
    pub fn overflow_clip(&self, box_id: &str) -> String {
        format!("{}_cp-{}", self.prefix, box_id)
    }

    /// Overflow mask offered to descendants
    pub fn overflow_mask(&self, box_id: &str) -> String {
        format!("{}_om-{}", self.prefix, box_id)
    }

    /// Clip path isolating the border ring
    pub fn border_clip(&self, box_id: &str) -> String {
        format!("{}_bc-{}", self.prefix, box_id)
    }

    /// Filter of the n-th box shadow
    pub fn shadow(&self, box_id: &str, index: usize) -> String {
        format!("{}_s-{}-{}", self.prefix, box_id, index)
    }

    /// Paint server of one background layer; `layer_id` is `<box id>_<index>`
    pub fn background(&self, layer_id: &str) -> String {
        format!("{}_bg-{}", self.prefix, layer_id)
    }
}

impl Default for DefIds {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ID_PREFIX)
    }
}
