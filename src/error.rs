//! Errors raised by render collaborators

use thiserror::Error;

/// Failure of a collaborator while rendering a box.
///
/// The box renderer never masks these: a missing background layer would break the
/// correspondence between fills and definitions, so the whole render fails.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An image referenced by a background layer could not be loaded
    #[error("failed to load image '{src}': {reason}")]
    ImageLoad { src: String, reason: String },

    /// A background layer descriptor the provider cannot turn into paint
    #[error("unsupported background layer '{id}': {reason}")]
    UnsupportedBackground { id: String, reason: String },
}

impl ProviderError {
    pub fn image_load(src: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageLoad {
            src: src.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_background(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedBackground {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
