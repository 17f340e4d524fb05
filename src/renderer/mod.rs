//! Box renderer and output assembly
//!
//! [`BoxRenderer`] compiles one laid-out box into an SVG fragment. The fragment can
//! be concatenated into a parent document as-is, or wrapped into a standalone
//! document with [`wrap_document`].

pub mod box_renderer;
pub mod document;
pub mod markup;

pub use box_renderer::BoxRenderer;
pub use document::wrap_document;
pub use markup::BoxMarkup;
