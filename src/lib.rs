//! boxsvg - Render laid-out CSS boxes as SVG fragments
//!
//! Given the geometry of a box, its computed style and the state inherited from the
//! enclosing box, the renderer produces a self-contained SVG fragment: definitions,
//! shadows, overflow clipping, background fills, image content and borders, stacked
//! in the order CSS paints them.
//!
//! # Example
//!
//! ```rust
//! use boxsvg::{render_box, BoxGeometry, InheritedContext, Style};
//!
//! let geometry = BoxGeometry::new("a", 0.0, 0.0, 100.0, 50.0);
//! let style = Style {
//!     background_color: Some("red".to_string()),
//!     ..Default::default()
//! };
//!
//! let svg = futures::executor::block_on(render_box(&geometry, &style, &InheritedContext::default()))
//!     .unwrap();
//! assert_eq!(
//!     svg,
//!     r#"<rect x="0" y="0" width="100" height="50" fill="red" transform="translate(0, 0)"/>"#
//! );
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod path;
pub mod providers;
pub mod renderer;
pub mod style;
pub mod transform;
pub mod xml;

pub use config::{ConfigError, DocumentConfig, RenderConfig};
pub use error::ProviderError;
pub use geometry::{BoxGeometry, BoxRect, InheritedContext};
pub use ids::DefIds;
pub use renderer::{wrap_document, BoxRenderer};
pub use style::Style;

use thiserror::Error;

/// Errors that can occur while rendering a box
#[derive(Debug, Error)]
pub enum RenderError {
    /// A collaborator failed; the box has no partial output
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Render one box with the default renderer
///
/// # Example
///
/// ```rust
/// use boxsvg::{render_box, BoxGeometry, InheritedContext, Style};
///
/// let style: Style = serde_json::from_str(r#"{"display": "none"}"#).unwrap();
/// let geometry = BoxGeometry::new("hidden", 0.0, 0.0, 10.0, 10.0);
///
/// let svg = futures::executor::block_on(render_box(&geometry, &style, &InheritedContext::default()))
///     .unwrap();
/// assert!(svg.is_empty());
/// ```
pub async fn render_box(
    geometry: &BoxGeometry,
    style: &Style,
    inherited: &InheritedContext,
) -> Result<String, RenderError> {
    BoxRenderer::default()
        .render(geometry, style, inherited)
        .await
}
