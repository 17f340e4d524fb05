//! Collaborators of the box renderer
//!
//! The renderer owns ordering and compositing; everything that turns one CSS
//! concern into markup is delegated to one of the traits below. Each trait has a
//! default implementation in the submodules, and any of them can be swapped on a
//! [`BoxRenderer`](crate::renderer::BoxRenderer).

pub mod background;
pub mod border;
pub mod clip;
pub mod radius;
pub mod shadow;

use futures::future::BoxFuture;

use crate::error::ProviderError;
use crate::geometry::BoxRect;
use crate::style::{BackgroundImage, Style};

pub use background::PaintServerLayers;
pub use border::StrokeBorder;
pub use clip::OverflowClip;
pub use radius::RoundedCorners;
pub use shadow::FilterShadows;

/// Element used for the fill shapes of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Path,
}

impl ShapeKind {
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Path => "path",
        }
    }
}

/// Produces the rounded-corner outline of a box
pub trait RadiusPathProvider: Send + Sync {
    /// Absolute-coordinate path `d`, or `None` for a plain rectangle
    fn path(&self, rect: &BoxRect, style: &Style) -> Option<String>;
}

/// Geometry of one background layer request
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRequest {
    /// `<box id>_<layer index>`
    pub id: String,
    pub rect: BoxRect,
    /// Fill shape the layer paints; paths are drawn in absolute coordinates
    pub kind: ShapeKind,
}

/// A resolved background layer
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayer {
    /// Id of the paint server, referenced as `url(#…)`
    pub fill_id: String,
    /// Definition markup for the `<defs>` block
    pub defs: String,
    /// Markup for layers that need their own elements instead of a fill
    pub shapes: Option<String>,
}

/// Turns `background-image` layers into paint servers
pub trait BackgroundLayerProvider: Send + Sync {
    /// Resolve one layer. May suspend, e.g. to fetch or decode an image.
    fn layer<'a>(
        &'a self,
        request: LayerRequest,
        image: &'a BackgroundImage,
    ) -> BoxFuture<'a, Result<Option<BackgroundLayer>, ProviderError>>;
}

/// Input of the shadow collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowRequest<'a> {
    pub id: &'a str,
    pub rect: BoxRect,
    pub opacity: f64,
    /// Opaque white silhouette of the box shape
    pub shape: String,
    pub kind: ShapeKind,
}

/// Frames the shape stack with `box-shadow` effects
pub trait ShadowProvider: Send + Sync {
    /// Markup drawn before and after the box, or `None` without shadows
    fn shadow(&self, request: &ShadowRequest<'_>, style: &Style) -> Option<(String, String)>;
}

/// Input of the overflow collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowRequest<'a> {
    pub id: &'a str,
    pub rect: BoxRect,
    pub path: Option<&'a str>,
    pub matrix: Option<&'a str>,
    pub clip_path: Option<&'a str>,
    pub src: Option<&'a str>,
}

/// Input of the border-clip collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct BorderClipRequest<'a> {
    pub id: &'a str,
    pub rect: BoxRect,
    /// Inherited clip path id
    pub clip_path_id: Option<&'a str>,
    pub path: Option<&'a str>,
    pub kind: ShapeKind,
}

/// Overflow clipping and border-ring clipping
pub trait ClipProvider: Send + Sync {
    /// Markup emitted ahead of the shapes for this box's own overflow
    fn overflow(&self, request: &OverflowRequest<'_>, style: &Style) -> String;

    /// Clip path definition isolating the border ring, with its id
    fn border_clip(&self, request: &BorderClipRequest<'_>, style: &Style)
        -> Option<(String, String)>;
}

/// Input of the border collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct BorderRequest<'a> {
    pub rect: BoxRect,
    pub path: Option<&'a str>,
    /// Border matrix: scale/rotate only, no translation
    pub transform: Option<&'a str>,
    /// `url(#…)` of the border-ring clip
    pub clip_path: &'a str,
}

/// Draws border strokes
pub trait BorderRenderer: Send + Sync {
    fn border(&self, request: &BorderRequest<'_>, style: &Style) -> String;
}
