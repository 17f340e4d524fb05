//! Box to SVG fragment compiler

use tracing::{debug, trace, warn};

use crate::config::RenderConfig;
use crate::geometry::{BoxGeometry, BoxRect, InheritedContext};
use crate::ids::DefIds;
use crate::providers::{
    BackgroundLayer, BackgroundLayerProvider, BorderClipRequest, BorderRenderer, BorderRequest,
    ClipProvider, FilterShadows, LayerRequest, OverflowClip, OverflowRequest, PaintServerLayers,
    RadiusPathProvider, RoundedCorners, ShadowProvider, ShadowRequest, ShapeKind, StrokeBorder,
};
use crate::style::{BackgroundClip, ObjectFit, Side, Style};
use crate::transform::box_matrices;
use crate::xml::XmlElement;
use crate::RenderError;

use super::markup::BoxMarkup;

/// Renders single boxes into self-contained SVG fragments.
///
/// The renderer holds no per-box state; one instance can render every box of a
/// document, concurrently if the caller wants to.
pub struct BoxRenderer {
    config: RenderConfig,
    ids: DefIds,
    radius: Box<dyn RadiusPathProvider>,
    backgrounds: Box<dyn BackgroundLayerProvider>,
    shadows: Box<dyn ShadowProvider>,
    clips: Box<dyn ClipProvider>,
    borders: Box<dyn BorderRenderer>,
}

impl Default for BoxRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl BoxRenderer {
    /// Create a renderer with the default collaborators
    pub fn new(config: RenderConfig) -> Self {
        let ids = config.def_ids();
        Self {
            radius: Box::new(RoundedCorners),
            backgrounds: Box::new(PaintServerLayers::new(ids.clone())),
            shadows: Box::new(FilterShadows::new(ids.clone())),
            clips: Box::new(OverflowClip::new(ids.clone())),
            borders: Box::new(StrokeBorder),
            ids,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the rounded-corner path provider
    pub fn with_radius_provider(mut self, provider: impl RadiusPathProvider + 'static) -> Self {
        self.radius = Box::new(provider);
        self
    }

    /// Replace the background layer provider
    pub fn with_background_provider(
        mut self,
        provider: impl BackgroundLayerProvider + 'static,
    ) -> Self {
        self.backgrounds = Box::new(provider);
        self
    }

    /// Replace the shadow provider
    pub fn with_shadow_provider(mut self, provider: impl ShadowProvider + 'static) -> Self {
        self.shadows = Box::new(provider);
        self
    }

    /// Replace the overflow and border clip provider
    pub fn with_clip_provider(mut self, provider: impl ClipProvider + 'static) -> Self {
        self.clips = Box::new(provider);
        self
    }

    /// Replace the border renderer
    pub fn with_border_renderer(mut self, renderer: impl BorderRenderer + 'static) -> Self {
        self.borders = Box::new(renderer);
        self
    }

    /// Render one box.
    ///
    /// Returns an empty string for `display: none`. The only suspension point is the
    /// resolution of background layers; a failing layer fails the whole box.
    pub async fn render(
        &self,
        geometry: &BoxGeometry,
        style: &Style,
        inherited: &InheritedContext,
    ) -> Result<String, RenderError> {
        if style.is_hidden() {
            trace!(id = %geometry.id, "skipping box with display: none");
            return Ok(String::new());
        }

        debug!(
            id = %geometry.id,
            width = geometry.width,
            height = geometry.height,
            image = geometry.is_image(),
            inheriting_transform = geometry.is_inheriting_transform,
            "rendering box"
        );

        let rect = geometry.rect();
        let mut markup = BoxMarkup::new();

        let mut fills = resolve_fills(style);

        let opacity = resolve_opacity(style, &geometry.id);
        markup.set_opacity(opacity);

        let path = self.radius.path(&rect, style);
        let kind = if path.is_some() {
            ShapeKind::Path
        } else {
            ShapeKind::Rect
        };

        let matrices = box_matrices(
            rect,
            style,
            geometry.is_image(),
            inherited.parent_scale,
            path.is_some(),
        );
        let matrix = matrices.primary.to_attr();
        let border_matrix = matrices.border.to_attr();

        for layer in self.background_layers(geometry, style, kind).await? {
            fills.push(format!("url(#{})", layer.fill_id));
            markup.add_defs(&layer.defs);
            if let Some(shapes) = &layer.shapes {
                markup.add_background_shapes(shapes);
            }
        }

        let clip_path = self.resolve_clip_path(geometry, style, inherited);

        markup.set_clip(self.clips.overflow(
            &OverflowRequest {
                id: &geometry.id,
                rect,
                path: path.as_deref(),
                matrix: matrix.as_deref(),
                clip_path: clip_path.as_deref(),
                src: geometry.src.as_deref(),
            },
            style,
        ));

        let filter = style.filter.as_ref().map(|f| format!("filter:{}", f));
        for fill in &fills {
            let shape = outline(kind, rect, path.as_deref())
                .attr("fill", fill)
                .opt_attr("transform", matrix.as_deref())
                .opt_attr("clip-path", clip_path.as_deref())
                .opt_attr("style", filter.as_deref())
                .build();
            markup.add_shape(&shape);
        }

        let border_clip = self.clips.border_clip(
            &BorderClipRequest {
                id: &geometry.id,
                rect,
                clip_path_id: inherited.clip_path_id.as_deref(),
                path: path.as_deref(),
                kind,
            },
            style,
        );
        if let Some((defs, _)) = &border_clip {
            markup.add_defs(defs);
        }

        if let Some(src) = &geometry.src {
            let image = image_element(
                src,
                rect,
                style,
                matrix.as_deref(),
                filter.as_deref(),
                clip_path.as_deref(),
            );
            markup.add_shape(&image);
        }

        if let Some((_, border_clip_id)) = &border_clip {
            // Never the general clip: with `background-clip: text` the border still
            // renders at full width.
            let ring = format!("url(#{})", border_clip_id);
            markup.add_shape(&self.borders.border(
                &BorderRequest {
                    rect,
                    path: path.as_deref(),
                    transform: border_matrix.as_deref(),
                    clip_path: &ring,
                },
                style,
            ));
        }

        let silhouette = outline(kind, rect, path.as_deref())
            .attr("fill", "#fff")
            .attr("stroke", "#fff")
            .attr("stroke-width", 0.0)
            .opt_attr("clip-path", clip_path.as_deref())
            .build();
        markup.set_shadow(self.shadows.shadow(
            &ShadowRequest {
                id: &geometry.id,
                rect,
                opacity,
                shape: silhouette,
                kind,
            },
            style,
        ));

        if geometry.debug {
            markup.set_debug(
                XmlElement::new("rect")
                    .attr("x", 0.0)
                    .attr("y", 0.0)
                    .attr("width", rect.width)
                    .attr("height", rect.height)
                    .attr("fill", "transparent")
                    .attr("stroke", &self.config.debug_stroke)
                    .attr("stroke-width", self.config.debug_stroke_width)
                    .opt_attr("transform", matrix.as_deref())
                    .opt_attr("clip-path", inherited.clip_path_ref())
                    .build(),
            );
        }

        Ok(markup.build())
    }

    /// Resolve every background layer in declaration order, returned in paint order
    async fn background_layers(
        &self,
        geometry: &BoxGeometry,
        style: &Style,
        kind: ShapeKind,
    ) -> Result<Vec<BackgroundLayer>, RenderError> {
        let Some(images) = &style.background_image else {
            return Ok(vec![]);
        };

        let mut layers = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let request = LayerRequest {
                id: format!("{}_{}", geometry.id, index),
                rect: geometry.rect(),
                kind,
            };
            // Sequential on purpose: positions in the fill list follow declaration order
            if let Some(layer) = self.backgrounds.layer(request, image).await? {
                trace!(id = %geometry.id, index, fill = %layer.fill_id, "resolved background layer");
                layers.push(layer);
            }
        }

        Ok(paint_order(layers))
    }

    /// Clip reference for every shape of the box, highest priority first:
    /// explicit `clip-path`, `background-clip: text`, inherited clip.
    fn resolve_clip_path(
        &self,
        geometry: &BoxGeometry,
        style: &Style,
        inherited: &InheritedContext,
    ) -> Option<String> {
        if let Some(clip_path) = style
            .clip_path
            .as_deref()
            .filter(|cp| !cp.is_empty() && *cp != "none")
        {
            return Some(clip_path.replace('"', "'"));
        }
        if style.background_clip == Some(BackgroundClip::Text) {
            return Some(format!("url(#{})", self.ids.text_clip(&geometry.id)));
        }
        inherited.clip_path_ref()
    }
}

/// The first declared background image is painted on top, so layers are emitted
/// last-declared first.
fn paint_order(mut layers: Vec<BackgroundLayer>) -> Vec<BackgroundLayer> {
    layers.reverse();
    layers
}

fn is_transparent_black(color: &str) -> bool {
    color
        .chars()
        .filter(|c| !c.is_whitespace())
        .eq("rgba(0,0,0,0)".chars())
}

/// Background colour fill; fully transparent black still takes a paint slot as `none`
fn resolve_fills(style: &Style) -> Vec<String> {
    style
        .background_color
        .iter()
        .filter(|color| !color.is_empty())
        .map(|color| {
            if is_transparent_black(color) {
                "none".to_string()
            } else {
                color.clone()
            }
        })
        .collect()
}

fn resolve_opacity(style: &Style, id: &str) -> f64 {
    match style.opacity {
        Some(opacity) if opacity.is_finite() => opacity,
        Some(opacity) => {
            warn!(id, opacity, "ignoring non-finite opacity");
            1.0
        }
        None => 1.0,
    }
}

/// Untransformed outline of the box as a `rect` or `path` element
fn outline(kind: ShapeKind, rect: BoxRect, path: Option<&str>) -> XmlElement {
    let element = XmlElement::new(kind.tag());
    match path {
        Some(d) if kind == ShapeKind::Path => element.attr("d", d),
        _ => element
            .attr("x", 0.0)
            .attr("y", 0.0)
            .attr("width", rect.width)
            .attr("height", rect.height),
    }
}

/// Image content, inset by border and padding.
///
/// Width and height only subtract the right and bottom insets while x and y add the
/// left and top ones. Renderers downstream depend on this sizing.
fn image_element(
    src: &str,
    rect: BoxRect,
    style: &Style,
    matrix: Option<&str>,
    filter: Option<&str>,
    clip_path: Option<&str>,
) -> String {
    XmlElement::new("image")
        .attr("x", style.content_inset(Side::Left))
        .attr("y", style.content_inset(Side::Top))
        .attr("width", rect.width - style.content_inset(Side::Right))
        .attr("height", rect.height - style.content_inset(Side::Bottom))
        .attr("href", src)
        .attr(
            "preserveAspectRatio",
            ObjectFit::preserve_aspect_ratio(style.object_fit),
        )
        .opt_attr("transform", matrix)
        .opt_attr("style", filter)
        .opt_attr("clip-path", clip_path)
        .build()
}
