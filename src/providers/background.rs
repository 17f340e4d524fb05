//! Paint servers for `background-image` layers

use futures::future::{BoxFuture, FutureExt};

use crate::error::ProviderError;
use crate::ids::DefIds;
use crate::style::{BackgroundImage, BackgroundRepeat, BackgroundSource, ColorStop};
use crate::xml::{fmt_num, XmlElement};

use super::{BackgroundLayer, BackgroundLayerProvider, LayerRequest, ShapeKind};

/// Default [`BackgroundLayerProvider`].
///
/// Images become `<pattern>` tiles referencing `src` directly; gradients become
/// `<linearGradient>`/`<radialGradient>`. No layer needs extra shapes.
#[derive(Debug, Clone, Default)]
pub struct PaintServerLayers {
    ids: DefIds,
}

impl PaintServerLayers {
    pub fn new(ids: DefIds) -> Self {
        Self { ids }
    }

    fn resolve(
        &self,
        request: &LayerRequest,
        image: &BackgroundImage,
    ) -> Result<Option<BackgroundLayer>, ProviderError> {
        let fill_id = self.ids.background(&request.id);
        let defs = match &image.image {
            BackgroundSource::Url { src } => {
                if src.trim().is_empty() {
                    return Err(ProviderError::unsupported_background(
                        &request.id,
                        "empty image source",
                    ));
                }
                image_pattern(&fill_id, request, image, src)
            }
            BackgroundSource::LinearGradient { angle, stops } => {
                let (x1, y1, x2, y2) = gradient_line(*angle);
                XmlElement::new("linearGradient")
                    .attr("id", &fill_id)
                    .attr("x1", fmt_num(x1))
                    .attr("y1", fmt_num(y1))
                    .attr("x2", fmt_num(x2))
                    .attr("y2", fmt_num(y2))
                    .children(gradient_stops(&request.id, stops)?)
                    .build()
            }
            BackgroundSource::RadialGradient { stops } => XmlElement::new("radialGradient")
                .attr("id", &fill_id)
                .attr("cx", "0.5")
                .attr("cy", "0.5")
                .attr("r", "0.5")
                .children(gradient_stops(&request.id, stops)?)
                .build(),
        };

        Ok(Some(BackgroundLayer {
            fill_id,
            defs,
            shapes: None,
        }))
    }
}

impl BackgroundLayerProvider for PaintServerLayers {
    fn layer<'a>(
        &'a self,
        request: LayerRequest,
        image: &'a BackgroundImage,
    ) -> BoxFuture<'a, Result<Option<BackgroundLayer>, ProviderError>> {
        async move { self.resolve(&request, image) }.boxed()
    }
}

fn image_pattern(
    fill_id: &str,
    request: &LayerRequest,
    image: &BackgroundImage,
    src: &str,
) -> String {
    let rect = request.rect;
    // Rect fills sit at the local origin under the box translation, path fills
    // are absolute, so the tile grid has to start at the box corner.
    let (origin_x, origin_y) = match request.kind {
        ShapeKind::Rect => (0.0, 0.0),
        ShapeKind::Path => (rect.left, rect.top),
    };
    let (width, height) = image
        .size
        .map(|s| (s.width, s.height))
        .unwrap_or((rect.width, rect.height));

    // A repeating tile is offset by the position; a single image sits inside one
    // tile that is large enough to never repeat within the box.
    let (pattern_x, pattern_y, tile_w, tile_h, image_x, image_y) = match image.repeat {
        BackgroundRepeat::Repeat => (image.position.x, image.position.y, width, height, 0.0, 0.0),
        BackgroundRepeat::NoRepeat => (
            0.0,
            0.0,
            rect.width.max(image.position.x + width),
            rect.height.max(image.position.y + height),
            image.position.x,
            image.position.y,
        ),
    };

    let tile = XmlElement::new("image")
        .attr("x", image_x)
        .attr("y", image_y)
        .attr("width", width)
        .attr("height", height)
        .attr("preserveAspectRatio", "none")
        .attr("href", src)
        .build();

    XmlElement::new("pattern")
        .attr("id", fill_id)
        .attr("patternUnits", "userSpaceOnUse")
        .attr("x", origin_x + pattern_x)
        .attr("y", origin_y + pattern_y)
        .attr("width", tile_w)
        .attr("height", tile_h)
        .children(tile)
        .build()
}

/// Endpoints of a gradient line in bounding-box units for a CSS angle
fn gradient_line(angle: f64) -> (f64, f64, f64, f64) {
    let radians = angle.to_radians();
    let dx = radians.sin() / 2.0;
    let dy = -radians.cos() / 2.0;
    (0.5 - dx, 0.5 - dy, 0.5 + dx, 0.5 + dy)
}

fn gradient_stops(layer_id: &str, stops: &[ColorStop]) -> Result<String, ProviderError> {
    if stops.is_empty() {
        return Err(ProviderError::unsupported_background(
            layer_id,
            "gradient without color stops",
        ));
    }
    let last = (stops.len() - 1).max(1) as f64;
    Ok(stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let offset = stop.offset.unwrap_or(i as f64 / last).clamp(0.0, 1.0);
            XmlElement::new("stop")
                .attr("offset", fmt_num(offset))
                .attr("stop-color", &stop.color)
                .build()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxGeometry;
    use crate::style::{Position, Size};
    use futures::executor::block_on;

    fn request() -> LayerRequest {
        LayerRequest {
            id: "a_0".to_string(),
            rect: BoxGeometry::new("a", 0.0, 0.0, 100.0, 50.0).rect(),
            kind: ShapeKind::Rect,
        }
    }

    fn layer(source: BackgroundSource) -> BackgroundImage {
        BackgroundImage {
            image: source,
            size: None,
            position: Position::default(),
            repeat: BackgroundRepeat::Repeat,
        }
    }

    fn stops(colors: &[&str]) -> Vec<ColorStop> {
        colors
            .iter()
            .map(|c| ColorStop {
                color: c.to_string(),
                offset: None,
            })
            .collect()
    }

    #[test]
    fn test_linear_gradient_top_to_bottom() {
        let image = layer(BackgroundSource::LinearGradient {
            angle: 180.0,
            stops: stops(&["red", "blue"]),
        });
        let resolved = block_on(PaintServerLayers::default().layer(request(), &image))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.fill_id, "bx_bg-a_0");
        assert_eq!(
            resolved.defs,
            r#"<linearGradient id="bx_bg-a_0" x1="0.5" y1="0" x2="0.5" y2="1"><stop offset="0" stop-color="red"/><stop offset="1" stop-color="blue"/></linearGradient>"#
        );
        assert_eq!(resolved.shapes, None);
    }

    #[test]
    fn test_gradient_line_to_right() {
        let (x1, y1, x2, y2) = gradient_line(90.0);
        assert_eq!(fmt_num(x1), "0");
        assert_eq!(fmt_num(y1), "0.5");
        assert_eq!(fmt_num(x2), "1");
        assert_eq!(fmt_num(y2), "0.5");
    }

    #[test]
    fn test_stops_are_distributed() {
        let markup = gradient_stops("a_0", &stops(&["red", "green", "blue"])).unwrap();
        assert!(markup.contains(r#"offset="0.5" stop-color="green""#));
    }

    #[test]
    fn test_empty_stops_are_an_error() {
        let image = layer(BackgroundSource::RadialGradient { stops: vec![] });
        let result = block_on(PaintServerLayers::default().layer(request(), &image));
        assert!(matches!(
            result,
            Err(ProviderError::UnsupportedBackground { .. })
        ));
    }

    #[test]
    fn test_url_pattern_repeats_at_image_size() {
        let mut image = layer(BackgroundSource::Url {
            src: "tile.png".to_string(),
        });
        image.size = Some(Size {
            width: 10.0,
            height: 20.0,
        });
        let resolved = block_on(PaintServerLayers::default().layer(request(), &image))
            .unwrap()
            .unwrap();
        assert_eq!(
            resolved.defs,
            r#"<pattern id="bx_bg-a_0" patternUnits="userSpaceOnUse" x="0" y="0" width="10" height="20"><image x="0" y="0" width="10" height="20" preserveAspectRatio="none" href="tile.png"/></pattern>"#
        );
    }

    #[test]
    fn test_url_pattern_no_repeat_covers_box() {
        let mut image = layer(BackgroundSource::Url {
            src: "logo.png".to_string(),
        });
        image.repeat = BackgroundRepeat::NoRepeat;
        image.size = Some(Size {
            width: 10.0,
            height: 10.0,
        });
        image.position = Position { x: 5.0, y: 5.0 };
        let resolved = block_on(PaintServerLayers::default().layer(request(), &image))
            .unwrap()
            .unwrap();
        assert!(resolved
            .defs
            .contains(r#"x="0" y="0" width="100" height="50""#));
        assert!(resolved.defs.contains(r#"<image x="5" y="5" width="10""#));
    }

    #[test]
    fn test_url_pattern_on_path_starts_at_box_corner() {
        let mut image = layer(BackgroundSource::Url {
            src: "logo.png".to_string(),
        });
        image.repeat = BackgroundRepeat::NoRepeat;
        let request = LayerRequest {
            id: "a_0".to_string(),
            rect: BoxGeometry::new("a", 50.0, 40.0, 100.0, 60.0).rect(),
            kind: ShapeKind::Path,
        };
        let resolved = block_on(PaintServerLayers::default().layer(request, &image))
            .unwrap()
            .unwrap();
        assert!(resolved
            .defs
            .contains(r#"patternUnits="userSpaceOnUse" x="50" y="40" width="100" height="60""#));
        assert!(resolved.defs.contains(r#"<image x="0" y="0" width="100" height="60""#));
    }

    #[test]
    fn test_empty_src_is_an_error() {
        let image = layer(BackgroundSource::Url { src: " ".to_string() });
        let result = block_on(PaintServerLayers::default().layer(request(), &image));
        assert!(result.is_err());
    }
}
