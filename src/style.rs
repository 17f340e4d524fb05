//! Resolved style record for a single box
//!
//! Styles arrive already cascaded and computed by the layout pipeline. Only the
//! properties listed here are recognised; any other key in an input document is
//! ignored during deserialization.

use serde::Deserialize;

/// Computed `display` value. Only `none` changes rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    None,
    Flex,
    Block,
    Inline,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundClip {
    BorderBox,
    PaddingBox,
    ContentBox,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Contain,
    Cover,
    Fill,
    None,
    ScaleDown,
}

impl ObjectFit {
    /// `preserveAspectRatio` value for an `<image>` element
    pub fn preserve_aspect_ratio(fit: Option<ObjectFit>) -> &'static str {
        match fit {
            Some(ObjectFit::Contain) => "xMidYMid",
            Some(ObjectFit::Cover) => "xMidYMid slice",
            _ => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
    Hidden,
}

impl BorderStyle {
    pub fn is_visible(self) -> bool {
        !matches!(self, BorderStyle::None | BorderStyle::Hidden)
    }
}

/// One entry of a `transform` list, e.g. `{"translateX": 10}`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformOp {
    TranslateX(f64),
    TranslateY(f64),
    Scale(f64),
    ScaleX(f64),
    ScaleY(f64),
    /// Degrees
    Rotate(f64),
    SkewX(f64),
    SkewY(f64),
}

/// Resolved `transform-origin`
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOrigin {
    pub x_absolute: Option<f64>,
    pub y_absolute: Option<f64>,
    pub x_relative: Option<f64>,
    pub y_relative: Option<f64>,
}

impl TransformOrigin {
    /// Absolute pivot point, if either axis was given in absolute units
    pub fn absolute_pivot(&self) -> Option<(f64, f64)> {
        if self.x_absolute.is_none() && self.y_absolute.is_none() {
            return None;
        }
        Some((self.x_absolute.unwrap_or(0.0), self.y_absolute.unwrap_or(0.0)))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorStop {
    pub color: String,
    /// Position along the gradient line, 0..=1
    #[serde(default)]
    pub offset: Option<f64>,
}

/// What a background layer paints
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BackgroundSource {
    Url {
        src: String,
    },
    LinearGradient {
        /// CSS angle in degrees; 0 points up, 180 (the default) points down
        #[serde(default = "default_gradient_angle")]
        angle: f64,
        stops: Vec<ColorStop>,
    },
    RadialGradient {
        stops: Vec<ColorStop>,
    },
}

fn default_gradient_angle() -> f64 {
    180.0
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    #[default]
    Repeat,
    NoRepeat,
}

/// One declared `background-image` layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    pub image: BackgroundSource,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub repeat: BackgroundRepeat,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxShadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur_radius: f64,
    pub spread_radius: f64,
    pub color: String,
    pub inset: bool,
}

/// Computed style for one box
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    pub display: Option<Display>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub background_image: Option<Vec<BackgroundImage>>,
    pub background_clip: Option<BackgroundClip>,
    pub opacity: Option<f64>,
    pub transform: Option<Vec<TransformOp>>,
    pub transform_origin: Option<TransformOrigin>,
    pub clip_path: Option<String>,
    pub filter: Option<String>,
    pub overflow: Overflow,
    pub object_fit: Option<ObjectFit>,
    pub box_shadow: Vec<BoxShadow>,

    pub border_top_width: Option<f64>,
    pub border_right_width: Option<f64>,
    pub border_bottom_width: Option<f64>,
    pub border_left_width: Option<f64>,
    pub border_top_color: Option<String>,
    pub border_right_color: Option<String>,
    pub border_bottom_color: Option<String>,
    pub border_left_color: Option<String>,
    pub border_top_style: Option<BorderStyle>,
    pub border_right_style: Option<BorderStyle>,
    pub border_bottom_style: Option<BorderStyle>,
    pub border_left_style: Option<BorderStyle>,

    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,

    pub border_top_left_radius: Option<f64>,
    pub border_top_right_radius: Option<f64>,
    pub border_bottom_right_radius: Option<f64>,
    pub border_bottom_left_radius: Option<f64>,
}

/// A box side, in CSS order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Border properties for one side with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSide {
    pub width: f64,
    pub color: String,
    pub style: BorderStyle,
}

impl BorderSide {
    /// Whether this side paints anything
    pub fn is_painted(&self) -> bool {
        self.width > 0.0 && self.style.is_visible()
    }
}

impl Style {
    pub fn is_hidden(&self) -> bool {
        self.display == Some(Display::None)
    }

    pub fn border_width(&self, side: Side) -> f64 {
        let width = match side {
            Side::Top => self.border_top_width,
            Side::Right => self.border_right_width,
            Side::Bottom => self.border_bottom_width,
            Side::Left => self.border_left_width,
        };
        width.unwrap_or(0.0)
    }

    pub fn padding(&self, side: Side) -> f64 {
        let padding = match side {
            Side::Top => self.padding_top,
            Side::Right => self.padding_right,
            Side::Bottom => self.padding_bottom,
            Side::Left => self.padding_left,
        };
        padding.unwrap_or(0.0)
    }

    /// Border plus padding on one side, i.e. the distance to the content box
    pub fn content_inset(&self, side: Side) -> f64 {
        self.border_width(side) + self.padding(side)
    }

    /// Border of one side; colour falls back to `color`, then black
    pub fn border_side(&self, side: Side) -> BorderSide {
        let (color, style) = match side {
            Side::Top => (&self.border_top_color, self.border_top_style),
            Side::Right => (&self.border_right_color, self.border_right_style),
            Side::Bottom => (&self.border_bottom_color, self.border_bottom_style),
            Side::Left => (&self.border_left_color, self.border_left_style),
        };
        BorderSide {
            width: self.border_width(side),
            color: color
                .clone()
                .or_else(|| self.color.clone())
                .unwrap_or_else(|| "black".to_string()),
            style: style.unwrap_or_default(),
        }
    }

    /// Corner radii in top-left, top-right, bottom-right, bottom-left order
    pub fn corner_radii(&self) -> [f64; 4] {
        [
            self.border_top_left_radius.unwrap_or(0.0),
            self.border_top_right_radius.unwrap_or(0.0),
            self.border_bottom_right_radius.unwrap_or(0.0),
            self.border_bottom_left_radius.unwrap_or(0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_style() {
        let style: Style = serde_json::from_str(
            r#"{
                "display": "flex",
                "backgroundColor": "red",
                "opacity": 0.5,
                "borderTopWidth": 2,
                "objectFit": "cover",
                "backgroundClip": "text"
            }"#,
        )
        .unwrap();
        assert_eq!(style.display, Some(Display::Flex));
        assert_eq!(style.background_color.as_deref(), Some("red"));
        assert_eq!(style.opacity, Some(0.5));
        assert_eq!(style.border_width(Side::Top), 2.0);
        assert_eq!(style.object_fit, Some(ObjectFit::Cover));
        assert_eq!(style.background_clip, Some(BackgroundClip::Text));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let style: Style =
            serde_json::from_str(r#"{"fontSize": 12, "lineHeight": "1.2", "opacity": 1}"#)
                .unwrap();
        assert_eq!(style.opacity, Some(1.0));
    }

    #[test]
    fn test_unknown_display_value() {
        let style: Style = serde_json::from_str(r#"{"display": "contents"}"#).unwrap();
        assert_eq!(style.display, Some(Display::Other));
        assert!(!style.is_hidden());
    }

    #[test]
    fn test_transform_ops_deserialize_from_single_key_objects() {
        let style: Style = serde_json::from_str(
            r#"{"transform": [{"translateX": 10}, {"rotate": 45}, {"scaleY": 2}]}"#,
        )
        .unwrap();
        assert_eq!(
            style.transform,
            Some(vec![
                TransformOp::TranslateX(10.0),
                TransformOp::Rotate(45.0),
                TransformOp::ScaleY(2.0),
            ])
        );
    }

    #[test]
    fn test_background_image_deserialize() {
        let style: Style = serde_json::from_str(
            r#"{"backgroundImage": [
                {"image": {"type": "url", "src": "a.png"}, "repeat": "no-repeat"},
                {"image": {"type": "linear-gradient", "stops": [{"color": "red"}, {"color": "blue", "offset": 1}]}}
            ]}"#,
        )
        .unwrap();
        let layers = style.background_image.unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].repeat, BackgroundRepeat::NoRepeat);
        match &layers[1].image {
            BackgroundSource::LinearGradient { angle, stops } => {
                assert_eq!(*angle, 180.0);
                assert_eq!(stops.len(), 2);
                assert_eq!(stops[1].offset, Some(1.0));
            }
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn test_border_side_defaults() {
        let style = Style {
            border_left_width: Some(3.0),
            color: Some("green".to_string()),
            ..Default::default()
        };
        let left = style.border_side(Side::Left);
        assert_eq!(left.width, 3.0);
        assert_eq!(left.color, "green");
        assert_eq!(left.style, BorderStyle::Solid);
        assert!(left.is_painted());
        assert!(!style.border_side(Side::Top).is_painted());
        assert_eq!(Style::default().border_side(Side::Top).color, "black");
    }

    #[test]
    fn test_content_inset() {
        let style = Style {
            border_top_width: Some(2.0),
            padding_top: Some(5.0),
            ..Default::default()
        };
        assert_eq!(style.content_inset(Side::Top), 7.0);
        assert_eq!(style.content_inset(Side::Bottom), 0.0);
    }

    #[test]
    fn test_transform_origin_pivot() {
        let origin = TransformOrigin {
            x_absolute: Some(10.0),
            ..Default::default()
        };
        assert_eq!(origin.absolute_pivot(), Some((10.0, 0.0)));
        assert_eq!(TransformOrigin::default().absolute_pivot(), None);
    }

    #[test]
    fn test_preserve_aspect_ratio() {
        assert_eq!(
            ObjectFit::preserve_aspect_ratio(Some(ObjectFit::Contain)),
            "xMidYMid"
        );
        assert_eq!(
            ObjectFit::preserve_aspect_ratio(Some(ObjectFit::Cover)),
            "xMidYMid slice"
        );
        assert_eq!(ObjectFit::preserve_aspect_ratio(Some(ObjectFit::Fill)), "none");
        assert_eq!(ObjectFit::preserve_aspect_ratio(None), "none");
    }
}
