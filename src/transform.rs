//! Transform resolution for a box
//!
//! A `transform` list is folded into one [`ResolvedTransform`] (later operations
//! replace earlier ones of the same kind) and then turned into two SVG transform
//! strings:
//!
//! - the **primary** matrix, used by fills, images and the debug outline. It always
//!   starts with a translation to the box position.
//! - the **border** matrix, which carries scale/rotate/skew only. Border geometry is
//!   emitted in absolute coordinates, so it must not be translated again.

use std::fmt;

use crate::geometry::BoxRect;
use crate::style::{Style, TransformOp};

/// All transform operations of a box, flattened
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedTransform {
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub rotate: Option<f64>,
    pub skew_x: Option<f64>,
    pub skew_y: Option<f64>,
}

impl ResolvedTransform {
    /// Fold an operation list; the last operation of each kind wins
    pub fn from_ops(ops: &[TransformOp]) -> Self {
        ops.iter().fold(Self::default(), |acc, op| acc.apply(*op))
    }

    fn apply(self, op: TransformOp) -> Self {
        match op {
            TransformOp::TranslateX(v) => Self {
                translate_x: Some(v),
                ..self
            },
            TransformOp::TranslateY(v) => Self {
                translate_y: Some(v),
                ..self
            },
            TransformOp::Scale(v) => Self {
                scale: Some(v),
                ..self
            },
            TransformOp::ScaleX(v) => Self {
                scale_x: Some(v),
                ..self
            },
            TransformOp::ScaleY(v) => Self {
                scale_y: Some(v),
                ..self
            },
            TransformOp::Rotate(v) => Self {
                rotate: Some(v),
                ..self
            },
            TransformOp::SkewX(v) => Self {
                skew_x: Some(v),
                ..self
            },
            TransformOp::SkewY(v) => Self {
                skew_y: Some(v),
                ..self
            },
        }
    }
}

/// A value counts as set only when it changes something; 0 and NaN do not.
fn effective(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// One SVG transform function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformItem {
    Translate(f64, f64),
    Scale(f64),
    ScaleXY(f64, f64),
    Rotate { angle: f64, pivot: Option<(f64, f64)> },
    SkewX(f64),
    SkewY(f64),
}

impl fmt::Display for TransformItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformItem::Translate(x, y) => write!(f, "translate({}, {})", x, y),
            TransformItem::Scale(s) => write!(f, "scale({})", s),
            TransformItem::ScaleXY(x, y) => write!(f, "scale({}, {})", x, y),
            TransformItem::Rotate { angle, pivot: None } => write!(f, "rotate({})", angle),
            TransformItem::Rotate {
                angle,
                pivot: Some((x, y)),
            } => write!(f, "rotate({}, {}, {})", angle, x, y),
            TransformItem::SkewX(a) => write!(f, "skewX({})", a),
            TransformItem::SkewY(a) => write!(f, "skewY({})", a),
        }
    }
}

/// An ordered list of transform functions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformList(Vec<TransformItem>);

impl TransformList {
    pub fn push(&mut self, item: TransformItem) {
        self.0.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The attribute value, or `None` for an empty list
    pub fn to_attr(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Primary and border transforms of a box
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxMatrices {
    pub primary: TransformList,
    pub border: TransformList,
}

/// Build the transforms for a box.
///
/// `has_path` tells whether the shape is a rounded-corner path. Such paths are
/// already in absolute coordinates, so without an explicit `transform` no
/// translation is added at all.
pub fn box_matrices(
    rect: BoxRect,
    style: &Style,
    is_image: bool,
    parent_scale: Option<f64>,
    has_path: bool,
) -> BoxMatrices {
    let mut matrices = BoxMatrices::default();

    let Some(ops) = &style.transform else {
        if !has_path {
            matrices
                .primary
                .push(TransformItem::Translate(rect.left, rect.top));
        }
        return matrices;
    };

    let resolved = ResolvedTransform::from_ops(ops);

    matrices.primary.push(TransformItem::Translate(
        finite_or_zero(resolved.translate_x) + rect.left,
        finite_or_zero(resolved.translate_y) + rect.top,
    ));

    let scale = if is_image {
        // Images take the ancestor's uniform scale, never their own
        effective(parent_scale).map(TransformItem::Scale)
    } else {
        match (effective(resolved.scale_x), effective(resolved.scale_y)) {
            (None, None) => effective(resolved.scale).map(TransformItem::Scale),
            // A missing axis collapses to 0 like any other missing sub-field
            (sx, sy) => Some(TransformItem::ScaleXY(sx.unwrap_or(0.0), sy.unwrap_or(0.0))),
        }
    };
    if let Some(scale) = scale {
        matrices.primary.push(scale);
        matrices.border.push(scale);
    }

    if let Some(angle) = effective(resolved.rotate) {
        let pivot = style
            .transform_origin
            .as_ref()
            .and_then(|origin| origin.absolute_pivot());
        let rotate = TransformItem::Rotate { angle, pivot };
        matrices.primary.push(rotate);
        matrices.border.push(rotate);
    }

    for skew in [
        effective(resolved.skew_x).map(TransformItem::SkewX),
        effective(resolved.skew_y).map(TransformItem::SkewY),
    ]
    .into_iter()
    .flatten()
    {
        matrices.primary.push(skew);
        matrices.border.push(skew);
    }

    matrices
}
