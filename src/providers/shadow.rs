//! `box-shadow` rendering with SVG filters

use crate::ids::DefIds;
use crate::style::{BoxShadow, Style};
use crate::xml::{fmt_num, XmlElement};

use super::{ShadowProvider, ShadowRequest, ShapeKind};

/// Default [`ShadowProvider`].
///
/// Outer shadows are blurred, offset copies of the silhouette drawn before the box.
/// Inset shadows are drawn after it, through a filter that keeps only the part of
/// the shadow inside the silhouette.
#[derive(Debug, Clone, Default)]
pub struct FilterShadows {
    ids: DefIds,
}

impl FilterShadows {
    pub fn new(ids: DefIds) -> Self {
        Self { ids }
    }
}

impl ShadowProvider for FilterShadows {
    fn shadow(&self, request: &ShadowRequest<'_>, style: &Style) -> Option<(String, String)> {
        if style.box_shadow.is_empty() {
            return None;
        }

        // Rect silhouettes sit at the local origin, path silhouettes are absolute
        let (base_x, base_y) = match request.kind {
            ShapeKind::Rect => (request.rect.left, request.rect.top),
            ShapeKind::Path => (0.0, 0.0),
        };

        let mut outer = Layers::default();
        let mut inset = Layers::default();

        // The first declared shadow is painted on top
        for (index, shadow) in style.box_shadow.iter().enumerate().rev() {
            let filter_id = self.ids.shadow(request.id, index);
            if shadow.inset {
                inset.defs.push_str(&inset_filter(&filter_id, shadow));
                inset.body.push_str(&filtered_shape(
                    &filter_id,
                    base_x,
                    base_y,
                    &request.shape,
                ));
            } else {
                outer.defs.push_str(&outer_filter(&filter_id, shadow));
                outer.body.push_str(&filtered_shape(
                    &filter_id,
                    base_x + shadow.offset_x,
                    base_y + shadow.offset_y,
                    &request.shape,
                ));
            }
        }

        Some((
            outer.finish(request.opacity),
            inset.finish(request.opacity),
        ))
    }
}

#[derive(Default)]
struct Layers {
    defs: String,
    body: String,
}

impl Layers {
    fn finish(self, opacity: f64) -> String {
        if self.body.is_empty() {
            return String::new();
        }
        let defs = XmlElement::new("defs").children(self.defs).build();
        let body = if opacity != 1.0 {
            XmlElement::new("g")
                .attr("opacity", opacity)
                .children(self.body)
                .build()
        } else {
            self.body
        };
        defs + &body
    }
}

fn shadow_color(shadow: &BoxShadow) -> &str {
    if shadow.color.is_empty() {
        "black"
    } else {
        &shadow.color
    }
}

fn filtered_shape(filter_id: &str, x: f64, y: f64, shape: &str) -> String {
    XmlElement::new("g")
        .attr("filter", format!("url(#{})", filter_id))
        .attr("transform", format!("translate({}, {})", x, y))
        .children(shape)
        .build()
}

fn filter_element(filter_id: &str, primitives: String) -> String {
    XmlElement::new("filter")
        .attr("id", filter_id)
        .attr("x", "-50%")
        .attr("y", "-50%")
        .attr("width", "200%")
        .attr("height", "200%")
        .children(primitives)
        .build()
}

fn outer_filter(filter_id: &str, shadow: &BoxShadow) -> String {
    let mut primitives = String::new();
    let mut source = "SourceAlpha";
    if shadow.spread_radius != 0.0 {
        let operator = if shadow.spread_radius > 0.0 {
            "dilate"
        } else {
            "erode"
        };
        primitives.push_str(
            &XmlElement::new("feMorphology")
                .attr("in", source)
                .attr("operator", operator)
                .attr("radius", shadow.spread_radius.abs())
                .attr("result", "spread")
                .build(),
        );
        source = "spread";
    }
    primitives.push_str(
        &XmlElement::new("feGaussianBlur")
            .attr("in", source)
            .attr("stdDeviation", fmt_num(shadow.blur_radius.max(0.0) / 2.0))
            .attr("result", "blur")
            .build(),
    );
    primitives.push_str(
        &XmlElement::new("feFlood")
            .attr("flood-color", shadow_color(shadow))
            .build(),
    );
    primitives.push_str(
        &XmlElement::new("feComposite")
            .attr("in2", "blur")
            .attr("operator", "in")
            .build(),
    );
    filter_element(filter_id, primitives)
}

fn inset_filter(filter_id: &str, shadow: &BoxShadow) -> String {
    let mut primitives = XmlElement::new("feOffset")
        .attr("in", "SourceAlpha")
        .attr("dx", shadow.offset_x)
        .attr("dy", shadow.offset_y)
        .attr("result", "offset")
        .build();
    let mut source = "offset";
    if shadow.spread_radius > 0.0 {
        primitives.push_str(
            &XmlElement::new("feMorphology")
                .attr("in", source)
                .attr("operator", "erode")
                .attr("radius", shadow.spread_radius)
                .attr("result", "spread")
                .build(),
        );
        source = "spread";
    }
    primitives.push_str(
        &XmlElement::new("feGaussianBlur")
            .attr("in", source)
            .attr("stdDeviation", fmt_num(shadow.blur_radius.max(0.0) / 2.0))
            .attr("result", "blur")
            .build(),
    );
    primitives.push_str(
        &XmlElement::new("feFlood")
            .attr("flood-color", shadow_color(shadow))
            .attr("result", "color")
            .build(),
    );
    primitives.push_str(
        &XmlElement::new("feComposite")
            .attr("in", "color")
            .attr("in2", "blur")
            .attr("operator", "out")
            .attr("result", "shadow")
            .build(),
    );
    primitives.push_str(
        &XmlElement::new("feComposite")
            .attr("in", "shadow")
            .attr("in2", "SourceAlpha")
            .attr("operator", "in")
            .build(),
    );
    filter_element(filter_id, primitives)
}
