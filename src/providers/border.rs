//! Border strokes

use crate::path::{Point, ResolvedPath};
use crate::style::{BorderSide, BorderStyle, Side, Style};
use crate::xml::XmlElement;

use super::{BorderRenderer, BorderRequest};

/// Default [`BorderRenderer`].
///
/// A uniform border is one stroke of twice the border width along the box outline;
/// the border-ring clip cuts away the outer half. Mixed borders are drawn as one
/// filled trapezoid per side.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeBorder;

impl BorderRenderer for StrokeBorder {
    fn border(&self, request: &BorderRequest<'_>, style: &Style) -> String {
        let sides = Side::ALL.map(|side| style.border_side(side));
        if !sides.iter().any(BorderSide::is_painted) {
            return String::new();
        }

        if sides.iter().all(|s| *s == sides[0]) {
            uniform_border(request, &sides[0])
        } else {
            per_side_border(request, &sides)
        }
    }
}

fn dash_array(side: &BorderSide) -> Option<String> {
    let w = side.width;
    match side.style {
        BorderStyle::Dashed => Some(format!("{} {}", w * 2.0, w)),
        BorderStyle::Dotted => Some(format!("{} {}", w, w)),
        _ => None,
    }
}

fn uniform_border(request: &BorderRequest<'_>, side: &BorderSide) -> String {
    let rect = request.rect;
    let element = match request.path {
        Some(d) => XmlElement::new("path").attr("d", d),
        None => XmlElement::new("rect")
            .attr("x", rect.left)
            .attr("y", rect.top)
            .attr("width", rect.width)
            .attr("height", rect.height),
    };
    element
        .attr("fill", "none")
        .attr("stroke", &side.color)
        .attr("stroke-width", side.width * 2.0)
        .opt_attr("stroke-dasharray", dash_array(side))
        .opt_attr("transform", request.transform)
        .attr("clip-path", request.clip_path)
        .build()
}

fn per_side_border(request: &BorderRequest<'_>, sides: &[BorderSide; 4]) -> String {
    let rect = request.rect;
    let (l, t, r, b) = (rect.left, rect.top, rect.right(), rect.bottom());
    let [top, right, bottom, left] = sides;
    let (wt, wr, wb, wl) = (top.width, right.width, bottom.width, left.width);

    let outlines = [
        (
            top,
            [
                Point::new(l, t),
                Point::new(r, t),
                Point::new(r - wr, t + wt),
                Point::new(l + wl, t + wt),
            ],
        ),
        (
            right,
            [
                Point::new(r, t),
                Point::new(r, b),
                Point::new(r - wr, b - wb),
                Point::new(r - wr, t + wt),
            ],
        ),
        (
            bottom,
            [
                Point::new(r, b),
                Point::new(l, b),
                Point::new(l + wl, b - wb),
                Point::new(r - wr, b - wb),
            ],
        ),
        (
            left,
            [
                Point::new(l, b),
                Point::new(l, t),
                Point::new(l + wl, t + wt),
                Point::new(l + wl, b - wb),
            ],
        ),
    ];

    let body: String = outlines
        .iter()
        .filter(|(side, _)| side.is_painted())
        .map(|(side, points)| {
            XmlElement::new("path")
                .attr("d", ResolvedPath::polygon(points).to_svg_d())
                .attr("fill", &side.color)
                .build()
        })
        .collect();

    XmlElement::new("g")
        .opt_attr("transform", request.transform)
        .attr("clip-path", request.clip_path)
        .children(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxGeometry;
    use pretty_assertions::assert_eq;

    fn request<'a>(path: Option<&'a str>, transform: Option<&'a str>) -> BorderRequest<'a> {
        BorderRequest {
            rect: BoxGeometry::new("b", 10.0, 10.0, 100.0, 50.0).rect(),
            path,
            transform,
            clip_path: "url(#bx_bc-b)",
        }
    }

    fn uniform(width: f64) -> Style {
        Style {
            border_top_width: Some(width),
            border_right_width: Some(width),
            border_bottom_width: Some(width),
            border_left_width: Some(width),
            color: Some("blue".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_border() {
        assert_eq!(StrokeBorder.border(&request(None, None), &Style::default()), "");
    }

    #[test]
    fn test_uniform_border_is_one_doubled_stroke() {
        let markup = StrokeBorder.border(&request(None, Some("scale(2)")), &uniform(2.0));
        assert_eq!(
            markup,
            r##"<rect x="10" y="10" width="100" height="50" fill="none" stroke="blue" stroke-width="4" transform="scale(2)" clip-path="url(#bx_bc-b)"/>"##
        );
    }

    #[test]
    fn test_uniform_border_follows_radius_path() {
        let markup = StrokeBorder.border(&request(Some("M0 0 Z"), None), &uniform(1.0));
        assert!(markup.starts_with(r#"<path d="M0 0 Z" fill="none""#));
    }

    #[test]
    fn test_dashed_border() {
        let mut style = uniform(2.0);
        for s in [
            &mut style.border_top_style,
            &mut style.border_right_style,
            &mut style.border_bottom_style,
            &mut style.border_left_style,
        ] {
            *s = Some(BorderStyle::Dashed);
        }
        let markup = StrokeBorder.border(&request(None, None), &style);
        assert!(markup.contains(r#"stroke-dasharray="4 2""#));
    }

    #[test]
    fn test_mixed_border_draws_painted_sides_only() {
        let style = Style {
            border_top_width: Some(4.0),
            border_top_color: Some("red".to_string()),
            border_left_width: Some(2.0),
            ..Default::default()
        };
        let markup = StrokeBorder.border(&request(None, None), &style);
        assert!(markup.starts_with(r##"<g clip-path="url(#bx_bc-b)"><path d="M10 10 L110 10 L110 14 L12 14 Z" fill="red"/>"##));
        assert!(markup.contains(r#"fill="black""#));
        assert_eq!(markup.matches("<path").count(), 2);
    }
}
