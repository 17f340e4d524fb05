//! Overflow clipping and the border-ring clip

use crate::ids::DefIds;
use crate::style::{Overflow, Side, Style};
use crate::xml::XmlElement;

use super::{BorderClipRequest, ClipProvider, OverflowRequest, ShapeKind};

/// Default [`ClipProvider`].
///
/// For boxes that clip their content (`overflow` other than `visible`, and every
/// image box) it defines a clip path and a mask with the box outline for descendants
/// to reference. Image boxes clip to their content box.
#[derive(Debug, Clone, Default)]
pub struct OverflowClip {
    ids: DefIds,
}

impl OverflowClip {
    pub fn new(ids: DefIds) -> Self {
        Self { ids }
    }
}

impl ClipProvider for OverflowClip {
    fn overflow(&self, request: &OverflowRequest<'_>, style: &Style) -> String {
        if style.overflow == Overflow::Visible && request.src.is_none() {
            return String::new();
        }

        let shape = overflow_shape(request, style);

        let clip = XmlElement::new("clipPath")
            .attr("id", self.ids.overflow_clip(request.id))
            .opt_attr("clip-path", request.clip_path)
            .children(shape.clone().build())
            .build();

        let mask = XmlElement::new("mask")
            .attr("id", self.ids.overflow_mask(request.id))
            .children(shape.attr("fill", "#fff").build())
            .build();

        XmlElement::new("defs").children(clip + &mask).build()
    }

    fn border_clip(
        &self,
        request: &BorderClipRequest<'_>,
        style: &Style,
    ) -> Option<(String, String)> {
        let has_border = Side::ALL
            .iter()
            .any(|side| style.border_side(*side).is_painted());
        if !has_border {
            return None;
        }

        let rect = request.rect;
        // Borders are drawn without translation, so the ring is in absolute units
        let shape = match (request.kind, request.path) {
            (ShapeKind::Path, Some(d)) => XmlElement::new("path").attr("d", d).build(),
            _ => XmlElement::new("rect")
                .attr("x", rect.left)
                .attr("y", rect.top)
                .attr("width", rect.width)
                .attr("height", rect.height)
                .build(),
        };

        let id = self.ids.border_clip(request.id);
        let defs = XmlElement::new("clipPath")
            .attr("id", &id)
            .opt_attr(
                "clip-path",
                request.clip_path_id.map(|cp| format!("url(#{})", cp)),
            )
            .children(shape)
            .build();
        Some((defs, id))
    }
}

/// Outline clipped to: the content box for images, otherwise the box shape
fn overflow_shape(request: &OverflowRequest<'_>, style: &Style) -> XmlElement {
    let rect = request.rect;
    let element = match (request.src, request.path) {
        (None, Some(d)) => XmlElement::new("path").attr("d", d),
        _ => {
            let (x, y, width, height) = if request.src.is_some() {
                let left = style.content_inset(Side::Left);
                let top = style.content_inset(Side::Top);
                (
                    left,
                    top,
                    rect.width - left - style.content_inset(Side::Right),
                    rect.height - top - style.content_inset(Side::Bottom),
                )
            } else {
                (0.0, 0.0, rect.width, rect.height)
            };
            XmlElement::new("rect")
                .attr("x", x)
                .attr("y", y)
                .attr("width", width.max(0.0))
                .attr("height", height.max(0.0))
        }
    };
    element.opt_attr("transform", request.matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxGeometry;
    use pretty_assertions::assert_eq;

    fn overflow_request<'a>(src: Option<&'a str>, path: Option<&'a str>) -> OverflowRequest<'a> {
        OverflowRequest {
            id: "o",
            rect: BoxGeometry::new("o", 10.0, 20.0, 100.0, 50.0).rect(),
            path,
            matrix: Some("translate(10, 20)"),
            clip_path: None,
            src,
        }
    }

    #[test]
    fn test_visible_overflow_has_no_clip() {
        let markup = OverflowClip::default().overflow(&overflow_request(None, None), &Style::default());
        assert_eq!(markup, "");
    }

    #[test]
    fn test_hidden_overflow_defines_clip_and_mask() {
        let style = Style {
            overflow: Overflow::Hidden,
            ..Default::default()
        };
        let markup = OverflowClip::default().overflow(&overflow_request(None, None), &style);
        assert_eq!(
            markup,
            r##"<defs><clipPath id="bx_cp-o"><rect x="0" y="0" width="100" height="50" transform="translate(10, 20)"/></clipPath><mask id="bx_om-o"><rect x="0" y="0" width="100" height="50" transform="translate(10, 20)" fill="#fff"/></mask></defs>"##
        );
    }

    #[test]
    fn test_image_clips_to_content_box() {
        let style = Style {
            border_left_width: Some(2.0),
            padding_left: Some(3.0),
            padding_bottom: Some(10.0),
            ..Default::default()
        };
        let markup = OverflowClip::default().overflow(&overflow_request(Some("a.png"), None), &style);
        assert!(markup.contains(r#"<rect x="5" y="0" width="95" height="40""#));
    }

    #[test]
    fn test_rounded_overflow_uses_path() {
        let style = Style {
            overflow: Overflow::Hidden,
            ..Default::default()
        };
        let markup =
            OverflowClip::default().overflow(&overflow_request(None, Some("M0 0 Z")), &style);
        assert!(markup.contains(r#"<path d="M0 0 Z" transform="translate(10, 20)"/>"#));
        assert!(markup.contains(
            r##"<mask id="bx_om-o"><path d="M0 0 Z" transform="translate(10, 20)" fill="#fff"/></mask>"##
        ));
    }

    #[test]
    fn test_no_border_no_border_clip() {
        let request = BorderClipRequest {
            id: "b",
            rect: BoxGeometry::new("b", 0.0, 0.0, 10.0, 10.0).rect(),
            clip_path_id: None,
            path: None,
            kind: ShapeKind::Rect,
        };
        assert_eq!(OverflowClip::default().border_clip(&request, &Style::default()), None);
    }

    #[test]
    fn test_border_clip_is_absolute_and_inherits_clip() {
        let request = BorderClipRequest {
            id: "b",
            rect: BoxGeometry::new("b", 5.0, 6.0, 10.0, 10.0).rect(),
            clip_path_id: Some("outer"),
            path: None,
            kind: ShapeKind::Rect,
        };
        let style = Style {
            border_top_width: Some(1.0),
            ..Default::default()
        };
        let (defs, id) = OverflowClip::default().border_clip(&request, &style).unwrap();
        assert_eq!(id, "bx_bc-b");
        assert_eq!(
            defs,
            r##"<clipPath id="bx_bc-b" clip-path="url(#outer)"><rect x="5" y="6" width="10" height="10"/></clipPath>"##
        );
    }

    #[test]
    fn test_invisible_border_style_has_no_clip() {
        let request = BorderClipRequest {
            id: "b",
            rect: BoxGeometry::new("b", 0.0, 0.0, 10.0, 10.0).rect(),
            clip_path_id: None,
            path: None,
            kind: ShapeKind::Rect,
        };
        let style = Style {
            border_top_width: Some(1.0),
            border_top_style: Some(crate::style::BorderStyle::None),
            ..Default::default()
        };
        assert_eq!(OverflowClip::default().border_clip(&request, &style), None);
    }
}
