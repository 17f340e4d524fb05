//! Standalone SVG documents around a rendered fragment

use crate::config::DocumentConfig;
use crate::geometry::BoxGeometry;

/// Wrap a fragment in an `<svg>` root whose viewBox covers the box plus padding
pub fn wrap_document(fragment: &str, geometry: &BoxGeometry, config: &DocumentConfig) -> String {
    let padding = config.padding;
    let vb_x = geometry.left - padding;
    let vb_y = geometry.top - padding;
    let vb_w = geometry.width + 2.0 * padding;
    let vb_h = geometry.height + 2.0 * padding;

    let mut svg = String::new();

    if config.standalone {
        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        vb_w, vb_h, vb_x, vb_y, vb_w, vb_h
    ));
    svg.push_str(fragment);
    svg.push_str("</svg>");
    svg
}
