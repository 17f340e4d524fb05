//! Rounded-corner outline from `border-*-radius`

use crate::geometry::BoxRect;
use crate::path::ResolvedPath;
use crate::style::Style;

use super::RadiusPathProvider;

/// Default [`RadiusPathProvider`]: circular corners, scaled down when they overlap
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundedCorners;

impl RadiusPathProvider for RoundedCorners {
    fn path(&self, rect: &BoxRect, style: &Style) -> Option<String> {
        let radii = style.corner_radii().map(|r| if r.is_finite() { r.max(0.0) } else { 0.0 });
        if radii.iter().all(|r| *r == 0.0) {
            return None;
        }
        let radii = fit_radii(rect, radii);
        Some(ResolvedPath::rounded_rect(*rect, radii).to_svg_d())
    }
}

/// Scale all radii by the same factor so adjacent corners never overlap.
fn fit_radii(rect: &BoxRect, radii: [f64; 4]) -> [f64; 4] {
    let [tl, tr, br, bl] = radii;
    let factor = [
        (rect.width, tl + tr),
        (rect.height, tr + br),
        (rect.width, br + bl),
        (rect.height, bl + tl),
    ]
    .iter()
    .filter(|(_, sum)| *sum > 0.0)
    .map(|(side, sum)| side.max(0.0) / sum)
    .fold(1.0_f64, f64::min);

    radii.map(|r| r * factor)
}
