//! Path geometry shared by the radius and border collaborators
//!
//! Paths are built from segments in absolute coordinates and serialized to an SVG
//! `d` attribute.

use crate::geometry::BoxRect;
use crate::xml::fmt_num;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A segment of a path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Elliptical arc to point; `sweep` is clockwise in SVG coordinates (y-down)
    ArcTo {
        end: Point,
        rx: f64,
        ry: f64,
        sweep: bool,
    },
    /// Close path back to start
    Close,
}

/// A path ready for SVG rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// Closed polygon through the given points
    pub fn polygon(points: &[Point]) -> Self {
        let mut segments = Vec::with_capacity(points.len() + 1);
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                segments.push(PathSegment::MoveTo(*p));
            } else {
                segments.push(PathSegment::LineTo(*p));
            }
        }
        if !segments.is_empty() {
            segments.push(PathSegment::Close);
        }
        Self { segments }
    }

    /// Rectangle with rounded corners.
    ///
    /// `radii` are top-left, top-right, bottom-right, bottom-left. A zero radius
    /// gives a sharp corner.
    pub fn rounded_rect(rect: BoxRect, radii: [f64; 4]) -> Self {
        let [tl, tr, br, bl] = radii;
        let (l, t, r, b) = (rect.left, rect.top, rect.right(), rect.bottom());
        let mut segments = vec![
            PathSegment::MoveTo(Point::new(l + tl, t)),
            PathSegment::LineTo(Point::new(r - tr, t)),
        ];
        push_corner(&mut segments, tr, Point::new(r, t + tr));
        segments.push(PathSegment::LineTo(Point::new(r, b - br)));
        push_corner(&mut segments, br, Point::new(r - br, b));
        segments.push(PathSegment::LineTo(Point::new(l + bl, b)));
        push_corner(&mut segments, bl, Point::new(l, b - bl));
        segments.push(PathSegment::LineTo(Point::new(l, t + tl)));
        push_corner(&mut segments, tl, Point::new(l + tl, t));
        segments.push(PathSegment::Close);
        Self { segments }
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();

        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => {
                    d.push_str(&format!("M{} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!("L{} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                PathSegment::ArcTo { end, rx, ry, sweep } => {
                    // A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                    d.push_str(&format!(
                        "A{} {} 0 0 {} {} {}",
                        fmt_num(*rx),
                        fmt_num(*ry),
                        if *sweep { 1 } else { 0 },
                        fmt_num(end.x),
                        fmt_num(end.y)
                    ));
                }
                PathSegment::Close => d.push('Z'),
            }
        }

        d
    }
}

fn push_corner(segments: &mut Vec<PathSegment>, radius: f64, end: Point) {
    if radius > 0.0 {
        segments.push(PathSegment::ArcTo {
            end,
            rx: radius,
            ry: radius,
            sweep: true,
        });
    }
}
