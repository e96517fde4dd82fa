//! Geometry payloads
//!
//! Plain value types; no units are attached, callers decide whether a
//! coordinate is in spatium or raster space.

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_null(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// A 2D extent
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

impl SizeF {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Horizontal and vertical scale factors
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleF {
    pub width: f64,
    pub height: f64,
}

impl ScaleF {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for ScaleF {
    fn default() -> Self {
        ScaleF::new(1.0, 1.0)
    }
}

impl From<SizeF> for ScaleF {
    fn from(size: SizeF) -> Self {
        ScaleF::new(size.width, size.height)
    }
}

/// An ordered pair of reals (e.g. a range or a pair of offsets)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairF {
    pub first: f64,
    pub second: f64,
}

impl PairF {
    pub fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }
}

/// Kind of a painter path element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathElementKind {
    MoveTo,
    LineTo,
    CurveTo,
    /// Control point following a `CurveTo`
    CurveToData,
}

/// One element of a painter path
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathElement {
    pub kind: PathElementKind,
    pub x: f64,
    pub y: f64,
}

/// A vector outline built from move, line and cubic curve segments
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PainterPath {
    elements: Vec<PathElement>,
}

impl PainterPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.push(PathElementKind::MoveTo, x, y);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.push(PathElementKind::LineTo, x, y);
    }

    /// Cubic Bezier curve from the current point to `end`
    pub fn cubic_to(&mut self, c1: PointF, c2: PointF, end: PointF) {
        self.push(PathElementKind::CurveTo, c1.x, c1.y);
        self.push(PathElementKind::CurveToData, c2.x, c2.y);
        self.push(PathElementKind::CurveToData, end.x, end.y);
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn push(&mut self, kind: PathElementKind, x: f64, y: f64) {
        self.elements.push(PathElement { kind, x, y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_from_size() {
        assert_eq!(ScaleF::from(SizeF::new(2.0, 0.5)), ScaleF::new(2.0, 0.5));
        assert_eq!(ScaleF::default(), ScaleF::new(1.0, 1.0));
    }

    #[test]
    fn test_path_cubic_emits_three_elements() {
        let mut path = PainterPath::new();
        path.move_to(0.0, 0.0);
        path.cubic_to(PointF::new(1.0, 1.0), PointF::new(2.0, 1.0), PointF::new(3.0, 0.0));
        assert_eq!(path.elements().len(), 4);
        assert_eq!(path.elements()[1].kind, PathElementKind::CurveTo);
        assert_eq!(path.elements()[3].kind, PathElementKind::CurveToData);
    }
}
