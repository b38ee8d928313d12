//! Line primitives shared by the shapes.
//!
//! - `lerp`, `cross`: component-wise interpolation and the 2D cross product.
//! - `Line`: parametric line through two points (`t=0` → `p0`, `t=1` → `p1`).
//! - `along_segments`: interpolation along a polyline by a single parameter.
//!
//! The surface formulas of `Triangle` and `Polygon` are written in terms of
//! `lerp`; point location in `ConcaveSurface` relies on those formulas being
//! evaluated identically everywhere, so keep the operation order stable.

use crate::Point;

/// `a + (b - a) * t`, component-wise.
#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Parametric line through `p0` (t=0) and `p1` (t=1).
///
/// Doubles as a segment for the `t ∈ [0,1]` predicates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
}

impl Line {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn at(&self, t: f64) -> Point {
        lerp(self.p0, self.p1, t)
    }

    #[inline]
    pub fn direction(&self) -> Point {
        self.p1 - self.p0
    }

    /// Parameters `(t_self, t_other)` of the intersection point.
    ///
    /// Returns `None` for parallel (including coincident) lines and when either
    /// line collapses to a point.
    pub fn intersection(&self, other: &Line) -> Option<(f64, f64)> {
        let (a0, b0) = (self.p0, other.p0);
        let da = self.direction();
        let db = other.direction();
        let d = cross(da, db);
        if d == 0.0 {
            return None;
        }
        let tb = (da.y * (b0.x - a0.x) + da.x * (a0.y - b0.y)) / d;
        if da.x != 0.0 {
            let ta = (b0.x + db.x * tb - a0.x) / da.x;
            return Some((ta, tb));
        }
        if da.y == 0.0 {
            return None;
        }
        let ta = (b0.y + db.y * tb - a0.y) / da.y;
        Some((ta, tb))
    }

    /// Segments cross at a point interior to both (endpoint contact excluded).
    #[inline]
    pub fn crosses(&self, other: &Line) -> bool {
        matches!(
            self.intersection(other),
            Some((ta, tb)) if ta > 0.0 && ta < 1.0 && tb > 0.0 && tb < 1.0
        )
    }

    /// Segments share a point, endpoints included. Parallel segments never touch.
    #[inline]
    pub fn touches(&self, other: &Line) -> bool {
        matches!(
            self.intersection(other),
            Some((ta, tb)) if (0.0..=1.0).contains(&ta) && (0.0..=1.0).contains(&tb)
        )
    }

    /// Closest point on the infinite line.
    pub fn closest(&self, p: Point) -> Point {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return self.p0;
        }
        self.at((p - self.p0).dot(&d) / len2)
    }

    /// Distance from `p` to the segment `p0..p1`.
    pub fn distance_to_segment(&self, p: Point) -> f64 {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return (p - self.p0).norm();
        }
        let t = ((p - self.p0).dot(&d) / len2).clamp(0.0, 1.0);
        (p - self.at(t)).norm()
    }
}

/// Position at `t ∈ [0,1]` along the polyline through `points`.
///
/// `t` is scaled by the segment count; the segment index is clamped, so values
/// outside [0,1] extrapolate the first or last segment. An empty slice yields
/// the origin, a single point yields that point.
pub fn along_segments(points: &[Point], t: f64) -> Point {
    match points.len() {
        0 => Point::zeros(),
        1 => points[0],
        n => {
            let ts = t * (n - 1) as f64;
            let ti = (ts as isize).clamp(0, n as isize - 2) as usize;
            lerp(points[ti], points[ti + 1], ts - ti as f64)
        }
    }
}
