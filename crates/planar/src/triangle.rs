//! Triangles: containment, measures and the local parametric surface.

use std::ops::Index;

use crate::affine::Affine2;
use crate::error::GeomError;
use crate::line::{cross, lerp, Line};
use crate::shape::Shape;
use crate::Point;

/// Ordered triple of points. Winding is not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.0
    }

    /// Sides `v0→v1`, `v1→v2`, `v2→v0`.
    pub fn edges(&self) -> [Line; 3] {
        let [a, b, c] = self.0;
        [Line::new(a, b), Line::new(b, c), Line::new(c, a)]
    }

    /// Boundary-inclusive containment, independent of winding.
    ///
    /// Compares the signs of the edge × (p − vertex) cross products; an exact
    /// zero matches either sign.
    pub fn contains(&self, p: Point) -> bool {
        let [a, b, c] = self.0;
        let c1 = cross(a - b, p - b);
        let c2 = cross(b - c, p - c);
        if !(c1 >= 0.0 && c2 >= 0.0) && !(c1 <= 0.0 && c2 <= 0.0) {
            return false;
        }
        let c3 = cross(c - a, p - a);
        (c2 >= 0.0 && c3 >= 0.0) || (c2 <= 0.0 && c3 <= 0.0)
    }

    /// Positive for counterclockwise winding.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.0;
        0.5 * cross(a - b, a - c)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> f64 {
        let [a, b, c] = self.0;
        (a - b).norm() + (b - c).norm() + (c - a).norm()
    }

    /// Two thirds of the way from `v2` to the midpoint of the opposite side.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.0;
        let mid = (a + b) * 0.5;
        lerp(c, mid, 2.0 / 3.0)
    }

    /// Surface point for `(t0, t1) ∈ [0,1]²`.
    ///
    /// `t0` slides one end along `v0→mid(v0,v1)` and the other along `v2→v1`;
    /// `t1` interpolates between them. `ConcaveSurface` locates points produced
    /// by `Polygon::surface_point`, which shares the same `lerp` arithmetic.
    pub fn surface_point(&self, t0: f64, t1: f64) -> Point {
        let [a, b, c] = self.0;
        let m = lerp(a, b, 0.5);
        let p0 = lerp(a, m, t0);
        let p1 = lerp(c, b, t0);
        lerp(p0, p1, t1)
    }

    /// Point equidistant from all three vertices; `None` for collinear vertices.
    pub fn circumcenter(&self) -> Option<Point> {
        let [a, b, c] = self.0;
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d == 0.0 || !d.is_finite() {
            return None;
        }
        let (a2, b2, c2) = (a.norm_squared(), b.norm_squared(), c.norm_squared());
        let x = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let y = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
        Some(Point::new(x, y))
    }

    #[inline]
    pub fn circumradius(&self) -> Option<f64> {
        self.circumcenter().map(|o| (self.0[0] - o).norm())
    }

    /// Centre of the inscribed circle: vertices weighted by the length of the
    /// opposite side. `None` when all vertices coincide.
    pub fn incenter(&self) -> Option<Point> {
        let [a, b, c] = self.0;
        let (wa, wb, wc) = ((b - c).norm(), (c - a).norm(), (a - b).norm());
        let sum = wa + wb + wc;
        if sum == 0.0 || !sum.is_finite() {
            return None;
        }
        Some((a * wa + b * wb + c * wc) / sum)
    }

    /// `2·area / perimeter`; zero for collinear vertices.
    #[inline]
    pub fn inradius(&self) -> Option<f64> {
        let p = self.perimeter();
        (p > 0.0 && p.is_finite()).then(|| 2.0 * self.area() / p)
    }

    /// Image of the triangle under `f`.
    pub fn mapped(&self, f: &Affine2) -> Triangle {
        Triangle(self.0.map(|v| f.apply(v)))
    }
}

impl Index<usize> for Triangle {
    type Output = Point;

    #[inline]
    fn index(&self, i: usize) -> &Point {
        &self.0[i]
    }
}

impl From<[Point; 3]> for Triangle {
    fn from(v: [Point; 3]) -> Self {
        Self(v)
    }
}

impl Shape for Triangle {
    fn f(&self, t0: f64, t1: f64) -> Result<Point, GeomError> {
        Ok(self.surface_point(t0, t1))
    }
    fn area(&self) -> f64 {
        Triangle::area(self)
    }
    fn signed_area(&self) -> f64 {
        Triangle::signed_area(self)
    }
    fn perimeter(&self) -> f64 {
        Triangle::perimeter(self)
    }
    fn contains(&self, p: Point) -> bool {
        Triangle::contains(self, p)
    }
    fn centroid(&self) -> Point {
        Triangle::centroid(self)
    }
}
