//! Simple polygons (implicitly closed vertex rings).
//!
//! Purpose
//! - Whole-polygon measures valid for concave input: shoelace area, centroid,
//!   perimeter, ray-casting containment.
//! - The convex fill surface `surface_point(t0, t1)`, which is also the parameter
//!   space proxy for `ConcaveSurface` (on a regular polygon).
//! - Constructors (rectangles, regular polygons, polar-angle ordering) and the
//!   ear-removal triangulator in `triangulate.rs`.
//!
//! Conventions
//! - Side `i` runs from vertex `i` to vertex `(i + 1) % n`.
//! - At least three vertices are enforced on construction; simplicity is only
//!   checked by `triangulate` (and on demand by `is_simple`).

mod triangulate;

use crate::error::{GeomError, Malformation};
use crate::line::{along_segments, cross, lerp, Line};
use crate::shape::Shape;
use crate::triangle::Triangle;
use crate::Point;

/// Vertex indices of one triangle, valid for the polygon that produced them.
pub type TriangleIndices = [usize; 3];

/// Ordered ring of at least three points.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Takes ownership of the vertex ring.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeomError> {
        if vertices.len() < 3 {
            return Err(Malformation::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices })
    }

    /// Copies `vertices`; later changes to the caller's buffer do not leak in.
    #[inline]
    pub fn from_slice(vertices: &[Point]) -> Result<Self, GeomError> {
        Self::new(vertices.to_vec())
    }

    /// Orders `points` by polar angle around their mean.
    ///
    /// Correct for star-shaped point sets whose mean lies in the kernel; a
    /// crescent, for instance, comes out self-intersecting.
    pub fn from_unordered(points: &[Point]) -> Result<Self, GeomError> {
        if points.len() < 3 {
            return Err(Malformation::TooFewVertices {
                count: points.len(),
            }
            .into());
        }
        let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
        let mean = sum / points.len() as f64;
        let mut keyed: Vec<(f64, Point)> = points
            .iter()
            .map(|&p| {
                let d = p - mean;
                (d.y.atan2(d.x), p)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self::new(keyed.into_iter().map(|(_, p)| p).collect())
    }

    /// Axis-aligned rectangle with opposite corners `p1` and `p2`.
    pub fn rectangle(p1: Point, p2: Point) -> Self {
        Self {
            vertices: vec![p1, Point::new(p2.x, p1.y), p2, Point::new(p1.x, p2.y)],
        }
    }

    /// Axis-aligned rectangle from one corner and signed extents.
    pub fn rectangle_at(corner: Point, width: f64, length: f64) -> Self {
        Self::rectangle(corner, corner + Point::new(width, length))
    }

    /// Regular polygon with circumradius `radius`; vertex 0 sits at polar angle
    /// `angle` around `center`, the rest follow counterclockwise.
    pub fn regular(
        center: Point,
        radius: f64,
        angle: f64,
        sides: usize,
    ) -> Result<Self, GeomError> {
        let da = std::f64::consts::TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let a = angle + da * i as f64;
                center + Point::new(a.cos() * radius, a.sin() * radius)
            })
            .collect();
        Self::new(vertices)
    }

    /// Regular polygon with the given side length, rotated back by half a step
    /// so that for `angle = 0` the first side crosses the positive x axis
    /// perpendicularly.
    pub fn regular_with_side(
        center: Point,
        side: f64,
        angle: f64,
        sides: usize,
    ) -> Result<Self, GeomError> {
        let half_step = std::f64::consts::PI / sides as f64;
        let radius = 0.5 * side / half_step.sin();
        Self::regular(center, radius, angle - half_step, sides)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Side `i`, from vertex `i` to vertex `i + 1` (wrapping).
    #[inline]
    pub fn side(&self, i: usize) -> Line {
        let n = self.vertices.len();
        Line::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    pub fn sides(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.vertices.len()).map(move |i| self.side(i))
    }

    /// Shoelace formula; positive for counterclockwise rings.
    pub fn signed_area(&self) -> f64 {
        let mut s = 0.0;
        let mut prev = self.vertices[self.vertices.len() - 1];
        for &cur in &self.vertices {
            s += cross(prev, cur);
            prev = cur;
        }
        s / 2.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid. Not finite for zero-area rings.
    pub fn centroid(&self) -> Point {
        let (mut x, mut y, mut a) = (0.0, 0.0, 0.0);
        let mut prev = self.vertices[self.vertices.len() - 1];
        for &cur in &self.vertices {
            let t = prev.x * cur.y - cur.x * prev.y;
            x += (prev.x + cur.x) * t;
            y += (prev.y + cur.y) * t;
            a += t;
            prev = cur;
        }
        let a = 1.0 / (3.0 * a);
        Point::new(x * a, y * a)
    }

    pub fn perimeter(&self) -> f64 {
        self.sides().map(|s| s.direction().norm()).sum()
    }

    /// Even-odd containment by casting a ray towards +x.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        ring_contains(&self.vertices, p)
    }

    /// Fill surface for `(t0, t1) ∈ [0,1]²`.
    ///
    /// The ring is split into a leading and a trailing run of vertices. `t0`
    /// walks forward along the first run and backward along the second; `t1`
    /// interpolates across the chord between the two positions. Covers convex
    /// polygons; concave ones need `ConcaveSurface`.
    pub fn surface_point(&self, t0: f64, t1: f64) -> Point {
        let n = self.vertices.len() - 1;
        let h = n - n / 2;
        let a = along_segments(&self.vertices[..h], t0);
        let b = along_segments(&self.vertices[h..], 1.0 - t0);
        lerp(a, b, t1)
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Every turn has the same direction (collinear vertices ignored).
    pub fn is_convex(&self) -> bool {
        let (mut pos, mut neg) = (false, false);
        for t in self.turns() {
            pos |= t > 0.0;
            neg |= t < 0.0;
        }
        !(pos && neg)
    }

    /// Vertices whose turn opposes the ring's winding.
    pub fn reflex_vertices(&self) -> Vec<usize> {
        let winding = self.signed_area().signum();
        self.turns()
            .enumerate()
            .filter_map(|(i, t)| (t * winding < 0.0).then_some(i))
            .collect()
    }

    /// Same ring, opposite winding.
    pub fn reversed(&self) -> Polygon {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// First pair of non-adjacent sides that touch or cross.
    pub fn first_crossing(&self) -> Option<(usize, usize)> {
        let n = self.vertices.len();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if self.side(i).touches(&self.side(j)) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        self.first_crossing().is_none()
    }

    /// Nearest side crossed strictly inside both `segment` and the side.
    ///
    /// Returns `(t along segment, side index, t along side)`.
    pub fn first_intersection(&self, segment: &Line) -> Option<(f64, usize, f64)> {
        let mut best: Option<(f64, usize, f64)> = None;
        for (i, side) in self.sides().enumerate() {
            if !segment.crosses(&side) {
                continue;
            }
            if let Some((ta, tb)) = segment.intersection(&side) {
                if best.map_or(true, |b| ta < b.0) {
                    best = Some((ta, i, tb));
                }
            }
        }
        best
    }

    /// Triangles for `indices`; `None` if any index is out of range.
    pub fn triangles(&self, indices: &[TriangleIndices]) -> Option<Vec<Triangle>> {
        indices
            .iter()
            .map(|&[a, b, c]| {
                Some(Triangle::new(
                    *self.vertices.get(a)?,
                    *self.vertices.get(b)?,
                    *self.vertices.get(c)?,
                ))
            })
            .collect()
    }

    /// Cross product of consecutive sides at each vertex.
    fn turns(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            let prev = self.vertices[(i + n - 1) % n];
            let cur = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            cross(cur - prev, next - cur)
        })
    }
}

/// Ray casting on a bare ring: counts sides hit at ray parameter > 0 and side
/// parameter in [0, 1).
pub(crate) fn ring_contains(ring: &[Point], p: Point) -> bool {
    let Some(&last) = ring.last() else {
        return false;
    };
    let ray = Line::new(p, p + Point::new(1.0, 0.0));
    let mut prev = last;
    let mut hits = 0usize;
    for &cur in ring {
        if let Some((ri, si)) = ray.intersection(&Line::new(prev, cur)) {
            if ri > 0.0 && (0.0..1.0).contains(&si) {
                hits += 1;
            }
        }
        prev = cur;
    }
    hits % 2 == 1
}

impl From<Triangle> for Polygon {
    fn from(t: Triangle) -> Self {
        Self {
            vertices: t.0.to_vec(),
        }
    }
}

impl Shape for Polygon {
    fn f(&self, t0: f64, t1: f64) -> Result<Point, GeomError> {
        Ok(self.surface_point(t0, t1))
    }
    fn area(&self) -> f64 {
        Polygon::area(self)
    }
    fn signed_area(&self) -> f64 {
        Polygon::signed_area(self)
    }
    fn perimeter(&self) -> f64 {
        Polygon::perimeter(self)
    }
    fn contains(&self, p: Point) -> bool {
        Polygon::contains(self, p)
    }
    fn centroid(&self) -> Point {
        Polygon::centroid(self)
    }
}
