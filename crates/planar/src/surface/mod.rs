//! Parametric surface over an arbitrary simple polygon.
//!
//! Purpose
//! - Extend `F(t0, t1)` from convex polygons to concave ones without creases or
//!   points outside the polygon.
//!
//! Method
//! - Triangulate the target polygon `P` (n vertices) and reuse the same index
//!   triples on the regular n-gon `R` of circumradius 1 at the origin. `R` is
//!   convex, so every triple is a proper triangle there, and the triangles tile
//!   `R` exactly as they tile `P`.
//! - Per triangle pair, cache the affine map `R`-triangle → `P`-triangle.
//! - A query evaluates `R`'s convex fill at `(t0, t1)`, finds the regular
//!   triangle containing that point and maps it through the cached transform.
//!   Adjacent maps agree on shared edges, so the result is continuous.
//!
//! Boundary
//! - Points on a shared edge are claimed by the first triangle in triangulation
//!   order. A point that rounding pushes just outside every triangle is taken by
//!   the first triangle with an edge within `SurfaceCfg::boundary_eps`.

use tracing::{debug, error, trace};

use crate::affine::Affine2;
use crate::error::GeomError;
use crate::polygon::{Polygon, TriangleIndices};
use crate::shape::Shape;
use crate::triangle::Triangle;
use crate::Point;

/// Point-location tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceCfg {
    /// Max distance from a regular triangle's edge for the fallback match.
    pub boundary_eps: f64,
}

impl Default for SurfaceCfg {
    fn default() -> Self {
        Self { boundary_eps: 1e-5 }
    }
}

/// One triangle of the shared triangulation with its cached transform.
#[derive(Clone, Debug)]
pub struct SurfacePiece {
    pub indices: TriangleIndices,
    /// Triangle in the regular parameter polygon.
    pub regular: Triangle,
    /// Matching triangle of the target polygon.
    pub target: Triangle,
    /// `regular[i] ↦ target[i]`.
    pub map: Affine2,
}

/// Immutable after construction; queries may run concurrently.
#[derive(Clone, Debug)]
pub struct ConcaveSurface {
    polygon: Polygon,
    regular: Polygon,
    pieces: Vec<SurfacePiece>,
    cfg: SurfaceCfg,
}

impl ConcaveSurface {
    #[inline]
    pub fn new(polygon: Polygon) -> Result<Self, GeomError> {
        Self::with_cfg(polygon, SurfaceCfg::default())
    }

    /// Copies `points` and builds the surface.
    pub fn from_points(points: &[Point]) -> Result<Self, GeomError> {
        Self::new(Polygon::from_slice(points)?)
    }

    pub fn with_cfg(polygon: Polygon, cfg: SurfaceCfg) -> Result<Self, GeomError> {
        let n = polygon.vertex_count();
        let regular = Polygon::regular(Point::zeros(), 1.0, 0.0, n)?;
        let indices = polygon.triangulate()?;
        let mut pieces = Vec::with_capacity(indices.len());
        for ix in indices {
            let [a, b, c] = ix.map(|k| regular.vertices()[k]);
            let r = Triangle::new(a, b, c);
            let [a, b, c] = ix.map(|k| polygon.vertices()[k]);
            let t = Triangle::new(a, b, c);
            let map = Affine2::from_triangles(&r, &t)?;
            pieces.push(SurfacePiece {
                indices: ix,
                regular: r,
                target: t,
                map,
            });
        }
        debug!(
            vertices = n,
            pieces = pieces.len(),
            area = polygon.area(),
            "built concave surface"
        );
        Ok(Self {
            polygon,
            regular,
            pieces,
            cfg,
        })
    }

    /// Surface point for `(t0, t1) ∈ [0,1]²`.
    ///
    /// `InvariantViolation` means no triangle matched even with the boundary
    /// tolerance; for in-range parameters that is a defect, not bad input.
    pub fn surface_point(&self, t0: f64, t1: f64) -> Result<Point, GeomError> {
        let q = self.regular.surface_point(t0, t1);
        if let Some(piece) = self.pieces.iter().find(|p| p.regular.contains(q)) {
            return Ok(piece.map.apply(q));
        }
        let eps = self.cfg.boundary_eps;
        let near = self.pieces.iter().position(|p| {
            p.regular
                .edges()
                .iter()
                .any(|e| e.distance_to_segment(q) < eps)
        });
        if let Some(i) = near {
            trace!(t0, t1, piece = i, "boundary fallback");
            return Ok(self.pieces[i].map.apply(q));
        }
        error!(t0, t1, ?q, "no piece contains the parameter point");
        Err(GeomError::InvariantViolation { t0, t1 })
    }

    /// Target polygon, as supplied.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Regular n-gon serving as parameter space.
    #[inline]
    pub fn regular(&self) -> &Polygon {
        &self.regular
    }

    #[inline]
    pub fn pieces(&self) -> &[SurfacePiece] {
        &self.pieces
    }

    #[inline]
    pub fn cfg(&self) -> SurfaceCfg {
        self.cfg
    }

    pub fn triangle_indices(&self) -> impl Iterator<Item = TriangleIndices> + '_ {
        self.pieces.iter().map(|p| p.indices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.polygon.signed_area()
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.polygon.perimeter()
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        self.polygon.centroid()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.polygon.contains(p)
    }
}

impl Shape for ConcaveSurface {
    fn f(&self, t0: f64, t1: f64) -> Result<Point, GeomError> {
        self.surface_point(t0, t1)
    }
    fn area(&self) -> f64 {
        ConcaveSurface::area(self)
    }
    fn signed_area(&self) -> f64 {
        ConcaveSurface::signed_area(self)
    }
    fn perimeter(&self) -> f64 {
        ConcaveSurface::perimeter(self)
    }
    fn contains(&self, p: Point) -> bool {
        ConcaveSurface::contains(self, p)
    }
    fn centroid(&self) -> Point {
        ConcaveSurface::centroid(self)
    }
}
