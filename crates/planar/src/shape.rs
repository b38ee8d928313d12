//! Common contract for 2D shapes with a parametric surface.
//!
//! Implemented by `Triangle`, `Polygon` (convex fill) and `ConcaveSurface`, so
//! callers can swap one for another behind `&dyn Shape` or a generic bound.

use crate::error::GeomError;
use crate::Point;

/// A closed 2D region with a continuous surface over the unit square.
///
/// `f` maps `(t0, t1) ∈ [0,1]²` into the region without internal creases.
/// It is fallible so that surfaces assembled from pieces can report a failed
/// point location; closed-form shapes always return `Ok`.
pub trait Shape {
    fn f(&self, t0: f64, t1: f64) -> Result<Point, GeomError>;
    fn area(&self) -> f64;
    /// Sign follows winding: positive for counterclockwise.
    fn signed_area(&self) -> f64;
    fn perimeter(&self) -> f64;
    fn contains(&self, p: Point) -> bool;
    fn centroid(&self) -> Point;
}

/// Surface points at the cell centres of a `steps × steps` grid over (0,1)².
///
/// Row-major in `t0`; never touches `t = 0` or `t = 1`.
pub fn sample_grid<S: Shape + ?Sized>(
    shape: &S,
    steps: usize,
) -> Result<Vec<Point>, GeomError> {
    let h = 1.0 / steps as f64;
    let mut out = Vec::with_capacity(steps * steps);
    for i in 0..steps {
        for j in 0..steps {
            out.push(shape.f((i as f64 + 0.5) * h, (j as f64 + 0.5) * h)?);
        }
    }
    Ok(out)
}
