//! Ear-removal triangulation.
//!
//! Method
//! - Keep the ring of not-yet-removed vertex indices. Scan it from the start for
//!   a vertex `i1` whose neighbours `i0`, `i2` span a chord that (a) has its
//!   midpoint inside the remaining ring and (b) crosses no side, neither of the
//!   input ring nor of the remaining ring. Emit `(i0, i1, i2)`, drop `i1`, and
//!   restart the scan. The last three indices form the final triangle.
//! - Sides sharing an endpoint with the chord are not tested; their contact is
//!   the shared vertex, and testing it only picks up rounding noise.
//! - A chord running along collinear sides passes both tests but cuts off a
//!   zero-area ear. Such ears are deferred while any other ear is available.
//!
//! Output is `n - 2` index triples into the input vertex list, in emission order.
//! The order is deterministic, which lets two polygons with the same vertex
//! count share one triangulation.

use tracing::{debug, trace};

use super::{ring_contains, Polygon, TriangleIndices};
use crate::affine::DEGENERATE_EPS;
use crate::error::{GeomError, Malformation};
use crate::line::{cross, Line};
use crate::Point;

impl Polygon {
    /// Splits the polygon into `n - 2` triangles of vertex indices.
    ///
    /// Fails with `MalformedPolygon` for non-finite coordinates, touching or
    /// crossing sides, and rings on which no ear can be found (for example all
    /// vertices collinear).
    pub fn triangulate(&self) -> Result<Vec<TriangleIndices>, GeomError> {
        let vertices = self.vertices();
        let n = vertices.len();
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(Malformation::NonFinite { index }.into());
        }
        if let Some((first, second)) = self.first_crossing() {
            return Err(Malformation::SelfIntersecting { first, second }.into());
        }

        let mut remaining: Vec<usize> = (0..n).collect();
        let mut out = Vec::with_capacity(n - 2);
        while remaining.len() > 3 {
            let Some(i) = self.find_ear(&remaining) else {
                return Err(Malformation::NoEar {
                    remaining: remaining.len(),
                }
                .into());
            };
            let m = remaining.len();
            let ear = [remaining[i], remaining[(i + 1) % m], remaining[(i + 2) % m]];
            trace!(?ear, remaining = m, "ear");
            out.push(ear);
            remaining.remove((i + 1) % m);
        }
        out.push([remaining[0], remaining[1], remaining[2]]);
        debug!(vertices = n, triangles = out.len(), "triangulated polygon");
        Ok(out)
    }

    /// Position in `remaining` of the first vertex whose chord `i → i+2` is valid.
    ///
    /// Flat ears (all three vertices collinear) are taken only when no other
    /// valid ear remains.
    fn find_ear(&self, remaining: &[usize]) -> Option<usize> {
        let vertices = self.vertices();
        let m = remaining.len();
        let current: Vec<_> = remaining.iter().map(|&k| vertices[k]).collect();
        let mut flat = None;
        for i in 0..m {
            if !self.is_valid_chord(remaining, &current, i) {
                continue;
            }
            let [a, b, c] = [0, 1, 2].map(|d| vertices[remaining[(i + d) % m]]);
            if !is_flat(a, b, c) {
                return Some(i);
            }
            if flat.is_none() {
                flat = Some(i);
            }
        }
        if let Some(i) = flat {
            trace!(at = i, remaining = m, "only flat ears left");
        }
        flat
    }

    fn is_valid_chord(&self, remaining: &[usize], current: &[Point], i: usize) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();
        let m = remaining.len();
        let (a, c) = (remaining[i], remaining[(i + 2) % m]);
        let chord = Line::new(vertices[a], vertices[c]);
        if !ring_contains(current, chord.at(0.5)) {
            return false;
        }
        let incident = |u: usize, v: usize| u == a || u == c || v == a || v == c;
        let hits_input = (0..n)
            .filter(|&j| !incident(j, (j + 1) % n))
            .any(|j| chord.crosses(&self.side(j)));
        if hits_input {
            return false;
        }
        !(0..m)
            .map(|k| (remaining[k], remaining[(k + 1) % m]))
            .filter(|&(u, v)| !incident(u, v))
            .any(|(u, v)| chord.crosses(&Line::new(vertices[u], vertices[v])))
    }
}

/// Angle at `a` below `DEGENERATE_EPS` radians (sine), or a repeated vertex.
fn is_flat(a: Point, b: Point, c: Point) -> bool {
    let (ab, ac) = (b - a, c - a);
    cross(ab, ac).abs() <= DEGENERATE_EPS * ab.norm() * ac.norm()
}
