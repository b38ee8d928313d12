//! 2D affine maps and the triangle-to-triangle solver.
//!
//! Purpose
//! - `Affine2::from_triangles(a, b)` returns the unique map taking `a[i]` to `b[i]`.
//!   `ConcaveSurface` builds one per triangle pair and caches it.
//!
//! Method
//! - `B = M·A + t` splits into two independent 3-equation systems, one per output
//!   row: `(k, l, m)` from the x-values of `B`, `(n, p, q)` from the y-values.
//!   Both share the denominators of the source triangle:
//!   ```text
//!   d1 = A[i1].x - A[i0].x        s = (A[i0].y - A[i1].y) / d1
//!   d2 = A[i1].y - A[i2].y        t = (A[i2].x - A[i1].x) / d2
//!   d3 = 1 - s*t
//!   ```
//! - A vertex rotation `(i0,i1,i2)` whose denominator vanishes is skipped and the
//!   next cyclic rotation tried. Each row fails on its own after three rotations.
//!
//! Tolerance
//! - "Vanishes" is scale-aware: `|d1|, |d2| <= DEGENERATE_EPS · extent(A)` or
//!   `|d3| <= DEGENERATE_EPS`. Mirror-symmetric vertices of a regular polygon
//!   differ by ~1e-16 instead of 0; dividing by that noise would accept a
//!   rotation whose coefficients lose all precision.
//! - Exactly collinear sources therefore never resolve, while nearly collinear
//!   ones above the tolerance resolve to an ill-conditioned but finite map.

use nalgebra::{Matrix2, Vector2};

use crate::error::{Axis, GeomError};
use crate::triangle::Triangle;
use crate::Point;

/// Relative size below which a solver denominator counts as zero.
pub const DEGENERATE_EPS: f64 = 1e-9;

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Map taking each vertex of `a` onto the vertex of `b` with the same index.
    ///
    /// `a` must be non-degenerate relative to `DEGENERATE_EPS`: a triangle whose
    /// solver denominators fall below the tolerance counts as collinear even with
    /// positive area. `(0,0), (1,1e-10), (2,0)` is rejected that way.
    pub fn from_triangles(a: &Triangle, b: &Triangle) -> Result<Self, GeomError> {
        let (k, l, m) = solve_row(a, [b[0].x, b[1].x, b[2].x])
            .ok_or(GeomError::UnresolvableTransform { axis: Axis::X })?;
        let (n, p, q) = solve_row(a, [b[0].y, b[1].y, b[2].y])
            .ok_or(GeomError::UnresolvableTransform { axis: Axis::Y })?;
        Ok(Self {
            m: Matrix2::new(k, l, n, p),
            t: Vector2::new(m, q),
        })
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.m[(0, 0)] + p.y * self.m[(0, 1)] + self.t.x,
            p.x * self.m[(1, 0)] + p.y * self.m[(1, 1)] + self.t.y,
        )
    }

    /// Inverse map if `m` is invertible.
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}

/// Largest coordinate difference between any two vertices.
fn extent(a: &Triangle) -> f64 {
    let mut e: f64 = 0.0;
    for i in 0..3 {
        let d = a[i] - a[(i + 1) % 3];
        e = e.max(d.x.abs()).max(d.y.abs());
    }
    e
}

/// Coefficients `(c0, c1, c2)` with `c0·A[i].x + c1·A[i].y + c2 = out[i]`.
fn solve_row(a: &Triangle, out: [f64; 3]) -> Option<(f64, f64, f64)> {
    if a.vertices().iter().any(|v| !(v.x.is_finite() && v.y.is_finite())) {
        return None;
    }
    let tol = DEGENERATE_EPS * extent(a);
    if tol <= 0.0 {
        return None;
    }
    for i0 in 0..3 {
        let i1 = (i0 + 1) % 3;
        let i2 = (i0 + 2) % 3;
        let d1 = a[i1].x - a[i0].x;
        if d1.abs() <= tol {
            continue;
        }
        let d2 = a[i1].y - a[i2].y;
        if d2.abs() <= tol {
            continue;
        }
        let s = (a[i0].y - a[i1].y) / d1;
        let t = (a[i2].x - a[i1].x) / d2;
        let d3 = 1.0 - s * t;
        if d3.abs() <= DEGENERATE_EPS {
            continue;
        }
        let r = (out[i1] - out[i0]) / d1;
        let u = (out[i2] - out[i1]) / d2;
        let c1 = (r * t - u) / d3;
        let c0 = r + c1 * s;
        let c2 = out[i0] - c0 * a[i0].x - c1 * a[i0].y;
        return Some((c0, c1, c2));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::matrix;
    use proptest::prelude::*;

    fn tri(c: [f64; 6]) -> Triangle {
        Triangle::new(
            Point::new(c[0], c[1]),
            Point::new(c[2], c[3]),
            Point::new(c[4], c[5]),
        )
    }

    #[test]
    fn apply_matches_matrix_layout() {
        let cases = [
            (matrix![1.0, 0.0; 0.0, 1.0], (3.0, 4.0), (3.0, 4.0)),
            (matrix![2.0, 0.0; 0.0, 3.0], (1.0, 1.0), (2.0, 3.0)),
            (matrix![2.0, 0.0; 0.0, 3.0], (1.0, 0.0), (2.0, 0.0)),
            (matrix![0.0, 3.0; 2.0, 0.0], (1.0, 0.0), (0.0, 2.0)),
            (matrix![0.0, 3.0; 2.0, 0.0], (0.0, 1.0), (3.0, 0.0)),
        ];
        for (m, (x, y), (ex, ey)) in cases {
            let f = Affine2 {
                m,
                t: Vector2::zeros(),
            };
            assert_eq!(f.apply(Point::new(x, y)), Point::new(ex, ey));
        }
    }

    #[test]
    fn from_triangles_reproduces_vertices() {
        let a = tri([0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        let targets = [
            tri([1.0, 1.0, 2.0, 0.0, 0.0, 1.0]),
            tri([0.0, 1.0, 0.0, 0.0, 1.0, 0.0]),
            // collinear destination is fine; only the source must be non-degenerate
            tri([1.0, 0.0, 2.0, 0.0, 3.0, 0.0]),
        ];
        for b in targets {
            let f = Affine2::from_triangles(&a, &b).expect("resolvable");
            for i in 0..3 {
                assert!((f.apply(a[i]) - b[i]).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn axis_aligned_source_uses_later_rotation() {
        // rotation (0,1,2) has d1 = 0; (1,2,0) has d2 = 0
        let a = tri([0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
        let b = tri([2.0, 1.0, 3.0, 5.0, -1.0, 0.5]);
        let f = Affine2::from_triangles(&a, &b).expect("resolvable");
        for i in 0..3 {
            assert!((f.apply(a[i]) - b[i]).norm() < 1e-12);
        }
    }

    #[test]
    fn collinear_source_is_unresolvable() {
        let a = tri([0.0, 0.0, 1.0, 0.0, 2.0, 0.0]);
        let b = tri([0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            Affine2::from_triangles(&a, &b),
            Err(GeomError::UnresolvableTransform { axis: Axis::X })
        );
        let diagonal = tri([0.0, 0.0, 1.0, 0.5, 2.0, 1.0]);
        assert!(Affine2::from_triangles(&diagonal, &b).is_err());
        let point = tri([0.3, 0.3, 0.3, 0.3, 0.3, 0.3]);
        assert!(Affine2::from_triangles(&point, &b).is_err());
        let nan = tri([f64::NAN, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert!(Affine2::from_triangles(&nan, &b).is_err());
    }

    #[test]
    fn thin_source_below_tolerance_is_unresolvable() {
        let thin = tri([0.0, 0.0, 1.0, 1e-10, 2.0, 0.0]);
        assert!(thin.area() > 0.0);
        let b = tri([0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            Affine2::from_triangles(&thin, &b),
            Err(GeomError::UnresolvableTransform { axis: Axis::X })
        );
    }

    #[test]
    fn nearly_collinear_source_resolves_ill_conditioned() {
        let a = tri([0.0, 0.0, 1.0, 0.5, 2.0, 1.000_000_1]);
        let b = tri([0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        let f = Affine2::from_triangles(&a, &b).expect("above tolerance");
        assert!(f.m.iter().all(|c| c.is_finite()));
        assert!(f.m.norm() > 1e6);
    }

    #[test]
    fn regular_polygon_mirror_vertices_stay_accurate() {
        // vertices 3 and 4 of a unit heptagon share x up to rounding
        let step = std::f64::consts::TAU / 7.0;
        let v = |i: usize| Point::new((step * i as f64).cos(), (step * i as f64).sin());
        let a = Triangle::new(v(3), v(4), v(5));
        let b = tri([0.2, 0.1, -0.4, 0.9, -1.3, 0.2]);
        let f = Affine2::from_triangles(&a, &b).unwrap();
        for i in 0..3 {
            assert!((f.apply(a[i]) - b[i]).norm() < 1e-9);
        }
    }

    #[test]
    fn inverse_and_compose() {
        let a = tri([0.0, 0.0, 2.0, 0.5, -0.5, 1.5]);
        let b = tri([1.0, 1.0, 3.0, -1.0, 0.0, 4.0]);
        let f = Affine2::from_triangles(&a, &b).unwrap();
        let g = f.inverse().unwrap();
        let id = g.compose(&f);
        let p = Point::new(0.7, -2.3);
        assert!((id.apply(p) - p).norm() < 1e-9);
        assert!((g.apply(b[1]) - a[1]).norm() < 1e-9);
        assert!(Affine2::identity().is_orientation_preserving());
        // swapping two destination vertices flips orientation
        let flipped = Affine2::from_triangles(&a, &Triangle::new(b[1], b[0], b[2])).unwrap();
        assert_ne!(
            f.is_orientation_preserving(),
            flipped.is_orientation_preserving()
        );
    }

    proptest! {
        #[test]
        fn round_trip_on_vertices(
            ca in proptest::array::uniform6(-10.0f64..10.0),
            cb in proptest::array::uniform6(-10.0f64..10.0),
        ) {
            let a = tri(ca);
            let b = tri(cb);
            prop_assume!(a.area() > 0.5);
            let f = Affine2::from_triangles(&a, &b).unwrap();
            for i in 0..3 {
                prop_assert!((f.apply(a[i]) - b[i]).norm() < 1e-6);
            }
        }

        #[test]
        fn self_map_is_identity(
            ca in proptest::array::uniform6(-10.0f64..10.0),
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
        ) {
            let a = tri(ca);
            prop_assume!(a.area() > 0.5);
            let f = Affine2::from_triangles(&a, &a).unwrap();
            let p = Point::new(x, y);
            prop_assert!((f.apply(p) - p).norm() < 1e-6);
        }
    }
}
