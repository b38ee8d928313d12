//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, indexable test and benchmark inputs for the triangulator and
//!   `ConcaveSurface`. Outputs are simple and, for non-trivial radial jitter,
//!   usually concave.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular jitter,
//!   sort, then give each angle an independently jittered radius. Angles stay
//!   strictly increasing and radii positive, so the ring never self-intersects.
//!   From four vertices on every angular gap is below π and the origin lies in
//!   the kernel.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GeomError, Malformation};
use crate::polygon::Polygon;
use crate::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Relative radius amplitude: radii are `base_radius * (1 + u)` with
    /// `u ∈ [-radial_jitter, radial_jitter]`. Clamped to [0, 0.95].
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped polygon around the origin, counterclockwise.
///
/// Errors only if `base_radius` is not finite.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon, GeomError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.abs().max(1e-9);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + k as f64 * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let vertices: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    if let Some(index) = vertices
        .iter()
        .position(|v| !(v.x.is_finite() && v.y.is_finite()))
    {
        return Err(Malformation::NonFinite { index }.into());
    }
    Polygon::new(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.4,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        assert_eq!(p1.vertex_count(), 10);
        let p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 }).unwrap();
        assert_ne!(p1, p3);
    }

    #[test]
    fn draws_are_simple_and_counter_clockwise() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 4, max: 20 },
            ..RadialCfg::default()
        };
        for index in 0..200 {
            let poly = draw_polygon_radial(cfg, ReplayToken { seed: 3, index }).unwrap();
            assert!((4..=20).contains(&poly.vertex_count()));
            assert!(poly.is_simple(), "draw {index} self-intersects");
            assert!(poly.is_counter_clockwise());
            assert!(poly.contains(Point::zeros()));
        }
    }

    #[test]
    fn base_radius_bounds_vertices() {
        let cfg = RadialCfg {
            base_radius: 2.0,
            radial_jitter: 0.25,
            ..RadialCfg::default()
        };
        let poly = draw_polygon_radial(cfg, ReplayToken { seed: 9, index: 0 }).unwrap();
        for v in poly.vertices() {
            let r = v.norm();
            assert!((1.5 - 1e-12..=2.5 + 1e-12).contains(&r));
        }
        assert!(draw_polygon_radial(
            RadialCfg {
                base_radius: f64::INFINITY,
                ..cfg
            },
            ReplayToken { seed: 9, index: 0 }
        )
        .is_err());
    }
}
