//! 2D shape surfaces: triangle-to-triangle transforms, polygon triangulation and
//! parametric surfaces over concave polygons.
//!
//! Every shape exposes a surface `F(t0, t1)` that maps the unit square onto its
//! interior. Convex polygons use a direct fill formula; `ConcaveSurface` maps the
//! fill formula of a canonical regular polygon through one affine map per
//! triangle of a shared triangulation.
//!
//! Layout
//! - `line`: lerp, cross, parametric lines, segment interpolation.
//! - `affine`: `Affine2` and the triangle-to-triangle solver.
//! - `triangle`, `polygon`, `surface`: the shapes, all implementing `Shape`.
//! - `rand`: reproducible star-shaped (simple, mostly concave) polygons.

pub mod affine;
pub mod error;
pub mod line;
pub mod polygon;
pub mod rand;
pub mod shape;
pub mod surface;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Points and difference vectors share one type.
pub type Point = nalgebra::Vector2<f64>;

pub use affine::Affine2;
pub use error::{Axis, GeomError, Malformation};
pub use polygon::{Polygon, TriangleIndices};
pub use shape::Shape;
pub use surface::{ConcaveSurface, SurfaceCfg, SurfacePiece};
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::Affine2;
    pub use crate::error::{Axis, GeomError, Malformation};
    pub use crate::line::{along_segments, cross, lerp, Line};
    pub use crate::polygon::{Polygon, TriangleIndices};
    pub use crate::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::shape::Shape;
    pub use crate::surface::{ConcaveSurface, SurfaceCfg, SurfacePiece};
    pub use crate::triangle::Triangle;
    pub use crate::Point;
}
