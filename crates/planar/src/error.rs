//! Errors surfaced by transforms, triangulation and surface queries.
//!
//! Three kinds, told apart by the remedy available to the caller:
//! - `UnresolvableTransform`: degenerate source triangle (construction time).
//! - `MalformedPolygon`: input geometry the triangulator cannot tile.
//! - `InvariantViolation`: a surface query found no triangle; a defect, not bad input.

use std::fmt;

use thiserror::Error;

/// Output row of an affine solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Reason a polygon was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Malformation {
    /// Fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
    /// A coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    /// Two non-adjacent sides touch or cross (side `i` runs from vertex `i` to `i+1`).
    #[error("sides {first} and {second} intersect")]
    SelfIntersecting { first: usize, second: usize },
    /// A full ear scan accepted nothing.
    #[error("no ear found among {remaining} remaining vertices")]
    NoEar { remaining: usize },
}

/// Errors shared by the whole crate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeomError {
    /// Every cyclic vertex rotation of the source triangle was degenerate for this row.
    #[error("could not resolve {axis} transform: every vertex rotation is degenerate")]
    UnresolvableTransform { axis: Axis },
    /// The polygon cannot be triangulated.
    #[error("malformed polygon: {0}")]
    MalformedPolygon(#[from] Malformation),
    /// Point location found no triangle for in-range surface parameters.
    #[error("no triangle matched surface parameters ({t0}, {t1})")]
    InvariantViolation { t0: f64, t1: f64 },
}

impl GeomError {
    /// True for defects inside this crate rather than caller input.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, GeomError::InvariantViolation { .. })
    }
}
