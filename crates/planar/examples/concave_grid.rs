//! Print surface samples of a concave polygon.
//!
//! Usage:
//!   cargo run -p planar --example concave_grid -- [steps]
//!
//! Builds the surface of an L-shaped hexagon, prints its triangulation and a
//! `steps × steps` grid of surface points with their containment flag.

use planar::prelude::*;
use planar::shape::sample_grid;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default().with_target(false).init();
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);
    let l = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 2.0),
    ])
    .unwrap();
    let surface = match ConcaveSurface::new(l) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot build surface: {e}");
            return;
        }
    };
    for (i, ix) in surface.triangle_indices().enumerate() {
        println!("triangle {i}: {ix:?}");
    }
    tracing::info!(steps, area = surface.area(), "sampling");
    for q in sample_grid(&surface, steps).unwrap() {
        println!("{:>8.4} {:>8.4} inside={}", q.x, q.y, surface.contains(q));
    }
}
