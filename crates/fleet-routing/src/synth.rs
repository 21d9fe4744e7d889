//! Curved path synthesis.
//!
//! When no graph route applies (coordinates outside the landmark set, or a
//! variant that deliberately ignores the graph), the planner still needs a
//! plausible polyline for the map.  `curved_path` fakes one: linear
//! interpolation between the endpoints with a little jitter on each interior
//! point so the line reads as a road rather than a ruler stroke.

use fleet_core::{FleetRng, GeoPoint};

/// Number of points in every synthesized path: the two endpoints plus
/// [`INTERIOR_POINTS`] jittered interpolations.
pub const PATH_POINTS: usize = 7;

const INTERIOR_POINTS: usize = 5;

/// Maximum jitter applied independently to each interior point's latitude
/// and longitude, in degrees (roughly ±275 m).
const JITTER_DEG: f64 = 0.0025;

/// Generate a plausible curved path from `start` to `end`.
///
/// Always returns exactly [`PATH_POINTS`] points: the literal `start`, five
/// points at fractions 1/6 … 5/6 of the way with uniform jitter of
/// ±[`JITTER_DEG`] on each coordinate, and the literal `end`.
///
/// Non-deterministic by design; pass a fixed-seed [`FleetRng`] to pin the
/// jitter in tests.
pub fn curved_path(start: GeoPoint, end: GeoPoint, rng: &mut FleetRng) -> Vec<GeoPoint> {
    let mut path = Vec::with_capacity(PATH_POINTS);
    path.push(start);

    for i in 1..=INTERIOR_POINTS {
        let t = i as f64 / (INTERIOR_POINTS + 1) as f64;
        let mut p = start.lerp(end, t);
        p.lat += rng.gen_range(-JITTER_DEG..=JITTER_DEG);
        p.lng += rng.gen_range(-JITTER_DEG..=JITTER_DEG);
        path.push(p);
    }

    path.push(end);
    path
}

#[cfg(test)]
pub(crate) const TEST_JITTER_DEG: f64 = JITTER_DEG;
