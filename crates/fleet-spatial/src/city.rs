//! The seeded default landmark set.
//!
//! Twelve Delhi-NCR landmarks with approximate road distances in km.  Built
//! once at process start; the graph is read-only afterwards and safe to share
//! across threads behind an `Arc`.

use fleet_core::GeoPoint;

use crate::graph::{LandmarkGraph, LandmarkGraphBuilder};

/// Build the default metro-area landmark graph.
pub fn city_graph() -> LandmarkGraph {
    let mut b = LandmarkGraphBuilder::new();

    let cp  = b.add_landmark("Connaught Place", GeoPoint::new(28.6304, 77.2177));
    let ig  = b.add_landmark("India Gate",      GeoPoint::new(28.6129, 77.2295));
    let ak  = b.add_landmark("Akshardham",      GeoPoint::new(28.6127, 77.2773));
    let ln  = b.add_landmark("Laxmi Nagar",     GeoPoint::new(28.6304, 77.2772));
    let mv  = b.add_landmark("Mayur Vihar",     GeoPoint::new(28.6000, 77.2900));
    let skk = b.add_landmark("Sarai Kale Khan", GeoPoint::new(28.5880, 77.2580));
    let ash = b.add_landmark("Ashram",          GeoPoint::new(28.5700, 77.2550));
    let np  = b.add_landmark("Nehru Place",     GeoPoint::new(28.5492, 77.2526));
    let n15 = b.add_landmark("Noida Sector 15", GeoPoint::new(28.5898, 77.3101));
    let n18 = b.add_landmark("Noida Sector 18", GeoPoint::new(28.5700, 77.3200));
    let gc  = b.add_landmark("Golf Course",     GeoPoint::new(28.5670, 77.3300));
    let s62 = b.add_landmark("Sector 62",       GeoPoint::new(28.6200, 77.3700));

    // Approximate road distances.
    b.connect(cp, ig, 2.5);
    b.connect(ig, skk, 4.0);
    b.connect(skk, ash, 2.5);
    b.connect(ash, np, 3.0);
    b.connect(skk, ak, 3.0);
    b.connect(ak, mv, 2.0);
    b.connect(mv, n15, 3.0);
    b.connect(n15, n18, 2.5);
    b.connect(n18, gc, 1.5);

    // Alternate corridor out of Connaught Place.
    b.connect(cp, ln, 6.0);
    b.connect(ln, ak, 3.0);

    // Sector 62 has no measured corridor yet.  Queries snapping to it find no
    // graph route, which pushes the planner onto its synthesized fallback.
    let _ = s62;

    b.build()
}
