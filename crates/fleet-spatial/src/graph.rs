//! Landmark graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_km`) are sorted by source
//! node and indexed by `EdgeId`.  Iteration over a node's outgoing edges is
//! therefore a contiguous memory scan — ideal for Dijkstra's inner loop.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lng)` to the nearest `NodeId`.  The
//! metric is planar Euclidean distance in degree space with no projection
//! correction; at the scale of one metro area the approximation is adequate,
//! and it matches how callers supply arbitrary coordinates.
//!
//! # Immutability
//!
//! A built graph is never mutated.  The whole structure is `Send + Sync` and
//! is meant to be built once at process start and shared behind an `Arc`
//! across request handlers with no locking.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use fleet_core::{EdgeId, GeoPoint, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lng]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct LandmarkEntry {
    point: [f64; 2], // [lat, lng]
    id: NodeId,
}

impl RTreeObject for LandmarkEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LandmarkEntry {
    /// Squared Euclidean distance in lat/lng space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlng = self.point[1] - point[1];
        dlat * dlat + dlng * dlng
    }
}

// ── LandmarkGraph ─────────────────────────────────────────────────────────────

/// Weighted undirected landmark graph in CSR format plus a spatial index for
/// nearest-node queries.
///
/// Edge weights are kilometres.  Do not construct directly; use
/// [`LandmarkGraphBuilder`].
pub struct LandmarkGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each landmark.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// Display label of each landmark.  Indexed by `NodeId`.
    pub node_label: Vec<String>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but required for path
    /// reconstruction (trace `prev_edge` back to source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length of each edge in kilometres.  Used as the Dijkstra edge cost.
    pub edge_km: Vec<f64>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<LandmarkEntry>,
}

impl LandmarkGraph {
    /// Construct an empty graph with no nodes or edges.
    ///
    /// Any `nearest_node` or `shortest_path` query against an empty graph
    /// returns `None`, which route planning treats as "fall back to path
    /// synthesis".
    pub fn empty() -> Self {
        LandmarkGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Position of a landmark.
    #[inline]
    pub fn position(&self, node: NodeId) -> GeoPoint {
        self.node_pos[node.index()]
    }

    /// Display label of a landmark.
    #[inline]
    pub fn label(&self, node: NodeId) -> &str {
        &self.node_label[node.index()]
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the landmark nearest to `pos` by planar
    /// coordinate distance.
    ///
    /// Returns `None` only if the graph has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lng])
            .map(|e| e.id)
    }
}

// ── LandmarkGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`LandmarkGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// The builder accepts landmarks and connections in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, and bulk-loads the
/// R-tree.
///
/// # Example
///
/// ```
/// use fleet_core::GeoPoint;
/// use fleet_spatial::LandmarkGraphBuilder;
///
/// let mut b = LandmarkGraphBuilder::new();
/// let a = b.add_landmark("Depot", GeoPoint::new(28.63, 77.21));
/// let c = b.add_landmark("Hub",   GeoPoint::new(28.61, 77.22));
/// b.connect(a, c, 2.5); // 2.5 km, both directions
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct LandmarkGraphBuilder {
    nodes:     Vec<(String, GeoPoint)>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to:   NodeId,
    km:   f64,
}

impl LandmarkGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Add a landmark and return its `NodeId` (sequential from 0).
    pub fn add_landmark(&mut self, label: impl Into<String>, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push((label.into(), pos));
        id
    }

    /// Connect two landmarks with a road segment of length `km`.
    ///
    /// Edges are always inserted in symmetric pairs; the graph has no one-way
    /// segments.
    pub fn connect(&mut self, a: NodeId, b: NodeId, km: f64) {
        self.raw_edges.push(RawEdge { from: a, to: b, km });
        self.raw_edges.push(RawEdge { from: b, to: a, km });
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`LandmarkGraph`].
    ///
    /// Time complexity: O(E log E) for edge sort + O(N log N) for R-tree bulk
    /// load, where N = nodes, E = edges.
    pub fn build(self) -> LandmarkGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:   Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_km:   Vec<f64>    = raw.iter().map(|e| e.km).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<LandmarkEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, (_, pos))| LandmarkEntry {
                point: [pos.lat, pos.lng],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let (node_label, node_pos): (Vec<String>, Vec<GeoPoint>) =
            self.nodes.into_iter().unzip();

        LandmarkGraph {
            node_pos,
            node_label,
            node_out_start,
            edge_from,
            edge_to,
            edge_km,
            spatial_idx,
        }
    }
}

impl Default for LandmarkGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
