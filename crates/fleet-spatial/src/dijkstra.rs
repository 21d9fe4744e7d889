//! Shortest-path search over the landmark graph.
//!
//! # Cost units
//!
//! Edge costs are converted from kilometres to **integer metres** for the
//! priority queue, giving a total order without floating-point comparison
//! workarounds and deterministic tie-breaking on `NodeId`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fleet_core::{EdgeId, GeoPoint, NodeId};

use crate::graph::LandmarkGraph;

impl LandmarkGraph {
    /// Shortest path between two arbitrary coordinates.
    ///
    /// Snaps `start` and `end` to their nearest landmarks, runs Dijkstra
    /// between them, and returns the chain
    /// `[start, landmark positions…, end]` — the literal inputs are always
    /// the first and last points, never the snapped positions.
    ///
    /// Returns `None` when the graph is empty or the snapped target is
    /// unreachable.  Callers should also treat a chain of fewer than 3
    /// points as "no real routing occurred" and fall back to synthesis;
    /// both outcomes are expected control flow, not errors.
    pub fn shortest_path(&self, start: GeoPoint, end: GeoPoint) -> Option<Vec<GeoPoint>> {
        let from = self.nearest_node(start)?;
        let to   = self.nearest_node(end)?;

        let chain = dijkstra(self, from, to)?;

        let mut path = Vec::with_capacity(chain.len() + 2);
        path.push(start);
        path.extend(chain.iter().map(|&n| self.position(n)));
        path.push(end);
        Some(path)
    }
}

/// Edge cost in integer metres.
#[inline]
fn edge_cost_m(graph: &LandmarkGraph, edge: EdgeId) -> u32 {
    (graph.edge_km[edge.index()] * 1000.0).round() as u32
}

/// Standard Dijkstra with early exit once the target node is popped.
///
/// Returns the node chain `from ..= to` (inclusive on both ends; a single
/// node when `from == to`), or `None` if `to` is unreachable.
fn dijkstra(graph: &LandmarkGraph, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    let n = graph.node_count();

    // dist[v] = best known cost (m) to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Some(reconstruct(graph, &prev_edge, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost.saturating_add(edge_cost_m(graph, edge));

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    None
}

fn reconstruct(
    graph:     &LandmarkGraph,
    prev_edge: &[EdgeId],
    from:      NodeId,
    to:        NodeId,
) -> Vec<NodeId> {
    let mut chain = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        chain.push(cur);
    }
    chain.reverse();
    chain
}
