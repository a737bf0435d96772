//! Road graph maintenance.
//!
//! Every mutation keeps three things in step: node connection lists, node
//! junction types, and the absence of nodes with no connections. The free
//! functions are copy-on-write wrappers for callers that keep undo history.

use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;

use super::{
    compute_edge_polygon_offsets, EdgeId, GridPoint, JunctionType, NodeId, RoadEdge, RoadNetwork,
    RoadNode, RoadPreview, RoadType,
};

/// Junction shape implied by a connection count.
pub fn determine_junction_type(connections: usize) -> JunctionType {
    match connections {
        0 | 1 => JunctionType::Endpoint,
        2 => JunctionType::Straight,
        3 => JunctionType::T,
        4 => JunctionType::Cross,
        _ => JunctionType::Multi,
    }
}

/// Broken network invariant reported by [`RoadNetwork::check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkViolation {
    /// A node lists an edge that does not exist.
    DanglingConnection { node: NodeId, edge: EdgeId },
    /// An edge references a node that does not exist.
    MissingNode { edge: EdgeId, node: NodeId },
    /// An edge's endpoint node does not list the edge.
    UnlistedEdge { edge: EdgeId, node: NodeId },
    /// A node has no connections.
    OrphanNode(NodeId),
    /// A node's junction type does not match its connection count.
    StaleJunctionType {
        node: NodeId,
        expected: JunctionType,
        actual: JunctionType,
    },
    /// An edge has fewer than two centerline tiles.
    ShortCenterLine(EdgeId),
}

impl fmt::Display for NetworkViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkViolation::DanglingConnection { node, edge } => {
                write!(f, "node {node} lists missing edge {edge}")
            }
            NetworkViolation::MissingNode { edge, node } => {
                write!(f, "edge {edge} references missing node {node}")
            }
            NetworkViolation::UnlistedEdge { edge, node } => {
                write!(f, "node {node} does not list its edge {edge}")
            }
            NetworkViolation::OrphanNode(node) => write!(f, "node {node} has no connections"),
            NetworkViolation::StaleJunctionType {
                node,
                expected,
                actual,
            } => write!(f, "node {node} is {actual:?}, expected {expected:?}"),
            NetworkViolation::ShortCenterLine(edge) => {
                write!(f, "edge {edge} has fewer than two centerline tiles")
            }
        }
    }
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from loaded nodes and edges.
    ///
    /// Connection lists and junction types are recomputed from the edges.
    /// Edges with fewer than two centerline tiles, duplicate ids or missing
    /// endpoint nodes are dropped, then nodes left without connections.
    pub fn from_parts(nodes: Vec<RoadNode>, edges: Vec<RoadEdge>) -> Self {
        let mut network = Self::default();

        for mut node in nodes {
            node.connected_edges.clear();
            network.nodes.insert(node.id.clone(), node);
        }

        for edge in edges {
            if edge.center_line.len() < 2 {
                warn!(
                    "Dropping road edge {} with {} centerline tile(s)",
                    edge.id,
                    edge.center_line.len()
                );
                continue;
            }
            if network.edges.contains_key(&edge.id) {
                warn!("Dropping duplicate road edge {}", edge.id);
                continue;
            }
            if !network.nodes.contains_key(&edge.start_node_id)
                || !network.nodes.contains_key(&edge.end_node_id)
            {
                warn!(
                    "Dropping road edge {}: node {} or {} is missing",
                    edge.id, edge.start_node_id, edge.end_node_id
                );
                continue;
            }
            network.connect(&edge.start_node_id, &edge.id);
            network.connect(&edge.end_node_id, &edge.id);
            network.edges.insert(edge.id.clone(), edge);
        }

        let before = network.nodes.len();
        network.nodes.retain(|_, node| !node.connected_edges.is_empty());
        let pruned = before - network.nodes.len();
        if pruned > 0 {
            debug!("Pruned {pruned} road node(s) without connections");
        }

        for node in network.nodes.values_mut() {
            node.junction_type = determine_junction_type(node.connected_edges.len());
        }

        network.rebuild_counters();
        network
    }

    /// Rebuild id counters past every `node-<n>` / `edge-<n>` id in use.
    pub fn rebuild_counters(&mut self) {
        self.next_node_id = next_after(self.nodes.keys().map(|id| id.0.as_str()), "node-");
        self.next_edge_id = next_after(self.edges.keys().map(|id| id.0.as_str()), "edge-");
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&RoadNode> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&RoadEdge> {
        self.edges.get(id)
    }

    /// Node sitting exactly on `point`.
    pub fn node_at(&self, point: GridPoint) -> Option<&RoadNode> {
        self.nodes.values().find(|node| node.position() == point)
    }

    /// Node at `point`, creating an unconnected one if none exists.
    ///
    /// Returns the id and whether the node is new. A new node must be
    /// connected before the edit finishes.
    pub fn find_or_create_node(&mut self, point: GridPoint) -> (NodeId, bool) {
        if let Some(node) = self.node_at(point) {
            return (node.id.clone(), false);
        }

        let id = self.allocate_node_id();
        self.nodes.insert(
            id.clone(),
            RoadNode {
                id: id.clone(),
                grid_x: point.x,
                grid_y: point.y,
                connected_edges: Vec::new(),
                junction_type: JunctionType::Endpoint,
            },
        );
        (id, true)
    }

    /// Commit the valid edges of a preview. Invalid edges are skipped.
    ///
    /// Returns the ids of the new edges.
    pub fn add_preview_edges(&mut self, preview: &RoadPreview, road_type: RoadType) -> Vec<EdgeId> {
        let mut added = Vec::new();

        for preview_edge in preview.edges.iter().filter(|e| e.is_valid) {
            let edge_id = self.allocate_edge_id();
            let (start_id, _) = self.find_or_create_node(preview_edge.start_point);
            let (end_id, _) = self.find_or_create_node(preview_edge.end_point);

            self.connect(&start_id, &edge_id);
            self.connect(&end_id, &edge_id);

            let polygon_offsets = compute_edge_polygon_offsets(
                &preview_edge.center_line,
                preview_edge.direction,
                true,
                true,
            );
            self.edges.insert(
                edge_id.clone(),
                RoadEdge {
                    id: edge_id.clone(),
                    road_type,
                    start_node_id: start_id,
                    end_node_id: end_id,
                    center_line: preview_edge.center_line.clone(),
                    direction: preview_edge.direction,
                    polygon_offsets,
                },
            );
            added.push(edge_id);
        }

        added
    }

    /// Remove an edge, retyping its endpoint nodes and dropping any that
    /// are left without connections. Returns false for an unknown id.
    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> bool {
        let Some(edge) = self.edges.remove(edge_id) else {
            return false;
        };

        for node_id in [&edge.start_node_id, &edge.end_node_id] {
            let Some(node) = self.nodes.get_mut(node_id) else {
                continue;
            };
            node.connected_edges.retain(|id| id != edge_id);
            if node.connected_edges.is_empty() {
                self.nodes.remove(node_id);
            } else {
                node.junction_type = determine_junction_type(node.connected_edges.len());
            }
        }

        true
    }

    /// Every invariant violation in the network. Empty when consistent.
    pub fn check_consistency(&self) -> Vec<NetworkViolation> {
        let mut violations = Vec::new();

        for node in self.nodes.values() {
            if node.connected_edges.is_empty() {
                violations.push(NetworkViolation::OrphanNode(node.id.clone()));
            }
            for edge_id in &node.connected_edges {
                if !self.edges.contains_key(edge_id) {
                    violations.push(NetworkViolation::DanglingConnection {
                        node: node.id.clone(),
                        edge: edge_id.clone(),
                    });
                }
            }
            let expected = determine_junction_type(node.connected_edges.len());
            if node.junction_type != expected {
                violations.push(NetworkViolation::StaleJunctionType {
                    node: node.id.clone(),
                    expected,
                    actual: node.junction_type,
                });
            }
        }

        for edge in self.edges.values() {
            if edge.center_line.len() < 2 {
                violations.push(NetworkViolation::ShortCenterLine(edge.id.clone()));
            }
            for node_id in [&edge.start_node_id, &edge.end_node_id] {
                match self.nodes.get(node_id) {
                    None => violations.push(NetworkViolation::MissingNode {
                        edge: edge.id.clone(),
                        node: node_id.clone(),
                    }),
                    Some(node) if !node.connected_edges.contains(&edge.id) => {
                        violations.push(NetworkViolation::UnlistedEdge {
                            edge: edge.id.clone(),
                            node: node_id.clone(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        violations
    }

    fn connect(&mut self, node_id: &NodeId, edge_id: &EdgeId) {
        if let Some(node) = self.nodes.get_mut(node_id) {
            node.connected_edges.push(edge_id.clone());
            node.junction_type = determine_junction_type(node.connected_edges.len());
        }
    }

    fn allocate_node_id(&mut self) -> NodeId {
        loop {
            let id = NodeId(format!("node-{}", self.next_node_id));
            self.next_node_id += 1;
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    fn allocate_edge_id(&mut self) -> EdgeId {
        loop {
            let id = EdgeId(format!("edge-{}", self.next_edge_id));
            self.next_edge_id += 1;
            if !self.edges.contains_key(&id) {
                return id;
            }
        }
    }
}

/// One past the largest numeric suffix among ids with `prefix`.
fn next_after<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix)?.parse::<u64>().ok())
        .map(|n| n.saturating_add(1))
        .max()
        .unwrap_or(0)
}

/// A copy of `network` with the valid edges of `preview` added.
pub fn create_road_edges_from_preview(
    preview: &RoadPreview,
    road_type: RoadType,
    network: &RoadNetwork,
) -> RoadNetwork {
    let mut next = network.clone();
    next.add_preview_edges(preview, road_type);
    next
}

/// A copy of `network` without `edge_id`. Unknown ids return an unchanged copy.
pub fn remove_edge_from_network(edge_id: &EdgeId, network: &RoadNetwork) -> RoadNetwork {
    let mut next = network.clone();
    next.remove_edge(edge_id);
    next
}

/// Every tile covered by a road centerline.
pub fn all_road_tiles(network: &RoadNetwork) -> HashSet<GridPoint> {
    network
        .edges
        .values()
        .flat_map(|edge| edge.center_line.iter().copied())
        .collect()
}

/// Edge whose centerline covers the tile under a world-space point.
pub fn road_edge_at_position(
    world: Vec2,
    cell_size: f32,
    network: &RoadNetwork,
) -> Option<&RoadEdge> {
    let cell = (world / cell_size).floor();
    let tile = GridPoint::new(cell.x as i32, cell.y as i32);
    network
        .edges
        .values()
        .find(|edge| edge.center_line.contains(&tile))
}
