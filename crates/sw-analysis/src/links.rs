//! Internal link graph over the document store.

use std::collections::HashMap;

use rustworkx_core::connectivity::connected_components;
use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};
use sw_core::entities::{HubDocument, LinkGraphSummary, OrphanDocument};

use crate::store::DocumentStore;

/// Directed graph with one node per document, in store order.
///
/// Edge `A -> B` exists iff B's URL occurs as a literal substring of A's body
/// and A and B are different documents. URLs are compared exactly as stored:
/// trailing slashes, scheme and case all matter.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: DiGraph<String, ()>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl LinkGraph {
    /// Scan every ordered pair of documents.
    ///
    /// Quadratic in the number of documents, which is fine for a single
    /// site's published posts. Past that, screen bodies against all URLs at
    /// once with a prefix automaton instead of one `contains` per pair.
    #[must_use]
    pub fn build(store: &DocumentStore) -> Self {
        let documents = store.documents();
        let mut graph = DiGraph::with_capacity(documents.len(), 0);

        let mut id_to_index = HashMap::with_capacity(documents.len());
        let nodes: Vec<NodeIndex> = documents
            .iter()
            .map(|doc| {
                let idx = graph.add_node(doc.url.clone());
                id_to_index.insert(doc.url.clone(), idx);
                idx
            })
            .collect();

        for (a, source) in documents.iter().enumerate() {
            for (b, target) in documents.iter().enumerate() {
                if a != b && source.body.contains(target.url.as_str()) {
                    graph.add_edge(nodes[a], nodes[b], ());
                }
            }
        }

        Self { graph, id_to_index }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Weakly connected component count.
    #[must_use]
    pub fn components(&self) -> usize {
        connected_components(&self.graph).len()
    }

    /// Documents linked from `url`, in store order.
    #[must_use]
    pub fn out_edges(&self, url: &str) -> Vec<&str> {
        self.neighbors(url, Direction::Outgoing)
    }

    /// Documents linking to `url`, in store order.
    #[must_use]
    pub fn in_edges(&self, url: &str) -> Vec<&str> {
        self.neighbors(url, Direction::Incoming)
    }

    fn neighbors(&self, url: &str, direction: Direction) -> Vec<&str> {
        let Some(&node) = self.id_to_index.get(url) else {
            return Vec::new();
        };
        let mut indices: Vec<NodeIndex> = self.graph.neighbors_directed(node, direction).collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph.edges_directed(node, Direction::Outgoing).count()
    }

    fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph.edges_directed(node, Direction::Incoming).count()
    }

    /// Documents nobody links to, in store order. `store` must be the one the
    /// graph was built from.
    #[must_use]
    pub fn orphans(&self, store: &DocumentStore) -> Vec<OrphanDocument> {
        self.graph
            .node_indices()
            .zip(store.iter())
            .filter(|(node, _)| self.in_degree(*node) == 0)
            .map(|(_, doc)| OrphanDocument {
                id: doc.id.clone(),
                url: doc.url.clone(),
                title: doc.title.clone(),
            })
            .collect()
    }

    /// Documents linking out to more than `threshold` others, most outbound
    /// links first. Equal out-degrees keep store order.
    #[must_use]
    pub fn hubs(&self, store: &DocumentStore, threshold: usize) -> Vec<HubDocument> {
        let mut hubs: Vec<HubDocument> = self
            .graph
            .node_indices()
            .zip(store.iter())
            .filter_map(|(node, doc)| {
                let outbound = self.out_degree(node);
                (outbound > threshold).then(|| HubDocument {
                    id: doc.id.clone(),
                    url: doc.url.clone(),
                    title: doc.title.clone(),
                    outbound,
                    backlinks: self.in_degree(node),
                })
            })
            .collect();
        hubs.sort_by(|a, b| b.outbound.cmp(&a.outbound));
        hubs
    }

    #[must_use]
    pub fn summary(&self, orphan_count: usize, hub_count: usize, hub_threshold: usize) -> LinkGraphSummary {
        LinkGraphSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            components: self.components(),
            orphan_count,
            hub_count,
            hub_threshold,
        }
    }
}
