//! Undirected skeleton graph with value-deduplicated nodes.
//!
//! Invariants
//! - Each distinct point (exact value, `-0.0 == 0.0`) is one node.
//! - No self-loops, no parallel edges; adjacency lists keep insertion order.
//! - Edge weight is implicit: the Euclidean distance between endpoints.

use std::collections::{HashMap, VecDeque};

use crate::geom2::{lex_cmp, point_key, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct SkeletonGraph {
    nodes: Vec<Vec2>,
    adj: Vec<Vec<NodeId>>,
    index: HashMap<(u64, u64), NodeId>,
    edge_count: usize,
}

impl SkeletonGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I: IntoIterator<Item = (Vec2, Vec2)>>(edges: I) -> Self {
        let mut g = Self::new();
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    /// Insert (or look up) the node at `p`.
    pub fn add_node(&mut self, p: Vec2) -> NodeId {
        let key = point_key(p);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(p);
        self.adj.push(Vec::new());
        self.index.insert(key, id);
        id
    }

    /// Returns `false` for self-loops and already-present edges.
    pub fn add_edge(&mut self, a: Vec2, b: Vec2) -> bool {
        let ia = self.add_node(a);
        let ib = self.add_node(b);
        if ia == ib || self.adj[ia.0].contains(&ib) {
            return false;
        }
        self.adj[ia.0].push(ib);
        self.adj[ib.0].push(ia);
        self.edge_count += 1;
        true
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn point(&self, id: NodeId) -> Vec2 {
        self.nodes[id.0]
    }

    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adj[id.0]
    }

    pub fn node_id(&self, p: Vec2) -> Option<NodeId> {
        self.index.get(&point_key(p)).copied()
    }

    #[inline]
    pub fn edge_length(&self, a: NodeId, b: NodeId) -> f64 {
        (self.nodes[b.0] - self.nodes[a.0]).norm()
    }

    /// Every edge once, as endpoint pairs.
    pub fn edges(&self) -> Vec<[Vec2; 2]> {
        let mut out = Vec::with_capacity(self.edge_count);
        for (i, nbrs) in self.adj.iter().enumerate() {
            for &j in nbrs {
                if i < j.0 {
                    out.push([self.nodes[i], self.nodes[j.0]]);
                }
            }
        }
        out
    }

    /// Connected components, each sorted by node id; ordered by smallest id.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut seen = vec![false; self.nodes.len()];
        let mut out = Vec::new();
        for s in 0..self.nodes.len() {
            if seen[s] {
                continue;
            }
            seen[s] = true;
            let mut comp = vec![NodeId(s)];
            let mut queue = VecDeque::from([NodeId(s)]);
            while let Some(u) = queue.pop_front() {
                for &v in &self.adj[u.0] {
                    if !seen[v.0] {
                        seen[v.0] = true;
                        comp.push(v);
                        queue.push_back(v);
                    }
                }
            }
            comp.sort_unstable();
            out.push(comp);
        }
        out
    }

    /// Largest component by node count; ties go to the component found first
    /// (the one holding the lowest node id).
    pub fn largest_component(&self) -> Option<Vec<NodeId>> {
        let mut best: Option<Vec<NodeId>> = None;
        for comp in self.components() {
            if best.as_ref().is_none_or(|b| comp.len() > b.len()) {
                best = Some(comp);
            }
        }
        best
    }

    /// Hop-count eccentricity of `src`, or `None` once it exceeds `cutoff`.
    fn eccentricity_within(&self, src: NodeId, cutoff: usize, dist: &mut [usize]) -> Option<usize> {
        dist.fill(usize::MAX);
        dist[src.0] = 0;
        let mut ecc = 0;
        let mut queue = VecDeque::from([src]);
        while let Some(u) = queue.pop_front() {
            let du = dist[u.0];
            for &v in &self.adj[u.0] {
                if dist[v.0] == usize::MAX {
                    dist[v.0] = du + 1;
                    if du + 1 > cutoff {
                        return None;
                    }
                    ecc = ecc.max(du + 1);
                    queue.push_back(v);
                }
            }
        }
        Some(ecc)
    }

    /// Graph center of a connected component: minimum hop-count eccentricity,
    /// ties broken by the lexicographically lowest point.
    pub fn center_of(&self, component: &[NodeId]) -> Option<NodeId> {
        let mut dist = vec![usize::MAX; self.nodes.len()];
        let mut best: Option<(usize, NodeId)> = None;
        for &u in component {
            let cutoff = best.map_or(usize::MAX, |(e, _)| e);
            let Some(ecc) = self.eccentricity_within(u, cutoff, &mut dist) else {
                continue;
            };
            best = match best {
                None => Some((ecc, u)),
                Some((be, bu)) => {
                    let better = ecc < be
                        || (ecc == be && lex_cmp(&self.nodes[u.0], &self.nodes[bu.0]).is_lt());
                    if better {
                        Some((ecc, u))
                    } else {
                        Some((be, bu))
                    }
                }
            };
        }
        best.map(|(_, u)| u)
    }
}
