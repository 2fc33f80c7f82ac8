use std::collections::{HashMap, HashSet};
use std::f64::INFINITY as INF;

use super::heap::{MyMinHeap, Priority};
use crate::network::{EdgeIndex, Network, NodeIndex};


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visit {
    /// Previous hop and the edge taken from it; `None` only at the root.
    pub pred: Option<(NodeIndex, EdgeIndex)>,
    pub cost: f64,
}

/// Every node reachable from `root` over enabled links. Unreachable nodes
/// are simply absent.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    root: NodeIndex,
    visits: HashMap<NodeIndex, Visit>,
}

impl ShortestPaths {
    pub fn root(&self) -> NodeIndex {
        self.root
    }
    pub fn visit(&self, node: NodeIndex) -> Option<&Visit> {
        self.visits.get(&node)
    }
    pub fn cost(&self, node: NodeIndex) -> Option<f64> {
        self.visits.get(&node).map(|visit| visit.cost)
    }
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.visits.contains_key(&node)
    }
    pub fn len(&self) -> usize {
        self.visits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}


pub fn shortest_paths(graph: &Network, r: NodeIndex) -> ShortestPaths {
    let mut visits = HashMap::new();
    let mut done = HashSet::new();
    let mut heap = MyMinHeap::new();
    let mut seq = 0u64;

    visits.insert(r, Visit { pred: None, cost: 0.0 });
    heap.push(r, Priority::new(0.0, seq));

    while let Some((v, rv_dist)) = heap.pop() {
        done.insert(v);
        let rv_dist = rv_dist.cost();
        for e in graph.outgoings(v) {
            if !graph.is_enabled(e) { continue; }
            let u = graph.endpoints(e).1;
            if done.contains(&u) { continue; }

            let ru_dist = rv_dist + graph.cost_on(e);
            let known = visits.get(&u).map_or(INF, |visit: &Visit| visit.cost);
            // strict comparison keeps the first discovered predecessor on ties
            if ru_dist >= known { continue; }

            visits.insert(u, Visit { pred: Some((v, e)), cost: ru_dist });
            seq += 1;
            match heap.get(&u) {
                Some(_) => { heap.change_priority(&u, Priority::new(ru_dist, seq)); },
                None    => { heap.push(u, Priority::new(ru_dist, seq)); },
            }
        }
    }
    ShortestPaths { root: r, visits }
}
