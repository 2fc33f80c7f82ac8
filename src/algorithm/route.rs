use super::base::dijkstra::ShortestPaths;
use crate::network::{Network, NodeIndex, Path};


#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub nodes: Vec<NodeIndex>,
    /// The exact directional edges taken, one fewer than `nodes`.
    pub edges: Path,
    pub cost: f64,
}

impl Route {
    pub fn names(&self, network: &Network) -> Vec<String> {
        self.nodes.iter()
            .map(|&node| network.name(node).to_owned())
            .collect()
    }
    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

impl ShortestPaths {
    /// Walks predecessors back to the root. `None` means `dst` is unreachable.
    pub fn reconstruct(&self, dst: NodeIndex) -> Option<Route> {
        let cost = self.cost(dst)?;
        let mut nodes = vec![dst];
        let mut edges = vec![];
        let mut cursor = dst;
        while let Some((pred, edge)) = self.visit(cursor)?.pred {
            nodes.push(pred);
            edges.push(edge);
            cursor = pred;
        }
        nodes.reverse();
        edges.reverse();
        Some(Route { nodes, edges, cost })
    }
}
