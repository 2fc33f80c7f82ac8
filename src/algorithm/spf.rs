use std::collections::HashMap;

use super::base::dijkstra::{shortest_paths, ShortestPaths};
use super::route::Route;
use crate::network::{Network, NodeIndex};
use crate::utils::error::{Error, Result};


/// Shortest-path-first router. Costs and statuses are all Dijkstra looks
/// at, so trees stay valid until a status changes and `invalidate` is called.
#[derive(Default)]
pub struct SPF {
    cache: Option<HashMap<NodeIndex, ShortestPaths>>,
}


impl SPF {
    pub fn new(cache: bool) -> Self {
        SPF { cache: if cache { Some(HashMap::new()) } else { None } }
    }
    pub fn invalidate(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }
    /// Reconstructs inside the cached tree, so a cache hit allocates only
    /// the route itself.
    pub fn reconstruct(&mut self, network: &Network, root: NodeIndex, target: NodeIndex) -> Option<Route> {
        match self.cache.as_mut() {
            Some(cache) => cache.entry(root)
                .or_insert_with(|| shortest_paths(network, root))
                .reconstruct(target),
            None => shortest_paths(network, root).reconstruct(target),
        }
    }
    pub fn route(&mut self, network: &Network, src: &str, dst: &str) -> Result<Route> {
        let root = network.node(src)
            .ok_or_else(|| Error::UnknownNode(src.to_owned()))?;
        let target = network.node(dst)
            .ok_or_else(|| Error::UnknownNode(dst.to_owned()))?;
        self.reconstruct(network, root, target)
            .ok_or_else(|| Error::NoPath(src.to_owned(), dst.to_owned()))
    }
    pub fn cached(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.len())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{EdgeRecord, LinkIndex, Status};

    fn triangle() -> Network {
        Network::build(vec![
            EdgeRecord::new("A", "B", 1),
            EdgeRecord::new("B", "C", 1),
            EdgeRecord::new("A", "C", 5),
            EdgeRecord::new("X", "Y", 1),
        ]).unwrap()
    }

    #[test]
    fn it_routes_by_name() {
        let network = triangle();
        let mut spf = SPF::new(true);
        let route = spf.route(&network, "A", "C").unwrap();
        assert_eq!(route.names(&network), vec!["A", "B", "C"]);
        spf.route(&network, "A", "B").unwrap();
        assert_eq!(spf.cached(), 1);
    }
    #[test]
    fn it_reports_unknown_and_unreachable() {
        let network = triangle();
        let mut spf = SPF::new(false);
        assert!(matches!(spf.route(&network, "A", "Z"), Err(Error::UnknownNode(n)) if n == "Z"));
        assert!(matches!(spf.route(&network, "Z", "A"), Err(Error::UnknownNode(n)) if n == "Z"));
        assert!(matches!(spf.route(&network, "A", "X"), Err(Error::NoPath(..))));
        assert_eq!(spf.cached(), 0);
    }
    #[test]
    fn it_reuses_one_tree_per_source() {
        let network = triangle();
        let mut spf = SPF::new(true);
        let a = network.node("A").unwrap();
        let c = network.node("C").unwrap();
        for _ in 0..3 {
            let route = spf.reconstruct(&network, a, c).unwrap();
            assert_eq!(route.cost, 2.0);
        }
        assert_eq!(spf.cached(), 1);
        assert_eq!(spf.reconstruct(&network, a, network.node("X").unwrap()), None);
        assert_eq!(spf.cached(), 1);
    }
    #[test]
    fn it_recomputes_after_invalidate() {
        let mut network = triangle();
        let mut spf = SPF::new(true);
        assert_eq!(spf.route(&network, "A", "C").unwrap().cost, 2.0);
        network.set_status(LinkIndex::from(1), Status::Disabled);
        assert_eq!(spf.route(&network, "A", "C").unwrap().cost, 2.0);
        spf.invalidate();
        assert_eq!(spf.route(&network, "A", "C").unwrap().cost, 5.0);
    }
}
