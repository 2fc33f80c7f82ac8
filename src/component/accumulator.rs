use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

use crate::network::{EdgeIndex, LinkIndex, Network, NodeIndex};
use crate::utils::error::{Error, Result};


#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkUpdate {
    pub link: usize,
    /// Endpoint names in the direction the demand travelled.
    pub ends: (String, String),
    pub occupancy: f64,
    pub idle: Option<f64>,
}


/// Adds `amount` to the occupancy of the link under every edge. Both
/// directions of a link share its state, so the paired view follows along.
/// Capacity is never enforced; a negative idle is the planning signal.
pub fn apply_route(network: &mut Network, edges: &[EdgeIndex], amount: f64) -> Vec<LinkUpdate> {
    edges.iter()
        .map(|&edge| {
            let link_ix: LinkIndex = network.link_of(edge);
            network.link_mut(link_ix).occupancy += amount;
            let update = LinkUpdate {
                link: link_ix.index(),
                ends: network.ends_named(edge),
                occupancy: network.link(link_ix).occupancy,
                idle: network.link(link_ix).idle(),
            };
            if network.link(link_ix).is_oversubscribed() {
                warn!("link #{} {}->{} oversubscribed, idle {:?}",
                      update.link, update.ends.0, update.ends.1, update.idle);
            }
            debug!("link #{} {}->{} occupancy {} idle {:?}",
                   update.link, update.ends.0, update.ends.1, update.occupancy, update.idle);
            update
        })
        .collect()
}

/// Same as `apply_route` for callers holding only a node sequence: each hop
/// takes the first enabled edge in adjacency order. Nothing is mutated
/// unless every hop resolves.
pub fn apply_demand(network: &mut Network, nodes: &[NodeIndex], amount: f64) -> Result<Vec<LinkUpdate>> {
    let edges = nodes.iter()
        .tuple_windows()
        .map(|(&from, &to)| network.find_edge(from, to)
            .ok_or_else(|| Error::NotAdjacent(network.name(from).to_owned(),
                                              network.name(to).to_owned())))
        .collect::<Result<Vec<EdgeIndex>>>()?;
    Ok(apply_route(network, &edges, amount))
}
