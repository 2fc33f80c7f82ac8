use hashbrown::HashMap;
use serde::Deserialize;

use super::record::EdgeRecord;
use crate::utils::error::{Error, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

/// One direction of a link; every link owns exactly two of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    fn new(ix: usize) -> Self {
        EdgeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeIndex {
    fn from(ix: usize) -> Self {
        EdgeIndex::new(ix)
    }
}

/// A physical link, numbered by the order of its topology record.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct LinkIndex(usize);

impl LinkIndex {
    fn new(ix: usize) -> Self {
        LinkIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for LinkIndex {
    fn from(ix: usize) -> Self {
        LinkIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Enabled,
    Disabled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Enabled => "ENABLED",
            Status::Disabled => "DISABLED",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Enabled
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    edges: Vec<EdgeIndex>,
}

#[derive(Clone, Debug)]
pub struct Edge {
    ends: (NodeIndex, NodeIndex),
    link: LinkIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub ends: (NodeIndex, NodeIndex),
    pub cost: f64,
    pub status: Status,
    pub capacity: Option<f64>,
    pub occupancy: f64,
}

impl Node {
    pub fn new(name: String) -> Self {
        Self { name, edges: vec![] }
    }
}
impl Edge {
    pub fn new(ends: (NodeIndex, NodeIndex), link: LinkIndex) -> Self {
        Edge { ends, link }
    }
}

impl Link {
    pub fn is_enabled(&self) -> bool {
        self.status == Status::Enabled
    }
    /// Absent when the topology gave no capacity for this link.
    pub fn idle(&self) -> Option<f64> {
        self.capacity.map(|capacity| capacity - self.occupancy)
    }
    pub fn is_oversubscribed(&self) -> bool {
        self.idle().map_or(false, |idle| idle < 0.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    links: Vec<Link>,
    lookup: HashMap<String, NodeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    /// Builds the graph from topology records. Every cost is checked before
    /// anything is inserted, so a bad record never leaves a partial graph.
    pub fn build(records: Vec<EdgeRecord>) -> Result<Self> {
        let costs = records.iter()
            .enumerate()
            .map(|(row, record)| record.cost.number()
                .ok_or_else(|| Error::NonNumericCost(row, record.cost.to_string())))
            .collect::<Result<Vec<f64>>>()?;
        let mut network = Network::new();
        for (record, cost) in records.into_iter().zip(costs) {
            let capacity = record.effective_capacity();
            let end0 = network.add_node(record.ends[0].canonical());
            let end1 = network.add_node(record.ends[1].canonical());
            network.add_link((end0, end1), Link {
                ends: (end0, end1),
                cost,
                status: record.status,
                capacity,
                occupancy: record.occupancy,
            });
        }
        Ok(network)
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.lookup.get(name).copied()
    }
    pub fn name(&self, node: NodeIndex) -> &str {
        debug_assert!(node.index() < self.nodes.len());
        &self.nodes[node.index()].name
    }
    pub fn endpoints(&self, edge: EdgeIndex) -> &(NodeIndex, NodeIndex) {
        debug_assert!(edge.index() < self.edges.len());
        &self.edges[edge.index()].ends
    }
    pub fn link_of(&self, edge: EdgeIndex) -> LinkIndex {
        debug_assert!(edge.index() < self.edges.len());
        self.edges[edge.index()].link
    }
    pub fn link(&self, link: LinkIndex) -> &Link {
        debug_assert!(link.index() < self.links.len());
        &self.links[link.index()]
    }
    pub fn link_mut(&mut self, link: LinkIndex) -> &mut Link {
        debug_assert!(link.index() < self.links.len());
        &mut self.links[link.index()]
    }
    pub fn links(&self) -> impl Iterator<Item=(LinkIndex, &Link)> + '_ {
        self.links.iter()
            .enumerate()
            .map(|(ix, link)| (LinkIndex::new(ix), link))
    }
    /// Outgoing edges in the order their records were inserted.
    pub fn outgoings(&self, node: NodeIndex)
        -> impl Iterator<Item=EdgeIndex> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].edges.iter().cloned()
    }
    pub fn neighbors(&self, node: NodeIndex)
        -> impl Iterator<Item=NodeIndex> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].edges.iter()
            .map(move |&e| self.edges[e.index()].ends.1)
    }
    pub fn cost_on(&self, edge: EdgeIndex) -> f64 {
        self.link(self.link_of(edge)).cost
    }
    pub fn is_enabled(&self, edge: EdgeIndex) -> bool {
        self.link(self.link_of(edge)).is_enabled()
    }
    pub fn set_status(&mut self, link: LinkIndex, status: Status) {
        self.link_mut(link).status = status;
    }
    /// First enabled edge from `from` to `to` in adjacency order.
    pub fn find_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeIndex> {
        self.outgoings(from)
            .find(|&e| self.endpoints(e).1 == to && self.is_enabled(e))
    }
    pub fn ends_named(&self, edge: EdgeIndex) -> (String, String) {
        let &(end0, end1) = self.endpoints(edge);
        (self.name(end0).to_owned(), self.name(end1).to_owned())
    }
    fn add_node(&mut self, name: String) -> NodeIndex {
        if let Some(&node) = self.lookup.get(&name) {
            return node;
        }
        let node = NodeIndex::new(self.nodes.len());
        self.lookup.insert(name.clone(), node);
        self.nodes.push(Node::new(name));
        node
    }
    fn add_link(&mut self, (end0, end1): (NodeIndex, NodeIndex), link: Link) {
        let link_ix = LinkIndex::new(self.links.len());
        self.links.push(link);
        self.nodes[end0.index()].edges.push(EdgeIndex::new(self.edges.len()));
        self.edges.push(Edge::new((end0, end1), link_ix));
        self.nodes[end1.index()].edges.push(EdgeIndex::new(self.edges.len()));
        self.edges.push(Edge::new((end1, end0), link_ix));
    }
}
