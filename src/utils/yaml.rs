use std::fs;

use log::info;
use serde::Deserialize;

use super::config::Config;
use super::error::{Error, Result};
use crate::network::{Cell, EdgeRecord, Network};
use crate::planner::Demand;

#[derive(Deserialize)]
struct NetworkYaml {
    edges: Vec<EdgeRecord>,
}

#[derive(Deserialize)]
struct DemandsYaml {
    demands: Vec<DemandYaml>,
}

#[derive(Deserialize)]
struct DemandYaml {
    id: Cell,
    source: Cell,
    destination: Cell,
    amount: f64,
}

pub fn load_network(path: &str) -> Result<Network> {
    let network = parse_network(&read(path)?)?;
    info!("loaded {} nodes and {} links from {}",
          network.node_count(), network.link_count(), path);
    Ok(network)
}

pub fn load_demands(path: &str) -> Result<Vec<Demand>> {
    let demands = parse_demands(&read(path)?)?;
    info!("loaded {} demands from {}", demands.len(), path);
    Ok(demands)
}

pub fn load_config(path: &str) -> Result<Config> {
    let config = serde_yaml::from_str(&read(path)?)?;
    Ok(config)
}

pub fn parse_network(text: &str) -> Result<Network> {
    let yaml: NetworkYaml = serde_yaml::from_str(text)?;
    Network::build(yaml.edges)
}

pub fn parse_demands(text: &str) -> Result<Vec<Demand>> {
    let yaml: DemandsYaml = serde_yaml::from_str(text)?;
    Ok(flatten(yaml.demands))
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|cause| Error::io(path, cause))
}

fn flatten(demands: Vec<DemandYaml>) -> Vec<Demand> {
    demands.into_iter()
        .map(|d| Demand::new(d.id.canonical(), d.source.canonical(),
                             d.destination.canonical(), d.amount))
        .collect()
}
