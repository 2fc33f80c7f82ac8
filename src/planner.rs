use itertools::Itertools;
use log::{info, warn};
use std::fmt;

use crate::algorithm::SPF;
use crate::component::{apply_route, Ledger, LinkUpdate};
use crate::network::{LinkIndex, Network, Status};
use crate::utils::config::Config;
use crate::utils::error::{Error, Result};


#[derive(Clone, Debug, PartialEq)]
pub struct Demand {
    pub id: String,
    pub source: String,
    pub destination: String,
    /// Not sign-checked; a negative amount releases bandwidth.
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub demand_id: String,
    pub path: Vec<String>,
    pub cost: f64,
    pub updates: Vec<LinkUpdate>,
}

#[derive(Debug)]
pub enum Outcome {
    Routed(Assignment),
    Failed { demand_id: String, reason: Error },
}

/// Routes demands one after another over a network it owns. Each demand
/// sees the occupancy left behind by the ones before it.
pub struct Planner {
    network: Network,
    spf: SPF,
    ledger: Ledger,
}


impl Demand {
    pub fn new<I, S, D>(id: I, source: S, destination: D, amount: f64) -> Self
    where I: Into<String>, S: Into<String>, D: Into<String> {
        Demand { id: id.into(), source: source.into(), destination: destination.into(), amount }
    }
}

impl Outcome {
    fn from_result(demand: &Demand, result: Result<Assignment>) -> Self {
        match result {
            Ok(assignment) => Outcome::Routed(assignment),
            Err(reason) => {
                debug_assert!(reason.is_per_demand());
                warn!("demand {} failed: {}", demand.id, reason);
                Outcome::Failed { demand_id: demand.id.clone(), reason }
            }
        }
    }
    pub fn demand_id(&self) -> &str {
        match self {
            Outcome::Routed(assignment) => &assignment.demand_id,
            Outcome::Failed { demand_id, .. } => demand_id,
        }
    }
    pub fn is_routed(&self) -> bool {
        matches!(self, Outcome::Routed(_))
    }
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Outcome::Routed(assignment) => Some(assignment),
            Outcome::Failed { .. } => None,
        }
    }
    pub fn reason(&self) -> Option<&Error> {
        match self {
            Outcome::Routed(_) => None,
            Outcome::Failed { reason, .. } => Some(reason),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Routed(assignment) => {
                write!(f, "demand {}: {} with cost {}",
                       assignment.demand_id, assignment.path.iter().join(" -> "), assignment.cost)?;
                for update in assignment.updates.iter() {
                    write!(f, "\n- link #{} {} -> {}: occupancy {}",
                           update.link, update.ends.0, update.ends.1, update.occupancy)?;
                    if let Some(idle) = update.idle {
                        write!(f, ", idle {}", idle)?;
                    }
                }
                Ok(())
            }
            Outcome::Failed { demand_id, reason } => {
                write!(f, "demand {}: {}", demand_id, reason)
            }
        }
    }
}

impl Planner {
    pub fn new(network: Network, config: &Config) -> Self {
        Planner::with_cache(network, config.cache)
    }
    pub fn with_cache(network: Network, cache: bool) -> Self {
        Planner { network, spf: SPF::new(cache), ledger: Ledger::new() }
    }
    pub fn network(&self) -> &Network {
        &self.network
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn into_network(self) -> Network {
        self.network
    }
    pub fn set_status(&mut self, link: LinkIndex, status: Status) {
        self.network.set_status(link, status);
        self.spf.invalidate();
    }
    pub fn route(&mut self, demand: &Demand) -> Result<Assignment> {
        let assignment = assign(&mut self.network, &mut self.spf, demand)?;
        // a demand that stays on its source node carries nothing
        if !assignment.updates.is_empty() {
            self.ledger.record(&demand.id, &assignment.updates, demand.amount);
        }
        Ok(assignment)
    }
    /// Failures are kept per demand and never stop the remaining ones.
    pub fn process(&mut self, demands: &[Demand]) -> Vec<Outcome> {
        demands.iter()
            .map(|demand| {
                let result = self.route(demand);
                Outcome::from_result(demand, result)
            })
            .collect()
    }
}

/// The same pipeline as `Planner::process` for callers who keep their own
/// network and need no ledger.
pub fn process(network: &mut Network, demands: &[Demand]) -> Vec<Outcome> {
    let mut spf = SPF::new(true);
    demands.iter()
        .map(|demand| {
            let result = assign(network, &mut spf, demand);
            Outcome::from_result(demand, result)
        })
        .collect()
}

fn assign(network: &mut Network, spf: &mut SPF, demand: &Demand) -> Result<Assignment> {
    let route = spf.route(network, &demand.source, &demand.destination)?;
    let updates = apply_route(network, &route.edges, demand.amount);
    let path = route.names(network);
    info!("demand {} routed {} with cost {}", demand.id, path.iter().join(" -> "), route.cost);
    Ok(Assignment { demand_id: demand.id.clone(), path, cost: route.cost, updates })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::EdgeRecord;

    fn triangle() -> Network {
        Network::build(vec![
            EdgeRecord::new("A", "B", 1).with_capacity(100.0),
            EdgeRecord::new("B", "C", 1).with_capacity(100.0),
            EdgeRecord::new("A", "C", 5).with_capacity(100.0),
        ]).unwrap()
    }

    fn occupancies(network: &Network) -> Vec<f64> {
        network.links().map(|(_, link)| link.occupancy).collect()
    }

    #[test]
    fn it_accumulates_across_demands() {
        let mut planner = Planner::with_cache(triangle(), true);
        let outcomes = planner.process(&[
            Demand::new("d1", "A", "C", 10.0),
            Demand::new("d2", "A", "C", 5.0),
        ]);
        let first = outcomes[0].assignment().unwrap();
        assert_eq!(first.path, vec!["A", "B", "C"]);
        assert_eq!(first.cost, 2.0);
        assert_eq!(first.updates[0].occupancy, 10.0);
        let second = outcomes[1].assignment().unwrap();
        assert_eq!(second.updates[0].occupancy, 15.0);
        assert_eq!(second.updates[1].occupancy, 15.0);
        assert_eq!(second.updates[1].idle, Some(85.0));
        assert_eq!(occupancies(planner.network()), vec![15.0, 15.0, 0.0]);
        assert_eq!(planner.ledger().allocation(0, "d2"), 5.0);
        assert_eq!(planner.ledger().total(1), 15.0);
    }
    #[test]
    fn it_keeps_going_after_failures() {
        let mut planner = Planner::with_cache(triangle(), false);
        let outcomes = planner.process(&[
            Demand::new("d1", "A", "Z", 10.0),
            Demand::new("d2", "B", "C", 3.0),
        ]);
        assert_eq!(outcomes[0].demand_id(), "d1");
        assert!(matches!(outcomes[0].reason(), Some(Error::UnknownNode(n)) if n == "Z"));
        assert!(outcomes[1].is_routed());
        assert_eq!(occupancies(planner.network()), vec![0.0, 3.0, 0.0]);
        assert_eq!(planner.ledger().demand_ids(), &["d2".to_owned()]);
    }
    #[test]
    fn it_fails_unreachable_without_mutation() {
        let mut planner = Planner::with_cache(triangle(), true);
        planner.set_status(1.into(), Status::Disabled);
        planner.set_status(2.into(), Status::Disabled);
        let outcomes = planner.process(&[Demand::new("d1", "A", "C", 10.0)]);
        assert!(matches!(outcomes[0].reason(), Some(Error::NoPath(..))));
        assert_eq!(occupancies(planner.network()), vec![0.0, 0.0, 0.0]);
    }
    #[test]
    fn it_follows_status_changes_between_demands() {
        let mut planner = Planner::with_cache(triangle(), true);
        planner.route(&Demand::new("d1", "A", "C", 1.0)).unwrap();
        planner.set_status(1.into(), Status::Disabled);
        let assignment = planner.route(&Demand::new("d2", "A", "C", 1.0)).unwrap();
        assert_eq!(assignment.path, vec!["A", "C"]);
        assert_eq!(assignment.cost, 5.0);
        assert_eq!(occupancies(&planner.into_network()), vec![1.0, 1.0, 1.0]);
    }
    #[test]
    fn it_processes_a_borrowed_network() {
        let mut network = triangle();
        let outcomes = process(&mut network, &[
            Demand::new("d1", "A", "C", 10.0),
            Demand::new("d2", "C", "C", 10.0),
        ]);
        assert_eq!(outcomes.len(), 2);
        let stay = outcomes[1].assignment().unwrap();
        assert_eq!(stay.path, vec!["C"]);
        assert!(stay.updates.is_empty());
        assert_eq!(occupancies(&network), vec![10.0, 10.0, 0.0]);
    }
    #[test]
    fn it_leaves_local_demands_out_of_ledger() {
        let mut planner = Planner::with_cache(triangle(), true);
        let outcomes = planner.process(&[
            Demand::new("d1", "B", "B", 10.0),
            Demand::new("d2", "A", "B", 1.0),
        ]);
        assert!(outcomes[0].is_routed());
        assert_eq!(planner.ledger().demand_ids(), &["d2".to_owned()]);
    }
    #[test]
    fn it_displays_outcomes() {
        let mut planner = Planner::with_cache(triangle(), true);
        let outcomes = planner.process(&[
            Demand::new("d1", "A", "B", 10.0),
            Demand::new("d2", "A", "Q", 1.0),
        ]);
        assert_eq!(outcomes[0].to_string(),
                   "demand d1: A -> B with cost 1\n- link #0 A -> B: occupancy 10, idle 90");
        assert_eq!(outcomes[1].to_string(), "demand d2: node Q is not in the topology");
    }
}
