use std::collections::HashMap;

use super::accumulator::LinkUpdate;


/// Which demand put how much bandwidth on which link.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    allocations: HashMap<usize, Vec<(String, f64)>>,
    demand_ids: Vec<String>,
}


impl Ledger {
    pub fn new() -> Self {
        Ledger { ..Default::default() }
    }
    pub fn record(&mut self, demand_id: &str, updates: &[LinkUpdate], amount: f64) {
        if !self.demand_ids.iter().any(|id| id == demand_id) {
            self.demand_ids.push(demand_id.to_owned());
        }
        for update in updates {
            let entries = self.allocations.entry(update.link).or_default();
            match entries.iter_mut().find(|(id, _)| id == demand_id) {
                Some((_, carried)) => *carried += amount,
                None => entries.push((demand_id.to_owned(), amount)),
            }
        }
    }
    /// Demand ids in the order they were first recorded.
    pub fn demand_ids(&self) -> &[String] {
        &self.demand_ids
    }
    pub fn allocations(&self, link: usize) -> &[(String, f64)] {
        self.allocations.get(&link)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[])
    }
    pub fn allocation(&self, link: usize, demand_id: &str) -> f64 {
        self.allocations(link).iter()
            .find(|(id, _)| id == demand_id)
            .map_or(0.0, |&(_, amount)| amount)
    }
    pub fn total(&self, link: usize) -> f64 {
        self.allocations(link).iter()
            .map(|(_, amount)| amount)
            .sum()
    }
}
