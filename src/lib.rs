pub mod algorithm;
pub mod component;
pub mod network;
pub mod planner;
pub mod utils;

pub use network::Network;
pub use planner::{process, Assignment, Demand, Outcome, Planner};
