mod accumulator;
mod columns;
mod ledger;

pub use accumulator::{apply_demand, apply_route, LinkUpdate};
pub use columns::{reconcile, Reconciliation};
pub use ledger::Ledger;
