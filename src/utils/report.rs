use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use itertools::Itertools;
use log::info;

use super::error::{Error, Result};
use crate::component::{reconcile, Ledger, Reconciliation};
use crate::network::Network;
use crate::planner::Outcome;

/// Fixed leading columns of the link table; everything after them is one
/// column per demand id.
pub const LINK_HEADERS: [&str; 9] = [
    "link", "node_a", "node_b", "cost", "status",
    "capacity", "occupancy", "idle", "total_demand",
];

/// One row per demand: id, path, cost, then an `a->b`, occupancy, idle
/// triplet for every link on the path. Failed demands carry the reason.
pub fn write_routes<W: io::Write>(writer: W, outcomes: &[Outcome]) -> Result<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);
    for outcome in outcomes {
        let mut row = vec![outcome.demand_id().to_owned()];
        match outcome {
            Outcome::Routed(assignment) => {
                row.push(assignment.path.iter().join(" -> "));
                row.push(assignment.cost.to_string());
                for update in assignment.updates.iter() {
                    row.push(format!("{}->{}", update.ends.0, update.ends.1));
                    row.push(update.occupancy.to_string());
                    row.push(optional(update.idle));
                }
            }
            Outcome::Failed { reason, .. } => {
                row.push(String::new());
                row.push(String::new());
                row.push(reason.to_string());
            }
        }
        wtr.write_record(&row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_links<W: io::Write>(writer: W, network: &Network, ledger: &Ledger,
                                 columns: &[String]) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    let header = LINK_HEADERS.iter()
        .map(|&h| h.to_owned())
        .chain(columns.iter().cloned());
    wtr.write_record(header)?;
    for (ix, link) in network.links() {
        let mut row = vec![
            ix.index().to_string(),
            network.name(link.ends.0).to_owned(),
            network.name(link.ends.1).to_owned(),
            link.cost.to_string(),
            link.status.as_str().to_owned(),
            optional(link.capacity),
            link.occupancy.to_string(),
            optional(link.idle()),
            ledger.total(ix.index()).to_string(),
        ];
        row.extend(columns.iter()
            .map(|id| ledger.allocation(ix.index(), id).to_string()));
        wtr.write_record(&row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Demand columns already present in a link table header.
pub fn existing_columns<R: io::Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let columns = rdr.headers()?
        .iter()
        .skip(LINK_HEADERS.len())
        .map(String::from)
        .collect();
    Ok(columns)
}

pub fn save_routes(path: &str, outcomes: &[Outcome]) -> Result<()> {
    let file = File::create(path).map_err(|cause| Error::io(path, cause))?;
    write_routes(file, outcomes)?;
    info!("wrote {} demand rows to {}", outcomes.len(), path);
    Ok(())
}

/// Rewrites the link table, keeping the column order of demands that are
/// still present and dropping the ones that are gone.
pub fn save_links(path: &str, network: &Network, ledger: &Ledger) -> Result<Reconciliation> {
    let existing = if Path::new(path).exists() {
        let file = File::open(path).map_err(|cause| Error::io(path, cause))?;
        existing_columns(file)?
    } else {
        vec![]
    };
    let plan = reconcile(&existing, ledger.demand_ids());
    if !plan.is_unchanged() {
        info!("link table {}: adding {:?}, removing {:?}", path, plan.to_add, plan.to_remove);
    }
    let file = File::create(path).map_err(|cause| Error::io(path, cause))?;
    write_links(file, network, ledger, &plan.columns())?;
    Ok(plan)
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::EdgeRecord;
    use crate::planner::{Demand, Planner};

    fn planned() -> (Planner, Vec<Outcome>) {
        let network = Network::build(vec![
            EdgeRecord::new("A", "B", 1).with_capacity(100.0),
            EdgeRecord::new("B", "C", 1),
        ]).unwrap();
        let mut planner = Planner::with_cache(network, true);
        let outcomes = planner.process(&[
            Demand::new("d1", "A", "C", 10.0),
            Demand::new("d2", "C", "X", 1.0),
            Demand::new("d3", "B", "C", 2.0),
        ]);
        (planner, outcomes)
    }

    #[test]
    fn it_writes_route_rows() {
        let (_, outcomes) = planned();
        let mut buffer = vec![];
        write_routes(&mut buffer, &outcomes).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "\
d1,A -> B -> C,2,A->B,10,90,B->C,10,
d2,,,node X is not in the topology
d3,B -> C,1,B->C,12,
");
    }
    #[test]
    fn it_writes_link_table() {
        let (planner, _) = planned();
        let columns = vec!["d3".to_owned(), "d1".to_owned()];
        let mut buffer = vec![];
        write_links(&mut buffer, planner.network(), planner.ledger(), &columns).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "\
link,node_a,node_b,cost,status,capacity,occupancy,idle,total_demand,d3,d1
0,A,B,1,ENABLED,100,10,90,10,0,10
1,B,C,1,ENABLED,,12,,12,2,10
");
        let columns = existing_columns(text.as_bytes()).unwrap();
        assert_eq!(columns, vec!["d3", "d1"]);
    }
}
