use hashbrown::HashSet;


/// What a per-demand column layout must change to match a new demand set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reconciliation {
    pub kept: Vec<String>,
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
}

impl Reconciliation {
    /// Retained columns keep their place; new ones go to the end.
    pub fn columns(&self) -> Vec<String> {
        self.kept.iter()
            .chain(self.to_add.iter())
            .cloned()
            .collect()
    }
    pub fn is_unchanged(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

pub fn reconcile(existing: &[String], desired: &[String]) -> Reconciliation {
    let existing_set: HashSet<&str> = existing.iter().map(String::as_str).collect();
    let desired_set: HashSet<&str> = desired.iter().map(String::as_str).collect();
    let mut added = HashSet::new();
    let (kept, to_remove): (Vec<String>, Vec<String>) = existing.iter()
        .cloned()
        .partition(|id| desired_set.contains(id.as_str()));
    let to_add = desired.iter()
        .filter(|id| !existing_set.contains(id.as_str()))
        .filter(|id| added.insert(id.as_str()))
        .cloned()
        .collect();
    Reconciliation { kept, to_add, to_remove }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn it_reconciles_columns() {
        let plan = reconcile(&ids(&["d1", "d2", "d3"]), &ids(&["d3", "d4", "d1", "d4"]));
        assert_eq!(plan.to_add, ids(&["d4"]));
        assert_eq!(plan.to_remove, ids(&["d2"]));
        assert_eq!(plan.columns(), ids(&["d1", "d3", "d4"]));
        assert!(!plan.is_unchanged());
    }
    #[test]
    fn it_leaves_matching_columns_alone() {
        let plan = reconcile(&ids(&["d1", "d2"]), &ids(&["d2", "d1"]));
        assert!(plan.is_unchanged());
        assert_eq!(plan.columns(), ids(&["d1", "d2"]));
        let plan = reconcile(&[], &ids(&["d1"]));
        assert_eq!(plan.columns(), ids(&["d1"]));
    }
}
