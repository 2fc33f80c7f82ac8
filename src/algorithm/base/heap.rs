use std::cmp::Reverse;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;


pub type MyMinHeap<I> = PriorityQueue<I, Priority>;


/// Lower cost first; among equal costs, the earlier push wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority (Reverse<(OrderedFloat<f64>, u64)>);

impl Priority {
    pub fn new(cost: f64, seq: u64) -> Self {
        Self (Reverse((OrderedFloat(cost), seq)))
    }
    pub fn cost(&self) -> f64 {
        ((self.0).0).0.into_inner()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_pops_cheapest_then_earliest() {
        let mut heap = MyMinHeap::new();
        heap.push("late", Priority::new(1.0, 2));
        heap.push("far", Priority::new(4.0, 0));
        heap.push("early", Priority::new(1.0, 1));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|(item, priority)| (item, priority.cost()))
            .collect();
        assert_eq!(order, vec![("early", 1.0), ("late", 1.0), ("far", 4.0)]);
    }
}
