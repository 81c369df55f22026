use crate::collections::FrontierSet;
use crate::grid::Position;

use std::{cmp::Ordering, collections::BinaryHeap, fmt::Debug};


/// Entry on the frontier heap
/// Ordered by priority, then by insertion order, so equal priorities come out FIFO
#[derive(Debug)]
struct Entry<P> {
    priority: P,
    count: u64, // insertion counter, strictly increasing
    pos: Position,
}

impl<P: PartialOrd> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the largest, so both keys are reversed
        other.priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.count.cmp(&self.count))
    }
}
impl<P: PartialOrd> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P: PartialOrd> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<P: PartialOrd> Eq for Entry<P> {}


/// Priority queue of discovered cells plus the set of cells currently queued
/// A cell is never queued twice at once
pub(crate) struct Frontier<P> {
    heap: BinaryHeap<Entry<P>>,
    members: FrontierSet<Position>,
    count: u64,
}

impl<P: PartialOrd + Copy + Debug> Frontier<P> {

    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: FrontierSet::default(),
            count: 0,
        }
    }

    /// Queue `pos` unless it is already a member
    /// Returns false when the cell was already queued
    pub(crate) fn push(&mut self, pos: Position, priority: P) -> bool {
        // ordering falls back to Equal for incomparable keys, so they must never get in
        debug_assert!(
            priority.partial_cmp(&priority).is_some(),
            "unordered frontier priority {priority:?} for {pos}"
        );
        if !self.members.insert(pos) {
            return false;
        }
        self.heap.push(Entry { priority, count: self.count, pos });
        self.count += 1;
        true
    }

    /// Remove the lowest-priority cell
    pub(crate) fn pop(&mut self) -> Option<Position> {
        let Entry { pos, .. } = self.heap.pop()?;
        self.members.remove(&pos);
        Some(pos)
    }

    pub(crate) fn contains(&self, pos: &Position) -> bool {
        self.members.contains(pos)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push(Position::new(0, 0), 3.5);
        frontier.push(Position::new(0, 1), 1.0);
        frontier.push(Position::new(0, 2), 2.0);

        assert_eq!(frontier.pop(), Some(Position::new(0, 1)));
        assert_eq!(frontier.pop(), Some(Position::new(0, 2)));
        assert_eq!(frontier.pop(), Some(Position::new(0, 0)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        // positions deliberately in reverse coordinate order
        let mut frontier = Frontier::new();
        for col in (0..5).rev() {
            frontier.push(Position::new(1, col), 4u32);
        }

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).map(|p| p.col).collect();
        assert_eq!(order, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unordered frontier priority")]
    fn test_nan_priority_is_rejected() {
        let mut frontier = Frontier::new();
        frontier.push(Position::new(0, 0), f64::NAN);
    }

    #[test]
    fn test_membership_prevents_duplicates() {
        let mut frontier = Frontier::new();
        let pos = Position::new(2, 2);

        assert!(frontier.push(pos, 5u32));
        assert!(!frontier.push(pos, 1u32));
        assert!(frontier.contains(&pos));
        assert_eq!(frontier.len(), 1);

        assert_eq!(frontier.pop(), Some(pos));
        assert!(!frontier.contains(&pos));

        // may be queued again once it has left
        assert!(frontier.push(pos, 2u32));
    }
}
