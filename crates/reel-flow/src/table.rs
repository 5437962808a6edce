//! The authored link table and flow materialization.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use reel_core::FlowError;
use smallvec::SmallVec;

/// Fixed successor/predecessor references of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Links<K> {
    pub next: Option<K>,
    pub previous: Option<K>,
}

/// An insertion-ordered table of node links.
///
/// Keys iterate in authored order, which downstream title resolution relies
/// on for deterministic tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct FlowTable<K: Copy + Eq + Hash + fmt::Debug> {
    links: IndexMap<K, Links<K>>,
}

impl<K: Copy + Eq + Hash + fmt::Debug> FlowTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            links: IndexMap::new(),
        }
    }

    /// Build a table where `nodes` form one chain in the given order.
    pub fn chain(nodes: &[K]) -> Self {
        let mut table = Self::new();
        for (i, &node) in nodes.iter().enumerate() {
            let previous = if i > 0 { Some(nodes[i - 1]) } else { None };
            let next = nodes.get(i + 1).copied();
            table.insert(node, previous, next);
        }
        table
    }

    /// Register a node with its links. Re-inserting a key overwrites its
    /// links without changing its position in the authored order.
    pub fn insert(&mut self, node: K, previous: Option<K>, next: Option<K>) {
        self.links.insert(node, Links { next, previous });
    }

    /// Number of nodes in the table.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Check if a node is present.
    pub fn contains(&self, node: K) -> bool {
        self.links.contains_key(&node)
    }

    /// Look up a node's links.
    pub fn links_of(&self, node: K) -> Option<&Links<K>> {
        self.links.get(&node)
    }

    /// The node after `node`, if any.
    pub fn next_of(&self, node: K) -> Option<K> {
        self.links.get(&node).and_then(|links| links.next)
    }

    /// The node before `node`, if any.
    pub fn previous_of(&self, node: K) -> Option<K> {
        self.links.get(&node).and_then(|links| links.previous)
    }

    /// Iterate over node keys in authored order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.links.keys().copied()
    }

    /// Materialize the complete flow containing `start`.
    ///
    /// Walks `next` to the end of the chain and `previous` to the
    /// beginning, then concatenates `[..before, start, ..after]`. The
    /// returned flow always contains `start` itself; its `start_index` is
    /// the length of the previous-chain.
    ///
    /// Both walks are capped at the table size, so a cyclic table produces
    /// `FlowError::CycleDetected` rather than looping forever.
    pub fn flow_from(&self, start: K) -> Result<Flow<K>, FlowError> {
        if !self.contains(start) {
            return Err(FlowError::UnknownNode {
                node: key_name(&start),
            });
        }

        let bound = self.links.len();

        let mut after: Vec<K> = Vec::new();
        let mut cursor = start;
        while let Some(next) = self.next_of(cursor) {
            if after.len() >= bound {
                return Err(FlowError::CycleDetected {
                    node: key_name(&start),
                });
            }
            after.push(next);
            cursor = next;
        }

        let mut before: SmallVec<[K; 16]> = SmallVec::new();
        let mut cursor = start;
        while let Some(previous) = self.previous_of(cursor) {
            if before.len() >= bound {
                return Err(FlowError::CycleDetected {
                    node: key_name(&start),
                });
            }
            before.push(previous);
            cursor = previous;
        }

        let start_index = before.len();
        let mut sequence = Vec::with_capacity(before.len() + 1 + after.len());
        sequence.extend(before.iter().rev().copied());
        sequence.push(start);
        sequence.extend(after);

        Ok(Flow {
            sequence,
            start_index,
        })
    }

    /// Audit the authored invariant: every referenced node exists, every
    /// link pair is symmetric, and no chain is cyclic.
    ///
    /// Symmetry (`a.next == Some(b)` iff `b.previous == Some(a)`) also rules
    /// out branching and merging, since a node has at most one link in each
    /// direction.
    pub fn validate(&self) -> Result<(), FlowError> {
        for (&node, links) in &self.links {
            if let Some(next) = links.next {
                match self.links.get(&next) {
                    None => {
                        return Err(FlowError::DanglingLink {
                            from: key_name(&node),
                            to: key_name(&next),
                        })
                    }
                    Some(next_links) if next_links.previous != Some(node) => {
                        return Err(FlowError::AsymmetricLink {
                            from: key_name(&node),
                            to: key_name(&next),
                        })
                    }
                    Some(_) => {}
                }
            }
            if let Some(previous) = links.previous {
                match self.links.get(&previous) {
                    None => {
                        return Err(FlowError::DanglingLink {
                            from: key_name(&node),
                            to: key_name(&previous),
                        })
                    }
                    Some(prev_links) if prev_links.next != Some(node) => {
                        return Err(FlowError::AsymmetricLink {
                            from: key_name(&previous),
                            to: key_name(&node),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        // A symmetric table can still be a closed loop; the bounded walk
        // catches that.
        for node in self.keys() {
            self.flow_from(node)?;
        }

        Ok(())
    }
}

fn key_name<K: fmt::Debug>(key: &K) -> String {
    format!("{key:?}")
}

/// A materialized flow: the full ordered sequence plus the position the
/// walk started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow<K> {
    sequence: Vec<K>,
    start_index: usize,
}

impl<K: Copy + Eq> Flow<K> {
    /// The nodes in forward order.
    pub fn nodes(&self) -> &[K] {
        &self.sequence
    }

    /// Zero-based position of the start node within the sequence.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of nodes in the flow (always at least 1).
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if the flow is empty (never the case for a materialized flow).
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The node the flow was built from.
    pub fn start(&self) -> K {
        self.sequence[self.start_index]
    }

    /// Position of `node` in the sequence, if present.
    pub fn position_of(&self, node: K) -> Option<usize> {
        self.sequence.iter().position(|&n| n == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Node {
        A,
        B,
        C,
        D,
    }

    use Node::*;

    #[test]
    fn test_flow_round_trip() {
        let table = FlowTable::chain(&[A, B, C, D]);

        let flow = table.flow_from(C).unwrap();
        assert_eq!(flow.nodes(), &[A, B, C, D]);
        assert_eq!(flow.start_index(), 2);
        assert_eq!(flow.start(), C);

        let flow = table.flow_from(A).unwrap();
        assert_eq!(flow.nodes(), &[A, B, C, D]);
        assert_eq!(flow.start_index(), 0);

        let flow = table.flow_from(D).unwrap();
        assert_eq!(flow.start_index(), 3);
    }

    #[test]
    fn test_single_node_flow() {
        let mut table = FlowTable::new();
        table.insert(A, None, None);

        let flow = table.flow_from(A).unwrap();
        assert_eq!(flow.nodes(), &[A]);
        assert_eq!(flow.start_index(), 0);
    }

    #[test]
    fn test_unknown_start() {
        let table = FlowTable::chain(&[A, B]);
        assert_eq!(
            table.flow_from(D),
            Err(FlowError::UnknownNode {
                node: "D".to_string()
            })
        );
    }

    #[test]
    fn test_cycle_is_bounded() {
        // Fully symmetric three-node loop
        let mut table = FlowTable::new();
        table.insert(A, Some(C), Some(B));
        table.insert(B, Some(A), Some(C));
        table.insert(C, Some(B), Some(A));

        assert!(matches!(
            table.flow_from(A),
            Err(FlowError::CycleDetected { .. })
        ));
        assert!(matches!(
            table.validate(),
            Err(FlowError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_chain() {
        let table = FlowTable::chain(&[A, B, C, D]);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_disjoint_chains() {
        let mut table = FlowTable::new();
        table.insert(A, None, Some(B));
        table.insert(B, Some(A), None);
        table.insert(C, None, None);
        assert!(table.validate().is_ok());

        let flow = table.flow_from(C).unwrap();
        assert_eq!(flow.nodes(), &[C]);
    }

    #[test]
    fn test_validate_rejects_dangling_link() {
        let mut table = FlowTable::new();
        table.insert(A, None, Some(B));
        assert_eq!(
            table.validate(),
            Err(FlowError::DanglingLink {
                from: "A".to_string(),
                to: "B".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_asymmetric_pair() {
        let mut table = FlowTable::new();
        table.insert(A, None, Some(B));
        table.insert(B, None, None);
        assert_eq!(
            table.validate(),
            Err(FlowError::AsymmetricLink {
                from: "A".to_string(),
                to: "B".to_string()
            })
        );
    }

    #[test]
    fn test_position_of() {
        let table = FlowTable::chain(&[A, B, C]);
        let flow = table.flow_from(B).unwrap();
        assert_eq!(flow.position_of(C), Some(2));
        assert_eq!(flow.position_of(D), None);
    }
}
