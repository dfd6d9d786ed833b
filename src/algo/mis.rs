//! Maximal independent set on a symmetric graph, priority = vertex id.
//!
//! Rounds of a four-state protocol: every undecided vertex tentatively
//! enters (CONDITIONALLY_IN), then a side-effects-only edge pass knocks a
//! vertex back to UNDECIDED if a higher-priority (lower-id) neighbor is
//! still in play, or OUT if a neighbor has committed. The filter pass then
//! commits unchallenged tentative vertices to IN and keeps only the
//! undecided ones active. Writes race benignly: every transition is
//! order-independent, so any interleaving converges to the same kind of
//! fixed point.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::concurrency::atomic::atomic_array;
use crate::engine::{edge_map, vertex_filter, EdgeMapOp, EdgeMapOptions};
use crate::frontier::VertexSubset;
use crate::graph::Graph;

/// Resolution state of a vertex during (and after) the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MisState {
    /// Not yet decided this round.
    Undecided = 0,
    /// Tentatively in the set, pending neighbor challenges.
    ConditionallyIn = 1,
    /// Excluded: some neighbor committed to the set.
    Out = 2,
    /// Committed member of the independent set.
    In = 3,
}

const UNDECIDED: u8 = MisState::Undecided as u8;
const CONDITIONALLY_IN: u8 = MisState::ConditionallyIn as u8;
const OUT: u8 = MisState::Out as u8;
const IN: u8 = MisState::In as u8;

impl From<u8> for MisState {
    fn from(raw: u8) -> Self {
        match raw {
            UNDECIDED => Self::Undecided,
            CONDITIONALLY_IN => Self::ConditionallyIn,
            OUT => Self::Out,
            _ => Self::In,
        }
    }
}

struct ChallengeNeighbors<'a> {
    flags: &'a [AtomicU8],
}

impl ChallengeNeighbors<'_> {
    // Updates flow source-ward: the edge (s, d) challenges s's tentative
    // membership based on d's state. Both traversal paths use the same
    // order-independent writes.
    fn challenge(&self, s: usize, d: usize) -> bool {
        let fd = self.flags[d].load(Ordering::SeqCst);
        if fd == IN {
            if self.flags[s].load(Ordering::SeqCst) != OUT {
                self.flags[s].store(OUT, Ordering::SeqCst);
            }
        } else if d < s
            && self.flags[s].load(Ordering::SeqCst) == CONDITIONALLY_IN
            && fd < OUT
        {
            self.flags[s].store(UNDECIDED, Ordering::SeqCst);
        }
        true
    }
}

impl EdgeMapOp for ChallengeNeighbors<'_> {
    fn cond(&self, _d: usize) -> bool {
        true
    }

    fn update(&self, s: usize, d: usize) -> bool {
        self.challenge(s, d)
    }

    fn update_atomic(&self, s: usize, d: usize) -> bool {
        self.challenge(s, d)
    }
}

/// Computes a maximal independent set; returns the final per-vertex state.
///
/// With `max_rounds: None` the protocol runs to its fixed point and every
/// vertex lands on [`MisState::In`] or [`MisState::Out`]; a cap may leave
/// vertices in intermediate states.
pub fn maximal_independent_set(graph: &Graph, max_rounds: Option<usize>) -> Vec<MisState> {
    let n = graph.vertices();
    let flags: Vec<AtomicU8> = atomic_array(n, |_| CONDITIONALLY_IN);
    let op = ChallengeNeighbors { flags: &flags };

    let mut frontier = VertexSubset::all(n);
    let mut round = 0usize;
    while !frontier.is_empty() {
        if max_rounds.is_some_and(|cap| round >= cap) {
            break;
        }
        edge_map(graph, &mut frontier, &op, &EdgeMapOptions::no_output());
        frontier = vertex_filter(&frontier, |v| {
            match flags[v].load(Ordering::SeqCst) {
                CONDITIONALLY_IN => {
                    // Unchallenged tentative vertex joins the set.
                    flags[v].store(IN, Ordering::SeqCst);
                    false
                }
                OUT => false,
                _ => {
                    flags[v].store(CONDITIONALLY_IN, Ordering::SeqCst);
                    true
                }
            }
        });
        round += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(round, active = frontier.len(), "mis round");
    }

    flags.into_iter().map(|f| MisState::from(f.into_inner())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_id_always_enters() {
        // triangle: exactly one vertex can win, and 0 has top priority
        let g = Graph::symmetric_from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let states = maximal_independent_set(&g, None);
        assert_eq!(states[0], MisState::In);
        assert_eq!(states[1], MisState::Out);
        assert_eq!(states[2], MisState::Out);
    }

    #[test]
    fn isolated_vertices_all_enter() {
        let g = Graph::symmetric_from_edges(3, &[]).unwrap();
        let states = maximal_independent_set(&g, None);
        assert!(states.iter().all(|&s| s == MisState::In));
    }
}
