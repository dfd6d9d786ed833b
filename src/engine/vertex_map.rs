//! Per-vertex bulk operators over a frontier.
//!
//! These touch no edges. `vertex_map` is a side-effecting pass;
//! `vertex_filter` additionally derives a new frontier from a predicate,
//! and the predicate may itself mutate per-vertex state ("transform then
//! decide", the way k-core's removal pass and MIS's state transition use
//! it). Both run in whichever representation the frontier already holds.

use core::sync::atomic::Ordering;

use rayon::prelude::*;

use crate::frontier::bitmap::WORD_BITS;
use crate::frontier::VertexSubset;

/// Invokes `f` once per active vertex, in parallel, with no ordering
/// guarantee. The representation is left untouched.
///
/// A sparse frontier carrying duplicate entries invokes `f` once per entry.
pub fn vertex_map<F>(frontier: &VertexSubset, f: F)
where
    F: Fn(usize) + Sync,
{
    if frontier.is_empty() {
        return;
    }
    if let Some(ids) = frontier.as_sparse() {
        ids.par_iter().for_each(|&v| f(v));
    } else {
        let bits = frontier.as_bitmap().expect("subset holds exactly one representation");
        bits.for_each_set(f);
    }
}

/// Invokes `predicate` once per active vertex and returns the sub-frontier
/// of vertices for which it returned `true`, in the input's representation.
///
/// Sparse output is compacted in deterministic order; dense output is
/// rebuilt word by word, each word owned by one worker.
pub fn vertex_filter<P>(frontier: &VertexSubset, predicate: P) -> VertexSubset
where
    P: Fn(usize) -> bool + Sync,
{
    let n = frontier.universe();
    if frontier.is_empty() {
        return VertexSubset::empty(n);
    }
    if let Some(ids) = frontier.as_sparse() {
        let kept: Vec<usize> = ids.par_iter().copied().filter(|&v| predicate(v)).collect();
        return VertexSubset::from_sparse(n, kept);
    }
    let bits = frontier.as_bitmap().expect("subset holds exactly one representation");
    let words: Vec<usize> = bits
        .words()
        .par_iter()
        .enumerate()
        .map(|(wi, w)| {
            let mut word = w.load(Ordering::Relaxed);
            let mut kept = 0usize;
            while word != 0 {
                let b = word.trailing_zeros() as usize;
                word &= word - 1;
                if predicate(wi * WORD_BITS + b) {
                    kept |= 1usize << b;
                }
            }
            kept
        })
        .collect();
    VertexSubset::from_words(n, words)
}
