//! `cbmerge` (§4.I): merges two coprime bases `P`, `Q` into `cb(P ∪ Q)`.

use crate::array;
use crate::cbextend::cbextend;
use crate::diagnostics;
use crate::pool::Pool;
use crate::prod::array_prod;
use rug::Integer;

/// Smallest `b ≥ 1` with `2^b ≥ n`.
fn smallest_pow2_covering(n: usize) -> u32 {
    let mut b = 1u32;
    while (1u64 << b) < n as u64 {
        b += 1;
    }
    b
}

/// Alg. 17.3's inner loop, assuming both `p` and `q` are non-empty (the
/// empty-input fallbacks live in [`cbmerge`]).
///
/// Each layer bit-partitions `Q` by one bit of its index and folds one half
/// in at a time; `b = ceil(log2(|Q|))` layers fully separate every element
/// of `Q` from the running base. This bit-indexed partitioning, rather than
/// folding in `Q` one element at a time, is what keeps the merge
/// essentially linear.
fn cbmerge_core(pool: &mut Pool, s: &mut Vec<Integer>, p: &[Integer], q: &[Integer]) {
    let n = q.len();
    let b = smallest_pow2_covering(n);

    s.clear();
    array::append_all(s, p);

    for i in 0..b {
        let r0: Vec<Integer> = q
            .iter()
            .enumerate()
            .filter(|(k, _)| (k >> i) & 1 == 0)
            .map(|(_, v)| v.clone())
            .collect();
        let x0 = array_prod(pool, &r0);
        let mut t = Vec::new();
        cbextend(pool, &mut t, s, &x0);

        let r1: Vec<Integer> = q
            .iter()
            .enumerate()
            .filter(|(k, _)| (k >> i) & 1 == 1)
            .map(|(_, v)| v.clone())
            .collect();
        let x1 = array_prod(pool, &r1);
        s.clear();
        cbextend(pool, s, &t, &x1);
    }
}

/// Produces `cb(P ∪ Q)` into `s`.
///
/// If one of `p`, `q` is empty, the result is a copy of the other (with a
/// diagnostic); if both are empty, the result is empty (with a diagnostic).
pub fn cbmerge(pool: &mut Pool, s: &mut Vec<Integer>, p: &[Integer], q: &[Integer]) {
    s.clear();
    match (p.is_empty(), q.is_empty()) {
        (true, true) => {
            diagnostics::cbmerge_both_empty();
        }
        (true, false) => {
            diagnostics::cbmerge_empty_side("p");
            array::append_all(s, q);
        }
        (false, true) => {
            diagnostics::cbmerge_empty_side("q");
            array::append_all(s, p);
        }
        (false, false) => cbmerge_core(pool, s, p, q),
    }
}
