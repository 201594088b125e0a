//! `cb` (§4.J): the natural coprime base of a whole set, top-level. Also
//! the one place (§5) where the recursion may fork across threads.

use crate::cbmerge::cbmerge;
use crate::config::{CoprimeBaseConfig, ParallelMode};
use crate::diagnostics;
use crate::pool::Pool;
use rug::Integer;

/// Alg. 18.1, serial.
fn cb_range(pool: &mut Pool, ret: &mut Vec<Integer>, s: &[Integer], from: usize, to: usize) {
    let n = to - from;
    if n == 0 {
        if s[from] == 0 {
            diagnostics::zero_input_to_cb();
        } else if s[from] != 1 {
            ret.push(s[from].clone());
        }
        return;
    }
    let mid = to - n / 2 - 1;
    let mut p = Vec::new();
    let mut q = Vec::new();
    cb_range(pool, &mut p, s, from, mid);
    cb_range(pool, &mut q, s, to - n / 2, to);
    cbmerge(pool, ret, &p, &q);
}

/// Same recursion, but once a sub-range reaches `min_len` elements the two
/// sibling calls fork via `rayon::join` (§5).
///
/// Per §5's resource policy, a pool is never shared across threads: the
/// branch that does *not* keep the caller's pool gets a freshly initialized
/// one. Which physical OS thread ends up running which branch is up to
/// rayon's work-stealing scheduler, so this is a conservative reading of
/// "the task that remains on the parent worker may reuse the parent's
/// pool" — the branch we can't prove stayed local never touches it.
fn cb_range_parallel(
    parent_pool: &mut Pool,
    ret: &mut Vec<Integer>,
    s: &[Integer],
    from: usize,
    to: usize,
    min_len: usize,
) {
    let n = to - from;
    if n == 0 || n + 1 < min_len {
        cb_range(parent_pool, ret, s, from, to);
        return;
    }
    let mid = to - n / 2 - 1;
    let mut p = Vec::new();
    let (_, q) = rayon::join(
        || {
            let mut fresh_pool = Pool::new();
            cb_range_parallel(&mut fresh_pool, &mut p, s, from, mid, min_len);
        },
        || {
            let mut q = Vec::new();
            cb_range_parallel(parent_pool, &mut q, s, to - n / 2, to, min_len);
            q
        },
    );
    cbmerge(parent_pool, ret, &p, &q);
}

/// Natural coprime base of `s`, serial (§6.2's `cb(pool, out, s)`).
///
/// `s` must have at least one element; an empty `s` is reported as a
/// diagnostic and `out` is left empty. A zero element is itself invalid
/// (zero has no coprime base) and is skipped with its own diagnostic rather
/// than aborting the whole call.
pub fn cb(pool: &mut Pool, out: &mut Vec<Integer>, s: &[Integer]) {
    out.clear();
    if s.is_empty() {
        diagnostics::empty_coprime_set("array_cb");
        return;
    }
    cb_range(pool, out, s, 0, s.len() - 1);
}

/// Natural coprime base of `s`, honoring `config`'s parallelism knob. With
/// [`ParallelMode::Serial`] this is identical to [`cb`].
pub fn cb_configured(pool: &mut Pool, out: &mut Vec<Integer>, s: &[Integer], config: &CoprimeBaseConfig) {
    out.clear();
    if s.is_empty() {
        diagnostics::empty_coprime_set("array_cb");
        return;
    }
    match config.parallel {
        ParallelMode::Serial => cb_range(pool, out, s, 0, s.len() - 1),
        ParallelMode::Parallel { min_len } => {
            cb_range_parallel(pool, out, s, 0, s.len() - 1, min_len)
        }
    }
}
