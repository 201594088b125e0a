//! Sideband diagnostics (§6.4, §7).
//!
//! Every non-fatal condition the spec calls a "diagnostic" — a zero input to
//! [`crate::cb`], an empty array where a non-empty one was expected, a
//! `split` result whose length disagrees with its coprime set — is reported
//! through `tracing::warn!` rather than a `Result`. These are observable but
//! never abort the call: the operation degrades (no-op, or best-effort
//! output) and execution continues, matching §7's propagation policy.
//!
//! This mirrors the teacher's division of responsibility: engine modules
//! (`ai_engine.rs`, `strategy.rs`, `worker_client.rs`) emit `tracing::warn!`
//! for recoverable anomalies and leave subscriber setup — and the decision
//! of what to do about a warning — to the embedding application.

/// A zero entered the input to [`crate::cb`]. Zero has no coprime base;
/// the offending element is skipped.
pub(crate) fn zero_input_to_cb() {
    tracing::warn!("cb: zero is not a valid input, skipping element");
}

/// `split` was asked to distribute over an empty coprime set.
pub(crate) fn empty_coprime_set(op: &str) {
    tracing::warn!(op, "empty coprime set passed where a non-empty one was expected");
}

/// `cbmerge` was handed one or two empty bases; it degrades to copying
/// whichever side is non-empty (§4.I edge cases).
pub(crate) fn cbmerge_empty_side(empty: &'static str) {
    tracing::warn!(side = empty, "cbmerge: one side empty, falling back to a copy of the other");
}

/// Both sides of `cbmerge` were empty; result is empty.
pub(crate) fn cbmerge_both_empty() {
    tracing::warn!("cbmerge: both p and q empty, result is empty");
}

/// `find_factor` / `find_factors` was asked to factor over an empty
/// coprime set.
pub(crate) fn empty_factor_base(op: &str) {
    tracing::warn!(op, "empty coprime base passed to factoring routine");
}

/// `split`'s result length disagrees with the coprime set it was split
/// over. Per §7 this is an invariant violation in a lower layer: report it
/// but do not let the caller silently treat a truncated result as correct.
pub(crate) fn split_size_mismatch(expected: usize, got: usize) {
    tracing::warn!(
        expected,
        got,
        "cbextend: split() returned a result of the wrong size; lower-layer invariant violated"
    );
}
