//! `Array[BigInt]` (§3, §4.B).
//!
//! The spec's dynamic array is realized directly as `Vec<Integer>` — `add`
//! is `Vec::push` of a clone, `append_all` is `Vec::extend` from a cloned
//! slice, `len`/indexing/`clear` are the stdlib ones. No wrapper type earns
//! its keep here; the only crate-specific piece is `append_all`, which
//! copies every element of `other` in, matching §3's "appends a copy of
//! every element".

use rug::Integer;

/// Appends a copy of every element of `other` onto `out`.
pub fn append_all(out: &mut Vec<Integer>, other: &[Integer]) {
    out.extend(other.iter().cloned());
}
