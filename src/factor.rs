//! Factoring over a coprime base (§4.K): `reduce`, `find_factor`,
//! `find_factors`.

use crate::diagnostics;
use crate::pool::Pool;
use crate::prime_power::{gcd_ppi_ppo, ppi};
use crate::prod::{array_prod, prod};
use crate::split::split;
use rug::Integer;

/// One row of [`find_factors`]' output: the original composite, the factor
/// of it found in the coprime base, and the cofactor. Named fields instead
/// of a bare tuple, same preference the teacher shows for row types over
/// positional tuples (see its `project::types` row structs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorTriple {
    pub original: Integer,
    pub factor: Integer,
    pub cofactor: Integer,
}

/// Alg. 19.2. Largest `i` with `p^i | a`, and cofactor `c = a / p^i`,
/// found by doubling rather than trial division: each recursive step
/// squares `p`, halving the number of remaining doubling steps.
pub fn reduce(p: &Integer, a: &Integer) -> (u32, Integer) {
    if Integer::from(a % p) != 0 {
        return (0, a.clone());
    }
    let p_squared = Integer::from(p * p);
    let a_over_p = Integer::from(a / p);
    let (j, b) = reduce(&p_squared, &a_over_p);
    if Integer::from(&b % p) == 0 {
        (2 * j + 2, Integer::from(&b / p))
    } else {
        (2 * j + 1, b)
    }
}

/// Alg. 20.1's range-based core. Attempts to factor `a` as a product of
/// powers of `p[from..=to]`; `a0` is the original value the outermost call
/// started with, carried through unchanged so the emitted triple always
/// names the true original composite.
fn find_factor_range(
    pool: &mut Pool,
    out: &mut Vec<FactorTriple>,
    a0: &Integer,
    a: &Integer,
    p: &[Integer],
    from: usize,
    to: usize,
) -> bool {
    if from == to {
        let (exp, c) = reduce(&p[from], a);
        if c != 1 {
            return false;
        }
        if exp >= 1 && a0 != &p[from] {
            out.push(FactorTriple {
                original: a0.clone(),
                factor: p[from].clone(),
                cofactor: Integer::from(a0 / &p[from]),
            });
        }
        true
    } else {
        let n = to - from;
        let mid = to - n / 2 - 1;
        let y = prod(pool, p, from, mid);
        let (_, b, c) = gcd_ppi_ppo(pool, a, &y);
        find_factor_range(pool, out, a0, &b, p, from, mid)
            && find_factor_range(pool, out, a0, &c, p, to - n / 2, to)
    }
}

/// Whether `a` factors entirely over `p`; every prime of `a` must be in
/// `p`. On success, if `a` is itself composite (`a ≠` the single element of
/// `p` it reduced to), appends a single `(a, factor, a/factor)` triple to
/// `out` — the first prime factor the recursion lands on, not one per
/// prime (§6.2.4 wants one triple per composite, not a full factorization).
///
/// An empty `p` is reported as a diagnostic and fails.
pub fn find_factor(pool: &mut Pool, out: &mut Vec<FactorTriple>, a: &Integer, p: &[Integer]) -> bool {
    if p.is_empty() {
        diagnostics::empty_factor_base("find_factor");
        return false;
    }
    let start = out.len();
    let ok = find_factor_range(pool, out, a, a, p, 0, p.len() - 1);
    if out.len() > start + 1 {
        out.truncate(start + 1);
    }
    ok
}

/// Alg. 21.2's range-based core. `p` here has already been pruned, by the
/// caller, to the primes that actually divide some element of
/// `s[from..=to]`.
fn find_factors_range(
    pool: &mut Pool,
    out: &mut Vec<FactorTriple>,
    s: &[Integer],
    from: usize,
    to: usize,
    p: &[Integer],
) {
    let x = array_prod(pool, p);
    let y = prod(pool, s, from, to);
    let z = ppi(pool, &x, &y);

    let mut d = Vec::with_capacity(p.len());
    split(pool, &mut d, &z, p);

    let q: Vec<Integer> = p
        .iter()
        .zip(d.iter())
        .filter(|(p_i, d_i)| *p_i == *d_i)
        .map(|(p_i, _)| p_i.clone())
        .collect();

    if from == to {
        if !q.is_empty() {
            let start = out.len();
            find_factor_range(pool, out, &s[from], &s[from], &q, 0, q.len() - 1);
            if out.len() > start + 1 {
                out.truncate(start + 1);
            }
        }
    } else {
        let n = to - from;
        let mid = to - n / 2 - 1;
        find_factors_range(pool, out, s, from, mid, &q);
        find_factors_range(pool, out, s, to - n / 2, to, &q);
    }
}

/// Factors each element of `s` over the coprime base `p`, appending one
/// [`FactorTriple`] for every non-prime `s_i` that factors entirely over
/// `p`. Elements that don't factor over `p` are silently skipped — a
/// normal outcome, not an error (§7).
pub fn find_factors(pool: &mut Pool, out: &mut Vec<FactorTriple>, s: &[Integer], p: &[Integer]) {
    if s.is_empty() || p.is_empty() {
        diagnostics::empty_factor_base("find_factors");
        return;
    }
    find_factors_range(pool, out, s, 0, s.len() - 1, p);
}
