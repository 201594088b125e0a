//! `cbextend` (§4.H): extends a coprime base `P` by one new integer `b`,
//! producing `cb(P ∪ {b})`.

use crate::append_cb::append_cb;
use crate::diagnostics;
use crate::pool::Pool;
use crate::prime_power::gcd_ppi_ppo;
use crate::prod::array_prod;
use crate::split::split;
use rug::Integer;

/// Alg. 16.2.
///
/// `ret` ends up a coprime set containing exactly the prime factors of
/// `P ∪ {b}` with the correct multiplicative structure for the natural
/// coprime base.
pub fn cbextend(pool: &mut Pool, ret: &mut Vec<Integer>, p: &[Integer], b: &Integer) {
    if p.is_empty() {
        if *b != 1 {
            ret.push(b.clone());
        }
        return;
    }

    let x = array_prod(pool, p);
    let (_, a, r) = gcd_ppi_ppo(pool, b, &x);
    if r != 1 {
        ret.push(r);
    }

    let mut s = Vec::with_capacity(p.len());
    split(pool, &mut s, &a, p);
    if s.len() != p.len() {
        diagnostics::split_size_mismatch(p.len(), s.len());
        return;
    }

    for (p_i, s_i) in p.iter().zip(s.iter()) {
        append_cb(pool, ret, p_i, s_i);
    }
}
