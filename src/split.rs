//! `split` (§4.F): distributes the prime-power content of `a` across a
//! coprime set `P`.

use crate::diagnostics;
use crate::pool::Pool;
use crate::prime_power::ppi;
use crate::prod::prod;
use rug::Integer;

/// Alg. 15.3's range-based core. Appends to `ret` one entry per
/// `p[from..=to]`, in the same order, the `i`-th equal to `ppi(a, p_i)`.
///
/// Using the already-reduced `b = ppi(a, prod(p))` rather than the original
/// `a` at every recursive step is what keeps the total cost essentially
/// linear: each half only ever works with the part of `a` relevant to it.
fn split_range(pool: &mut Pool, ret: &mut Vec<Integer>, a: &Integer, p: &[Integer], from: usize, to: usize) {
    let x = prod(pool, p, from, to);
    let b = ppi(pool, a, &x);
    if from == to {
        ret.push(b);
        return;
    }
    let n = to - from;
    let mid = to - n / 2 - 1;
    split_range(pool, ret, &b, p, from, mid);
    split_range(pool, ret, &b, p, to - n / 2, to);
}

/// Whole-array form (§0.2's public `split(pool, out, a, p)`). An empty `p`
/// is a caller error: reported as a diagnostic, `ret` is left untouched.
pub fn split(pool: &mut Pool, ret: &mut Vec<Integer>, a: &Integer, p: &[Integer]) {
    if p.is_empty() {
        diagnostics::empty_coprime_set("split");
        return;
    }
    split_range(pool, ret, a, p, 0, p.len() - 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_5_from_spec() {
        let mut pool = Pool::new();
        let a = Integer::from(360);
        let p = vec![Integer::from(6), Integer::from(5)];
        let mut ret = Vec::new();
        split(&mut pool, &mut ret, &a, &p);
        assert_eq!(ret, vec![Integer::from(72), Integer::from(5)]);
    }

    #[test]
    fn output_length_matches_input() {
        let mut pool = Pool::new();
        let a = Integer::from(2u32).pow(10) * Integer::from(3u32).pow(5) * Integer::from(7u32);
        let p = vec![
            Integer::from(2),
            Integer::from(3),
            Integer::from(5),
            Integer::from(11),
        ];
        let mut ret = Vec::new();
        split(&mut pool, &mut ret, &a, &p);
        assert_eq!(ret.len(), p.len());
        let total = ret.iter().fold(Integer::from(1), |acc, x| acc * x);
        let whole = prod(&mut pool, &p, 0, p.len() - 1);
        assert_eq!(total, ppi(&mut pool, &a, &whole));
    }

    #[test]
    fn empty_p_is_a_no_op_diagnostic() {
        let mut pool = Pool::new();
        let mut ret = Vec::new();
        split(&mut pool, &mut ret, &Integer::from(10), &[]);
        assert!(ret.is_empty());
    }
}
