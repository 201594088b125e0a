//! `append_cb` (§4.G): appends the natural coprime base of `{a, b}` to
//! `out`. This is the innermost recursion the rest of the coprime-base
//! family bottoms out on.

use crate::pool::Pool;
use crate::power::two_power;
use crate::prime_power::{gcd_ppg_pple, gcd_ppi_ppo};
use rug::{Assign, Integer};

/// Alg. 13.2.
///
/// Refines by extracting the prime-power content of `a` that lies outside
/// `b`, then recursively handling the interaction between what remains of
/// `a` and `b` itself. Every value appended is `> 1` by construction: the
/// two direct `push`es below only fire when `a ≠ 1` / `r ≠ 1`, and every
/// recursive call inherits that guarantee.
pub fn append_cb(pool: &mut Pool, out: &mut Vec<Integer>, a: &Integer, b: &Integer) {
    if *b == 1 {
        if *a != 1 {
            out.push(a.clone());
        }
        return;
    }

    let (_, a1, r) = gcd_ppi_ppo(pool, a, b);
    if r != 1 {
        out.push(r);
    }

    let (mut g, mut h, mut c) = gcd_ppg_pple(pool, &a1, b);
    let c0 = c.clone();
    let mut x = c0.clone();
    let mut n: u32 = 1;

    loop {
        let gg = Integer::from(&g * &g);
        let (new_g, new_h, new_c) = gcd_ppg_pple(pool, &h, &gg);
        g = new_g;
        h = new_h;
        c = new_c;

        let d = c.clone().gcd(b);
        x *= &d;

        // y = d^(2^(n-1)); scoped to a pool slot since it's consumed
        // entirely before the recursive call below.
        let w = {
            let mut y = pool.checkout();
            y.assign(d.clone());
            two_power(&mut y, n - 1);
            Integer::from(&c / &*y)
        };
        append_cb(pool, out, &w, &d);

        if h == 1 {
            break;
        }
        n += 1;
    }

    let b_over_x = Integer::from(b / &x);
    append_cb(pool, out, &b_over_x, &c0);
}
