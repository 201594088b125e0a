//! Prime-power decompositions (§4.D): `gcd_ppi_ppo`, `gcd_ppg_pple`, and the
//! shortcut forms that discard one or two of the three outputs.
//!
//! For positive integers `a, b`:
//! - `ppi(a,b)` — largest divisor of `a` all of whose prime factors appear
//!   in `b` ("powers in `a` of primes inside `b`").
//! - `ppo(a,b) = a / ppi(a,b)` ("powers in `a` of primes outside `b`").
//! - `ppg(a,b)` — largest divisor of `a` whose prime-power exponents
//!   strictly exceed those in `b`.
//! - `pple(a,b) = a / ppg(a,b)`.
//!
//! Both loops are leaf recursion (no further calls back into the
//! coprime-base family), so their loop-carried accumulators live in pool
//! slots for the whole loop and are only cloned out once, at return.

use crate::pool::Pool;
use rug::{Assign, Integer};

/// Alg. 11.3. Returns `(gcd, ppi, ppo)` with `ppi·ppo = a`,
/// `gcd(ppi, ppo) = 1`, every prime of `ppi` dividing `b`, no prime of `ppo`
/// dividing `b`.
pub fn gcd_ppi_ppo(pool: &mut Pool, a: &Integer, b: &Integer) -> (Integer, Integer, Integer) {
    let gcd = a.clone().gcd(b);
    let mut ppi = pool.checkout();
    ppi.assign(&gcd);
    let mut ppo = pool.checkout();
    ppo.assign(Integer::from(a / &*ppi));
    loop {
        let g = ppi.clone().gcd(&ppo);
        if g == 1 {
            break;
        }
        *ppi *= &g;
        let next_ppo = Integer::from(&*ppo / &g);
        ppo.assign(next_ppo);
    }
    (gcd, ppi.clone(), ppo.clone())
}

/// Alg. 11.4. Returns `(gcd, ppg, pple)` with `ppg·pple = a`,
/// `gcd(ppg, pple) = 1`.
pub fn gcd_ppg_pple(pool: &mut Pool, a: &Integer, b: &Integer) -> (Integer, Integer, Integer) {
    let gcd = a.clone().gcd(b);
    let mut pple = pool.checkout();
    pple.assign(&gcd);
    let mut ppg = pool.checkout();
    ppg.assign(Integer::from(a / &*pple));
    loop {
        let g = ppg.clone().gcd(&pple);
        if g == 1 {
            break;
        }
        *ppg *= &g;
        let next_pple = Integer::from(&*pple / &g);
        pple.assign(next_pple);
    }
    (gcd, ppg.clone(), pple.clone())
}

/// `ppi(a, b)` alone.
pub fn ppi(pool: &mut Pool, a: &Integer, b: &Integer) -> Integer {
    gcd_ppi_ppo(pool, a, b).1
}

/// `ppo(a, b)` alone.
pub fn ppo(pool: &mut Pool, a: &Integer, b: &Integer) -> Integer {
    gcd_ppi_ppo(pool, a, b).2
}

/// `ppg(a, b)` alone.
pub fn ppg(pool: &mut Pool, a: &Integer, b: &Integer) -> Integer {
    gcd_ppg_pple(pool, a, b).1
}

/// `pple(a, b)` alone.
pub fn pple(pool: &mut Pool, a: &Integer, b: &Integer) -> Integer {
    gcd_ppg_pple(pool, a, b).2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppi_ppo_factor_a_exactly() {
        let mut pool = Pool::new();
        let a = Integer::from(360); // 2^3 * 3^2 * 5
        let b = Integer::from(6); // 2 * 3
        let (_, i, o) = gcd_ppi_ppo(&mut pool, &a, &b);
        assert_eq!(Integer::from(&i * &o), a);
        assert_eq!(i.clone().gcd(&o), 1);
        assert_eq!(i, 72); // 2^3 * 3^2
        assert_eq!(o, 5);
    }

    #[test]
    fn ppi_ppo_coprime_inputs() {
        let mut pool = Pool::new();
        let a = Integer::from(35);
        let b = Integer::from(11);
        let (g, i, o) = gcd_ppi_ppo(&mut pool, &a, &b);
        assert_eq!(g, 1);
        assert_eq!(i, 1);
        assert_eq!(o, 35);
    }

    #[test]
    fn ppg_pple_recombine() {
        let mut pool = Pool::new();
        let a = Integer::from(360);
        let b = Integer::from(12); // 2^2 * 3
        let (_, g, l) = gcd_ppg_pple(&mut pool, &a, &b);
        assert_eq!(Integer::from(&g * &l), a);
        assert_eq!(g.clone().gcd(&l), 1);
    }

    #[test]
    fn shortcuts_agree_with_full_form() {
        let mut pool = Pool::new();
        let a = Integer::from(2u32).pow(10) * Integer::from(3u32).pow(4);
        let b = Integer::from(2u32).pow(3) * Integer::from(5u32);
        let (_, full_i, full_o) = gcd_ppi_ppo(&mut pool, &a, &b);
        assert_eq!(ppi(&mut pool, &a, &b), full_i);
        assert_eq!(ppo(&mut pool, &a, &b), full_o);
    }

    #[test]
    fn pool_slots_are_returned_after_call() {
        let mut pool = Pool::new();
        let _ = gcd_ppi_ppo(&mut pool, &Integer::from(360), &Integer::from(6));
        assert_eq!(pool.len(), 2);
    }
}
