//! Balanced product tree (§4.E).
//!
//! A linear fold over a slice of `Integer`s costs `O(n)` multiplications of
//! ever-growing operands — quadratic in total bit length. Multiplying in a
//! balanced binary tree instead keeps operand sizes close to equal at every
//! level, which is what makes the rest of the coprime-base recursion
//! essentially linear.

use crate::pool::Pool;
use rug::{Assign, Integer};

/// `prod(arr[from..=to])` via a balanced binary split. The two halves are
/// computed by further recursion (each needs its own access to `pool`);
/// only the final merge multiply is staged through a pool slot.
pub fn prod(pool: &mut Pool, arr: &[Integer], from: usize, to: usize) -> Integer {
    let n = to - from;
    if n == 0 {
        return arr[from].clone();
    }
    let mid = to - n / 2 - 1;
    let x = prod(pool, arr, from, mid);
    let y = prod(pool, arr, to - n / 2, to);
    let mut slot = pool.checkout();
    slot.assign(&x * &y);
    slot.clone()
}

/// Product of every element of `arr`. Defined as `1` for an empty array —
/// this is what lets [`crate::cbextend`] treat an empty coprime base
/// uniformly.
pub fn array_prod(pool: &mut Pool, arr: &[Integer]) -> Integer {
    if arr.is_empty() {
        return Integer::from(1);
    }
    prod(pool, arr, 0, arr.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_is_one() {
        let mut pool = Pool::new();
        assert_eq!(array_prod(&mut pool, &[]), 1);
    }

    #[test]
    fn single_element() {
        let mut pool = Pool::new();
        let arr = vec![Integer::from(42)];
        assert_eq!(array_prod(&mut pool, &arr), 42);
    }

    #[test]
    fn matches_linear_fold() {
        let mut pool = Pool::new();
        let arr: Vec<Integer> = (1..=37u32).map(Integer::from).collect();
        let expected = arr.iter().fold(Integer::from(1), |acc, x| acc * x);
        assert_eq!(array_prod(&mut pool, &arr), expected);
    }
}
