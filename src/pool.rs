//! Scratch arena for `rug::Integer` temporaries.
//!
//! The coprime-base recursion ([`crate::append_cb`], [`crate::cbextend`],
//! [`crate::cbmerge`], [`crate::cb`]) allocates dozens of `Integer`
//! temporaries per call. `rug::Integer` construction and `Drop` each touch
//! the allocator; in a recursion that runs `O(log B)` deep over a batch of
//! thousands of moduli, that adds up. [`Pool`] amortizes it with a LIFO
//! stack of freed slots, the same role `gwnum::GwContext` plays for `gwnum`
//! temporaries: callers check out a slot, use it, and return it before the
//! enclosing scope exits.
//!
//! # Usage
//!
//! ```
//! use copri::pool::Pool;
//!
//! let mut pool = Pool::new();
//! {
//!     let mut slot = pool.checkout();
//!     *slot = rug::Integer::from(7);
//!     assert_eq!(*slot, 7);
//! } // slot returns to the pool here
//! assert_eq!(pool.len(), 1);
//! ```

use rug::Integer;

/// A LIFO stack of reusable `Integer` storage.
///
/// Single-ownership per call tree (§5 of the design notes): a `Pool` is
/// never shared across threads. The parallel split in [`crate::cb`] gives
/// each forked task its own fresh `Pool`.
#[derive(Debug, Default)]
pub struct Pool {
    free: Vec<Integer>,
}

impl Pool {
    /// Creates an empty pool. No allocation happens until the first checkout.
    pub fn new() -> Self {
        Pool { free: Vec::new() }
    }

    /// Checks out a slot, reusing a freed one if available.
    ///
    /// The returned value's content is unspecified (per the pool contract
    /// in §4.A of the design notes) — callers must overwrite it before
    /// reading.
    pub fn checkout(&mut self) -> PoolGuard<'_> {
        let value = self.free.pop().unwrap_or_else(|| Integer::new());
        PoolGuard {
            pool: self,
            value: Some(value),
        }
    }

    /// Raw pop, for callers that want to manage the lifetime themselves
    /// instead of taking a [`PoolGuard`]. Must be balanced by exactly one
    /// [`Pool::push`] before the containing scope returns.
    pub fn pop(&mut self) -> Integer {
        self.free.pop().unwrap_or_else(|| Integer::new())
    }

    /// Returns a slot to the pool. Its value is not expected to persist.
    pub fn push(&mut self, value: Integer) {
        self.free.push(value);
    }

    /// Releases every held slot.
    pub fn clear(&mut self) {
        self.free.clear();
    }

    /// Number of slots currently held free.
    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

/// RAII checkout of one [`Pool`] slot.
///
/// Derefs to the underlying `Integer`; the slot is returned to the pool
/// automatically on drop, including on early-return and panic-unwind paths,
/// so every `checkout` is balanced without the caller having to remember a
/// matching `push`.
pub struct PoolGuard<'p> {
    pool: &'p mut Pool,
    value: Option<Integer>,
}

impl std::ops::Deref for PoolGuard<'_> {
    type Target = Integer;
    fn deref(&self) -> &Integer {
        self.value.as_ref().expect("slot taken exactly once")
    }
}

impl std::ops::DerefMut for PoolGuard<'_> {
    fn deref_mut(&mut self) -> &mut Integer {
        self.value.as_mut().expect("slot taken exactly once")
    }
}

impl Drop for PoolGuard<'_> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_reuses_pushed_slots() {
        let mut pool = Pool::new();
        {
            let mut a = pool.checkout();
            *a = Integer::from(42);
        }
        assert_eq!(pool.len(), 1);
        let b = pool.checkout();
        assert_eq!(pool.len(), 0);
        drop(b);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn pop_push_balance() {
        let mut pool = Pool::new();
        let slot = pool.pop();
        assert_eq!(pool.len(), 0);
        pool.push(slot);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn clear_releases_everything() {
        let mut pool = Pool::new();
        pool.push(Integer::from(1));
        pool.push(Integer::from(2));
        pool.clear();
        assert!(pool.is_empty());
    }

    #[test]
    fn fresh_pool_allocates_on_demand() {
        let mut pool = Pool::new();
        let slot = pool.checkout();
        assert_eq!(*slot, 0);
    }
}
