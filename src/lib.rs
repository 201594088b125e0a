//! # copri — natural coprime bases over arbitrary-precision integers
//!
//! Implements Bernstein's "factoring into coprimes in essentially linear
//! time": a family of mutually recursive divide-and-conquer algorithms that
//! compute the *natural coprime base* of a finite set of positive integers,
//! then factor each element of that set over the base. The motivating
//! application is batch-GCD-style attacks on RSA — given many moduli,
//! cheaply expose any pair that shares a factor.
//!
//! ## Module organization
//!
//! **Primitives** (leaves of the recursion):
//! - [`pool`] — scratch arena for `rug::Integer` temporaries
//! - [`array`] — `Array[BigInt]` helpers over `Vec<Integer>`
//! - [`power`] — `two_power`, in-place repeated squaring
//! - [`prime_power`] — `gcd_ppi_ppo`, `gcd_ppg_pple` and their shortcuts
//! - [`prod`] — balanced product tree
//! - [`split`] — per-element prime-power projection onto a coprime set
//!
//! **Coprime-base family**:
//! - [`append_cb`] — natural coprime base of a pair
//! - [`cbextend`] — extends a coprime base by one element
//! - [`cbmerge`] — merges two coprime bases
//! - [`cb`] — natural coprime base of a whole set (optionally parallel)
//!
//! **Factoring over a base**:
//! - [`factor`] — `reduce`, `find_factor`, `find_factors`
//!
//! **Ambient**:
//! - [`diagnostics`] — sideband warnings for non-fatal anomalies
//! - [`config`] — the `cb` parallelism knob
//!
//! ## Example
//!
//! ```
//! use copri::cb::cb;
//! use copri::pool::Pool;
//! use rug::Integer;
//!
//! let moduli = vec![Integer::from(15), Integer::from(21), Integer::from(35)];
//! let mut pool = Pool::new();
//! let mut base = Vec::new();
//! cb(&mut pool, &mut base, &moduli);
//! // base is {3, 5, 7} in some order.
//! assert_eq!(base.len(), 3);
//! ```

pub mod append_cb;
pub mod array;
pub mod cb;
pub mod cbextend;
pub mod cbmerge;
pub mod config;
pub mod diagnostics;
pub mod factor;
pub mod pool;
pub mod power;
pub mod prime_power;
pub mod prod;
pub mod split;

pub use append_cb::append_cb;
pub use cb::{cb, cb_configured};
pub use cbextend::cbextend;
pub use cbmerge::cbmerge;
pub use config::{CoprimeBaseConfig, ParallelMode};
pub use factor::{find_factor, find_factors, reduce, FactorTriple};
pub use pool::{Pool, PoolGuard};
pub use split::split;
