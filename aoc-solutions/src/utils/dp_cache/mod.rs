//! Memoization cache for dynamic programming over a DAG
//!
//! A [`DpProblem`] describes, for every index, which other indices it depends
//! on and how to combine their values. [`DpCache`] resolves dependencies
//! recursively, computes each index at most once and stores the result in a
//! [`Backend`].
//!
//! Dependencies must form a DAG. A dependency that leads back to an index
//! still being resolved is reported as [`DpCacheError::Cycle`].
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::new(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&10).unwrap(), 55);
//! ```
//!
//! For sparse or non-integer indices use [`HashMapBackend`]:
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
//!         match (r, c) {
//!             (0, 0) => vec![],
//!             (0, c) => vec![(0, c - 1)],
//!             (r, 0) => vec![(r - 1, 0)],
//!             (r, c) => vec![(r - 1, c), (r, c - 1)],
//!         }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::new(HashMapBackend::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheError};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
