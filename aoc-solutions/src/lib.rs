//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under [`my_solutions`], one module per year and day. Each
//! uses the `AutoRegisterSolver` derive macro, so linking this crate is enough
//! for `SolverRegistryBuilder::register_all_plugins()` to find them.
//!
//! [`utils`] holds the algorithms shared between days: path counting over a
//! device graph, polygon border flood fill, grid helpers and a DP cache.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
