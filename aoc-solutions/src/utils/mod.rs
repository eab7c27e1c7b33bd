//! Shared building blocks for the puzzle solutions

pub mod border_fill;
pub mod dp_cache;
pub mod grid;
pub mod path_counter;
