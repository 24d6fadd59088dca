//! # Memory Management
//!
//! Flat arenas for rectangular world data.
//!
//! ## Design Philosophy
//!
//! Every grid in a generation pass is allocated once, up front:
//! - No per-row allocations
//! - Bounds checks are one comparison per axis
//! - Cells are contiguous, so whole grids compare and hash cheaply

mod grid;

pub use grid::Grid;
