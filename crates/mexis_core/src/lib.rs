//! # MEXIS Core
//!
//! Storage primitives shared by every world generation pass.
//!
//! ## Architecture Rules
//!
//! 1. **One allocation per grid** - No nested `Vec<Vec<T>>`
//! 2. **Row-major everywhere** - `(x, y)` maps to `y * width + x`
//! 3. **Checked access** - Out-of-range reads return `None`, never panic
//!
//! ## Example
//!
//! ```rust
//! use mexis_core::Grid;
//!
//! let mut grid = Grid::new(4, 3, 0u8);
//! grid.set(2, 1, 7);
//! assert_eq!(grid.get(2, 1), Some(&7));
//! assert_eq!(grid.get(4, 0), None);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;

pub use memory::Grid;
