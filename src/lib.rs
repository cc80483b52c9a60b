//! Classic introductory algorithm exercises as reusable library code.
//!
//! Each module implements one textbook technique as a pure, independently
//! testable unit. Input handling is deliberately kept out of the solvers:
//! the judge-style text formats live in the [`parse`] adapter, and the
//! computations take plain slices and integers.
//!
//! # Algorithms
//!
//! - **Range sums** ([`RangeSumIndex`]) — 2D prefix table, O(1) rectangle queries
//! - **Traversal** ([`Graph`]) — DFS/BFS visit orders over undirected graphs
//! - **Sliding window** ([`count_subarrays_with_sum`]) — exact-sum subarray counting
//! - **Fractions** ([`zigzag_fraction`]) — zigzag diagonal enumeration of rationals

mod fraction;
mod range_sum;
mod sliding_window;
mod traversal;

pub mod parse;

pub use fraction::{Fraction, zigzag_fraction};
pub use range_sum::{OutOfRangeQuery, RangeSumIndex};
pub use sliding_window::count_subarrays_with_sum;
pub use traversal::Graph;
