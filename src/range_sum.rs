//! 2D prefix sums for O(1) rectangle-sum queries.
//!
//! [`RangeSumIndex`] precomputes an `(n + 1) x (n + 1)` cumulative table over an
//! `n x n` integer grid so that any axis-aligned rectangle sum costs four table
//! lookups. Row 0 and column 0 of the table are sentinel zeros; they make both
//! the build recurrence and the query formula branch-free at the boundaries.
//!
//! Build recurrence (table 1-based, grid 0-based):
//!
//! ```text
//! table[i][j] = table[i-1][j] + table[i][j-1] - table[i-1][j-1] + grid[i-1][j-1]
//! ```
//!
//! Query by inclusion-exclusion over the four corner-anchored cumulative sums:
//!
//! ```text
//! sum(r1,c1,r2,c2) = table[r2][c2] - table[r1-1][c2] - table[r2][c1-1] + table[r1-1][c1-1]
//! ```
//!
//! Build is O(n²); each query is O(1). The table is immutable after
//! construction, so a built index can be queried from multiple threads
//! without locking.

use thiserror::Error;

/// A rectangle query fell outside the grid or had inverted corners.
///
/// Coordinates are 1-indexed; a valid rectangle satisfies
/// `1 <= row1 <= row2 <= n` and `1 <= col1 <= col2 <= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "query ({row1},{col1})-({row2},{col2}) is not a valid rectangle in a {n}x{n} grid"
)]
pub struct OutOfRangeQuery {
    pub row1: usize,
    pub col1: usize,
    pub row2: usize,
    pub col2: usize,
    pub n: usize,
}

/// Prefix-sum table over an `n x n` grid, answering rectangle sums in O(1).
#[derive(Clone)]
pub struct RangeSumIndex {
    /// `(n + 1) * (n + 1)` entries, row-major, with zero row 0 and column 0.
    table: Vec<i64>,
    n: usize,
}

impl RangeSumIndex {
    /// Builds the index from a flat row-major `n x n` grid.
    ///
    /// Always succeeds for any square grid; `grid.len()` must be `n * n`.
    pub fn new(grid: &[i64], n: usize) -> Self {
        debug_assert_eq!(grid.len(), n * n);
        let width = n + 1;
        let mut table = vec![0i64; width * width];

        // Each cell depends on (i-1,j), (i,j-1) and (i-1,j-1), so the fill
        // must proceed in non-decreasing row and column order.
        for i in 1..=n {
            let row = i * width;
            let above = row - width;
            let grid_row = (i - 1) * n;
            for j in 1..=n {
                table[row + j] = table[above + j] + table[row + j - 1]
                    - table[above + j - 1]
                    + grid[grid_row + j - 1];
            }
        }

        Self { table, n }
    }

    /// Builds the index from nested rows, checking that the grid is square.
    ///
    /// Returns `None` when any row length differs from the row count.
    pub fn from_rows(rows: &[Vec<i64>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return None;
        }
        let mut grid = Vec::with_capacity(n * n);
        for row in rows {
            grid.extend_from_slice(row);
        }
        Some(Self::new(&grid, n))
    }

    /// Grid dimension `n`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Sum of the rectangle with corners `(row1, col1)` and `(row2, col2)`,
    /// both inclusive and 1-indexed.
    ///
    /// Rejects inverted or out-of-range rectangles instead of silently
    /// computing on sentinel entries.
    pub fn sum(
        &self,
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
    ) -> Result<i64, OutOfRangeQuery> {
        if row1 == 0 || col1 == 0 || row1 > row2 || col1 > col2 || row2 > self.n || col2 > self.n
        {
            return Err(OutOfRangeQuery {
                row1,
                col1,
                row2,
                col2,
                n: self.n,
            });
        }
        Ok(self.sum_unchecked(row1, col1, row2, col2))
    }

    /// The raw inclusion-exclusion formula with no bounds check.
    ///
    /// The caller must uphold `1 <= row1 <= row2 <= n` and
    /// `1 <= col1 <= col2 <= n`; anything else indexes sentinel entries and
    /// returns a meaningless (but deterministic) value or panics on
    /// out-of-slice access.
    #[inline]
    pub fn sum_unchecked(&self, row1: usize, col1: usize, row2: usize, col2: usize) -> i64 {
        let width = self.n + 1;
        self.table[row2 * width + col2]
            - self.table[(row1 - 1) * width + col2]
            - self.table[row2 * width + col1 - 1]
            + self.table[(row1 - 1) * width + col1 - 1]
    }

    /// Sum of the whole grid.
    pub fn total(&self) -> i64 {
        if self.n == 0 {
            return 0;
        }
        self.sum_unchecked(1, 1, self.n, self.n)
    }
}
