//! Judge-format text adapters over the pure solvers.
//!
//! The computations in this crate never touch I/O; this module is the
//! swappable boundary that turns one exercise's whole input text into the
//! exact output text. Each `run_*` function consumes the classic judge
//! format for its exercise and returns the answer lines joined by `\n`
//! (no trailing newline). Errors surface immediately with line context and
//! never after partial output.

use thiserror::Error;

use crate::fraction::zigzag_fraction;
use crate::range_sum::{OutOfRangeQuery, RangeSumIndex};
use crate::sliding_window::count_subarrays_with_sum;
use crate::traversal::Graph;

/// Input text that does not match the expected exercise format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected at least {expected} input lines, found {found}")]
    MissingLines { expected: usize, found: usize },

    #[error("line {line}: expected {expected} values, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid integer `{token}`")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: `{value}` is not a valid {what}")]
    InvalidValue {
        line: usize,
        value: i64,
        what: &'static str,
    },
}

/// Any way a single run can fail: malformed input, or a structurally valid
/// query that falls outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Query(#[from] OutOfRangeQuery),
}

/// Splits one line into integers, reporting the 1-based line number on
/// failure.
fn parse_integers(line_no: usize, line: &str) -> Result<Vec<i64>, ParseError> {
    line.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| ParseError::InvalidInteger {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses a line that must hold exactly `expected` integers.
fn parse_fixed(line_no: usize, line: &str, expected: usize) -> Result<Vec<i64>, ParseError> {
    let values = parse_integers(line_no, line)?;
    if values.len() != expected {
        return Err(ParseError::TokenCount {
            line: line_no,
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}

fn require_lines(lines: &[&str], expected: usize) -> Result<(), ParseError> {
    if lines.len() < expected {
        return Err(ParseError::MissingLines {
            expected,
            found: lines.len(),
        });
    }
    Ok(())
}

/// Converts a parsed integer into a positive quantity (dimension,
/// coordinate, vertex number).
fn positive(line_no: usize, value: i64, what: &'static str) -> Result<usize, ParseError> {
    if value < 1 {
        return Err(ParseError::InvalidValue {
            line: line_no,
            value,
            what,
        });
    }
    Ok(value as usize)
}

/// Converts a parsed integer into a non-negative count.
fn count(line_no: usize, value: i64, what: &'static str) -> Result<usize, ParseError> {
    if value < 0 {
        return Err(ParseError::InvalidValue {
            line: line_no,
            value,
            what,
        });
    }
    Ok(value as usize)
}

/// Rectangle-sum exercise: `N M`, then N grid rows, then M queries
/// `r1 c1 r2 c2`. Output: one answer line per query, in input order.
pub fn run_range_sum(input: &str) -> Result<String, SolveError> {
    let lines: Vec<&str> = input.lines().collect();
    require_lines(&lines, 1)?;

    let header = parse_fixed(1, lines[0], 2)?;
    let n = positive(1, header[0], "grid dimension")?;
    let m = count(1, header[1], "query count")?;
    require_lines(&lines, 1 + n + m)?;

    let mut grid = Vec::with_capacity(n * n);
    for i in 0..n {
        let row = parse_fixed(2 + i, lines[1 + i], n)?;
        grid.extend_from_slice(&row);
    }
    let index = RangeSumIndex::new(&grid, n);

    let mut answers = Vec::with_capacity(m);
    for k in 0..m {
        let line_no = 2 + n + k;
        let query = parse_fixed(line_no, lines[n + 1 + k], 4)?;
        let row1 = positive(line_no, query[0], "coordinate")?;
        let col1 = positive(line_no, query[1], "coordinate")?;
        let row2 = positive(line_no, query[2], "coordinate")?;
        let col2 = positive(line_no, query[3], "coordinate")?;
        answers.push(index.sum(row1, col1, row2, col2)?.to_string());
    }
    Ok(answers.join("\n"))
}

/// Traversal exercise: `N M V`, then M undirected edges `a b`. Output: the
/// DFS order line, then the BFS order line, both space-separated.
pub fn run_traversal(input: &str) -> Result<String, SolveError> {
    let lines: Vec<&str> = input.lines().collect();
    require_lines(&lines, 1)?;

    let header = parse_fixed(1, lines[0], 3)?;
    let n = positive(1, header[0], "vertex count")?;
    let m = count(1, header[1], "edge count")?;
    let start = positive(1, header[2], "start vertex")?;
    if start > n {
        return Err(ParseError::InvalidValue {
            line: 1,
            value: header[2],
            what: "start vertex",
        }
        .into());
    }
    require_lines(&lines, 1 + m)?;

    let mut edges = Vec::with_capacity(m);
    for i in 0..m {
        let line_no = 2 + i;
        let pair = parse_fixed(line_no, lines[1 + i], 2)?;
        let a = positive(line_no, pair[0], "vertex")?;
        let b = positive(line_no, pair[1], "vertex")?;
        if a > n || b > n {
            let value = if a > n { pair[0] } else { pair[1] };
            return Err(ParseError::InvalidValue {
                line: line_no,
                value,
                what: "vertex",
            }
            .into());
        }
        edges.push((a, b));
    }

    let graph = Graph::from_edges(n, &edges);
    let dfs = join_order(&graph.dfs_order(start));
    let bfs = join_order(&graph.bfs_order(start));
    Ok(format!("{dfs}\n{bfs}"))
}

fn join_order(order: &[usize]) -> String {
    order
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sliding-window exercise: `N M`, then one line of N positive integers.
/// Output: the number of subarrays summing to M.
pub fn run_sliding_window(input: &str) -> Result<String, SolveError> {
    let lines: Vec<&str> = input.lines().collect();
    require_lines(&lines, 2)?;

    let header = parse_fixed(1, lines[0], 2)?;
    let n = positive(1, header[0], "array length")?;
    let target = header[1];
    if target < 1 {
        return Err(ParseError::InvalidValue {
            line: 1,
            value: target,
            what: "target sum",
        }
        .into());
    }

    let values = parse_fixed(2, lines[1], n)?;
    if let Some(&bad) = values.iter().find(|&&v| v < 1) {
        return Err(ParseError::InvalidValue {
            line: 2,
            value: bad,
            what: "array value",
        }
        .into());
    }

    Ok(count_subarrays_with_sum(&values, target).to_string())
}

/// Fraction exercise: a single index. Output: the fraction as `p/q`.
pub fn run_fraction(input: &str) -> Result<String, SolveError> {
    let lines: Vec<&str> = input.lines().collect();
    require_lines(&lines, 1)?;

    let header = parse_fixed(1, lines[0], 1)?;
    let index = positive(1, header[0], "sequence index")?;
    Ok(zigzag_fraction(index as u64).to_string())
}
