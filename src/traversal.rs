//! Depth-first and breadth-first visit orders over undirected graphs.
//!
//! [`Graph`] stores a 1-indexed adjacency list with each neighbor list sorted
//! ascending, so both traversals are deterministic: when several unvisited
//! neighbors are available, the smallest vertex number wins. DFS reports
//! recursive preorder; BFS reports queue (level) order. Both run in
//! O(n + m) over the reachable component.

use std::collections::VecDeque;

/// Undirected graph over vertices `1..=n`, adjacency-list representation.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Index 0 is unused; vertex `v` lives at `adjacency[v]`.
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds an edgeless graph with `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n + 1],
        }
    }

    /// Builds a graph with `n` vertices from undirected edges.
    ///
    /// Endpoints outside `1..=n` are ignored. Neighbor lists are sorted
    /// ascending once all edges are in.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(n);
        for &(a, b) in edges {
            if a == 0 || b == 0 || a > n || b > n {
                continue;
            }
            graph.adjacency[a].push(b);
            graph.adjacency[b].push(a);
        }
        for neighbors in &mut graph.adjacency {
            neighbors.sort_unstable();
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len() - 1
    }

    /// Neighbors of `v`, sorted ascending.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Depth-first preorder starting at `start`.
    ///
    /// Returns only vertices reachable from `start`, with `start` first.
    /// An out-of-range start yields an empty order.
    pub fn dfs_order(&self, start: usize) -> Vec<usize> {
        if start == 0 || start > self.vertex_count() {
            return Vec::new();
        }
        let mut visited = vec![false; self.adjacency.len()];
        let mut order = Vec::new();
        self.dfs_visit(start, &mut visited, &mut order);
        order
    }

    fn dfs_visit(&self, v: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[v] = true;
        order.push(v);
        for &next in &self.adjacency[v] {
            if !visited[next] {
                self.dfs_visit(next, visited, order);
            }
        }
    }

    /// Breadth-first (level) order starting at `start`.
    ///
    /// Returns only vertices reachable from `start`, with `start` first.
    /// An out-of-range start yields an empty order.
    pub fn bfs_order(&self, start: usize) -> Vec<usize> {
        if start == 0 || start > self.vertex_count() {
            return Vec::new();
        }
        let mut visited = vec![false; self.adjacency.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &next in &self.adjacency[v] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }
}
