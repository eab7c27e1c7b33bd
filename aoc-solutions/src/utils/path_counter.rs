//! Counting distinct paths between two nodes of a directed graph
//!
//! [`PathGraph`] keeps, for every node label, the ordered list of outgoing
//! neighbour labels. Parallel edges are kept, so two edges `a -> b` are two
//! distinct paths from `a` to `b`.
//!
//! [`PathGraph::count_paths`] restricts the graph to the nodes reachable from
//! the start, orders them topologically (Kahn's algorithm) and sums path
//! counts along that order.
//!
//! ```rust
//! use aoc_solutions::utils::path_counter::PathGraph;
//!
//! let graph: PathGraph = [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(graph.count_paths("a", "d").unwrap(), 2);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathCountError {
    #[error("node `{0}` is not in the graph")]
    MissingNode(String),
    #[error("{unordered} reachable node(s) lie on a cycle")]
    Cycle { unordered: usize },
    #[error("path count does not fit in 64 bits")]
    Overflow,
}

/// Directed multigraph keyed by borrowed node labels
#[derive(Debug, Clone, Default)]
pub struct PathGraph<'a> {
    adjacency: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> PathGraph<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no edges; existing nodes keep their edges.
    pub fn add_node(&mut self, label: &'a str) {
        self.adjacency.entry(label).or_default();
    }

    /// Adds the edge `from -> to`, creating either node if needed.
    pub fn add_edge(&mut self, from: &'a str, to: &'a str) {
        self.add_node(to);
        self.adjacency.entry(from).or_default().push(to);
    }

    pub fn neighbors(&self, label: &str) -> &[&'a str] {
        self.adjacency.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct paths from `start` to `end`.
    ///
    /// `start == end` counts the empty path, so the result is 1. An `end`
    /// that cannot be reached gives 0. Cycles among the nodes reachable from
    /// `start` are an error, since the count would be unbounded. So is a
    /// count above `u64::MAX`.
    pub fn count_paths(&self, start: &str, end: &str) -> Result<u64, PathCountError> {
        let start = self.label(start)?;
        let end = self.label(end)?;

        let (reachable, mut in_degree) = self.reachable_from(start);

        let mut queue: VecDeque<&str> = reachable
            .iter()
            .copied()
            .filter(|node| in_degree.get(node).copied().unwrap_or(0) == 0)
            .collect();
        let mut order = Vec::with_capacity(reachable.len());

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &neighbor in self.neighbors(node) {
                if let Some(degree) = in_degree.get_mut(neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        if order.len() < reachable.len() {
            return Err(PathCountError::Cycle {
                unordered: reachable.len() - order.len(),
            });
        }

        let mut paths: HashMap<&str, u64> = HashMap::with_capacity(order.len());
        paths.insert(start, 1);
        for node in order {
            let here = paths.get(node).copied().unwrap_or(0);
            if here == 0 {
                continue;
            }
            for &neighbor in self.neighbors(node) {
                let total = paths.entry(neighbor).or_insert(0);
                *total = total.checked_add(here).ok_or(PathCountError::Overflow)?;
            }
        }

        Ok(paths.get(end).copied().unwrap_or(0))
    }

    fn label(&self, label: &str) -> Result<&'a str, PathCountError> {
        self.adjacency
            .get_key_value(label)
            .map(|(key, _)| *key)
            .ok_or_else(|| PathCountError::MissingNode(label.to_string()))
    }

    /// BFS from `start`, returning the reachable set and each reachable
    /// node's in-degree counted over edges leaving reachable nodes.
    fn reachable_from(&self, start: &'a str) -> (HashSet<&'a str>, HashMap<&'a str, usize>) {
        let mut reachable = HashSet::from([start]);
        let mut in_degree = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            for &neighbor in self.neighbors(node) {
                *in_degree.entry(neighbor).or_insert(0) += 1;
                if reachable.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        (reachable, in_degree)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for PathGraph<'a> {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut graph = PathGraph::new();
        for (from, to) in iter {
            graph.add_edge(from, to);
        }
        graph
    }
}
