//! Implementation of search algorithms.
//!
//! These algorithms can do path-finding on any [`Space`]. They all share one
//! traversal, see [`engine::FrontierSearch`], and only differ in the way they
//! pick the next node to expand.

use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

use crate::cost::Cost;
use crate::heuristic::Heuristic;
use crate::space::Node;
use crate::space::Space;

pub mod engine;
pub(crate) mod frontier;
pub mod rank;

pub use engine::FrontierSearch;
pub use engine::SearchError;
pub use engine::SearchOutcome;
pub use engine::SearchStats;
pub use engine::Termination;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Expands nodes in the order they were discovered.
    #[display("BFS")]
    #[value(name = "bfs")]
    BreadthFirst,
    /// Expands the most recently discovered node first.
    #[display("DFS")]
    #[value(name = "dfs")]
    DepthFirst,
    /// Expands the node that seems closest to the goal.
    #[display("Greedy Best-First")]
    #[value(name = "greedy")]
    GreedyBestFirst,
    /// Expands the node on the cheapest estimated full path.
    #[display("A*")]
    #[value(name = "astar")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ];

    /// Whether the heuristic guides this algorithm.
    pub fn is_informed(self) -> bool {
        matches!(self, Algorithm::GreedyBestFirst | Algorithm::AStar)
    }

    /// Whether discovered nodes can be reached again through cheaper paths
    /// before they are expanded.
    pub fn reopens(self) -> bool {
        self == Algorithm::AStar
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown algorithm '{0}'. Expected one of bfs, dfs, greedy or astar.")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "greedy" | "greedy-best-first" | "best-first" => Ok(Algorithm::GreedyBestFirst),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Finds a path from `start` to `goal` with `algorithm`.
///
/// Uninformed algorithms never call the heuristic, so any one will do for
/// them, [`ZeroHeuristic`](crate::heuristic::ZeroHeuristic) included.
///
/// An unreachable goal is not an error, it yields an outcome with an empty
/// path and every reachable node in its trace.
pub fn search<Sp, H, N, C>(
    space: &Sp,
    heuristic: &H,
    start: N,
    goal: N,
    algorithm: Algorithm,
) -> Result<SearchOutcome<N, C>, SearchError<N>>
where
    Sp: Space<N, C>,
    H: Heuristic<N, C>,
    N: Node,
    C: Cost,
{
    FrontierSearch::new(space, heuristic, start, goal, algorithm)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(
            Algorithm::ALL.map(|a| a.to_string()),
            ["BFS", "DFS", "Greedy Best-First", "A*"]
        );
    }

    #[test]
    fn parsing() {
        assert_eq!("bfs".parse(), Ok(Algorithm::BreadthFirst));
        assert_eq!(" DFS ".parse(), Ok(Algorithm::DepthFirst));
        assert_eq!("greedy".parse(), Ok(Algorithm::GreedyBestFirst));
        assert_eq!("A*".parse(), Ok(Algorithm::AStar));
        assert_eq!(
            "dijkstra".parse::<Algorithm>(),
            Err(ParseAlgorithmError("dijkstra".to_string()))
        );
    }

    #[test]
    fn properties() {
        assert!(!Algorithm::BreadthFirst.is_informed());
        assert!(!Algorithm::DepthFirst.is_informed());
        assert!(Algorithm::GreedyBestFirst.is_informed());
        assert!(Algorithm::AStar.is_informed());
        assert_eq!(
            Algorithm::ALL.iter().filter(|a| a.reopens()).count(),
            1,
            "Only A* reopens"
        );
    }
}
