use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;
use thiserror::Error;

use crate::cost::Cost;

const MAX_ELEMENTS_DISPLAYED: usize = 20;

/// A vertex in a search space.
pub trait Node: Copy + Clone + Debug + PartialEq + Eq + Hash {}

/// The reachable neighbours of a node and the cost of stepping onto each.
///
/// Grids have at most 8 neighbours, so those never spill to the heap.
pub type Neighbours<N, C> = SmallVec<[(N, C); 8]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceError<N: Node> {
    #[error("Unknown node {0:?}")]
    UnknownNode(N),
    #[error("Nodes {0:?} and {1:?} are not adjacent")]
    NotAdjacent(N, N),
}

/// A sequence of nodes from a start to a goal, both inclusive.
///
/// The empty path means there's no way from the start to the goal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path<N: Node> {
    nodes: Vec<N>,
}

impl<N: Node> Path<N> {
    #[inline(always)]
    pub fn empty() -> Self {
        Self { nodes: vec![] }
    }

    /// Wraps nodes that already form a walk through a space.
    pub fn from_nodes(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes, including both ends.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of moves, one less than the nodes.
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }
    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }
    pub fn contains(&self, n: &N) -> bool {
        self.nodes.contains(n)
    }
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<'p, N: Node> IntoIterator for &'p Path<N> {
    type Item = &'p N;
    type IntoIter = std::slice::Iter<'p, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Node> std::fmt::Display for Path<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.start(), self.goal()) {
            (Some(start), Some(goal)) => {
                write!(
                    f,
                    "Path({} nodes, {:?}:{:?}:{:?})",
                    self.len(),
                    start,
                    self.nodes.iter().take(MAX_ELEMENTS_DISPLAYED).collect::<Vec<_>>(),
                    goal
                )
            }
            _ => write!(f, "Path()"),
        }
    }
}

/// A read-only weighted graph that can be searched.
///
/// Implementations must not mutate themselves while answering queries, so a
/// single space can be shared by searches running on different threads.
pub trait Space<N, C>: Debug
where
    N: Node,
    C: Cost,
{
    /// Whether the node belongs to this space.
    fn contains(&self, n: &N) -> bool;

    /// Expands a node.
    ///
    /// The order of the neighbours is part of the contract: it decides which
    /// node gets discovered first, and with that, ties.
    fn neighbours(&self, n: &N) -> Result<Neighbours<N, C>, SpaceError<N>>;

    /// The cost of moving from `from` straight into `to`.
    fn step_cost(&self, from: &N, to: &N) -> Result<C, SpaceError<N>>;

    fn size(&self) -> Option<usize> {
        None
    }

    /// Sums the cost of every step in the path.
    fn path_cost(&self, p: &Path<N>) -> Result<C, SpaceError<N>> {
        if let Some(start) = p.start() {
            if !self.contains(start) {
                return Err(SpaceError::UnknownNode(*start));
            }
        }

        let mut cost = C::zero();
        for step in p.nodes().windows(2) {
            cost += self.step_cost(&step[0], &step[1])?;
        }
        Ok(cost)
    }
}
