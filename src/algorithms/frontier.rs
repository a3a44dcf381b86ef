use std::collections::VecDeque;

use crate::algorithms::Algorithm;
use crate::algorithms::rank::Rank;
use crate::cost::Cost;
use crate::data_structures::dary_heap::DAryHeap;
use crate::space::Node;

/// A heap node for ranked frontiers
///
/// Heap nodes carry just ranking information and the node. Paths are never
/// copied in; they are rebuilt from the search tree once.
#[derive(Debug)]
pub(crate) struct RankedNode<N, C>
where
    N: Node,
    C: Cost,
{
    pub(crate) rank: Rank<C>,
    pub(crate) node: N,
}

impl<N: Node, C: Cost> PartialEq for RankedNode<N, C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl<N: Node, C: Cost> Eq for RankedNode<N, C> {}

impl<N: Node, C: Cost> PartialOrd for RankedNode<N, C> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: Node, C: Cost> Ord for RankedNode<N, C> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// The discovered but not yet expanded nodes.
///
/// The discipline decides which node comes out next.
#[derive(Debug)]
pub(crate) enum Frontier<N, C>
where
    N: Node,
    C: Cost,
{
    /// First in, first out.
    Queue(VecDeque<N>),
    /// Last in, first out.
    Stack(Vec<N>),
    /// Best rank out.
    Ranked {
        open: DAryHeap<RankedNode<N, C>>,
        greedy: bool,
        next_seq: u64,
    },
}

impl<N, C> Frontier<N, C>
where
    N: Node,
    C: Cost,
{
    pub(crate) fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BreadthFirst => Frontier::Queue(VecDeque::new()),
            Algorithm::DepthFirst => Frontier::Stack(Vec::new()),
            Algorithm::GreedyBestFirst | Algorithm::AStar => Frontier::Ranked {
                open: DAryHeap::with_capacity(256),
                greedy: algorithm == Algorithm::GreedyBestFirst,
                next_seq: 0,
            },
        }
    }

    /// Whether pushing needs `h`.
    #[inline(always)]
    pub(crate) fn is_ranked(&self) -> bool {
        matches!(self, Frontier::Ranked { .. })
    }

    /// Adds a node reached with cost `g` and estimated `h` away from the goal.
    ///
    /// Unranked frontiers ignore both.
    pub(crate) fn push(&mut self, node: N, g: C, h: C) {
        match self {
            Frontier::Queue(queue) => queue.push_back(node),
            Frontier::Stack(stack) => stack.push(node),
            Frontier::Ranked {
                open,
                greedy,
                next_seq,
            } => {
                let seq = *next_seq;
                *next_seq += 1;
                let rank = if *greedy {
                    Rank::greedy(h, seq)
                } else {
                    Rank::astar(g, h, seq)
                };
                open.push(RankedNode { rank, node });
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<N> {
        match self {
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Ranked { open, .. } => open.pop().map(|n| n.node),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Queue(queue) => queue.len(),
            Frontier::Stack(stack) => stack.len(),
            Frontier::Ranked { open, .. } => open.len(),
        }
    }
}
