use std::fmt::Debug;

use derive_more::Display;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::algorithms::Algorithm;
use crate::algorithms::frontier::Frontier;
use crate::cost::Cost;
use crate::heuristic::Heuristic;
use crate::search::SearchTree;
use crate::space::Node;
use crate::space::Path;
use crate::space::Space;
use crate::space::SpaceError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError<N: Node> {
    #[error("Start node {0:?} is not part of the space")]
    UnknownStart(N),
    #[error("Goal node {0:?} is not part of the space")]
    UnknownGoal(N),
    #[error(transparent)]
    Space(#[from] SpaceError<N>),
}

/// Why a search stopped.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Termination {
    #[display("goal reached")]
    GoalReached,
    #[display("frontier exhausted")]
    FrontierEmpty,
    #[display("interrupted")]
    Interrupted,
}

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
#[display("pushed:{pushed} popped:{popped} stale:{stale} expanded:{expanded}")]
pub struct SearchStats {
    /// Entries added to the frontier, the start included.
    pub pushed: usize,
    /// Entries taken out of the frontier.
    pub popped: usize,
    /// Popped entries for nodes that had been expanded already.
    pub stale: usize,
    /// Nodes expanded. Always the length of the visitation trace.
    pub expanded: usize,
}

/// The result of running a search to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<N, C>
where
    N: Node,
    C: Cost,
{
    /// Start to goal, both inclusive. Empty unless the goal was reached.
    pub path: Path<N>,
    /// Expanded nodes, in expansion order.
    pub visited: Vec<N>,
    /// Cost of the path. Zero for the empty path.
    pub cost: C,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl<N, C> SearchOutcome<N, C>
where
    N: Node,
    C: Cost,
{
    #[inline(always)]
    pub fn found(&self) -> bool {
        self.termination == Termination::GoalReached
    }
}

/// A single search from a start node to a goal node.
///
/// The same traversal serves every [`Algorithm`], only the frontier
/// discipline and the rules for re-reaching known nodes change. All the
/// per-search state lives here and is dropped with it.
///
/// ```
/// use frontier_search::algorithms::Algorithm;
/// use frontier_search::algorithms::engine::FrontierSearch;
/// use frontier_search::heuristic::Metric;
/// use frontier_search::heuristic::SpatialHeuristic;
/// use frontier_search::problems::grid::GridProblem;
///
/// let problem: GridProblem = "S00/110/G00".parse().unwrap();
/// let heuristic = SpatialHeuristic::on_plane(Metric::Manhattan);
/// let outcome = FrontierSearch::new(
///     problem.space(),
///     &heuristic,
///     problem.start(),
///     problem.goal(),
///     Algorithm::AStar,
/// )
/// .unwrap()
/// .run()
/// .unwrap();
/// assert_eq!(outcome.path.len(), 7);
/// ```
pub struct FrontierSearch<'a, Sp, H, N, C>
where
    Sp: Space<N, C>,
    H: Heuristic<N, C>,
    N: Node,
    C: Cost,
{
    space: &'a Sp,
    heuristic: &'a H,
    algorithm: Algorithm,
    start: N,
    goal: N,

    /// Discovered nodes waiting to be expanded.
    frontier: Frontier<N, C>,
    /// Predecessors and best known costs of every discovered node.
    tree: SearchTree<N, C>,
    /// Expanded nodes.
    closed: FxHashSet<N>,
    visited: Vec<N>,
    stats: SearchStats,

    interrupt: Option<Box<dyn FnMut() -> bool + 'a>>,
}

impl<'a, Sp, H, N, C> FrontierSearch<'a, Sp, H, N, C>
where
    Sp: Space<N, C>,
    H: Heuristic<N, C>,
    N: Node,
    C: Cost,
{
    pub fn new(
        space: &'a Sp,
        heuristic: &'a H,
        start: N,
        goal: N,
        algorithm: Algorithm,
    ) -> Result<Self, SearchError<N>> {
        if !space.contains(&start) {
            return Err(SearchError::UnknownStart(start));
        }
        if !space.contains(&goal) {
            return Err(SearchError::UnknownGoal(goal));
        }

        let mut search = Self {
            space,
            heuristic,
            algorithm,
            start,
            goal,
            frontier: Frontier::for_algorithm(algorithm),
            tree: SearchTree::new(start),
            closed: FxHashSet::default(),
            visited: vec![],
            stats: SearchStats::default(),
            interrupt: None,
        };
        search.enqueue(start, C::zero());
        Ok(search)
    }

    /// Polls `interrupt` once per frontier pop, stopping the search as soon
    /// as it returns `true`.
    #[must_use]
    pub fn with_interrupt<F>(mut self, interrupt: F) -> Self
    where
        F: FnMut() -> bool + 'a,
    {
        self.interrupt = Some(Box::new(interrupt));
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn run(mut self) -> Result<SearchOutcome<N, C>, SearchError<N>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("Search");

        log::debug!(
            "{} search from {:?} to {:?}",
            self.algorithm,
            self.start,
            self.goal
        );

        let mut termination = Termination::FrontierEmpty;
        while let Some(node) = self.frontier.pop() {
            self.stats.popped += 1;

            if let Some(interrupt) = self.interrupt.as_mut() {
                if interrupt() {
                    log::warn!(
                        "{} search from {:?} to {:?} interrupted after expanding {} nodes",
                        self.algorithm,
                        self.start,
                        self.goal,
                        self.stats.expanded
                    );
                    termination = Termination::Interrupted;
                    break;
                }
            }

            if self.closed.contains(&node) {
                self.stats.stale += 1;
                continue;
            }

            if node == self.goal {
                #[cfg(feature = "coz_profile")]
                coz::progress!("GoalFound");
                termination = Termination::GoalReached;
                break;
            }

            self.expand(node)?;
        }

        let (path, cost) = match termination {
            Termination::GoalReached => {
                let path = self.tree.path(&self.start, &self.goal);
                let cost = if path.is_empty() {
                    C::zero()
                } else {
                    self.tree.g(&self.goal).unwrap_or_else(C::zero)
                };
                (path, cost)
            }
            _ => (Path::empty(), C::zero()),
        };

        log::debug!(
            "{} search from {:?} to {:?}: {termination}, cost {cost} ({})",
            self.algorithm,
            self.start,
            self.goal,
            self.stats
        );

        Ok(SearchOutcome {
            path,
            visited: self.visited,
            cost,
            termination,
            stats: self.stats,
        })
    }

    fn expand(&mut self, node: N) -> Result<(), SearchError<N>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("NodeExpansion");

        let Some(g) = self.tree.g(&node) else {
            unreachable!("Frontier node {node:?} is missing from the search tree");
        };
        debug_assert!(!self.closed.contains(&node));

        self.closed.insert(node);
        self.visited.push(node);
        self.stats.expanded += 1;
        log::trace!("Expanding {node:?} (g={g})");

        for (next, step) in self.space.neighbours(&node)? {
            #[cfg(feature = "coz_profile")]
            coz::scope!("ReachNode");

            if self.closed.contains(&next) {
                continue;
            }

            let next_g = g.saturating_add(&step);
            if !next_g.valid() {
                log::warn!("Cost of reaching {next:?} through {node:?} saturated");
            }
            let improves = match self.tree.g(&next) {
                None => true,
                Some(old_g) => self.algorithm.reopens() && next_g < old_g,
            };
            if improves {
                self.tree.reach(next, node, next_g);
                self.enqueue(next, next_g);
            }
        }

        Ok(())
    }

    #[inline(always)]
    fn enqueue(&mut self, n: N, g: C) {
        let h = if self.frontier.is_ranked() {
            self.heuristic.h(&n, &self.goal)
        } else {
            C::zero()
        };
        self.frontier.push(n, g, h);
        self.stats.pushed += 1;
    }
}

impl<Sp, H, N, C> Debug for FrontierSearch<'_, Sp, H, N, C>
where
    Sp: Space<N, C>,
    H: Heuristic<N, C>,
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "FrontierSearch{{{} {:?}->{:?}, |frontier|={}, {:?}, {}}}",
            self.algorithm,
            self.start,
            self.goal,
            self.frontier.len(),
            self.tree,
            self.stats,
        )
    }
}
