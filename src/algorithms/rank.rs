use std::cmp::Reverse;

use crate::cost::Cost;

/// The ranking tuple for ranked frontiers
///
/// We prefer better priorities (`h` for Greedy Best-First, `g + h` for A*),
/// then tie break for lower `h`, and finally for the most recently inserted
/// entry.
///
/// Preferring lower `h` on equal `f` favours nodes that are closer to the goal,
/// and preferring recent entries keeps expanding the branch that's being
/// followed. Insertion sequence numbers are unique within a search, so no two
/// ranks are ever equal and pops are fully reproducible.
///
/// ```
/// use frontier_search::algorithms::rank::Rank;
///
/// assert!(Rank::new(3u32, 1, 0) < Rank::new(4u32, 0, 1));
/// assert!(Rank::new(4u32, 0, 0) < Rank::new(4u32, 1, 1));
/// assert!(Rank::new(4u32, 1, 7) < Rank::new(4u32, 1, 6));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank<C: Cost> {
    priority: C,
    h: C,
    seq: Reverse<u64>,
}

impl<C> Rank<C>
where
    C: Cost,
{
    #[inline(always)]
    pub fn new(priority: C, h: C, seq: u64) -> Self {
        Self {
            priority,
            h,
            seq: Reverse(seq),
        }
    }

    /// Ranks by `h` alone.
    #[inline(always)]
    pub fn greedy(h: C, seq: u64) -> Self {
        Self::new(h, h, seq)
    }

    /// Ranks by `f = g + h`.
    #[inline(always)]
    pub fn astar(g: C, h: C, seq: u64) -> Self {
        Self::new(g.saturating_add(&h), h, seq)
    }

    pub fn priority(&self) -> C {
        self.priority
    }
    pub fn h(&self) -> C {
        self.h
    }
    pub fn seq(&self) -> u64 {
        self.seq.0
    }
}
