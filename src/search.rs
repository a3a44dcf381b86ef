use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::space::Node;
use crate::space::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchTreeNode<N, C>
where
    N: Node,
    C: Cost,
{
    pub(crate) parent: Option<N>,
    pub(crate) g: C,
}

impl<N, C> SearchTreeNode<N, C>
where
    N: Node,
    C: Cost,
{
    pub fn parent(&self) -> Option<&N> {
        self.parent.as_ref()
    }
    pub fn g(&self) -> C {
        self.g
    }
}

/// The predecessor map of a search.
///
/// Every discovered node points to the node it was best reached from, and
/// remembers the cost of getting there. Roots have no parent.
///
/// The map stays acyclic as long as parents are only set on first discovery or
/// on strict cost improvements over non-negative step costs.
#[derive(Clone)]
pub struct SearchTree<N, C>
where
    N: Node,
    C: Cost,
{
    nodes: FxHashMap<N, SearchTreeNode<N, C>>,
}

impl<N, C> SearchTree<N, C>
where
    N: Node,
    C: Cost,
{
    #[must_use]
    pub fn new(root: N) -> Self {
        let mut nodes = FxHashMap::default();
        nodes.insert(
            root,
            SearchTreeNode {
                parent: None,
                g: C::zero(),
            },
        );
        Self { nodes }
    }

    /// Whether the node was ever discovered.
    #[inline(always)]
    pub fn contains(&self, n: &N) -> bool {
        self.nodes.contains_key(n)
    }

    #[inline(always)]
    pub fn get(&self, n: &N) -> Option<&SearchTreeNode<N, C>> {
        self.nodes.get(n)
    }

    /// The best known cost to reach the node.
    #[inline(always)]
    pub fn g(&self, n: &N) -> Option<C> {
        self.nodes.get(n).map(|node| node.g)
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reaches `n` from `parent` with an accumulated cost of `g`.
    ///
    /// Reaching a known node again replaces its parent, so it must only be
    /// done with a strictly better `g`.
    #[inline(always)]
    pub fn reach(&mut self, n: N, parent: N, g: C) {
        debug_assert!(n != parent, "{n:?} can't be its own parent");
        let node = SearchTreeNode {
            parent: Some(parent),
            g,
        };
        if let Some(old) = self.nodes.insert(n, node) {
            debug_assert!(g < old.g, "{n:?} was reached again without improving");
        }
    }

    /// Rebuilds the path from `start` to `goal`.
    ///
    /// Returns the empty path if the goal was never discovered, or when
    /// following its parents does not lead back to `start`. The latter would be
    /// a bug in the search that built the tree, and gets logged as such.
    #[must_use]
    pub fn path(&self, start: &N, goal: &N) -> Path<N> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("PathReconstruction");

        if !self.contains(goal) {
            return Path::empty();
        }

        let mut nodes = vec![*goal];
        let mut node = *goal;
        while let Some(parent) = self.nodes.get(&node).and_then(|n| n.parent) {
            if nodes.len() > self.nodes.len() {
                log::error!("Predecessor chain of {goal:?} loops without reaching {start:?}");
                return Path::empty();
            }
            nodes.push(parent);
            node = parent;
        }
        nodes.reverse();

        if nodes.first() != Some(start) {
            log::error!(
                "Predecessor chain of {goal:?} ends at {:?} instead of {start:?}",
                nodes.first()
            );
            return Path::empty();
        }

        Path::from_nodes(nodes)
    }
}

impl<N, C> std::fmt::Debug for SearchTree<N, C>
where
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_to_root() {
        let tree = SearchTree::<u8, u32>::new(3);
        assert_eq!(tree.path(&3, &3).nodes(), &[3]);
        assert_eq!(tree.g(&3), Some(0));
    }

    #[test]
    fn path_follows_parents() {
        let mut tree = SearchTree::<u8, u32>::new(0);
        tree.reach(1, 0, 3);
        tree.reach(2, 1, 8);
        tree.reach(3, 1, 11);
        tree.reach(4, 3, 12);
        // A better way into 3.
        tree.reach(3, 2, 10);

        let path = tree.path(&0, &4);
        assert_eq!(path.nodes(), &[0, 1, 2, 3, 4]);
        assert_eq!(tree.g(&3), Some(10));
        assert_eq!(tree.get(&3).and_then(|n| n.parent().copied()), Some(2));
    }

    #[test]
    fn undiscovered_goal_has_no_path() {
        let mut tree = SearchTree::<u8, u32>::new(0);
        tree.reach(1, 0, 1);
        assert!(tree.path(&0, &9).is_empty());
    }

    #[test]
    fn chains_must_end_at_start() {
        let mut tree = SearchTree::<u8, u32>::new(0);
        tree.reach(1, 0, 1);
        tree.reach(2, 1, 2);
        // Asking from a different start never yields a partial path.
        assert!(tree.path(&1, &2).is_empty());
        assert!(tree.path(&7, &2).is_empty());
    }

    #[test]
    fn broken_chains_have_no_path() {
        let mut tree = SearchTree::<u8, u32>::new(0);
        // 5's parent was never discovered.
        tree.reach(5, 6, 1);
        assert!(tree.path(&0, &5).is_empty());

        // 1 -> 2 -> 1 loops forever.
        tree.reach(1, 2, 4);
        tree.reach(2, 1, 3);
        assert!(tree.path(&0, &1).is_empty());
    }

    #[test]
    fn paths_start_at_start_and_end_at_goal() {
        let mut tree = SearchTree::<u8, u32>::new(0);
        for n in 1..10u8 {
            tree.reach(n, n / 2, u32::from(n));
        }
        for goal in 0..12u8 {
            let path = tree.path(&0, &goal);
            if !path.is_empty() {
                assert_eq!(path.start(), Some(&0));
                assert_eq!(path.goal(), Some(&goal));
            }
        }
    }
}
