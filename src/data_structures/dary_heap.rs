use std::fmt::Debug;

// A heap is a tree-like structure where every subtree's root has a better score
// than all the other nodes in the subtree.
//
// This is often implemented with an array that's traversed in a non-linear way.
// With 4 children per node, these are the indices we assign to each node.
//
// ```text
//                                  0
//          1              2                3                 4
//    5  6  7  8     9 10 11 12      13 14 15 16       17 18 19 20
// ```
//
// The last level will often be incomplete
//
// You can easily go up and down from any index with,
//   - Up:          `(i-1)//D`
//   - First child: `(D*i) + 1`
//   - Last child:  `D*(i+1)`

/// Children per node.
///
/// Wider heaps are shallower, and siblings share cache lines.
pub const DEFAULT_ARITY: usize = 4usize;

/// The parent node
///
/// ```
/// use frontier_search::data_structures::dary_heap::index_parent;
/// assert_eq!(index_parent::<4>(1), 0);
/// assert_eq!(index_parent::<4>(4), 0);
/// assert_eq!(index_parent::<4>(5), 1);
/// assert_eq!(index_parent::<4>(8), 1);
/// assert_eq!(index_parent::<4>(20), 4);
/// assert_eq!(index_parent::<2>(6), 2);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent<const D: usize>(i: usize) -> usize {
    debug_assert!(i != 0, "The root has no parent");
    (i - 1) / D
}

/// The first children
///
/// ```
/// use frontier_search::data_structures::dary_heap::index_first_child;
/// assert_eq!(index_first_child::<4>(0), 1);
/// assert_eq!(index_first_child::<4>(1), 5);
/// assert_eq!(index_first_child::<4>(4), 17);
/// assert_eq!(index_first_child::<2>(3), 7);
/// ```
#[inline(always)]
#[must_use]
pub fn index_first_child<const D: usize>(i: usize) -> usize {
    (D * i) + 1
}

/// The last children
///
/// ```
/// use frontier_search::data_structures::dary_heap::index_last_child;
/// assert_eq!(index_last_child::<4>(0), 4);
/// assert_eq!(index_last_child::<4>(1), 8);
/// assert_eq!(index_last_child::<4>(4), 20);
/// assert_eq!(index_last_child::<2>(3), 8);
/// ```
#[inline(always)]
#[must_use]
pub fn index_last_child<const D: usize>(i: usize) -> usize {
    D * (i + 1)
}

/// Index of the first smallest element.
#[inline(always)]
#[must_use]
fn min_index<T: Ord>(xs: &[T]) -> usize {
    debug_assert!(!xs.is_empty());

    let mut min_i = 0;
    for (i, x) in xs.iter().enumerate().skip(1) {
        if *x < xs[min_i] {
            min_i = i;
        }
    }
    min_i
}

/// A min-heap with `D` children per node.
///
/// Elements are popped smallest first. Equal elements come out in no
/// particular order, so callers that need reproducible ties must make their
/// elements totally ordered.
///
/// ```
/// use frontier_search::data_structures::dary_heap::DAryHeap;
///
/// let mut heap = DAryHeap::<u32>::new();
/// for n in [5, 1, 4, 2, 3] {
///     heap.push(n);
/// }
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(std::iter::from_fn(|| heap.pop()).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Clone)]
pub struct DAryHeap<T, const D: usize = DEFAULT_ARITY>
where
    T: Ord,
{
    heap: Vec<T>,
}

impl<T, const D: usize> DAryHeap<T, D>
where
    T: Ord,
{
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        const { assert!(D >= 2, "Heaps need at least 2 children per node") };
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    #[inline(always)]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn push(&mut self, t: T) {
        #[cfg(feature = "coz_profile")]
        coz::scope!("HeapPush");

        self.heap.push(t);
        self.sift_up(self.heap.len() - 1);
        self.verify_heap();
    }

    pub fn pop(&mut self) -> Option<T> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("HeapPop");

        if self.heap.len() <= 1 {
            return self.heap.pop();
        }

        // Move the last leaf to the root, then let it sink.
        let top = self.heap.swap_remove(0);
        self.sift_down(0);
        self.verify_heap();
        Some(top)
    }

    /// Raises a node
    /// Returns its new index
    #[inline(always)]
    fn sift_up(&mut self, mut index: usize) -> usize {
        debug_assert!(index < self.heap.len(), "Index out of bounds");

        while index > 0 {
            let parent = index_parent::<D>(index);
            if self.heap[parent] <= self.heap[index] {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
        index
    }

    /// Lowers a node
    /// Returns its new index
    #[inline(always)]
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.heap.len();
        debug_assert!(index < len, "Index out of bounds");

        loop {
            let first = index_first_child::<D>(index);
            if first >= len {
                break;
            }
            let last = std::cmp::min(index_last_child::<D>(index), len - 1);
            let child = first + min_index(&self.heap[first..=last]);

            if self.heap[index] <= self.heap[child] {
                break;
            }
            self.heap.swap(index, child);
            index = child;
        }
        index
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        // Every node goes after its parent.
        for i in 1..self.heap.len() {
            let p = index_parent::<D>(i);
            assert!(
                self.heap[p] <= self.heap[i],
                "Node[{p}] !<= child[{i}]. Out of heap of len={}",
                self.heap.len(),
            );
        }
    }
}

impl<T, const D: usize> Default for DAryHeap<T, D>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const D: usize> Debug for DAryHeap<T, D>
where
    T: Ord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "DAryHeap<{D}>{{({} elements)}}", self.len())
    }
}
