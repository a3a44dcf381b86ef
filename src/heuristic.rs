//! Estimates of the remaining cost to a goal.
//!
//! Heuristics are pure and know nothing about the shape of the space they
//! guide. Spatial ones only need a way of placing nodes on a plane, see
//! [`Locate`].

use std::fmt::Debug;

use derive_more::Display;

use crate::cost::Cost;
use crate::distance::Distance;
use crate::space::Node;

/// Estimates the cost of reaching `goal` from `n`.
///
/// Estimates must be non-negative and `h(n, n)` must be zero. Whether they are
/// admissible is up to the caller; A* only returns optimal paths when they
/// are.
pub trait Heuristic<N, C>
where
    N: Node,
    C: Cost,
{
    fn h(&self, n: &N, goal: &N) -> C;
}

/// The uninformed heuristic.
///
/// Turns A* into Dijkstra and Greedy Best-First into an arbitrary-order
/// search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<N, C> Heuristic<N, C> for ZeroHeuristic
where
    N: Node,
    C: Cost,
{
    #[inline(always)]
    fn h(&self, _n: &N, _goal: &N) -> C {
        C::zero()
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display("({x},{y})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The distance of following straight lines along the axes.
///
/// Admissible for 4-directional movement with unit costs.
#[inline(always)]
pub fn manhattan(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// The straight-line distance.
///
/// ```
/// use frontier_search::heuristic::Point;
/// use frontier_search::heuristic::euclidean;
///
/// assert_eq!(euclidean(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
/// ```
#[inline(always)]
pub fn euclidean(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// The Chebyshev distance, maximising useful diagonals.
///
/// Admissible for 8-directional movement where diagonals cost as much as
/// orthogonal moves.
#[inline(always)]
pub fn diagonal(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Metric {
    #[display("Manhattan")]
    Manhattan,
    #[display("Euclidean")]
    Euclidean,
    #[display("Diagonal")]
    Diagonal,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Manhattan, Metric::Euclidean, Metric::Diagonal];

    #[inline(always)]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Manhattan => manhattan(a, b),
            Metric::Euclidean => euclidean(a, b),
            Metric::Diagonal => diagonal(a, b),
        }
    }
}

/// Nodes that know where they are.
pub trait Positioned {
    fn position(&self) -> Point;
}

/// Places nodes on a plane.
pub trait Locate<N: Node>: Debug {
    fn locate(&self, n: &N) -> Option<Point>;
}

/// Locates [`Positioned`] nodes by asking them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Plane;

impl<N> Locate<N> for Plane
where
    N: Node + Positioned,
{
    #[inline(always)]
    fn locate(&self, n: &N) -> Option<Point> {
        Some(n.position())
    }
}

impl<N, L> Locate<N> for &L
where
    N: Node,
    L: Locate<N> + ?Sized,
{
    #[inline(always)]
    fn locate(&self, n: &N) -> Option<Point> {
        (**self).locate(n)
    }
}

/// Measures the distance between the positions of two nodes.
#[derive(Clone, Debug)]
pub struct SpatialHeuristic<L> {
    metric: Metric,
    locator: L,
}

impl<L> SpatialHeuristic<L> {
    pub fn new(metric: Metric, locator: L) -> Self {
        Self { metric, locator }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }
    pub fn locator(&self) -> &L {
        &self.locator
    }
}

impl SpatialHeuristic<Plane> {
    /// A heuristic for nodes that carry their own position.
    pub fn on_plane(metric: Metric) -> Self {
        Self::new(metric, Plane)
    }
}

impl<N, L> Heuristic<N, Distance> for SpatialHeuristic<L>
where
    N: Node,
    L: Locate<N>,
{
    /// Nodes that can't be placed estimate zero, which keeps the heuristic
    /// admissible.
    fn h(&self, n: &N, goal: &N) -> Distance {
        match (self.locator.locate(n), self.locator.locate(goal)) {
            (Some(a), Some(b)) => Distance::from_metric(self.metric.distance(a, b)),
            _ => Distance::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    struct Spot(i32, i32);
    impl Node for Spot {}
    impl Positioned for Spot {
        fn position(&self) -> Point {
            Point::new(f64::from(self.0), f64::from(self.1))
        }
    }

    #[derive(Debug)]
    struct OnlyOrigin;
    impl Locate<Spot> for OnlyOrigin {
        fn locate(&self, n: &Spot) -> Option<Point> {
            (*n == Spot(0, 0)).then_some(Point::new(0.0, 0.0))
        }
    }

    #[test]
    fn metrics() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(diagonal(a, b), 4.0);
        for m in Metric::ALL {
            assert_eq!(m.distance(b, b), 0.0);
            assert_eq!(m.distance(a, b), m.distance(b, a));
        }
    }

    #[test]
    fn metric_ordering() {
        // diagonal <= euclidean <= manhattan, always.
        let a = Point::new(1.0, 2.0);
        for b in [Point::new(7.0, 3.0), Point::new(-2.0, 9.0), Point::new(1.0, 2.0)] {
            assert!(diagonal(a, b) <= euclidean(a, b));
            assert!(euclidean(a, b) <= manhattan(a, b));
        }
    }

    #[test]
    fn far_apart_points_estimate_the_largest_distance() {
        let far = Point::new(1e308, 0.0);
        let other_side = Point::new(-1e308, 1e308);
        for m in Metric::ALL {
            assert_eq!(m.distance(far, other_side), f64::INFINITY);
        }

        #[derive(Debug)]
        struct Ends;
        impl Locate<Spot> for Ends {
            fn locate(&self, n: &Spot) -> Option<Point> {
                Some(Point::new(f64::from(n.0) * 1e308, 0.0))
            }
        }
        for m in Metric::ALL {
            let h = SpatialHeuristic::new(m, Ends);
            assert_eq!(h.h(&Spot(1, 0), &Spot(-1, 0)), Distance::MAX);
            assert_eq!(h.h(&Spot(1, 0), &Spot(1, 0)), Distance::ZERO);
        }
    }

    #[test]
    fn spatial_heuristic() {
        let h = SpatialHeuristic::on_plane(Metric::Manhattan);
        assert_eq!(h.h(&Spot(1, 1), &Spot(4, 5)), Distance::from(7));
        assert_eq!(h.h(&Spot(4, 5), &Spot(4, 5)), Distance::ZERO);
    }

    #[test]
    fn unlocated_nodes_estimate_zero() {
        let h = SpatialHeuristic::new(Metric::Euclidean, OnlyOrigin);
        assert_eq!(h.h(&Spot(0, 0), &Spot(3, 4)), Distance::ZERO);
    }

    #[test]
    fn zero_heuristic() {
        let h = <ZeroHeuristic as Heuristic<Spot, u32>>::h(&ZeroHeuristic, &Spot(0, 0), &Spot(9, 9));
        assert_eq!(h, 0);
    }
}
