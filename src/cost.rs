//! What a search accumulates along a path.

/// A totally ordered, non-negative accumulated cost.
pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
    + std::ops::Add<Self, Output = Self>
    + std::ops::AddAssign
{
    /// Whether the cost still fits the type, i.e. it didn't saturate.
    #[inline(always)]
    fn valid(&self) -> bool {
        *self != num_traits::bounds::UpperBounded::max_value()
    }
}

impl Cost for u32 {}
impl Cost for u64 {}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::SaturatingAdd;
    use num_traits::Zero;

    #[test]
    fn saturated_costs_are_invalid() {
        let c = u32::MAX - 1;
        assert!(c.valid());
        assert!(!SaturatingAdd::saturating_add(&c, &2).valid());
        assert!(u64::zero().valid());
    }
}
