//! Containers tuned for search frontiers.

pub mod dary_heap;
