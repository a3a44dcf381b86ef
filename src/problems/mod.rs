//! Implementation of search spaces and problems.
//!
//! These expose concrete graphs through the generic [`Space`](crate::space::Space)
//! API, so any algorithm can do path-finding on them.

pub mod grid;
pub mod network;
