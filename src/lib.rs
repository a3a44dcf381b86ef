use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod data_structures;

// Costs, search spaces and heuristics
// -----------------------------------
pub mod cost;
pub mod distance;
pub mod heuristic;
pub mod search;
pub mod space;

// Problems
// --------
pub mod problems;

// Algorithms
// ----------
pub mod algorithms;
