//! Graph coloring: a first-fit greedy heuristic and an exact backtracking search
//! with conflict-directed backjumping.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph interface, colorings and checker
pub mod color;

/// graph stored as sorted adjacency lists
pub mod adjacency_list;

/// graph stored as a triangular bit matrix
pub mod adjacency_matrix;

/// read/write the adjacency-list text format
pub mod adjacency_format;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for the graph coloring problem
pub mod search;
