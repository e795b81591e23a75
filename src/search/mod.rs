//! Search algorithms for the graph coloring problem.

/// first-fit greedy coloring, one color at a time
pub mod greedy;

/// exact backtracking with conflict-directed backjumping
pub mod backtracking;
