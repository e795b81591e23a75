use std::mem;

use bit_set::BitSet;
use log::debug;
use serde::Serialize;

use crate::color::{ColoringGraph, Coloring, SearchOutcome, VertexId};


/** counters collected during a backtracking search */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// number of colors committed to a vertex
    pub nb_assignments: usize,
    /// number of colors rejected by a still valid conflict in the problem table
    pub nb_cache_hits: usize,
    /// number of problem table entries replaced after their neighbor changed color
    pub nb_cache_refreshes: usize,
    /// number of exhausted vertices (including the one proving infeasibility)
    pub nb_retreats: usize,
    /// number of retreats that skipped at least one vertex
    pub nb_backjumps: usize,
    /// total number of vertices skipped by backjumps
    pub nb_skipped_vertices: usize,
}


/** outcome of a color selection at a vertex */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    /// a color passed validation and is committed
    Assigned(usize),
    /// every color failed. The search resumes at the deepest vertex to blame
    /// (None: the failure does not depend on any other vertex)
    Retreat(Option<VertexId>),
}


/**
Exact graph coloring with conflict-directed backjumping.

Vertices are colored by increasing id, vertex 0 being pinned to color 1 (any coloring
can be relabeled so that it holds). For each vertex, colors are tried in increasing
order starting after the color it currently holds, so that a vertex the search
jumps back to resumes where it stopped.

A candidate color c for v is rejected if a neighbor w < v holds it, whichever
direction the arc between them is stored in. The last such neighbor is memoized in `problem[v][c]` and checked first. When every color of v
failed, the search jumps back to the deepest vertex of the conflict set of v
instead of v-1, and merges the conflict set of v into the one of this vertex.

The search is iterative: the only per-vertex state is the color it currently holds
and its conflict set. Worst case running time is exponential.
*/
#[derive(Debug)]
pub struct BacktrackingColoring<'g, G:ColoringGraph> {
    /// graph to color
    graph: &'g G,
    /// color budget
    colors: usize,
    /// selected_colors[v]: color currently held by v (0: none)
    selected_colors: Vec<usize>,
    /// lower_neighbors[v]: vertices w <= v adjacent to v (arcs (v,w) or (w,v)), ascending
    lower_neighbors: Vec<Vec<VertexId>>,
    /// problem[v*(colors+1)+c]: last neighbor found holding color c when trying c at v
    problem: Vec<Option<VertexId>>,
    /// conflict_sets[v]: vertices to blame for the colors of v rejected so far
    conflict_sets: Vec<BitSet>,
    /// search statistics
    stats: SearchStats,
}

impl<'g, G:ColoringGraph> BacktrackingColoring<'g, G> {

    /** colors the graph with at most `colors` colors, or proves it impossible */
    pub fn compute(colors:usize, graph:&'g G) -> SearchOutcome {
        Self::compute_with_stats(colors, graph).0
    }

    /** same as [`Self::compute`], also returns the search statistics */
    pub fn compute_with_stats(colors:usize, graph:&'g G) -> (SearchOutcome, SearchStats) {
        let mut search = Self::new(colors, graph);
        let outcome = search.run();
        debug!(
            "backtracking ({} colors, {} vertices): {} | {:?}",
            colors, graph.nb_vertices(),
            if outcome.is_infeasible() { "infeasible" } else { "colored" },
            search.stats
        );
        (outcome, search.stats)
    }

    fn new(colors:usize, graph:&'g G) -> Self {
        let n = graph.nb_vertices();
        let mut selected_colors = vec![0 ; n];
        if n > 0 {
            selected_colors[0] = 1;
        }
        let mut lower_neighbors = vec![Vec::new() ; n];
        for v in graph.vertices() {
            for w in graph.neighbors(v) {
                if w <= v { lower_neighbors[v].push(w); } else { lower_neighbors[w].push(v); }
            }
        }
        for l in lower_neighbors.iter_mut() {
            l.sort_unstable();
            l.dedup();
        }
        Self {
            graph,
            colors,
            selected_colors,
            lower_neighbors,
            problem: vec![None ; n*(colors+1)],
            conflict_sets: vec![BitSet::default() ; n],
            stats: SearchStats::default(),
        }
    }

    /// main loop: move forward on success, jump back on failure
    fn run(&mut self) -> SearchOutcome {
        let n = self.graph.nb_vertices();
        if n > 0 && self.colors == 0 { return SearchOutcome::Infeasible; }
        let mut v:VertexId = 1;
        while v < n {
            match self.select_color(v) {
                Selection::Assigned(c) => {
                    debug_assert!((1..=self.colors).contains(&c));
                    v += 1;
                    if v < n { self.enter(v); }
                },
                Selection::Retreat(None) | Selection::Retreat(Some(0)) => {
                    self.stats.nb_retreats += 1;
                    return SearchOutcome::Infeasible;
                },
                Selection::Retreat(Some(target)) => {
                    self.jump(v, target);
                    v = target;
                }
            }
        }
        SearchOutcome::Colored(Coloring::new(self.selected_colors.clone()))
    }

    /// v is reached by a forward move: nothing tried yet
    fn enter(&mut self, v:VertexId) {
        self.selected_colors[v] = 0;
        self.conflict_sets[v].clear();
    }

    /// v is exhausted: resume the search at target (target < v)
    fn jump(&mut self, v:VertexId, target:VertexId) {
        debug_assert!(target < v);
        self.stats.nb_retreats += 1;
        if target + 1 < v {
            self.stats.nb_backjumps += 1;
            self.stats.nb_skipped_vertices += v - target - 1;
        }
        let mut blamed = mem::take(&mut self.conflict_sets[v]);
        blamed.remove(target);
        self.conflict_sets[target].union_with(&blamed);
    }

    /** tries the colors of v after the one it currently holds.
    Vertices before v hold their colors, vertices after v are irrelevant. */
    fn select_color(&mut self, v:VertexId) -> Selection {
        let mut c = self.selected_colors[v];
        loop {
            c = (c + 1) % (self.colors + 1);
            self.selected_colors[v] = c;
            if c == 0 { // every color tried
                return Selection::Retreat(self.conflict_sets[v].iter().last());
            }
            match self.find_conflict(v, c) {
                None => {
                    self.stats.nb_assignments += 1;
                    return Selection::Assigned(c);
                },
                Some(w) if w < v => { self.conflict_sets[v].insert(w); },
                Some(_) => {}, // self-loop, no other vertex to blame
            }
        }
    }

    /// returns a neighbor w <= v holding color c, if any
    fn find_conflict(&mut self, v:VertexId, c:usize) -> Option<VertexId> {
        let slot = v*(self.colors+1) + c;
        if let Some(p) = self.problem[slot] { // last known problem first
            if self.selected_colors[p] == c {
                self.stats.nb_cache_hits += 1;
                return Some(p);
            }
        }
        let selected_colors = &self.selected_colors;
        let w = self.lower_neighbors[v].iter().copied()
            .find(|w| selected_colors[*w] == c)?;
        if self.problem[slot].replace(w).is_some() {
            self.stats.nb_cache_refreshes += 1;
        }
        Some(w)
    }
}
