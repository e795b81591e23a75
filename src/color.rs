use std::fmt;
use std::ops::Range;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring problem
(represented as a partition, color class after color class).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** models a graph that can be colored.

Vertices are `0..nb_vertices()`. The adjacency relation is whatever the
caller inserted: `add_edge(v,w)` may only record the arc v→w (see [`crate::adjacency_list::ListGraph`]).
The coloring algorithms expect `neighbors(v)` to be ascending.
*/
pub trait ColoringGraph {
    /// lazy ascending sequence of the neighbors of a vertex
    type Neighbors<'a>: Iterator<Item=VertexId> where Self: 'a;

    /// graph with `n` isolated vertices
    fn with_vertices(n:usize) -> Self where Self: Sized;

    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// inserts the edge (v,w)
    fn add_edge(&mut self, v:VertexId, w:VertexId);

    /// true iff w is a neighbor of v
    fn has_edge(&self, v:VertexId, w:VertexId) -> bool;

    /// neighbors of v, ascending
    fn neighbors(&self, v:VertexId) -> Self::Neighbors<'_>;

    /// vertex ids of the graph
    fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// number of neighbors of v
    fn degree(&self, v:VertexId) -> usize { self.neighbors(v).count() }

    /// number of (v,w) pairs such that w is a neighbor of v (∑ d(v))
    fn nb_arcs(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).sum()
    }
}


/** assignment of a color (`1..=k`) to each vertex of a graph */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coloring {
    /// by_vertices[v]: color of vertex v
    by_vertices: Vec<usize>,
}

impl Coloring {
    /// wraps a per-vertex color vector
    pub fn new(by_vertices:Vec<usize>) -> Self { Self { by_vertices } }

    /// colors, indexed by vertex
    pub fn colors(&self) -> &[usize] { &self.by_vertices }

    /// color of vertex v
    pub fn color(&self, v:VertexId) -> usize { self.by_vertices[v] }

    /// number of vertices colored
    pub fn len(&self) -> usize { self.by_vertices.len() }

    /// true iff the coloring covers no vertex
    pub fn is_empty(&self) -> bool { self.by_vertices.is_empty() }

    /// largest color used (0 for an empty coloring)
    pub fn nb_colors(&self) -> usize {
        self.by_vertices.iter().copied().max().unwrap_or(0)
    }

    /** builds the partition representation (res[i]: vertices assigned color i+1).
    Color classes that are not used stay empty. */
    pub fn to_partition(&self) -> Solution {
        let mut res = vec![vec![] ; self.nb_colors()];
        for (v,c) in self.by_vertices.iter().enumerate() {
            if *c > 0 {
                res[c-1].push(v);
            }
        }
        res
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-coloring: ", self.nb_colors())?;
        for (i,c) in self.by_vertices.iter().enumerate() {
            if i > 0 { write!(f, ",")?; }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}


/** result of an exact coloring search */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// a coloring within the budget
    Colored(Coloring),
    /// no coloring exists within the budget
    Infeasible,
}

impl SearchOutcome {
    /// the coloring, if one was found
    pub fn coloring(&self) -> Option<&Coloring> {
        match self {
            SearchOutcome::Colored(c) => Some(c),
            SearchOutcome::Infeasible => None,
        }
    }

    /// consumes the outcome, returning the coloring if one was found
    pub fn into_coloring(self) -> Option<Coloring> {
        match self {
            SearchOutcome::Colored(c) => Some(c),
            SearchOutcome::Infeasible => None,
        }
    }

    /// true iff the budget was proven too small
    pub fn is_infeasible(&self) -> bool { matches!(self, SearchOutcome::Infeasible) }
}


/** checker result */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid coloring using the given number of colors
    Ok(usize),
    /// the coloring does not cover exactly the vertices of the graph
    WrongLength {
        /// number of vertices of the graph
        expected: usize,
        /// number of vertices colored
        found: usize,
    },
    /// vertex without a color (color 0)
    VertexNotColored(VertexId),
    /// the two endpoints of an edge share a color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks a coloring against every arc of the graph.
returns the number of colors used if the coloring is valid.
*/
pub fn checker<G:ColoringGraph>(graph:&G, coloring:&Coloring) -> CheckerResult {
    if coloring.len() != graph.nb_vertices() {
        return CheckerResult::WrongLength { expected: graph.nb_vertices(), found: coloring.len() };
    }
    if let Some(v) = graph.vertices().find(|v| coloring.color(*v) == 0) {
        return CheckerResult::VertexNotColored(v);
    }
    for v in graph.vertices() {
        if let Some(w) = graph.neighbors(v).find(|w| coloring.color(*w) == coloring.color(v)) {
            return CheckerResult::ConflictingEdge(v, w);
        }
    }
    CheckerResult::Ok(coloring.nb_colors())
}
