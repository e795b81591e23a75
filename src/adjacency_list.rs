use std::fmt;
use std::iter::Copied;
use std::slice::Iter;

use crate::adjacency_format::to_adjacency_string;
use crate::color::{ColoringGraph, VertexId};

/** models a graph as sorted adjacency lists.

`add_edge(v,w)` only records the arc v→w. The adjacency-list text format lists
both directions of every edge, so parsed graphs are symmetric.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGraph {
    /// adj_list[i]: sorted list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
}

impl ListGraph {
    /** builds a symmetric graph from an edge list (both arcs of each pair are inserted) */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut res = Self::with_vertices(n);
        for (v,w) in edges {
            res.add_edge(*v, *w);
            res.add_edge(*w, *v);
        }
        res
    }

    /// sorted neighbor list of v
    pub fn adj(&self, v:VertexId) -> &[VertexId] { &self.adj_list[v] }
}

impl ColoringGraph for ListGraph {
    type Neighbors<'a> = Copied<Iter<'a, VertexId>>;

    fn with_vertices(n:usize) -> Self {
        Self { adj_list: vec![Vec::new() ; n] }
    }

    fn nb_vertices(&self) -> usize { self.adj_list.len() }

    fn add_edge(&mut self, v:VertexId, w:VertexId) {
        let l = &mut self.adj_list[v];
        if let Err(pos) = l.binary_search(&w) { // keeps the list sorted, ignores duplicates
            l.insert(pos, w);
        }
    }

    fn has_edge(&self, v:VertexId, w:VertexId) -> bool {
        self.adj_list[v].binary_search(&w).is_ok()
    }

    fn neighbors(&self, v:VertexId) -> Self::Neighbors<'_> {
        self.adj_list[v].iter().copied()
    }

    fn degree(&self, v:VertexId) -> usize { self.adj_list[v].len() }
}

impl fmt::Display for ListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_adjacency_string(self))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_sorted() {
        let mut g = ListGraph::with_vertices(4);
        g.add_edge(0, 3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 1);
        assert_eq!(g.adj(0), &[1,2,3]);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1,2,3]);
        assert_eq!(g.degree(0), 3);
    }

    #[test]
    fn test_directed_by_default() {
        let mut g = ListGraph::with_vertices(2);
        g.add_edge(0, 1);
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.nb_arcs(), 1);
    }

    #[test]
    fn test_from_edges() {
        let g = ListGraph::from_edges(3, &[(0,1),(2,1)]);
        assert!(g.has_edge(1, 0) && g.has_edge(1, 2));
        assert_eq!(g.adj(1), &[0,2]);
        assert_eq!(g.nb_arcs(), 4);
    }

    #[test]
    fn test_neighbors_restartable() {
        let g = ListGraph::from_edges(3, &[(0,1),(0,2)]);
        let first:Vec<_> = g.neighbors(0).collect();
        let second:Vec<_> = g.neighbors(0).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display() {
        let g = ListGraph::from_edges(3, &[(0,1),(1,2)]);
        assert_eq!(g.to_string(), "0:1;1:0,2;2:1;;");
    }
}
