use std::fmt;

use bit_set::BitSet;

use crate::adjacency_format::to_adjacency_string;
use crate::color::{ColoringGraph, VertexId};

/** position of the pair (v,w) in the lower-triangular matrix (diagonal included) */
#[inline]
pub fn pos(v:VertexId, w:VertexId) -> usize {
    if v > w {
        v*(v+1)/2 + w
    } else {
        w*(w+1)/2 + v
    }
}

/** models a graph as a lower-triangular bit matrix.

```text
Graph            Matrix
 0 - 3           0
 4 - 2           0 0
 4 - 4           0 x 0
 2 - 1           x 0 0 0
                 0 x 0 0 x
```
(v,w) and (w,v) share a bit, so the adjacency is always symmetric.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    /// nb vertices
    n: usize,
    /// adj[pos(v,w)]: true iff v and w are adjacent
    adj: BitSet,
}

impl MatrixGraph {
    /// removes the edge (v,w)
    pub fn remove_edge(&mut self, v:VertexId, w:VertexId) {
        self.adj.remove(pos(v, w));
    }
}

/** ascending iterator over the neighbors of a vertex in a [`MatrixGraph`] */
#[derive(Debug, Clone)]
pub struct MatrixNeighbors<'a> {
    graph: &'a MatrixGraph,
    v: VertexId,
    /// next candidate neighbor
    w: VertexId,
}

impl<'a> Iterator for MatrixNeighbors<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        while self.w < self.graph.n {
            let w = self.w;
            self.w += 1;
            if self.graph.has_edge(self.v, w) {
                return Some(w);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.n - self.w))
    }
}

impl ColoringGraph for MatrixGraph {
    type Neighbors<'a> = MatrixNeighbors<'a>;

    fn with_vertices(n:usize) -> Self {
        Self { n, adj: BitSet::with_capacity(n*(n+1)/2) }
    }

    fn nb_vertices(&self) -> usize { self.n }

    fn add_edge(&mut self, v:VertexId, w:VertexId) {
        self.adj.insert(pos(v, w));
    }

    fn has_edge(&self, v:VertexId, w:VertexId) -> bool {
        self.adj.contains(pos(v, w))
    }

    fn neighbors(&self, v:VertexId) -> Self::Neighbors<'_> {
        MatrixNeighbors { graph: self, v, w: 0 }
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_adjacency_string(self))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos() {
        assert_eq!(pos(0, 0), 0);
        assert_eq!(pos(1, 0), 1);
        assert_eq!(pos(1, 1), 2);
        assert_eq!(pos(3, 0), 6);
        assert_eq!(pos(0, 3), 6);
        assert_eq!(pos(4, 4), 14);
    }

    #[test]
    fn test_symmetric() {
        let mut g = MatrixGraph::with_vertices(5);
        g.add_edge(0, 3);
        g.add_edge(4, 2);
        g.add_edge(2, 1);
        assert!(g.has_edge(3, 0) && g.has_edge(0, 3));
        assert!(g.has_edge(2, 4));
        assert!(!g.has_edge(0, 1));
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![1,4]);
        assert_eq!(g.degree(0), 1);
    }

    #[test]
    fn test_neighbors_includes_vertex_zero() {
        let mut g = MatrixGraph::with_vertices(3);
        g.add_edge(2, 0);
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![0]);
        assert_eq!(g.neighbors(1).count(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = MatrixGraph::with_vertices(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.remove_edge(1, 0);
        assert!(!g.has_edge(0, 1));
        assert_eq!(g.to_string(), "0:;1:2;2:1;;");
    }
}
