/*
Implements:
 - the adjacency-list text format: `<v>:<w1>,<w2>,...;` for each vertex, terminated by `;;`
   (example: `0:1,2;1:0,3;2:0,3,4;3:1,2,5;4:2,5;5:3,4;;`)
 - the problem format `<budget> <graph>` used by instance files
*/
use nom::IResult;
use nom::character::complete::{char, digit1, multispace1};
use nom::combinator::{all_consuming, map_res, rest};
use nom::multi::{many0, separated_list0, separated_list1};
use nom::sequence::{separated_pair, terminated};
use thiserror::Error;

use crate::color::{ColoringGraph, VertexId};

/** errors raised while reading a graph or a problem description */
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// nothing to parse
    #[error("empty graph description")]
    Empty,
    /// the description does not follow the format
    #[error("malformed graph description at byte {offset}")]
    Syntax {
        /// position of the first character that could not be read
        offset: usize,
    },
    /// an edge refers to a vertex that has no entry
    #[error("vertex {vertex} out of range (the graph has {nb_vertices} vertices)")]
    VertexOutOfRange {
        /// offending vertex id
        vertex: VertexId,
        /// number of entries of the description
        nb_vertices: usize,
    },
    /// the color budget could not be read
    #[error("invalid color budget '{0}'")]
    Budget(String),
}

/// reads a vertex id
fn vertex_id(s:&str) -> IResult<&str, VertexId> {
    map_res(digit1, |d:&str| d.parse::<VertexId>())(s)
}

/// reads `<v>:<w1>,<w2>,...` (the neighbor list may be empty)
fn entry(s:&str) -> IResult<&str, (VertexId, Vec<VertexId>)> {
    separated_pair(vertex_id, char(':'), separated_list0(char(','), vertex_id))(s)
}

/// reads the `;`-separated entries and the trailing `;`
fn entries(s:&str) -> IResult<&str, Vec<(VertexId, Vec<VertexId>)>> {
    terminated(separated_list1(char(';'), entry), many0(char(';')))(s)
}

/// reads the budget and the graph description that follows
fn problem(s:&str) -> IResult<&str, (&str, &str)> {
    separated_pair(digit1, multispace1, rest)(s)
}

/** parses a graph in the adjacency-list format.
The number of vertices is the number of entries. Each `v:w` inserts the arc (v,w). */
pub fn parse_graph<G:ColoringGraph>(s:&str) -> Result<G, ParseError> {
    let s = s.trim();
    if s.is_empty() { return Err(ParseError::Empty); }
    let parsed = all_consuming(entries)(s).map_err(|e| {
        let remaining = match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input.len(),
            nom::Err::Incomplete(_) => 0,
        };
        ParseError::Syntax { offset: s.len() - remaining }
    })?;
    let adj_list = parsed.1;
    let n = adj_list.len();
    let mut res = G::with_vertices(n);
    for (v,neighbors) in adj_list {
        if v >= n {
            return Err(ParseError::VertexOutOfRange { vertex: v, nb_vertices: n });
        }
        for w in neighbors {
            if w >= n {
                return Err(ParseError::VertexOutOfRange { vertex: w, nb_vertices: n });
            }
            res.add_edge(v, w);
        }
    }
    Ok(res)
}

/** splits a problem `<budget> <graph>` into the budget and the graph description */
pub fn split_problem(s:&str) -> Result<(usize, &str), ParseError> {
    let s = s.trim();
    if s.is_empty() { return Err(ParseError::Empty); }
    let (_, (budget, graph)) = problem(s).map_err(|_| {
        ParseError::Budget(s.split_whitespace().next().unwrap_or_default().to_string())
    })?;
    let budget = budget.parse::<usize>().map_err(|_| ParseError::Budget(budget.to_string()))?;
    Ok((budget, graph))
}

/** parses a problem `<budget> <graph>`, returns (budget, graph) */
pub fn parse_problem<G:ColoringGraph>(s:&str) -> Result<(usize, G), ParseError> {
    let (budget, graph) = split_problem(s)?;
    Ok((budget, parse_graph(graph)?))
}

/** writes a graph in the adjacency-list format */
pub fn to_adjacency_string<G:ColoringGraph>(graph:&G) -> String {
    let mut res = String::default();
    for v in graph.vertices() {
        res += format!("{}:", v).as_str();
        let neighbors:Vec<String> = graph.neighbors(v).map(|w| w.to_string()).collect();
        res += neighbors.join(",").as_str();
        res += ";";
    }
    res += ";";
    res
}
