use bit_set::BitSet;
use log::debug;

use crate::color::{ColoringGraph, Coloring};

/** implements a first-fit greedy algorithm that colors vertices one color at a time.
    1. open a new color
    2. scan the uncolored vertices by increasing id, give the color to every vertex
       that is not excluded from it
    3. exclude the uncolored neighbors of each vertex colored this round
    4. start over with a new color until every vertex is colored

The coloring is valid for symmetric adjacencies but not necessarily minimal.
*/
pub fn greedy_color<G:ColoringGraph>(graph:&G) -> Coloring {
    let n = graph.nb_vertices();
    let mut colors:Vec<usize> = vec![0 ; n]; // 0: not colored yet
    let mut nb_colored:usize = 0;
    let mut current_color:usize = 0;
    while nb_colored < n {
        current_color += 1;
        let mut excluded:BitSet = BitSet::with_capacity(n); // excluded from current_color
        for v in graph.vertices() {
            if colors[v] == 0 && !excluded.contains(v) {
                colors[v] = current_color;
                nb_colored += 1;
                for w in graph.neighbors(v).filter(|w| colors[*w] == 0) {
                    excluded.insert(w);
                }
            }
        }
    }
    debug!("greedy: {} vertices, {} colors", n, current_color);
    Coloring::new(colors)
}
