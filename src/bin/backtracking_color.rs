use std::time::Instant;

use anyhow::Result;
use clap::{App, load_yaml};
use log::info;
use serde_json::json;

use backjump_color::adjacency_format::parse_graph;
use backjump_color::adjacency_list::ListGraph;
use backjump_color::adjacency_matrix::MatrixGraph;
use backjump_color::color::ColoringGraph;
use backjump_color::search::backtracking::BacktrackingColoring;
use backjump_color::util::{Params, Representation, read_params, export_results};


/** colors the graph within the budget, or reports that there is no solution */
fn solve<G:ColoringGraph>(params:&Params) -> Result<()> {
    let graph:G = parse_graph(&params.graph)?;
    info!("{}: {} vertices, budget {}", params.inst_name, graph.nb_vertices(), params.colors);
    let t_start = Instant::now();
    let (outcome, stats) = BacktrackingColoring::compute_with_stats(params.colors, &graph);
    let duration = t_start.elapsed().as_secs_f32();
    match outcome.coloring() {
        Some(coloring) => println!("{}", coloring),
        None => println!("no solution with {} colors.", params.colors),
    }
    info!("backtracking took {:.3} seconds", duration);
    let stats = json!({
        "inst_name": params.inst_name,
        "budget": params.colors,
        "feasible": !outcome.is_infeasible(),
        "nb_colors": outcome.coloring().map(|c| c.nb_colors()),
        "time_searched": duration,
        "search": stats,
    });
    export_results(
        &graph,
        outcome.coloring(),
        &stats,
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
    )
}

/** solves a coloring instance using the backtracking search */
pub fn main() -> Result<()> {
    env_logger::init();
    // parse arguments
    let yaml = load_yaml!("backtracking_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    match params.representation {
        Representation::List => solve::<ListGraph>(&params),
        Representation::Matrix => solve::<MatrixGraph>(&params),
    }
}
