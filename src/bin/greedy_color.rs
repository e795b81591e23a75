use std::time::Instant;

use anyhow::Result;
use clap::{App, load_yaml};
use log::info;
use serde_json::json;

use backjump_color::adjacency_format::parse_graph;
use backjump_color::adjacency_list::ListGraph;
use backjump_color::adjacency_matrix::MatrixGraph;
use backjump_color::color::ColoringGraph;
use backjump_color::search::greedy::greedy_color;
use backjump_color::util::{Params, Representation, read_params, export_results};


fn solve<G:ColoringGraph + std::fmt::Display>(params:&Params) -> Result<()> {
    let graph:G = parse_graph(&params.graph)?;
    println!("Graph G: {}", graph);
    let t_start = Instant::now();
    let coloring = greedy_color(&graph);
    let duration = t_start.elapsed().as_secs_f32();
    println!("Greedy:\n\t{}", coloring);
    info!("greedy took {:.3} seconds", duration);
    let stats = json!({
        "inst_name": params.inst_name,
        "nb_colors": coloring.nb_colors(),
        "time_searched": duration,
    });
    export_results(
        &graph,
        Some(&coloring),
        &stats,
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
    )
}

/** colors a graph using the first-fit greedy */
pub fn main() -> Result<()> {
    env_logger::init();
    // parse arguments
    let yaml = load_yaml!("greedy_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    match params.representation {
        Representation::List => solve::<ListGraph>(&params),
        Representation::Matrix => solve::<MatrixGraph>(&params),
    }
}
