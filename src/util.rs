use std::fs;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use log::info;
use serde_json::Value;

use crate::adjacency_format::split_problem;
use crate::color::{ColoringGraph, Coloring, checker, CheckerResult};

/// graph used when the command line gives none
pub const DEFAULT_GRAPH:&str = "0:1,2;1:0,3;2:0,3,4;3:1,2,5;4:2,5;5:3,4;;";

/// color budget used when the command line gives none
pub const DEFAULT_COLORS:usize = 3;

/** graph representation selected on the command line */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// [`crate::adjacency_list::ListGraph`]
    List,
    /// [`crate::adjacency_matrix::MatrixGraph`]
    Matrix,
}

impl FromStr for Representation {
    type Err = anyhow::Error;

    fn from_str(s:&str) -> Result<Self> {
        match s {
            "list" => Ok(Representation::List),
            "matrix" => Ok(Representation::Matrix),
            _ => Err(anyhow!("representation unknown {} (valid: 'list', 'matrix')", s)),
        }
    }
}

/** parameters read from the command line */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// instance file name ("inline" if the graph is given on the command line)
    pub inst_name: String,
    /// color budget
    pub colors: usize,
    /// graph in the adjacency-list format
    pub graph: String,
    /// graph representation
    pub representation: Representation,
    /// where to write the solution
    pub sol_file: Option<String>,
    /// where to write the statistics
    pub perf_file: Option<String>,
}

/** reads command line input.
The graph comes from `graph` (inline), then `instance` (`<budget> <graph>` file),
then [`DEFAULT_GRAPH`]. `colors` overrides the budget of the instance file. */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let (inst_name, file_colors, graph) = match (main_args.value_of("graph"), main_args.value_of("instance")) {
        (Some(g), _) => ("inline".to_string(), None, g.to_string()),
        (None, Some(filename)) => {
            let content = fs::read_to_string(filename)
                .with_context(|| format!("unable to read instance {}", filename))?;
            let (budget, graph) = split_problem(&content)
                .with_context(|| format!("unable to parse instance {}", filename))?;
            (filename.to_string(), Some(budget), graph.to_string())
        },
        (None, None) => ("default".to_string(), None, DEFAULT_GRAPH.to_string()),
    };
    let colors = match main_args.value_of("colors") {
        Some(c) => c.parse::<usize>().with_context(|| format!("unable to parse the budget {}", c))?,
        None => file_colors.unwrap_or(DEFAULT_COLORS),
    };
    let representation:Representation = main_args.value_of("representation").unwrap_or("list").parse()?;
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    Ok(Params { inst_name, colors, graph, representation, sol_file, perf_file })
}

/** writes a string encoding the solution (one color class per line) */
pub fn solution_to_string(coloring:&Coloring) -> String {
    let mut res = String::default();
    for e in coloring.to_partition() {
        for v in e {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/// exports search results to files (the coloring is checked before being written)
pub fn export_results<G:ColoringGraph>(
    graph:&G,
    coloring:Option<&Coloring>,
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<()> {
    if let Some(filename) = perf_file {
        fs::write(filename, serde_json::to_string(stats)?)
            .with_context(|| format!("couldn't write {}", filename))?;
    }
    if let (Some(filename), Some(coloring)) = (sol_file, coloring) {
        match checker(graph, coloring) {
            CheckerResult::Ok(_) => {},
            res => bail!("invalid solution (reason: {:?})", res),
        }
        fs::write(filename, solution_to_string(coloring))
            .with_context(|| format!("couldn't write {}", filename))?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use clap::{App, Arg};
    use serde_json::json;

    use crate::adjacency_list::ListGraph;

    fn args(cmd:&[&str]) -> ArgMatches<'static> {
        App::new("test")
            .arg(Arg::with_name("colors").short("c").takes_value(true))
            .arg(Arg::with_name("graph").short("g").takes_value(true))
            .arg(Arg::with_name("instance").short("i").takes_value(true))
            .arg(Arg::with_name("representation").short("r").takes_value(true))
            .arg(Arg::with_name("solution").short("s").takes_value(true))
            .arg(Arg::with_name("perf").short("p").takes_value(true))
            .get_matches_from(cmd.iter().copied())
    }

    fn tmp_file(name:&str) -> String {
        std::env::temp_dir()
            .join(format!("backjump-color-{}-{}", std::process::id(), name))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_default_params() {
        let p = read_params(&args(&["test"])).unwrap();
        assert_eq!(p.inst_name, "default");
        assert_eq!(p.colors, DEFAULT_COLORS);
        assert_eq!(p.graph, DEFAULT_GRAPH);
        assert_eq!(p.representation, Representation::List);
        assert_eq!(p.sol_file, None);
    }

    #[test]
    fn test_inline_params() {
        let p = read_params(&args(&["test", "-c", "2", "-g", "0:1;1:0;;", "-r", "matrix"])).unwrap();
        assert_eq!(p.inst_name, "inline");
        assert_eq!(p.colors, 2);
        assert_eq!(p.graph, "0:1;1:0;;");
        assert_eq!(p.representation, Representation::Matrix);
    }

    #[test]
    fn test_driver_default_representations() {
        let yaml = clap::load_yaml!("bin/greedy_color.yml");
        let greedy_args = App::from_yaml(yaml).get_matches_from(vec!["greedy_color"]);
        assert_eq!(read_params(&greedy_args).unwrap().representation, Representation::Matrix);
        let yaml = clap::load_yaml!("bin/backtracking_color.yml");
        let backtracking_args = App::from_yaml(yaml).get_matches_from(vec!["backtracking_color"]);
        let p = read_params(&backtracking_args).unwrap();
        assert_eq!(p.representation, Representation::List);
        assert_eq!(p.colors, DEFAULT_COLORS);
    }

    #[test]
    fn test_bad_params() {
        assert!(read_params(&args(&["test", "-r", "csr"])).is_err());
        assert!(read_params(&args(&["test", "-c", "three"])).is_err());
        assert!(read_params(&args(&["test", "-i", "/nonexistent/24.ag"])).is_err());
    }

    #[test]
    fn test_instance_file() {
        let filename = tmp_file("24.ag");
        fs::write(&filename, "4 0:1;1:0;;\n").unwrap();
        let p = read_params(&args(&["test", "-i", filename.as_str()])).unwrap();
        assert_eq!(p.colors, 4);
        assert_eq!(p.graph, "0:1;1:0;;");
        let p = read_params(&args(&["test", "-i", filename.as_str(), "-c", "1"])).unwrap();
        assert_eq!(p.colors, 1);
        fs::remove_file(&filename).unwrap();
    }

    #[test]
    fn test_export_results() {
        let g = ListGraph::from_edges(3, &[(0,1),(1,2)]);
        let perf = tmp_file("perf.json");
        let sol = tmp_file("sol.txt");
        let coloring = Coloring::new(vec![1,2,1]);
        let stats = json!({"nb_colors": 2});
        export_results(&g, Some(&coloring), &stats, Some(perf.as_str()), Some(sol.as_str())).unwrap();
        assert_eq!(fs::read_to_string(&sol).unwrap(), "0 2 \n1 \n");
        let read:Value = serde_json::from_str(&fs::read_to_string(&perf).unwrap()).unwrap();
        assert_eq!(read, stats);
        let invalid = Coloring::new(vec![1,1,2]);
        assert!(export_results(&g, Some(&invalid), &stats, None, Some(sol.as_str())).is_err());
        fs::remove_file(&perf).unwrap();
        fs::remove_file(&sol).unwrap();
    }
}
