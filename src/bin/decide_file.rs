use std::time::Instant;

use clap::{App, load_yaml};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use dogs_kclique::{Error, GraphInstance, Params};
use dogs_kclique::experiment::load_and_decide;
use dogs_kclique::ingest::GraphFormat;
use dogs_kclique::util::{read_params, export_results};


fn run() -> Result<(), Error> {
    // parse arguments
    let yaml = load_yaml!("decide_file.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args, Params::file_graph())?;
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let mut format = GraphFormat::from_name(main_args.value_of("type").unwrap_or("auto"), inst_filename)?;
    if let GraphFormat::Csv { source, target } = &mut format {
        if let Some(s) = main_args.value_of("source") { *source = s.to_string(); }
        if let Some(t) = main_args.value_of("target") { *target = t.to_string(); }
    }
    // read instance file and solve it
    println!("reading instance: {}...", inst_filename);
    let t_start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let (instance, trials) = load_and_decide(inst_filename, &format, &params, &mut rng)?;
    let duration = t_start.elapsed().as_secs_f32();
    println!("Total time: {:.1} secs", duration);
    let stats = json!({
        "inst_name": inst_filename,
        "nb_vertices": instance.nb_vertices(),
        "nb_edges": instance.nb_edges(),
        "params": params,
        "trials": trials,
        "time_searched": duration,
    });

    // export results
    export_results(&stats, main_args.value_of("perf"))
}


/** reads a graph and decides, for each density d, whether it contains a clique of size ⌈n·d⌉ */
pub fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
