use std::time::Instant;

use clap::{App, load_yaml};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use dogs_kclique::{Error, Params};
use dogs_kclique::experiment::run_sweep;
use dogs_kclique::util::{read_params, export_results};


fn run() -> Result<(), Error> {
    // parse arguments
    let yaml = load_yaml!("sweep.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args, Params::default())?;

    // run the sweep
    let t_start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let report = run_sweep(&params, &mut rng)?;
    report.stats.display_statistics();
    let duration = t_start.elapsed().as_secs_f32();
    println!("Total time: {:.1} secs", duration);
    let stats = json!({
        "params": params,
        "stats": report.stats,
        "trials": report.trials,
        "time_searched": duration,
    });

    // export results
    export_results(&stats, main_args.value_of("perf"))
}


/** measures the precision of the greedy and Monte Carlo searches against the exhaustive search */
pub fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
