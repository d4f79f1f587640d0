use std::time::Instant;

use clap::{App, load_yaml};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use dogs_kclique::{Error, Params};
use dogs_kclique::experiment::run_operation_count;
use dogs_kclique::util::{read_params, export_results};


fn run() -> Result<(), Error> {
    // parse arguments
    let yaml = load_yaml!("operation_count.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args, Params::default())?;

    // count operations
    let t_start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let series = run_operation_count(&params, &mut rng)?;
    series.display();
    let duration = t_start.elapsed().as_secs_f32();
    println!("Total time: {:.1} secs", duration);
    let stats = json!({
        "params": params,
        "operations": series,
        "time_searched": duration,
    });

    // export results
    export_results(&stats, main_args.value_of("perf"))
}


/** counts the operations of the Monte Carlo searches for growing graphs of density 0.5 */
pub fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
