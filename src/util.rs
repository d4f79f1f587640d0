use std::str::FromStr;

use clap::ArgMatches;
use serde_json::Value;

use crate::error::Error;
use crate::params::Params;

/// parses an optional command line value
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>, Error> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_|
            Error::InvalidArgument(format!("unable to parse --{} '{}'", name, s))
        ),
    }
}

/// parses a comma-separated list of densities ("0.25,0.5")
pub fn parse_densities(s:&str) -> Result<Vec<f64>, Error> {
    s.split(',')
        .map(|d| d.trim().parse::<f64>()
            .map_err(|_| Error::InvalidArgument(format!("unable to parse density '{}'", d)))
        )
        .collect()
}

/** reads the command line parameters shared by the experiment programs.
Values not given on the command line keep the ones of `defaults`.

# Errors
 - unparsable values, inconsistent parameters
*/
pub fn read_params(main_args:&ArgMatches, defaults:Params) -> Result<Params, Error> {
    let mut res = defaults;
    if let Some(seed) = parse_arg(main_args, "seed")? { res.seed = seed; }
    if let Some(iterations) = parse_arg(main_args, "iterations")? { res.iterations = iterations; }
    if let Some(limit) = parse_arg(main_args, "limit")? {
        res.vertex_limit = limit;
        res.op_vertex_limit = limit;
    }
    if let Some(d) = main_args.value_of("densities") { res.densities = parse_densities(d)?; }
    if main_args.is_present("quiet") { res.verbose = false; }
    if main_args.is_present("no-exact") { res.run_exact = false; }
    res.validate()?;
    println!("seed: {}", res.seed);
    println!("densities: {:?}", res.densities);
    println!("iterations: {}", res.iterations);
    println!("=======================");
    Ok(res)
}

/** exports statistics (json) to perf_file if given

# Errors
 - the file cannot be written
*/
pub fn export_results(stats:&Value, perf_file:Option<&str>) -> Result<(), Error> {
    match perf_file {
        None => Ok(()),
        Some(filename) => {
            let content = serde_json::to_string(stats)
                .map_err(|e| Error::Export { path: filename.to_string(), reason: e.to_string() })?;
            std::fs::write(filename, content)
                .map_err(|e| Error::Export { path: filename.to_string(), reason: e.to_string() })?;
            println!("printing perfs in: {}", filename);
            Ok(())
        }
    }
}
