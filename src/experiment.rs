use rand::Rng;
use serde::Serialize;

use crate::error::Error;
use crate::generator::generate_graphs;
use crate::graph::{CompactGraph, GraphInstance};
use crate::ingest::{GraphFormat, load_graph};
use crate::params::Params;
use crate::search::exhaustive::exhaustive_clique_search;
use crate::search::greedy::greedy_clique_search;
use crate::search::mc_incremental::monte_carlo_incremental;
use crate::search::mc_sampling::monte_carlo_sampling;
use crate::search::operation_counter::{
    OperationCounter, counted_monte_carlo_incremental, counted_monte_carlo_sampling
};

/// heuristics compared against the exhaustive search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Heuristic {
    /// degree-ordered greedy
    Greedy,
    /// Monte Carlo incremental construction
    Incremental,
    /// Monte Carlo subset sampling
    Sampling,
}

impl Heuristic {
    /// all heuristics, in reporting order
    pub const ALL:[Heuristic; 3] = [Heuristic::Greedy, Heuristic::Incremental, Heuristic::Sampling];

    /// name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Greedy => "Greedy",
            Heuristic::Incremental => "Monte Carlo incremental",
            Heuristic::Sampling => "Monte Carlo sampling",
        }
    }
}

/// target clique size derived from a density: ⌈n·d⌉
pub fn clique_size(n:usize, density:f64) -> usize {
    (n as f64 * density).ceil() as usize
}

/** outcome of one (graph, k) combination */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialRecord {
    /// number of vertices of the graph
    pub nb_vertices: usize,
    /// density the graph was generated with (None for graphs read from a file)
    pub density: Option<f64>,
    /// number of edges of the graph
    pub nb_edges: usize,
    /// target clique size
    pub k: usize,
    /// exhaustive verdict (None if the exhaustive search was skipped)
    pub exact: Option<bool>,
    /// greedy verdict
    pub greedy: bool,
    /// Monte Carlo incremental verdict
    pub incremental: bool,
    /// Monte Carlo sampling verdict
    pub sampling: bool,
}

impl TrialRecord {
    /// verdict of a heuristic
    pub fn verdict(&self, h:Heuristic) -> bool {
        match h {
            Heuristic::Greedy => self.greedy,
            Heuristic::Incremental => self.incremental,
            Heuristic::Sampling => self.sampling,
        }
    }

    /// prints the verdicts on one line
    pub fn display(&self) {
        let density = match self.density {
            None => String::default(),
            Some(d) => format!("Density: {}% - ", d*100.),
        };
        let exact = match self.exact {
            None => String::default(),
            Some(e) => format!(" - Exhaustive: {}", e),
        };
        println!(
            "  {}k: {}{} - Greedy: {} - Monte Carlo incremental: {} - Monte Carlo sampling: {}",
            density, self.k, exact, self.greedy, self.incremental, self.sampling
        );
    }
}

/** disagreements of one heuristic with the exhaustive search */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeuristicStats {
    /// trials where the verdict differs from the exhaustive one
    pub mismatches: usize,
    /// mismatches where the heuristic claimed a clique that does not exist
    pub false_positives: usize,
}

/** running totals over the trials of a sweep */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// number of trials with an exhaustive verdict
    pub total: usize,
    /// greedy disagreements
    pub greedy: HeuristicStats,
    /// Monte Carlo incremental disagreements
    pub incremental: HeuristicStats,
    /// Monte Carlo sampling disagreements
    pub sampling: HeuristicStats,
}

impl AggregateStats {
    /// statistics of a heuristic
    pub fn get(&self, h:Heuristic) -> &HeuristicStats {
        match h {
            Heuristic::Greedy => &self.greedy,
            Heuristic::Incremental => &self.incremental,
            Heuristic::Sampling => &self.sampling,
        }
    }

    fn get_mut(&mut self, h:Heuristic) -> &mut HeuristicStats {
        match h {
            Heuristic::Greedy => &mut self.greedy,
            Heuristic::Incremental => &mut self.incremental,
            Heuristic::Sampling => &mut self.sampling,
        }
    }

    /// accounts for a trial. Trials without exhaustive verdict are ignored.
    pub fn record(&mut self, trial:&TrialRecord) {
        let exact = match trial.exact {
            None => return,
            Some(e) => e,
        };
        self.total += 1;
        for h in Heuristic::ALL.iter() {
            let verdict = trial.verdict(*h);
            if verdict != exact {
                let s = self.get_mut(*h);
                s.mismatches += 1;
                if verdict { s.false_positives += 1; }
            }
        }
    }

    /** 100 - mismatches/total·100, in [0,100]. 100 if no trial was recorded. */
    pub fn precision(&self, h:Heuristic) -> f64 {
        if self.total == 0 { return 100.; }
        100. - self.get(h).mismatches as f64 / self.total as f64 * 100.
    }

    /// prints totals, false negatives and precision of each heuristic
    pub fn display_statistics(&self) {
        println!(
            "  Total graphs generated: {} - Greedy false negatives: {} - Monte Carlo incremental false negatives: {} - Monte Carlo sampling false negatives: {}",
            self.total,
            self.greedy.mismatches - self.greedy.false_positives,
            self.incremental.mismatches - self.incremental.false_positives,
            self.sampling.mismatches - self.sampling.false_positives,
        );
        for h in Heuristic::ALL.iter() {
            println!("  {} precision: {}%", h.name(), self.precision(*h));
            if self.get(*h).false_positives > 0 {
                println!("  WARNING: {} reported {} false positives", h.name(), self.get(*h).false_positives);
            }
        }
    }
}

/** trials and totals of a synthetic sweep */
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// every trial, in execution order
    pub trials: Vec<TrialRecord>,
    /// totals over the trials
    pub stats: AggregateStats,
}

/** operation counts of the Monte Carlo searches, indexed by vertex count */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationSeries {
    /// vertex counts of the generated graphs
    pub vertex_counts: Vec<usize>,
    /// sampling operations for each vertex count
    pub sampling: Vec<u64>,
    /// incremental operations for each vertex count
    pub incremental: Vec<u64>,
}

impl OperationSeries {
    /// prints both sequences
    pub fn display(&self) {
        println!("{:?}", self.sampling);
        println!("{:?}", self.incremental);
    }
}

/** runs the four searches on a graph for a target size k.
The exhaustive search is skipped if `run_exact` is false.

# Errors
 - `InvalidArgument` if k exceeds the number of vertices
*/
pub fn run_trial<R:Rng + ?Sized>(
    inst:&dyn GraphInstance,
    density:Option<f64>,
    k:usize,
    run_exact:bool,
    iterations:usize,
    rng:&mut R
) -> Result<TrialRecord, Error> {
    let exact = if run_exact { Some(exhaustive_clique_search(inst, k)) } else { None };
    let greedy = greedy_clique_search(inst, k);
    let incremental = monte_carlo_incremental(inst, k, iterations, rng);
    let sampling = monte_carlo_sampling(inst, k, iterations, rng)?;
    Ok(TrialRecord {
        nb_vertices: inst.nb_vertices(),
        density,
        nb_edges: inst.nb_edges(),
        k, exact, greedy, incremental, sampling,
    })
}

/** file-graph mode: for each density d of the parameters, decides whether the
graph contains a clique of size ⌈n·d⌉.

# Errors
 - densities outside [0,1]
*/
pub fn decide_file_graph<R:Rng + ?Sized>(inst:&dyn GraphInstance, params:&Params, rng:&mut R) -> Result<Vec<TrialRecord>, Error> {
    crate::params::check_densities(&params.densities)?;
    let mut res = Vec::with_capacity(params.densities.len());
    for d in &params.densities {
        let k = clique_size(inst.nb_vertices(), *d);
        let trial = run_trial(inst, None, k, params.run_exact, params.iterations, rng)?;
        if params.verbose { trial.display(); }
        res.push(trial);
    }
    Ok(res)
}

/** reads a graph from a file, then runs [`decide_file_graph`] on it.
Nothing is searched (and no randomness is drawn) if the file cannot be loaded.

# Errors
 - the file cannot be read or parsed, densities outside [0,1]
*/
pub fn load_and_decide<R:Rng + ?Sized>(
    filename:&str,
    format:&GraphFormat,
    params:&Params,
    rng:&mut R
) -> Result<(CompactGraph, Vec<TrialRecord>), Error> {
    let inst = load_graph(filename, format)?;
    if params.verbose { inst.display_statistics(); }
    let trials = decide_file_graph(&inst, params, rng)?;
    Ok((inst, trials))
}

/** synthetic sweep: for each vertex count in [min_vertices, vertex_limit],
generates one graph per density, and runs the four searches for every k
derived from the density list. Each heuristic verdict is compared
with the exhaustive one.

# Errors
 - invalid parameters, point placement failure
*/
pub fn run_sweep<R:Rng + ?Sized>(params:&Params, rng:&mut R) -> Result<SweepReport, Error> {
    params.validate()?;
    let mut trials = Vec::new();
    let mut stats = AggregateStats::default();
    for n in params.min_vertices..=params.vertex_limit {
        let family = generate_graphs(n, &params.densities, &params.points, rng)?;
        if params.verbose { println!("\nGraphs with {} vertices:", n); }
        let k_values:Vec<usize> = params.densities.iter().map(|d| clique_size(n, *d)).collect();
        for (density, graph) in &family.graphs {
            if params.verbose { println!("  Density: {}% - Edges: {}", density*100., graph.nb_edges()); }
            for k in &k_values {
                let trial = run_trial(graph, Some(*density), *k, true, params.iterations, rng)?;
                stats.record(&trial);
                if params.verbose { trial.display(); }
                trials.push(trial);
            }
        }
    }
    Ok(SweepReport { trials, stats })
}

/** operation-count sweep: for each vertex count in [min_vertices, op_vertex_limit],
generates a graph of density `op_density` and counts the operations of the
instrumented sampling then incremental searches for k = ⌈n·op_density⌉.

# Errors
 - invalid parameters, point placement failure
*/
pub fn run_operation_count<R:Rng + ?Sized>(params:&Params, rng:&mut R) -> Result<OperationSeries, Error> {
    params.validate()?;
    let mut res = OperationSeries::default();
    for n in params.min_vertices..=params.op_vertex_limit {
        let family = generate_graphs(n, &[params.op_density], &params.points, rng)?;
        if params.verbose { println!("\nGraph with {} vertices:", n); }
        for (density, graph) in &family.graphs {
            if params.verbose { println!("  Density: {}% - Edges: {}", density*100., graph.nb_edges()); }
            let k = clique_size(n, *density);
            let mut sampling_counter = OperationCounter::default();
            let mut incremental_counter = OperationCounter::default();
            let has_sampling = counted_monte_carlo_sampling(graph, k, params.iterations, rng, &mut sampling_counter)?;
            let has_incremental = counted_monte_carlo_incremental(graph, k, params.iterations, rng, &mut incremental_counter);
            if params.verbose { println!("  k: {} - Sampling: {} - Incremental: {}", k, has_sampling, has_incremental); }
            res.vertex_counts.push(n);
            res.sampling.push(sampling_counter.total());
            res.incremental.push(incremental_counter.total());
        }
    }
    Ok(res)
}
