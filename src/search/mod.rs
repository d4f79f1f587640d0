//! k-clique decision procedures (exact, greedy, Monte Carlo).

/// exhaustive subset enumeration (ground truth)
pub mod exhaustive;

/// degree-ordered greedy construction
pub mod greedy;

/// repeated greedy construction over random vertex orders
pub mod mc_incremental;

/// repeated random k-subset testing
pub mod mc_sampling;

/// instrumented Monte Carlo searches tallying elementary operations
pub mod operation_counter;
