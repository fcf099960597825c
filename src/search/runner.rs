//! Steepest-ascent hill climbing over role-preserving swaps.
//!
//! # Algorithm
//!
//! 1. Reject the seed unless it is constraint-valid
//! 2. At each iteration:
//!    a. Enumerate role-preserving swaps of the current state
//!    b. Build, validate and score each neighbor; drop invalid ones
//!    c. Take the first best neighbor if it gains more than `epsilon`
//!    d. Otherwise step sideways onto an unvisited equal-score layout,
//!       or stop at a strict local optimum
//! 3. Terminate on iteration limit, stagnation, time budget or local optimum
//!
//! Every state the walk visits is valid, and the best one is returned.
//! The search is fully deterministic.

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use tracing::{debug, info, trace};

use super::config::SearchConfig;
use super::neighbors::{candidate_swaps, SwapMove};
use crate::constraints::{validate, RaidConfig};
use crate::error::OptimizeError;
use crate::scoring::Objective;
use crate::state::{AssignmentState, LayoutKey};

/// Why the optimizer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    MaxIterations,
    /// `max_no_improve` consecutive iterations without a gain.
    Stagnation,
    TimeBudget,
    /// No neighbor improves and every equal-score neighbor was already visited.
    LocalOptimum,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::MaxIterations => "max iterations",
            StopReason::Stagnation => "stagnation",
            StopReason::TimeBudget => "time budget",
            StopReason::LocalOptimum => "local optimum",
        };
        f.write_str(s)
    }
}

/// Result of an optimizer run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best state found, carrying its score and an empty violation list.
    pub final_state: AssignmentState,
    /// Score of `final_state`.
    pub final_score: f64,
    /// Score of the seed.
    pub initial_score: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Whether `final_state` beats the seed.
    pub improved: bool,
    /// Iteration at which the best state was reached (0 for the seed).
    pub best_iteration: usize,
    /// Best score after each iteration.
    pub score_history: Vec<f64>,
    pub stop_reason: StopReason,
    /// Neighbors built and validated over the whole run.
    pub neighbors_evaluated: usize,
}

struct Candidate {
    mv: SwapMove,
    state: AssignmentState,
    score: f64,
}

/// Improves a valid seed by local search.
///
/// The returned state is valid and never scores below the seed.
///
/// # Errors
///
/// [`OptimizeError::InvalidSeed`] if `seed` breaks any hard constraint of
/// `config.constraints`, and [`OptimizeError::Config`] for an invalid
/// configuration.
///
/// # Examples
///
/// ```
/// use raid_assign::constraints::RaidConfig;
/// use raid_assign::domain::{Archetype, Player, Role};
/// use raid_assign::scoring::ScoreWeights;
/// use raid_assign::search::{optimize, SearchConfig};
/// use raid_assign::seed::build_seed;
///
/// let players = vec![
///     Player::new(1, "T1").with_role(Role::Tank).with_archetype(Archetype::Warrior),
///     Player::new(2, "T2").with_role(Role::Tank).with_archetype(Archetype::Warrior),
///     Player::new(3, "H1").with_role(Role::Healer).with_archetype(Archetype::Priest),
///     Player::new(4, "H2").with_role(Role::Healer).with_archetype(Archetype::Shaman),
///     Player::new(5, "D1").with_role(Role::Dps).with_archetype(Archetype::Rogue),
///     Player::new(6, "D2").with_role(Role::Dps).with_archetype(Archetype::Warlock),
/// ];
/// let raid = RaidConfig::default()
///     .with_group_count(2)
///     .with_group_capacity(3)
///     .with_min_tanks(2)
///     .with_min_healers(2);
/// let seed = build_seed(&players, &raid).unwrap();
/// let config = SearchConfig::default().with_constraints(raid);
///
/// let result = optimize(&seed, &ScoreWeights::default(), &config).unwrap();
/// assert!(result.final_score >= result.initial_score);
/// ```
pub fn optimize<O>(
    seed: &AssignmentState,
    objective: &O,
    config: &SearchConfig,
) -> Result<OptimizationResult, OptimizeError>
where
    O: Objective + ?Sized,
{
    config.validate()?;

    let check = validate(seed, &config.constraints);
    if !check.valid {
        debug!(violations = check.violations.len(), "rejecting invalid seed");
        return Err(OptimizeError::InvalidSeed {
            violations: check.violations,
        });
    }

    let start = Instant::now();
    let initial_score = objective.score(seed);

    let mut current = seed.clone();
    let mut current_score = initial_score;
    let mut best = current.clone();
    let mut best_score = initial_score;
    let mut best_iteration = 0;

    let mut visited: HashSet<LayoutKey> = HashSet::new();
    visited.insert(current.layout_key());

    let mut score_history = Vec::with_capacity(config.max_iterations);
    let mut no_improve = 0;
    let mut neighbors_evaluated = 0;
    let mut stop_reason = StopReason::MaxIterations;

    info!(
        initial_score,
        max_iterations = config.max_iterations,
        "local search started"
    );

    for iteration in 1..=config.max_iterations {
        if config
            .time_budget
            .is_some_and(|budget| start.elapsed() >= budget)
        {
            stop_reason = StopReason::TimeBudget;
            break;
        }

        let moves = candidate_swaps(&current, config.include_bench_swaps);
        let candidates = evaluate_moves(
            &current,
            &moves,
            objective,
            &config.constraints,
            config.parallel,
        );
        neighbors_evaluated += moves.len();
        trace!(
            iteration,
            generated = moves.len(),
            pruned = moves.len() - candidates.len(),
            "neighborhood evaluated"
        );

        let Some(top) = first_best(&candidates) else {
            score_history.push(best_score);
            stop_reason = StopReason::LocalOptimum;
            break;
        };

        if top.score > current_score + config.epsilon {
            debug!(
                iteration,
                mv = %top.mv,
                gain = top.score - current_score,
                score = top.score,
                "improving move"
            );
            current = top.state.clone();
            current_score = top.score;
            visited.insert(current.layout_key());
            no_improve = 0;
            if current_score > best_score {
                best = current.clone();
                best_score = current_score;
                best_iteration = iteration;
            }
        } else {
            no_improve += 1;
            let sideways = candidates.iter().find(|c| {
                (c.score - current_score).abs() <= config.epsilon
                    && !visited.contains(&c.state.layout_key())
            });
            match sideways {
                Some(c) => {
                    trace!(iteration, mv = %c.mv, "plateau move");
                    current = c.state.clone();
                    current_score = c.score;
                    visited.insert(current.layout_key());
                }
                None => {
                    score_history.push(best_score);
                    stop_reason = StopReason::LocalOptimum;
                    break;
                }
            }
        }

        score_history.push(best_score);

        if no_improve >= config.max_no_improve {
            stop_reason = StopReason::Stagnation;
            break;
        }
    }

    let iterations = score_history.len();
    info!(
        iterations,
        initial_score,
        final_score = best_score,
        best_iteration,
        neighbors_evaluated,
        stop_reason = %stop_reason,
        "local search finished"
    );

    Ok(OptimizationResult {
        final_state: best.with_score(best_score).with_violations(Vec::new()),
        final_score: best_score,
        initial_score,
        iterations,
        improved: best_iteration > 0,
        best_iteration,
        score_history,
        stop_reason,
        neighbors_evaluated,
    })
}

/// Builds, validates and scores every move, keeping enumeration order.
fn evaluate_moves<O>(
    state: &AssignmentState,
    moves: &[SwapMove],
    objective: &O,
    constraints: &RaidConfig,
    parallel: bool,
) -> Vec<Candidate>
where
    O: Objective + ?Sized,
{
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return moves
            .par_iter()
            .filter_map(|&mv| evaluate_move(state, mv, objective, constraints))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    moves
        .iter()
        .filter_map(|&mv| evaluate_move(state, mv, objective, constraints))
        .collect()
}

fn evaluate_move<O>(
    state: &AssignmentState,
    mv: SwapMove,
    objective: &O,
    constraints: &RaidConfig,
) -> Option<Candidate>
where
    O: Objective + ?Sized,
{
    let next = state.swap(mv.a, mv.b).ok()?;
    if !validate(&next, constraints).valid {
        return None;
    }
    let score = objective.score(&next);
    Some(Candidate {
        mv,
        state: next,
        score,
    })
}

/// First maximum in enumeration order. NaN scores never win.
fn first_best(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for c in candidates {
        if c.score.is_nan() {
            continue;
        }
        if best.map_or(true, |b| c.score > b.score) {
            best = Some(c);
        }
    }
    best
}
