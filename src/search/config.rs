//! Local search configuration.

use std::time::Duration;

use crate::constraints::RaidConfig;
use crate::error::ConfigError;

/// Configuration for [`optimize`](super::optimize).
///
/// # Examples
///
/// ```
/// use raid_assign::search::SearchConfig;
/// use std::time::Duration;
///
/// let config = SearchConfig::default()
///     .with_max_iterations(50)
///     .with_time_budget(Duration::from_millis(500))
///     .with_bench_swaps(false);
/// assert_eq!(config.max_iterations, 50);
/// assert!(!config.include_bench_swaps);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Hard limits every accepted state must satisfy.
    pub constraints: RaidConfig,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Consecutive non-improving iterations before stopping.
    pub max_no_improve: usize,
    /// Wall-clock budget, checked once per iteration (None for unbounded).
    pub time_budget: Option<Duration>,
    /// Whether bench players may be swapped into slots.
    pub include_bench_swaps: bool,
    /// Whether to evaluate neighbors with rayon. Needs the `parallel` feature.
    pub parallel: bool,
    /// Minimum gain for a move to count as an improvement.
    pub epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            constraints: RaidConfig::default(),
            max_iterations: 200,
            max_no_improve: 25,
            time_budget: Some(Duration::from_secs(5)),
            include_bench_swaps: true,
            parallel: false,
            epsilon: 1e-9,
        }
    }
}

impl SearchConfig {
    pub fn with_constraints(mut self, constraints: RaidConfig) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Removes the wall-clock limit.
    pub fn without_time_budget(mut self) -> Self {
        self.time_budget = None;
        self
    }

    pub fn with_bench_swaps(mut self, include: bool) -> Self {
        self.include_bench_swaps = include;
        self
    }

    /// Enables or disables parallel neighbor evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constraints.validate()?;
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::Invalid(
                "epsilon must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}
