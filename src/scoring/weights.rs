//! Scoring weights.

use crate::error::ConfigError;

/// Weights of every scoring term.
///
/// Every weight multiplies a term whose sign is fixed (bonuses positive,
/// penalties negative), so a weight of zero simply disables its term.
///
/// # Examples
///
/// ```
/// use raid_assign::scoring::ScoreWeights;
///
/// let weights = ScoreWeights::default()
///     .with_synergy(2.0)
///     .with_bench(0.0)
///     .with_ranged_cap(2);
/// assert_eq!(weights.synergy, 2.0);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreWeights {
    /// Sum of pair synergy inside each group.
    pub synergy: f64,
    /// Sum of composition bonuses.
    pub composition: f64,
    /// Penalty on the spread of healers across groups.
    pub healer_balance: f64,
    /// Penalty on the spread of tanks across groups.
    pub tank_balance: f64,
    /// Bonus per support provider grouped with the role it supports.
    pub support_colocation: f64,
    /// Penalty per repeated archetype inside a group.
    pub archetype_redundancy: f64,
    /// Penalty per ranged player beyond `ranged_cap` in a group.
    pub ranged_saturation: f64,
    /// Ranged players a group holds before saturation kicks in.
    pub ranged_cap: usize,
    /// Penalty per assigned late player.
    pub late_status: f64,
    /// Penalty per assigned tentative player.
    pub tentative_status: f64,
    /// Penalty per benched player.
    pub bench: f64,
    /// Penalty on the spread of mean quality across non-empty groups.
    pub quality_balance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            synergy: 1.0,
            composition: 1.0,
            healer_balance: 2.0,
            tank_balance: 1.0,
            support_colocation: 1.5,
            archetype_redundancy: 0.5,
            ranged_saturation: 1.0,
            ranged_cap: 3,
            late_status: 1.0,
            tentative_status: 0.5,
            bench: 0.25,
            quality_balance: 0.1,
        }
    }
}

impl ScoreWeights {
    pub fn with_synergy(mut self, w: f64) -> Self {
        self.synergy = w;
        self
    }

    pub fn with_composition(mut self, w: f64) -> Self {
        self.composition = w;
        self
    }

    pub fn with_healer_balance(mut self, w: f64) -> Self {
        self.healer_balance = w;
        self
    }

    pub fn with_tank_balance(mut self, w: f64) -> Self {
        self.tank_balance = w;
        self
    }

    pub fn with_support_colocation(mut self, w: f64) -> Self {
        self.support_colocation = w;
        self
    }

    pub fn with_archetype_redundancy(mut self, w: f64) -> Self {
        self.archetype_redundancy = w;
        self
    }

    pub fn with_ranged_saturation(mut self, w: f64) -> Self {
        self.ranged_saturation = w;
        self
    }

    /// Sets how many ranged players a group holds without penalty.
    pub fn with_ranged_cap(mut self, cap: usize) -> Self {
        self.ranged_cap = cap;
        self
    }

    pub fn with_late_status(mut self, w: f64) -> Self {
        self.late_status = w;
        self
    }

    pub fn with_tentative_status(mut self, w: f64) -> Self {
        self.tentative_status = w;
        self
    }

    pub fn with_bench(mut self, w: f64) -> Self {
        self.bench = w;
        self
    }

    pub fn with_quality_balance(mut self, w: f64) -> Self {
        self.quality_balance = w;
        self
    }

    /// Rejects non-finite weights and a zero ranged cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("synergy", self.synergy),
            ("composition", self.composition),
            ("healer_balance", self.healer_balance),
            ("tank_balance", self.tank_balance),
            ("support_colocation", self.support_colocation),
            ("archetype_redundancy", self.archetype_redundancy),
            ("ranged_saturation", self.ranged_saturation),
            ("late_status", self.late_status),
            ("tentative_status", self.tentative_status),
            ("bench", self.bench),
            ("quality_balance", self.quality_balance),
        ];
        if let Some((name, _)) = weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "weight {name} must be finite"
            )));
        }
        if self.ranged_cap == 0 {
            return Err(ConfigError::Invalid("ranged_cap must be at least 1".into()));
        }
        Ok(())
    }
}
