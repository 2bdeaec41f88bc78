//! Point yields, action costs, the exchange cost ladder and fever parameters
//!
//! The constants are the shipping tables. [`PointsConfig`] groups the same
//! values so a host can inject an alternative table (e.g. from JSON); every
//! calculation it exposes stays pure with respect to the config it was given.

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

// ── Point yields ─────────────────────────────────────────────────────

/// Points for placing a tetromino.
pub const TETROMINO_PLACEMENT: u32 = 10;

/// Points per line of soft drop.
pub const SOFT_DROP_PER_LINE: f64 = 0.5;

/// Points per line of hard drop.
pub const HARD_DROP_PER_LINE: f64 = 1.0;

/// Lower bound for an achievement bonus.
pub const ACHIEVEMENT_BONUS_MIN: u32 = 5;

/// Upper bound for an achievement bonus.
pub const ACHIEVEMENT_BONUS_MAX: u32 = 200;

// ── Action costs ─────────────────────────────────────────────────────

/// Cost of using hold.
pub const HOLD_COST: u32 = 15;

/// Cost of deleting a line.
pub const LINE_DELETE_COST: u32 = 200;

/// Exchange cost by exchange count. Plateaus at the last entry.
pub const EXCHANGE_COSTS: [u32; 5] = [45, 65, 90, 120, 160];

// ── Fever mode ───────────────────────────────────────────────────────

/// Blocks to place before fever mode triggers.
pub const FEVER_BLOCKS_NEEDED: u32 = 20;

/// Fever duration in milliseconds.
pub const FEVER_DURATION_MS: u32 = 30_000;

/// Score multiplier while fever is active.
pub const FEVER_SCORE_MULTIPLIER: u32 = 4;

/// Whether exchanges are free while fever is active.
pub const FEVER_FREE_EXCHANGE: bool = true;

/// Clamped ladder lookup.
///
/// Indices past the end resolve to the last (maximum) entry. An empty ladder
/// costs nothing.
pub fn ladder_cost(ladder: &[u32], index: usize) -> u32 {
    let last = ladder.len().saturating_sub(1);
    ladder.get(index.min(last)).copied().unwrap_or(0)
}

/// Points awarded per scoring source
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointsYield {
    pub tetromino_placement: u32,
    pub soft_drop_per_line: f64,
    pub hard_drop_per_line: f64,
    pub achievement_bonus_min: u32,
    pub achievement_bonus_max: u32,
}

impl PointsYield {
    pub const STANDARD: Self = Self {
        tetromino_placement: TETROMINO_PLACEMENT,
        soft_drop_per_line: SOFT_DROP_PER_LINE,
        hard_drop_per_line: HARD_DROP_PER_LINE,
        achievement_bonus_min: ACHIEVEMENT_BONUS_MIN,
        achievement_bonus_max: ACHIEVEMENT_BONUS_MAX,
    };
}

impl Default for PointsYield {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Flat costs for optional actions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionCosts {
    pub hold: u32,
    pub line_delete: u32,
}

impl ActionCosts {
    pub const STANDARD: Self = Self {
        hold: HOLD_COST,
        line_delete: LINE_DELETE_COST,
    };
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Fever mode parameters.
///
/// Activation and timing are owned by the game loop; this crate only
/// consumes the cost-free effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeverConfig {
    pub blocks_needed: u32,
    pub duration_ms: u32,
    pub score_multiplier: u32,
    pub free_exchange: bool,
}

impl FeverConfig {
    pub const STANDARD: Self = Self {
        blocks_needed: FEVER_BLOCKS_NEEDED,
        duration_ms: FEVER_DURATION_MS,
        score_multiplier: FEVER_SCORE_MULTIPLIER,
        free_exchange: FEVER_FREE_EXCHANGE,
    };
}

impl Default for FeverConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Complete points configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointsConfig {
    pub points: PointsYield,
    pub exchange_costs: Vec<u32>,
    pub actions: ActionCosts,
    pub fever: FeverConfig,
}

impl PointsConfig {
    /// The shipping tables
    pub fn standard() -> Self {
        Self {
            points: PointsYield::STANDARD,
            exchange_costs: EXCHANGE_COSTS.to_vec(),
            actions: ActionCosts::STANDARD,
            fever: FeverConfig::STANDARD,
        }
    }

    /// Parse a config from JSON and validate it.
    ///
    /// Missing fields fall back to the standard tables.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PointsConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            log::warn!("rejecting points config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    /// Check ladder shape, achievement bounds and per-line rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exchange_costs.is_empty() {
            return Err(ConfigError::EmptyLadder);
        }
        if let Some(index) = self
            .exchange_costs
            .windows(2)
            .position(|w| w[1] < w[0])
        {
            return Err(ConfigError::DescendingLadder { index: index + 1 });
        }

        let p = &self.points;
        if p.achievement_bonus_min > p.achievement_bonus_max {
            return Err(ConfigError::AchievementBounds {
                min: p.achievement_bonus_min,
                max: p.achievement_bonus_max,
            });
        }
        for (field, rate) in [
            ("soft_drop_per_line", p.soft_drop_per_line),
            ("hard_drop_per_line", p.hard_drop_per_line),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidRate { field });
            }
        }

        Ok(())
    }

    /// Ladder cost at `index`, clamped to the last entry
    pub fn ladder_cost(&self, index: usize) -> u32 {
        ladder_cost(&self.exchange_costs, index)
    }

    /// Highest cost on the ladder
    pub fn max_exchange_cost(&self) -> u32 {
        self.exchange_costs.last().copied().unwrap_or(0)
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self::standard()
    }
}
