//! Points earned from gameplay events

use serde::{Deserialize, Serialize};
use crate::config::{PointsConfig, PointsYield};
use crate::error::{InvalidSourceError, PointsError};

/// Where a points award came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointSource {
    /// Tetromino placed. Fixed award, base amount ignored.
    Placement,
    /// Soft drop, base amount is lines dropped.
    SoftDrop,
    /// Hard drop, base amount is lines dropped.
    HardDrop,
    /// Achievement unlocked, base amount is clamped to the bonus range.
    Achievement,
    /// Rank bonus, base amount passes through.
    RankBonus,
}

impl PointSource {
    pub const ALL: [PointSource; 5] = [
        PointSource::Placement,
        PointSource::SoftDrop,
        PointSource::HardDrop,
        PointSource::Achievement,
        PointSource::RankBonus,
    ];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PointSource::Placement => "placement",
            PointSource::SoftDrop => "soft-drop",
            PointSource::HardDrop => "hard-drop",
            PointSource::Achievement => "achievement",
            PointSource::RankBonus => "rank-bonus",
        }
    }
}

impl core::str::FromStr for PointSource {
    type Err = InvalidSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PointSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| InvalidSourceError { tag: s.to_string() })
    }
}

impl core::fmt::Display for PointSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single points award
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsGained {
    pub source: PointSource,
    /// Base amount before the multiplier. Fractional only for soft drops.
    pub amount: f64,
    /// Defaults to 1 when absent.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// `floor(amount * multiplier)`
    pub total: i64,
}

fn default_multiplier() -> f64 {
    1.0
}

/// Base amount for a source before the multiplier is applied
fn base_points(table: &PointsYield, source: PointSource, base_amount: f64) -> f64 {
    match source {
        PointSource::Placement => table.tetromino_placement as f64,
        PointSource::SoftDrop => base_amount * table.soft_drop_per_line,
        PointSource::HardDrop => base_amount * table.hard_drop_per_line,
        PointSource::Achievement => base_amount
            .max(table.achievement_bonus_min as f64)
            .min(table.achievement_bonus_max as f64),
        PointSource::RankBonus => base_amount,
    }
}

fn gain_with(
    table: &PointsYield,
    source: PointSource,
    base_amount: f64,
    multiplier: f64,
) -> PointsGained {
    let amount = base_points(table, source, base_amount);
    let total = (amount * multiplier).floor() as i64;

    PointsGained {
        source,
        amount,
        multiplier,
        total,
    }
}

fn check_inputs(base_amount: f64, multiplier: f64) -> Result<(), PointsError> {
    if !base_amount.is_finite() {
        return Err(PointsError::NonFinite { field: "base amount" });
    }
    if !multiplier.is_finite() {
        return Err(PointsError::NonFinite { field: "multiplier" });
    }
    if base_amount < 0.0 {
        return Err(PointsError::NegativeAmount(base_amount));
    }
    if multiplier < 0.0 {
        return Err(PointsError::NegativeMultiplier(multiplier));
    }
    Ok(())
}

/// Calculate the points awarded for a gameplay event.
///
/// Callers must pass a non-negative `base_amount` and `multiplier`; negative
/// inputs yield negative totals. Use [`try_calculate_points_gained`] to have
/// them rejected instead.
///
/// # Arguments
/// * `source` - What earned the points
/// * `base_amount` - Lines dropped, achievement reward or rank bonus (ignored for placement)
/// * `multiplier` - Factor applied before flooring, normally 1
pub fn calculate_points_gained(source: PointSource, base_amount: f64, multiplier: f64) -> PointsGained {
    gain_with(&PointsYield::STANDARD, source, base_amount, multiplier)
}

/// [`calculate_points_gained`] with a multiplier of 1
pub fn calculate_base_points_gained(source: PointSource, base_amount: f64) -> PointsGained {
    calculate_points_gained(source, base_amount, 1.0)
}

/// Validating variant of [`calculate_points_gained`].
///
/// Fails fast on negative or non-finite inputs.
pub fn try_calculate_points_gained(
    source: PointSource,
    base_amount: f64,
    multiplier: f64,
) -> Result<PointsGained, PointsError> {
    check_inputs(base_amount, multiplier)?;
    Ok(calculate_points_gained(source, base_amount, multiplier))
}

impl PointsConfig {
    /// Points awarded under this config's yield table
    pub fn points_gained(&self, source: PointSource, base_amount: f64, multiplier: f64) -> PointsGained {
        gain_with(&self.points, source, base_amount, multiplier)
    }

    /// Validating variant of [`PointsConfig::points_gained`]
    pub fn try_points_gained(
        &self,
        source: PointSource,
        base_amount: f64,
        multiplier: f64,
    ) -> Result<PointsGained, PointsError> {
        check_inputs(base_amount, multiplier)?;
        Ok(self.points_gained(source, base_amount, multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_placement_ignores_base_amount() {
        let gained = calculate_points_gained(PointSource::Placement, 999.0, 2.0);
        assert_eq!(gained.amount, 10.0);
        assert_eq!(gained.multiplier, 2.0);
        assert_eq!(gained.total, 20);
    }

    #[test]
    fn test_soft_drop_half_point_per_line() {
        let gained = calculate_points_gained(PointSource::SoftDrop, 10.0, 1.0);
        assert_eq!(gained.amount, 5.0);
        assert_eq!(gained.total, 5);

        // 3 lines = 1.5, floored
        let gained = calculate_base_points_gained(PointSource::SoftDrop, 3.0);
        assert_eq!(gained.amount, 1.5);
        assert_eq!(gained.total, 1);
    }

    #[test]
    fn test_hard_drop_one_point_per_line() {
        let gained = calculate_points_gained(PointSource::HardDrop, 18.0, 1.0);
        assert_eq!(gained.amount, 18.0);
        assert_eq!(gained.total, 18);
    }

    #[test]
    fn test_achievement_clamped() {
        let high = calculate_points_gained(PointSource::Achievement, 1000.0, 1.0);
        assert_eq!(high.amount, 200.0);
        assert_eq!(high.total, 200);

        let low = calculate_points_gained(PointSource::Achievement, 1.0, 1.0);
        assert_eq!(low.amount, 5.0);
        assert_eq!(low.total, 5);

        let mid = calculate_points_gained(PointSource::Achievement, 50.0, 1.0);
        assert_eq!(mid.total, 50);
    }

    #[test]
    fn test_rank_bonus_passes_through() {
        let gained = calculate_points_gained(PointSource::RankBonus, 333.0, 1.0);
        assert_eq!(gained.amount, 333.0);
        assert_eq!(gained.total, 333);
    }

    #[test]
    fn test_multiplier_applied_before_floor() {
        // 5 lines soft drop = 2.5, x4 fever = 10
        let gained = calculate_points_gained(PointSource::SoftDrop, 5.0, 4.0);
        assert_eq!(gained.amount, 2.5);
        assert_eq!(gained.total, 10);

        let gained = calculate_points_gained(PointSource::HardDrop, 3.0, 1.5);
        assert_eq!(gained.total, 4);
    }

    #[test]
    fn test_negative_inputs_not_prevented() {
        let gained = calculate_points_gained(PointSource::RankBonus, -7.5, 1.0);
        assert_eq!(gained.total, -8);
    }

    #[test]
    fn test_try_rejects_bad_inputs() {
        assert_eq!(
            try_calculate_points_gained(PointSource::HardDrop, -1.0, 1.0),
            Err(PointsError::NegativeAmount(-1.0))
        );
        assert_eq!(
            try_calculate_points_gained(PointSource::HardDrop, 1.0, -2.0),
            Err(PointsError::NegativeMultiplier(-2.0))
        );
        assert_eq!(
            try_calculate_points_gained(PointSource::HardDrop, f64::NAN, 1.0),
            Err(PointsError::NonFinite { field: "base amount" })
        );
        assert_eq!(
            try_calculate_points_gained(PointSource::HardDrop, 1.0, f64::INFINITY),
            Err(PointsError::NonFinite { field: "multiplier" })
        );
        assert_eq!(
            try_calculate_points_gained(PointSource::HardDrop, 4.0, 1.0).map(|g| g.total),
            Ok(4)
        );
    }

    #[test]
    fn test_source_tags() {
        for source in PointSource::ALL {
            assert_eq!(source.as_str().parse::<PointSource>(), Ok(source));
            assert_eq!(source.to_string(), source.as_str());
        }
        let err = "line-clear".parse::<PointSource>().unwrap_err();
        assert_eq!(err.tag, "line-clear");
    }

    #[test]
    fn test_points_gained_wire_shape() {
        let gained = calculate_points_gained(PointSource::SoftDrop, 4.0, 1.0);
        let json = serde_json::to_value(&gained).unwrap();
        assert_eq!(json["source"], "soft-drop");
        assert_eq!(json["amount"], 2.0);
        assert_eq!(json["multiplier"], 1.0);
        assert_eq!(json["total"], 2);

        let back: PointsGained = serde_json::from_value(json).unwrap();
        assert_eq!(back, gained);
    }

    #[test]
    fn test_missing_multiplier_defaults_to_one() {
        let gained: PointsGained =
            serde_json::from_str(r#"{"source":"placement","amount":10,"total":10}"#).unwrap();
        assert_eq!(gained.multiplier, 1.0);
        assert_eq!(gained, calculate_points_gained(PointSource::Placement, 0.0, 1.0));
    }

    #[test]
    fn test_custom_yield_table() {
        let mut config = PointsConfig::standard();
        config.points.tetromino_placement = 25;
        config.points.achievement_bonus_max = 100;

        assert_eq!(config.points_gained(PointSource::Placement, 0.0, 1.0).total, 25);
        assert_eq!(config.points_gained(PointSource::Achievement, 500.0, 1.0).total, 100);
        assert!(config.try_points_gained(PointSource::Placement, -1.0, 1.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_achievement_always_in_bonus_range(base in 0.0f64..100_000.0) {
            let gained = calculate_points_gained(PointSource::Achievement, base, 1.0);
            prop_assert!(gained.amount >= 5.0 && gained.amount <= 200.0);
            prop_assert!(gained.total >= 5 && gained.total <= 200);
        }

        #[test]
        fn prop_total_is_floor_of_product(
            source_index in 0usize..5,
            base in 0.0f64..10_000.0,
            multiplier in 0.0f64..8.0,
        ) {
            let source = PointSource::ALL[source_index];
            let gained = calculate_points_gained(source, base, multiplier);
            prop_assert_eq!(gained.total, (gained.amount * multiplier).floor() as i64);
            prop_assert!(gained.total >= 0);
        }
    }
}
