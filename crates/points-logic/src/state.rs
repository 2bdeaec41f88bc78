//! Per-player points state
//!
//! The game loop owns and persists [`PointsState`]. The helpers here only
//! return updated values; nothing is shared between instances.

use serde::{Deserialize, Serialize};
use crate::config::{PointsConfig, EXCHANGE_COSTS};
use crate::exchange::{self, ExchangeResult};
use crate::gain::{calculate_points_gained, PointSource, PointsGained};

/// Points balance and exchange progress
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsState {
    pub total_points: i64,
    /// Successful exchanges since the last placement.
    pub exchange_count: u32,
    /// Snapshot of the cost ladder, for display.
    pub exchange_costs: Vec<u32>,
    pub blocks_placed: u32,
    pub last_drop_bonus: i64,
}

/// Exchange count after a piece is placed. Always 0.
pub fn reset_exchange_count() -> u32 {
    0
}

/// Fresh state with zeroed counters and its own copy of the cost ladder
pub fn create_initial_points_state() -> PointsState {
    PointsState {
        total_points: 0,
        exchange_count: 0,
        exchange_costs: EXCHANGE_COSTS.to_vec(),
        blocks_placed: 0,
        last_drop_bonus: 0,
    }
}

impl PointsState {
    pub fn new() -> Self {
        create_initial_points_state()
    }

    /// Credit an award to the balance
    pub fn apply_gain(&mut self, gained: &PointsGained) {
        self.total_points = self.total_points.saturating_add(gained.total);
    }

    /// Store the counters from an exchange attempt. Failed attempts are ignored.
    pub fn apply_exchange(&mut self, result: &ExchangeResult) {
        if !result.success {
            return;
        }
        self.exchange_count = result.new_exchange_count;
        self.total_points = result.remaining_points;
    }

    /// Count a placed piece, reset the exchange ladder and award placement points
    pub fn record_placement(&mut self, multiplier: f64) -> PointsGained {
        self.blocks_placed = self.blocks_placed.saturating_add(1);
        self.exchange_count = reset_exchange_count();

        let gained = calculate_points_gained(PointSource::Placement, 0.0, multiplier);
        self.apply_gain(&gained);
        gained
    }

    /// Award a drop bonus and remember it as the last one.
    ///
    /// `hard` selects hard drop over soft drop.
    pub fn record_drop(&mut self, hard: bool, lines: u32, multiplier: f64) -> PointsGained {
        let source = if hard {
            PointSource::HardDrop
        } else {
            PointSource::SoftDrop
        };
        let gained = calculate_points_gained(source, f64::from(lines), multiplier);
        self.last_drop_bonus = gained.total;
        self.apply_gain(&gained);
        gained
    }

    /// Attempt an exchange and store the outcome
    pub fn exchange(&mut self, is_fever_mode: bool) -> ExchangeResult {
        let result = exchange::attempt_exchange(self.total_points, self.exchange_count, is_fever_mode);
        self.apply_exchange(&result);
        result
    }

    pub fn current_exchange_cost(&self) -> u32 {
        exchange::get_current_exchange_cost(self.exchange_count)
    }

    pub fn next_exchange_cost(&self) -> u32 {
        exchange::get_next_exchange_cost(self.exchange_count)
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        exchange::can_afford(self.total_points, cost)
    }
}

impl Default for PointsState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointsConfig {
    /// Fresh state carrying a copy of this config's ladder
    pub fn initial_state(&self) -> PointsState {
        PointsState {
            exchange_costs: self.exchange_costs.clone(),
            ..create_initial_points_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = create_initial_points_state();
        assert_eq!(state.total_points, 0);
        assert_eq!(state.exchange_count, 0);
        assert_eq!(state.blocks_placed, 0);
        assert_eq!(state.last_drop_bonus, 0);
        assert_eq!(state.exchange_costs, vec![45, 65, 90, 120, 160]);
        assert_eq!(state, PointsState::default());
    }

    #[test]
    fn test_initial_ladder_is_a_copy() {
        let mut first = create_initial_points_state();
        first.exchange_costs[0] = 1;
        first.exchange_costs.push(999);

        let second = create_initial_points_state();
        assert_eq!(second.exchange_costs, vec![45, 65, 90, 120, 160]);
        assert_eq!(EXCHANGE_COSTS, [45, 65, 90, 120, 160]);
    }

    #[test]
    fn test_reset_exchange_count() {
        assert_eq!(reset_exchange_count(), 0);
    }

    #[test]
    fn test_placement_resets_exchange_ladder() {
        let mut state = PointsState::new();
        state.total_points = 200;

        let result = state.exchange(false);
        assert!(result.success);
        assert_eq!(state.exchange_count, 1);
        assert_eq!(state.total_points, 155);
        assert_eq!(state.current_exchange_cost(), 65);
        assert_eq!(state.next_exchange_cost(), 90);

        let gained = state.record_placement(1.0);
        assert_eq!(gained.total, 10);
        assert_eq!(state.blocks_placed, 1);
        assert_eq!(state.exchange_count, 0);
        assert_eq!(state.total_points, 165);
        assert_eq!(state.current_exchange_cost(), 45);
    }

    #[test]
    fn test_failed_exchange_leaves_state() {
        let mut state = PointsState::new();
        state.total_points = 30;
        let before = state.clone();

        let result = state.exchange(false);
        assert!(!result.success);
        assert_eq!(state, before);
        assert!(!state.can_afford(result.cost));
    }

    #[test]
    fn test_fever_exchange_keeps_count() {
        let mut state = PointsState::new();
        state.exchange_count = 2;

        let result = state.exchange(true);
        assert!(result.success);
        assert_eq!(state.exchange_count, 2);
        assert_eq!(state.total_points, 0);
    }

    #[test]
    fn test_record_drop_tracks_last_bonus() {
        let mut state = PointsState::new();

        let soft = state.record_drop(false, 7, 1.0);
        assert_eq!(soft.total, 3);
        assert_eq!(state.last_drop_bonus, 3);

        let hard = state.record_drop(true, 15, 4.0);
        assert_eq!(hard.total, 60);
        assert_eq!(state.last_drop_bonus, 60);
        assert_eq!(state.total_points, 63);
    }

    #[test]
    fn test_config_initial_state_copies_ladder() {
        let config = PointsConfig {
            exchange_costs: vec![5, 10],
            ..PointsConfig::standard()
        };
        let state = config.initial_state();
        assert_eq!(state.exchange_costs, vec![5, 10]);
        assert_eq!(state.total_points, 0);
    }

    #[test]
    fn test_state_wire_shape() {
        let json = serde_json::to_value(PointsState::new()).unwrap();
        assert_eq!(json["totalPoints"], 0);
        assert_eq!(json["exchangeCount"], 0);
        assert_eq!(json["blocksPlaced"], 0);
        assert_eq!(json["lastDropBonus"], 0);
        assert_eq!(json["exchangeCosts"], serde_json::json!([45, 65, 90, 120, 160]));
    }
}
