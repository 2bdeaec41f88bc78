//! Points Logic for the puzzle game's exchange system
//!
//! Pure calculations over the points tables: what an event earns, what an
//! exchange costs, and whether the player can pay for it.
//! This crate is compiled to:
//! - Native (for the game engine and tests)
//! - WASM (for the browser front end)

mod config;
mod error;
mod exchange;
mod format;
mod gain;
mod state;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{
    ladder_cost, ActionCosts, FeverConfig, PointsConfig, PointsYield, ACHIEVEMENT_BONUS_MAX,
    ACHIEVEMENT_BONUS_MIN, EXCHANGE_COSTS, FEVER_BLOCKS_NEEDED, FEVER_DURATION_MS,
    FEVER_FREE_EXCHANGE, FEVER_SCORE_MULTIPLIER, HARD_DROP_PER_LINE, HOLD_COST, LINE_DELETE_COST,
    SOFT_DROP_PER_LINE, TETROMINO_PLACEMENT,
};
pub use error::{ConfigError, ExchangeError, InvalidSourceError, PointsError};
pub use exchange::{
    attempt_exchange, attempt_exchange_in, can_afford, get_current_exchange_cost,
    get_hold_cost, get_line_delete_cost, get_next_exchange_cost, ExchangeResult,
};
pub use format::{
    format_exchange_costs, format_exchange_costs_in, format_points_gained,
    format_points_gained_in, source_label, Locale,
};
pub use gain::{
    calculate_base_points_gained, calculate_points_gained, try_calculate_points_gained,
    PointSource, PointsGained,
};
pub use state::{create_initial_points_state, reset_exchange_count, PointsState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_with_exchanges() {
        let mut state = create_initial_points_state();

        // a few placements and drops to build a balance
        for _ in 0..5 {
            state.record_drop(true, 18, 1.0);
            state.record_placement(1.0);
        }
        assert_eq!(state.total_points, 5 * (18 + 10));
        assert_eq!(state.blocks_placed, 5);

        let achievement = calculate_points_gained(PointSource::Achievement, 50.0, 1.0);
        state.apply_gain(&achievement);
        assert_eq!(state.total_points, 190);

        assert!(state.can_afford(get_hold_cost(false)));
        assert!(!state.can_afford(get_line_delete_cost(false)));

        let first = state.exchange(false);
        let second = state.exchange(false);
        let third = state.exchange(false);
        assert!(first.success && second.success);
        assert!(!third.success);
        assert_eq!(state.total_points, 190 - 45 - 65);
        assert_eq!(state.exchange_count, 2);
        assert_eq!(third.cost, 90);
        assert_eq!(format_exchange_costs(state.exchange_count), "90P → 120P → 160P");

        state.record_placement(FEVER_SCORE_MULTIPLIER as f64);
        assert_eq!(state.exchange_count, 0);
        assert_eq!(state.total_points, 80 + 40);
    }

    #[test]
    fn test_standard_config_matches_free_functions() {
        let config = PointsConfig::default();
        for count in 0..8 {
            assert_eq!(config.current_exchange_cost(count), get_current_exchange_cost(count));
            assert_eq!(config.next_exchange_cost(count), get_next_exchange_cost(count));
            assert_eq!(
                config.attempt_exchange(100, count, false, Locale::Ja),
                attempt_exchange(100, count, false)
            );
        }
        for source in PointSource::ALL {
            assert_eq!(
                config.points_gained(source, 33.0, 2.0),
                calculate_points_gained(source, 33.0, 2.0)
            );
        }
        assert_eq!(config.initial_state(), create_initial_points_state());
    }
}
