//! Exchange cost ladder, exchange attempts and action costs

use serde::{Deserialize, Serialize};
use crate::config::{ladder_cost, ActionCosts, PointsConfig, EXCHANGE_COSTS, FEVER_FREE_EXCHANGE};
use crate::error::ExchangeError;
use crate::format::Locale;

/// Outcome of an exchange attempt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResult {
    pub success: bool,
    /// Cost charged, or the cost that could not be paid.
    pub cost: u32,
    pub new_exchange_count: u32,
    pub remaining_points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExchangeResult {
    fn free(current_points: i64, exchange_count: u32) -> Self {
        Self {
            success: true,
            cost: 0,
            new_exchange_count: exchange_count,
            remaining_points: current_points,
            error_message: None,
        }
    }

    /// Structured failure reason, if the attempt failed
    pub fn error(&self) -> Option<ExchangeError> {
        if self.success {
            return None;
        }
        Some(ExchangeError::InsufficientPoints {
            cost: self.cost,
            current: self.remaining_points,
        })
    }
}

fn current_cost_in(ladder: &[u32], exchange_count: u32) -> u32 {
    ladder_cost(ladder, exchange_count as usize)
}

fn next_cost_in(ladder: &[u32], exchange_count: u32) -> u32 {
    ladder_cost(ladder, (exchange_count as usize).saturating_add(1))
}

fn attempt_in(
    ladder: &[u32],
    fever_free: bool,
    current_points: i64,
    exchange_count: u32,
    is_fever_mode: bool,
    locale: Locale,
) -> ExchangeResult {
    if is_fever_mode && fever_free {
        log::debug!("fever exchange: free, count stays at {}", exchange_count);
        return ExchangeResult::free(current_points, exchange_count);
    }

    let cost = current_cost_in(ladder, exchange_count);

    if current_points < i64::from(cost) {
        let err = ExchangeError::InsufficientPoints { cost, current: current_points };
        log::debug!("exchange refused: {} < {}", current_points, cost);
        return ExchangeResult {
            success: false,
            cost,
            new_exchange_count: exchange_count,
            remaining_points: current_points,
            error_message: Some(err.message(locale)),
        };
    }

    let new_exchange_count = exchange_count.saturating_add(1);
    log::debug!("exchange #{} charged {} points", new_exchange_count, cost);

    ExchangeResult {
        success: true,
        cost,
        new_exchange_count,
        remaining_points: current_points - i64::from(cost),
        error_message: None,
    }
}

/// Cost of the next exchange given how many were already made.
///
/// Plateaus at the last ladder entry.
pub fn get_current_exchange_cost(exchange_count: u32) -> u32 {
    current_cost_in(&EXCHANGE_COSTS, exchange_count)
}

/// Cost of the exchange after the current one.
///
/// Once the ladder is exhausted this keeps returning the maximum cost
/// rather than signalling "no next cost".
pub fn get_next_exchange_cost(exchange_count: u32) -> u32 {
    next_cost_in(&EXCHANGE_COSTS, exchange_count)
}

/// Try to pay for an exchange.
///
/// Never mutates anything; the caller stores `new_exchange_count` and
/// `remaining_points` from the result. In fever mode the exchange is free and
/// the count does not advance.
///
/// # Arguments
/// * `current_points` - Spendable balance
/// * `exchange_count` - Exchanges made since the last placement
/// * `is_fever_mode` - Whether fever mode is active
pub fn attempt_exchange(current_points: i64, exchange_count: u32, is_fever_mode: bool) -> ExchangeResult {
    attempt_exchange_in(Locale::default(), current_points, exchange_count, is_fever_mode)
}

/// [`attempt_exchange`] with the failure message rendered in `locale`
pub fn attempt_exchange_in(
    locale: Locale,
    current_points: i64,
    exchange_count: u32,
    is_fever_mode: bool,
) -> ExchangeResult {
    attempt_in(
        &EXCHANGE_COSTS,
        FEVER_FREE_EXCHANGE,
        current_points,
        exchange_count,
        is_fever_mode,
        locale,
    )
}

fn action_cost(cost: u32, is_fever_mode: bool) -> u32 {
    if is_fever_mode {
        0
    } else {
        cost
    }
}

/// Cost of using hold; free during fever
pub fn get_hold_cost(is_fever_mode: bool) -> u32 {
    action_cost(ActionCosts::STANDARD.hold, is_fever_mode)
}

/// Cost of deleting a line; free during fever
pub fn get_line_delete_cost(is_fever_mode: bool) -> u32 {
    action_cost(ActionCosts::STANDARD.line_delete, is_fever_mode)
}

/// Whether `current_points` covers `cost`. Used to grey out actions.
pub fn can_afford(current_points: i64, cost: u32) -> bool {
    current_points >= i64::from(cost)
}

impl PointsConfig {
    pub fn current_exchange_cost(&self, exchange_count: u32) -> u32 {
        current_cost_in(&self.exchange_costs, exchange_count)
    }

    pub fn next_exchange_cost(&self, exchange_count: u32) -> u32 {
        next_cost_in(&self.exchange_costs, exchange_count)
    }

    /// Exchange attempt against this config's ladder.
    ///
    /// Fever only waives the cost when `fever.free_exchange` is set.
    pub fn attempt_exchange(
        &self,
        current_points: i64,
        exchange_count: u32,
        is_fever_mode: bool,
        locale: Locale,
    ) -> ExchangeResult {
        attempt_in(
            &self.exchange_costs,
            self.fever.free_exchange,
            current_points,
            exchange_count,
            is_fever_mode,
            locale,
        )
    }

    pub fn hold_cost(&self, is_fever_mode: bool) -> u32 {
        action_cost(self.actions.hold, is_fever_mode)
    }

    pub fn line_delete_cost(&self, is_fever_mode: bool) -> u32 {
        action_cost(self.actions.line_delete, is_fever_mode)
    }
}
