//! Error types for points calculation, configuration and exchange outcomes

use crate::format::Locale;

/// A source tag outside the fixed set of scoring sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidSourceError {
    pub tag: String,
}

impl core::fmt::Display for InvalidSourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown points source '{}' (expected placement, soft-drop, hard-drop, achievement or rank-bonus)",
            self.tag
        )
    }
}

impl std::error::Error for InvalidSourceError {}

/// Precondition violations rejected by the validating gain calculator.
#[derive(Clone, Debug, PartialEq)]
pub enum PointsError {
    /// Source tag is not one of the known sources.
    InvalidSource(InvalidSourceError),
    /// Base amount is below zero.
    NegativeAmount(f64),
    /// Multiplier is below zero.
    NegativeMultiplier(f64),
    /// A numeric input is NaN or infinite.
    NonFinite { field: &'static str },
}

impl core::fmt::Display for PointsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PointsError::InvalidSource(e) => e.fmt(f),
            PointsError::NegativeAmount(v) => {
                write!(f, "base amount must be non-negative, got {}", v)
            }
            PointsError::NegativeMultiplier(v) => {
                write!(f, "multiplier must be non-negative, got {}", v)
            }
            PointsError::NonFinite { field } => {
                write!(f, "{} must be a finite number", field)
            }
        }
    }
}

impl std::error::Error for PointsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PointsError::InvalidSource(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidSourceError> for PointsError {
    fn from(e: InvalidSourceError) -> Self {
        PointsError::InvalidSource(e)
    }
}

/// Errors raised while loading or validating a [`PointsConfig`](crate::PointsConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Json(serde_json::Error),
    /// The exchange ladder has no entries.
    EmptyLadder,
    /// The ladder decreases at `index` (cost at `index` < cost at `index - 1`).
    DescendingLadder { index: usize },
    /// Achievement bounds are inverted.
    AchievementBounds { min: u32, max: u32 },
    /// A per-line rate or bound is negative or not finite.
    InvalidRate { field: &'static str },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "invalid points config: {}", e),
            ConfigError::EmptyLadder => write!(f, "exchange cost ladder is empty"),
            ConfigError::DescendingLadder { index } => {
                write!(f, "exchange cost ladder decreases at index {}", index)
            }
            ConfigError::AchievementBounds { min, max } => {
                write!(f, "achievement bonus min {} exceeds max {}", min, max)
            }
            ConfigError::InvalidRate { field } => {
                write!(f, "{} must be a non-negative finite number", field)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Expected business failure of an exchange attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExchangeError {
    /// Balance is below the current ladder cost.
    InsufficientPoints { cost: u32, current: i64 },
}

impl ExchangeError {
    /// Player-facing message in the given locale.
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (ExchangeError::InsufficientPoints { cost, current }, Locale::Ja) => {
                format!("交換に{}ポイント必要です（現在: {}ポイント）", cost, current)
            }
            (ExchangeError::InsufficientPoints { cost, current }, Locale::En) => {
                format!("Exchange requires {} points (current: {} points)", cost, current)
            }
        }
    }
}

impl core::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message(Locale::default()))
    }
}

impl std::error::Error for ExchangeError {}
