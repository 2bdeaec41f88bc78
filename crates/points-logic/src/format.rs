//! Display strings for the points history and exchange preview

use serde::{Deserialize, Serialize};
use crate::config::EXCHANGE_COSTS;
use crate::gain::{PointSource, PointsGained};

/// Number of upcoming ladder costs shown in the exchange preview.
const PREVIEW_LEN: usize = 3;

/// Display language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

/// Label shown for a points source
pub fn source_label(source: PointSource, locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => match source {
            PointSource::Placement => "ブロック設置",
            PointSource::SoftDrop => "ソフトドロップ",
            PointSource::HardDrop => "ハードドロップ",
            PointSource::Achievement => "実績達成",
            PointSource::RankBonus => "段位ボーナス",
        },
        Locale::En => match source {
            PointSource::Placement => "Placement",
            PointSource::SoftDrop => "Soft drop",
            PointSource::HardDrop => "Hard drop",
            PointSource::Achievement => "Achievement",
            PointSource::RankBonus => "Rank bonus",
        },
    }
}

/// One-line history entry, e.g. `ハードドロップ: +18P` or `ブロック設置: +40P (x4)`
pub fn format_points_gained(gained: &PointsGained) -> String {
    format_points_gained_in(Locale::default(), gained)
}

pub fn format_points_gained_in(locale: Locale, gained: &PointsGained) -> String {
    let label = source_label(gained.source, locale);
    // zero and NaN are treated as absent, as is 1
    let m = gained.multiplier;
    if m != 1.0 && m != 0.0 && !m.is_nan() {
        format!("{}: +{}P (x{})", label, gained.total, gained.multiplier)
    } else {
        format!("{}: +{}P", label, gained.total)
    }
}

/// Preview of the next exchange costs, e.g. `45P → 65P → 90P`.
///
/// Shows at most three entries starting at `exchange_count`; once the ladder
/// is exhausted shows the plateau cost marked as the maximum.
pub fn format_exchange_costs(exchange_count: u32) -> String {
    format_exchange_costs_in(Locale::default(), exchange_count)
}

pub fn format_exchange_costs_in(locale: Locale, exchange_count: u32) -> String {
    format_ladder_preview(&EXCHANGE_COSTS, exchange_count, locale)
}

pub(crate) fn format_ladder_preview(ladder: &[u32], exchange_count: u32, locale: Locale) -> String {
    let start = (exchange_count as usize).min(ladder.len());
    let end = start.saturating_add(PREVIEW_LEN).min(ladder.len());

    if start == end {
        let max = ladder.last().copied().unwrap_or(0);
        return match locale {
            Locale::Ja => format!("{}P（最大）", max),
            Locale::En => format!("{}P (max)", max),
        };
    }

    ladder[start..end]
        .iter()
        .map(|cost| format!("{}P", cost))
        .collect::<Vec<_>>()
        .join(" → ")
}

impl crate::config::PointsConfig {
    /// Exchange preview over this config's ladder
    pub fn format_exchange_costs(&self, exchange_count: u32, locale: Locale) -> String {
        format_ladder_preview(&self.exchange_costs, exchange_count, locale)
    }
}
