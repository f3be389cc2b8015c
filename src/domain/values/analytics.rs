//! Aggregate performance statistics over a trade collection.
//!
//! Everything here is a pure function of the input slice: the caller's
//! collection is never reordered, and repeated calls on the same trades
//! produce identical output.

use crate::domain::entities::trade::Trade;
use crate::domain::values::trade_metrics::round_half_up;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One point of the equity curve: cumulative P&L after the trade at `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityPoint {
    pub date: DateTime<Utc>,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total: usize,
    pub wins: usize,
    /// `total - wins`; break-even trades land here.
    pub losses: usize,
    /// Whole-number percentage.
    pub win_rate: u32,
    pub total_pnl: i64,
    /// Mean R-multiple over trades with a finite R.
    pub avg_r: f64,
    /// Chronological, one point per trade.
    pub equity: Vec<EquityPoint>,
}

impl AnalyticsSummary {
    pub fn from_trades(trades: &[Trade]) -> Self {
        if trades.is_empty() {
            return Self::default();
        }

        // Stable sort: trades sharing a timestamp keep their relative order
        let mut sorted: Vec<&Trade> = trades.iter().collect();
        sorted.sort_by_key(|t| t.date);

        let mut wins = 0usize;
        let mut pnl_sum = 0i64;
        let mut r_sum = 0.0;
        let mut r_count = 0usize;
        let mut running = 0i64;
        let mut equity = Vec::with_capacity(sorted.len());

        for t in sorted {
            if t.is_win() {
                wins += 1;
            }
            // Saturate: loaded records are not bounded by the normalizer
            pnl_sum = pnl_sum.saturating_add(t.pnl);
            if t.r_multiple.is_finite() {
                r_sum += t.r_multiple;
                r_count += 1;
            }
            running = running.saturating_add(t.pnl);
            equity.push(EquityPoint {
                date: t.date,
                value: running,
            });
        }

        let total = trades.len();
        let win_rate = round_half_up(wins as f64 / total as f64 * 100.0) as u32;
        let avg_r = if r_count > 0 {
            r_sum / r_count as f64
        } else {
            0.0
        };

        Self {
            total,
            wins,
            losses: total - wins,
            win_rate,
            total_pnl: pnl_sum,
            avg_r,
            equity,
        }
    }
}

/// Best and worst single-trade R-multiple.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RExtremes {
    pub best: f64,
    pub worst: f64,
}

impl RExtremes {
    /// Both extremes are 0 for an empty collection, and either one falls back
    /// to 0 if it is not finite.
    pub fn from_trades(trades: &[Trade]) -> Self {
        if trades.is_empty() {
            return Self::default();
        }

        let best = trades
            .iter()
            .map(|t| t.r_multiple)
            .fold(f64::NEG_INFINITY, f64::max);
        let worst = trades
            .iter()
            .map(|t| t.r_multiple)
            .fold(f64::INFINITY, f64::min);

        Self {
            best: if best.is_finite() { best } else { 0.0 },
            worst: if worst.is_finite() { worst } else { 0.0 },
        }
    }
}
