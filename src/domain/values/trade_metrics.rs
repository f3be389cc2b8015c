//! Per-trade derived figures: pips, risk, P&L and R-multiple.
//!
//! All arithmetic happens on unrounded values; rounding is applied only to the
//! stored outputs, so `pnl == round(pips_unrounded * pip_value)`.

use crate::domain::error::DomainError;
use crate::domain::values::trade_direction::TradeDirection;
use serde::Serialize;

// 2^63 and 2^64: the first values past i64::MAX / u64::MAX
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Derived figures for one trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeMetrics {
    pub pips: i64,
    pub risk_pips: u64,
    pub pnl: i64,
    pub r_multiple: f64,
}

impl TradeMetrics {
    pub fn compute(
        direction: TradeDirection,
        entry: f64,
        stop: f64,
        exit: f64,
        pip_value: f64,
        multiplier: f64,
    ) -> Result<Self, DomainError> {
        let raw_pips = (exit - entry) * multiplier * direction.sign();
        let raw_risk_pips = (entry - stop).abs() * multiplier;
        let pnl = raw_pips * pip_value;

        // Zero (or undefined) risk would blow up the ratio
        let mut risk_usd = raw_risk_pips * pip_value;
        if risk_usd == 0.0 || risk_usd.is_nan() {
            risk_usd = 1.0;
        }

        let r = pnl / risk_usd;
        // + 0.0 turns a -0.0 (flat short) into 0.0
        let r_multiple = if r.is_finite() { round_to(r, 2) + 0.0 } else { 0.0 };

        Ok(Self {
            pips: to_i64("pips", round_half_up(raw_pips))?,
            risk_pips: to_u64("riskPips", round_half_up(raw_risk_pips))?,
            pnl: to_i64("pnl", round_half_up(pnl))?,
            r_multiple,
        })
    }
}

fn to_i64(name: &str, x: f64) -> Result<i64, DomainError> {
    if x.is_finite() && (-I64_BOUND..I64_BOUND).contains(&x) {
        Ok(x as i64)
    } else {
        Err(DomainError::InvalidInput(format!("{name} out of range: {x}")))
    }
}

fn to_u64(name: &str, x: f64) -> Result<u64, DomainError> {
    if x.is_finite() && (0.0..U64_BOUND).contains(&x) {
        Ok(x as u64)
    } else {
        Err(DomainError::InvalidInput(format!("{name} out of range: {x}")))
    }
}

/// Round to the nearest integer with halves going towards +infinity
/// (`-2.5 → -2`, `2.5 → 3`).
pub fn round_half_up(x: f64) -> f64 {
    let r = x.round();
    // round() sends negative halves down; pull them back up
    if x - r == 0.5 {
        r + 1.0
    } else {
        r
    }
}

/// Round to `digits` fraction digits, halves away from zero.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (x * factor).round() / factor
}
