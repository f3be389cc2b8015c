use crate::domain::error::DomainError;
use crate::domain::values::instrument::InstrumentClass;
use crate::domain::values::trade_date::parse_trade_date;
use crate::domain::values::trade_direction::TradeDirection;
use crate::domain::values::trade_metrics::TradeMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_pair() -> String {
    "EURUSD".into()
}

fn default_direction() -> String {
    "Long".into()
}

fn default_pip_value() -> f64 {
    10.0
}

/// A trade as submitted from the entry form, before any validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTradeInput {
    /// Local date-time (`2024-03-01T09:30`) or RFC3339.
    #[serde(default)]
    pub date: String,
    #[serde(default = "default_pair")]
    pub pair: String,
    #[serde(default = "default_direction")]
    pub direction: String,
    pub entry: f64,
    pub stop: f64,
    pub exit: f64,
    #[serde(default = "default_pip_value")]
    pub pip_value: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A journaled trade. Immutable once created; only ever deleted by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub date: DateTime<Utc>,
    pub pair: String,
    pub direction: TradeDirection,
    pub entry: f64,
    pub stop: f64,
    pub exit: f64,
    pub pip_value: f64,
    pub pips: i64,
    pub risk_pips: u64,
    pub pnl: i64,
    pub r_multiple: f64,
    #[serde(default)]
    pub notes: String,
}

impl Trade {
    /// Validate a raw submission and compute every derived field.
    ///
    /// The pip multiplier is resolved here, once, from the pair symbol and is
    /// baked into the stored pips/pnl.
    pub fn from_input(input: &RawTradeInput, id: String) -> Result<Self, DomainError> {
        let direction: TradeDirection = input
            .direction
            .parse()
            .map_err(DomainError::InvalidInput)?;

        let pair = input.pair.trim().to_uppercase();
        if pair.is_empty() {
            return Err(DomainError::InvalidInput("pair is required".into()));
        }

        for (name, value) in [
            ("entry", input.entry),
            ("stop", input.stop),
            ("exit", input.exit),
            ("pipValue", input.pip_value),
        ] {
            if !value.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }

        let date = parse_trade_date(&input.date)?;
        let class = InstrumentClass::from_pair(&pair);
        log::debug!("{pair} priced as {class} (x{})", class.multiplier());
        let metrics = TradeMetrics::compute(
            direction,
            input.entry,
            input.stop,
            input.exit,
            input.pip_value,
            class.multiplier(),
        )?;

        Ok(Self {
            id,
            date,
            pair,
            direction,
            entry: input.entry,
            stop: input.stop,
            exit: input.exit,
            pip_value: input.pip_value,
            pips: metrics.pips,
            risk_pips: metrics.risk_pips,
            pnl: metrics.pnl,
            r_multiple: metrics.r_multiple,
            notes: input.notes.clone().unwrap_or_default(),
        })
    }

    pub fn is_win(&self) -> bool {
        self.pnl > 0
    }
}
