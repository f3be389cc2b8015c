use crate::application::ledger::TradeLedger;
use crate::application::trade::RECENT_TRADES_LIMIT;
use crate::domain::entities::trade::Trade;
use crate::domain::values::analytics::{AnalyticsSummary, RExtremes};
use crate::domain::values::pair_performance::PairPerformance;
use serde::Serialize;
use std::sync::Arc;

pub struct AnalyticsUseCase {
    ledger: Arc<TradeLedger>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: AnalyticsSummary,
    pub recent: Vec<Trade>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: AnalyticsSummary,
    pub best_r: f64,
    pub worst_r: f64,
    pub pairs: Vec<PairPerformance>,
}

impl AnalyticsUseCase {
    pub fn new(ledger: Arc<TradeLedger>) -> Self {
        Self { ledger }
    }

    pub fn summary(&self) -> AnalyticsSummary {
        AnalyticsSummary::from_trades(&self.ledger.snapshot())
    }

    pub fn pair_breakdown(&self) -> Vec<PairPerformance> {
        PairPerformance::breakdown(&self.ledger.snapshot())
    }

    pub fn r_extremes(&self) -> RExtremes {
        RExtremes::from_trades(&self.ledger.snapshot())
    }

    pub fn dashboard(&self) -> Dashboard {
        let trades = self.ledger.snapshot();
        Dashboard {
            summary: AnalyticsSummary::from_trades(&trades),
            recent: trades.into_iter().take(RECENT_TRADES_LIMIT).collect(),
        }
    }

    /// Every figure in the report comes from the same snapshot.
    pub fn report(&self) -> AnalyticsReport {
        let trades = self.ledger.snapshot();
        let extremes = RExtremes::from_trades(&trades);
        AnalyticsReport {
            summary: AnalyticsSummary::from_trades(&trades),
            best_r: extremes.best,
            worst_r: extremes.worst,
            pairs: PairPerformance::breakdown(&trades),
        }
    }
}
