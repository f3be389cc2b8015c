use crate::domain::entities::trade::Trade;
use serde::Serialize;
use std::collections::HashMap;

/// Net P&L for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairPerformance {
    pub pair: String,
    pub pnl: i64,
    pub trade_count: usize,
}

impl PairPerformance {
    /// Group by uppercased pair and sort by summed P&L, best first.
    /// Equal sums keep the order in which the pair first appeared.
    pub fn breakdown(trades: &[Trade]) -> Vec<PairPerformance> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<PairPerformance> = Vec::new();

        for t in trades {
            let key = t.pair.to_uppercase();
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                groups.push(PairPerformance {
                    pair: key,
                    pnl: 0,
                    trade_count: 0,
                });
                groups.len() - 1
            });
            groups[slot].pnl = groups[slot].pnl.saturating_add(t.pnl);
            groups[slot].trade_count += 1;
        }

        groups.sort_by(|a, b| b.pnl.cmp(&a.pnl));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::trade_direction::TradeDirection;
    use chrono::Utc;

    fn trade(pair: &str, pnl: i64) -> Trade {
        Trade {
            id: format!("{pair}-{pnl}"),
            date: Utc::now(),
            pair: pair.into(),
            direction: TradeDirection::Long,
            entry: 1.0,
            stop: 0.99,
            exit: 1.0,
            pip_value: 10.0,
            pips: 0,
            risk_pips: 100,
            pnl,
            r_multiple: 0.0,
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty() {
        assert!(PairPerformance::breakdown(&[]).is_empty());
    }

    #[test]
    fn test_groups_case_insensitively_and_sorts_desc() {
        let trades = vec![
            trade("EURUSD", 100),
            trade("usdjpy", -300),
            trade("eurusd", 50),
            trade("XAUUSD", 400),
            trade("USDJPY", 100),
        ];
        let rows = PairPerformance::breakdown(&trades);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], PairPerformance { pair: "XAUUSD".into(), pnl: 400, trade_count: 1 });
        assert_eq!(rows[1], PairPerformance { pair: "EURUSD".into(), pnl: 150, trade_count: 2 });
        assert_eq!(rows[2], PairPerformance { pair: "USDJPY".into(), pnl: -200, trade_count: 2 });
    }

    #[test]
    fn test_huge_sums_saturate() {
        let trades = vec![trade("XAUUSD", i64::MAX), trade("XAUUSD", i64::MAX), trade("EURUSD", 1)];
        let rows = PairPerformance::breakdown(&trades);
        assert_eq!(rows[0].pair, "XAUUSD");
        assert_eq!(rows[0].pnl, i64::MAX);
        assert_eq!(rows[0].trade_count, 2);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let trades = vec![trade("GBPUSD", 100), trade("AUDUSD", 100), trade("NZDUSD", 100)];
        let pairs: Vec<String> = PairPerformance::breakdown(&trades)
            .into_iter()
            .map(|p| p.pair)
            .collect();
        assert_eq!(pairs, vec!["GBPUSD", "AUDUSD", "NZDUSD"]);
    }
}
