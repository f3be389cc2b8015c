mod common;

use common::{raw, setup};
use fxjournal::domain::values::analytics::AnalyticsSummary;

#[test]
fn test_empty_journal() {
    let j = setup();
    let s = j.analytics();
    assert_eq!(s, AnalyticsSummary::default());

    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "total": 0, "wins": 0, "losses": 0, "winRate": 0,
            "totalPnl": 0, "avgR": 0.0, "equity": []
        })
    );

    let report = j.analytics_report();
    assert_eq!(report.best_r, 0.0);
    assert_eq!(report.worst_r, 0.0);
    assert!(report.pairs.is_empty());
}

#[test]
fn test_summary_over_journal() {
    let j = setup();
    // Entered out of chronological order
    j.add_trade(&raw("2024-01-03T10:00:00Z", "EURUSD", "Long", 1.1000, 1.0950, 1.1050, 10.0))
        .unwrap(); // +500, 1R
    j.add_trade(&raw("2024-01-01T10:00:00Z", "USDJPY", "Short", 110.00, 110.50, 109.00, 9.0))
        .unwrap(); // +900, 2R
    j.add_trade(&raw("2024-01-02T10:00:00Z", "GBPUSD", "Long", 1.2700, 1.2650, 1.2650, 10.0))
        .unwrap(); // -500, -1R

    let s = j.analytics();
    assert_eq!(s.total, 3);
    assert_eq!(s.wins, 2);
    assert_eq!(s.losses, 1);
    assert_eq!(s.win_rate, 67);
    assert_eq!(s.total_pnl, 900);
    assert!((s.avg_r - 2.0 / 3.0).abs() < 1e-9);

    let curve: Vec<i64> = s.equity.iter().map(|p| p.value).collect();
    assert_eq!(curve, vec![900, 400, 900]);
    assert_eq!(s.equity.len(), s.total);
    assert!(s.equity.windows(2).all(|w| w[0].date <= w[1].date));

    // Aggregation never reorders the stored collection
    let ids: Vec<String> = j.trades(None).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["trade-3", "trade-2", "trade-1"]);
}

#[test]
fn test_one_in_three_rounds_down() {
    let j = setup();
    j.add_trade(&raw("2024-01-01T10:00:00Z", "EURUSD", "Long", 1.1, 1.09, 1.11, 10.0))
        .unwrap();
    j.add_trade(&raw("2024-01-02T10:00:00Z", "EURUSD", "Long", 1.1, 1.09, 1.09, 10.0))
        .unwrap();
    j.add_trade(&raw("2024-01-03T10:00:00Z", "EURUSD", "Short", 1.1, 1.11, 1.11, 10.0))
        .unwrap();
    assert_eq!(j.analytics().win_rate, 33);
}

#[test]
fn test_break_even_is_not_a_win() {
    let j = setup();
    j.add_trade(&raw("2024-01-01T10:00:00Z", "EURUSD", "Long", 1.1, 1.09, 1.1, 10.0))
        .unwrap();
    let s = j.analytics();
    assert_eq!(s.total, 1);
    assert_eq!(s.wins, 0);
    assert_eq!(s.losses, 1);
    assert_eq!(s.win_rate, 0);
    assert_eq!(s.equity[0].value, 0);
}

#[test]
fn test_idempotent_and_consistent_after_delete() {
    let j = setup();
    j.add_trade(&raw("2024-01-01T10:00:00Z", "EURUSD", "Long", 1.1, 1.09, 1.11, 10.0))
        .unwrap();
    j.add_trade(&raw("2024-01-02T10:00:00Z", "USDJPY", "Long", 150.0, 149.5, 149.0, 7.0))
        .unwrap();

    let a = j.analytics();
    let b = j.analytics();
    assert_eq!(a, b);
    assert_eq!(a.avg_r.to_bits(), b.avg_r.to_bits());

    j.delete_trade("trade-2").unwrap();
    let c = j.analytics();
    assert_eq!(c.total, 1);
    assert_eq!(c.total_pnl, 1000);
    assert_eq!(c.equity.len(), 1);
}

#[test]
fn test_report_pairs_and_extremes() {
    let j = setup();
    j.add_trade(&raw("2024-01-01T10:00:00Z", "eurusd", "Long", 1.1000, 1.0950, 1.1050, 10.0))
        .unwrap(); // +500, 1R
    j.add_trade(&raw("2024-01-02T10:00:00Z", "USDJPY", "Short", 110.00, 110.50, 109.00, 9.0))
        .unwrap(); // +900, 2R
    j.add_trade(&raw("2024-01-03T10:00:00Z", "EURUSD", "Long", 1.1000, 1.0950, 1.0900, 10.0))
        .unwrap(); // -1000, -2R

    let report = j.analytics_report();
    assert_eq!(report.best_r, 2.0);
    assert_eq!(report.worst_r, -2.0);
    assert_eq!(report.pairs.len(), 2);
    assert_eq!(report.pairs[0].pair, "USDJPY");
    assert_eq!(report.pairs[0].pnl, 900);
    assert_eq!(report.pairs[1].pair, "EURUSD");
    assert_eq!(report.pairs[1].pnl, -500);
    assert_eq!(report.pairs[1].trade_count, 2);
    assert_eq!(report.summary, j.analytics());

    let dash = j.dashboard();
    assert_eq!(dash.recent.len(), 3);
    assert_eq!(dash.recent[0].id, "trade-3");
    assert_eq!(dash.summary.total_pnl, 400);
}

#[test]
fn test_oversized_trades_never_reach_the_aggregator() {
    let j = setup();
    for _ in 0..2 {
        assert!(j
            .add_trade(&raw("2024-01-01T10:00:00Z", "XAUUSD", "Long", 0.0, -1.0, 1e19, 10.0))
            .is_err());
    }
    j.add_trade(&raw("2024-01-02T10:00:00Z", "XAUUSD", "Long", 2000.0, 1990.0, 2015.0, 1.0))
        .unwrap();

    let s = j.analytics();
    assert_eq!(s.total, 1);
    assert_eq!(s.total_pnl, 15);
}
