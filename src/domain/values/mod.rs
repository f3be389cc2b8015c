pub mod analytics;
pub mod instrument;
pub mod pair_performance;
pub mod trade_date;
pub mod trade_direction;
pub mod trade_metrics;
