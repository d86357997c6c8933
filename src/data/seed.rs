//! The fixed development scenario: one active TQQQ setting, a cycle
//! five days in, and the two LOC buys that produced it.

use chrono::Utc;

use crate::models::{CycleStatus, OrderType, TradeLog, UserSettings};

const SEED_SYMBOL: &str = "TQQQ";
const SEED_PRINCIPAL: f64 = 10000.0;
const SEED_SPLIT_COUNT: i64 = 40;
const SEED_TARGET_RATE: f64 = 0.10;
const SEED_CYCLE_DAY: i64 = 5;
const SEED_PRICE: f64 = 50.0;
const SEED_QTYS: [i64; 2] = [2, 8];

/// One complete dataset for a seed run. The cycle totals are derived
/// from the trade list, so `total_invested` always equals the sum of
/// the trade amounts.
#[derive(Debug, Clone)]
pub struct SeedScenario {
    pub settings: UserSettings,
    pub cycle: CycleStatus,
    pub trades: Vec<TradeLog>,
}

impl SeedScenario {
    /// Scenario stamped with the current time, captured once so every
    /// row of the run shares the same created_at/updated_at.
    pub fn development() -> Self {
        Self::at(&current_timestamp())
    }

    /// Scenario with an explicit timestamp.
    pub fn at(stamp: &str) -> Self {
        let trades: Vec<TradeLog> = SEED_QTYS
            .iter()
            .map(|&qty| TradeLog::buy(stamp, SEED_SYMBOL, OrderType::Loc, qty, SEED_PRICE))
            .collect();

        let total_bought_qty: i64 = trades.iter().map(|t| t.qty).sum();
        let total_invested: f64 = trades.iter().map(|t| t.amount).sum();
        let cycle = CycleStatus {
            created_at: stamp.to_string(),
            updated_at: stamp.to_string(),
            symbol: SEED_SYMBOL.to_string(),
            current_cycle_day: SEED_CYCLE_DAY,
            total_bought_qty,
            avg_price: total_invested / total_bought_qty as f64,
            total_invested,
        };

        let settings = UserSettings {
            created_at: stamp.to_string(),
            updated_at: stamp.to_string(),
            principal: SEED_PRINCIPAL,
            split_count: SEED_SPLIT_COUNT,
            target_rate: SEED_TARGET_RATE,
            symbols: SEED_SYMBOL.to_string(),
            is_active: true,
        };

        SeedScenario {
            settings,
            cycle,
            trades,
        }
    }
}

/// Timestamp format shared by every row the tool writes.
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeSide;

    #[test]
    fn test_trade_amounts_follow_qty_times_price() {
        let scenario = SeedScenario::at("2024-01-02 21:00:00");
        assert_eq!(scenario.trades.len(), 2);
        assert_eq!(scenario.trades[0].amount, 100.0);
        assert_eq!(scenario.trades[1].amount, 400.0);
        for trade in &scenario.trades {
            assert_eq!(trade.amount, trade.qty as f64 * trade.price);
            assert_eq!(trade.side, TradeSide::Buy);
            assert_eq!(trade.order_type, OrderType::Loc);
        }
    }

    #[test]
    fn test_cycle_totals_derive_from_trades() {
        let scenario = SeedScenario::at("2024-01-02 21:00:00");
        let invested: f64 = scenario.trades.iter().map(|t| t.amount).sum();
        assert_eq!(scenario.cycle.total_invested, invested);
        assert_eq!(scenario.cycle.total_invested, 500.0);
        assert_eq!(scenario.cycle.total_bought_qty, 10);
        assert_eq!(scenario.cycle.avg_price, 50.0);
    }

    #[test]
    fn test_settings_literals() {
        let scenario = SeedScenario::at("2024-01-02 21:00:00");
        assert_eq!(scenario.settings.principal, 10000.0);
        assert_eq!(scenario.settings.split_count, 40);
        assert_eq!(scenario.settings.target_rate, 0.10);
        assert_eq!(scenario.settings.symbols, "TQQQ");
        assert!(scenario.settings.is_active);
        assert_eq!(scenario.settings.created_at, "2024-01-02 21:00:00");
    }

    #[test]
    fn test_development_scenario_uses_one_stamp() {
        let scenario = SeedScenario::development();
        let stamp = scenario.settings.created_at.clone();
        assert_eq!(scenario.cycle.created_at, stamp);
        for trade in &scenario.trades {
            assert_eq!(trade.created_at, stamp);
            assert_eq!(trade.date, stamp);
        }
    }
}
