use serde::{Deserialize, Serialize};

/// Direction of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TradeSide::Buy),
            "SELL" => Ok(TradeSide::Sell),
            _ => Err(format!("Unknown trade side: {}", s)),
        }
    }
}

/// Broker order type used for an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Limit,
    /// Limit-on-close, the order type the daily strategy submits.
    Loc,
    Market,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "LIMIT",
            OrderType::Loc => "LOC",
            OrderType::Market => "MARKET",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIMIT" => Ok(OrderType::Limit),
            "LOC" => Ok(OrderType::Loc),
            "MARKET" => Ok(OrderType::Market),
            _ => Err(format!("Unknown order type: {}", s)),
        }
    }
}

/// A record of one executed buy or sell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeLog {
    pub created_at: String,
    pub updated_at: String,
    /// Execution date of the trade.
    pub date: String,
    pub symbol: String,
    pub side: TradeSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub qty: i64,
    pub price: f64,
    /// Notional value of the execution, qty * price.
    pub amount: f64,
    /// Realized profit. Only set for sells.
    pub profit: Option<f64>,
}

impl TradeLog {
    /// Build a buy entry with the amount derived from qty and price.
    pub fn buy(stamp: &str, symbol: &str, order_type: OrderType, qty: i64, price: f64) -> Self {
        TradeLog {
            created_at: stamp.to_string(),
            updated_at: stamp.to_string(),
            date: stamp.to_string(),
            symbol: symbol.to_string(),
            side: TradeSide::Buy,
            order_type,
            qty,
            price,
            amount: qty as f64 * price,
            profit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_and_type_codes_round_trip() {
        for side in [TradeSide::Buy, TradeSide::Sell] {
            assert_eq!(side.as_str().parse::<TradeSide>().unwrap(), side);
        }
        for ot in [OrderType::Limit, OrderType::Loc, OrderType::Market] {
            assert_eq!(ot.as_str().parse::<OrderType>().unwrap(), ot);
        }
        assert!("HOLD".parse::<TradeSide>().is_err());
        assert!("FOK".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_trade_log_serializes_stored_codes() {
        let trade = TradeLog::buy("2024-01-02 21:00:00", "TQQQ", OrderType::Loc, 2, 50.0);
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["side"], "BUY");
        assert_eq!(json["type"], "LOC");
        assert_eq!(json["amount"], 100.0);
        assert!(json["profit"].is_null());
    }

    #[test]
    fn test_buy_derives_amount() {
        let trade = TradeLog::buy("2024-01-02 21:00:00", "TQQQ", OrderType::Loc, 8, 50.0);
        assert_eq!(trade.amount, 400.0);
        assert_eq!(trade.created_at, trade.updated_at);
    }
}
