use serde::{Deserialize, Serialize};

/// Per-symbol snapshot of a running buy cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleStatus {
    pub created_at: String,
    pub updated_at: String,
    pub symbol: String,
    /// Day within the cycle, 1 to split_count.
    pub current_cycle_day: i64,
    pub total_bought_qty: i64,
    pub avg_price: f64,
    pub total_invested: f64,
}
