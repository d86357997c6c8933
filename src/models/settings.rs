use serde::{Deserialize, Serialize};

/// Account-level configuration for the cycle strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub created_at: String,
    pub updated_at: String,
    /// Total investment principal (e.g. 10000.0).
    pub principal: f64,
    /// Number of daily splits the principal is divided into.
    pub split_count: i64,
    /// Target profit rate as a fraction (0.10 = 10%).
    pub target_rate: f64,
    /// Comma-separated symbol list, e.g. "TQQQ,SOXL". Single symbol in practice.
    pub symbols: String,
    pub is_active: bool,
}
