pub mod cycle;
pub mod settings;
pub mod trade;

pub use cycle::CycleStatus;
pub use settings::UserSettings;
pub use trade::{OrderType, TradeLog, TradeSide};
