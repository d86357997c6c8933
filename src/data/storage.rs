//! SQLite access for the tracker's three tables.
//!
//! Reset and seed each run inside one explicit transaction: commit on
//! success, rollback on any error. The schema mirrors what the tracking
//! service itself migrates (`id`/`created_at`/`updated_at`/`deleted_at`
//! base columns on every table).

use std::path::Path;
use std::str::FromStr;

use rusqlite::{params, Connection};
use serde::Serialize;
use tracing::debug;

use crate::data::seed::SeedScenario;
use crate::errors::AppError;
use crate::models::{CycleStatus, OrderType, TradeLog, TradeSide, UserSettings};

/// Row counts for the three tables, in delete order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub user_settings: u64,
    pub trade_logs: u64,
    pub cycle_statuses: u64,
}

impl TableCounts {
    pub fn total(&self) -> u64 {
        self.user_settings + self.trade_logs + self.cycle_statuses
    }
}

/// Open the database file. The schema is expected to exist already
/// (created by the tracking service or by `init_schema`); SQLite will
/// create an empty file for a fresh path, but not missing directories.
pub fn open_database(path: &Path) -> Result<Connection, AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(AppError::DatabaseDirNotFound(parent.display().to_string()));
        }
    }
    let conn = Connection::open(path)?;
    debug!("Opened database at {}", path.display());
    Ok(conn)
}

/// Create the three tables if they do not exist. Idempotent.
pub fn init_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS user_settings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT,
            principal REAL NOT NULL,
            split_count INTEGER NOT NULL,
            target_rate REAL NOT NULL,
            symbols TEXT NOT NULL,
            is_active INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS cycle_statuses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT,
            symbol TEXT NOT NULL,
            current_cycle_day INTEGER NOT NULL,
            total_bought_qty INTEGER NOT NULL,
            avg_price REAL NOT NULL,
            total_invested REAL NOT NULL
        );
        CREATE TABLE IF NOT EXISTS trade_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT,
            date TEXT NOT NULL,
            symbol TEXT NOT NULL,
            side TEXT NOT NULL,
            type TEXT NOT NULL,
            qty INTEGER NOT NULL,
            price REAL NOT NULL,
            amount REAL NOT NULL,
            profit REAL
        );",
    )?;
    Ok(())
}

/// Delete every row from the three tables in one transaction.
/// Returns how many rows each delete removed.
pub fn reset(conn: &mut Connection) -> Result<TableCounts, AppError> {
    let tx = conn.transaction()?;
    let deleted = clear_all(&tx)?;
    tx.commit()?;
    debug!("Reset removed {} rows", deleted.total());
    Ok(deleted)
}

/// Replace the contents of the three tables with the given scenario,
/// all-or-nothing.
pub fn seed(conn: &mut Connection, scenario: &SeedScenario) -> Result<(), AppError> {
    let tx = conn.transaction()?;
    clear_all(&tx)?;
    insert_user_settings(&tx, &scenario.settings)?;
    insert_cycle_status(&tx, &scenario.cycle)?;
    for trade in &scenario.trades {
        insert_trade_log(&tx, trade)?;
    }
    tx.commit()?;
    Ok(())
}

fn clear_all(conn: &Connection) -> Result<TableCounts, AppError> {
    let user_settings = conn.execute("DELETE FROM user_settings", [])? as u64;
    let trade_logs = conn.execute("DELETE FROM trade_logs", [])? as u64;
    let cycle_statuses = conn.execute("DELETE FROM cycle_statuses", [])? as u64;
    Ok(TableCounts {
        user_settings,
        trade_logs,
        cycle_statuses,
    })
}

// ── Inserts ──

pub fn insert_user_settings(conn: &Connection, settings: &UserSettings) -> Result<(), AppError> {
    conn.execute(
        "INSERT INTO user_settings (created_at, updated_at, principal, split_count, target_rate, symbols, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            settings.created_at,
            settings.updated_at,
            settings.principal,
            settings.split_count,
            settings.target_rate,
            settings.symbols,
            settings.is_active,
        ],
    )?;
    Ok(())
}

pub fn insert_cycle_status(conn: &Connection, cycle: &CycleStatus) -> Result<(), AppError> {
    conn.execute(
        "INSERT INTO cycle_statuses (created_at, updated_at, symbol, current_cycle_day, total_bought_qty, avg_price, total_invested)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            cycle.created_at,
            cycle.updated_at,
            cycle.symbol,
            cycle.current_cycle_day,
            cycle.total_bought_qty,
            cycle.avg_price,
            cycle.total_invested,
        ],
    )?;
    Ok(())
}

pub fn insert_trade_log(conn: &Connection, trade: &TradeLog) -> Result<(), AppError> {
    conn.execute(
        "INSERT INTO trade_logs (created_at, updated_at, date, symbol, side, type, qty, price, amount, profit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            trade.created_at,
            trade.updated_at,
            trade.date,
            trade.symbol,
            trade.side.as_str(),
            trade.order_type.as_str(),
            trade.qty,
            trade.price,
            trade.amount,
            trade.profit,
        ],
    )?;
    Ok(())
}

// ── Queries ──

pub fn get_user_settings(conn: &Connection) -> Result<Vec<UserSettings>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT created_at, updated_at, principal, split_count, target_rate, symbols, is_active
         FROM user_settings ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(UserSettings {
            created_at: row.get(0)?,
            updated_at: row.get(1)?,
            principal: row.get(2)?,
            split_count: row.get(3)?,
            target_rate: row.get(4)?,
            symbols: row.get(5)?,
            is_active: row.get(6)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(AppError::from)
}

pub fn get_cycle_statuses(conn: &Connection) -> Result<Vec<CycleStatus>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT created_at, updated_at, symbol, current_cycle_day, total_bought_qty, avg_price, total_invested
         FROM cycle_statuses ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(CycleStatus {
            created_at: row.get(0)?,
            updated_at: row.get(1)?,
            symbol: row.get(2)?,
            current_cycle_day: row.get(3)?,
            total_bought_qty: row.get(4)?,
            avg_price: row.get(5)?,
            total_invested: row.get(6)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(AppError::from)
}

pub fn get_trade_logs(conn: &Connection) -> Result<Vec<TradeLog>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT created_at, updated_at, date, symbol, side, type, qty, price, amount, profit
         FROM trade_logs ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, i64>(6)?,
            row.get::<_, f64>(7)?,
            row.get::<_, f64>(8)?,
            row.get::<_, Option<f64>>(9)?,
        ))
    })?;

    let mut trades = Vec::new();
    for row in rows {
        let (created_at, updated_at, date, symbol, side, order_type, qty, price, amount, profit) =
            row?;
        trades.push(TradeLog {
            created_at,
            updated_at,
            date,
            symbol,
            side: TradeSide::from_str(&side).map_err(AppError::Database)?,
            order_type: OrderType::from_str(&order_type).map_err(AppError::Database)?,
            qty,
            price,
            amount,
            profit,
        });
    }
    Ok(trades)
}

/// Current row count of each table.
pub fn table_counts(conn: &Connection) -> Result<TableCounts, AppError> {
    Ok(TableCounts {
        user_settings: count_rows(conn, "user_settings")?,
        trade_logs: count_rows(conn, "trade_logs")?,
        cycle_statuses: count_rows(conn, "cycle_statuses")?,
    })
}

fn count_rows(conn: &Connection, table: &str) -> Result<u64, AppError> {
    // Table names come from the fixed set above, never from input.
    let count: u64 =
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
    Ok(count)
}

// ══════════════════════════════════════════════════════════════
// Tests
// ══════════════════════════════════════════════════════════════
