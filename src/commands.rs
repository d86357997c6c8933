use std::path::Path;

use tracing::info;

use crate::data::seed::SeedScenario;
use crate::data::storage;
use crate::errors::AppError;

// ── Maintenance commands ──
//
// Each command opens its own connection, does its work and prints one
// success line on stdout. The connection closes when it goes out of
// scope, on the error paths included.

/// Create the three tables if they do not exist.
pub fn init(db_path: &Path) -> Result<(), AppError> {
    let conn = storage::open_database(db_path)?;
    storage::init_schema(&conn)?;
    info!("Schema ready at {}", db_path.display());
    println!("Database initialized successfully.");
    Ok(())
}

/// Delete every row from the three tables.
pub fn reset(db_path: &Path) -> Result<(), AppError> {
    let mut conn = storage::open_database(db_path)?;
    let deleted = storage::reset(&mut conn)?;
    info!(
        "Deleted {} settings, {} trade logs, {} cycle statuses",
        deleted.user_settings, deleted.trade_logs, deleted.cycle_statuses
    );
    println!("Database cleaned successfully.");
    Ok(())
}

/// Reset, then insert the fixed development scenario.
pub fn seed(db_path: &Path) -> Result<(), AppError> {
    let mut conn = storage::open_database(db_path)?;
    let scenario = SeedScenario::development();
    storage::seed(&mut conn, &scenario)?;
    info!(
        "Seeded {} at {}: {} trades, {:.2} invested",
        scenario.settings.symbols,
        scenario.settings.created_at,
        scenario.trades.len(),
        scenario.cycle.total_invested
    );
    println!("Database seeded successfully.");
    Ok(())
}

/// Print the row count of each table, optionally as JSON.
pub fn status(db_path: &Path, json: bool) -> Result<(), AppError> {
    let conn = storage::open_database(db_path)?;
    let counts = storage::table_counts(&conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        println!("user_settings:  {}", counts.user_settings);
        println!("cycle_statuses: {}", counts.cycle_statuses);
        println!("trade_logs:     {}", counts.trade_logs);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::storage::{open_database, table_counts};

    #[test]
    fn test_init_then_seed_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");

        init(&path).unwrap();
        seed(&path).unwrap();

        let conn = open_database(&path).unwrap();
        let counts = table_counts(&conn).unwrap();
        assert_eq!(counts.user_settings, 1);
        assert_eq!(counts.cycle_statuses, 1);
        assert_eq!(counts.trade_logs, 2);
    }

    #[test]
    fn test_reset_absorbs_into_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");

        init(&path).unwrap();
        seed(&path).unwrap();
        reset(&path).unwrap();
        seed(&path).unwrap();

        let conn = open_database(&path).unwrap();
        assert_eq!(table_counts(&conn).unwrap().total(), 4);
    }

    #[test]
    fn test_reset_fails_without_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");

        // Fresh file, no tables: the driver error propagates
        assert!(reset(&path).is_err());
    }

    #[test]
    fn test_status_runs_on_empty_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");

        init(&path).unwrap();
        status(&path, false).unwrap();
        status(&path, true).unwrap();
    }
}
