pub mod commands;
pub mod data;
pub mod errors;
pub mod models;

/// Default location of the tracker's SQLite database, relative to the
/// working directory. Overridable with `--db`.
pub const DEFAULT_DB_PATH: &str = "data/db.sqlite";
