//! Garage table definition.
//!
//! # Invariants
//! - `car_number` is the business key and carries a UNIQUE constraint.
//! - `fixed` is stored as 0/1 and defaults to 0.

use super::DbResult;
use rusqlite::Connection;

pub const GARAGE_TABLE: &str = "garage";

pub const CREATE_GARAGE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS garage (
    fix_id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_number TEXT UNIQUE NOT NULL,
    car_problem TEXT NOT NULL,
    fixed BOOLEAN DEFAULT FALSE,
    owner_ph TEXT NOT NULL
);";

/// Creates the `garage` table when it does not exist yet.
pub fn ensure_garage_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_GARAGE_TABLE_SQL)?;
    Ok(())
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
