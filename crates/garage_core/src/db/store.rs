//! Store session: one owned connection plus executor/reader helpers.

use super::DbResult;
use log::{debug, warn};
use rusqlite::types::Value;
use rusqlite::{Connection, Params};

/// Owned SQLite session.
///
/// Operations borrow the store; the connection is released when the store is
/// closed or dropped, whichever comes first.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub(crate) fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Borrows the underlying connection for repository use.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Executes one INSERT/UPDATE/DELETE (or DDL) statement.
    ///
    /// The connection runs in autocommit mode, so the change is committed as
    /// soon as this returns `Ok`. Returns the number of affected rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> DbResult<usize> {
        let changed = self.conn.execute(sql, params)?;
        debug!("event=db_execute module=db status=ok changed={changed}");
        Ok(changed)
    }

    /// Runs a parameterless SELECT and returns every row.
    ///
    /// Each row holds column values in the order the statement selects them.
    pub fn read(&self, sql: &str) -> DbResult<Vec<Vec<Value>>> {
        let mut stmt = self.conn.prepare(sql)?;
        let column_count = stmt.column_count();
        let mut rows = stmt.query([])?;
        let mut result = Vec::new();

        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(column_count);
            for index in 0..column_count {
                values.push(row.get::<_, Value>(index)?);
            }
            result.push(values);
        }

        debug!("event=db_read module=db status=ok rows={}", result.len());
        Ok(result)
    }

    /// Closes the connection and reports any close failure.
    pub fn close(self) -> DbResult<()> {
        match self.conn.close() {
            Ok(()) => Ok(()),
            Err((_conn, err)) => {
                warn!("event=db_close module=db status=error error={err}");
                Err(err.into())
            }
        }
    }
}
