//! Garage repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `garage` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - All user-supplied values are bound as parameters, never interpolated.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Lists are ordered by `fix_id`, i.e. insertion order.

use crate::db::schema::CREATE_GARAGE_TABLE_SQL;
use crate::db::{DbError, Store};
use crate::model::repair::{NewRepair, RepairRecord};
use rusqlite::types::Value;
use rusqlite::{params, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const GARAGE_SELECT_SQL: &str = "SELECT
    fix_id,
    car_number,
    car_problem,
    fixed,
    owner_ph
FROM garage";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for garage persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// `car_number` already exists.
    Duplicate(String),
    NotFound(String),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(car_number) => {
                write!(f, "car with number {car_number} already exists")
            }
            Self::NotFound(car_number) => write!(f, "car not found: {car_number}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted garage data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Duplicate(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for garage records.
pub trait GarageRepository {
    /// Creates the table if it does not exist yet.
    fn recreate_table(&self) -> RepoResult<()>;
    /// Removes every row; returns how many were removed.
    fn clear(&self) -> RepoResult<usize>;
    fn insert(&self, repair: &NewRepair, fixed: bool) -> RepoResult<RepairRecord>;
    fn find_by_car_number(&self, car_number: &str) -> RepoResult<Option<RepairRecord>>;
    fn set_fixed(&self, car_number: &str, fixed: bool) -> RepoResult<()>;
    fn delete_by_car_number(&self, car_number: &str) -> RepoResult<()>;
    fn list_waiting(&self) -> RepoResult<Vec<RepairRecord>>;
    fn list_all(&self) -> RepoResult<Vec<RepairRecord>>;
    fn count(&self) -> RepoResult<usize>;
}

/// SQLite-backed garage repository borrowing an open store session.
pub struct SqliteGarageRepository<'store> {
    store: &'store Store,
}

impl<'store> SqliteGarageRepository<'store> {
    pub fn new(store: &'store Store) -> Self {
        Self { store }
    }
}

impl GarageRepository for SqliteGarageRepository<'_> {
    fn recreate_table(&self) -> RepoResult<()> {
        self.store.execute(CREATE_GARAGE_TABLE_SQL, [])?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<usize> {
        Ok(self.store.execute("DELETE FROM garage;", [])?)
    }

    fn insert(&self, repair: &NewRepair, fixed: bool) -> RepoResult<RepairRecord> {
        let result = self.store.execute(
            "INSERT INTO garage (car_number, car_problem, fixed, owner_ph)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                repair.car_number.as_str(),
                repair.problem.as_str(),
                fixed,
                repair.owner_phone.as_str(),
            ],
        );

        match result {
            Ok(_) => {}
            Err(err) if err.is_unique_violation() => {
                return Err(RepoError::Duplicate(repair.car_number.clone()));
            }
            Err(err) => return Err(err.into()),
        }

        Ok(RepairRecord {
            id: self.store.connection().last_insert_rowid(),
            car_number: repair.car_number.clone(),
            problem: repair.problem.clone(),
            fixed,
            owner_phone: repair.owner_phone.clone(),
        })
    }

    fn find_by_car_number(&self, car_number: &str) -> RepoResult<Option<RepairRecord>> {
        let mut stmt = self
            .store
            .connection()
            .prepare(&format!("{GARAGE_SELECT_SQL} WHERE car_number = ?1;"))?;

        let row = stmt
            .query_row([car_number], |row| Ok(parse_repair_row(row)))
            .optional()?;
        row.transpose()
    }

    fn set_fixed(&self, car_number: &str, fixed: bool) -> RepoResult<()> {
        let changed = self.store.execute(
            "UPDATE garage SET fixed = ?1 WHERE car_number = ?2;",
            params![fixed, car_number],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(car_number.to_string()));
        }

        Ok(())
    }

    fn delete_by_car_number(&self, car_number: &str) -> RepoResult<()> {
        let changed = self
            .store
            .execute("DELETE FROM garage WHERE car_number = ?1;", [car_number])?;

        if changed == 0 {
            return Err(RepoError::NotFound(car_number.to_string()));
        }

        Ok(())
    }

    fn list_waiting(&self) -> RepoResult<Vec<RepairRecord>> {
        let rows = self
            .store
            .read(&format!("{GARAGE_SELECT_SQL} WHERE fixed = 0 ORDER BY fix_id ASC;"))?;
        rows.into_iter().map(parse_repair_values).collect()
    }

    fn list_all(&self) -> RepoResult<Vec<RepairRecord>> {
        let mut stmt = self
            .store
            .connection()
            .prepare(&format!("{GARAGE_SELECT_SQL} ORDER BY fix_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_repair_row(row)?);
        }

        Ok(records)
    }

    fn count(&self) -> RepoResult<usize> {
        let count: i64 =
            self.store
                .connection()
                .query_row("SELECT COUNT(*) FROM garage;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }
}

fn parse_repair_row(row: &Row<'_>) -> RepoResult<RepairRecord> {
    Ok(RepairRecord {
        id: row.get("fix_id")?,
        car_number: row.get("car_number")?,
        problem: row.get("car_problem")?,
        fixed: parse_fixed(row.get::<_, i64>("fixed")?)?,
        owner_phone: row.get("owner_ph")?,
    })
}

/// Converts one reader row (`fix_id, car_number, car_problem, fixed, owner_ph`).
fn parse_repair_values(values: Vec<Value>) -> RepoResult<RepairRecord> {
    let mut values = values.into_iter();
    let mut next = |column: &str| {
        values
            .next()
            .ok_or_else(|| RepoError::InvalidData(format!("missing column garage.{column}")))
    };

    let id = match next("fix_id")? {
        Value::Integer(id) => id,
        other => return Err(unexpected_value("fix_id", &other)),
    };
    let car_number = expect_text("car_number", next("car_number")?)?;
    let problem = expect_text("car_problem", next("car_problem")?)?;
    let fixed = match next("fixed")? {
        Value::Integer(value) => parse_fixed(value)?,
        other => return Err(unexpected_value("fixed", &other)),
    };
    let owner_phone = expect_text("owner_ph", next("owner_ph")?)?;

    Ok(RepairRecord {
        id,
        car_number,
        problem,
        fixed,
        owner_phone,
    })
}

fn expect_text(column: &str, value: Value) -> RepoResult<String> {
    match value {
        Value::Text(text) => Ok(text),
        other => Err(unexpected_value(column, &other)),
    }
}

fn unexpected_value(column: &str, value: &Value) -> RepoError {
    RepoError::InvalidData(format!(
        "unexpected {:?} value in garage.{column}",
        value.data_type()
    ))
}

fn parse_fixed(value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid fixed value `{other}` in garage.fixed"
        ))),
    }
}
