//! Prompt-driven garage procedures.
//!
//! # Responsibility
//! - Collect user input, call the core service, and print colored feedback.
//! - Open one store per procedure and release it before returning.
//!
//! # Invariants
//! - Service and store errors are printed, never returned; only console I/O
//!   failures propagate to the caller.

use garage_core::{
    open_db, Console, GarageError, GarageResult, GarageService, NewRepair, SqliteGarageRepository,
    WaitingCar,
};
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::Path;

const CAR_NUMBER_PROMPT: &str = "Enter car license plate number: ";
const PROBLEM_PROMPT: &str = "Enter car problem: ";
const OWNER_PHONE_PROMPT: &str = "Enter car owner's phone number: ";

/// Opens a store at `db_path`, runs `op` against a service, then closes it.
///
/// The store is dropped on every early return, so the connection never
/// outlives the procedure.
fn with_service<T>(
    db_path: &Path,
    op: impl FnOnce(&GarageService<SqliteGarageRepository<'_>>) -> GarageResult<T>,
) -> GarageResult<T> {
    let store = open_db(db_path).map_err(|err| GarageError::StoreFailure(err.into()))?;
    let result = op(&GarageService::new(SqliteGarageRepository::new(&store)));
    if let Err(err) = store.close() {
        warn!("event=store_close module=cli status=error error={err}");
    }
    result
}

/// Recreates the table, clears it, and seeds the demo rows.
pub fn setup<R: BufRead, W: Write>(console: &mut Console<R, W>, db_path: &Path) -> io::Result<()> {
    match with_service(db_path, |service| service.setup()) {
        Ok(report) => {
            for car_number in &report.duplicates {
                console.plain(&format!("Car with number {car_number} already exists."))?;
            }
            console.info("Table and data setup complete.")
        }
        Err(err) => console.error(&format!("Error: {err}")),
    }
}

/// Prompts for a new car and registers it as awaiting repair.
pub fn add_car<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db_path: &Path,
) -> io::Result<()> {
    let Some(car_number) = console.prompt(CAR_NUMBER_PROMPT)? else {
        return Ok(());
    };
    let Some(problem) = console.prompt(PROBLEM_PROMPT)? else {
        return Ok(());
    };
    let Some(owner_phone) = console.prompt(OWNER_PHONE_PROMPT)? else {
        return Ok(());
    };

    let repair = NewRepair::new(car_number, problem, owner_phone);
    match with_service(db_path, |service| service.add_car(&repair)) {
        Ok(_) => console.info("The car has been successfully added to the garage."),
        Err(err) => console.error(&format!("Error adding the car: {err}")),
    }
}

/// Checks whether a car is ready and shows the owner's phone if so.
pub fn update_status<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db_path: &Path,
) -> io::Result<()> {
    let Some(car_number) = console.prompt(CAR_NUMBER_PROMPT)? else {
        return Ok(());
    };

    match with_service(db_path, |service| service.update_status(&car_number)) {
        Ok(notice) => {
            console.info(&format!(
                "Please contact the car owner at: {}",
                notice.owner_phone
            ))?;
            console.info("The car repair status has been updated.")
        }
        Err(err) => report_error(console, &err),
    }
}

/// Removes a fixed car from the garage.
pub fn delete_car<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db_path: &Path,
) -> io::Result<()> {
    let Some(car_number) = console.prompt(CAR_NUMBER_PROMPT)? else {
        return Ok(());
    };

    match with_service(db_path, |service| service.delete_car(&car_number)) {
        Ok(notice) => {
            console.info(&format!(
                "Please contact the car owner at: {}",
                notice.owner_phone
            ))?;
            console.info("The car has been successfully removed from the garage.")
        }
        Err(err) => report_error(console, &err),
    }
}

/// Marks the repair of a car as done.
pub fn complete_repair<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db_path: &Path,
) -> io::Result<()> {
    let Some(car_number) = console.prompt(CAR_NUMBER_PROMPT)? else {
        return Ok(());
    };

    match with_service(db_path, |service| service.complete_repair(&car_number)) {
        Ok(record) => console.info(&format!(
            "The repair of car {} is marked as completed.",
            record.car_number
        )),
        Err(err) => report_error(console, &err),
    }
}

/// Prints the count and the (car number, problem) pair of every waiting car.
pub fn show_waiting<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db_path: &Path,
) -> io::Result<()> {
    let waiting = match with_service(db_path, |service| service.list_waiting()) {
        Ok(records) => records.iter().map(WaitingCar::from).collect::<Vec<_>>(),
        Err(err) => return console.error(&format!("Error: {err}")),
    };

    if waiting.is_empty() {
        return console.info("No cars are currently waiting for repair.");
    }

    console.info(&format!(
        "There are {} cars waiting for repair:",
        waiting.len()
    ))?;
    for car in &waiting {
        console.plain(&format!(
            "Car Number: {}, Problem: {}",
            car.car_number, car.problem
        ))?;
    }
    Ok(())
}

fn report_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &GarageError,
) -> io::Result<()> {
    match err {
        GarageError::StoreFailure(_) => console.error(&format!("Error: {err}")),
        _ => console.error(&err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{add_car, complete_repair, delete_car, setup, show_waiting, update_status};
    use garage_core::{open_db, Console, GarageRepository, SqliteGarageRepository};
    use std::io::{self, Cursor};
    use std::path::{Path, PathBuf};

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;
    type Procedure = fn(&mut TestConsole, &Path) -> io::Result<()>;

    fn run(procedure: Procedure, input: &str, db_path: &Path) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        procedure(&mut console, db_path).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn row_count(db_path: &Path) -> usize {
        let store = open_db(db_path).unwrap();
        let count = SqliteGarageRepository::new(&store).count().unwrap();
        count
    }

    fn set_fixed(db_path: &Path, car_number: &str) {
        let store = open_db(db_path).unwrap();
        SqliteGarageRepository::new(&store)
            .set_fixed(car_number, true)
            .unwrap();
    }

    fn seeded_db() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("garage.db");
        let output = run(setup, "", &db_path);
        assert!(output.contains("\x1b[34mTable and data setup complete.\x1b[0m"));
        (dir, db_path)
    }

    #[test]
    fn setup_seeds_five_rows_every_time() {
        let (_dir, db_path) = seeded_db();
        assert_eq!(row_count(&db_path), 5);

        run(setup, "", &db_path);
        assert_eq!(row_count(&db_path), 5);
    }

    #[test]
    fn add_car_reports_success_then_duplicate() {
        let (_dir, db_path) = seeded_db();

        let output = run(add_car, "77\nFlat tire\n555-0077\n", &db_path);
        assert!(output.contains("Enter car license plate number: "));
        assert!(output.contains("\x1b[34mThe car has been successfully added to the garage."));
        assert_eq!(row_count(&db_path), 6);

        let output = run(add_car, "77\nOther\n555-0000\n", &db_path);
        assert!(output.contains("\x1b[31mError adding the car: Car with number 77 already exists."));
        assert_eq!(row_count(&db_path), 6);
    }

    #[test]
    fn add_car_stops_quietly_on_end_of_input() {
        let (_dir, db_path) = seeded_db();

        let output = run(add_car, "77\n", &db_path);
        assert!(!output.contains("successfully"));
        assert_eq!(row_count(&db_path), 5);
    }

    #[test]
    fn update_status_covers_missing_unfixed_and_fixed_cars() {
        let (_dir, db_path) = seeded_db();

        let missing = run(update_status, "999\n", &db_path);
        assert!(missing.contains("\x1b[31mThe car is not in the garage."));

        let unfixed = run(update_status, "24\n", &db_path);
        assert!(unfixed.contains("\x1b[31mThe repair for this car is not yet completed."));

        let fixed = run(update_status, "23\n", &db_path);
        assert!(fixed.contains("Please contact the car owner at: 555-1023"));
        assert!(fixed.contains("The car repair status has been updated."));
    }

    #[test]
    fn delete_refuses_unfixed_and_removes_fixed_car() {
        let (_dir, db_path) = seeded_db();

        let refused = run(delete_car, "24\n", &db_path);
        assert!(refused.contains("The repair for this car is not yet completed."));
        assert_eq!(row_count(&db_path), 5);

        set_fixed(&db_path, "24");
        let removed = run(delete_car, "24\n", &db_path);
        assert!(removed.contains("Please contact the car owner at: 555-1024"));
        assert!(removed.contains("The car has been successfully removed from the garage."));
        assert_eq!(row_count(&db_path), 4);

        let again = run(delete_car, "24\n", &db_path);
        assert!(again.contains("The car is not in the garage."));
    }

    #[test]
    fn show_waiting_lists_unfixed_cars_in_insertion_order() {
        let (_dir, db_path) = seeded_db();

        let output = run(show_waiting, "", &db_path);
        assert!(output.contains("There are 2 cars waiting for repair:"));
        let first = output
            .find("Car Number: 24, Problem: Battery drains overnight, needs diagnosis")
            .unwrap();
        let second = output
            .find("Car Number: 3, Problem: Strange noise from suspension when turning")
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn show_waiting_reports_empty_garage() {
        let (_dir, db_path) = seeded_db();
        run(complete_repair, "24\n", &db_path);
        let completed = run(complete_repair, "3\n", &db_path);
        assert!(completed.contains("The repair of car 3 is marked as completed."));

        let output = run(show_waiting, "", &db_path);
        assert!(output.contains("\x1b[34mNo cars are currently waiting for repair."));
    }
}
