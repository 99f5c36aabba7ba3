//! Interactive console menu.

use crate::operations;
use garage_core::Console;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU_TEXT: &str = "\
Garage menu:
  1) Set up database with demo cars
  2) Add a car
  3) Check repair status
  4) Remove a repaired car
  5) Show cars waiting for repair
  6) Mark a repair as completed
  0) Exit";

/// Menu entry selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Setup,
    AddCar,
    UpdateStatus,
    DeleteCar,
    ShowWaiting,
    CompleteRepair,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Setup),
            "2" => Some(Self::AddCar),
            "3" => Some(Self::UpdateStatus),
            "4" => Some(Self::DeleteCar),
            "5" => Some(Self::ShowWaiting),
            "6" => Some(Self::CompleteRepair),
            "0" | "q" | "quit" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::AddCar => "add_car",
            Self::UpdateStatus => "update_status",
            Self::DeleteCar => "delete_car",
            Self::ShowWaiting => "show_waiting",
            Self::CompleteRepair => "complete_repair",
            Self::Exit => "exit",
        }
    }
}

/// Runs the menu until the user exits or input ends.
///
/// Returns an error only when the console itself fails.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db_path: &Path,
) -> io::Result<()> {
    loop {
        console.plain(MENU_TEXT)?;
        let Some(answer) = console.prompt("Choose an option: ")? else {
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&answer) else {
            console.error(&format!("Unknown option `{}`.", answer.trim()))?;
            continue;
        };
        info!("event=menu_choice module=cli status=ok choice={}", choice.name());

        match choice {
            MenuChoice::Setup => operations::setup(console, db_path)?,
            MenuChoice::AddCar => operations::add_car(console, db_path)?,
            MenuChoice::UpdateStatus => operations::update_status(console, db_path)?,
            MenuChoice::DeleteCar => operations::delete_car(console, db_path)?,
            MenuChoice::ShowWaiting => operations::show_waiting(console, db_path)?,
            MenuChoice::CompleteRepair => operations::complete_repair(console, db_path)?,
            MenuChoice::Exit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run_menu, MenuChoice};
    use garage_core::Console;
    use std::io::Cursor;

    #[test]
    fn parse_maps_digits_and_exit_aliases() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Setup));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::CompleteRepair));
        assert_eq!(MenuChoice::parse("quit"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
    }

    #[test]
    fn menu_runs_a_full_session_and_survives_bad_choices() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("garage.db");
        let input = "1\n7\n2\n88\nNo start\n555-0088\n5\n0\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());

        run_menu(&mut console, &db_path).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Table and data setup complete."));
        assert!(output.contains("\x1b[31mUnknown option `7`."));
        assert!(output.contains("The car has been successfully added to the garage."));
        assert!(output.contains("There are 3 cars waiting for repair:"));
        assert!(output.contains("Car Number: 88, Problem: No start"));
    }

    #[test]
    fn menu_ends_on_end_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("garage.db");
        let mut console = Console::new(Cursor::new(""), Vec::new());

        run_menu(&mut console, &db_path).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.ends_with("Choose an option: "));
    }
}
