//! Core domain logic for the garage repair tracker.
//! This crate is the single source of truth for repair-record invariants.

pub mod console;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use console::{paint, Color, Console};
pub use db::{open_db, open_db_in_memory, DbError, DbResult, Store};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::repair::{NewRepair, RepairId, RepairRecord, SeedRepair, WaitingCar, DEMO_REPAIRS};
pub use repo::garage_repo::{GarageRepository, RepoError, RepoResult, SqliteGarageRepository};
pub use service::garage_service::{
    ErrorKind, GarageError, GarageResult, GarageService, PickupNotice, Precondition, SetupReport,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
