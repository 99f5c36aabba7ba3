//! Garage workflow service.
//!
//! # Responsibility
//! - Provide the setup/add/update-status/delete/list-waiting use-cases.
//! - Translate repository failures into the closed `GarageError` set.
//!
//! # Invariants
//! - A car can only be removed once its repair is fixed.
//! - `fixed` is never flipped back to `false` by this service.
//! - Service layer remains storage-agnostic.

use crate::model::repair::{NewRepair, RepairRecord, SeedRepair, DEMO_REPAIRS};
use crate::repo::garage_repo::{GarageRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GarageResult<T> = Result<T, GarageError>;

/// Category tag for `GarageError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Duplicate,
    NotFound,
    Precondition,
    StoreFailure,
}

/// Why a request was refused for an existing car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Pickup was requested while work is still ongoing.
    RepairInProgress,
    /// Removal was requested for a car that is not fixed yet.
    NotFixed,
}

/// Service error for garage use-cases.
#[derive(Debug)]
pub enum GarageError {
    Duplicate(String),
    NotFound(String),
    Precondition {
        car_number: String,
        reason: Precondition,
    },
    /// Any other store failure, carrying the native error.
    StoreFailure(RepoError),
}

impl GarageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Duplicate(_) => ErrorKind::Duplicate,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Precondition { .. } => ErrorKind::Precondition,
            Self::StoreFailure(_) => ErrorKind::StoreFailure,
        }
    }
}

impl Display for GarageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(car_number) => {
                write!(f, "Car with number {car_number} already exists.")
            }
            Self::NotFound(_) => write!(f, "The car is not in the garage."),
            Self::Precondition { .. } => {
                write!(f, "The repair for this car is not yet completed.")
            }
            Self::StoreFailure(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GarageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StoreFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for GarageError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Duplicate(car_number) => Self::Duplicate(car_number),
            RepoError::NotFound(car_number) => Self::NotFound(car_number),
            other => Self::StoreFailure(other),
        }
    }
}

/// Outcome of `setup`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Seed rows written.
    pub inserted: usize,
    /// Seed car numbers skipped because they already existed.
    pub duplicates: Vec<String>,
}

/// Owner contact details for a car that is ready to leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupNotice {
    pub car_number: String,
    pub owner_phone: String,
}

/// Garage workflow facade over repository implementations.
pub struct GarageService<R: GarageRepository> {
    repo: R,
}

impl<R: GarageRepository> GarageService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates the table if needed, clears it, and seeds the demo rows.
    ///
    /// # Contract
    /// - Safe to call repeatedly; the table always ends with the demo rows.
    /// - A duplicate seed is recorded in the report, not returned as an error.
    pub fn setup(&self) -> GarageResult<SetupReport> {
        self.setup_with(DEMO_REPAIRS)
    }

    /// Same as `setup` with a caller-provided seed list.
    pub fn setup_with(&self, seeds: &[SeedRepair]) -> GarageResult<SetupReport> {
        self.repo.recreate_table()?;
        let cleared = self.repo.clear()?;

        let mut report = SetupReport::default();
        for seed in seeds {
            let repair = NewRepair::new(seed.car_number, seed.problem, seed.owner_phone);
            match self.repo.insert(&repair, seed.fixed) {
                Ok(_) => report.inserted += 1,
                Err(RepoError::Duplicate(car_number)) => {
                    warn!("event=setup_seed module=service status=duplicate car_number={car_number}");
                    report.duplicates.push(car_number);
                }
                Err(err) => return Err(err.into()),
            }
        }

        info!(
            "event=setup module=service status=ok cleared={} inserted={} duplicates={}",
            cleared,
            report.inserted,
            report.duplicates.len()
        );
        Ok(report)
    }

    /// Registers a car with `fixed = false`.
    pub fn add_car(&self, repair: &NewRepair) -> GarageResult<RepairRecord> {
        match self.repo.insert(repair, false) {
            Ok(record) => {
                info!(
                    "event=add_car module=service status=ok id={} car_number={}",
                    record.id, record.car_number
                );
                Ok(record)
            }
            Err(err) => {
                warn!(
                    "event=add_car module=service status=error car_number={} error={}",
                    repair.car_number, err
                );
                Err(err.into())
            }
        }
    }

    /// Checks whether a car is ready for pickup.
    ///
    /// # Contract
    /// - Absent car -> `NotFound`, nothing written.
    /// - Unfixed car -> `Precondition(RepairInProgress)`, nothing written.
    /// - Fixed car -> owner contact; `fixed` is re-stored as `true`.
    pub fn update_status(&self, car_number: &str) -> GarageResult<PickupNotice> {
        let record = self.require_fixed(car_number, Precondition::RepairInProgress)?;
        self.repo.set_fixed(car_number, true)?;
        info!("event=update_status module=service status=ok car_number={car_number}");
        Ok(PickupNotice {
            car_number: record.car_number,
            owner_phone: record.owner_phone,
        })
    }

    /// Removes a fixed car from the garage.
    ///
    /// # Contract
    /// - Absent car -> `NotFound`.
    /// - Unfixed car -> `Precondition(NotFixed)`, row kept.
    /// - Fixed car -> exactly one row deleted.
    pub fn delete_car(&self, car_number: &str) -> GarageResult<PickupNotice> {
        let record = self.require_fixed(car_number, Precondition::NotFixed)?;
        self.repo.delete_by_car_number(car_number)?;
        info!("event=delete_car module=service status=ok car_number={car_number}");
        Ok(PickupNotice {
            car_number: record.car_number,
            owner_phone: record.owner_phone,
        })
    }

    /// Marks a car's repair work as done.
    ///
    /// Idempotent for cars that are already fixed.
    pub fn complete_repair(&self, car_number: &str) -> GarageResult<RepairRecord> {
        let mut record = self
            .repo
            .find_by_car_number(car_number)?
            .ok_or_else(|| GarageError::NotFound(car_number.to_string()))?;

        if !record.fixed {
            self.repo.set_fixed(car_number, true)?;
            record.fixed = true;
        }

        info!("event=complete_repair module=service status=ok car_number={car_number}");
        Ok(record)
    }

    /// Lists cars still waiting for repair, oldest first.
    pub fn list_waiting(&self) -> GarageResult<Vec<RepairRecord>> {
        Ok(self.repo.list_waiting()?)
    }

    /// Lists every car in insertion order.
    pub fn list_all(&self) -> GarageResult<Vec<RepairRecord>> {
        Ok(self.repo.list_all()?)
    }

    pub fn count(&self) -> GarageResult<usize> {
        Ok(self.repo.count()?)
    }

    fn require_fixed(&self, car_number: &str, reason: Precondition) -> GarageResult<RepairRecord> {
        let record = match self.repo.find_by_car_number(car_number)? {
            Some(record) => record,
            None => {
                warn!("event=lookup module=service status=not_found car_number={car_number}");
                return Err(GarageError::NotFound(car_number.to_string()));
            }
        };

        if !record.fixed {
            warn!(
                "event=lookup module=service status=precondition_failed car_number={} reason={:?}",
                car_number, reason
            );
            return Err(GarageError::Precondition {
                car_number: record.car_number,
                reason,
            });
        }

        Ok(record)
    }
}
