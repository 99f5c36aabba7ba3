//! Repair record model.

use serde::{Deserialize, Serialize};

/// Storage-assigned row identity (`garage.fix_id`).
pub type RepairId = i64;

/// One car currently (or formerly) in the garage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairRecord {
    pub id: RepairId,
    /// License plate number; the business key.
    pub car_number: String,
    /// Free-text problem description.
    pub problem: String,
    /// `true` once repair work is complete.
    pub fixed: bool,
    pub owner_phone: String,
}

impl RepairRecord {
    /// Returns whether the car is still waiting for repair.
    pub fn is_waiting(&self) -> bool {
        !self.fixed
    }
}

/// Input for registering a car; new cars always start unfixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRepair {
    pub car_number: String,
    pub problem: String,
    pub owner_phone: String,
}

impl NewRepair {
    pub fn new(
        car_number: impl Into<String>,
        problem: impl Into<String>,
        owner_phone: impl Into<String>,
    ) -> Self {
        Self {
            car_number: car_number.into(),
            problem: problem.into(),
            owner_phone: owner_phone.into(),
        }
    }
}

/// Demo row inserted by setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRepair {
    pub car_number: &'static str,
    pub problem: &'static str,
    pub fixed: bool,
    pub owner_phone: &'static str,
}

pub const DEMO_REPAIRS: &[SeedRepair] = &[
    SeedRepair {
        car_number: "23",
        problem: "Engine overheating after long drives",
        fixed: true,
        owner_phone: "555-1023",
    },
    SeedRepair {
        car_number: "34",
        problem: "Brake pads worn out, needs replacement",
        fixed: true,
        owner_phone: "555-1034",
    },
    SeedRepair {
        car_number: "30",
        problem: "Check engine light on, possible sensor issue",
        fixed: true,
        owner_phone: "555-1030",
    },
    SeedRepair {
        car_number: "24",
        problem: "Battery drains overnight, needs diagnosis",
        fixed: false,
        owner_phone: "555-1024",
    },
    SeedRepair {
        car_number: "3",
        problem: "Strange noise from suspension when turning",
        fixed: false,
        owner_phone: "555-1003",
    },
];

/// Console projection of a waiting car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitingCar {
    pub car_number: String,
    pub problem: String,
}

impl From<&RepairRecord> for WaitingCar {
    fn from(record: &RepairRecord) -> Self {
        Self {
            car_number: record.car_number.clone(),
            problem: record.problem.clone(),
        }
    }
}
