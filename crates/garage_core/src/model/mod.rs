//! Garage domain model.
//!
//! # Responsibility
//! - Define the canonical repair record shared by every layer.
//! - Hold the fixed demo rows used by setup.
//!
//! # Invariants
//! - `car_number` identifies a record; `id` is assigned by storage.
//! - `fixed` only moves from `false` to `true` within a record's lifetime.

pub mod repair;
