//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the garage workflow.
//! - Keep console/CLI layers decoupled from storage details.

pub mod garage_service;
