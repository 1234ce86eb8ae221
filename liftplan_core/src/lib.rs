#![forbid(unsafe_code)]

//! Core domain model and generation logic for the Liftplan system.
//!
//! This crate provides:
//! - Domain types (exercises, clients, phases, prescriptions, programs)
//! - Exercise catalog with safety metadata and substitutes
//! - Phase planning and weekly parameter resolution
//! - Progression calculators per equipment class
//! - The program assembler and program statistics
//!
//! Generation is a pure, synchronous transformation: one client profile
//! and one request in, one immutable program value out.

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod phases;
pub mod progression;
pub mod selector;
pub mod stats;
pub mod templates;
pub mod types;
pub mod weekly;

// Re-export commonly used types
pub use assembler::{Assembler, ProgramRequest};
pub use catalog::{default_catalog, Catalog, CatalogSource};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use phases::{minimum_weeks, plan_phases};
pub use progression::ProgressionModel;
pub use selector::{Selection, SelectionCriteria, Selector, SlotSpec};
pub use stats::Statistics;
pub use types::*;
pub use weekly::WeeklyResolver;
