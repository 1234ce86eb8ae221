//! Progression calculators.
//!
//! Pure functions from (capacity, week, day class) to a concrete dose,
//! split by how the equipment expresses load:
//! - `weight`: continuous loads from a one-rep max (barbell/dumbbell/machine)
//! - `kettlebell`: discrete weight ladders
//! - `suspension`: leverage levels against bodyweight
//! - `cardio`: durations, intervals, and heart-rate targets
//! - `tables`: the shared intensity breakpoint lookups

pub mod cardio;
pub mod kettlebell;
pub mod suspension;
pub mod tables;
pub mod weight;

use serde::{Deserialize, Serialize};

/// Selectable week-to-week loading model for continuous-load equipment
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionModel {
    /// Fixed weight increment per week
    Linear,
    /// Intensity interpolated from start to end percentage
    Percentage,
    /// Repeating 3-week light/medium/heavy cycle with a rising baseline
    Wave,
    /// Reps climb across a 4-week cycle before intensity steps up
    DoubleProgression,
    /// Three rising weeks, then a mandatory light fourth
    StepLoading,
}
