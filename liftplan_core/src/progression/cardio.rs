//! Cardio and metabolic progression.
//!
//! Not 1RM-based: parameters are work/rest interval durations, session
//! length, and a target fraction of the age-predicted maximum heart rate,
//! each rising monotonically with the week number up to a cap.

use crate::types::{Experience, IntervalBlock};

/// Safe floor for the age-predicted max heart rate estimate
const MIN_MAX_HR: u16 = 160;

/// Named heart-rate zones as fractions of max HR
pub const HR_ZONES: [(&str, f64, f64); 5] = [
    ("recovery", 0.50, 0.60),
    ("fat_burn", 0.60, 0.70),
    ("aerobic", 0.70, 0.80),
    ("threshold", 0.80, 0.90),
    ("anaerobic", 0.90, 1.00),
];

/// Steady-state session dose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteadyStateParams {
    pub duration_seconds: u32,
    pub target_hr_fraction: f64,
}

/// Calculator for one client's cardio work
pub struct CardioProgression {
    experience: Experience,
    max_hr: u16,
}

impl CardioProgression {
    pub fn new(experience: Experience, age: u8) -> Self {
        let max_hr = (220u16.saturating_sub(u16::from(age))).max(MIN_MAX_HR);
        Self { experience, max_hr }
    }

    pub fn max_hr(&self) -> u16 {
        self.max_hr
    }

    /// BPM bounds for a named zone; unknown names get the aerobic zone
    pub fn hr_zone(&self, name: &str) -> (u16, u16) {
        let (_, lo, hi) = HR_ZONES
            .iter()
            .find(|(zone, _, _)| *zone == name)
            .copied()
            .unwrap_or(("aerobic", 0.70, 0.80));
        (
            (f64::from(self.max_hr) * lo) as u16,
            (f64::from(self.max_hr) * hi) as u16,
        )
    }

    /// Low-intensity steady state: base duration by experience, +5 minutes
    /// every 2 weeks, capped at 60 minutes
    pub fn steady_state_params(&self, week: u32) -> SteadyStateParams {
        let base_minutes = match self.experience {
            Experience::Beginner => 20,
            Experience::Intermediate => 30,
            Experience::Advanced => 40,
        };
        let bonus_minutes = (week.saturating_sub(1) / 2) * 5;
        let minutes = (base_minutes + bonus_minutes).min(60);

        SteadyStateParams {
            duration_seconds: minutes * 60,
            target_hr_fraction: 0.65,
        }
    }

    /// High-intensity intervals: work/rest/rounds by experience, one round
    /// added every 3 weeks, capped at 15 rounds
    pub fn interval_params(&self, week: u32) -> IntervalBlock {
        let (work_seconds, rest_seconds, rounds) = match self.experience {
            Experience::Beginner => (20, 40, 6u8),
            Experience::Intermediate => (30, 30, 8),
            Experience::Advanced => (40, 20, 10),
        };
        let bonus = (week.saturating_sub(1) / 3).min(u32::from(u8::MAX)) as u8;
        let rounds = rounds.saturating_add(bonus).min(15);

        IntervalBlock {
            work_seconds,
            rest_seconds,
            rounds,
            target_hr_fraction: 0.85,
        }
    }

    /// Deload: shortest steady-state session at an easy heart rate
    pub fn deload_params(&self) -> SteadyStateParams {
        SteadyStateParams {
            duration_seconds: 20 * 60,
            target_hr_fraction: 0.60,
        }
    }
}
