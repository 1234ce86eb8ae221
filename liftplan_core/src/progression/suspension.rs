//! Leverage-based progression for suspension trainers.
//!
//! Capacity is the client's bodyweight; difficulty is an ordinal leverage
//! level from 1 to 10, each mapping to a fixed fraction of bodyweight as
//! effective load. Levels advance roughly one step every 2-3 weeks,
//! clamped to the band the exercise declares.

use crate::types::{Experience, LevelBand};

/// Fraction of bodyweight felt at each leverage level (index 0 = level 1)
const LEVEL_LOAD_FRACTIONS: [f64; 10] = [
    0.15, 0.25, 0.35, 0.42, 0.50, 0.58, 0.65, 0.72, 0.80, 0.85,
];

/// Levels advance at ~0.4 per week, one step every 2.5 weeks
const LEVEL_ADVANCE_PER_WEEK: f64 = 0.4;

/// Dose for a suspension-trainer exercise
#[derive(Clone, Debug, PartialEq)]
pub struct SuspensionParams {
    /// Leverage level 1-10
    pub level: u8,
    /// Effective load at that level for this client, kg
    pub load_kg: f64,
    pub reps: u8,
    pub sets: u8,
    /// Eccentric-pause-concentric-pause seconds
    pub tempo: &'static str,
    pub rest_seconds: u16,
}

/// Calculator for one client's suspension work
pub struct SuspensionProgression {
    bodyweight_kg: f64,
    experience: Experience,
}

impl SuspensionProgression {
    pub fn new(bodyweight_kg: f64, experience: Experience) -> Self {
        Self {
            bodyweight_kg,
            experience,
        }
    }

    /// Starting level within an exercise's band: beginners at the band
    /// minimum, intermediates a third of the way up, advanced two thirds up
    pub fn start_level(&self, band: LevelBand) -> u8 {
        let span = band.max.saturating_sub(band.min);
        let offset = match self.experience {
            Experience::Beginner => 0,
            Experience::Intermediate => span / 3,
            Experience::Advanced => span * 2 / 3,
        };
        (band.min + offset).clamp(band.min, band.max)
    }

    /// Level reached by a given week, clamped to the exercise band
    pub fn level_for_week(&self, band: LevelBand, week: u32) -> u8 {
        let start = self.start_level(band);
        let bonus = ((week.saturating_sub(1)) as f64 * LEVEL_ADVANCE_PER_WEEK) as u8;
        start.saturating_add(bonus).clamp(band.min, band.max)
    }

    /// Effective load in kg at a level, for this client's bodyweight
    pub fn load_kg(&self, level: u8) -> f64 {
        let idx = level.clamp(1, 10) as usize - 1;
        (self.bodyweight_kg * LEVEL_LOAD_FRACTIONS[idx]).round()
    }

    /// General hypertrophy-style dose: reps fall as the level approaches
    /// the top of the band, tempo slows over the first training weeks
    pub fn params_for_week(&self, band: LevelBand, week: u32, is_deload: bool) -> SuspensionParams {
        let level = if is_deload {
            self.start_level(band)
        } else {
            self.level_for_week(band, week)
        };

        let reps = if is_deload {
            10
        } else {
            reps_for_level(level, band.max)
        };

        SuspensionParams {
            level,
            load_kg: self.load_kg(level),
            reps,
            sets: if is_deload { 2 } else { 3 },
            tempo: tempo_for_week(week),
            rest_seconds: 90,
        }
    }

    /// Strength emphasis: one level higher start, fewer reps, slow tempo
    pub fn strength_params(&self, band: LevelBand, week: u32) -> SuspensionParams {
        let start = self.start_level(band).saturating_add(1).min(band.max);
        let bonus = ((week.saturating_sub(1)) as f64 * LEVEL_ADVANCE_PER_WEEK) as u8;
        let level = start.saturating_add(bonus).clamp(band.min, band.max);

        SuspensionParams {
            level,
            load_kg: self.load_kg(level),
            reps: 6,
            sets: 4,
            tempo: "4-2-2-0",
            rest_seconds: 120,
        }
    }
}

fn reps_for_level(level: u8, band_max: u8) -> u8 {
    let ratio = f64::from(level) / f64::from(band_max.max(1));
    if ratio >= 0.9 {
        8
    } else if ratio >= 0.7 {
        10
    } else if ratio >= 0.5 {
        12
    } else {
        15
    }
}

fn tempo_for_week(week: u32) -> &'static str {
    match week {
        0..=3 => "2-0-2-0",
        4..=6 => "3-1-2-0",
        7..=9 => "4-2-2-0",
        _ => "3-1-2-0",
    }
}
