//! Intensity breakpoint tables.
//!
//! The classic coaching lookups (intensity -> reps, RPE, sets, rest) are
//! kept as explicit ordered breakpoint data rather than embedded match
//! arms, so every progression model shares one source of truth and a
//! config file can swap the values without touching code.

use serde::{Deserialize, Serialize};

/// One row of a breakpoint table: applies to intensities >= `min_intensity`
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Breakpoint {
    pub min_intensity: f64,
    pub value: f64,
}

/// Ordered lookup over descending intensity thresholds.
///
/// Lookup returns the value of the highest threshold the query meets;
/// queries below every threshold get the fallback value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BreakpointTable {
    pub fallback: f64,
    pub rows: Vec<Breakpoint>,
}

impl BreakpointTable {
    pub fn new(rows: Vec<(f64, f64)>, fallback: f64) -> Self {
        let mut rows: Vec<Breakpoint> = rows
            .into_iter()
            .map(|(min_intensity, value)| Breakpoint {
                min_intensity,
                value,
            })
            .collect();
        // Descending thresholds, regardless of input order
        rows.sort_by(|a, b| b.min_intensity.total_cmp(&a.min_intensity));
        Self { fallback, rows }
    }

    pub fn lookup(&self, intensity: f64) -> f64 {
        // Highest threshold the query meets wins; order-independent so
        // tables loaded straight from config behave like built ones
        self.rows
            .iter()
            .filter(|row| intensity >= row.min_intensity)
            .max_by(|a, b| a.min_intensity.total_cmp(&b.min_intensity))
            .map_or(self.fallback, |row| row.value)
    }
}

/// The full set of tables the continuous-load calculator consults
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionTables {
    /// Intensity % -> repetitions per set
    pub reps: BreakpointTable,
    /// Intensity % -> target RPE
    pub rpe: BreakpointTable,
    /// Intensity % -> working sets
    pub sets: BreakpointTable,
    /// Intensity % -> rest between sets, seconds
    pub rest_seconds: BreakpointTable,
}

impl Default for PrescriptionTables {
    fn default() -> Self {
        Self {
            reps: BreakpointTable::new(
                vec![
                    (95.0, 1.0),
                    (90.0, 2.0),
                    (87.0, 3.0),
                    (85.0, 4.0),
                    (82.0, 5.0),
                    (80.0, 6.0),
                    (77.0, 7.0),
                    (75.0, 8.0),
                    (72.0, 10.0),
                    (70.0, 12.0),
                ],
                15.0,
            ),
            rpe: BreakpointTable::new(
                vec![
                    (95.0, 9.5),
                    (90.0, 9.0),
                    (85.0, 8.5),
                    (80.0, 8.0),
                    (75.0, 7.5),
                    (70.0, 7.0),
                ],
                6.5,
            ),
            sets: BreakpointTable::new(vec![(90.0, 3.0), (85.0, 4.0), (80.0, 5.0)], 4.0),
            rest_seconds: BreakpointTable::new(
                vec![(90.0, 300.0), (85.0, 240.0), (80.0, 180.0), (70.0, 120.0)],
                90.0,
            ),
        }
    }
}

impl PrescriptionTables {
    pub fn reps_for(&self, intensity: f64) -> u8 {
        self.reps.lookup(intensity) as u8
    }

    pub fn rpe_for(&self, intensity: f64) -> f64 {
        self.rpe.lookup(intensity)
    }

    pub fn sets_for(&self, intensity: f64) -> u8 {
        self.sets.lookup(intensity) as u8
    }

    pub fn rest_for(&self, intensity: f64) -> u16 {
        self.rest_seconds.lookup(intensity) as u16
    }
}
