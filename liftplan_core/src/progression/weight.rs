//! Continuous-load progression (barbell, dumbbell, machine).
//!
//! Capacity is a one-rep max. Weight is derived from a model- or
//! week-anchored intensity percentage and floored to the equipment's
//! rounding step, and rep/set/rest/RPE targets come from the shared
//! breakpoint tables.

use super::tables::PrescriptionTables;
use super::ProgressionModel;
use crate::config::{DeloadConfig, WaveConfig};
use crate::types::{DayLoad, Goal};

/// Computed dose for one exercise on one day
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadParams {
    pub intensity_percent: f64,
    pub weight_kg: f64,
    pub reps: u8,
    pub sets: u8,
    pub rest_seconds: u16,
    pub rpe: f64,
}

/// Intensity window and weekly increment defaults per goal
#[derive(Clone, Copy, Debug)]
pub struct ModelBounds {
    pub start_intensity: f64,
    pub end_intensity: f64,
    pub weekly_increment_kg: f64,
}

impl ModelBounds {
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Strength => Self {
                start_intensity: 75.0,
                end_intensity: 92.0,
                weekly_increment_kg: 2.5,
            },
            Goal::Hypertrophy => Self {
                start_intensity: 65.0,
                end_intensity: 77.0,
                weekly_increment_kg: 1.5,
            },
            Goal::FatLoss => Self {
                start_intensity: 70.0,
                end_intensity: 80.0,
                weekly_increment_kg: 1.5,
            },
            Goal::Event => Self {
                start_intensity: 72.0,
                end_intensity: 88.0,
                weekly_increment_kg: 2.0,
            },
        }
    }
}

/// Calculator for one lift with a known one-rep max
pub struct WeightProgression<'a> {
    one_rm: f64,
    bounds: ModelBounds,
    step_kg: f64,
    tables: &'a PrescriptionTables,
    deload: &'a DeloadConfig,
    wave: &'a WaveConfig,
}

impl<'a> WeightProgression<'a> {
    pub fn new(
        one_rm: f64,
        goal: Goal,
        step_kg: f64,
        tables: &'a PrescriptionTables,
        deload: &'a DeloadConfig,
        wave: &'a WaveConfig,
    ) -> Self {
        Self {
            one_rm,
            bounds: ModelBounds::for_goal(goal),
            step_kg,
            tables,
            deload,
            wave,
        }
    }

    /// Working weight for an intensity percentage, floored to the step
    pub fn weight_for(&self, intensity: f64) -> f64 {
        round_down_to_step(self.one_rm * intensity / 100.0, self.step_kg)
    }

    /// Dose anchored on an externally resolved week intensity.
    ///
    /// This is the default path: the weekly resolver owns the intensity
    /// trajectory and the calculator fills in reps/sets/rest/RPE. On a
    /// deload week the caller passes the already reduced intensity and the
    /// set/rep/RPE floor is applied here.
    pub fn params_at_intensity(
        &self,
        intensity: f64,
        day_load: DayLoad,
        is_deload: bool,
    ) -> LoadParams {
        if is_deload {
            let intensity = adjust_for_day(intensity, day_load);
            return LoadParams {
                intensity_percent: intensity,
                weight_kg: self.weight_for(intensity),
                reps: 6,
                sets: 3,
                rest_seconds: 120,
                rpe: self.deload.rpe,
            };
        }

        let intensity = adjust_for_day(intensity, day_load);
        self.table_params(intensity)
    }

    /// Dose computed by a selectable progression model.
    ///
    /// The deload override takes precedence over the model formula: the
    /// intensity is a fraction of the model's *starting* intensity, not of
    /// whatever the model would have computed for this week.
    pub fn model_params(
        &self,
        model: ProgressionModel,
        week: u32,
        total_weeks: u32,
        day_load: DayLoad,
        is_deload: bool,
    ) -> LoadParams {
        if is_deload {
            let intensity = self.bounds.start_intensity * self.deload.intensity_factor;
            return LoadParams {
                intensity_percent: intensity,
                weight_kg: self.weight_for(intensity),
                reps: 6,
                sets: 3,
                rest_seconds: 120,
                rpe: self.deload.rpe,
            };
        }

        let params = match model {
            ProgressionModel::Linear => self.linear(week),
            ProgressionModel::Percentage => self.percentage(week, total_weeks),
            ProgressionModel::Wave => self.wave(week),
            ProgressionModel::DoubleProgression => self.double_progression(week),
            ProgressionModel::StepLoading => self.step_loading(week),
        };

        let intensity = adjust_for_day(params.intensity_percent, day_load);
        LoadParams {
            intensity_percent: intensity,
            weight_kg: self.weight_for(intensity),
            ..params
        }
    }

    // Fixed weight increment per week, converted back into intensity and
    // capped at the goal's end intensity
    fn linear(&self, week: u32) -> LoadParams {
        let added_kg = (week - 1) as f64 * self.bounds.weekly_increment_kg;
        let base_kg = self.one_rm * self.bounds.start_intensity / 100.0;
        let intensity =
            ((base_kg + added_kg) / self.one_rm * 100.0).min(self.bounds.end_intensity);

        let mut params = self.table_params(intensity);
        params.sets = 5;
        params
    }

    fn percentage(&self, week: u32, total_weeks: u32) -> LoadParams {
        let t = if total_weeks > 1 {
            (week - 1) as f64 / (total_weeks - 1) as f64
        } else {
            1.0
        };
        let intensity = self.bounds.start_intensity
            + (self.bounds.end_intensity - self.bounds.start_intensity) * t;

        let mut params = self.table_params(intensity);
        params.sets = 4;
        params.rpe = 7.0 + 2.0 * t;
        params
    }

    // 3-week light/medium/heavy cycle; each repetition starts higher
    fn wave(&self, week: u32) -> LoadParams {
        let position = (week - 1) % 3;
        let wave_number = (week - 1) / 3;

        let intensity = (self.bounds.start_intensity
            + wave_number as f64 * self.wave.baseline_increment
            + position as f64 * self.wave.step_percent)
            .min(self.bounds.end_intensity);

        self.table_params(intensity)
    }

    // Reps climb 8 -> 10 -> 12 across the cycle, then the weight steps up
    // and reps reset
    fn double_progression(&self, week: u32) -> LoadParams {
        let position = (week - 1) % 4;
        let cycle = (week - 1) / 4;

        let intensity =
            (self.bounds.start_intensity + cycle as f64 * 2.5).min(self.bounds.end_intensity);
        let reps = [8, 10, 12, 8][position as usize];
        let rpe = [7.5, 8.0, 8.5, 7.5][position as usize];

        LoadParams {
            intensity_percent: intensity,
            weight_kg: self.weight_for(intensity),
            reps,
            sets: 4,
            rest_seconds: self.tables.rest_for(intensity),
            rpe,
        }
    }

    // Three rising weeks, then a mandatory light fourth
    fn step_loading(&self, week: u32) -> LoadParams {
        let position = (week - 1) % 4;
        let block = (week - 1) / 4;
        let block_base = self.bounds.start_intensity + block as f64 * 5.0;

        if position == 3 {
            let intensity = block_base.min(self.bounds.end_intensity);
            return LoadParams {
                intensity_percent: intensity,
                weight_kg: self.weight_for(intensity),
                reps: 6,
                sets: 3,
                rest_seconds: 120,
                rpe: 6.0,
            };
        }

        let intensity = (block_base + position as f64 * 2.5).min(self.bounds.end_intensity);
        let mut params = self.table_params(intensity);
        params.rpe = 7.5 + position as f64 * 0.5;
        params
    }

    fn table_params(&self, intensity: f64) -> LoadParams {
        LoadParams {
            intensity_percent: intensity,
            weight_kg: self.weight_for(intensity),
            reps: self.tables.reps_for(intensity),
            sets: self.tables.sets_for(intensity),
            rest_seconds: self.tables.rest_for(intensity),
            rpe: self.tables.rpe_for(intensity),
        }
    }
}

/// Heavy/medium/light multiplier applied after the base computation
fn adjust_for_day(intensity: f64, day_load: DayLoad) -> f64 {
    match day_load {
        DayLoad::Heavy => intensity * 1.05,
        DayLoad::Medium => intensity,
        DayLoad::Light => intensity * 0.85,
    }
}

/// Round a weight down to the nearest multiple of `step`
pub fn round_down_to_step(weight: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return weight.max(0.0);
    }
    (weight / step).floor() * step
}

// ============================================================================
// One-Rep-Max Estimation
// ============================================================================

/// Formula for estimating a one-rep max from a submaximal set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OneRmFormula {
    Epley,
    Brzycki,
    Lander,
    Lombardi,
    /// Mean of Epley and Brzycki
    Average,
}

/// Estimate a one-rep max from `weight` lifted for `reps`
pub fn estimate_one_rm(weight: f64, reps: u8, formula: OneRmFormula) -> f64 {
    if reps <= 1 {
        return weight;
    }
    let r = f64::from(reps);

    match formula {
        OneRmFormula::Epley => weight * (1.0 + r / 30.0),
        OneRmFormula::Brzycki => weight * (36.0 / (37.0 - r)),
        OneRmFormula::Lander => 100.0 * weight / (101.3 - 2.671_23 * r),
        OneRmFormula::Lombardi => weight * r.powf(0.10),
        OneRmFormula::Average => {
            let epley = weight * (1.0 + r / 30.0);
            let brzycki = weight * (36.0 / (37.0 - r));
            (epley + brzycki) / 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn progression(one_rm: f64, goal: Goal) -> WeightProgression<'static> {
        use once_cell::sync::Lazy;
        static TABLES: Lazy<PrescriptionTables> = Lazy::new(PrescriptionTables::default);
        static DELOAD: Lazy<DeloadConfig> = Lazy::new(DeloadConfig::default);
        static WAVE: Lazy<WaveConfig> = Lazy::new(WaveConfig::default);
        WeightProgression::new(one_rm, goal, 2.5, &TABLES, &DELOAD, &WAVE)
    }

    #[rstest]
    #[case(100.0, 2.5, 100.0)]
    #[case(101.0, 2.5, 100.0)]
    #[case(102.4, 2.5, 100.0)]
    #[case(102.5, 2.5, 102.5)]
    #[case(0.0, 2.5, 0.0)]
    fn test_round_down_to_step(#[case] weight: f64, #[case] step: f64, #[case] expected: f64) {
        assert_eq!(round_down_to_step(weight, step), expected);
    }

    #[test]
    fn test_weight_is_always_a_step_multiple() {
        let wp = progression(137.5, Goal::Strength);
        for intensity in (50..=100).map(f64::from) {
            let weight = wp.weight_for(intensity);
            let ratio = weight / 2.5;
            assert!(
                (ratio - ratio.round()).abs() < 1e-9,
                "{weight} at {intensity}% is not a 2.5 kg multiple"
            );
            assert!(weight >= 0.0);
        }
    }

    #[test]
    fn test_high_intensity_week_prescribes_low_reps() {
        // 140 kg squat at a peak-week intensity resolves to >= 90% and <= 3 reps
        let wp = progression(140.0, Goal::Strength);
        let params = wp.params_at_intensity(95.0, DayLoad::Medium, false);
        assert!(params.intensity_percent >= 90.0);
        assert!(params.reps <= 3);
        assert_eq!(params.weight_kg, 132.5); // floor(133.0 / 2.5) * 2.5
    }

    #[test]
    fn test_linear_model_caps_at_end_intensity() {
        let wp = progression(100.0, Goal::Strength);
        let late = wp.model_params(ProgressionModel::Linear, 40, 40, DayLoad::Medium, false);
        assert!(late.intensity_percent <= 92.0 * 1.0 + 1e-9);
    }

    #[test]
    fn test_linear_model_adds_weight_each_week() {
        let wp = progression(100.0, Goal::Strength);
        let week1 = wp.model_params(ProgressionModel::Linear, 1, 12, DayLoad::Medium, false);
        let week2 = wp.model_params(ProgressionModel::Linear, 2, 12, DayLoad::Medium, false);
        assert!(week2.weight_kg > week1.weight_kg);
        assert_eq!(week2.weight_kg - week1.weight_kg, 2.5);
    }

    #[test]
    fn test_percentage_model_reaches_end_intensity() {
        let wp = progression(100.0, Goal::Strength);
        let last = wp.model_params(ProgressionModel::Percentage, 12, 12, DayLoad::Medium, false);
        assert!((last.intensity_percent - 92.0).abs() < 1e-9);
    }

    #[test]
    fn test_wave_model_cycles_and_rises() {
        let wp = progression(100.0, Goal::Strength);
        let w1 = wp.model_params(ProgressionModel::Wave, 1, 12, DayLoad::Medium, false);
        let w2 = wp.model_params(ProgressionModel::Wave, 2, 12, DayLoad::Medium, false);
        let w3 = wp.model_params(ProgressionModel::Wave, 3, 12, DayLoad::Medium, false);
        let w4 = wp.model_params(ProgressionModel::Wave, 4, 12, DayLoad::Medium, false);

        assert!(w2.intensity_percent > w1.intensity_percent);
        assert!(w3.intensity_percent > w2.intensity_percent);
        // New wave drops back down but starts above the previous light week
        assert!(w4.intensity_percent < w3.intensity_percent);
        assert!(w4.intensity_percent > w1.intensity_percent);
    }

    #[test]
    fn test_double_progression_reps_climb_before_weight() {
        let wp = progression(100.0, Goal::Hypertrophy);
        let reps: Vec<u8> = (1..=4)
            .map(|w| {
                wp.model_params(ProgressionModel::DoubleProgression, w, 12, DayLoad::Medium, false)
                    .reps
            })
            .collect();
        assert_eq!(reps, vec![8, 10, 12, 8]);

        let w1 = wp.model_params(ProgressionModel::DoubleProgression, 1, 12, DayLoad::Medium, false);
        let w5 = wp.model_params(ProgressionModel::DoubleProgression, 5, 12, DayLoad::Medium, false);
        assert!(w5.intensity_percent > w1.intensity_percent);
    }

    #[test]
    fn test_step_loading_fourth_week_is_light() {
        let wp = progression(100.0, Goal::Strength);
        let w3 = wp.model_params(ProgressionModel::StepLoading, 3, 12, DayLoad::Medium, false);
        let w4 = wp.model_params(ProgressionModel::StepLoading, 4, 12, DayLoad::Medium, false);
        assert!(w4.intensity_percent < w3.intensity_percent);
        assert_eq!(w4.reps, 6);
        assert_eq!(w4.sets, 3);
        assert_eq!(w4.rpe, 6.0);
    }

    #[test]
    fn test_deload_override_anchors_on_start_intensity() {
        let wp = progression(100.0, Goal::Strength);
        // Late in a linear run the computed intensity would be near 92%;
        // the deload must ignore that and use start * factor
        let deload = wp.model_params(ProgressionModel::Linear, 11, 12, DayLoad::Medium, true);
        assert!((deload.intensity_percent - 75.0 * 0.65).abs() < 1e-9);
        assert_eq!(deload.reps, 6);
        assert_eq!(deload.sets, 3);
        assert_eq!(deload.rpe, 5.0);
    }

    #[rstest]
    #[case(DayLoad::Heavy, 84.0)]
    #[case(DayLoad::Medium, 80.0)]
    #[case(DayLoad::Light, 68.0)]
    fn test_day_load_adjustment(#[case] day: DayLoad, #[case] expected: f64) {
        assert!((adjust_for_day(80.0, day) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(OneRmFormula::Epley)]
    #[case(OneRmFormula::Brzycki)]
    #[case(OneRmFormula::Lander)]
    #[case(OneRmFormula::Lombardi)]
    #[case(OneRmFormula::Average)]
    fn test_one_rm_estimate_is_identity_for_single(#[case] formula: OneRmFormula) {
        assert_eq!(estimate_one_rm(120.0, 1, formula), 120.0);
    }

    #[test]
    fn test_one_rm_estimates_exceed_lifted_weight() {
        for formula in [
            OneRmFormula::Epley,
            OneRmFormula::Brzycki,
            OneRmFormula::Lander,
            OneRmFormula::Lombardi,
            OneRmFormula::Average,
        ] {
            let estimate = estimate_one_rm(100.0, 5, formula);
            assert!(estimate > 100.0, "{formula:?} gave {estimate}");
            assert!(estimate < 130.0, "{formula:?} gave {estimate}");
        }
    }
}
