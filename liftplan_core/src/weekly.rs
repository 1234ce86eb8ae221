//! Weekly parameter resolution.
//!
//! For a (week, phase, periodization style) tuple this module decides
//! whether the week is a normal or a deload week and computes its target
//! intensity, volume, and RPE. Exactly one deload decision is made per
//! week, in fixed precedence order, so the classification is never
//! ambiguous.

use crate::config::EngineConfig;
use crate::phases::phase_for_week;
use crate::types::{PeriodizationStyle, Phase, WaveSlot, WeekParameters};
use crate::{Error, Result};

/// Resolves per-week training targets for one program
pub struct WeeklyResolver<'a> {
    phases: &'a [Phase],
    style: PeriodizationStyle,
    total_weeks: u32,
    config: &'a EngineConfig,
}

impl<'a> WeeklyResolver<'a> {
    pub fn new(
        phases: &'a [Phase],
        style: PeriodizationStyle,
        total_weeks: u32,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            phases,
            style,
            total_weeks,
            config,
        }
    }

    /// Resolve the parameters for a week in `[1, total_weeks]`
    pub fn resolve(&self, week: u32) -> Result<WeekParameters> {
        let phase = phase_for_week(self.phases, week).ok_or_else(|| {
            Error::InvalidConfiguration(format!(
                "week {week} is outside the planned {} weeks",
                self.total_weeks
            ))
        })?;

        let is_deload = self.classify_deload(week, phase);
        let (wave_slot, wave_index) = self.wave_position(week);

        let normal_intensity = self.normal_intensity(week, phase, wave_slot, wave_index);
        let normal_volume = self.normal_volume(week, phase, wave_slot);

        let (intensity, volume, rpe) = if is_deload {
            (
                normal_intensity * self.config.deload.intensity_factor,
                normal_volume * self.config.deload.volume_factor,
                self.config.deload.rpe,
            )
        } else {
            (
                normal_intensity,
                normal_volume,
                self.config.tables.rpe_for(normal_intensity),
            )
        };

        Ok(WeekParameters {
            week,
            phase_name: phase.name.clone(),
            intensity_percent: intensity,
            volume_percent: volume,
            rpe,
            is_deload,
            wave_slot,
            wave_index,
        })
    }

    /// Deload classification, first matching rule wins:
    /// 1. reverse periodization always tapers the final week;
    /// 2. a week inside a dedicated recovery phase is a deload;
    /// 3. the fixed interval fires, except on the final (peak) week of a
    ///    block-style program.
    fn classify_deload(&self, week: u32, phase: &Phase) -> bool {
        if self.style == PeriodizationStyle::Reverse && week == self.total_weeks {
            return true;
        }
        if phase.kind.is_recovery() {
            return true;
        }

        let interval = self.config.deload.interval_weeks;
        if interval > 0 && week % interval == 0 {
            let block_peak =
                self.style == PeriodizationStyle::Block && week == self.total_weeks;
            return !block_peak;
        }

        false
    }

    fn wave_position(&self, week: u32) -> (Option<WaveSlot>, Option<u32>) {
        if self.style != PeriodizationStyle::Wave {
            return (None, None);
        }
        let slot = match (week - 1) % 3 {
            0 => WaveSlot::Light,
            1 => WaveSlot::Medium,
            _ => WaveSlot::Heavy,
        };
        (Some(slot), Some((week - 1) / 3))
    }

    /// Style formula for a normal week, clamped into the phase bounds
    fn normal_intensity(
        &self,
        week: u32,
        phase: &Phase,
        wave_slot: Option<WaveSlot>,
        wave_index: Option<u32>,
    ) -> f64 {
        let intensity = match self.style {
            PeriodizationStyle::Wave => {
                let slot_steps = match wave_slot.unwrap_or(WaveSlot::Light) {
                    WaveSlot::Light => 0.0,
                    WaveSlot::Medium => 1.0,
                    WaveSlot::Heavy => 2.0,
                };
                let base = phase.intensity_min
                    + wave_index.unwrap_or(0) as f64 * self.config.wave.baseline_increment;
                base + slot_steps * self.config.wave.step_percent
            }
            // Linear, block, and reverse all interpolate between the
            // phase bounds by position within the phase
            _ => {
                let t = self.phase_progress(week, phase);
                phase.intensity_min + (phase.intensity_max - phase.intensity_min) * t
            }
        };

        intensity.clamp(phase.intensity_min, phase.intensity_max)
    }

    /// Volume target for a normal week, in percent of the reference volume
    fn normal_volume(&self, week: u32, phase: &Phase, wave_slot: Option<WaveSlot>) -> f64 {
        let baseline = phase.volume.baseline_percent();

        match self.style {
            // Wave weeks trade volume against the intensity slot
            PeriodizationStyle::Wave => match wave_slot.unwrap_or(WaveSlot::Light) {
                WaveSlot::Light => baseline * 1.1,
                WaveSlot::Medium => baseline,
                WaveSlot::Heavy => baseline * 0.9,
            },
            // Reverse periodization sheds volume across the whole program
            PeriodizationStyle::Reverse => {
                let t = if self.total_weeks > 1 {
                    (week - 1) as f64 / (self.total_weeks - 1) as f64
                } else {
                    0.0
                };
                baseline * (1.0 - 0.25 * t)
            }
            // Volume drifts down within a phase as intensity climbs
            _ => baseline * (1.0 - 0.1 * self.phase_progress(week, phase)),
        }
    }

    fn phase_progress(&self, week: u32, phase: &Phase) -> f64 {
        if phase.week_count() <= 1 {
            1.0
        } else {
            (week - phase.week_start) as f64 / (phase.week_count() - 1) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::plan_phases;
    use crate::types::Goal;
    use rstest::rstest;

    fn resolve_all(
        goal: Goal,
        style: PeriodizationStyle,
        total_weeks: u32,
        config: &EngineConfig,
    ) -> Vec<WeekParameters> {
        let phases = plan_phases(goal, total_weeks).unwrap();
        let resolver = WeeklyResolver::new(&phases, style, total_weeks, config);
        (1..=total_weeks)
            .map(|w| resolver.resolve(w).unwrap())
            .collect()
    }

    #[rstest]
    #[case(PeriodizationStyle::Linear, Goal::Strength)]
    #[case(PeriodizationStyle::Block, Goal::Strength)]
    #[case(PeriodizationStyle::Wave, Goal::Hypertrophy)]
    #[case(PeriodizationStyle::Reverse, Goal::Event)]
    fn test_intensity_stays_in_phase_bounds_on_normal_weeks(
        #[case] style: PeriodizationStyle,
        #[case] goal: Goal,
    ) {
        let config = EngineConfig::default();
        let phases = plan_phases(goal, 12).unwrap();
        let resolver = WeeklyResolver::new(&phases, style, 12, &config);

        for week in 1..=12 {
            let params = resolver.resolve(week).unwrap();
            if params.is_deload {
                continue;
            }
            let phase = phase_for_week(&phases, week).unwrap();
            assert!(
                params.intensity_percent >= phase.intensity_min
                    && params.intensity_percent <= phase.intensity_max,
                "{style:?} week {week}: {} outside [{}, {}]",
                params.intensity_percent,
                phase.intensity_min,
                phase.intensity_max
            );
        }
    }

    #[rstest]
    #[case(PeriodizationStyle::Linear, Goal::Strength)]
    #[case(PeriodizationStyle::Block, Goal::Strength)]
    #[case(PeriodizationStyle::Wave, Goal::Hypertrophy)]
    #[case(PeriodizationStyle::Reverse, Goal::Event)]
    fn test_deload_weeks_drop_below_preceding_week(
        #[case] style: PeriodizationStyle,
        #[case] goal: Goal,
    ) {
        let config = EngineConfig::default();
        let weeks = resolve_all(goal, style, 12, &config);

        for pair in weeks.windows(2) {
            let (prev, current) = (&pair[0], &pair[1]);
            if !current.is_deload || prev.is_deload {
                continue;
            }
            assert!(
                current.intensity_percent < prev.intensity_percent,
                "{style:?} week {}: deload intensity not lower",
                current.week
            );
            assert!(
                current.volume_percent < prev.volume_percent,
                "{style:?} week {}: deload volume not lower",
                current.week
            );
            assert!(
                current.rpe < prev.rpe,
                "{style:?} week {}: deload RPE not lower",
                current.week
            );
        }
    }

    #[test]
    fn test_interval_deload_fires_every_fourth_week() {
        let config = EngineConfig::default();
        let weeks = resolve_all(Goal::Strength, PeriodizationStyle::Linear, 12, &config);
        for params in &weeks {
            assert_eq!(params.is_deload, params.week % 4 == 0, "week {}", params.week);
        }
    }

    #[test]
    fn test_block_style_final_week_is_peak_not_deload() {
        // Week 12 hits the interval rule but is the dedicated peak week
        let config = EngineConfig::default();
        let weeks = resolve_all(Goal::Strength, PeriodizationStyle::Block, 12, &config);
        let last = weeks.last().unwrap();
        assert!(!last.is_deload);
        assert!(last.intensity_percent >= 90.0);
    }

    #[test]
    fn test_realization_final_week_reaches_phase_ceiling() {
        let config = EngineConfig::default();
        let phases = plan_phases(Goal::Strength, 12).unwrap();
        let resolver =
            WeeklyResolver::new(&phases, PeriodizationStyle::Block, 12, &config);
        let last = resolver.resolve(12).unwrap();
        assert_eq!(last.phase_name, "Realization");
        assert!(last.intensity_percent >= 90.0);
    }

    #[test]
    fn test_reverse_style_always_tapers_final_week() {
        let config = EngineConfig::default();
        // 13 weeks: final week is not a multiple of the interval
        let weeks = resolve_all(Goal::Event, PeriodizationStyle::Reverse, 13, &config);
        assert!(weeks.last().unwrap().is_deload);
    }

    #[test]
    fn test_reverse_volume_falls_over_program() {
        let config = EngineConfig::default();
        let weeks = resolve_all(Goal::Event, PeriodizationStyle::Reverse, 12, &config);
        let first_normal = weeks.iter().find(|w| !w.is_deload).unwrap();
        let last_normal = weeks.iter().rev().find(|w| !w.is_deload).unwrap();
        // Within the same volume level a later week never carries more volume
        assert!(last_normal.volume_percent < first_normal.volume_percent * 1.2);
    }

    #[test]
    fn test_wave_slots_cycle_and_baseline_rises() {
        let config = EngineConfig::default();
        let weeks = resolve_all(Goal::Hypertrophy, PeriodizationStyle::Wave, 12, &config);

        assert_eq!(weeks[0].wave_slot, Some(WaveSlot::Light));
        assert_eq!(weeks[1].wave_slot, Some(WaveSlot::Medium));
        assert_eq!(weeks[2].wave_slot, Some(WaveSlot::Heavy));
        assert_eq!(weeks[3].wave_slot, Some(WaveSlot::Light));
        assert_eq!(weeks[0].wave_index, Some(0));
        assert_eq!(weeks[3].wave_index, Some(1));

        // Second wave's light week sits above the first wave's light week
        assert!(weeks[3].is_deload || weeks[0].is_deload
            || weeks[3].intensity_percent > weeks[0].intensity_percent);
    }

    #[test]
    fn test_wave_intensity_capped_at_phase_ceiling() {
        let config = EngineConfig::default();
        let phases = plan_phases(Goal::Hypertrophy, 12).unwrap();
        let resolver = WeeklyResolver::new(&phases, PeriodizationStyle::Wave, 12, &config);
        for week in 1..=12 {
            let params = resolver.resolve(week).unwrap();
            if params.is_deload {
                continue;
            }
            let phase = phase_for_week(&phases, week).unwrap();
            assert!(params.intensity_percent <= phase.intensity_max);
        }
    }

    #[test]
    fn test_out_of_range_week_is_an_error() {
        let config = EngineConfig::default();
        let phases = plan_phases(Goal::Strength, 8).unwrap();
        let resolver =
            WeeklyResolver::new(&phases, PeriodizationStyle::Linear, 8, &config);
        assert!(resolver.resolve(9).is_err());
    }
}
