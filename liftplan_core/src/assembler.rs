//! Program assembly.
//!
//! Orchestrates the planner, resolver, selector, and calculators into a
//! complete program: validate the request, plan phases, resolve each
//! week, fill each day's template slots, and prescribe a dose per
//! exercise. Configuration problems abort with an error; per-slot and
//! per-exercise shortfalls only reduce the output.

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::phases::plan_phases;
use crate::progression::cardio::CardioProgression;
use crate::progression::kettlebell::KettlebellProgression;
use crate::progression::suspension::SuspensionProgression;
use crate::progression::weight::WeightProgression;
use crate::progression::ProgressionModel;
use crate::selector::{Selection, Selector};
use crate::stats::compute_statistics;
use crate::templates::{day_loads, day_sequence, default_split, DayTemplate};
use crate::types::*;
use crate::weekly::WeeklyResolver;
use crate::{Error, Result};
use uuid::Uuid;

/// A request for one generated program
#[derive(Clone, Debug)]
pub struct ProgramRequest {
    pub goal: Goal,
    pub total_weeks: u32,
    pub days_per_week: u8,
    /// Split name; the goal's default split when absent
    pub split: Option<String>,
    /// Periodization style; the goal's default style when absent
    pub periodization: Option<PeriodizationStyle>,
    /// Force a progression model for 1RM-based lifts instead of
    /// anchoring them on the weekly resolver
    pub model: Option<ProgressionModel>,
}

impl ProgramRequest {
    pub fn new(goal: Goal, total_weeks: u32, days_per_week: u8) -> Self {
        Self {
            goal,
            total_weeks,
            days_per_week,
            split: None,
            periodization: None,
            model: None,
        }
    }
}

/// Periodization style a goal uses when the request does not name one
fn default_style(goal: Goal) -> PeriodizationStyle {
    match goal {
        Goal::Strength => PeriodizationStyle::Block,
        Goal::Hypertrophy => PeriodizationStyle::Wave,
        Goal::FatLoss => PeriodizationStyle::Linear,
        Goal::Event => PeriodizationStyle::Reverse,
    }
}

/// Builds programs for one client against one catalog
pub struct Assembler<'a> {
    catalog: &'a Catalog,
    profile: &'a ClientProfile,
    config: &'a EngineConfig,
}

impl<'a> Assembler<'a> {
    pub fn new(catalog: &'a Catalog, profile: &'a ClientProfile, config: &'a EngineConfig) -> Self {
        Self {
            catalog,
            profile,
            config,
        }
    }

    /// Generate a complete program, or fail with a configuration error.
    ///
    /// A returned program is never partial: every planned week and day is
    /// present, though individual days may be shorter than their template
    /// when slots cannot be filled safely.
    pub fn generate(&self, request: &ProgramRequest) -> Result<GeneratedProgram> {
        if request.days_per_week == 0 || request.days_per_week > 6 {
            return Err(Error::InvalidConfiguration(format!(
                "days_per_week must be 1-6, got {}",
                request.days_per_week
            )));
        }

        let split = request
            .split
            .clone()
            .unwrap_or_else(|| default_split(request.goal).to_string());
        let templates = day_sequence(&split, request.days_per_week)?;
        let style = request.periodization.unwrap_or_else(|| default_style(request.goal));
        let phases = plan_phases(request.goal, request.total_weeks)?;

        tracing::info!(
            "Generating {:?} program: {} weeks, {} days/week, split '{}', {:?} periodization",
            request.goal,
            request.total_weeks,
            request.days_per_week,
            split,
            style
        );

        let resolver = WeeklyResolver::new(&phases, style, request.total_weeks, self.config);
        let selector = Selector::new(self.catalog);
        let loads = day_loads(request.days_per_week);

        let mut weeks = Vec::with_capacity(request.total_weeks as usize);
        let mut substitutions = Vec::new();

        for week_num in 1..=request.total_weeks {
            let params = resolver.resolve(week_num)?;
            let days = self.build_week_days(
                &selector,
                &templates,
                &loads,
                &params,
                request,
                &mut substitutions,
            );
            weeks.push(GeneratedWeek {
                week: week_num,
                parameters: params,
                days,
            });
        }

        let statistics = compute_statistics(&weeks, request.total_weeks);

        Ok(GeneratedProgram {
            id: Uuid::new_v4(),
            client_name: self.profile.name.clone(),
            goal: request.goal,
            periodization: style,
            total_weeks: request.total_weeks,
            days_per_week: request.days_per_week,
            phases,
            weeks,
            substitutions,
            statistics,
        })
    }

    fn build_week_days(
        &self,
        selector: &Selector<'a>,
        templates: &[&'static DayTemplate],
        loads: &[DayLoad],
        params: &WeekParameters,
        request: &ProgramRequest,
        substitutions: &mut Vec<Substitution>,
    ) -> Vec<GeneratedDay> {
        let mut days = Vec::with_capacity(templates.len());

        for (idx, template) in templates.iter().enumerate() {
            let load = loads.get(idx).copied().unwrap_or(DayLoad::Medium);
            let selections = selector.select_for_day(
                template.slots,
                &self.profile.equipment,
                &self.profile.constraints,
                self.profile.experience.max_difficulty(),
            );

            let mut exercises = Vec::with_capacity(selections.len());
            for (order, selection) in selections.iter().enumerate() {
                let prescription = self.prescribe(selection.exercise, params, load, request);
                if let Some(substitute) = selection.substitute {
                    substitutions.push(Substitution {
                        original_id: selection.exercise.id.clone(),
                        substitute_id: substitute.id.clone(),
                    });
                }
                exercises.push(instance_from(selection, order as u8 + 1, prescription));
            }

            let total_sets: u16 = exercises
                .iter()
                .map(|e| u16::from(e.prescription.sets))
                .sum();

            days.push(GeneratedDay {
                day: idx as u8 + 1,
                name: format!("Day {}: {}", idx + 1, template.label),
                day_type: template.day_type.to_string(),
                load,
                exercises,
                estimated_minutes: total_sets * 4,
            });
        }

        days
    }

    /// Pick the calculator matching the exercise's load expression
    fn prescribe(
        &self,
        exercise: &ExerciseDefinition,
        params: &WeekParameters,
        load: DayLoad,
        request: &ProgramRequest,
    ) -> Prescription {
        match exercise.load_type {
            LoadType::Weight => match exercise.kettlebell_kind {
                Some(kind) => self.prescribe_kettlebell(kind, params),
                None => self.prescribe_weighted(exercise, params, load, request),
            },
            LoadType::Level => self.prescribe_suspension(exercise, params),
            LoadType::Intervals => self.prescribe_intervals(params),
            LoadType::Reps | LoadType::Time => self.prescribe_rep_range(exercise, params),
        }
    }

    fn prescribe_weighted(
        &self,
        exercise: &ExerciseDefinition,
        params: &WeekParameters,
        load: DayLoad,
        request: &ProgramRequest,
    ) -> Prescription {
        let one_rm = exercise
            .one_rm_key
            .as_deref()
            .and_then(|key| self.profile.one_rm_for(key));

        let Some(one_rm) = one_rm else {
            // No capacity data for this lift: fall back to its rep range
            tracing::debug!(
                "No one-rep max for '{}'; prescribing by rep range",
                exercise.id
            );
            return self.prescribe_rep_range(exercise, params);
        };

        let wp = WeightProgression::new(
            one_rm,
            request.goal,
            self.config.rounding.barbell_step_kg,
            &self.config.tables,
            &self.config.deload,
            &self.config.wave,
        );

        let computed = match request.model {
            Some(model) => wp.model_params(
                model,
                params.week,
                request.total_weeks,
                load,
                params.is_deload,
            ),
            None => wp.params_at_intensity(params.intensity_percent, load, params.is_deload),
        };

        Prescription {
            intensity_percent: Some(computed.intensity_percent),
            weight_kg: Some(computed.weight_kg),
            reps: RepScheme::Fixed(computed.reps),
            sets: computed.sets,
            rest_seconds: computed.rest_seconds,
            rpe: computed.rpe,
            level: None,
            intervals: None,
            note: None,
        }
    }

    fn prescribe_kettlebell(
        &self,
        kind: KettlebellKind,
        params: &WeekParameters,
    ) -> Prescription {
        let kb = KettlebellProgression::new(
            &self.profile.kettlebell_weights,
            self.profile.gender,
            self.profile.experience,
        );
        let computed = kb.params_for(kind, params.week, params.is_deload);

        // At the top of the ladder, tell the client how to keep progressing
        let note = computed.note.or_else(|| {
            kb.progression_alternative(computed.weight_kg, computed.reps, computed.sets)
                .map(|alt| match alt {
                    crate::progression::kettlebell::ProgressionAlternative::AddReps(n) => {
                        format!("Heaviest bell reached: add {n} reps per set to progress")
                    }
                    crate::progression::kettlebell::ProgressionAlternative::AddSet => {
                        "Heaviest bell reached: add a set to progress".to_string()
                    }
                    crate::progression::kettlebell::ProgressionAlternative::SwitchToUnilateral => {
                        "Heaviest bell reached: switch to single-arm work".to_string()
                    }
                })
        });

        Prescription {
            intensity_percent: None,
            weight_kg: Some(computed.weight_kg),
            reps: RepScheme::Fixed(computed.reps),
            sets: computed.sets,
            rest_seconds: computed.rest_seconds,
            rpe: params.rpe,
            level: None,
            intervals: None,
            note,
        }
    }

    fn prescribe_suspension(
        &self,
        exercise: &ExerciseDefinition,
        params: &WeekParameters,
    ) -> Prescription {
        let band = exercise.level_band.unwrap_or(LevelBand { min: 1, max: 10 });
        let sp = SuspensionProgression::new(self.profile.weight_kg, self.profile.experience);
        let computed = sp.params_for_week(band, params.week, params.is_deload);

        Prescription {
            intensity_percent: None,
            weight_kg: Some(computed.load_kg),
            reps: RepScheme::Fixed(computed.reps),
            sets: computed.sets,
            rest_seconds: computed.rest_seconds,
            rpe: params.rpe,
            level: Some(computed.level),
            intervals: None,
            note: Some(format!("Tempo {}", computed.tempo)),
        }
    }

    fn prescribe_intervals(&self, params: &WeekParameters) -> Prescription {
        let cp = CardioProgression::new(self.profile.experience, self.profile.age);

        if params.is_deload {
            let steady = cp.deload_params();
            return Prescription {
                intensity_percent: None,
                weight_kg: None,
                reps: RepScheme::Fixed(1),
                sets: 1,
                rest_seconds: 0,
                rpe: params.rpe,
                level: None,
                intervals: None,
                note: Some(format!(
                    "{} min easy, {}% max HR",
                    steady.duration_seconds / 60,
                    (steady.target_hr_fraction * 100.0) as u16
                )),
            };
        }

        let block = cp.interval_params(params.week);
        Prescription {
            intensity_percent: None,
            weight_kg: None,
            reps: RepScheme::Fixed(1),
            sets: block.rounds,
            rest_seconds: block.rest_seconds,
            rpe: params.rpe,
            level: None,
            intervals: Some(block),
            note: None,
        }
    }

    /// Generic rep-range dose for bodyweight and timed work, and the
    /// fallback when a lift has no known one-rep max
    fn prescribe_rep_range(
        &self,
        exercise: &ExerciseDefinition,
        params: &WeekParameters,
    ) -> Prescription {
        let (lo, hi) = exercise.recommended_reps;
        let sets = if params.is_deload {
            2
        } else if params.volume_percent >= 100.0 {
            4
        } else if params.volume_percent >= 80.0 {
            3
        } else {
            2
        };

        let note = (exercise.load_type == LoadType::Time).then(|| "Seconds per set".to_string());

        Prescription {
            intensity_percent: None,
            weight_kg: None,
            reps: RepScheme::Range(lo, hi),
            sets,
            rest_seconds: 90,
            rpe: params.rpe.min(8.0),
            level: None,
            intervals: None,
            note,
        }
    }
}

fn instance_from(selection: &Selection<'_>, order: u8, prescription: Prescription) -> ExerciseInstance {
    let primary_muscle = selection
        .exercise
        .primary_muscles
        .first()
        .copied()
        .unwrap_or(MuscleGroup::FullBody);

    ExerciseInstance {
        order,
        exercise_id: selection.exercise.id.clone(),
        exercise_name: selection.exercise.name.clone(),
        muscle: primary_muscle,
        movement: selection.exercise.movement,
        pattern: selection.exercise.pattern,
        prescription,
        substitute: selection.substitute.map(|s| s.id.clone()),
    }
}
