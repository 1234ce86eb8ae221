//! Program statistics and movement-pattern balance.
//!
//! Aggregates a generated program into totals (workouts, sets, tonnage),
//! per-muscle weekly set counts, and the classic balance ratios
//! (push:pull, quad-dominant:hip-dominant, bilateral:unilateral) with an
//! overall 0-100 score.

use crate::types::{
    ExecutionPattern, GeneratedWeek, MovementType, MuscleGroup, RepScheme,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Verdict over the whole program's balance score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BalanceAssessment {
    Excellent,
    Good,
    NeedsAttention,
    Imbalanced,
}

/// Set counts and ratios across movement categories
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MovementBalance {
    pub push_sets: u32,
    pub pull_sets: u32,
    pub quad_sets: u32,
    pub hip_sets: u32,
    pub bilateral_leg_sets: u32,
    pub unilateral_leg_sets: u32,
    pub core_sets: u32,
    pub carry_sets: u32,
    pub cardio_sets: u32,
    /// push:pull; absent when there are no pull sets
    pub push_pull_ratio: Option<f64>,
    /// quad-dominant:hip-dominant; absent when there are no hip sets
    pub quad_hip_ratio: Option<f64>,
    /// bilateral:unilateral lower-body work; absent without unilateral sets
    pub bilateral_ratio: Option<f64>,
    pub score: u8,
    pub assessment: BalanceAssessment,
}

/// Aggregate numbers for a generated program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    pub total_workouts: u32,
    pub total_sets: u32,
    /// Sum of weight x sets x reps over every weighted prescription, kg
    pub total_tonnage_kg: f64,
    pub avg_session_minutes: u16,
    /// Average weekly sets per primary muscle group
    pub weekly_sets_per_muscle: HashMap<MuscleGroup, f64>,
    pub balance: MovementBalance,
}

// Ratio windows: (ideal_min, ideal_max, accept_min, accept_max)
const PUSH_PULL_WINDOW: (f64, f64, f64, f64) = (0.9, 1.1, 0.75, 1.33);
const QUAD_HIP_WINDOW: (f64, f64, f64, f64) = (0.9, 1.2, 0.7, 1.5);
const BI_UNI_WINDOW: (f64, f64, f64, f64) = (1.0, 2.0, 0.5, 3.0);

/// Compute program statistics from the assembled weeks
pub fn compute_statistics(weeks: &[GeneratedWeek], total_weeks: u32) -> Statistics {
    let mut total_workouts = 0u32;
    let mut total_sets = 0u32;
    let mut total_tonnage = 0.0f64;
    let mut total_minutes = 0u32;
    let mut sets_per_muscle: HashMap<MuscleGroup, u32> = HashMap::new();
    let mut balance = BalanceCounter::default();

    for week in weeks {
        for day in &week.days {
            total_workouts += 1;
            total_minutes += u32::from(day.estimated_minutes);
            for ex in &day.exercises {
                let sets = u32::from(ex.prescription.sets);
                total_sets += sets;

                if let Some(weight) = ex.prescription.weight_kg {
                    total_tonnage += weight * f64::from(sets) * rep_midpoint(ex.prescription.reps);
                }

                *sets_per_muscle.entry(ex.muscle).or_default() += sets;
                balance.count(ex.movement, ex.pattern, sets);
            }
        }
    }

    let weekly_sets_per_muscle = sets_per_muscle
        .into_iter()
        .map(|(muscle, sets)| (muscle, f64::from(sets) / f64::from(total_weeks.max(1))))
        .collect();

    let avg_session_minutes = if total_workouts > 0 {
        (total_minutes / total_workouts) as u16
    } else {
        0
    };

    Statistics {
        total_workouts,
        total_sets,
        total_tonnage_kg: total_tonnage,
        avg_session_minutes,
        weekly_sets_per_muscle,
        balance: balance.finish(),
    }
}

fn rep_midpoint(scheme: RepScheme) -> f64 {
    match scheme {
        RepScheme::Fixed(n) => f64::from(n),
        RepScheme::Range(lo, hi) => f64::from(lo + hi) / 2.0,
    }
}

#[derive(Default)]
struct BalanceCounter {
    push: u32,
    pull: u32,
    quad: u32,
    hip: u32,
    bilateral_leg: u32,
    unilateral_leg: u32,
    core: u32,
    carry: u32,
    cardio: u32,
}

impl BalanceCounter {
    fn count(&mut self, movement: MovementType, pattern: ExecutionPattern, sets: u32) {
        match movement {
            MovementType::Push => self.push += sets,
            MovementType::Pull => self.pull += sets,
            MovementType::Squat | MovementType::Lunge => self.quad += sets,
            MovementType::Hinge => self.hip += sets,
            MovementType::Core | MovementType::Rotation => self.core += sets,
            MovementType::Carry => self.carry += sets,
            MovementType::Cardio | MovementType::Plyo => self.cardio += sets,
        }

        if matches!(
            movement,
            MovementType::Squat | MovementType::Lunge | MovementType::Hinge
        ) {
            match pattern {
                ExecutionPattern::Bilateral => self.bilateral_leg += sets,
                ExecutionPattern::Unilateral | ExecutionPattern::Alternating => {
                    self.unilateral_leg += sets
                }
            }
        }
    }

    fn finish(self) -> MovementBalance {
        let push_pull_ratio = ratio(self.push, self.pull);
        let quad_hip_ratio = ratio(self.quad, self.hip);
        let bilateral_ratio = ratio(self.bilateral_leg, self.unilateral_leg);

        let mut score: i32 = 100;
        score -= penalty(push_pull_ratio, self.push, PUSH_PULL_WINDOW);
        score -= penalty(quad_hip_ratio, self.quad, QUAD_HIP_WINDOW);
        score -= penalty(bilateral_ratio, self.bilateral_leg, BI_UNI_WINDOW);
        let score = score.clamp(0, 100) as u8;

        let assessment = match score {
            85..=100 => BalanceAssessment::Excellent,
            70..=84 => BalanceAssessment::Good,
            50..=69 => BalanceAssessment::NeedsAttention,
            _ => BalanceAssessment::Imbalanced,
        };

        MovementBalance {
            push_sets: self.push,
            pull_sets: self.pull,
            quad_sets: self.quad,
            hip_sets: self.hip,
            bilateral_leg_sets: self.bilateral_leg,
            unilateral_leg_sets: self.unilateral_leg,
            core_sets: self.core,
            carry_sets: self.carry,
            cardio_sets: self.cardio,
            push_pull_ratio,
            quad_hip_ratio,
            bilateral_ratio,
            score,
            assessment,
        }
    }
}

fn ratio(first: u32, second: u32) -> Option<f64> {
    (second > 0).then(|| f64::from(first) / f64::from(second))
}

/// 0 inside the ideal window, 10 inside the acceptable window, 25 outside;
/// a category with work on one side only is treated as outside
fn penalty(ratio: Option<f64>, first_sets: u32, window: (f64, f64, f64, f64)) -> i32 {
    let (ideal_min, ideal_max, accept_min, accept_max) = window;
    match ratio {
        Some(r) if (ideal_min..=ideal_max).contains(&r) => 0,
        Some(r) if (accept_min..=accept_max).contains(&r) => 10,
        Some(_) => 25,
        None if first_sets > 0 => 25,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn instance(
        movement: MovementType,
        pattern: ExecutionPattern,
        sets: u8,
        reps: RepScheme,
        weight: Option<f64>,
    ) -> ExerciseInstance {
        ExerciseInstance {
            order: 1,
            exercise_id: "x".into(),
            exercise_name: "X".into(),
            muscle: MuscleGroup::Chest,
            movement,
            pattern,
            prescription: Prescription {
                intensity_percent: None,
                weight_kg: weight,
                reps,
                sets,
                rest_seconds: 90,
                rpe: 7.0,
                level: None,
                intervals: None,
                note: None,
            },
            substitute: None,
        }
    }

    fn one_week(exercises: Vec<ExerciseInstance>) -> Vec<GeneratedWeek> {
        vec![GeneratedWeek {
            week: 1,
            parameters: WeekParameters {
                week: 1,
                phase_name: "Accumulation".into(),
                intensity_percent: 70.0,
                volume_percent: 100.0,
                rpe: 7.0,
                is_deload: false,
                wave_slot: None,
                wave_index: None,
            },
            days: vec![GeneratedDay {
                day: 1,
                name: "Day 1".into(),
                day_type: "full_body".into(),
                load: DayLoad::Medium,
                exercises,
                estimated_minutes: 60,
            }],
        }]
    }

    #[test]
    fn test_tonnage_and_set_totals() {
        let weeks = one_week(vec![
            instance(
                MovementType::Push,
                ExecutionPattern::Bilateral,
                4,
                RepScheme::Fixed(5),
                Some(100.0),
            ),
            instance(
                MovementType::Pull,
                ExecutionPattern::Bilateral,
                3,
                RepScheme::Range(8, 12),
                None,
            ),
        ]);

        let stats = compute_statistics(&weeks, 1);
        assert_eq!(stats.total_workouts, 1);
        assert_eq!(stats.total_sets, 7);
        // Only the weighted exercise contributes tonnage: 100 * 4 * 5
        assert_eq!(stats.total_tonnage_kg, 2000.0);
        assert_eq!(stats.avg_session_minutes, 60);
    }

    #[test]
    fn test_balanced_program_scores_high() {
        let weeks = one_week(vec![
            instance(
                MovementType::Push,
                ExecutionPattern::Bilateral,
                4,
                RepScheme::Fixed(8),
                None,
            ),
            instance(
                MovementType::Pull,
                ExecutionPattern::Bilateral,
                4,
                RepScheme::Fixed(8),
                None,
            ),
            instance(
                MovementType::Squat,
                ExecutionPattern::Bilateral,
                4,
                RepScheme::Fixed(8),
                None,
            ),
            instance(
                MovementType::Hinge,
                ExecutionPattern::Unilateral,
                4,
                RepScheme::Fixed(8),
                None,
            ),
        ]);

        let stats = compute_statistics(&weeks, 1);
        let balance = &stats.balance;
        assert_eq!(balance.push_pull_ratio, Some(1.0));
        assert_eq!(balance.quad_hip_ratio, Some(1.0));
        assert_eq!(balance.bilateral_ratio, Some(1.0));
        assert_eq!(balance.score, 100);
        assert_eq!(balance.assessment, BalanceAssessment::Excellent);
    }

    #[test]
    fn test_push_only_program_is_penalized() {
        let weeks = one_week(vec![instance(
            MovementType::Push,
            ExecutionPattern::Bilateral,
            10,
            RepScheme::Fixed(10),
            None,
        )]);

        let stats = compute_statistics(&weeks, 1);
        assert_eq!(stats.balance.push_pull_ratio, None);
        assert!(stats.balance.score <= 75);
    }

    #[test]
    fn test_weekly_sets_per_muscle_averages_over_weeks() {
        let mut weeks = one_week(vec![instance(
            MovementType::Push,
            ExecutionPattern::Bilateral,
            6,
            RepScheme::Fixed(10),
            None,
        )]);
        // Duplicate as week 2 with no pushing
        let mut week2 = weeks[0].clone();
        week2.week = 2;
        week2.days[0].exercises.clear();
        weeks.push(week2);

        let stats = compute_statistics(&weeks, 2);
        assert_eq!(stats.weekly_sets_per_muscle[&MuscleGroup::Chest], 3.0);
    }

    #[test]
    fn test_empty_program() {
        let stats = compute_statistics(&[], 0);
        assert_eq!(stats.total_workouts, 0);
        assert_eq!(stats.total_sets, 0);
        assert_eq!(stats.balance.score, 100);
    }
}
