//! Core domain types for the Liftplan program generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their classification (movement, muscles, equipment)
//! - Safety metadata (contraindications, client constraints)
//! - Client profiles and capacity data
//! - Periodization structure (phases, week parameters)
//! - Generated program output (weeks, days, prescriptions)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Exercise Classification
// ============================================================================

/// Primary movement pattern of an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Push,
    Pull,
    Squat,
    Hinge,
    Lunge,
    Carry,
    Rotation,
    Core,
    Cardio,
    Plyo,
}

/// Muscle groups used for slot targeting and volume accounting
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    UpperBack,
    Shoulders,
    RearDelts,
    Biceps,
    Triceps,
    Forearms,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Core,
    LowerBack,
    Traps,
    FullBody,
    CardioSystem,
}

/// Equipment an exercise can be performed with
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Kettlebell,
    Cable,
    Machine,
    Bodyweight,
    SuspensionTrainer,
    Bands,
    RowErg,
    SkiErg,
    AssaultBike,
    Sled,
    Box,
    PullupBar,
    Bench,
    Rack,
    Medball,
    AbWheel,
}

impl Equipment {
    /// Free-weight implements rank above machines in selection scoring
    pub fn is_free_weight(self) -> bool {
        matches!(
            self,
            Equipment::Barbell | Equipment::Dumbbell | Equipment::Kettlebell
        )
    }
}

/// How the prescribed load for an exercise is expressed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadType {
    /// External weight in kg, derived from a one-rep max when available
    Weight,
    /// Bodyweight repetitions only
    Reps,
    /// Timed work (planks, carries)
    Time,
    /// Interval-based cardio work
    Intervals,
    /// Suspension-trainer leverage level (1-10)
    Level,
}

/// Execution pattern
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPattern {
    Bilateral,
    Unilateral,
    Alternating,
}

/// Kettlebell exercise character, which drives progression speed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KettlebellKind {
    /// Swings, snatches, jerks: faster weight steps
    Ballistic,
    /// Presses, squats, rows: slower weight steps
    Grind,
    /// Chained movements: progress reps, not weight
    Complex,
}

/// Difficulty ordinal, compared against the client's experience tier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Suspension-trainer leverage band declared by an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelBand {
    pub min: u8,
    pub max: u8,
}

/// An exercise catalog entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    pub id: String,
    pub name: String,
    pub movement: MovementType,
    pub primary_muscles: Vec<MuscleGroup>,
    #[serde(default)]
    pub secondary_muscles: Vec<MuscleGroup>,
    /// Client needs at least one of these
    pub equipment: Vec<Equipment>,
    pub load_type: LoadType,
    pub pattern: ExecutionPattern,
    pub difficulty: Difficulty,
    pub is_compound: bool,
    /// Key into the client's one-rep-max map, for load-bearing lifts
    #[serde(default)]
    pub one_rm_key: Option<String>,
    #[serde(default)]
    pub kettlebell_kind: Option<KettlebellKind>,
    #[serde(default)]
    pub level_band: Option<LevelBand>,
    /// Fallback rep range when no capacity data is available
    pub recommended_reps: (u8, u8),
}

impl ExerciseDefinition {
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.primary_muscles.contains(&muscle)
    }
}

// ============================================================================
// Safety Metadata
// ============================================================================

/// Body zone a constraint or contraindication refers to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyZone {
    LowerBack,
    Knee,
    Shoulder,
    Wrist,
    Cervical,
    Hip,
    Ankle,
    Elbow,
}

/// Strictness of a contraindication or client constraint
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Use with caution; excluded only for strictly constrained clients
    Relative,
    /// Never prescribe
    Absolute,
}

/// Links an exercise to a body zone it stresses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contraindication {
    pub exercise_id: String,
    pub body_zone: BodyZone,
    pub severity: Severity,
}

/// A registered substitute for an exercise
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseAlternative {
    pub exercise_id: String,
    pub alternative_id: String,
    /// Lower number is tried first
    pub priority: u8,
}

// ============================================================================
// Client Profile
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    /// Maximum exercise difficulty this tier should be given
    pub fn max_difficulty(self) -> Difficulty {
        match self {
            Experience::Beginner => Difficulty::Beginner,
            Experience::Intermediate => Difficulty::Intermediate,
            Experience::Advanced => Difficulty::Advanced,
        }
    }
}

/// A health restriction declared by the client
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConstraint {
    pub body_zone: BodyZone,
    pub severity: Severity,
}

/// Everything the generator needs to know about a client.
///
/// Owned by the caller and read-only to the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,
    pub gender: Gender,
    pub age: u8,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub experience: Experience,
    #[serde(default)]
    pub constraints: Vec<ClientConstraint>,
    pub equipment: Vec<Equipment>,
    /// Ascending list of kettlebell weights the client owns, if any
    #[serde(default)]
    pub kettlebell_weights: Vec<f64>,
    /// Known one-rep maxima in kg, keyed by movement key (squat, bench, ...)
    #[serde(default)]
    pub one_rm: HashMap<String, f64>,
}

impl ClientProfile {
    pub fn one_rm_for(&self, key: &str) -> Option<f64> {
        self.one_rm.get(key).copied()
    }

    pub fn has_equipment(&self, equipment: Equipment) -> bool {
        self.equipment.contains(&equipment)
    }
}

// ============================================================================
// Periodization Structure
// ============================================================================

/// Training goal driving phase structure and prescription style
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    FatLoss,
    Event,
}

/// Periodization style controlling week-to-week parameter movement
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationStyle {
    Linear,
    Block,
    Wave,
    Reverse,
}

/// What a phase is for; drives volume level and deload handling
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Accumulation,
    Intensification,
    Realization,
    Capacity,
    PowerEndurance,
    Specificity,
    Taper,
    Deload,
}

impl PhaseKind {
    /// Phases that are themselves a planned recovery block
    pub fn is_recovery(self) -> bool {
        matches!(self, PhaseKind::Taper | PhaseKind::Deload)
    }
}

/// Qualitative weekly volume target of a phase
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    High,
    Medium,
    Low,
}

impl VolumeLevel {
    /// Baseline volume percentage the weekly resolver scales from
    pub fn baseline_percent(self) -> f64 {
        match self {
            VolumeLevel::High => 110.0,
            VolumeLevel::Medium => 90.0,
            VolumeLevel::Low => 70.0,
        }
    }
}

/// A contiguous block of weeks with a shared training emphasis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub kind: PhaseKind,
    /// Inclusive
    pub week_start: u32,
    /// Inclusive
    pub week_end: u32,
    pub intensity_min: f64,
    pub intensity_max: f64,
    pub volume: VolumeLevel,
    pub focus: String,
}

impl Phase {
    pub fn week_count(&self) -> u32 {
        self.week_end - self.week_start + 1
    }

    pub fn contains_week(&self, week: u32) -> bool {
        (self.week_start..=self.week_end).contains(&week)
    }
}

/// Light/medium/heavy slot within a 3-week wave sub-cycle
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaveSlot {
    Light,
    Medium,
    Heavy,
}

/// Resolved targets for a single training week
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeekParameters {
    pub week: u32,
    pub phase_name: String,
    pub intensity_percent: f64,
    pub volume_percent: f64,
    pub rpe: f64,
    pub is_deload: bool,
    #[serde(default)]
    pub wave_slot: Option<WaveSlot>,
    #[serde(default)]
    pub wave_index: Option<u32>,
}

// ============================================================================
// Prescriptions
// ============================================================================

/// Fixed rep count or an inclusive range
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RepScheme {
    Fixed(u8),
    Range(u8, u8),
}

impl fmt::Display for RepScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepScheme::Fixed(n) => write!(f, "{n}"),
            RepScheme::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

/// Interval block for cardio/metabolic work
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct IntervalBlock {
    pub work_seconds: u16,
    pub rest_seconds: u16,
    pub rounds: u8,
    /// Fraction of age-predicted max heart rate to hold during work
    pub target_hr_fraction: f64,
}

/// Numeric dose for one exercise instance.
///
/// Computed fresh per instance and frozen into the program; deload
/// overrides are applied before construction, never after.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(default)]
    pub intensity_percent: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    pub reps: RepScheme,
    pub sets: u8,
    pub rest_seconds: u16,
    pub rpe: f64,
    /// Suspension-trainer leverage level, when applicable
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub intervals: Option<IntervalBlock>,
    #[serde(default)]
    pub note: Option<String>,
}

// ============================================================================
// Generated Program
// ============================================================================

/// One prescribed exercise within a day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseInstance {
    pub order: u8,
    pub exercise_id: String,
    pub exercise_name: String,
    pub muscle: MuscleGroup,
    pub movement: MovementType,
    pub pattern: ExecutionPattern,
    pub prescription: Prescription,
    /// Feasible registered substitute, when one exists
    #[serde(default)]
    pub substitute: Option<String>,
}

/// Heavy/medium/light classification of a training day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayLoad {
    Heavy,
    Medium,
    Light,
}

/// A single training day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedDay {
    pub day: u8,
    pub name: String,
    pub day_type: String,
    pub load: DayLoad,
    pub exercises: Vec<ExerciseInstance>,
    /// Rough session length in minutes
    pub estimated_minutes: u16,
}

/// A single program week
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedWeek {
    pub week: u32,
    pub parameters: WeekParameters,
    pub days: Vec<GeneratedDay>,
}

/// Record of a substitute attached during selection
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Substitution {
    pub original_id: String,
    pub substitute_id: String,
}

/// The complete generated program.
///
/// Built once, top-down; treated as an immutable value afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedProgram {
    pub id: Uuid,
    pub client_name: String,
    pub goal: Goal,
    pub periodization: PeriodizationStyle,
    pub total_weeks: u32,
    pub days_per_week: u8,
    pub phases: Vec<Phase>,
    pub weeks: Vec<GeneratedWeek>,
    pub substitutions: Vec<Substitution>,
    pub statistics: crate::stats::Statistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rep_scheme_display() {
        assert_eq!(RepScheme::Fixed(5).to_string(), "5");
        assert_eq!(RepScheme::Range(8, 12).to_string(), "8-12");
    }

    #[test]
    fn test_phase_week_count() {
        let phase = Phase {
            name: "Accumulation".into(),
            kind: PhaseKind::Accumulation,
            week_start: 1,
            week_end: 4,
            intensity_min: 65.0,
            intensity_max: 75.0,
            volume: VolumeLevel::High,
            focus: String::new(),
        };
        assert_eq!(phase.week_count(), 4);
        assert!(phase.contains_week(1));
        assert!(phase.contains_week(4));
        assert!(!phase.contains_week(5));
    }

    #[test]
    fn test_severity_ordering() {
        // The selector relies on Absolute ranking above Relative
        assert!(Severity::Absolute > Severity::Relative);
    }

    #[test]
    fn test_free_weight_classification() {
        assert!(Equipment::Barbell.is_free_weight());
        assert!(Equipment::Kettlebell.is_free_weight());
        assert!(!Equipment::Machine.is_free_weight());
        assert!(!Equipment::Cable.is_free_weight());
    }

    #[test]
    fn test_experience_difficulty_cap() {
        assert_eq!(Experience::Beginner.max_difficulty(), Difficulty::Beginner);
        assert_eq!(Experience::Advanced.max_difficulty(), Difficulty::Advanced);
    }

    #[test]
    fn test_exercise_serde_roundtrip() {
        let ex = ExerciseDefinition {
            id: "back_squat".into(),
            name: "Back Squat".into(),
            movement: MovementType::Squat,
            primary_muscles: vec![MuscleGroup::Quads, MuscleGroup::Glutes],
            secondary_muscles: vec![MuscleGroup::Core],
            equipment: vec![Equipment::Barbell, Equipment::Rack],
            load_type: LoadType::Weight,
            pattern: ExecutionPattern::Bilateral,
            difficulty: Difficulty::Intermediate,
            is_compound: true,
            one_rm_key: Some("squat".into()),
            kettlebell_kind: None,
            level_band: None,
            recommended_reps: (5, 8),
        };

        let json = serde_json::to_string(&ex).unwrap();
        let parsed: ExerciseDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, ex.id);
        assert_eq!(parsed.one_rm_key.as_deref(), Some("squat"));
        assert_eq!(parsed.recommended_reps, (5, 8));
    }
}
