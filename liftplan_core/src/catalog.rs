//! Exercise catalog: definitions, contraindications, and substitutes.
//!
//! The catalog is assembled from per-equipment-category sources (the
//! built-in builders below, plus optional JSON files) merged into one
//! in-memory store before first use. A source that fails to load simply
//! contributes nothing. Exercises keep their insertion order, which is
//! the deterministic tie-break order for selection.

use crate::types::*;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Get a reference to the cached built-in catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// One loadable catalog source (the JSON file schema)
#[derive(Debug, Deserialize)]
pub struct CatalogSource {
    pub exercises: Vec<ExerciseDefinition>,
    #[serde(default)]
    pub contraindications: Vec<Contraindication>,
    #[serde(default)]
    pub alternatives: Vec<ExerciseAlternative>,
}

/// The merged, read-only exercise store
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    exercises: Vec<ExerciseDefinition>,
    contraindications: HashMap<String, Vec<Contraindication>>,
    alternatives: HashMap<String, Vec<ExerciseAlternative>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog, merged from every equipment category
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for source in [
            free_weight_source(),
            machine_source(),
            kettlebell_source(),
            suspension_source(),
            metabolic_source(),
            core_source(),
        ] {
            catalog.merge(source);
        }
        catalog
    }

    /// Merge one source into the catalog
    pub fn merge(&mut self, source: CatalogSource) {
        self.exercises.extend(source.exercises);
        for c in source.contraindications {
            self.contraindications
                .entry(c.exercise_id.clone())
                .or_default()
                .push(c);
        }
        for a in source.alternatives {
            self.alternatives
                .entry(a.exercise_id.clone())
                .or_default()
                .push(a);
        }
        // Substitutes are tried best-priority first
        for alts in self.alternatives.values_mut() {
            alts.sort_by_key(|a| a.priority);
        }
    }

    /// Merge a JSON source file. A missing or malformed file is logged
    /// and skipped; it never aborts catalog construction.
    ///
    /// Returns the number of exercises the file contributed.
    pub fn merge_json_file(&mut self, path: &Path) -> usize {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Skipping catalog source {:?}: {}", path, e);
                return 0;
            }
        };

        let source: CatalogSource = match serde_json::from_str(&contents) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Skipping malformed catalog source {:?}: {}", path, e);
                return 0;
            }
        };

        let count = source.exercises.len();
        self.merge(source);
        tracing::info!("Merged {} exercises from {:?}", count, path);
        count
    }

    /// All exercises in insertion order
    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    pub fn get(&self, id: &str) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Contraindications registered for an exercise
    pub fn contraindications_for(&self, id: &str) -> &[Contraindication] {
        self.contraindications.get(id).map_or(&[], Vec::as_slice)
    }

    /// Registered substitutes, best priority first
    pub fn alternatives_for(&self, id: &str) -> &[ExerciseAlternative] {
        self.alternatives.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for ex in &self.exercises {
            if ex.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if !seen.insert(ex.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", ex.id));
            }
            if ex.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", ex.id));
            }
            if ex.equipment.is_empty() {
                errors.push(format!("Exercise '{}' requires no equipment", ex.id));
            }
            if ex.primary_muscles.is_empty() {
                errors.push(format!("Exercise '{}' targets no muscles", ex.id));
            }
            let (lo, hi) = ex.recommended_reps;
            if lo > hi {
                errors.push(format!(
                    "Exercise '{}': rep range {}-{} is inverted",
                    ex.id, lo, hi
                ));
            }
            if let Some(band) = ex.level_band {
                if band.min < 1 || band.max > 10 || band.min > band.max {
                    errors.push(format!(
                        "Exercise '{}': level band {}-{} outside 1-10",
                        ex.id, band.min, band.max
                    ));
                }
            }
            if ex.load_type == LoadType::Level && ex.level_band.is_none() {
                errors.push(format!(
                    "Exercise '{}' is level-loaded but declares no level band",
                    ex.id
                ));
            }
        }

        for (id, contras) in &self.contraindications {
            if self.get(id).is_none() {
                errors.push(format!(
                    "Contraindication references unknown exercise '{id}'"
                ));
            }
            if contras.is_empty() {
                errors.push(format!("Empty contraindication list for '{id}'"));
            }
        }

        for (id, alts) in &self.alternatives {
            if self.get(id).is_none() {
                errors.push(format!("Alternative references unknown exercise '{id}'"));
            }
            for alt in alts {
                if self.get(&alt.alternative_id).is_none() {
                    errors.push(format!(
                        "Alternative '{}' -> '{}' targets an unknown exercise",
                        id, alt.alternative_id
                    ));
                }
            }
        }

        errors
    }
}

// ============================================================================
// Built-in Sources
// ============================================================================

// Shorthand for defining built-in entries without repeating defaults
struct Entry {
    id: &'static str,
    name: &'static str,
    movement: MovementType,
    primary: &'static [MuscleGroup],
    secondary: &'static [MuscleGroup],
    equipment: &'static [Equipment],
    load_type: LoadType,
    pattern: ExecutionPattern,
    difficulty: Difficulty,
    compound: bool,
    one_rm_key: Option<&'static str>,
    kettlebell_kind: Option<KettlebellKind>,
    level_band: Option<(u8, u8)>,
    reps: (u8, u8),
}

impl Entry {
    fn build(self) -> ExerciseDefinition {
        ExerciseDefinition {
            id: self.id.into(),
            name: self.name.into(),
            movement: self.movement,
            primary_muscles: self.primary.to_vec(),
            secondary_muscles: self.secondary.to_vec(),
            equipment: self.equipment.to_vec(),
            load_type: self.load_type,
            pattern: self.pattern,
            difficulty: self.difficulty,
            is_compound: self.compound,
            one_rm_key: self.one_rm_key.map(Into::into),
            kettlebell_kind: self.kettlebell_kind,
            level_band: self.level_band.map(|(min, max)| LevelBand { min, max }),
            recommended_reps: self.reps,
        }
    }
}

fn contra(exercise_id: &str, body_zone: BodyZone, severity: Severity) -> Contraindication {
    Contraindication {
        exercise_id: exercise_id.into(),
        body_zone,
        severity,
    }
}

fn alt(exercise_id: &str, alternative_id: &str, priority: u8) -> ExerciseAlternative {
    ExerciseAlternative {
        exercise_id: exercise_id.into(),
        alternative_id: alternative_id.into(),
        priority,
    }
}

fn free_weight_source() -> CatalogSource {
    use Difficulty::*;
    use Equipment::*;
    use ExecutionPattern::*;
    use MuscleGroup::*;

    let entries = vec![
        Entry {
            id: "back_squat",
            name: "Back Squat",
            movement: MovementType::Squat,
            primary: &[Quads, Glutes],
            secondary: &[Core, LowerBack],
            equipment: &[Barbell, Rack],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: Some("squat"),
            kettlebell_kind: None,
            level_band: None,
            reps: (3, 8),
        },
        Entry {
            id: "front_squat",
            name: "Front Squat",
            movement: MovementType::Squat,
            primary: &[Quads],
            secondary: &[Core],
            equipment: &[Barbell, Rack],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Advanced,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (5, 8),
        },
        Entry {
            id: "bench_press",
            name: "Bench Press",
            movement: MovementType::Push,
            primary: &[Chest, Triceps],
            secondary: &[Shoulders],
            equipment: &[Barbell, Bench, Rack],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: Some("bench"),
            kettlebell_kind: None,
            level_band: None,
            reps: (3, 8),
        },
        Entry {
            id: "incline_db_press",
            name: "Incline Dumbbell Press",
            movement: MovementType::Push,
            primary: &[Chest],
            secondary: &[Shoulders, Triceps],
            equipment: &[Dumbbell, Bench],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "overhead_press",
            name: "Overhead Press",
            movement: MovementType::Push,
            primary: &[Shoulders, Triceps],
            secondary: &[Core],
            equipment: &[Barbell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: Some("ohp"),
            kettlebell_kind: None,
            level_band: None,
            reps: (5, 8),
        },
        Entry {
            id: "db_lateral_raise",
            name: "Dumbbell Lateral Raise",
            movement: MovementType::Push,
            primary: &[Shoulders],
            secondary: &[],
            equipment: &[Dumbbell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (12, 15),
        },
        Entry {
            id: "deadlift",
            name: "Deadlift",
            movement: MovementType::Hinge,
            primary: &[Hamstrings, Glutes, LowerBack],
            secondary: &[Traps, Forearms],
            equipment: &[Barbell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: Some("deadlift"),
            kettlebell_kind: None,
            level_band: None,
            reps: (3, 6),
        },
        Entry {
            id: "romanian_deadlift",
            name: "Romanian Deadlift",
            movement: MovementType::Hinge,
            primary: &[Hamstrings, Glutes],
            secondary: &[LowerBack],
            equipment: &[Barbell, Dumbbell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "hip_thrust",
            name: "Barbell Hip Thrust",
            movement: MovementType::Hinge,
            primary: &[Glutes],
            secondary: &[Hamstrings],
            equipment: &[Barbell, Bench],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "barbell_row",
            name: "Barbell Row",
            movement: MovementType::Pull,
            primary: &[Back, UpperBack],
            secondary: &[Biceps],
            equipment: &[Barbell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (6, 10),
        },
        Entry {
            id: "one_arm_db_row",
            name: "One-Arm Dumbbell Row",
            movement: MovementType::Pull,
            primary: &[Back],
            secondary: &[Biceps],
            equipment: &[Dumbbell, Bench],
            load_type: LoadType::Weight,
            pattern: Unilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "walking_lunge",
            name: "Walking Lunge",
            movement: MovementType::Lunge,
            primary: &[Quads, Glutes],
            secondary: &[Hamstrings],
            equipment: &[Dumbbell, Bodyweight],
            load_type: LoadType::Weight,
            pattern: Alternating,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (10, 12),
        },
        Entry {
            id: "bulgarian_split_squat",
            name: "Bulgarian Split Squat",
            movement: MovementType::Lunge,
            primary: &[Quads, Glutes],
            secondary: &[Hamstrings],
            equipment: &[Dumbbell, Bench],
            load_type: LoadType::Weight,
            pattern: Unilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "db_curl",
            name: "Dumbbell Curl",
            movement: MovementType::Pull,
            primary: &[Biceps],
            secondary: &[Forearms],
            equipment: &[Dumbbell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (10, 15),
        },
        Entry {
            id: "lying_triceps_extension",
            name: "Lying Triceps Extension",
            movement: MovementType::Push,
            primary: &[Triceps],
            secondary: &[],
            equipment: &[Barbell, Bench],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (10, 12),
        },
    ];

    CatalogSource {
        exercises: entries.into_iter().map(Entry::build).collect(),
        contraindications: vec![
            contra("back_squat", BodyZone::Knee, Severity::Relative),
            contra("back_squat", BodyZone::LowerBack, Severity::Relative),
            contra("front_squat", BodyZone::Knee, Severity::Relative),
            contra("front_squat", BodyZone::Wrist, Severity::Relative),
            contra("bench_press", BodyZone::Shoulder, Severity::Relative),
            contra("overhead_press", BodyZone::Shoulder, Severity::Relative),
            contra("overhead_press", BodyZone::LowerBack, Severity::Relative),
            contra("deadlift", BodyZone::LowerBack, Severity::Relative),
            contra("romanian_deadlift", BodyZone::LowerBack, Severity::Relative),
            contra("barbell_row", BodyZone::LowerBack, Severity::Relative),
            contra("walking_lunge", BodyZone::Knee, Severity::Relative),
            contra("bulgarian_split_squat", BodyZone::Knee, Severity::Absolute),
        ],
        alternatives: vec![
            alt("back_squat", "leg_press", 1),
            alt("back_squat", "kb_goblet_squat", 2),
            alt("bench_press", "incline_db_press", 1),
            alt("bench_press", "pushup", 2),
            alt("deadlift", "romanian_deadlift", 1),
            alt("deadlift", "kb_swing", 2),
            alt("barbell_row", "one_arm_db_row", 1),
            alt("barbell_row", "seated_cable_row", 2),
            alt("overhead_press", "kb_press", 1),
            alt("bulgarian_split_squat", "walking_lunge", 1),
        ],
    }
}

fn machine_source() -> CatalogSource {
    use Difficulty::*;
    use Equipment::*;
    use ExecutionPattern::*;
    use MuscleGroup::*;

    let entries = vec![
        Entry {
            id: "leg_press",
            name: "Leg Press",
            movement: MovementType::Squat,
            primary: &[Quads, Glutes],
            secondary: &[Hamstrings],
            equipment: &[Machine],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (10, 15),
        },
        Entry {
            id: "lat_pulldown",
            name: "Lat Pulldown",
            movement: MovementType::Pull,
            primary: &[Back],
            secondary: &[Biceps],
            equipment: &[Cable],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "seated_cable_row",
            name: "Seated Cable Row",
            movement: MovementType::Pull,
            primary: &[Back, UpperBack],
            secondary: &[Biceps],
            equipment: &[Cable],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "leg_curl",
            name: "Lying Leg Curl",
            movement: MovementType::Hinge,
            primary: &[Hamstrings],
            secondary: &[],
            equipment: &[Machine],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (10, 15),
        },
        Entry {
            id: "cable_crunch",
            name: "Cable Crunch",
            movement: MovementType::Core,
            primary: &[MuscleGroup::Core],
            secondary: &[],
            equipment: &[Cable],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (12, 15),
        },
    ];

    CatalogSource {
        exercises: entries.into_iter().map(Entry::build).collect(),
        contraindications: vec![contra("leg_press", BodyZone::Knee, Severity::Relative)],
        alternatives: vec![alt("lat_pulldown", "seated_cable_row", 1)],
    }
}

fn kettlebell_source() -> CatalogSource {
    use Difficulty::*;
    use Equipment::*;
    use ExecutionPattern::*;
    use MuscleGroup::*;

    let entries = vec![
        Entry {
            id: "kb_swing",
            name: "Kettlebell Swing",
            movement: MovementType::Hinge,
            primary: &[Glutes, Hamstrings],
            secondary: &[Core, LowerBack],
            equipment: &[Kettlebell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: Some(KettlebellKind::Ballistic),
            level_band: None,
            reps: (10, 20),
        },
        Entry {
            id: "kb_goblet_squat",
            name: "Goblet Squat",
            movement: MovementType::Squat,
            primary: &[Quads, Glutes],
            secondary: &[Core],
            equipment: &[Kettlebell],
            load_type: LoadType::Weight,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: Some(KettlebellKind::Grind),
            level_band: None,
            reps: (8, 12),
        },
        Entry {
            id: "kb_press",
            name: "Kettlebell Press",
            movement: MovementType::Push,
            primary: &[Shoulders, Triceps],
            secondary: &[Core],
            equipment: &[Kettlebell],
            load_type: LoadType::Weight,
            pattern: Unilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: Some(KettlebellKind::Grind),
            level_band: None,
            reps: (5, 10),
        },
        Entry {
            id: "kb_snatch",
            name: "Kettlebell Snatch",
            movement: MovementType::Hinge,
            primary: &[FullBody, Glutes],
            secondary: &[Shoulders],
            equipment: &[Kettlebell],
            load_type: LoadType::Weight,
            pattern: Unilateral,
            difficulty: Advanced,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: Some(KettlebellKind::Ballistic),
            level_band: None,
            reps: (8, 15),
        },
        Entry {
            id: "kb_clean_and_press",
            name: "Kettlebell Clean and Press",
            movement: MovementType::Push,
            primary: &[FullBody, Shoulders],
            secondary: &[Glutes, Core],
            equipment: &[Kettlebell],
            load_type: LoadType::Weight,
            pattern: Unilateral,
            difficulty: Advanced,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: Some(KettlebellKind::Complex),
            level_band: None,
            reps: (3, 6),
        },
    ];

    CatalogSource {
        exercises: entries.into_iter().map(Entry::build).collect(),
        contraindications: vec![
            contra("kb_swing", BodyZone::LowerBack, Severity::Relative),
            contra("kb_snatch", BodyZone::Shoulder, Severity::Relative),
            contra("kb_snatch", BodyZone::LowerBack, Severity::Relative),
        ],
        alternatives: vec![alt("kb_swing", "romanian_deadlift", 1)],
    }
}

fn suspension_source() -> CatalogSource {
    use Difficulty::*;
    use Equipment::*;
    use ExecutionPattern::*;
    use MuscleGroup::*;

    let entries = vec![
        Entry {
            id: "trx_row",
            name: "Suspension Row",
            movement: MovementType::Pull,
            primary: &[Back, UpperBack],
            secondary: &[Biceps, Core],
            equipment: &[SuspensionTrainer],
            load_type: LoadType::Level,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: Some((2, 9)),
            reps: (8, 15),
        },
        Entry {
            id: "trx_pushup",
            name: "Suspension Push-Up",
            movement: MovementType::Push,
            primary: &[Chest],
            secondary: &[Core, Triceps],
            equipment: &[SuspensionTrainer],
            load_type: LoadType::Level,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: Some((3, 9)),
            reps: (8, 15),
        },
        Entry {
            id: "trx_pike",
            name: "Suspension Pike",
            movement: MovementType::Core,
            primary: &[MuscleGroup::Core, Shoulders],
            secondary: &[],
            equipment: &[SuspensionTrainer],
            load_type: LoadType::Level,
            pattern: Bilateral,
            difficulty: Advanced,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: Some((4, 10)),
            reps: (8, 12),
        },
    ];

    CatalogSource {
        exercises: entries.into_iter().map(Entry::build).collect(),
        contraindications: vec![contra("trx_pike", BodyZone::Shoulder, Severity::Relative)],
        alternatives: vec![],
    }
}

fn metabolic_source() -> CatalogSource {
    use Difficulty::*;
    use Equipment::*;
    use ExecutionPattern::*;
    use MuscleGroup::*;

    let entries = vec![
        Entry {
            id: "row_erg_intervals",
            name: "Rowing Intervals",
            movement: MovementType::Cardio,
            primary: &[CardioSystem, FullBody],
            secondary: &[Back],
            equipment: &[RowErg],
            load_type: LoadType::Intervals,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (1, 1),
        },
        Entry {
            id: "ski_erg_intervals",
            name: "Ski Erg Intervals",
            movement: MovementType::Cardio,
            primary: &[CardioSystem, Back],
            secondary: &[Core],
            equipment: &[SkiErg],
            load_type: LoadType::Intervals,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (1, 1),
        },
        Entry {
            id: "bike_intervals",
            name: "Assault Bike Intervals",
            movement: MovementType::Cardio,
            primary: &[CardioSystem, Quads],
            secondary: &[],
            equipment: &[AssaultBike],
            load_type: LoadType::Intervals,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (1, 1),
        },
        Entry {
            id: "sled_push",
            name: "Sled Push",
            movement: MovementType::Carry,
            primary: &[Quads, Glutes],
            secondary: &[CardioSystem],
            equipment: &[Sled],
            load_type: LoadType::Intervals,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (1, 1),
        },
        Entry {
            id: "farmer_carry",
            name: "Farmer's Carry",
            movement: MovementType::Carry,
            primary: &[Traps, Forearms],
            secondary: &[MuscleGroup::Core],
            equipment: &[Kettlebell, Dumbbell],
            load_type: LoadType::Time,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: Some(KettlebellKind::Grind),
            level_band: None,
            reps: (30, 60),
        },
    ];

    CatalogSource {
        exercises: entries.into_iter().map(Entry::build).collect(),
        contraindications: vec![],
        alternatives: vec![
            alt("row_erg_intervals", "ski_erg_intervals", 1),
            alt("row_erg_intervals", "bike_intervals", 2),
        ],
    }
}

fn core_source() -> CatalogSource {
    use Difficulty::*;
    use Equipment::*;
    use ExecutionPattern::*;

    let entries = vec![
        Entry {
            id: "plank",
            name: "Plank",
            movement: MovementType::Core,
            primary: &[MuscleGroup::Core],
            secondary: &[MuscleGroup::Shoulders],
            equipment: &[Bodyweight],
            load_type: LoadType::Time,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (30, 60),
        },
        Entry {
            id: "ab_wheel_rollout",
            name: "Ab Wheel Rollout",
            movement: MovementType::Core,
            primary: &[MuscleGroup::Core],
            secondary: &[MuscleGroup::LowerBack],
            equipment: &[AbWheel],
            load_type: LoadType::Reps,
            pattern: Bilateral,
            difficulty: Advanced,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (6, 12),
        },
        Entry {
            id: "hanging_leg_raise",
            name: "Hanging Leg Raise",
            movement: MovementType::Core,
            primary: &[MuscleGroup::Core],
            secondary: &[MuscleGroup::Forearms],
            equipment: &[PullupBar],
            load_type: LoadType::Reps,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (8, 15),
        },
        Entry {
            id: "pallof_press",
            name: "Pallof Press",
            movement: MovementType::Rotation,
            primary: &[MuscleGroup::Core],
            secondary: &[],
            equipment: &[Cable, Bands],
            load_type: LoadType::Reps,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: false,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (10, 12),
        },
        Entry {
            id: "pullup",
            name: "Pull-Up",
            movement: MovementType::Pull,
            primary: &[MuscleGroup::Back, MuscleGroup::Biceps],
            secondary: &[MuscleGroup::Core],
            equipment: &[PullupBar],
            load_type: LoadType::Reps,
            pattern: Bilateral,
            difficulty: Intermediate,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (5, 12),
        },
        Entry {
            id: "pushup",
            name: "Push-Up",
            movement: MovementType::Push,
            primary: &[MuscleGroup::Chest, MuscleGroup::Triceps],
            secondary: &[MuscleGroup::Core],
            equipment: &[Bodyweight],
            load_type: LoadType::Reps,
            pattern: Bilateral,
            difficulty: Beginner,
            compound: true,
            one_rm_key: None,
            kettlebell_kind: None,
            level_band: None,
            reps: (10, 20),
        },
    ];

    CatalogSource {
        exercises: entries.into_iter().map(Entry::build).collect(),
        contraindications: vec![
            contra("ab_wheel_rollout", BodyZone::LowerBack, Severity::Absolute),
            contra("hanging_leg_raise", BodyZone::Shoulder, Severity::Relative),
        ],
        alternatives: vec![
            alt("pullup", "lat_pulldown", 1),
            alt("pullup", "trx_row", 2),
        ],
    }
}
