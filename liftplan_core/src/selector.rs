//! Exercise selection.
//!
//! One slot in, at most one exercise out: filter the catalog by movement,
//! muscle, equipment, difficulty, and the day's exclusion list, drop
//! anything unsafe for the client's constraints, rank what is left, and
//! attach the first feasible registered substitute. An empty result is an
//! expected outcome, not an error; heavily constrained clients simply get
//! shorter days.

use crate::catalog::Catalog;
use crate::types::{
    ClientConstraint, Difficulty, Equipment, ExecutionPattern, ExerciseDefinition, MovementType,
    MuscleGroup, Severity,
};

/// What a day-template slot asks for
#[derive(Clone, Copy, Debug)]
pub struct SlotSpec {
    pub movement: Option<MovementType>,
    pub muscle: Option<MuscleGroup>,
    pub require_compound: bool,
}

impl SlotSpec {
    pub const fn new(movement: MovementType, muscle: MuscleGroup, require_compound: bool) -> Self {
        Self {
            movement: Some(movement),
            muscle: Some(muscle),
            require_compound,
        }
    }

    pub const fn movement_only(movement: MovementType, require_compound: bool) -> Self {
        Self {
            movement: Some(movement),
            muscle: None,
            require_compound,
        }
    }
}

/// Full criteria for one selection
#[derive(Clone, Debug)]
pub struct SelectionCriteria<'a> {
    pub movement: Option<MovementType>,
    pub muscle: Option<MuscleGroup>,
    pub equipment: &'a [Equipment],
    pub constraints: &'a [ClientConstraint],
    pub max_difficulty: Difficulty,
    pub require_compound: bool,
    pub exclude: &'a [String],
}

/// A chosen exercise plus its feasible substitute, when one exists
#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    pub exercise: &'a ExerciseDefinition,
    pub substitute: Option<&'a ExerciseDefinition>,
}

/// Read-only selection pipeline over a catalog
pub struct Selector<'a> {
    catalog: &'a Catalog,
}

impl<'a> Selector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Pick the best exercise for the criteria, or nothing.
    ///
    /// Candidates are scored and the highest score wins; equal scores are
    /// broken by catalog order, first seen wins, so selection is
    /// deterministic for a fixed catalog.
    pub fn select(&self, criteria: &SelectionCriteria) -> Option<Selection<'a>> {
        let mut best: Option<(&ExerciseDefinition, i32)> = None;

        for ex in self.catalog.exercises() {
            if !self.passes_filters(ex, criteria) {
                continue;
            }
            let score = score_exercise(ex, criteria);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((ex, score)),
            }
        }

        let exercise = best.map(|(ex, _)| ex)?;
        let substitute = self.find_substitute(exercise, criteria);

        Some(Selection {
            exercise,
            substitute,
        })
    }

    /// Fill a day template slot by slot.
    ///
    /// Each chosen exercise id joins the exclusion set before the next
    /// slot is evaluated, so a day never repeats an exercise. Unfillable
    /// slots are skipped.
    pub fn select_for_day(
        &self,
        slots: &[SlotSpec],
        equipment: &[Equipment],
        constraints: &[ClientConstraint],
        max_difficulty: Difficulty,
    ) -> Vec<Selection<'a>> {
        let mut selections = Vec::with_capacity(slots.len());
        let mut used: Vec<String> = Vec::new();

        for slot in slots {
            let criteria = SelectionCriteria {
                movement: slot.movement,
                muscle: slot.muscle,
                equipment,
                constraints,
                max_difficulty,
                require_compound: slot.require_compound,
                exclude: &used,
            };

            match self.select(&criteria) {
                Some(selection) => {
                    used.push(selection.exercise.id.clone());
                    selections.push(selection);
                }
                None => {
                    tracing::debug!(
                        "No candidate for slot {:?}/{:?}; day will be short",
                        slot.movement,
                        slot.muscle
                    );
                }
            }
        }

        selections
    }

    fn passes_filters(&self, ex: &ExerciseDefinition, criteria: &SelectionCriteria) -> bool {
        if let Some(movement) = criteria.movement {
            if ex.movement != movement {
                return false;
            }
        }

        if let Some(muscle) = criteria.muscle {
            if !ex.targets(muscle) {
                return false;
            }
        }

        // At least one piece of required equipment must be available
        if !ex.equipment.iter().any(|e| criteria.equipment.contains(e)) {
            return false;
        }

        if ex.difficulty > criteria.max_difficulty {
            return false;
        }

        if criteria.require_compound && !ex.is_compound {
            return false;
        }

        if criteria.exclude.iter().any(|id| *id == ex.id) {
            return false;
        }

        self.is_safe(ex, criteria.constraints)
    }

    /// Conservative contraindication merge: an absolute contraindication
    /// always vetoes on a matching zone, and a relative one vetoes when
    /// the client's own constraint is absolute. The stricter of the two
    /// severities wins.
    fn is_safe(&self, ex: &ExerciseDefinition, constraints: &[ClientConstraint]) -> bool {
        for contra in self.catalog.contraindications_for(&ex.id) {
            for constraint in constraints {
                if contra.body_zone != constraint.body_zone {
                    continue;
                }
                if contra.severity == Severity::Absolute {
                    return false;
                }
                if constraint.severity == Severity::Absolute {
                    return false;
                }
            }
        }
        true
    }

    /// First registered alternative, in priority order, that passes the
    /// same filters as the primary pick
    fn find_substitute(
        &self,
        exercise: &ExerciseDefinition,
        criteria: &SelectionCriteria,
    ) -> Option<&'a ExerciseDefinition> {
        for alt in self.catalog.alternatives_for(&exercise.id) {
            let Some(candidate) = self.catalog.get(&alt.alternative_id) else {
                continue;
            };
            // The substitute answers "what if the primary is unavailable",
            // so it only needs equipment and safety feasibility
            let feasible = candidate
                .equipment
                .iter()
                .any(|e| criteria.equipment.contains(e))
                && candidate.difficulty <= criteria.max_difficulty
                && !criteria.exclude.iter().any(|id| *id == candidate.id)
                && self.is_safe(candidate, criteria.constraints);
            if feasible {
                return Some(candidate);
            }
        }
        None
    }
}

/// Ranking heuristic: free weights over machines, compounds when the slot
/// asked for one, bilateral patterns by a small margin
fn score_exercise(ex: &ExerciseDefinition, criteria: &SelectionCriteria) -> i32 {
    let mut score = 0;

    if ex.equipment.iter().any(|e| e.is_free_weight()) {
        score += 2;
    }

    if criteria.require_compound && ex.is_compound {
        score += 3;
    }

    if ex.pattern == ExecutionPattern::Bilateral {
        score += 1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BodyZone;

    fn gym_equipment() -> Vec<Equipment> {
        vec![
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Rack,
            Equipment::Bench,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Bodyweight,
        ]
    }

    fn criteria<'a>(
        movement: MovementType,
        muscle: MuscleGroup,
        equipment: &'a [Equipment],
        constraints: &'a [ClientConstraint],
        exclude: &'a [String],
    ) -> SelectionCriteria<'a> {
        SelectionCriteria {
            movement: Some(movement),
            muscle: Some(muscle),
            equipment,
            constraints,
            max_difficulty: Difficulty::Advanced,
            require_compound: true,
            exclude,
        }
    }

    #[test]
    fn test_selects_free_weight_compound_first() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();

        let selection = selector
            .select(&criteria(
                MovementType::Squat,
                MuscleGroup::Quads,
                &equipment,
                &[],
                &[],
            ))
            .unwrap();

        // Barbell squat outranks the leg press
        assert_eq!(selection.exercise.id, "back_squat");
    }

    #[test]
    fn test_never_selects_unavailable_equipment() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let only_machines = vec![Equipment::Machine, Equipment::Cable];

        let selection = selector
            .select(&criteria(
                MovementType::Squat,
                MuscleGroup::Quads,
                &only_machines,
                &[],
                &[],
            ))
            .unwrap();

        assert_eq!(selection.exercise.id, "leg_press");
        assert!(selection
            .exercise
            .equipment
            .iter()
            .any(|e| only_machines.contains(e)));
    }

    #[test]
    fn test_absolute_contraindication_vetoes() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();
        // Relative knee constraint is enough against an absolute contraindication
        let constraints = vec![ClientConstraint {
            body_zone: BodyZone::Knee,
            severity: Severity::Relative,
        }];

        let slots = [SlotSpec::new(MovementType::Lunge, MuscleGroup::Glutes, true)];
        let picks = selector.select_for_day(&slots, &equipment, &constraints, Difficulty::Advanced);

        for pick in &picks {
            assert_ne!(pick.exercise.id, "bulgarian_split_squat");
        }
    }

    #[test]
    fn test_relative_contraindication_vetoed_by_absolute_constraint() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();
        let constraints = vec![ClientConstraint {
            body_zone: BodyZone::Knee,
            severity: Severity::Absolute,
        }];

        let selection = selector.select(&criteria(
            MovementType::Squat,
            MuscleGroup::Quads,
            &equipment,
            &constraints,
            &[],
        ));

        // back_squat, front_squat, and leg_press all carry relative knee
        // contraindications; an absolute client constraint drops them all
        assert!(selection.is_none());
    }

    #[test]
    fn test_relative_pair_is_allowed() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();
        let constraints = vec![ClientConstraint {
            body_zone: BodyZone::Knee,
            severity: Severity::Relative,
        }];

        let selection = selector.select(&criteria(
            MovementType::Squat,
            MuscleGroup::Quads,
            &equipment,
            &constraints,
            &[],
        ));

        // Relative against relative stays in
        assert!(selection.is_some());
    }

    #[test]
    fn test_exclusion_list_prevents_repeats() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();
        let exclude = vec!["back_squat".to_string()];

        let selection = selector
            .select(&criteria(
                MovementType::Squat,
                MuscleGroup::Quads,
                &equipment,
                &[],
                &exclude,
            ))
            .unwrap();

        assert_ne!(selection.exercise.id, "back_squat");
    }

    #[test]
    fn test_no_duplicates_within_a_day() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();

        let slots = [
            SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
            SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
            SlotSpec::new(MovementType::Push, MuscleGroup::Chest, false),
        ];
        let picks = selector.select_for_day(&slots, &equipment, &[], Difficulty::Advanced);

        let mut ids: Vec<&str> = picks.iter().map(|p| p.exercise.id.as_str()).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before, "day repeated an exercise");
    }

    #[test]
    fn test_unfillable_slot_is_skipped_not_fatal() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        // No suspension trainer available, so the pike slot cannot fill
        let equipment = vec![Equipment::Barbell, Equipment::Rack, Equipment::Bench];

        let slots = [
            SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
            SlotSpec::new(MovementType::Core, MuscleGroup::Shoulders, false),
        ];
        let picks = selector.select_for_day(&slots, &equipment, &[], Difficulty::Advanced);

        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].exercise.id, "bench_press");
    }

    #[test]
    fn test_difficulty_ceiling_respected() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();

        let slots = [SlotSpec::new(MovementType::Squat, MuscleGroup::Quads, true)];
        let picks = selector.select_for_day(&slots, &equipment, &[], Difficulty::Beginner);

        for pick in &picks {
            assert!(pick.exercise.difficulty <= Difficulty::Beginner);
        }
    }

    #[test]
    fn test_substitute_comes_from_registered_alternatives() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = gym_equipment();

        let selection = selector
            .select(&criteria(
                MovementType::Hinge,
                MuscleGroup::Hamstrings,
                &equipment,
                &[],
                &[],
            ))
            .unwrap();

        assert_eq!(selection.exercise.id, "deadlift");
        // Best-priority feasible alternative for the deadlift
        assert_eq!(selection.substitute.unwrap().id, "romanian_deadlift");
    }

    #[test]
    fn test_substitute_skips_infeasible_alternatives() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        // No machine or cable: the leg press alternative is infeasible,
        // so the goblet squat (priority 2) is attached instead
        let equipment = vec![
            Equipment::Barbell,
            Equipment::Rack,
            Equipment::Kettlebell,
        ];

        let selection = selector
            .select(&criteria(
                MovementType::Squat,
                MuscleGroup::Quads,
                &equipment,
                &[],
                &[],
            ))
            .unwrap();

        assert_eq!(selection.exercise.id, "back_squat");
        assert_eq!(selection.substitute.unwrap().id, "kb_goblet_squat");
    }

    #[test]
    fn test_tie_break_is_catalog_order() {
        let catalog = Catalog::builtin();
        let selector = Selector::new(&catalog);
        let equipment = vec![Equipment::Cable, Equipment::Machine];

        // lat_pulldown and seated_cable_row tie on every score component;
        // lat_pulldown is registered first
        let selection = selector
            .select(&SelectionCriteria {
                movement: Some(MovementType::Pull),
                muscle: Some(MuscleGroup::Back),
                equipment: &equipment,
                constraints: &[],
                max_difficulty: Difficulty::Advanced,
                require_compound: true,
                exclude: &[],
            })
            .unwrap();

        assert_eq!(selection.exercise.id, "lat_pulldown");
    }
}
