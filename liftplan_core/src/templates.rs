//! Declarative day templates.
//!
//! Day structure is data, not code: each day type is an ordered list of
//! slots (movement, target muscle, compound requirement) consumed
//! uniformly by the selector, and each split maps a weekly frequency to a
//! sequence of day types. Heavy/medium/light day patterns live here too.

use crate::selector::SlotSpec;
use crate::types::{DayLoad, Goal, MovementType, MuscleGroup};
use crate::{Error, Result};

/// A named day type with its ordered selection slots
#[derive(Clone, Copy, Debug)]
pub struct DayTemplate {
    pub day_type: &'static str,
    pub label: &'static str,
    pub slots: &'static [SlotSpec],
}

const PUSH_SLOTS: [SlotSpec; 4] = [
    SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
    SlotSpec::new(MovementType::Push, MuscleGroup::Shoulders, true),
    SlotSpec::new(MovementType::Push, MuscleGroup::Chest, false),
    SlotSpec::new(MovementType::Push, MuscleGroup::Triceps, false),
];

const PULL_SLOTS: [SlotSpec; 4] = [
    SlotSpec::new(MovementType::Pull, MuscleGroup::Back, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::UpperBack, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::Back, false),
    SlotSpec::new(MovementType::Pull, MuscleGroup::Biceps, false),
];

const LEGS_SLOTS: [SlotSpec; 6] = [
    SlotSpec::new(MovementType::Squat, MuscleGroup::Quads, true),
    SlotSpec::new(MovementType::Hinge, MuscleGroup::Hamstrings, true),
    SlotSpec::new(MovementType::Lunge, MuscleGroup::Glutes, true),
    SlotSpec::new(MovementType::Squat, MuscleGroup::Quads, false),
    SlotSpec::new(MovementType::Hinge, MuscleGroup::Hamstrings, false),
    SlotSpec::new(MovementType::Core, MuscleGroup::Core, false),
];

const UPPER_SLOTS: [SlotSpec; 6] = [
    SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::Back, true),
    SlotSpec::new(MovementType::Push, MuscleGroup::Shoulders, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::UpperBack, false),
    SlotSpec::new(MovementType::Push, MuscleGroup::Triceps, false),
    SlotSpec::new(MovementType::Pull, MuscleGroup::Biceps, false),
];

const FULL_BODY_SLOTS: [SlotSpec; 6] = [
    SlotSpec::new(MovementType::Squat, MuscleGroup::Quads, true),
    SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::Back, true),
    SlotSpec::new(MovementType::Hinge, MuscleGroup::Hamstrings, true),
    SlotSpec::new(MovementType::Push, MuscleGroup::Shoulders, false),
    SlotSpec::new(MovementType::Core, MuscleGroup::Core, false),
];

const SQUAT_DAY_SLOTS: [SlotSpec; 4] = [
    SlotSpec::new(MovementType::Squat, MuscleGroup::Quads, true),
    SlotSpec::new(MovementType::Lunge, MuscleGroup::Glutes, true),
    SlotSpec::new(MovementType::Hinge, MuscleGroup::Hamstrings, false),
    SlotSpec::new(MovementType::Core, MuscleGroup::Core, false),
];

const BENCH_DAY_SLOTS: [SlotSpec; 4] = [
    SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
    SlotSpec::new(MovementType::Push, MuscleGroup::Shoulders, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::UpperBack, false),
    SlotSpec::new(MovementType::Push, MuscleGroup::Triceps, false),
];

const DEADLIFT_DAY_SLOTS: [SlotSpec; 4] = [
    SlotSpec::new(MovementType::Hinge, MuscleGroup::Hamstrings, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::Back, true),
    SlotSpec::new(MovementType::Pull, MuscleGroup::Biceps, false),
    SlotSpec::new(MovementType::Core, MuscleGroup::Core, false),
];

const CONDITIONING_SLOTS: [SlotSpec; 5] = [
    SlotSpec::new(MovementType::Squat, MuscleGroup::Quads, true),
    SlotSpec::new(MovementType::Push, MuscleGroup::Chest, true),
    SlotSpec::new(MovementType::Hinge, MuscleGroup::Glutes, true),
    SlotSpec::movement_only(MovementType::Cardio, false),
    SlotSpec::new(MovementType::Core, MuscleGroup::Core, false),
];

const STATIONS_SLOTS: [SlotSpec; 5] = [
    SlotSpec::new(MovementType::Squat, MuscleGroup::Quads, true),
    SlotSpec::new(MovementType::Hinge, MuscleGroup::Glutes, true),
    SlotSpec::movement_only(MovementType::Carry, false),
    SlotSpec::movement_only(MovementType::Cardio, false),
    SlotSpec::new(MovementType::Core, MuscleGroup::Core, false),
];

const ENGINE_SLOTS: [SlotSpec; 3] = [
    SlotSpec::movement_only(MovementType::Cardio, false),
    SlotSpec::movement_only(MovementType::Carry, false),
    SlotSpec::new(MovementType::Core, MuscleGroup::Core, false),
];

const TEMPLATES: [DayTemplate; 11] = [
    DayTemplate {
        day_type: "push",
        label: "Push",
        slots: &PUSH_SLOTS,
    },
    DayTemplate {
        day_type: "pull",
        label: "Pull",
        slots: &PULL_SLOTS,
    },
    DayTemplate {
        day_type: "legs",
        label: "Legs",
        slots: &LEGS_SLOTS,
    },
    DayTemplate {
        day_type: "upper",
        label: "Upper Body",
        slots: &UPPER_SLOTS,
    },
    DayTemplate {
        day_type: "lower",
        label: "Lower Body",
        slots: &LEGS_SLOTS,
    },
    DayTemplate {
        day_type: "full_body",
        label: "Full Body",
        slots: &FULL_BODY_SLOTS,
    },
    DayTemplate {
        day_type: "squat_day",
        label: "Squat",
        slots: &SQUAT_DAY_SLOTS,
    },
    DayTemplate {
        day_type: "bench_day",
        label: "Bench Press",
        slots: &BENCH_DAY_SLOTS,
    },
    DayTemplate {
        day_type: "deadlift_day",
        label: "Deadlift",
        slots: &DEADLIFT_DAY_SLOTS,
    },
    DayTemplate {
        day_type: "conditioning",
        label: "Conditioning",
        slots: &CONDITIONING_SLOTS,
    },
    DayTemplate {
        day_type: "stations",
        label: "Event Stations",
        slots: &STATIONS_SLOTS,
    },
];

const ENGINE_TEMPLATE: DayTemplate = DayTemplate {
    day_type: "engine",
    label: "Intervals",
    slots: &ENGINE_SLOTS,
};

/// Look up a day template by its type name
pub fn template(day_type: &str) -> Option<&'static DayTemplate> {
    if day_type == ENGINE_TEMPLATE.day_type {
        return Some(&ENGINE_TEMPLATE);
    }
    TEMPLATES.iter().find(|t| t.day_type == day_type)
}

/// The split a goal uses when the request does not name one
pub fn default_split(goal: Goal) -> &'static str {
    match goal {
        Goal::Strength => "powerlifts",
        Goal::Hypertrophy => "push_pull_legs",
        Goal::FatLoss => "conditioning_mix",
        Goal::Event => "event_prep",
    }
}

/// Ordered day types for a split at a weekly frequency.
///
/// Unknown split names are a configuration error; a frequency outside
/// 1-6 is rejected by the assembler before this is called.
pub fn day_sequence(split: &str, days_per_week: u8) -> Result<Vec<&'static DayTemplate>> {
    let names: Vec<&str> = match split {
        "powerlifts" => match days_per_week {
            1 => vec!["full_body"],
            2 => vec!["squat_day", "bench_day"],
            3 => vec!["squat_day", "bench_day", "deadlift_day"],
            4 => vec!["squat_day", "bench_day", "deadlift_day", "upper"],
            5 => vec!["squat_day", "bench_day", "deadlift_day", "upper", "lower"],
            _ => vec![
                "squat_day",
                "bench_day",
                "deadlift_day",
                "upper",
                "lower",
                "full_body",
            ],
        },
        "push_pull_legs" => match days_per_week {
            1 => vec!["full_body"],
            2 => vec!["upper", "lower"],
            3 => vec!["push", "pull", "legs"],
            4 => vec!["upper", "lower", "upper", "lower"],
            5 => vec!["push", "pull", "legs", "upper", "lower"],
            _ => vec!["push", "pull", "legs", "push", "pull", "legs"],
        },
        "upper_lower" => match days_per_week {
            1 => vec!["full_body"],
            2 => vec!["upper", "lower"],
            3 => vec!["upper", "lower", "full_body"],
            4 => vec!["upper", "lower", "upper", "lower"],
            5 => vec!["upper", "lower", "upper", "lower", "full_body"],
            _ => vec!["upper", "lower", "upper", "lower", "upper", "lower"],
        },
        "full_body" => vec!["full_body"; days_per_week as usize],
        "conditioning_mix" => match days_per_week {
            1 => vec!["conditioning"],
            2 => vec!["full_body", "conditioning"],
            3 => vec!["full_body", "conditioning", "full_body"],
            4 => vec!["full_body", "conditioning", "full_body", "conditioning"],
            5 => vec![
                "full_body",
                "conditioning",
                "full_body",
                "conditioning",
                "full_body",
            ],
            _ => vec![
                "full_body",
                "conditioning",
                "full_body",
                "conditioning",
                "full_body",
                "conditioning",
            ],
        },
        "event_prep" => match days_per_week {
            1 => vec!["stations"],
            2 => vec!["stations", "engine"],
            3 => vec!["stations", "engine", "full_body"],
            4 => vec!["stations", "engine", "stations", "engine"],
            5 => vec!["stations", "engine", "stations", "engine", "full_body"],
            _ => vec![
                "stations",
                "engine",
                "stations",
                "engine",
                "full_body",
                "engine",
            ],
        },
        other => {
            return Err(Error::InvalidConfiguration(format!(
                "unknown split '{other}'"
            )))
        }
    };

    Ok(names
        .into_iter()
        .map(|name| template(name).expect("split references a known day type"))
        .collect())
}

/// Heavy/medium/light pattern across the week's sessions
pub fn day_loads(days_per_week: u8) -> Vec<DayLoad> {
    use DayLoad::*;
    match days_per_week {
        1 => vec![Medium],
        2 => vec![Heavy, Medium],
        3 => vec![Heavy, Light, Medium],
        4 => vec![Heavy, Medium, Light, Medium],
        5 => vec![Heavy, Medium, Light, Medium, Heavy],
        6 => vec![Heavy, Medium, Light, Heavy, Medium, Light],
        n => (0..n)
            .map(|i| match i % 3 {
                0 => Heavy,
                1 => Medium,
                _ => Light,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_split_resolves_for_all_frequencies() {
        for split in [
            "powerlifts",
            "push_pull_legs",
            "upper_lower",
            "full_body",
            "conditioning_mix",
            "event_prep",
        ] {
            for days in 1..=6u8 {
                let sequence = day_sequence(split, days).unwrap();
                assert_eq!(sequence.len(), days as usize, "{split} at {days} days");
            }
        }
    }

    #[test]
    fn test_unknown_split_is_rejected() {
        let err = day_sequence("bro_split", 3).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_day_loads_match_frequency() {
        for days in 1..=6u8 {
            assert_eq!(day_loads(days).len(), days as usize);
        }
        // Three days: hard session first, easy in the middle
        assert_eq!(
            day_loads(3),
            vec![DayLoad::Heavy, DayLoad::Light, DayLoad::Medium]
        );
    }

    #[test]
    fn test_templates_have_slots_in_order() {
        for t in &TEMPLATES {
            assert!(!t.slots.is_empty(), "{} has no slots", t.day_type);
        }
        // Compound slots lead the day
        let legs = template("legs").unwrap();
        assert!(legs.slots[0].require_compound);
        assert!(!legs.slots.last().unwrap().require_compound);
    }

    #[test]
    fn test_default_splits_per_goal() {
        assert_eq!(default_split(Goal::Strength), "powerlifts");
        assert_eq!(default_split(Goal::Event), "event_prep");
    }

    #[test]
    fn test_engine_template_resolves() {
        let engine = template("engine").unwrap();
        assert_eq!(engine.label, "Intervals");
        assert!(template("nonexistent").is_none());
    }
}
