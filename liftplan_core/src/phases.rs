//! Phase planning: dividing a program's total weeks into training blocks.
//!
//! Each goal has a blueprint (ordered phase fractions plus intensity and
//! volume targets); the planner turns a blueprint and a week count into an
//! exact partition of `[1, total_weeks]` with every phase at least one
//! week long.

use crate::types::{Goal, Phase, PhaseKind, VolumeLevel};
use crate::{Error, Result};

/// How a blueprint phase claims its share of the total weeks
#[derive(Clone, Copy, Debug, PartialEq)]
enum WeekShare {
    /// floor(fraction * total), at least 1
    Fraction(f64),
    /// Absorbs whatever the other phases leave over
    Remainder,
    /// Exactly this many weeks
    Fixed(u32),
}

/// One phase of a goal's blueprint
#[derive(Clone, Debug)]
struct PhaseBlueprint {
    name: &'static str,
    kind: PhaseKind,
    share: WeekShare,
    intensity_min: f64,
    intensity_max: f64,
    volume: VolumeLevel,
    focus: &'static str,
}

/// Blueprint for a goal: block-style thirds for strength, a long
/// accumulation for hypertrophy and fat loss, and the reverse
/// (event-preparation) sequence ending in a one-week taper.
fn blueprint_for(goal: Goal) -> Vec<PhaseBlueprint> {
    match goal {
        Goal::Strength => vec![
            PhaseBlueprint {
                name: "Accumulation",
                kind: PhaseKind::Accumulation,
                share: WeekShare::Fraction(1.0 / 3.0),
                intensity_min: 65.0,
                intensity_max: 75.0,
                volume: VolumeLevel::High,
                focus: "Volume, technique, work capacity",
            },
            PhaseBlueprint {
                name: "Intensification",
                kind: PhaseKind::Intensification,
                share: WeekShare::Fraction(1.0 / 3.0),
                intensity_min: 75.0,
                intensity_max: 85.0,
                volume: VolumeLevel::Medium,
                focus: "Converting volume into strength",
            },
            PhaseBlueprint {
                name: "Realization",
                kind: PhaseKind::Realization,
                share: WeekShare::Remainder,
                intensity_min: 85.0,
                intensity_max: 95.0,
                volume: VolumeLevel::Low,
                focus: "Peaking, maximal loads",
            },
        ],
        Goal::Hypertrophy => vec![
            PhaseBlueprint {
                name: "Accumulation",
                kind: PhaseKind::Accumulation,
                share: WeekShare::Fraction(0.6),
                intensity_min: 60.0,
                intensity_max: 72.0,
                volume: VolumeLevel::High,
                focus: "Volume accumulation in moderate rep ranges",
            },
            PhaseBlueprint {
                name: "Intensification",
                kind: PhaseKind::Intensification,
                share: WeekShare::Remainder,
                intensity_min: 72.0,
                intensity_max: 80.0,
                volume: VolumeLevel::Medium,
                focus: "Heavier loading on the built volume base",
            },
            PhaseBlueprint {
                name: "Resensitization",
                kind: PhaseKind::Deload,
                share: WeekShare::Fixed(1),
                intensity_min: 55.0,
                intensity_max: 65.0,
                volume: VolumeLevel::Low,
                focus: "Planned recovery week",
            },
        ],
        Goal::FatLoss => vec![
            PhaseBlueprint {
                name: "Adaptation",
                kind: PhaseKind::Accumulation,
                share: WeekShare::Fraction(0.2),
                intensity_min: 55.0,
                intensity_max: 65.0,
                volume: VolumeLevel::Medium,
                focus: "Movement quality, building tolerance",
            },
            PhaseBlueprint {
                name: "Conditioning",
                kind: PhaseKind::Intensification,
                share: WeekShare::Fraction(0.5),
                intensity_min: 62.0,
                intensity_max: 72.0,
                volume: VolumeLevel::High,
                focus: "Density work, rising energy expenditure",
            },
            PhaseBlueprint {
                name: "Consolidation",
                kind: PhaseKind::Realization,
                share: WeekShare::Remainder,
                intensity_min: 70.0,
                intensity_max: 78.0,
                volume: VolumeLevel::Medium,
                focus: "Holding intensity while volume tapers",
            },
        ],
        Goal::Event => vec![
            PhaseBlueprint {
                name: "Capacity",
                kind: PhaseKind::Capacity,
                share: WeekShare::Fraction(0.25),
                intensity_min: 75.0,
                intensity_max: 85.0,
                volume: VolumeLevel::Medium,
                focus: "Strength foundation for event stations",
            },
            PhaseBlueprint {
                name: "Power endurance",
                kind: PhaseKind::PowerEndurance,
                share: WeekShare::Fraction(1.0 / 3.0),
                intensity_min: 70.0,
                intensity_max: 80.0,
                volume: VolumeLevel::High,
                focus: "Sustained output, station-to-run transitions",
            },
            PhaseBlueprint {
                name: "Specificity",
                kind: PhaseKind::Specificity,
                share: WeekShare::Remainder,
                intensity_min: 85.0,
                intensity_max: 95.0,
                volume: VolumeLevel::Medium,
                focus: "Race-pace simulations",
            },
            PhaseBlueprint {
                name: "Taper",
                kind: PhaseKind::Taper,
                share: WeekShare::Fixed(1),
                intensity_min: 60.0,
                intensity_max: 70.0,
                volume: VolumeLevel::Low,
                focus: "Recovery, staying sharp",
            },
        ],
    }
}

/// Number of phases a goal's plan requires (also the minimum week count)
pub fn minimum_weeks(goal: Goal) -> u32 {
    blueprint_for(goal).len() as u32
}

/// Plan the phases for a goal over `total_weeks` weeks.
///
/// The result is an exact partition: phases are consecutive, the first
/// starts at week 1, the last ends at `total_weeks`, and every phase is at
/// least one week long. Week counts come from the blueprint fractions
/// (floored), with the remainder phase absorbing rounding slack; when the
/// slack runs negative the remainder phase is compressed down to one week
/// and the earlier flexible phases give up weeks, longest first.
pub fn plan_phases(goal: Goal, total_weeks: u32) -> Result<Vec<Phase>> {
    let blueprint = blueprint_for(goal);
    let phase_count = blueprint.len() as u32;

    if total_weeks < phase_count {
        return Err(Error::InvalidConfiguration(format!(
            "{total_weeks} weeks cannot fit the {phase_count} phases a {goal:?} plan needs"
        )));
    }

    // Initial allocation per share rule
    let mut weeks: Vec<u32> = blueprint
        .iter()
        .map(|p| match p.share {
            WeekShare::Fraction(f) => ((total_weeks as f64 * f).floor() as u32).max(1),
            WeekShare::Fixed(n) => n.max(1),
            WeekShare::Remainder => 1, // placeholder, fixed up below
        })
        .collect();

    let remainder_idx = blueprint
        .iter()
        .position(|p| p.share == WeekShare::Remainder)
        .unwrap_or(blueprint.len() - 1);

    // Hand the remainder phase everything the others left over
    let others: u32 = weeks
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != remainder_idx)
        .map(|(_, w)| *w)
        .sum();

    if others < total_weeks {
        weeks[remainder_idx] = total_weeks - others;
    } else {
        // Over-allocated: compress, longest flexible phase first
        weeks[remainder_idx] = 1;
        let mut excess = others + 1 - total_weeks;
        while excess > 0 {
            let donor = weeks
                .iter()
                .enumerate()
                .filter(|(i, w)| {
                    *i != remainder_idx
                        && **w > 1
                        && !matches!(blueprint[*i].share, WeekShare::Fixed(_))
                })
                .max_by_key(|(_, w)| **w)
                .map(|(i, _)| i);
            match donor {
                Some(i) => {
                    weeks[i] -= 1;
                    excess -= 1;
                }
                None => {
                    // Only fixed phases left to shrink
                    let i = weeks
                        .iter()
                        .enumerate()
                        .filter(|(i, w)| *i != remainder_idx && **w > 1)
                        .max_by_key(|(_, w)| **w)
                        .map(|(i, _)| i)
                        .expect("total_weeks >= phase_count guarantees a donor");
                    weeks[i] -= 1;
                    excess -= 1;
                }
            }
        }
    }

    // Materialize consecutive phases
    let mut phases = Vec::with_capacity(blueprint.len());
    let mut current = 1u32;
    for (bp, count) in blueprint.iter().zip(&weeks) {
        phases.push(Phase {
            name: bp.name.to_string(),
            kind: bp.kind,
            week_start: current,
            week_end: current + count - 1,
            intensity_min: bp.intensity_min,
            intensity_max: bp.intensity_max,
            volume: bp.volume,
            focus: bp.focus.to_string(),
        });
        current += count;
    }

    debug_assert_eq!(current - 1, total_weeks);
    tracing::debug!(
        "Planned {} phases over {} weeks for {:?}",
        phases.len(),
        total_weeks,
        goal
    );

    Ok(phases)
}

/// Find the phase covering a week
pub fn phase_for_week(phases: &[Phase], week: u32) -> Option<&Phase> {
    phases.iter().find(|p| p.contains_week(week))
}
