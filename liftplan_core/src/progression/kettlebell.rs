//! Discrete-load progression for kettlebells.
//!
//! Capacity is the finite ascending set of weights the client owns.
//! Progression moves up the ladder on a fixed cadence (faster for
//! ballistic work than for grinds), never past an experience- and
//! gender-conditioned ceiling; when the ladder runs out the calculator
//! reports an alternative way to progress instead of failing.

use crate::types::{Experience, Gender, KettlebellKind};

/// Standard competition kettlebell sizes, used when the client has not
/// declared their own set
pub const STANDARD_WEIGHTS: [f64; 7] = [8.0, 12.0, 16.0, 20.0, 24.0, 28.0, 32.0];

/// Recommended start/ceiling weights for a client
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightWindow {
    pub start_kg: f64,
    pub max_kg: f64,
}

/// Dose for a kettlebell exercise
#[derive(Clone, Debug, PartialEq)]
pub struct KettlebellParams {
    pub weight_kg: f64,
    pub reps: u8,
    pub sets: u8,
    pub rest_seconds: u16,
    pub note: Option<String>,
}

/// What to do when no heavier bell is available
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressionAlternative {
    /// Add this many reps to each set
    AddReps(u8),
    /// Add one more set
    AddSet,
    /// Switch to single-arm execution
    SwitchToUnilateral,
}

/// Calculator over a client's kettlebell ladder
pub struct KettlebellProgression {
    weights: Vec<f64>,
    gender: Gender,
    experience: Experience,
}

impl KettlebellProgression {
    pub fn new(available: &[f64], gender: Gender, experience: Experience) -> Self {
        let mut weights: Vec<f64> = if available.is_empty() {
            STANDARD_WEIGHTS.to_vec()
        } else {
            available.to_vec()
        };
        weights.sort_by(|a, b| a.total_cmp(b));
        weights.dedup();

        Self {
            weights,
            gender,
            experience,
        }
    }

    /// Recommended weight window for an exercise kind.
    ///
    /// Ballistics tolerate heavier bells than grinds at the same level;
    /// complexes are limited by their weakest grind element.
    pub fn recommended_window(&self, kind: KettlebellKind) -> WeightWindow {
        use Experience::*;
        use Gender::*;

        let (ballistic, grind) = match (self.experience, self.gender) {
            (Beginner, Female) => ((8.0, 12.0), (8.0, 12.0)),
            (Beginner, Male) => ((12.0, 16.0), (12.0, 16.0)),
            (Intermediate, Female) => ((12.0, 16.0), (12.0, 16.0)),
            (Intermediate, Male) => ((16.0, 24.0), (16.0, 24.0)),
            (Advanced, Female) => ((16.0, 24.0), (16.0, 20.0)),
            (Advanced, Male) => ((24.0, 32.0), (24.0, 32.0)),
        };

        let (start, max) = match kind {
            KettlebellKind::Ballistic => ballistic,
            KettlebellKind::Grind | KettlebellKind::Complex => grind,
        };

        WeightWindow {
            start_kg: self.closest_available(start),
            max_kg: self.closest_available(max),
        }
    }

    /// Nearest weight the client actually owns; earlier (lighter) weight
    /// wins on an exact tie so starts stay conservative
    pub fn closest_available(&self, target: f64) -> f64 {
        let mut closest = self.weights[0];
        let mut best = (target - closest).abs();
        for &w in &self.weights[1..] {
            let diff = (target - w).abs();
            if diff < best {
                best = diff;
                closest = w;
            }
        }
        closest
    }

    /// The next heavier available weight, or `None` at the top of the ladder
    pub fn next_weight(&self, current: f64) -> Option<f64> {
        self.weights
            .iter()
            .position(|w| (*w - current).abs() < f64::EPSILON)
            .and_then(|i| self.weights.get(i + 1))
            .copied()
    }

    /// Weight for a given week: step up the ladder every `cadence_weeks`,
    /// never past the window ceiling
    fn weight_for_week(&self, window: WeightWindow, week: u32, cadence_weeks: u32) -> f64 {
        let mut current = window.start_kg;
        let steps = week.saturating_sub(1) / cadence_weeks;
        for _ in 0..steps {
            match self.next_weight(current) {
                Some(next) if next <= window.max_kg => current = next,
                _ => break,
            }
        }
        current
    }

    /// Ballistic dose: higher reps, short rest, 3-week weight cadence
    pub fn ballistic_params(&self, week: u32) -> KettlebellParams {
        let window = self.recommended_window(KettlebellKind::Ballistic);
        let weight = self.weight_for_week(window, week, 3);

        // Near the ceiling the reps come down
        let reps = if weight >= window.max_kg * 0.9 { 10 } else { 15 };

        KettlebellParams {
            weight_kg: weight,
            reps,
            sets: 4,
            rest_seconds: 60,
            note: None,
        }
    }

    /// Grind dose: lower reps, long rest, 4-week weight cadence
    pub fn grind_params(&self, week: u32, is_deload: bool) -> KettlebellParams {
        let window = self.recommended_window(KettlebellKind::Grind);
        let mut weight = self.weight_for_week(window, week, 4);

        if is_deload {
            // Drop one bell when a lighter one exists
            if let Some(&lighter) = self
                .weights
                .iter()
                .rev()
                .find(|w| **w < weight)
            {
                weight = lighter;
            }
            return KettlebellParams {
                weight_kg: weight,
                reps: 8,
                sets: 2,
                rest_seconds: 120,
                note: None,
            };
        }

        KettlebellParams {
            weight_kg: weight,
            reps: 8,
            sets: 4,
            rest_seconds: 120,
            note: None,
        }
    }

    /// Complex dose: fixed light bell, reps climb instead of weight
    pub fn complex_params(&self, week: u32) -> KettlebellParams {
        let window = self.recommended_window(KettlebellKind::Complex);
        let reps = (3 + (week.saturating_sub(1) / 2) as u8).min(6);

        KettlebellParams {
            weight_kg: window.start_kg,
            reps,
            sets: 4,
            rest_seconds: 90,
            note: Some("No rest between complex elements".into()),
        }
    }

    pub fn params_for(&self, kind: KettlebellKind, week: u32, is_deload: bool) -> KettlebellParams {
        match kind {
            KettlebellKind::Ballistic => {
                let mut params = self.ballistic_params(week);
                if is_deload {
                    params.sets = 2;
                    params.reps = params.reps.min(10);
                }
                params
            }
            KettlebellKind::Grind => self.grind_params(week, is_deload),
            KettlebellKind::Complex => {
                let mut params = self.complex_params(week);
                if is_deload {
                    params.sets = 2;
                }
                params
            }
        }
    }

    /// How to keep progressing when the ladder is exhausted
    pub fn progression_alternative(
        &self,
        current_weight: f64,
        current_reps: u8,
        current_sets: u8,
    ) -> Option<ProgressionAlternative> {
        if self.next_weight(current_weight).is_some() {
            return None;
        }

        Some(if current_reps < 12 {
            ProgressionAlternative::AddReps(2)
        } else if current_sets < 5 {
            ProgressionAlternative::AddSet
        } else {
            ProgressionAlternative::SwitchToUnilateral
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intermediate_male(weights: &[f64]) -> KettlebellProgression {
        KettlebellProgression::new(weights, Gender::Male, Experience::Intermediate)
    }

    #[test]
    fn test_ballistic_starts_at_recommended_weight() {
        // Intermediate male with {16, 24, 32}: ballistic week 1 is 16 kg
        let kb = intermediate_male(&[16.0, 24.0, 32.0]);
        let params = kb.ballistic_params(1);
        assert_eq!(params.weight_kg, 16.0);
    }

    #[test]
    fn test_progression_never_exceeds_ceiling() {
        let kb = intermediate_male(&[16.0, 24.0, 32.0]);
        for week in 1..=52 {
            let params = kb.ballistic_params(week);
            assert!(
                params.weight_kg <= 32.0,
                "week {week} prescribed {} kg",
                params.weight_kg
            );
            // Ceiling for this client is 24 kg, so 32 must never appear
            assert!(params.weight_kg <= 24.0);
        }
    }

    #[test]
    fn test_prescribed_weight_is_always_available() {
        let weights = [16.0, 24.0, 32.0];
        let kb = intermediate_male(&weights);
        for week in 1..=30 {
            for kind in [
                KettlebellKind::Ballistic,
                KettlebellKind::Grind,
                KettlebellKind::Complex,
            ] {
                let params = kb.params_for(kind, week, false);
                assert!(
                    weights.contains(&params.weight_kg),
                    "{kind:?} week {week}: {} kg not in the client's set",
                    params.weight_kg
                );
            }
        }
    }

    #[test]
    fn test_next_weight_at_top_reports_none() {
        let kb = intermediate_male(&[16.0, 24.0, 32.0]);
        assert_eq!(kb.next_weight(16.0), Some(24.0));
        assert_eq!(kb.next_weight(24.0), Some(32.0));
        assert_eq!(kb.next_weight(32.0), None);
    }

    #[test]
    fn test_ballistic_cadence_faster_than_grind() {
        let kb = intermediate_male(&[16.0, 20.0, 24.0, 28.0, 32.0]);
        // Ballistic steps at week 4, grind not until week 5
        assert_eq!(kb.ballistic_params(3).weight_kg, 16.0);
        assert_eq!(kb.ballistic_params(4).weight_kg, 20.0);
        assert_eq!(kb.grind_params(4, false).weight_kg, 16.0);
        assert_eq!(kb.grind_params(5, false).weight_kg, 20.0);
    }

    #[test]
    fn test_closest_available_prefers_lighter_on_tie() {
        let kb = intermediate_male(&[14.0, 18.0]);
        assert_eq!(kb.closest_available(16.0), 14.0);
    }

    #[test]
    fn test_empty_set_falls_back_to_standard_weights() {
        let kb = KettlebellProgression::new(&[], Gender::Female, Experience::Beginner);
        let params = kb.ballistic_params(1);
        assert!(STANDARD_WEIGHTS.contains(&params.weight_kg));
        assert_eq!(params.weight_kg, 8.0);
    }

    #[test]
    fn test_complex_progresses_reps_not_weight() {
        let kb = intermediate_male(&[16.0, 24.0, 32.0]);
        let week1 = kb.complex_params(1);
        let week5 = kb.complex_params(5);
        let week20 = kb.complex_params(20);

        assert_eq!(week1.weight_kg, week5.weight_kg);
        assert_eq!(week1.reps, 3);
        assert_eq!(week5.reps, 5);
        assert_eq!(week20.reps, 6); // capped
    }

    #[test]
    fn test_alternative_when_ladder_exhausted() {
        let kb = intermediate_male(&[16.0, 24.0, 32.0]);

        assert_eq!(kb.progression_alternative(24.0, 10, 4), None);
        assert_eq!(
            kb.progression_alternative(32.0, 10, 4),
            Some(ProgressionAlternative::AddReps(2))
        );
        assert_eq!(
            kb.progression_alternative(32.0, 12, 4),
            Some(ProgressionAlternative::AddSet)
        );
        assert_eq!(
            kb.progression_alternative(32.0, 12, 5),
            Some(ProgressionAlternative::SwitchToUnilateral)
        );
    }

    #[test]
    fn test_grind_deload_drops_one_bell() {
        let kb = intermediate_male(&[16.0, 24.0, 32.0]);
        // Week 9 grind sits at 24 kg; the deload backs off to 16
        assert_eq!(kb.grind_params(9, false).weight_kg, 24.0);
        let deload = kb.grind_params(9, true);
        assert_eq!(deload.weight_kg, 16.0);
        assert_eq!(deload.sets, 2);
    }
}
