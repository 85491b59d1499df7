//! Per-exercise prescription
//!
//! Decision order for one exercise slot:
//! 1. Name resolves to an anchor with a known max -> percentage of the
//!    progressed max, rep range and rest from the week's intensity
//! 2. Otherwise the ratio estimator -> estimated load (or bodyweight)
//! 3. Otherwise the template's static defaults pass through untouched
//!
//! Nothing here fails: every "can't compute" path degrades to bodyweight or
//! the static default.

use tracing::debug;

use crate::estimator::{self, Estimate};
use crate::models::{AnchorLift, ExercisePrescription, ExerciseTemplate, OneRepMaxProfile};
use crate::periodization::{rep_range, rest_period, CycleWeek, WeekNumber};
use crate::resolver::resolve_one_rep_max;
use crate::rounding::training_weight;

pub const BODYWEIGHT: &str = "bodyweight";
const DELOAD_NOTE: &str = "Deload week - focus on form";

// ---------------------------------------------------------------------------
/// Load Label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Load {
    Kilograms(f64),
    Bodyweight,
}

impl Load {
    pub fn from_weight(weight: Option<f64>) -> Self {
        weight.map_or(Load::Bodyweight, Load::Kilograms)
    }
}

impl std::fmt::Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Load::Kilograms(kg) => write!(f, "{}kg", kg),
            Load::Bodyweight => write!(f, "{}", BODYWEIGHT),
        }
    }
}

// ---------------------------------------------------------------------------
/// Prescription Path
// ---------------------------------------------------------------------------

/// Which rule produced a prescription
#[derive(Debug, Clone, PartialEq)]
pub enum PrescriptionPath {
    Direct { lift: AnchorLift, one_rep_max: f64 },
    Estimated(Estimate),
}

pub fn prescription_path(exercise_name: &str, profile: &OneRepMaxProfile, week: &CycleWeek) -> PrescriptionPath {
    match resolve_one_rep_max(exercise_name, profile) {
        Some((lift, one_rep_max)) => PrescriptionPath::Direct { lift, one_rep_max },
        None => PrescriptionPath::Estimated(estimator::estimate(exercise_name, profile, week)),
    }
}

// ---------------------------------------------------------------------------
/// Builders
// ---------------------------------------------------------------------------

/// Percentage-based prescription for a lift with a tested max
pub fn progressive_exercise(name: &str, sets: u32, one_rep_max: f64, week: &CycleWeek) -> ExercisePrescription {
    let weight = training_weight(Some(week.effective_max(one_rep_max)), week.percentage);

    let notes = if week.is_deload {
        DELOAD_NOTE.to_string()
    } else {
        format!("Week {} - {}% 1RM", week.week_in_cycle, week.percent_label())
    };

    ExercisePrescription {
        name: name.to_string(),
        sets,
        reps: rep_range(week.percentage).to_string(),
        rest: rest_period(week.percentage).to_string(),
        weight: Some(Load::from_weight(weight).to_string()),
        notes: Some(notes),
    }
}

/// Prescribe one template slot for the given week
pub fn prescribe(template: &ExerciseTemplate, profile: &OneRepMaxProfile, week: WeekNumber) -> ExercisePrescription {
    let cycle_week = CycleWeek::from_week(week);

    match prescription_path(&template.name, profile, &cycle_week) {
        PrescriptionPath::Direct { lift, one_rep_max } => {
            debug!(exercise = %template.name, %lift, one_rep_max, week = %week, "direct prescription");
            progressive_exercise(&template.name, template.sets, one_rep_max, &cycle_week)
        }
        PrescriptionPath::Estimated(Estimate::Bodyweight) => {
            debug!(exercise = %template.name, "bodyweight movement");
            ExercisePrescription {
                weight: Some(Load::Bodyweight.to_string()),
                notes: None,
                ..ExercisePrescription::from(template)
            }
        }
        PrescriptionPath::Estimated(Estimate::Load { weight_kg, note }) => {
            debug!(exercise = %template.name, weight_kg, %note, week = %week, "estimated prescription");
            ExercisePrescription {
                weight: Some(Load::Kilograms(weight_kg).to_string()),
                notes: Some(note),
                ..ExercisePrescription::from(template)
            }
        }
        PrescriptionPath::Estimated(outcome) => {
            debug!(exercise = %template.name, ?outcome, "keeping static defaults");
            ExercisePrescription::from(template)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bench_only_profile, full_profile};

    fn week(n: u32) -> WeekNumber {
        WeekNumber::new(n).unwrap()
    }

    fn slot(name: &str) -> ExerciseTemplate {
        ExerciseTemplate::new(name, 4, "8-10", "90s")
    }

    #[test]
    fn test_direct_press_week_one() {
        let result = prescribe(&slot("Bench Press"), &bench_only_profile(), week(1));

        assert_eq!(result.weight.as_deref(), Some("70kg"));
        assert_eq!(result.reps, "8-12");
        assert_eq!(result.rest, "90s");
        assert_eq!(result.notes.as_deref(), Some("Week 1 - 70% 1RM"));
        assert_eq!(result.sets, 4);
    }

    #[test]
    fn test_direct_press_week_three() {
        let result = prescribe(&slot("Bench Press"), &bench_only_profile(), week(3));

        assert_eq!(result.weight.as_deref(), Some("80kg"));
        assert_eq!(result.reps, "6-8");
        assert_eq!(result.rest, "2-3min");
        assert_eq!(result.notes.as_deref(), Some("Week 3 - 80% 1RM"));
    }

    #[test]
    fn test_deload_week_note() {
        let result = prescribe(&slot("Bench Press"), &bench_only_profile(), week(4));

        assert_eq!(result.weight.as_deref(), Some("65kg"));
        assert_eq!(result.reps, "8-12");
        assert_eq!(result.notes.as_deref(), Some("Deload week - focus on form"));
    }

    #[test]
    fn test_second_cycle_uses_progressed_max() {
        // Max 100 + 2.5 in cycle 1; 102.5 * 0.70 = 71.75 -> 72.5
        let result = prescribe(&slot("Bench Press"), &bench_only_profile(), week(5));
        assert_eq!(result.weight.as_deref(), Some("72.5kg"));
        assert_eq!(result.notes.as_deref(), Some("Week 1 - 70% 1RM"));
    }

    #[test]
    fn test_estimated_lift_keeps_template_reps_and_rest() {
        let result = prescribe(&slot("Incline Dumbbell Press"), &bench_only_profile(), week(1));

        assert_eq!(result.weight.as_deref(), Some("27.5kg"));
        assert_eq!(result.notes.as_deref(), Some("30% of Bench 1RM"));
        assert_eq!(result.reps, "8-10");
        assert_eq!(result.rest, "90s");
    }

    #[test]
    fn test_bodyweight_has_no_notes() {
        for n in [1, 3, 4, 11] {
            let result = prescribe(&slot("Pull-ups"), &full_profile(), week(n));
            assert_eq!(result.weight.as_deref(), Some("bodyweight"));
            assert_eq!(result.notes, None);
        }
    }

    #[test]
    fn test_unresolved_exercise_passes_through() {
        let template = ExerciseTemplate::new("Plank", 3, "60s", "45s");
        let result = prescribe(&template, &full_profile(), week(2));
        assert_eq!(result, ExercisePrescription::from(&template));
        assert_eq!(result.weight, None);
    }

    #[test]
    fn test_empty_profile_keeps_static_weight() {
        let template = slot("Barbell Row").with_weight("50kg");
        let result = prescribe(&template, &OneRepMaxProfile::default(), week(1));
        assert_eq!(result.weight.as_deref(), Some("50kg"));
        assert_eq!(result.notes, None);
    }

    #[test]
    fn test_anchor_without_max_falls_back_to_estimate() {
        // Squat known, bench unknown: the bench press rule has no base value
        let profile = OneRepMaxProfile::default().with(AnchorLift::BackSquat, 120.0);
        let result = prescribe(&slot("Bench Press"), &profile, week(1));
        assert_eq!(result.weight.as_deref(), Some("2.5kg"));
        assert_eq!(result.notes.as_deref(), Some("75% of Bench 1RM"));
    }

    #[test]
    fn test_prescription_path_selection() {
        let profile = bench_only_profile();
        let cycle_week = CycleWeek::from_week(week(1));

        assert_eq!(
            prescription_path("Bench Press", &profile, &cycle_week),
            PrescriptionPath::Direct {
                lift: AnchorLift::BenchPress,
                one_rep_max: 100.0
            }
        );
        assert_eq!(
            prescription_path("Lat Pulldown", &profile, &cycle_week),
            PrescriptionPath::Estimated(Estimate::Load {
                weight_kg: 55.0,
                note: "60% of Upper 1RM".to_string()
            })
        );
        assert_eq!(
            prescription_path("Plank", &profile, &cycle_week),
            PrescriptionPath::Estimated(Estimate::Unresolved)
        );
    }

    #[test]
    fn test_leg_press_never_uses_bench() {
        // Bench known, squat unknown: still the squat rule, floored
        let result = prescribe(&slot("Leg Press"), &bench_only_profile(), week(1));
        assert_eq!(result.weight.as_deref(), Some("2.5kg"));
        assert_eq!(result.notes.as_deref(), Some("120% of Squat 1RM"));

        let result = prescribe(&slot("Leg Press"), &full_profile(), week(1));
        assert_eq!(result.notes.as_deref(), Some("120% of Squat 1RM"));
    }

    #[test]
    fn test_load_labels() {
        assert_eq!(Load::Kilograms(70.0).to_string(), "70kg");
        assert_eq!(Load::Kilograms(72.5).to_string(), "72.5kg");
        assert_eq!(Load::from_weight(None).to_string(), "bodyweight");
    }

    #[test]
    fn test_prescription_wire_shape() {
        let result = prescribe(&slot("Pull-ups"), &full_profile(), week(1));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Pull-ups",
                "sets": 4,
                "reps": "8-10",
                "rest": "90s",
                "weight": "bodyweight",
                "notes": null
            })
        );
    }
}
