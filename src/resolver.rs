//! Matches an exercise name to one of the directly tested anchor lifts.
//!
//! Plain case-insensitive substring checks, evaluated in a fixed order. The
//! press rule carries an exclusion so leg-machine names that mention a bench
//! are not read as a bench press. This is a coarse guard, not a taxonomy:
//! "Romanian Deadlift" or "Bulgarian Split Squat" resolve to their anchors.

use crate::models::{AnchorLift, OneRepMaxProfile};

struct AnchorRule {
    lift: AnchorLift,
    keyword: &'static str,
    excluded: Option<&'static str>,
}

impl AnchorRule {
    fn matches(&self, name_lower: &str) -> bool {
        name_lower.contains(self.keyword)
            && !self.excluded.is_some_and(|ex| name_lower.contains(ex))
    }
}

/// First match wins
const ANCHOR_RULES: [AnchorRule; 3] = [
    AnchorRule {
        lift: AnchorLift::BenchPress,
        keyword: "bench",
        excluded: Some("leg"),
    },
    AnchorRule {
        lift: AnchorLift::BackSquat,
        keyword: "squat",
        excluded: None,
    },
    AnchorRule {
        lift: AnchorLift::Deadlift,
        keyword: "deadlift",
        excluded: None,
    },
];

/// Anchor category for an exercise name, regardless of profile contents
pub fn resolve_anchor(exercise_name: &str) -> Option<AnchorLift> {
    let name_lower = exercise_name.to_lowercase();
    ANCHOR_RULES
        .iter()
        .find(|rule| rule.matches(&name_lower))
        .map(|rule| rule.lift)
}

/// Anchor plus its tested max, only when the profile actually has one
pub fn resolve_one_rep_max(
    exercise_name: &str,
    profile: &OneRepMaxProfile,
) -> Option<(AnchorLift, f64)> {
    let lift = resolve_anchor(exercise_name)?;
    profile.get(lift).map(|max| (lift, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_anchor_names_case_insensitively() {
        assert_eq!(resolve_anchor("Bench Press"), Some(AnchorLift::BenchPress));
        assert_eq!(resolve_anchor("INCLINE BENCH PRESS"), Some(AnchorLift::BenchPress));
        assert_eq!(resolve_anchor("Back squat"), Some(AnchorLift::BackSquat));
        assert_eq!(resolve_anchor("deadlift"), Some(AnchorLift::Deadlift));
    }

    #[test]
    fn test_leg_exclusion_blocks_press_anchor() {
        // Contains "bench" but also "leg": not a bench press
        assert_eq!(resolve_anchor("Single Leg Bench Hip Thrust"), None);
        // Falls through to the squat rule
        assert_eq!(resolve_anchor("Leg Bench Squat"), Some(AnchorLift::BackSquat));
    }

    #[test]
    fn test_leg_press_is_not_an_anchor() {
        assert_eq!(resolve_anchor("Leg Press"), None);
    }

    #[test]
    fn test_coarse_matches_are_preserved() {
        assert_eq!(resolve_anchor("Romanian Deadlift"), Some(AnchorLift::Deadlift));
        assert_eq!(resolve_anchor("Bulgarian Split Squat"), Some(AnchorLift::BackSquat));
        assert_eq!(resolve_anchor("Dumbbell Bench Press"), Some(AnchorLift::BenchPress));
        // Press rule is checked first
        assert_eq!(resolve_anchor("Bench Squat"), Some(AnchorLift::BenchPress));
    }

    #[test]
    fn test_unresolved_names() {
        assert_eq!(resolve_anchor("Overhead Press"), None);
        assert_eq!(resolve_anchor("Pull-ups"), None);
        assert_eq!(resolve_anchor(""), None);
    }

    #[test]
    fn test_resolve_one_rep_max_requires_known_value() {
        let profile = OneRepMaxProfile::default().with(AnchorLift::BackSquat, 140.0);

        assert_eq!(
            resolve_one_rep_max("Front Squat", &profile),
            Some((AnchorLift::BackSquat, 140.0))
        );
        assert_eq!(resolve_one_rep_max("Bench Press", &profile), None);
    }
}
