//! Ratio-based load estimation for exercises that were never tested
//!
//! Each rule says "this movement is roughly X% of that lift's 1RM". The base
//! lift is either one of the anchors or a derived composite:
//! - upper-body strength: bench, else 0.6 x deadlift, else 0.75 x squat
//! - lower-body strength: squat, else 0.8 x deadlift, else 1.3 x bench
//!
//! Ratios are calibrated at 75% intensity and scaled by the current week's
//! percentage so estimated lifts follow the same wave as the anchors.

use crate::models::{AnchorLift, OneRepMaxProfile};
use crate::periodization::CycleWeek;
use crate::rounding::round_to_increment;

/// Percentage the ratio table is calibrated against
pub const REFERENCE_PERCENTAGE: f64 = 0.75;

// ---------------------------------------------------------------------------
/// Base Lift Selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLift {
    Anchor(AnchorLift),
    UpperBody,
    LowerBody,
}

/// Candidate `(lift, factor)` pairs, first non-zero product wins
const UPPER_BODY_CANDIDATES: [(AnchorLift, f64); 3] = [
    (AnchorLift::BenchPress, 1.0),
    (AnchorLift::Deadlift, 0.6),
    (AnchorLift::BackSquat, 0.75),
];

const LOWER_BODY_CANDIDATES: [(AnchorLift, f64); 3] = [
    (AnchorLift::BackSquat, 1.0),
    (AnchorLift::Deadlift, 0.8),
    (AnchorLift::BenchPress, 1.3),
];

fn first_non_zero(candidates: &[(AnchorLift, f64)], profile: &OneRepMaxProfile) -> f64 {
    candidates
        .iter()
        .map(|(lift, factor)| profile.value_or_zero(*lift) * factor)
        .find(|value| *value > 0.0)
        .unwrap_or(0.0)
}

pub fn upper_body_strength(profile: &OneRepMaxProfile) -> f64 {
    first_non_zero(&UPPER_BODY_CANDIDATES, profile)
}

pub fn lower_body_strength(profile: &OneRepMaxProfile) -> f64 {
    first_non_zero(&LOWER_BODY_CANDIDATES, profile)
}

impl BaseLift {
    /// Base value in kg; zero when the selected lift is unknown
    pub fn value(&self, profile: &OneRepMaxProfile) -> f64 {
        match self {
            BaseLift::Anchor(lift) => profile.value_or_zero(*lift),
            BaseLift::UpperBody => upper_body_strength(profile),
            BaseLift::LowerBody => lower_body_strength(profile),
        }
    }

    /// Short name used in coaching notes
    pub fn label(&self) -> &'static str {
        match self {
            BaseLift::Anchor(AnchorLift::BenchPress) => "Bench",
            BaseLift::Anchor(AnchorLift::BackSquat) => "Squat",
            BaseLift::Anchor(AnchorLift::Deadlift) => "Deadlift",
            BaseLift::UpperBody => "Upper",
            BaseLift::LowerBody => "Lower",
        }
    }
}

// ---------------------------------------------------------------------------
/// Ratio Rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioRule {
    pub keyword: &'static str,
    pub base: BaseLift,
    /// 0.0 marks a bodyweight-only movement
    pub ratio: f64,
}

const BENCH: BaseLift = BaseLift::Anchor(AnchorLift::BenchPress);
const SQUAT: BaseLift = BaseLift::Anchor(AnchorLift::BackSquat);
const DEADLIFT: BaseLift = BaseLift::Anchor(AnchorLift::Deadlift);
const UPPER: BaseLift = BaseLift::UpperBody;
const LOWER: BaseLift = BaseLift::LowerBody;

const fn rule(keyword: &'static str, base: BaseLift, ratio: f64) -> RatioRule {
    RatioRule { keyword, base, ratio }
}

/// Evaluated top to bottom, first keyword contained in the name wins.
/// A keyword that contains another keyword must sit above it.
pub const RATIO_RULES: &[RatioRule] = &[
    // Push
    rule("incline dumbbell press", BENCH, 0.30),
    rule("dumbbell bench press", BENCH, 0.35),
    rule("incline bench", BENCH, 0.65),
    rule("bench press", BENCH, 0.75),
    rule("dumbbell shoulder press", BENCH, 0.25),
    rule("overhead tricep extension", UPPER, 0.25),
    rule("overhead press", BENCH, 0.50),
    rule("cable fly", BENCH, 0.20),
    rule("tricep pushdown", UPPER, 0.35),
    rule("tricep dips", UPPER, 0.0),
    rule("dips", UPPER, 0.0),
    rule("push-ups", UPPER, 0.0),
    // Pull
    rule("barbell row", BENCH, 0.65),
    rule("pull-ups", UPPER, 0.0),
    rule("lat pulldown", UPPER, 0.60),
    rule("cable row", UPPER, 0.55),
    rule("face pulls", UPPER, 0.25),
    rule("rear delt fly", UPPER, 0.10),
    // Legs
    rule("front squat", SQUAT, 0.60),
    rule("bulgarian split squat", SQUAT, 0.25),
    rule("squat", SQUAT, 0.75),
    rule("romanian deadlift", DEADLIFT, 0.55),
    rule("deadlift", DEADLIFT, 0.75),
    rule("leg press", SQUAT, 1.2),
    rule("leg extension", SQUAT, 0.40),
    rule("leg curl", SQUAT, 0.35),
    rule("hamstring curl", SQUAT, 0.30),
    rule("seated calf raise", LOWER, 0.40),
    rule("calf raise", LOWER, 0.60),
    rule("hip thrust", SQUAT, 0.80),
    rule("walking lunges", SQUAT, 0.20),
    // Arms and shoulders
    rule("hammer curl", UPPER, 0.18),
    rule("dumbbell curl", UPPER, 0.15),
    rule("barbell curl", UPPER, 0.35),
    rule("cable curl", UPPER, 0.30),
    rule("lateral raise", UPPER, 0.12),
    rule("front raise", UPPER, 0.12),
];

/// Broad buckets tried when no specific rule matches
struct FallbackRule {
    keywords: &'static [&'static str],
    ratio: f64,
}

const FALLBACK_RULES: [FallbackRule; 3] = [
    FallbackRule {
        keywords: &["curl", "raise"],
        ratio: 0.15,
    },
    FallbackRule {
        keywords: &["press"],
        ratio: 0.40,
    },
    FallbackRule {
        keywords: &["row", "pull"],
        ratio: 0.50,
    },
];

/// Specific rule first, then the broad upper-body buckets
pub fn match_rule(exercise_name: &str) -> Option<RatioRule> {
    let name_lower = exercise_name.to_lowercase();

    RATIO_RULES
        .iter()
        .find(|rule| name_lower.contains(rule.keyword))
        .copied()
        .or_else(|| {
            FALLBACK_RULES
                .iter()
                .find(|fallback| fallback.keywords.iter().any(|k| name_lower.contains(k)))
                .map(|fallback| RatioRule {
                    keyword: fallback.keywords[0],
                    base: UPPER,
                    ratio: fallback.ratio,
                })
        })
}

// ---------------------------------------------------------------------------
/// Estimation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Estimate {
    /// Profile has no usable anchor at all
    NoData,
    /// Name matches neither a rule nor a fallback bucket
    Unresolved,
    /// Zero-ratio movement
    Bodyweight,
    Load { weight_kg: f64, note: String },
}

pub fn estimate(exercise_name: &str, profile: &OneRepMaxProfile, week: &CycleWeek) -> Estimate {
    if !profile.has_any() {
        return Estimate::NoData;
    }

    let Some(rule) = match_rule(exercise_name) else {
        return Estimate::Unresolved;
    };

    if rule.ratio == 0.0 {
        return Estimate::Bodyweight;
    }

    let base_weight = rule.base.value(profile) * rule.ratio;
    let final_weight = base_weight * (week.percentage / REFERENCE_PERCENTAGE);

    Estimate::Load {
        weight_kg: round_to_increment(final_weight),
        note: format!(
            "{}% of {} 1RM",
            (rule.ratio * 100.0).round() as u32,
            rule.base.label()
        ),
    }
}
