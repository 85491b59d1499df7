//! Rounds target loads to plates you can actually load.

/// Smallest loadable step (kg)
pub const WEIGHT_INCREMENT_KG: f64 = 2.5;

/// Never prescribe less than one increment
pub const MINIMUM_WEIGHT_KG: f64 = WEIGHT_INCREMENT_KG;

/// Nearest multiple of the increment, ties rounding up, floored at the minimum
pub fn round_to_increment(raw: f64) -> f64 {
    let steps = (raw / WEIGHT_INCREMENT_KG + 0.5).floor();
    (steps * WEIGHT_INCREMENT_KG).max(MINIMUM_WEIGHT_KG)
}

/// Working weight for `effective_max * percentage`.
///
/// Returns `None` when the max is unknown or not positive; callers render
/// that as bodyweight.
pub fn training_weight(effective_max: Option<f64>, percentage: f64) -> Option<f64> {
    let max = effective_max.filter(|m| m.is_finite() && *m > 0.0)?;
    Some(round_to_increment(max * percentage))
}
