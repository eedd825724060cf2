// crates/marquee-core/src/transform.rs
//
// Rating transform: turns one entity's rating record into a weight row.
//
// Each position of the row blends the entity's own baseline with how far it
// sits from the scale midpoint, scaled by a billing-position influence curve.
// Top-billed positions carry the full sinusoidal weight; position 9 and later
// carry none.

use std::f64::consts::PI;

use crate::entity::{RatingRecord, NEUTRAL_RATING};

/// Per-entity weights, one per 1-based position.
pub type WeightRow = Vec<f64>;

/// Positions at or beyond this index have zero influence.
const IMPACT_CUTOFF: usize = 9;

/// Influence of a 1-based billing position.
///
/// `sin((pos + 3) * π / 8) + 1` for `pos < 9`, else `0`.
pub fn impact(pos: usize) -> f64 {
    if pos < IMPACT_CUTOFF {
        ((pos as f64 + 3.0) * PI / 8.0).sin() + 1.0
    } else {
        0.0
    }
}

/// Generate a weight row of exactly `length` entries for one record.
///
/// # Formula
/// For each position `pos` in `1..=length`:
/// - `diff = baseline - 5.5`
/// - `delta = mean(history[i] - baseline) / 10` (0 for empty history)
/// - `weight = baseline + (diff + delta) * impact(pos)`
pub fn generate_row(record: &RatingRecord, length: usize) -> WeightRow {
    let diff = record.baseline - NEUTRAL_RATING;
    let delta = history_delta(record);
    let compared = diff + delta;

    (1..=length)
        .map(|pos| record.baseline + compared * impact(pos))
        .collect()
}

/// Mean offset of past-work ratings from the baseline, scaled by 1/10.
fn history_delta(record: &RatingRecord) -> f64 {
    if record.history.is_empty() {
        return 0.0;
    }
    let n = record.history.len() as f64;
    let total: f64 = record.history.iter().map(|h| h - record.baseline).sum();
    total / n / 10.0
}
