// crates/marquee-core/src/pattern.rs
//
// Weighted pattern: per-entity weight rows over a fixed number of positions.
//
// A pattern of length L holds one weight row per registered entity. Scoring
// an ordered list of entities sums each entity's weight at its own position
// (definition 2 of weighted pattern matching). The p-value is the probability
// that a pattern drawn uniformly per position from the registered entities
// scores at least a threshold (definition 4), computed by recursing on the
// final position.

use std::collections::{BTreeMap, HashMap};

use crate::entity::{EntityId, RatingRecord};
use crate::error::MarqueeError;
use crate::transform::{generate_row, WeightRow};

/// Tuning knobs for p-value computation.
///
/// The default is the literal recursion: no cache and no depth limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PValueOptions {
    /// Cache sub-results keyed on (remaining length, remaining threshold).
    pub memoize: bool,
    /// Refuse patterns longer than this many positions.
    pub max_depth: Option<usize>,
}

type Memo = HashMap<(usize, u64), f64>;

/// A fixed-length weight matrix with one row per registered entity.
///
/// Rows are kept in ascending `EntityId` order so that p-value sums are
/// accumulated in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedPattern {
    length: usize,
    matrix: BTreeMap<EntityId, WeightRow>,
}

impl WeightedPattern {
    /// Create an empty pattern with `length` position slots.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            matrix: BTreeMap::new(),
        }
    }

    /// Number of position slots.
    pub fn len(&self) -> usize {
        self.length
    }

    /// True for the zero-length pattern (the p-value base case).
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of distinct registered entities (the alphabet size).
    pub fn alphabet_size(&self) -> usize {
        self.matrix.len()
    }

    /// Registered entities in ascending id order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityId> {
        self.matrix.keys()
    }

    /// The weight row of `entity`, if registered.
    pub fn row(&self, entity: &EntityId) -> Option<&[f64]> {
        self.matrix.get(entity).map(Vec::as_slice)
    }

    /// Generate and store the weight row for `entity`, replacing any prior row.
    pub fn add_row(&mut self, entity: EntityId, record: &RatingRecord) {
        let row = generate_row(record, self.length);
        self.matrix.insert(entity, row);
    }

    /// Weight of `entity` at a 1-based `position` (definition 1).
    ///
    /// # Errors
    /// - `UnknownEntity` if `entity` has no row.
    /// - `PositionOutOfRange` if `position` is outside `[1, length]`.
    pub fn weight_at(&self, position: usize, entity: &EntityId) -> Result<f64, MarqueeError> {
        let row = self
            .matrix
            .get(entity)
            .ok_or_else(|| MarqueeError::UnknownEntity(entity.clone()))?;

        if position == 0 || position > self.length {
            return Err(MarqueeError::PositionOutOfRange {
                position,
                length: self.length,
            });
        }

        Ok(row[position - 1])
    }

    /// Score an ordered list of entities (definition 2).
    ///
    /// The entity at index `c` contributes its weight at position `c + 1`.
    /// Entries past `length` are ignored.
    ///
    /// # Errors
    /// Propagates `UnknownEntity` for any unregistered entity within the
    /// first `length` entries.
    pub fn score(&self, pattern: &[EntityId]) -> Result<f64, MarqueeError> {
        let mut total = 0.0;
        for (c, entity) in pattern.iter().take(self.length).enumerate() {
            total += self.weight_at(c + 1, entity)?;
        }
        Ok(total)
    }

    /// Copy positions `start..=stop` (1-based, inclusive) into a new pattern.
    ///
    /// Every registered entity is carried over with its row truncated to the
    /// range. `stop == start - 1` yields the empty pattern.
    ///
    /// # Errors
    /// - `InvalidRange` if `start < 1` or `stop < start - 1`.
    /// - `PositionOutOfRange` if a non-empty range ends past `length`.
    pub fn slice(&self, start: usize, stop: usize) -> Result<WeightedPattern, MarqueeError> {
        // `stop == start - 1` is the empty range; anything below is negative.
        if start == 0 || stop < start - 1 {
            return Err(MarqueeError::InvalidRange { start, stop });
        }
        let length = if stop < start { 0 } else { stop - start + 1 };
        if length > 0 && stop > self.length {
            return Err(MarqueeError::PositionOutOfRange {
                position: stop,
                length: self.length,
            });
        }

        let matrix = self
            .matrix
            .iter()
            .map(|(entity, row)| {
                let sub = if length == 0 {
                    Vec::new()
                } else {
                    row[start - 1..stop].to_vec()
                };
                (entity.clone(), sub)
            })
            .collect();

        Ok(WeightedPattern { length, matrix })
    }

    /// Probability that a uniformly drawn pattern scores at least `threshold`.
    ///
    /// Equivalent to `pvalue_with(threshold, &PValueOptions::default())`.
    pub fn pvalue(&self, threshold: f64) -> Result<f64, MarqueeError> {
        self.pvalue_with(threshold, &PValueOptions::default())
    }

    /// Probability that a uniformly drawn pattern scores at least `threshold`.
    ///
    /// `p(0, t) = [t <= 0]` and
    /// `p(i, t) = (1/δ) * Σ_c p(i-1, t - w(i, c))` over registered entities `c`.
    ///
    /// The recursion walks prefixes of the existing rows rather than building a
    /// sliced copy at each level; results are the same as slicing `1..=i-1`.
    /// Cost is `O(δ^length)` without memoization.
    ///
    /// # Errors
    /// - `RecursionLimit` if `options.max_depth` is set and `length` exceeds it.
    /// - `DegenerateAlphabet` if `length > 0` and no entity is registered.
    pub fn pvalue_with(&self, threshold: f64, options: &PValueOptions) -> Result<f64, MarqueeError> {
        if let Some(limit) = options.max_depth {
            if self.length > limit {
                return Err(MarqueeError::RecursionLimit {
                    depth: self.length,
                    limit,
                });
            }
        }
        if self.length == 0 {
            return Ok(base_case(threshold));
        }
        if self.matrix.is_empty() {
            return Err(MarqueeError::DegenerateAlphabet {
                length: self.length,
            });
        }

        let rows: Vec<&[f64]> = self.matrix.values().map(Vec::as_slice).collect();
        let mut memo = if options.memoize { Some(Memo::new()) } else { None };
        Ok(prefix_pvalue(&rows, self.length, threshold, &mut memo))
    }
}

fn base_case(threshold: f64) -> f64 {
    if threshold <= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// p-value of the first `remaining` positions of `rows`.
fn prefix_pvalue(rows: &[&[f64]], remaining: usize, threshold: f64, memo: &mut Option<Memo>) -> f64 {
    if remaining == 0 {
        return base_case(threshold);
    }

    let key = (remaining, threshold.to_bits());
    if let Some(cached) = memo.as_ref().and_then(|m| m.get(&key)) {
        return *cached;
    }

    let mut total = 0.0;
    for row in rows {
        total += prefix_pvalue(rows, remaining - 1, threshold - row[remaining - 1], memo);
    }
    let p = (1.0 / rows.len() as f64) * total;

    if let Some(m) = memo.as_mut() {
        m.insert(key, p);
    }
    p
}
