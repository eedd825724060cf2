// crates/marquee-engine/src/ensemble.rs
//
// Ensemble p-value: how likely is a group of people to clear an enjoyment
// level when each billing slot is filled uniformly at random from the group?
//
// The group is both the alphabet and the pattern length. The per-position
// enjoyment level is scaled by the length to get the total score threshold.
// Cost grows as |group|^|group|, so the engine refuses groups larger than
// `max_ensemble` and runs the computation on a blocking worker.

use serde::Serialize;

use marquee_core::{EntityId, MarqueeError, RatingStore, WeightedPattern};

use crate::Engine;

/// Result of an ensemble p-value query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleResult {
    /// Distinct members, in the order given.
    pub members: Vec<EntityId>,
    /// Requested per-position enjoyment level.
    pub threshold: f64,
    /// Score threshold passed to the pattern: `threshold * members.len()`.
    pub total_threshold: f64,
    pub pvalue: f64,
}

impl<S: RatingStore> Engine<S> {
    /// Probability that the ensemble clears `threshold` per position.
    ///
    /// Duplicate members are counted once.
    ///
    /// # Errors
    /// - `InvalidState` for an empty ensemble.
    /// - `TooManyEntries` above `max_ensemble` distinct members.
    /// - `NotFound` for a member unknown to the store.
    /// - `RecursionLimit` if the ensemble is longer than `recursion_limit`.
    pub async fn ensemble_pvalue(
        &self,
        members: &[EntityId],
        threshold: f64,
    ) -> Result<EnsembleResult, MarqueeError> {
        let mut distinct: Vec<EntityId> = Vec::with_capacity(members.len());
        for m in members {
            if !distinct.contains(m) {
                distinct.push(m.clone());
            }
        }

        if distinct.is_empty() {
            return Err(MarqueeError::InvalidState("ensemble is empty".to_string()));
        }
        if distinct.len() > self.config.max_ensemble {
            tracing::warn!(
                "Refusing ensemble of {} (maximum {})",
                distinct.len(),
                self.config.max_ensemble
            );
            return Err(MarqueeError::TooManyEntries {
                count: distinct.len(),
                max: self.config.max_ensemble,
            });
        }

        let mut pattern = WeightedPattern::new(distinct.len());
        for person in &distinct {
            let record = self.store.rating_record(person).await?;
            pattern.add_row(person.clone(), &record);
        }

        let total_threshold = threshold * distinct.len() as f64;
        let options = self.config.pvalue_options();
        tracing::debug!(
            "Computing p-value for {} members, threshold {:.3} (memoize={})",
            distinct.len(),
            total_threshold,
            options.memoize
        );

        let pvalue = tokio::task::spawn_blocking(move || pattern.pvalue_with(total_threshold, &options))
            .await
            .map_err(|e| MarqueeError::Worker(e.to_string()))??;

        tracing::info!(
            "Ensemble of {} clears {:.2} with p = {:.4}",
            distinct.len(),
            threshold,
            pvalue
        );

        Ok(EnsembleResult {
            members: distinct,
            threshold,
            total_threshold,
            pvalue,
        })
    }
}
