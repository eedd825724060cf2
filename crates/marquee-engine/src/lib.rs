// crates/marquee-engine/src/lib.rs
//
// marquee-engine: Enjoyment prediction and ensemble p-value computation
// for Marquee.
//
// Bridges the rating store and the scoring core. Prediction scores a movie's
// billed cast; the ensemble p-value estimates how likely a uniformly drawn
// arrangement of a chosen group of people is to clear an enjoyment level.

pub mod config;
pub mod ensemble;
pub mod predict;

pub use config::EngineConfig;
pub use ensemble::EnsembleResult;
pub use predict::{Contribution, Prediction};

use marquee_core::RatingStore;

/// Scoring engine over a rating store.
pub struct Engine<S> {
    store: S,
    config: EngineConfig,
}

impl<S: RatingStore> Engine<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
