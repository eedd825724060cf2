// crates/marquee-engine/src/config.rs
//
// Tuning for prediction and p-value computation.
// Populated from the `[engine]` table of the CLI config or from defaults.

use marquee_core::PValueOptions;
use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Billing positions considered when predicting a movie.
    /// Influence is zero from position 9 on, so 8 covers every weighted slot.
    #[serde(default = "default_max_cast")]
    pub max_cast: usize,

    /// Largest ensemble accepted for p-value computation.
    #[serde(default = "default_max_ensemble")]
    pub max_ensemble: usize,

    /// Cache p-value sub-results.
    #[serde(default = "default_memoize")]
    pub memoize: bool,

    /// Refuse p-value recursion deeper than this.
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,
}

fn default_max_cast() -> usize {
    8
}

fn default_max_ensemble() -> usize {
    7
}

fn default_memoize() -> bool {
    true
}

fn default_recursion_limit() -> usize {
    16
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cast: default_max_cast(),
            max_ensemble: default_max_ensemble(),
            memoize: default_memoize(),
            recursion_limit: default_recursion_limit(),
        }
    }
}

impl EngineConfig {
    pub fn pvalue_options(&self) -> PValueOptions {
        PValueOptions {
            memoize: self.memoize,
            max_depth: Some(self.recursion_limit),
        }
    }
}
