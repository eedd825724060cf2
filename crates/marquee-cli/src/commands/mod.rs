// crates/marquee-cli/src/commands/mod.rs
//
// Command module declarations for the Marquee CLI.

pub mod movie;
pub mod person;
pub mod predict;
pub mod pvalue;

use marquee_engine::Engine;
use marquee_store::JsonFileStore;

use crate::output::OutputFormat;

/// Everything a command needs: the engine over the catalog and the output mode.
pub struct Context {
    pub engine: Engine<JsonFileStore>,
    pub format: OutputFormat,
}
