// crates/marquee-cli/src/commands/pvalue.rs
//
// `marquee pvalue <ID>... --threshold <T>` — probability that an ensemble
// clears an enjoyment level.

use clap::Args;

use marquee_core::{EntityId, MarqueeError};

use super::Context;
use crate::output::{fmt_score, format_json, OutputFormat};

/// Arguments for the pvalue command.
#[derive(Debug, Args)]
pub struct PValueCmd {
    /// Person IDs in the ensemble.
    #[arg(required = true)]
    pub members: Vec<String>,

    /// Per-position enjoyment level the ensemble must reach.
    #[arg(long)]
    pub threshold: f64,
}

/// Run the pvalue command.
pub async fn run(cmd: &PValueCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let members: Vec<EntityId> = cmd.members.iter().map(|m| EntityId::from(m.as_str())).collect();

    let result = match ctx.engine.ensemble_pvalue(&members, cmd.threshold).await {
        Ok(r) => r,
        Err(MarqueeError::TooManyEntries { count, max }) => {
            return Err(format!(
                "Too many entries: {} people selected, at most {} are supported",
                count, max
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&result)),
        OutputFormat::Table => {
            println!("Ensemble of {} people", result.members.len());
            println!("  Threshold:       {} per position", fmt_score(result.threshold));
            println!("  Score threshold: {}", fmt_score(result.total_threshold));
            println!("  p-value:         {:.4}", result.pvalue);
        }
    }

    Ok(())
}
