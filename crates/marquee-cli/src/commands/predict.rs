// crates/marquee-cli/src/commands/predict.rs
//
// `marquee predict <MOVIE_ID>` — predicted enjoyment from the billed cast.

use clap::Args;
use tabled::Tabled;

use marquee_core::{EntityId, RatingStore};

use super::Context;
use crate::output::{fmt_score, format_json, format_table, OutputFormat};

/// Arguments for the predict command.
#[derive(Debug, Args)]
pub struct PredictCmd {
    /// Movie ID to predict.
    pub movie: String,
}

#[derive(Tabled)]
struct ContributionRow {
    #[tabled(rename = "Billing")]
    position: usize,
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

/// Run the predict command.
pub async fn run(cmd: &PredictCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let prediction = ctx.engine.predict(&EntityId::from(cmd.movie.as_str())).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&prediction)),
        OutputFormat::Table => {
            println!("Predicted enjoyment of {} ({})", prediction.title, prediction.movie);
            println!("  Enjoyment: {}", fmt_score(prediction.enjoyment));
            println!("  Score:     {}", fmt_score(prediction.total));
            println!();

            let mut rows = Vec::with_capacity(prediction.contributions.len());
            for c in &prediction.contributions {
                let name = ctx
                    .engine
                    .store()
                    .get_person(&c.person)
                    .await?
                    .map(|p| p.name)
                    .unwrap_or_else(|| c.person.to_string());
                rows.push(ContributionRow {
                    position: c.position,
                    person: name,
                    weight: fmt_score(c.weight),
                });
            }
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
