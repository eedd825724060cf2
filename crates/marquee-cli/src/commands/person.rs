// crates/marquee-cli/src/commands/person.rs
//
// `marquee person {add, rate, list, show}` — people and their ratings.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use marquee_core::{generate_row, impact, EntityId, Person, RatingRecord, RatingStore, Subject};

use super::Context;
use crate::output::{fmt_score, format_json, format_table, OutputFormat};

/// Person management subcommands.
#[derive(Debug, Subcommand)]
pub enum PersonCmd {
    /// Register (or rename) a person.
    Add {
        /// Stable person ID.
        id: String,
        /// Display name.
        #[arg(long)]
        name: String,
    },
    /// Rate a person on the 1-10 scale.
    Rate {
        /// Person ID.
        id: String,
        /// Rating between 1.0 and 10.0.
        rating: f64,
    },
    /// List all people.
    List,
    /// Show a person's rating record and generated weight row.
    Show {
        /// Person ID.
        id: String,
        /// Row length (defaults to the engine's max_cast).
        #[arg(long)]
        length: Option<usize>,
    },
}

#[derive(Tabled, Serialize)]
struct PersonRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Baseline")]
    baseline: String,
    #[tabled(rename = "Rated films")]
    films: usize,
}

#[derive(Tabled)]
struct WeightRowEntry {
    #[tabled(rename = "Position")]
    position: usize,
    #[tabled(rename = "Impact")]
    impact: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

#[derive(Serialize)]
struct PersonDetail<'a> {
    person: &'a Person,
    record: &'a RatingRecord,
    row: &'a [f64],
}

/// Run the person subcommand.
pub async fn run(cmd: &PersonCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = ctx.engine.store();
    match cmd {
        PersonCmd::Add { id, name } => {
            let person = Person {
                id: EntityId::from(id.as_str()),
                name: name.clone(),
            };
            store.save_person(&person).await?;
            println!("Saved person {} ({})", person.id, person.name);
        }
        PersonCmd::Rate { id, rating } => {
            store.rate(Subject::Person(EntityId::from(id.as_str())), *rating).await?;
            println!("Rated person {}: {}", id, rating);
        }
        PersonCmd::List => {
            let mut rows = Vec::new();
            for person in store.list_people().await? {
                let record = store.rating_record(&person.id).await?;
                rows.push(PersonRow {
                    id: person.id.to_string(),
                    name: person.name,
                    baseline: fmt_score(record.baseline),
                    films: record.history.len(),
                });
            }
            match ctx.format {
                OutputFormat::Json => println!("{}", format_json(&rows)),
                OutputFormat::Table if rows.is_empty() => {
                    println!("No people yet. Add one with `marquee person add`.")
                }
                OutputFormat::Table => println!("{}", format_table(&rows)),
            }
        }
        PersonCmd::Show { id, length } => {
            let id = EntityId::from(id.as_str());
            let person = store
                .get_person(&id)
                .await?
                .ok_or_else(|| format!("Person {} not found", id))?;
            let record = store.rating_record(&id).await?;
            let length = length.unwrap_or(ctx.engine.config().max_cast);
            let row = generate_row(&record, length);

            match ctx.format {
                OutputFormat::Json => println!(
                    "{}",
                    format_json(&PersonDetail {
                        person: &person,
                        record: &record,
                        row: &row,
                    })
                ),
                OutputFormat::Table => {
                    println!("{} ({})", person.name, person.id);
                    println!("  Baseline:    {}", fmt_score(record.baseline));
                    println!("  Rated films: {}", record.history.len());
                    println!();
                    let entries: Vec<WeightRowEntry> = row
                        .iter()
                        .enumerate()
                        .map(|(i, w)| WeightRowEntry {
                            position: i + 1,
                            impact: fmt_score(impact(i + 1)),
                            weight: fmt_score(*w),
                        })
                        .collect();
                    println!("{}", format_table(&entries));
                }
            }
        }
    }

    Ok(())
}
