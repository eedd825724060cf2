// crates/marquee-cli/src/commands/movie.rs
//
// `marquee movie {add, rate, list}` — movies, their billed cast, and ratings.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use marquee_core::{EntityId, Movie, RatingStore, Subject};

use super::Context;
use crate::output::{format_json, format_table, OutputFormat};

/// Movie management subcommands.
#[derive(Debug, Subcommand)]
pub enum MovieCmd {
    /// Register (or replace) a movie and its cast.
    Add {
        /// Stable movie ID.
        id: String,
        /// Movie title.
        #[arg(long)]
        title: String,
        /// Cast person IDs in billing order, comma separated.
        #[arg(long, value_delimiter = ',')]
        cast: Vec<String>,
    },
    /// Rate a movie you have watched. Feeds each cast member's history.
    Rate {
        /// Movie ID.
        id: String,
        /// Rating between 1.0 and 10.0.
        rating: f64,
    },
    /// List all movies.
    List,
}

#[derive(Tabled, Serialize)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Cast")]
    cast: String,
}

/// Run the movie subcommand.
pub async fn run(cmd: &MovieCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = ctx.engine.store();
    match cmd {
        MovieCmd::Add { id, title, cast } => {
            let movie = Movie {
                id: EntityId::from(id.as_str()),
                title: title.clone(),
                cast: cast
                    .iter()
                    .map(|c| c.trim())
                    .filter(|c| !c.is_empty())
                    .map(EntityId::from)
                    .collect(),
            };
            store.save_movie(&movie).await?;
            println!("Saved movie {} ({}) with {} cast", movie.id, movie.title, movie.cast.len());
        }
        MovieCmd::Rate { id, rating } => {
            store.rate(Subject::Movie(EntityId::from(id.as_str())), *rating).await?;
            println!("Rated movie {}: {}", id, rating);
        }
        MovieCmd::List => {
            let rows: Vec<MovieRow> = store
                .list_movies()
                .await?
                .into_iter()
                .map(|m| MovieRow {
                    id: m.id.to_string(),
                    title: m.title,
                    cast: m.cast.iter().map(EntityId::as_str).collect::<Vec<_>>().join(", "),
                })
                .collect();
            match ctx.format {
                OutputFormat::Json => println!("{}", format_json(&rows)),
                OutputFormat::Table if rows.is_empty() => {
                    println!("No movies yet. Add one with `marquee movie add`.")
                }
                OutputFormat::Table => println!("{}", format_table(&rows)),
            }
        }
    }

    Ok(())
}
