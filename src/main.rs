mod config;
mod report;

use crate::config::Config;

use animebase::{Database, character, power, series};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "animepower", version, about = "Query anime characters and series")]
struct Cli {
    /// Dataset to query (.ron or .json). Defaults to the built-in sample.
    #[arg(long, env = "ANIMEPOWER_DATA", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every character
    Characters,
    /// List every series
    Series,
    /// Sum of all power levels
    TotalPower,
    /// The most powerful character
    Strongest,
    /// Series that have finished airing
    Completed,
    /// Rounded mean of episode counts
    AverageEpisodes,
    /// Rank a raw power level
    Rank { power: f64 },
    /// Characters sorted by descending power
    Ranking,
    /// Characters whose series contains the given name
    BySeries { name: String },
    /// Distinct series named by characters
    UniqueSeries,
    /// Rounded mean of power levels
    AveragePower,
    /// Characters with an ability containing the query
    Ability { query: String },
    /// Series whose genre contains the query
    Genre { query: String },
    /// The series with the most episodes
    Longest,
    /// Library version
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load().await?;

    let database = match cli.data.or(config.data) {
        Some(path) => Database::load(path).await?,
        None => Database::sample(),
    };

    log::debug!("{database:?}");

    run(cli.command, &database);

    Ok(())
}

fn run(command: Command, database: &Database) {
    let characters = &database.characters;
    let all_series = database.series.values();

    match command {
        Command::Characters => report::characters(characters.iter()),
        Command::Series => report::series(all_series),
        Command::TotalPower => println!("{}", character::total_power(characters)),
        Command::Strongest => report::character(character::most_powerful(characters)),
        Command::Completed => report::series(series::completed(all_series)),
        Command::AverageEpisodes => println!("{}", series::average_episodes(all_series)),
        Command::Rank { power: level } => println!("{}", power::ranking(level)),
        Command::Ranking => report::characters(character::sort_by_power(characters)),
        Command::BySeries { name } => {
            report::characters(character::by_series(characters, &name));
        }
        Command::UniqueSeries => {
            for title in character::unique_series(characters) {
                println!("{title}");
            }
        }
        Command::AveragePower => println!("{}", character::average_power(characters)),
        Command::Ability { query } => {
            report::characters(character::with_ability(characters, &query));
        }
        Command::Genre { query } => report::series(series::by_genre(all_series, &query)),
        Command::Longest => report::single_series(series::longest(all_series)),
        Command::Version => println!("{}", animebase::VERSION),
    }
}
