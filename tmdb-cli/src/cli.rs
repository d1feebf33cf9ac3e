use anyhow::bail;
use clap::{Parser, Subcommand};
use tmdb_core::{Config, ListQuery, MovieApi, TmdbClient};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tmdb", version, about = "TMDB CLI Tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the TMDB API key in the local config file.
    Configure,

    /// Search movies by title.
    SearchMovie {
        /// Title (or part of it) to search for.
        query: String,

        /// Page of results to fetch.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Get movie details by ID.
    InfoMovie {
        movie_id: u64,
    },

    /// List the current most popular movies.
    PopularMovies {
        /// Page of results to fetch.
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Language code (e.g. en-US).
        #[arg(long)]
        language: Option<String>,

        /// Country code for regional popularity.
        #[arg(long)]
        region: Option<String>,
    },

    /// List the upcoming movies.
    UpcomingMovies {
        /// Page of results to fetch.
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Language code (e.g. en-US).
        #[arg(long)]
        language: Option<String>,

        /// Country code for regional release dates.
        #[arg(long)]
        region: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            command => {
                let config = Config::load()?;
                let client = TmdbClient::new(config.resolve_api_key()?)?;

                for line in execute(&client, command).await? {
                    println!("{line}");
                }

                Ok(())
            }
        }
    }
}

/// Prompt for the API key and persist it.
fn configure() -> anyhow::Result<()> {
    let api_key = inquire::Text::new("TMDB API key:").prompt()?;

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Run one API command and return the lines to print.
///
/// Empty result sets are domain errors here: each listing reports its own
/// "no results" message carrying the requested page, while `info-movie`
/// always prints its block.
async fn execute(api: &dyn MovieApi, command: Command) -> anyhow::Result<Vec<String>> {
    match command {
        Command::Configure => unreachable!("configure is handled before dispatch"),

        Command::SearchMovie { query, page } => {
            let data = api.search_movies(&query, page).await?;
            if data.results.is_empty() {
                bail!("No movies found matching '{query}'.");
            }

            Ok(data.results.iter().map(output::summary_line).collect())
        }

        Command::InfoMovie { movie_id } => {
            let movie = api.movie_detail(movie_id).await?;
            Ok(output::detail_block(&movie))
        }

        Command::PopularMovies { page, language, region } => {
            let query = ListQuery { page, language, region };
            let data = api.popular_movies(&query).await?;
            if data.results.is_empty() {
                bail!("No popular movies found (page {page}).");
            }

            Ok(data.results.iter().map(output::rated_line).collect())
        }

        Command::UpcomingMovies { page, language, region } => {
            let query = ListQuery { page, language, region };
            let data = api.upcoming_movies(&query).await?;
            if data.results.is_empty() {
                bail!("No upcoming movies found (page {page}).");
            }

            Ok(data.results.iter().map(output::summary_line).collect())
        }
    }
}
