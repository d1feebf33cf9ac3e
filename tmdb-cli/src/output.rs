//! Formatting helpers for the listing and detail views. Pure string work,
//! no I/O.

use tmdb_core::{MovieDetail, MovieSummary};

/// First four characters of a `release_date`; no date parsing or validation.
/// Shorter or absent values come back truncated or empty.
fn year(release_date: Option<&str>) -> String {
    release_date.unwrap_or("").chars().take(4).collect()
}

/// `{id:>6}  {title} ({year})` — search and upcoming listings.
pub fn summary_line(movie: &MovieSummary) -> String {
    format!("{:>6}  {} ({})", movie.id, movie.title, year(movie.release_date.as_deref()))
}

/// Popular listing line: summary plus the rating rounded to one decimal.
/// An absent `vote_average` prints as 0.0.
pub fn rated_line(movie: &MovieSummary) -> String {
    format!(
        "{:>6}  {} ({}) ({:.1} / 10)",
        movie.id,
        movie.title,
        year(movie.release_date.as_deref()),
        movie.vote_average.unwrap_or(0.0),
    )
}

/// The five fixed lines of `info-movie`, in order: title, release date,
/// rating, vote count, overview.
pub fn detail_block(movie: &MovieDetail) -> Vec<String> {
    let rating = movie
        .vote_average
        .map_or_else(|| "N/A".to_string(), |value| value.to_string());

    vec![
        format!("Title:       {}", movie.title.as_deref().unwrap_or("N/A")),
        format!("Release:     {}", movie.release_date.as_deref().unwrap_or("N/A")),
        format!("Rating:      {rating} / 10"),
        format!("Vote count:  {}", movie.vote_count),
        format!("Overview:    {}", movie.overview.as_deref().unwrap_or("")),
    ]
}
