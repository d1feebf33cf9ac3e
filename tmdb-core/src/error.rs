use thiserror::Error;

/// Failures raised by the TMDB client.
///
/// Display strings double as the user-facing messages the CLI prints, so
/// their wording is part of the interface.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// The server answered with a non-2xx status.
    #[error("TMDB API error: {status_code} {reason}")]
    Api { status_code: u16, reason: String },

    /// No usable response was obtained: DNS failure, TLS failure, timeout,
    /// connection reset.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the JSON shape we expected.
    #[error("Failed to decode TMDB response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(
        "No TMDB API key configured.\n\
         Hint: export TMDB_API_KEY or run `tmdb configure` first."
    )]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, TmdbError>;
