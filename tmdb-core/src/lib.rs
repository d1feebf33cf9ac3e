//! Core library for the `tmdb` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The HTTP client for The Movie Database API
//! - Shared response models and the error taxonomy
//!
//! It is used by `tmdb-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{MovieApi, TmdbClient};
pub use config::Config;
pub use error::{Result, TmdbError};
pub use model::{ListQuery, MovieDetail, MoviePage, MovieSummary};
