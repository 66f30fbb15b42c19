//! Shared types for the season CLI.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document with draft order and schedule
    Json,
    /// One CSV row per matchup
    Csv,
    /// Plain-text tables for reading in a terminal
    Table,
}
