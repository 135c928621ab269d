//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Routes command arguments.
#[derive(Debug, Args)]
pub struct RoutesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Route path to render (e.g. "/", "/projects", "/contact")
    pub path: String,
}

/// Build command arguments.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Output directory (overrides the configured one)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Print the build report as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Projects command arguments.
#[derive(Debug, Args)]
pub struct ProjectsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Contact command arguments: one submit attempt with the given values.
#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Sender's name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Sender's email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Message body
    #[arg(long, default_value = "")]
    pub message: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print the Contact page as it looks after the attempt
    #[arg(long, conflicts_with = "json")]
    pub html: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
