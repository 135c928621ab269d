//! Command-line interface for folio.
//!
//! This module provides the CLI structure for the `folio` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    BuildCommand, ConfigCommand, ContactCommand, ProjectsCommand, RenderCommand, RoutesCommand,
};

/// folio - A static personal portfolio site
///
/// Renders the About, Projects and Contact pages, builds them into a
/// directory of static HTML, and runs the contact form's validation.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the site's routes
    Routes(RoutesCommand),

    /// Print the page for a route
    Render(RenderCommand),

    /// Build the site into a directory
    Build(BuildCommand),

    /// List valid project records
    Projects(ProjectsCommand),

    /// Submit the contact form once
    Contact(ContactCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.verbose, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Routes(RoutesCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "folio");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["folio", "render", "/projects"]).unwrap();
        match cli.command {
            Command::Render(cmd) => assert_eq!(cmd.path, "/projects"),
            other => panic!("Expected Render, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_build_with_out() {
        let cli = Cli::try_parse_from(["folio", "build", "--out", "dist"]).unwrap();
        match cli.command {
            Command::Build(cmd) => assert_eq!(cmd.out, Some(PathBuf::from("dist"))),
            other => panic!("Expected Build, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_contact_defaults_to_blank_fields() {
        let cli = Cli::try_parse_from(["folio", "contact", "--email", "bad"]).unwrap();
        match cli.command {
            Command::Contact(cmd) => {
                assert_eq!(cmd.name, "");
                assert_eq!(cmd.email, "bad");
                assert_eq!(cmd.message, "");
            }
            other => panic!("Expected Contact, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_contact_json_and_html_conflict() {
        let result = Cli::try_parse_from(["folio", "contact", "--json", "--html"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["folio", "config", "validate", "-f", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_global_flags() {
        let cli =
            Cli::try_parse_from(["folio", "-c", "/custom/config.toml", "-vv", "routes"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_with_quiet() {
        let cli = Cli::try_parse_from(["folio", "-q", "projects"]).unwrap();
        assert!(cli.quiet);
    }
}
