//! `folio` - CLI for the portfolio site
//!
//! This binary renders pages, builds the static site and exercises the
//! contact form from the command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;

use folio::cli::{
    BuildCommand, Cli, Command, ConfigCommand, ContactCommand, ProjectsCommand, RoutesCommand,
};
use folio::contact::{ContactFormController, Field, SubmitOutcome};
use folio::{init_logging, Config, Error, ProjectStore, Route, Shell, Site};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Config commands load their own file, so a broken config cannot block
    // `config validate` or `config path`
    let load = || Config::load_from(cli.config.clone());

    match cli.command {
        Command::Routes(cmd) => handle_routes(&cmd),
        Command::Render(cmd) => handle_render(&load()?, &cmd.path),
        Command::Build(cmd) => handle_build(&load()?, &cmd),
        Command::Projects(cmd) => handle_projects(&load()?, &cmd),
        Command::Contact(cmd) => handle_contact(&load()?, cmd),
        Command::Config(cmd) => handle_config(cli.config.clone(), cmd),
    }
}

fn shell(config: &Config) -> Result<Shell, Error> {
    let store = ProjectStore::from_config(config)?;
    Ok(Shell::from_config(config, store))
}

fn handle_routes(cmd: &RoutesCommand) -> Result<(), Box<dyn std::error::Error>> {
    if cmd.json {
        let routes: Vec<_> = Route::ALL
            .iter()
            .map(|route| {
                serde_json::json!({
                    "path": route.path(),
                    "label": route.label(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        for route in Route::ALL {
            println!("{:<10} {}", route.path(), route.label());
        }
    }
    Ok(())
}

fn handle_render(config: &Config, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let html = shell(config)?
        .render(path)
        .ok_or_else(|| Error::unknown_route(path))?;
    print!("{html}");
    Ok(())
}

fn handle_build(config: &Config, cmd: &BuildCommand) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = cmd.out.clone().unwrap_or_else(|| config.output_dir());
    let report = Site::new(shell(config)?).build(&out_dir)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for page in &report.pages {
            println!(
                "{:<10} {:<10} {}",
                page.route,
                page.status,
                page.path.display()
            );
        }
        println!();
        println!(
            "{} written, {} unchanged in {}",
            report.written(),
            report.unchanged(),
            out_dir.display()
        );
    }
    Ok(())
}

fn handle_projects(
    config: &Config,
    cmd: &ProjectsCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProjectStore::from_config(config)?;
    let records = store.records();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}  {}", record.id(), record.title());
            println!("    {}", record.description());
            println!("    [{}]", record.tech_stack().join(", "));
        }
        let skipped = store.len() - records.len();
        if skipped > 0 {
            println!();
            println!("{skipped} malformed record(s) skipped");
        }
    }
    Ok(())
}

fn handle_contact(config: &Config, cmd: ContactCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = ContactFormController::new().with_config(&config.contact);
    controller.on_field_change(Field::Name, cmd.name);
    controller.on_field_change(Field::Email, cmd.email);
    controller.on_field_change(Field::Message, cmd.message);

    let outcome = controller.on_submit();

    if cmd.html {
        print!("{}", shell(config)?.render_contact(controller.form()));
    } else if cmd.json {
        let report = serde_json::json!({
            "submitted": controller.form().submitted,
            "errors": controller.form().errors,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &outcome {
            SubmitOutcome::Accepted(_) => println!("{}", config.contact.success_message),
            SubmitOutcome::Rejected(errors) => {
                for (key, message) in errors.iter() {
                    println!("{key}: {message}");
                }
            }
            SubmitOutcome::DeliveryFailed { reason } => {
                println!("{}", config.contact.failure_message);
                println!("  ({reason})");
            }
        }
    }
    Ok(())
}

fn handle_config(
    config_path: Option<PathBuf>,
    cmd: ConfigCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = &Config::load_from(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Site]");
                println!("  Title:              {}", config.site.title);
                println!(
                    "  About paragraphs:   {}",
                    config.site.about_paragraphs.len()
                );
                match &config.site.projects_path {
                    Some(path) => println!("  Projects file:      {}", path.display()),
                    None => println!("  Projects file:      (built-in)"),
                }
                println!("  Output directory:   {}", config.output_dir().display());
                println!();
                println!("[Contact]");
                println!("  Success message:    {}", config.contact.success_message);
                println!("  Failure message:    {}", config.contact.failure_message);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
