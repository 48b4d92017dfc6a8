//! Command dispatch: routes each subcommand to its handler.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::DemoService;
use crate::application::{ApplicationError, IoResultExt, Pattern};
use crate::cli::args::{Cli, Commands, ConfigCommands, TreeStyle};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::TreeNodeConvert;

/// Run the parsed command.
///
/// Settings are loaded only for commands that read them, so `list`,
/// `config template`, `config path` and `completion` work with a broken
/// config file.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List) => _list(),
        Some(Commands::Run { pattern }) => _run(&service(cli)?, *pattern),
        Some(Commands::All) => _all(&service(cli)?),
        Some(Commands::Tree { style }) => _tree(&service(cli)?, *style),
        Some(Commands::Glyphs {
            document,
            point_size,
        }) => _glyphs(&service(cli)?, document.as_deref(), *point_size),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn service(cli: &Cli) -> CliResult<DemoService> {
    let settings = Settings::load(cli.config_dir.as_deref())?;
    debug!(?settings, "settings loaded");
    Ok(DemoService::new(settings))
}

fn _list() -> CliResult<()> {
    output::header("Patterns");
    for pattern in Pattern::ALL {
        output::entry(pattern.name(), pattern.summary());
    }
    Ok(())
}

#[instrument(skip(service))]
fn _run(service: &DemoService, pattern: Pattern) -> CliResult<()> {
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    service.run(pattern, &mut sink)?;
    sink.flush().with_context("flush stdout")?;
    Ok(())
}

#[instrument(skip(service))]
fn _all(service: &DemoService) -> CliResult<()> {
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    service.run_all(&mut sink)?;
    sink.flush().with_context("flush stdout")?;
    Ok(())
}

#[instrument(skip(service))]
fn _tree(service: &DemoService, style: TreeStyle) -> CliResult<()> {
    match style {
        TreeStyle::Dashes => _run(service, Pattern::Composite),
        TreeStyle::Box => {
            let (tree, root) = service.composite_tree()?;
            let rendered = tree.to_tree_string(root).map_err(ApplicationError::from)?;
            output::info(&rendered);
            Ok(())
        }
    }
}

#[instrument(skip(service))]
fn _glyphs(
    service: &DemoService,
    document: Option<&str>,
    point_size: Option<u32>,
) -> CliResult<()> {
    let flyweight = &service.settings().flyweight;
    let document = document.unwrap_or(&flyweight.document);
    if document.is_empty() {
        return Err(CliError::InvalidArgs("document must not be empty".into()));
    }
    let point_size = point_size.unwrap_or(flyweight.point_size);

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    service.glyphs(document, point_size, &mut sink)?;
    sink.flush().with_context("flush stdout")?;
    Ok(())
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&service(cli)?.settings().to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::InvalidArgs(
                    "no home directory, global config unavailable".into(),
                ))
            }
        },
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
