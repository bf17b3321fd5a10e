// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use agenda_core::{APP_NAME, Agenda};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_calendar::CmdCalendar;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_pedido::{CmdDelete, CmdEdit, CmdList, CmdNew};
use crate::cmd_transfer::{CmdExport, CmdImport};
use crate::config::parse_config;

/// Run the order agenda command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Agenda de pedidos: keep track of customer orders and their delivery dates.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // list by default
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $AGENDA_CONFIG when set, otherwise \
$XDG_CONFIG_HOME/agenda/config.toml on Linux and MacOS, %LOCALAPPDATA%/agenda/config.toml \
on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdList::command())
            .subcommand(CmdNew::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdDelete::command())
            .subcommand(CmdCalendar::command())
            .subcommand(CmdExport::command())
            .subcommand(CmdImport::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdNew::NAME, matches)) => New(CmdNew::from(matches)),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)),
            Some((CmdDelete::NAME, matches)) => Delete(CmdDelete::from(matches)),
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdExport::NAME, matches)) => Export(CmdExport::from(matches)),
            Some((CmdImport::NAME, matches)) => Import(CmdImport::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => List(CmdList::new()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the orders
    List(CmdList),

    /// Add a new order
    New(CmdNew),

    /// Edit an order
    Edit(CmdEdit),

    /// Delete an order
    Delete(CmdDelete),

    /// Show the month calendar
    Calendar(CmdCalendar),

    /// Export the orders to a file
    Export(CmdExport),

    /// Import orders from a file
    Import(CmdImport),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            List(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            New(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Edit(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Delete(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Calendar(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Export(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Import(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Agenda) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut agenda = Agenda::new(config).await?;
        f(&mut agenda).await
    }
}
