// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io::Write, path::PathBuf};

use agenda_core::Agenda;
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use tokio::fs;

#[derive(Debug, Clone)]
pub struct CmdExport {
    /// Destination file, `-` for standard output. Defaults to the configured export file.
    pub output: Option<PathBuf>,
}

impl CmdExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export all orders as tab-separated values")
            .arg(
                arg!(-o --output <FILE> "Destination file, '-' writes to standard output")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output: matches.get_one("output").cloned(),
        }
    }

    pub async fn run(self, agenda: &mut Agenda) -> Result<(), Box<dyn Error>> {
        self.run_with(agenda, &mut std::io::stdout()).await
    }

    /// Exports the orders, writing to `stdout` when the output is `-`.
    pub async fn run_with(
        self,
        agenda: &mut Agenda,
        stdout: &mut (impl Write + Send),
    ) -> Result<(), Box<dyn Error>> {
        let text = agenda.export();
        let path = match self.output {
            Some(path) if path.as_os_str() == "-" => {
                // no newline after the last row, same as the file
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
                return Ok(());
            }
            Some(path) => path,
            None => agenda.config().export_path(),
        };

        tracing::debug!(path = %path.display(), "exporting orders...");
        fs::write(&path, text)
            .await
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!(
            "{} pedidos exportados a {}",
            agenda.pedidos().len(),
            path.display().to_string().bold()
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdImport {
    pub path: PathBuf,
}

impl CmdImport {
    pub const NAME: &str = "import";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Append the orders of an exported file, each under a new id")
            .arg(
                arg!(path: <PATH> "File to import, its first line is taken as the header")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: matches
                .get_one::<PathBuf>("path")
                .cloned()
                .expect("path is required"),
        }
    }

    pub async fn run(self, agenda: &mut Agenda) -> Result<(), Box<dyn Error>> {
        tracing::debug!(path = %self.path.display(), "importing orders...");
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", self.path.display(), e))?;

        let report = agenda.import(&text).await?;
        print!("{} pedidos importados", report.added.to_string().bold());
        if report.skipped > 0 {
            print!(", {} filas omitidas", report.skipped.to_string().yellow());
        }
        println!();
        Ok(())
    }
}
