// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of the order agenda.

mod calendar_formatter;
mod cli;
mod cmd_calendar;
mod cmd_generate_completion;
mod cmd_pedido;
mod cmd_transfer;
mod config;
mod pedido_formatter;
mod prompt;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
