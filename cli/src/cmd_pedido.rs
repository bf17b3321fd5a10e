// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use agenda_core::{Agenda, AgendaError, AgendaRow, Pedido, PedidoForm, PedidoId};
use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::pedido_formatter::PedidoFormatter;
use crate::prompt::confirm_delete;
use crate::tui;
use crate::util::{ArgOutputFormat, arg_verbose, get_verbose};

#[derive(Debug, Clone, Copy)]
pub struct CmdList {
    pub verbose: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all orders by date and time")
            .arg(arg_verbose())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            verbose: get_verbose(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn new() -> Self {
        Self {
            verbose: false,
            output_format: ArgOutputFormat::Table,
        }
    }
}

impl Default for CmdList {
    fn default() -> Self {
        Self::new()
    }
}

impl CmdList {
    pub async fn run(self, agenda: &mut Agenda) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing orders...");
        let rows = agenda.rows();
        if rows.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "Sin pedidos".italic());
            return Ok(());
        }

        let formatter = PedidoFormatter::new(agenda.today())
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        println!("{}", formatter.format(&rows));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub fields: PedidoFields,
    pub output_format: ArgOutputFormat,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new order, opening the form when no field is given")
            .args(PedidoFields::args())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: PedidoFields::from(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, agenda: &mut Agenda) -> Result<(), Box<dyn Error>> {
        tracing::debug!("adding new order...");
        let mut form = agenda.open_new();
        let form = if self.fields.is_empty() {
            match tui::edit_pedido(agenda, form)? {
                Some(form) => form,
                None => return Ok(()),
            }
        } else {
            self.fields.apply_to(&mut form);
            form
        };

        let pedido = agenda.submit(&form).await?;
        print_pedido(agenda, &pedido, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub id: PedidoId,
    pub fields: PedidoFields,
    pub output_format: ArgOutputFormat,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an order, opening the form when no field is given")
            .arg(arg_id())
            .args(PedidoFields::args())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            fields: PedidoFields::from(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, agenda: &mut Agenda) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = self.id, "editing order...");
        let Some(mut form) = agenda.open_edit(self.id) else {
            return Ok(());
        };

        let form = if self.fields.is_empty() {
            match tui::edit_pedido(agenda, form)? {
                Some(form) => form,
                None => return Ok(()),
            }
        } else {
            self.fields.apply_to(&mut form);
            form
        };

        let pedido = agenda.submit(&form).await?;
        print_pedido(agenda, &pedido, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDelete {
    pub id: PedidoId,
    pub yes: bool,
}

impl CmdDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an order")
            .arg(arg_id())
            .arg(arg!(-y --yes "Delete without asking for confirmation"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            yes: matches.get_flag("yes"),
        }
    }

    pub async fn run(self, agenda: &mut Agenda) -> Result<(), Box<dyn Error>> {
        self.run_with(agenda, confirm_delete).await
    }

    /// Deletes the order, asking `confirm` first unless `--yes` was given.
    pub async fn run_with(
        self,
        agenda: &mut Agenda,
        confirm: impl FnOnce() -> Result<bool, Box<dyn Error>>,
    ) -> Result<(), Box<dyn Error>> {
        if agenda.get(self.id).is_none() {
            return Err(AgendaError::NotFound(self.id).into());
        }

        if !self.yes && !confirm()? {
            tracing::info!(id = self.id, "user declined the deletion");
            return Ok(());
        }

        if let Some(pedido) = agenda.delete(self.id).await? {
            println!("Pedido {} eliminado: {}", pedido.id, pedido.cliente().bold());
        }
        Ok(())
    }
}

/// Order fields given on the command line, each overriding the form when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PedidoFields {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub producto: Option<String>,
    pub precio: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub notas: Option<String>,
}

impl PedidoFields {
    pub fn args() -> [Arg; 9] {
        [
            arg!(--nombre <NOMBRE> "First name of the client"),
            arg!(--apellido <APELLIDO> "Last name of the client"),
            arg!(--producto <PRODUCTO> "Ordered product"),
            arg!(--precio <PRECIO> "Price, a decimal comma is accepted"),
            arg!(--direccion <DIRECCION> "Delivery address"),
            arg!(--telefono <TELEFONO> "Phone number of the client"),
            arg!(--fecha <FECHA> "Delivery date, YYYY-MM-DD"),
            arg!(--hora <HORA> "Delivery time, HH:MM"),
            arg!(--notas <NOTAS> "Free-form notes"),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned();
        Self {
            nombre: get("nombre"),
            apellido: get("apellido"),
            producto: get("producto"),
            precio: get("precio"),
            direccion: get("direccion"),
            telefono: get("telefono"),
            fecha: get("fecha"),
            hora: get("hora"),
            notas: get("notas"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, form: &mut PedidoForm) {
        let pairs = [
            (self.nombre, &mut form.nombre),
            (self.apellido, &mut form.apellido),
            (self.producto, &mut form.producto),
            (self.precio, &mut form.precio),
            (self.direccion, &mut form.direccion),
            (self.telefono, &mut form.telefono),
            (self.fecha, &mut form.fecha),
            (self.hora, &mut form.hora),
            (self.notas, &mut form.notas),
        ];
        for (value, field) in pairs {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

fn arg_id() -> Arg {
    arg!(id: <ID> "The id of the order").value_parser(value_parser!(PedidoId))
}

fn get_id(matches: &ArgMatches) -> PedidoId {
    matches
        .get_one::<PedidoId>("id")
        .copied()
        .expect("id is required")
}

fn print_pedido(agenda: &Agenda, pedido: &Pedido, output_format: ArgOutputFormat) {
    let formatter = PedidoFormatter::new(agenda.today()).with_output_format(output_format);
    println!("{}", formatter.format(&[AgendaRow::from(pedido)]));
}
