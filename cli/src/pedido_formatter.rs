// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use agenda_core::AgendaRow;
use chrono::NaiveDate;
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct PedidoFormatter {
    columns: Vec<PedidoColumn>,
    today: NaiveDate,
    format: ArgOutputFormat,
}

impl PedidoFormatter {
    pub fn new(today: NaiveDate) -> Self {
        use PedidoColumn::*;
        Self {
            columns: vec![
                Id, Fecha, Hora, Cliente, Producto, Precio, Telefono, Direccion,
            ],
            today,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds the notes and the phone and map links.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            use PedidoColumn::*;
            self.columns.extend([Notas, TelUrl, MapsUrl]);
        }
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [AgendaRow]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [AgendaRow],
    formatter: &'a PedidoFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<_> = self
            .formatter
            .columns
            .iter()
            .map(|&kind| Column {
                kind,
                today: self.formatter.today,
            })
            .collect();

        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), &columns, self.rows)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &columns, self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedidoColumn {
    Id,
    Fecha,
    Hora,
    Cliente,
    Producto,
    Precio,
    Telefono,
    Direccion,
    Notas,
    TelUrl,
    MapsUrl,
}

#[derive(Debug, Clone, Copy)]
struct Column {
    kind: PedidoColumn,
    today: NaiveDate,
}

impl TableColumn<AgendaRow> for Column {
    fn name(&self) -> Cow<'_, str> {
        use PedidoColumn::*;
        match self.kind {
            Id => "id",
            Fecha => "fecha",
            Hora => "hora",
            Cliente => "cliente",
            Producto => "producto",
            Precio => "precio",
            Telefono => "telefono",
            Direccion => "direccion",
            Notas => "notas",
            TelUrl => "tel",
            MapsUrl => "mapa",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a AgendaRow) -> Cow<'a, str> {
        use PedidoColumn::*;
        match self.kind {
            Id => row.id.to_string().into(),
            Fecha => row.fecha.as_str().into(),
            Hora => row.hora.as_str().into(),
            Cliente => row.cliente.as_str().into(),
            Producto => row.producto.as_str().into(),
            Precio => row.precio.as_str().into(),
            Telefono => row.telefono.as_str().into(),
            Direccion => row.direccion.as_str().into(),
            Notas => row.notas.as_str().into(),
            TelUrl => row.tel_url.as_str().into(),
            MapsUrl => row.maps_url.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.kind {
            PedidoColumn::Id | PedidoColumn::Precio => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &AgendaRow) -> Option<Color> {
        const COLOR_PAST: Option<Color> = Some(Color::BrightBlack);
        const COLOR_TODAY: Option<Color> = Some(Color::Yellow);

        match self.kind {
            PedidoColumn::Fecha | PedidoColumn::Hora => match row.date.cmp(&self.today) {
                std::cmp::Ordering::Less => COLOR_PAST,
                std::cmp::Ordering::Equal => COLOR_TODAY,
                std::cmp::Ordering::Greater => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::Pedido;
    use chrono::NaiveTime;

    fn row() -> AgendaRow {
        AgendaRow::from(&Pedido {
            id: 12,
            nombre: "Ana".to_string(),
            apellido: "García".to_string(),
            producto: "Torta".to_string(),
            precio: 1500.0,
            direccion: "San Martín 12".to_string(),
            telefono: "351 555".to_string(),
            fecha: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            hora: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            notas: "sin azúcar".to_string(),
        })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    #[test]
    fn test_json_output() {
        let rows = [row()];
        let formatter = PedidoFormatter::new(today()).with_output_format(ArgOutputFormat::Json);
        let out = formatter.format(&rows).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], "12");
        assert_eq!(value[0]["fecha"], "18/10/2026");
        assert_eq!(value[0]["cliente"], "Ana García");
        assert!(value[0].get("notas").is_none());
    }

    #[test]
    fn test_verbose_adds_links() {
        let rows = [row()];
        let formatter = PedidoFormatter::new(today())
            .with_output_format(ArgOutputFormat::Json)
            .with_verbose(true);
        let out = formatter.format(&rows).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["notas"], "sin azúcar");
        assert_eq!(value[0]["tel"], "tel:351 555");
        assert_eq!(value[0]["mapa"], "https://maps.google.com/?q=San%20Mart%C3%ADn%2012");
    }

    #[test]
    fn test_date_color() {
        let col = Column {
            kind: PedidoColumn::Fecha,
            today: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        };
        assert_eq!(col.get_color(&row()), Some(Color::Yellow));

        let col = Column { today: today(), ..col };
        assert_eq!(col.get_color(&row()), None);
    }
}
