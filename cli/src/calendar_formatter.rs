// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use agenda_core::format::{format_hora, format_precio};
use agenda_core::{DayCell, DayDetail, MonthGrid, WEEKDAY_HEADERS};
use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use crate::util::ArgOutputFormat;

/// Minimum width of a day cell, wide enough for `9 pedidos`.
const MIN_CELL_WIDTH: usize = 9;

#[derive(Debug)]
pub struct CalendarFormatter {
    today: NaiveDate,
    format: ArgOutputFormat,
}

impl CalendarFormatter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(
        &'a self,
        grid: &'a MonthGrid,
        detail: Option<&'a DayDetail<'a>>,
    ) -> Display<'a> {
        Display {
            grid,
            detail,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    grid: &'a MonthGrid,
    detail: Option<&'a DayDetail<'a>>,
    formatter: &'a CalendarFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => self.fmt_json(f),
            ArgOutputFormat::Table => {
                self.fmt_grid(f)?;
                if let Some(detail) = self.detail {
                    writeln!(f)?;
                    self.fmt_detail(f, detail)?;
                }
                Ok(())
            }
        }
    }
}

impl Display<'_> {
    fn fmt_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .grid
            .days
            .iter()
            .map(|c| c.label().width())
            .max()
            .unwrap_or(0)
            .max(MIN_CELL_WIDTH);

        writeln!(f, "{}", self.grid.title().bold())?;

        let headers: Vec<_> = WEEKDAY_HEADERS
            .iter()
            .map(|h| format!("{h:<width$}"))
            .collect();
        writeln!(f, "{}", headers.join(" ").trim_end().cyan())?;

        for week in self.grid.weeks() {
            let days: Vec<_> = week
                .iter()
                .map(|cell| self.stylize(cell, width, |c| c.day().to_string()))
                .collect();
            writeln!(f, "{}", days.join(" ").trim_end())?;

            let labels: Vec<_> = week
                .iter()
                .map(|cell| self.stylize(cell, width, DayCell::label))
                .collect();
            let labels = labels.join(" ");
            if !labels.trim().is_empty() {
                writeln!(f, "{}", labels.trim_end())?;
            }
        }
        Ok(())
    }

    fn stylize(
        &self,
        cell: &Option<DayCell>,
        width: usize,
        text: impl Fn(&DayCell) -> String,
    ) -> String {
        let Some(cell) = cell else {
            return " ".repeat(width);
        };

        let text = text(cell);
        let padded = format!("{text}{}", " ".repeat(width.saturating_sub(text.width())));
        if cell.date == self.formatter.today {
            padded.yellow().bold().to_string()
        } else if cell.count > 0 {
            padded.green().to_string()
        } else {
            padded
        }
    }

    fn fmt_detail(&self, f: &mut fmt::Formatter<'_>, detail: &DayDetail<'_>) -> fmt::Result {
        writeln!(f, "{}", detail.heading().bold())?;
        for p in &detail.pedidos {
            writeln!(
                f,
                "{}  {}  {}  {}  {}  {}",
                format_hora(p.hora).yellow(),
                p.cliente(),
                p.producto,
                format_precio(p.precio),
                p.telefono,
                p.direccion
            )?;
            if !p.notas.is_empty() {
                writeln!(f, "       {}", p.notas.italic())?;
            }
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<_> = self
            .grid
            .days
            .iter()
            .map(|c| json!({ "fecha": c.date.to_string(), "pedidos": c.count }))
            .collect();

        let detail = self.detail.map(|d| {
            let pedidos: Vec<_> = d
                .pedidos
                .iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "hora": format_hora(p.hora),
                        "cliente": p.cliente(),
                        "producto": p.producto,
                        "precio": p.precio,
                        "telefono": p.telefono,
                        "direccion": p.direccion,
                        "notas": p.notas,
                    })
                })
                .collect();
            json!({ "fecha": d.date.to_string(), "pedidos": pedidos })
        });

        let value = json!({
            "titulo": self.grid.title(),
            "anio": self.grid.cursor.year,
            "mes": self.grid.cursor.month0,
            "vacios_iniciales": self.grid.leading_blanks,
            "dias": days,
            "detalle": detail,
        });
        let json = serde_json::to_string_pretty(&value).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}
