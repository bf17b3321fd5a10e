// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a table over rows of type `T`.
pub trait TableColumn<T> {
    /// The header of the column, also used as the key in JSON output.
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

pub struct Table<'a, S: TableStyle, T, C: TableColumn<T>> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

/// Aligned plain-text rows under a bold header line.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self { separator: "  " }
    }
}

impl Default for TableStyleBasic {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let header: Vec<Cow<'_, str>> = columns.iter().map(|c| c.name()).collect();
        let rows: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|c| c.format(row)).collect())
            .collect();

        let mut widths = vec![0; columns.len()];
        for row in std::iter::once(&header).chain(rows.iter()) {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        self.write_row(f, columns, &widths, &header, |_, s| s.bold().to_string())?;
        for (row, data) in rows.iter().zip(data) {
            self.write_row(f, columns, &widths, row, |i, s| {
                match columns[i].get_color(data) {
                    Some(color) => s.color(color).to_string(),
                    None => s.to_string(),
                }
            })?;
        }
        Ok(())
    }
}

impl TableStyleBasic {
    fn write_row<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        widths: &[usize],
        row: &[Cow<'_, str>],
        stylize: impl Fn(usize, &str) -> String,
    ) -> fmt::Result {
        let last = columns.len().saturating_sub(1);
        for (i, (col, cell)) in columns.iter().zip(row).enumerate() {
            // pad by display width, the styled text carries escape codes
            let pad = " ".repeat(widths[i].saturating_sub(cell.width()));
            let styled = stylize(i, cell);
            match col.padding_direction() {
                PaddingDirection::Right => write!(f, "{pad}{styled}")?,
                PaddingDirection::Left if i == last => write!(f, "{styled}")?,
                PaddingDirection::Left => write!(f, "{styled}{pad}")?,
            }

            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

/// A JSON array with one object per row, keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| (c.name().into_owned(), c.format(row).into_owned().into()))
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}
