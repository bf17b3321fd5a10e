// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Tab-separated export and import of the order list.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::format::{from_dmy, parse_hora, parse_precio, to_dmy};
use crate::{Pedido, PedidoDraft};

/// Header row of an export, column names separated by tabs.
pub const EXPORT_HEADER: &str =
    "id\tnombre\tapellido\tproducto\tdireccion\ttelefono\tprecio\tfecha\thora\tnotas";

/// Number of columns a row needs to be imported.
pub const COLUMNS: usize = 10;

static RE_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("valid line break regex"));

/// Serializes the orders, one tab-separated row each, after the header row.
pub fn export_tsv(pedidos: &[Pedido]) -> String {
    let rows: Vec<String> = pedidos.iter().map(export_row).collect();
    format!("{EXPORT_HEADER}\n{}", rows.join("\n"))
}

fn export_row(p: &Pedido) -> String {
    [
        p.id.to_string(),
        p.nombre.clone(),
        p.apellido.clone(),
        p.producto.clone(),
        p.direccion.clone(),
        p.telefono.clone(),
        p.precio.to_string(),
        to_dmy(p.fecha),
        p.hora.format("%H:%M").to_string(),
        p.notas.replace(['\t', '\n'], " "),
    ]
    .join("\t")
}

/// The outcome of parsing an import file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBatch {
    /// Accepted rows, in file order, still without ids.
    pub drafts: Vec<PedidoDraft>,

    /// Non-empty rows dropped for having too few columns.
    pub skipped: usize,
}

/// Parses an import file. The first line is always taken as the header and dropped.
///
/// Malformed dates become `today`, unparsable or negative prices become 0 and a missing time
/// becomes 00:00. The id column is ignored.
pub fn parse_tsv(text: &str, today: NaiveDate) -> ImportBatch {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    // Tabs are kept so an empty last column survives.
    let text = text.trim_matches(|c: char| c.is_whitespace() && c != '\t');

    let mut batch = ImportBatch::default();
    for (i, row) in RE_LINE_BREAK.split(text).enumerate().skip(1) {
        if row.is_empty() {
            continue;
        }

        let cols: Vec<&str> = row.split('\t').collect();
        if cols.len() < COLUMNS {
            tracing::debug!(line = i + 1, columns = cols.len(), "skipping short row");
            batch.skipped += 1;
            continue;
        }

        batch.drafts.push(PedidoDraft {
            nombre: cols[1].to_string(),
            apellido: cols[2].to_string(),
            producto: cols[3].to_string(),
            direccion: cols[4].to_string(),
            telefono: cols[5].to_string(),
            precio: parse_precio(cols[6]).filter(|a| *a >= 0.0).unwrap_or(0.0),
            fecha: from_dmy(cols[7], today),
            hora: parse_hora(cols[8]).unwrap_or(NaiveTime::MIN),
            notas: cols[9].to_string(),
        });
    }
    batch
}
