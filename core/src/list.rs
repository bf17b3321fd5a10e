// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::format::{format_hora, format_precio, to_dmy};
use crate::{Pedido, PedidoId};

/// One row of the order list, with every column already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaRow {
    pub id: PedidoId,

    /// The unformatted date, for highlighting.
    pub date: NaiveDate,

    pub fecha: String,
    pub hora: String,
    pub cliente: String,
    pub producto: String,
    pub precio: String,
    pub telefono: String,
    pub direccion: String,
    pub notas: String,
    pub tel_url: String,
    pub maps_url: String,
}

impl From<&Pedido> for AgendaRow {
    fn from(p: &Pedido) -> Self {
        Self {
            id: p.id,
            date: p.fecha,
            fecha: to_dmy(p.fecha),
            hora: format_hora(p.hora),
            cliente: p.cliente(),
            producto: p.producto.clone(),
            precio: format_precio(p.precio),
            telefono: p.telefono.clone(),
            direccion: p.direccion.clone(),
            notas: p.notas.clone(),
            tel_url: p.tel_url(),
            maps_url: p.maps_url(),
        }
    }
}
