// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::format::{format_hora, parse_fecha, parse_hora, parse_precio};
use crate::{FormError, Pedido, PedidoDraft, PedidoId};

/// The order form as typed by the user: every field is raw text until it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PedidoForm {
    /// The order being edited, `None` when creating a new one.
    pub id: Option<PedidoId>,
    pub nombre: String,
    pub apellido: String,
    pub producto: String,
    pub precio: String,
    pub direccion: String,
    pub telefono: String,
    pub fecha: String,
    pub hora: String,
    pub notas: String,
}

impl PedidoForm {
    /// An empty form for a new order, dated today at the current time.
    pub fn new_at(now: NaiveDateTime) -> Self {
        Self {
            fecha: now.date().format("%Y-%m-%d").to_string(),
            hora: format_hora(now.time()),
            ..Default::default()
        }
    }

    /// A form filled with an existing order.
    pub fn from_pedido(pedido: &Pedido) -> Self {
        Self {
            id: Some(pedido.id),
            nombre: pedido.nombre.clone(),
            apellido: pedido.apellido.clone(),
            producto: pedido.producto.clone(),
            precio: pedido.precio.to_string(),
            direccion: pedido.direccion.clone(),
            telefono: pedido.telefono.clone(),
            fecha: pedido.fecha.format("%Y-%m-%d").to_string(),
            hora: format_hora(pedido.hora),
            notas: pedido.notas.clone(),
        }
    }

    /// Whether the form edits an existing order.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        match self.is_edit() {
            true => "Editar pedido",
            false => "Nuevo pedido",
        }
    }

    /// Checks the required fields and the price, returning the order fields on success.
    pub fn validate(&self) -> Result<PedidoDraft, FormError> {
        let required = [
            ("nombre", &self.nombre),
            ("producto", &self.producto),
            ("direccion", &self.direccion),
            ("telefono", &self.telefono),
            ("precio", &self.precio),
            ("fecha", &self.fecha),
            ("hora", &self.hora),
        ];
        let missing: Vec<_> = required
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let precio = match parse_precio(self.precio.trim()) {
            Some(a) if a >= 0.0 => a,
            _ => return Err(FormError::InvalidPrecio(self.precio.clone())),
        };
        let fecha =
            parse_fecha(&self.fecha).ok_or_else(|| FormError::InvalidFecha(self.fecha.clone()))?;
        let hora = parse_hora(&self.hora).ok_or_else(|| FormError::InvalidHora(self.hora.clone()))?;

        Ok(PedidoDraft {
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            producto: self.producto.trim().to_string(),
            precio,
            direccion: self.direccion.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            fecha,
            hora,
            notas: self.notas.trim().to_string(),
        })
    }
}
