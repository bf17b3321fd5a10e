// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Identifier of an order, assigned by the store counter.
pub type PedidoId = u64;

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    /// Unique identifier, never reused after deletion.
    pub id: PedidoId,

    /// Customer first name.
    pub nombre: String,

    /// Customer last name, may be empty.
    #[serde(default)]
    pub apellido: String,

    /// What was ordered.
    pub producto: String,

    /// Price, always non-negative.
    pub precio: f64,

    /// Delivery address.
    pub direccion: String,

    /// Contact phone, free-form.
    pub telefono: String,

    /// Delivery date, persisted as `YYYY-MM-DD`.
    pub fecha: NaiveDate,

    /// Delivery time, persisted as `HH:MM`.
    #[serde(with = "hhmm")]
    pub hora: NaiveTime,

    /// Free-form notes, may be empty.
    #[serde(default)]
    pub notas: String,
}

impl Pedido {
    /// The customer's full name, skipping an empty last name.
    pub fn cliente(&self) -> String {
        [self.nombre.as_str(), self.apellido.as_str()]
            .into_iter()
            .filter(|a| !a.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Link that opens the address in Google Maps.
    pub fn maps_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={}",
            urlencoding::encode(&self.direccion)
        )
    }

    /// Link that dials the phone number.
    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.telefono)
    }
}

/// The fields of an order without its identifier, as produced by the form or an import.
#[derive(Debug, Clone, PartialEq)]
pub struct PedidoDraft {
    pub nombre: String,
    pub apellido: String,
    pub producto: String,
    pub precio: f64,
    pub direccion: String,
    pub telefono: String,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub notas: String,
}

impl PedidoDraft {
    pub(crate) fn into_pedido(self, id: PedidoId) -> Pedido {
        Pedido {
            id,
            nombre: self.nombre,
            apellido: self.apellido,
            producto: self.producto,
            precio: self.precio,
            direccion: self.direccion,
            telefono: self.telefono,
            fecha: self.fecha,
            hora: self.hora,
            notas: self.notas,
        }
    }

    pub(crate) fn apply_to(self, pedido: &mut Pedido) {
        let id = pedido.id;
        *pedido = self.into_pedido(id);
    }
}

/// Orders by date, then by time, ascending.
pub fn by_date_time(a: &Pedido, b: &Pedido) -> Ordering {
    (a.fecha, a.hora).cmp(&(b.fecha, b.hora))
}

/// Sorts the orders in place by date and time, keeping the relative order of ties.
pub fn sort_by_date_time(pedidos: &mut [Pedido]) {
    pedidos.sort_by(by_date_time);
}

/// Serde adapter that stores a time of day as `HH:MM`.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::format::parse_hora(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day: {s}")))
    }
}
