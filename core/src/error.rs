// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::PedidoId;

/// Reasons a form submission is blocked. The message is the alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more required fields are empty.
    #[error("Completá los campos obligatorios (*)")]
    MissingFields(Vec<&'static str>),

    /// The price is not a number or is negative.
    #[error("Precio inválido")]
    InvalidPrecio(String),

    /// The date is not `YYYY-MM-DD`.
    #[error("Fecha inválida")]
    InvalidFecha(String),

    /// The time is not `HH:MM`.
    #[error("Hora inválida")]
    InvalidHora(String),
}

/// Errors raised by the agenda.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AgendaError {
    /// The submitted form did not validate.
    #[error(transparent)]
    Form(#[from] FormError),

    /// No order has the given id.
    #[error("Pedido no encontrado: {0}")]
    NotFound(PedidoId),

    /// The id counter has no ids left.
    #[error("No quedan ids libres")]
    IdsExhausted,

    /// Reading or writing the storage failed.
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The order list could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),
}
