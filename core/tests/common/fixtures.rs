// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use agenda_core::{Agenda, Config, MemoryStorage, PedidoForm};
use chrono::{NaiveDate, NaiveDateTime};

/// The fixed "now" every test agenda runs at: 2026-10-18 11:45.
#[must_use]
pub fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(11, 45, 0)
        .unwrap()
}

/// Creates a configuration storing orders in `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        export_file: None,
    }
}

/// Opens an agenda backed by files in `state_dir`, pinned to [`at`].
pub async fn file_agenda(state_dir: &Path) -> Agenda {
    let mut agenda = Agenda::new(test_config(state_dir)).await.unwrap();
    agenda.set_now(at());
    agenda
}

/// Opens an in-memory agenda pinned to [`at`].
pub async fn memory_agenda() -> Agenda {
    let mut agenda = Agenda::with_storage(Config::default(), MemoryStorage::new())
        .await
        .unwrap();
    agenda.set_now(at());
    agenda
}

/// A valid new-order form.
#[must_use]
pub fn test_form(nombre: &str, fecha: &str, hora: &str) -> PedidoForm {
    PedidoForm {
        id: None,
        nombre: nombre.to_string(),
        apellido: "Gómez".to_string(),
        producto: "Docena de empanadas".to_string(),
        precio: "12000".to_string(),
        direccion: "Av. Colón 1234".to_string(),
        telefono: "351 555-0101".to_string(),
        fecha: fecha.to_string(),
        hora: hora.to_string(),
        notas: "timbre 2B".to_string(),
    }
}
