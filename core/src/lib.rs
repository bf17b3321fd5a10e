// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the order agenda: the order records, their storage, the order form and the list
//! and calendar view models.

mod agenda;
mod calendar;
mod config;
mod error;
mod form;
pub mod format;
mod list;
mod pedido;
mod store;
mod transfer;

pub use crate::agenda::{Agenda, ImportReport};
pub use crate::calendar::{DayCell, DayDetail, MonthCursor, MonthGrid, WEEKDAY_HEADERS};
pub use crate::config::{APP_NAME, Config, DEFAULT_EXPORT_FILE, get_config_dir};
pub use crate::error::{AgendaError, FormError};
pub use crate::form::PedidoForm;
pub use crate::list::AgendaRow;
pub use crate::pedido::{Pedido, PedidoDraft, PedidoId, by_date_time, sort_by_date_time};
pub use crate::store::{FileStorage, KEY_NEXT_ID, KEY_PEDIDOS, MemoryStorage, Storage, Store};
pub use crate::transfer::{EXPORT_HEADER, ImportBatch, export_tsv, parse_tsv};
