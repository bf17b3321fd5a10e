// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the agenda-core crate.
//!
//! These tests go through the `Agenda` the way the command line does: submit forms, list,
//! browse the calendar, export and import, and reopen the agenda from disk.

mod calendar_browsing;
mod pedido_lifecycle;
mod persistence;
mod transfer_roundtrip;
