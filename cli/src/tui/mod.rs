// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod component;
mod component_form;
mod component_page;
mod dispatcher;
mod pedido_editor;
mod pedido_store;

pub use app::edit_pedido;
