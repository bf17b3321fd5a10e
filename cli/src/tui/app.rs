// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use agenda_core::{Agenda, PedidoForm};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::pedido_editor::new_pedido_editor;
use crate::tui::pedido_store::PedidoStore;

/// Opens the order editor on the given form.
///
/// Returns the edited form when the user submits it, `None` when the editor is cancelled.
/// The form is not validated here.
pub fn edit_pedido(
    agenda: &mut Agenda,
    form: PedidoForm,
) -> Result<Option<PedidoForm>, Box<dyn Error>> {
    let title = form.title();
    let store = Rc::new(RefCell::new(PedidoStore::new(form)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        PedidoStore::register_to(store.clone(), &mut dispatcher);
        let mut view = new_pedido_editor(title);
        view.activate(&mut dispatcher, &store);
        run_view(&mut view, &mut dispatcher, &store, &mut terminal)
    }; // release dispatcher and view here, they hold the store
    ratatui::restore();
    agenda.refresh_now();
    result?;

    let store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    if !store.submit {
        tracing::info!("user cancelled the order editor");
    }
    Ok(store.into_submitted())
}

fn run_view<S>(
    view: &mut impl Component<S>,
    dispatcher: &mut Dispatcher,
    store: &RefCell<S>,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            view.render(store, area, frame.buffer_mut());
            if let Some(position) = view.get_cursor_position(store, area) {
                frame.set_cursor_position(position);
            }
        })?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && view.on_key(dispatcher, store, area, key) == Some(Message::Exit)
        {
            return Ok(());
        }
    }
}
