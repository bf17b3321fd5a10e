// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use agenda_core::PedidoForm;

use crate::tui::dispatcher::{Action, Dispatcher, PedidoField};

/// The state behind the order editor.
#[derive(Debug)]
pub struct PedidoStore {
    pub form: PedidoForm,

    /// Whether the user submitted the form
    pub submit: bool,
}

impl PedidoStore {
    pub fn new(form: PedidoForm) -> Self {
        Self {
            form,
            submit: false,
        }
    }

    pub fn field(&self, field: PedidoField) -> &str {
        use PedidoField::*;
        let f = &self.form;
        match field {
            Nombre => &f.nombre,
            Apellido => &f.apellido,
            Producto => &f.producto,
            Precio => &f.precio,
            Direccion => &f.direccion,
            Telefono => &f.telefono,
            Fecha => &f.fecha,
            Hora => &f.hora,
            Notas => &f.notas,
        }
    }

    fn field_mut(&mut self, field: PedidoField) -> &mut String {
        use PedidoField::*;
        let f = &mut self.form;
        match field {
            Nombre => &mut f.nombre,
            Apellido => &mut f.apellido,
            Producto => &mut f.producto,
            Precio => &mut f.precio,
            Direccion => &mut f.direccion,
            Telefono => &mut f.telefono,
            Fecha => &mut f.fecha,
            Hora => &mut f.hora,
            Notas => &mut f.notas,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::Update(field, v) => *that.borrow_mut().field_mut(*field) = v.clone(),
            Action::SubmitChanges => that.borrow_mut().submit = true,
        }));
        dispatcher.register(callback);
    }

    /// The edited form, or `None` when the editor was closed without submitting.
    pub fn into_submitted(self) -> Option<PedidoForm> {
        self.submit.then_some(self.form)
    }
}
