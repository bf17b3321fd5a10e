// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

/// A field of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedidoField {
    Nombre,
    Apellido,
    Producto,
    Precio,
    Direccion,
    Telefono,
    Fecha,
    Hora,
    Notas,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Update(PedidoField, String),
    SubmitChanges,
}
