// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use crate::tui::component_form::{Access, Form, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher, PedidoField};
use crate::tui::pedido_store::PedidoStore;

pub type PedidoEditor = SinglePage<PedidoStore, Form<PedidoStore>>;

type Field<A> = Input<PedidoStore, A>;

pub fn new_pedido_editor(title: &str) -> PedidoEditor {
    SinglePage::new(title, new_pedido_form())
}

/// One input per field, required ones marked with `*`.
fn new_pedido_form() -> Form<PedidoStore> {
    Form::new(vec![
        Box::new(Field::<NombreAccess>::new("Nombre *")),
        Box::new(Field::<ApellidoAccess>::new("Apellido")),
        Box::new(Field::<ProductoAccess>::new("Producto *")),
        Box::new(Field::<PrecioAccess>::new("Precio *")),
        Box::new(Field::<DireccionAccess>::new("Dirección *")),
        Box::new(Field::<TelefonoAccess>::new("Teléfono *")),
        Box::new(Field::<FechaAccess>::new("Fecha * (AAAA-MM-DD)")),
        Box::new(Field::<HoraAccess>::new("Hora * (HH:MM)")),
        Box::new(Field::<NotasAccess>::new("Notas")),
    ])
}

macro_rules! field_access {
    ($acc: ident, $field: ident) => {
        #[derive(Debug)]
        struct $acc;

        impl Access<PedidoStore, String> for $acc {
            fn get(store: &RefCell<PedidoStore>) -> String {
                store.borrow().field(PedidoField::$field).to_owned()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::Update(PedidoField::$field, value));
                true
            }
        }
    };
}

field_access!(NombreAccess, Nombre);
field_access!(ApellidoAccess, Apellido);
field_access!(ProductoAccess, Producto);
field_access!(PrecioAccess, Precio);
field_access!(DireccionAccess, Direccion);
field_access!(TelefonoAccess, Telefono);
field_access!(FechaAccess, Fecha);
field_access!(HoraAccess, Hora);
field_access!(NotasAccess, Notas);
