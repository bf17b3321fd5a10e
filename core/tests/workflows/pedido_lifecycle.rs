// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Create, edit and delete orders through the form.

use agenda_core::{AgendaError, FormError};

use crate::common::{assert_sorted_by_date_time, memory_agenda, test_form};

#[tokio::test]
async fn pedido_lifecycle_ids_are_never_reused() {
    let mut agenda = memory_agenda().await;
    let a = agenda.submit(&test_form("Ana", "2026-10-18", "10:00")).await.unwrap();
    let b = agenda.submit(&test_form("Bea", "2026-10-18", "11:00")).await.unwrap();
    assert_ne!(a.id, b.id);

    agenda.delete(b.id).await.unwrap();
    let c = agenda.submit(&test_form("Caro", "2026-10-18", "12:00")).await.unwrap();
    assert!(c.id > b.id, "id {} was reused", c.id);

    let ids: Vec<_> = agenda.pedidos().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
}

#[tokio::test]
async fn pedido_lifecycle_empty_producto_is_rejected() {
    let mut agenda = memory_agenda().await;
    agenda.submit(&test_form("Ana", "2026-10-18", "10:00")).await.unwrap();
    let before = agenda.pedidos().to_vec();

    let mut form = agenda.open_new();
    form.nombre = "Luis".to_string();
    form.direccion = "Calle 1".to_string();
    form.telefono = "123".to_string();
    form.precio = "100".to_string();
    let err = agenda.submit(&form).await.unwrap_err();

    assert_eq!(err.to_string(), "Completá los campos obligatorios (*)");
    assert_eq!(agenda.pedidos(), before.as_slice());
}

#[tokio::test]
async fn pedido_lifecycle_precio_parsing() {
    let mut agenda = memory_agenda().await;

    let mut form = test_form("Ana", "2026-10-18", "10:00");
    form.precio = "-5".to_string();
    let err = agenda.submit(&form).await.unwrap_err();
    assert!(matches!(err, AgendaError::Form(FormError::InvalidPrecio(_))));
    assert_eq!(err.to_string(), "Precio inválido");
    assert!(agenda.pedidos().is_empty());

    form.precio = "10,50".to_string();
    let pedido = agenda.submit(&form).await.unwrap();
    assert_eq!(pedido.precio, 10.5);
}

#[tokio::test]
async fn pedido_lifecycle_edit_keeps_id_and_position() {
    let mut agenda = memory_agenda().await;
    let a = agenda.submit(&test_form("Ana", "2026-10-18", "10:00")).await.unwrap();
    agenda.submit(&test_form("Bea", "2026-10-18", "11:00")).await.unwrap();

    let mut form = agenda.open_edit(a.id).unwrap();
    form.hora = "23:00".to_string();
    form.apellido = "  ".to_string();
    let edited = agenda.submit(&form).await.unwrap();

    assert_eq!(edited.id, a.id);
    assert_eq!(edited.apellido, "");
    assert_eq!(edited.cliente(), "Ana");
    assert_eq!(agenda.pedidos()[0].id, a.id);
    assert_eq!(agenda.sorted().last().unwrap().id, a.id);
}

#[tokio::test]
async fn pedido_lifecycle_list_is_sorted() {
    let mut agenda = memory_agenda().await;
    for (nombre, fecha, hora) in [
        ("d", "2026-12-01", "08:00"),
        ("a", "2025-01-31", "23:59"),
        ("c", "2026-10-18", "18:00"),
        ("b", "2026-10-18", "07:05"),
        ("e", "2026-12-01", "08:00"),
    ] {
        agenda.submit(&test_form(nombre, fecha, hora)).await.unwrap();
    }

    let sorted = agenda.sorted();
    assert_sorted_by_date_time(&sorted);
    let nombres: Vec<_> = sorted.iter().map(|p| p.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["a", "b", "c", "d", "e"]);

    let rows = agenda.rows();
    assert_eq!(rows[0].fecha, "31/01/2025");
    assert_eq!(rows[1].hora, "07:05");
}
