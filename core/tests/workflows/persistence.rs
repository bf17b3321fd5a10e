// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Reopening the agenda from its state directory.

use agenda_core::{KEY_NEXT_ID, KEY_PEDIDOS};
use tokio::fs;

use crate::common::{assert_state_file, file_agenda, setup_temp_dirs, test_form};

#[tokio::test]
async fn persistence_survives_reopen() {
    let dirs = setup_temp_dirs().await.unwrap();

    let mut agenda = file_agenda(&dirs.state_dir).await;
    let a = agenda.submit(&test_form("Ana", "2026-10-18", "10:00")).await.unwrap();
    let b = agenda.submit(&test_form("Bea", "2026-10-19", "10:00")).await.unwrap();
    agenda.delete(b.id).await.unwrap();
    drop(agenda);

    assert_state_file(&dirs.state_dir, KEY_PEDIDOS);
    assert_state_file(&dirs.state_dir, KEY_NEXT_ID);

    let mut agenda = file_agenda(&dirs.state_dir).await;
    assert_eq!(agenda.pedidos().len(), 1);
    assert_eq!(agenda.get(a.id).unwrap().nombre, "Ana");

    let c = agenda.submit(&test_form("Caro", "2026-10-20", "10:00")).await.unwrap();
    assert_eq!(c.id, b.id + 1);
}

#[tokio::test]
async fn persistence_corrupt_list_starts_empty() {
    let dirs = setup_temp_dirs().await.unwrap();
    fs::create_dir_all(&dirs.state_dir).await.unwrap();
    fs::write(dirs.state_dir.join(KEY_PEDIDOS), "[{\"id\": ").await.unwrap();

    let agenda = file_agenda(&dirs.state_dir).await;
    assert!(agenda.pedidos().is_empty());
}

#[tokio::test]
async fn persistence_reads_stored_json_shape() {
    let dirs = setup_temp_dirs().await.unwrap();
    fs::create_dir_all(&dirs.state_dir).await.unwrap();
    let json = r#"[{"id":3,"nombre":"Ana","producto":"Torta","precio":1500,"direccion":"Calle 1","telefono":"123","fecha":"2026-10-18","hora":"14:30"}]"#;
    fs::write(dirs.state_dir.join(KEY_PEDIDOS), json).await.unwrap();
    fs::write(dirs.state_dir.join(KEY_NEXT_ID), "4").await.unwrap();

    let mut agenda = file_agenda(&dirs.state_dir).await;
    let p = agenda.get(3).unwrap();
    assert_eq!(p.apellido, "");
    assert_eq!(p.notas, "");
    assert_eq!(p.precio, 1500.0);

    let next = agenda.submit(&test_form("Bea", "2026-10-18", "10:00")).await.unwrap();
    assert_eq!(next.id, 4);
}
