// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Export to a file and import it back.

use agenda_core::{EXPORT_HEADER, ImportReport};
use tokio::fs;

use crate::common::{memory_agenda, setup_temp_dirs, test_form};

#[tokio::test]
async fn transfer_roundtrip_reproduces_fields() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.files_dir.join("pedidos.csv");

    let mut source = memory_agenda().await;
    let mut with_decimals = test_form("Ana", "2026-03-07", "09:05");
    with_decimals.precio = "10,5".to_string();
    source.submit(&with_decimals).await.unwrap();
    let mut without_notes = test_form("Luis", "2026-12-31", "23:30");
    without_notes.notas.clear();
    without_notes.apellido.clear();
    source.submit(&without_notes).await.unwrap();

    fs::write(&path, source.export()).await.unwrap();

    let mut target = memory_agenda().await;
    target.submit(&test_form("Previo", "2026-01-01", "08:00")).await.unwrap();
    let text = fs::read_to_string(&path).await.unwrap();
    let report = target.import(&text).await.unwrap();
    assert_eq!(report, ImportReport { added: 2, skipped: 0 });

    let imported = &target.pedidos()[1..];
    assert_eq!(imported.len(), source.pedidos().len());
    for (got, want) in imported.iter().zip(source.pedidos()) {
        assert_ne!(got.id, want.id);
        let mut got = got.clone();
        got.id = want.id;
        assert_eq!(&got, want);
    }
}

#[tokio::test]
async fn transfer_roundtrip_export_layout() {
    let mut agenda = memory_agenda().await;
    agenda.submit(&test_form("Ana", "2026-03-07", "09:05")).await.unwrap();

    let text = agenda.export();
    assert!(text.starts_with(&format!("{EXPORT_HEADER}\n")));
    assert!(!text.ends_with('\n'));
    assert!(text.contains("\t07/03/2026\t09:05\t"));
}

#[tokio::test]
async fn transfer_roundtrip_skips_short_rows() {
    let mut agenda = memory_agenda().await;
    let text = format!(
        "\u{feff}{EXPORT_HEADER}\r\n1\tsolo\tdos\r\n\r\n9\tEva\t\tPan\tCalle\t1\tx\t31/02/2026\t\tok\r\n"
    );
    let report = agenda.import(&text).await.unwrap();
    assert_eq!(report, ImportReport { added: 1, skipped: 1 });

    let eva = &agenda.pedidos()[0];
    assert_eq!(eva.id, 1);
    assert_eq!(eva.precio, 0.0);
    assert_eq!(eva.fecha, agenda.today());
    assert_eq!(eva.hora.to_string(), "00:00:00");
}
