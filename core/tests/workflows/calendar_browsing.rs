// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid and day detail over a populated agenda.

use agenda_core::MonthCursor;
use chrono::NaiveDate;

use crate::common::{memory_agenda, test_form};

#[tokio::test]
async fn calendar_browsing_counts_match_orders() {
    let mut agenda = memory_agenda().await;
    for (fecha, hora) in [
        ("2026-10-18", "12:00"),
        ("2026-10-18", "09:00"),
        ("2026-10-18", "20:00"),
        ("2026-10-01", "09:00"),
        ("2026-11-18", "09:00"),
    ] {
        agenda.submit(&test_form("Ana", fecha, hora)).await.unwrap();
    }

    let grid = agenda.month(agenda.current_month());
    assert_eq!(grid.title(), "Octubre de 2026");
    for cell in &grid.days {
        let expected = agenda.pedidos().iter().filter(|p| p.fecha == cell.date).count();
        assert_eq!(cell.count, expected, "count of {}", cell.date);
    }

    let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    assert_eq!(grid.cell(day).unwrap().label(), "3 pedidos");

    let detail = agenda.day(day);
    let horas: Vec<_> = detail.pedidos.iter().map(|p| p.hora.to_string()).collect();
    assert_eq!(horas, vec!["09:00:00", "12:00:00", "20:00:00"]);
}

#[tokio::test]
async fn calendar_browsing_empty_day() {
    let agenda = memory_agenda().await;
    let detail = agenda.day(NaiveDate::from_ymd_opt(2026, 10, 5).unwrap());
    assert!(detail.is_empty());
    assert_eq!(detail.heading(), "— sin pedidos para 05/10/2026 —");
}

#[tokio::test]
async fn calendar_browsing_prev_from_january() {
    let agenda = memory_agenda().await;
    let january = MonthCursor::new(2026, 0);
    let december = january.prev();
    assert_eq!(december.month0, 11);
    assert_eq!(december.year, 2025);
    assert_eq!(agenda.month(december).title(), "Diciembre de 2025");
    assert_eq!(december.next(), january);
}
