// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::format::{month_title, to_dmy};
use crate::pedido::by_date_time;
use crate::Pedido;

/// Column headers of the month grid, Monday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// The month shown by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    pub year: i32,

    /// Month index, 0 for January up to 11 for December.
    pub month0: u32,
}

impl MonthCursor {
    /// Creates a cursor, carrying a month index outside 0..=11 into the year.
    pub fn new(year: i32, month0: i32) -> Self {
        Self {
            year: year + month0.div_euclid(12),
            month0: month0.rem_euclid(12) as u32,
        }
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    /// Moves by `months`, wrapping over year boundaries.
    pub fn shift(self, months: i32) -> Self {
        Self::new(self.year, self.month0 as i32 + months)
    }

    /// The first day of the month, `None` only for years chrono cannot represent.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(after)) => (after - first).num_days() as u32,
            _ => 0,
        }
    }

    /// The given day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    /// The title shown above the grid, e.g. `Octubre de 2026`.
    pub fn title(&self) -> String {
        month_title(self.year, self.month0)
    }
}

/// One day of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,

    /// Number of orders on this date.
    pub count: usize,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The count badge, empty when there are no orders.
    pub fn label(&self) -> String {
        match self.count {
            0 => String::new(),
            1 => "1 pedido".to_string(),
            n => format!("{n} pedidos"),
        }
    }
}

/// The month view: blank cells before the 1st, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,

    /// Blank cells before the first day, 0 when the month starts on a Monday.
    pub leading_blanks: u32,

    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(cursor: MonthCursor, pedidos: &[Pedido]) -> Self {
        let leading_blanks = cursor
            .first_day()
            .map_or(0, |d| d.weekday().num_days_from_monday());

        let days = (1..=cursor.days_in_month())
            .filter_map(|d| cursor.day(d))
            .map(|date| DayCell {
                date,
                count: pedidos.iter().filter(|p| p.fecha == date).count(),
            })
            .collect();

        Self {
            cursor,
            leading_blanks,
            days,
        }
    }

    pub fn title(&self) -> String {
        self.cursor.title()
    }

    /// The grid split into weeks of seven slots; `None` marks a blank slot.
    pub fn weeks(&self) -> Vec<[Option<DayCell>; 7]> {
        let slots: Vec<Option<DayCell>> = (0..self.leading_blanks)
            .map(|_| None)
            .chain(self.days.iter().copied().map(Some))
            .collect();

        slots
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                for (slot, cell) in week.iter_mut().zip(chunk) {
                    *slot = *cell;
                }
                week
            })
            .collect()
    }

    /// The cell of the given date, if it belongs to this month.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days.iter().find(|c| c.date == date)
    }
}

/// The orders of one day, sorted by time.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail<'a> {
    pub date: NaiveDate,
    pub pedidos: Vec<&'a Pedido>,
}

impl<'a> DayDetail<'a> {
    pub fn build(date: NaiveDate, pedidos: &'a [Pedido]) -> Self {
        let mut items: Vec<_> = pedidos.iter().filter(|p| p.fecha == date).collect();
        items.sort_by(|a, b| by_date_time(a, b));
        Self {
            date,
            pedidos: items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pedidos.is_empty()
    }

    /// Heading shown above the list, or the placeholder when the day has no orders.
    pub fn heading(&self) -> String {
        match self.is_empty() {
            true => format!("— sin pedidos para {} —", to_dmy(self.date)),
            false => format!("Pedidos para {}", to_dmy(self.date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pedido(id: u64, fecha: NaiveDate, hora: (u32, u32)) -> Pedido {
        Pedido {
            id,
            nombre: format!("Cliente {id}"),
            apellido: String::new(),
            producto: "Pizza".to_string(),
            precio: 100.0,
            direccion: "Calle".to_string(),
            telefono: "1".to_string(),
            fecha,
            hora: NaiveTime::from_hms_opt(hora.0, hora.1, 0).unwrap(),
            notas: String::new(),
        }
    }

    #[test]
    fn test_prev_from_january_wraps_to_december() {
        let c = MonthCursor::new(2026, 0).prev();
        assert_eq!(c, MonthCursor { year: 2025, month0: 11 });
    }

    #[test]
    fn test_next_from_december_wraps_to_january() {
        let c = MonthCursor::new(2025, 11).next();
        assert_eq!(c, MonthCursor { year: 2026, month0: 0 });
    }

    #[test]
    fn test_new_normalizes_month_index() {
        assert_eq!(MonthCursor::new(2026, -1), MonthCursor::new(2025, 11));
        assert_eq!(MonthCursor::new(2026, 12), MonthCursor::new(2027, 0));
        assert_eq!(MonthCursor::new(2026, 25), MonthCursor::new(2028, 1));
        assert_eq!(MonthCursor::new(2026, 3).shift(-16), MonthCursor::new(2024, 11));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCursor::new(2024, 1).days_in_month(), 29);
        assert_eq!(MonthCursor::new(2025, 1).days_in_month(), 28);
        assert_eq!(MonthCursor::new(2026, 11).days_in_month(), 31);
        assert_eq!(MonthCursor::new(2026, 3).days_in_month(), 30);
    }

    #[test]
    fn test_leading_blanks_monday_first() {
        // 2026-06-01 is a Monday
        assert_eq!(MonthGrid::build(MonthCursor::new(2026, 5), &[]).leading_blanks, 0);
        // 2026-02-01 is a Sunday
        assert_eq!(MonthGrid::build(MonthCursor::new(2026, 1), &[]).leading_blanks, 6);
        // 2026-10-01 is a Thursday
        assert_eq!(MonthGrid::build(MonthCursor::new(2026, 9), &[]).leading_blanks, 3);
    }

    #[test]
    fn test_day_counts() {
        let list = vec![
            pedido(1, date(2026, 10, 18), (10, 0)),
            pedido(2, date(2026, 10, 18), (9, 0)),
            pedido(3, date(2026, 10, 3), (9, 0)),
            pedido(4, date(2026, 11, 18), (9, 0)),
        ];
        let grid = MonthGrid::build(MonthCursor::new(2026, 9), &list);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.cell(date(2026, 10, 18)).unwrap().count, 2);
        assert_eq!(grid.cell(date(2026, 10, 3)).unwrap().count, 1);
        assert_eq!(grid.cell(date(2026, 10, 4)).unwrap().count, 0);
        assert!(grid.cell(date(2026, 11, 18)).is_none());

        let total: usize = grid.days.iter().map(|c| c.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_day_labels() {
        let d = date(2026, 10, 18);
        assert_eq!(DayCell { date: d, count: 0 }.label(), "");
        assert_eq!(DayCell { date: d, count: 1 }.label(), "1 pedido");
        assert_eq!(DayCell { date: d, count: 4 }.label(), "4 pedidos");
    }

    #[test]
    fn test_weeks_layout() {
        let grid = MonthGrid::build(MonthCursor::new(2026, 1), &[]);
        let weeks = grid.weeks();
        // 6 blanks + 28 days = 34 slots -> 5 weeks
        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][..6].iter().all(Option::is_none));
        assert_eq!(weeks[0][6].unwrap().day(), 1);
        assert_eq!(weeks[4][5].unwrap().day(), 28);
        assert!(weeks[4][6].is_none());
    }

    #[test]
    fn test_day_detail_sorted_by_time() {
        let d = date(2026, 10, 18);
        let list = vec![
            pedido(1, d, (18, 0)),
            pedido(2, date(2026, 10, 19), (8, 0)),
            pedido(3, d, (8, 30)),
        ];
        let detail = DayDetail::build(d, &list);
        let ids: Vec<_> = detail.pedidos.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(detail.heading(), "Pedidos para 18/10/2026");
    }

    #[test]
    fn test_day_detail_empty() {
        let detail = DayDetail::build(date(2026, 10, 20), &[]);
        assert!(detail.is_empty());
        assert_eq!(detail.heading(), "— sin pedidos para 20/10/2026 —");
    }

    #[test]
    fn test_title() {
        assert_eq!(MonthCursor::new(2026, 9).title(), "Octubre de 2026");
    }
}
