// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use agenda_core::format::parse_fecha;
use agenda_core::{Agenda, MonthCursor};
use chrono::NaiveDate;
use clap::{ArgAction, ArgMatches, Command, arg};

use crate::calendar_formatter::CalendarFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar {
    pub month: Option<MonthCursor>,
    pub day: Option<NaiveDate>,

    /// Months to move from the starting month, negative goes back.
    pub offset: i32,

    pub output_format: ArgOutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the orders of a month as a calendar")
            .arg(arg!(--month <MONTH> "Month to show, YYYY-MM").value_parser(parse_month))
            .arg(
                arg!(--day <DAY> "Day whose orders are listed below the grid, YYYY-MM-DD")
                    .value_parser(parse_day),
            )
            .arg(arg!(--prev "Go back one month, repeatable").action(ArgAction::Count))
            .arg(arg!(--next "Go forward one month, repeatable").action(ArgAction::Count))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let prev = matches.get_count("prev") as i32;
        let next = matches.get_count("next") as i32;
        Self {
            month: matches.get_one("month").copied(),
            day: matches.get_one("day").copied(),
            offset: next - prev,
            output_format: ArgOutputFormat::from(matches),
        }
    }

    /// The month to show: `--month`, else the month of `--day`, else `current`.
    pub fn cursor(&self, current: MonthCursor) -> MonthCursor {
        self.month
            .or(self.day.map(MonthCursor::of))
            .unwrap_or(current)
            .shift(self.offset)
    }

    pub async fn run(self, agenda: &mut Agenda) -> Result<(), Box<dyn Error>> {
        let cursor = self.cursor(agenda.current_month());
        tracing::debug!(year = cursor.year, month0 = cursor.month0, "showing calendar...");

        let grid = agenda.month(cursor);
        let detail = self.day.map(|d| agenda.day(d));
        let formatter = CalendarFormatter::new(agenda.today()).with_output_format(self.output_format);
        println!("{}", formatter.format(&grid, detail.as_ref()));
        Ok(())
    }
}

fn parse_month(s: &str) -> Result<MonthCursor, String> {
    let invalid = || format!("invalid month '{s}', expected YYYY-MM");
    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: i32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok(MonthCursor::new(year, month - 1))
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    parse_fecha(s).ok_or_else(|| format!("invalid day '{s}', expected YYYY-MM-DD"))
}
