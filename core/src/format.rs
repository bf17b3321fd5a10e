// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Locale helpers for the single supported locale (es-AR, prices in ARS).

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::Regex;

static RE_LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

static RE_DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid date regex")
});

static RE_ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Parses a price typed by a person, accepting either `,` or `.` as the decimal separator.
///
/// Only the leading number is taken, so `"12,5 pesos"` is 12.5. Returns `None` when the text
/// does not start with a number.
pub fn parse_precio(s: &str) -> Option<f64> {
    let s = s.replacen(',', ".", 1);
    let m = RE_LEADING_NUMBER.find(&s)?;
    m.as_str().trim_start().parse::<f64>().ok().filter(|a| a.is_finite())
}

/// Formats a price as pesos, e.g. `$ 1.234,50`.
pub fn format_precio(precio: f64) -> String {
    let cents = (precio.abs() * 100.0).round() as u64;
    let (int, frac) = (cents / 100, cents % 100);

    let digits = int.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if precio < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}$ {grouped},{frac:02}")
}

/// Formats a date as `DD/MM/YYYY`.
pub fn to_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a `D/M/YYYY` date (one or two digit day and month), falling back to `today` when
/// the text is malformed or names a day that does not exist.
pub fn from_dmy(s: &str, today: NaiveDate) -> NaiveDate {
    let Some(caps) = RE_DMY.captures(s) else {
        tracing::debug!(value = s, "malformed day/month/year date, using today");
        return today;
    };

    let day = caps[1].parse().ok();
    let month = caps[2].parse().ok();
    let year = caps[3].parse().ok();
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(|| {
            tracing::debug!(value = s, "impossible date, using today");
            today
        }),
        _ => today,
    }
}

/// Parses an ISO `YYYY-MM-DD` date, with exactly four year digits.
pub fn parse_fecha(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !RE_ISO_DATE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parses a `HH:MM` time of day; a trailing `:SS` is accepted and dropped.
pub fn parse_hora(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
        .and_then(|t| t.with_second(0))
}

/// Formats a time of day as `HH:MM`.
pub fn format_hora(hora: NaiveTime) -> String {
    hora.format("%H:%M").to_string()
}

/// The Spanish name of a month, `month0` being 0 for January.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[(month0 % 12) as usize]
}

/// Title of a calendar month, e.g. `Octubre de 2026`.
pub fn month_title(year: i32, month0: u32) -> String {
    capitalize(&format!("{} de {}", month_name(month0), year))
}

/// Title of the given date's month.
pub fn month_title_of(date: NaiveDate) -> String {
    month_title(date.year(), date.month0())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
