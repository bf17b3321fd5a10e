// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_verbose() -> Arg {
    arg!(-v --verbose "Show more detailed information")
}

pub fn get_verbose(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose")
}

/// Display width of the first `first_n` grapheme clusters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n: usize) -> usize {
    s.graphemes(true).take(first_n).map(|g| g.width()).sum()
}

/// Number of grapheme clusters in `s`, the positions an input cursor can take minus one.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Return the byte range of the grapheme cluster at index `g_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}
