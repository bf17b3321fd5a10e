// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary directory management with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_sorted_by_date_time, assert_state_file};
#[allow(unused_imports)]
pub use fixtures::{at, file_agenda, memory_agenda, test_config, test_form};
pub use temp_dir::setup_temp_dirs;
