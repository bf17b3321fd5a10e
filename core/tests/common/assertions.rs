// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use agenda_core::Pedido;

/// Asserts that the orders are in ascending (fecha, hora) order.
pub fn assert_sorted_by_date_time(pedidos: &[&Pedido]) {
    for pair in pedidos.windows(2) {
        assert!(
            (pair[0].fecha, pair[0].hora) <= (pair[1].fecha, pair[1].hora),
            "order {} should not come before order {}",
            pair[0].id,
            pair[1].id
        );
    }
}

/// Asserts that a storage file exists for the given key.
pub fn assert_state_file(state_dir: &Path, key: &str) {
    let path = state_dir.join(key);
    assert!(path.is_file(), "Expected state file {}", path.display());
}
