// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use cliclack::confirm;

/// Asks before deleting an order. Cancelling the prompt counts as declining.
pub fn confirm_delete() -> Result<bool, Box<dyn std::error::Error>> {
    match confirm("¿Eliminar este pedido?").initial_value(false).interact() {
        Ok(yes) => Ok(yes),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(false),
        Err(e) => Err(e.into()),
    }
}
