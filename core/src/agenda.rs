// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::transfer::{export_tsv, parse_tsv};
use crate::{
    AgendaError, AgendaRow, Config, DayDetail, MonthCursor, MonthGrid, Pedido, PedidoForm,
    PedidoId, Storage, Store, by_date_time,
};

/// The order agenda: owns the order list and keeps it in sync with the store.
#[derive(Debug)]
pub struct Agenda {
    now: NaiveDateTime,
    config: Config,
    store: Store,
    pedidos: Vec<Pedido>,
}

impl Agenda {
    /// Opens the agenda with the given configuration, loading the persisted orders.
    pub async fn new(mut config: Config) -> Result<Self, AgendaError> {
        config.normalize()?;
        let store = Store::open(config.state_dir.as_deref());
        Self::with_store(config, store).await
    }

    /// Opens the agenda on top of an explicit storage, leaving the configuration untouched.
    pub async fn with_storage(
        config: Config,
        storage: impl Storage + 'static,
    ) -> Result<Self, AgendaError> {
        Self::with_store(config, Store::new(storage)).await
    }

    async fn with_store(config: Config, store: Store) -> Result<Self, AgendaError> {
        let pedidos = store.load().await?;
        tracing::debug!(count = pedidos.len(), "loaded orders");
        Ok(Self {
            now: Local::now().naive_local(),
            config,
            store,
            pedidos,
        })
    }

    /// The current time in the agenda.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Refresh the current time to now.
    pub fn refresh_now(&mut self) {
        self.now = Local::now().naive_local();
    }

    /// Pins the current time, so defaults and imports are reproducible.
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All orders, in storage order.
    pub fn pedidos(&self) -> &[Pedido] {
        &self.pedidos
    }

    pub fn get(&self, id: PedidoId) -> Option<&Pedido> {
        self.pedidos.iter().find(|p| p.id == id)
    }

    /// A blank form for a new order, dated now.
    pub fn open_new(&self) -> PedidoForm {
        PedidoForm::new_at(self.now)
    }

    /// A form filled with the given order, or `None` if there is no such order.
    pub fn open_edit(&self, id: PedidoId) -> Option<PedidoForm> {
        let form = self.get(id).map(PedidoForm::from_pedido);
        if form.is_none() {
            tracing::debug!(id, "no order to edit");
        }
        form
    }

    /// Validates the form and saves it, creating a new order or overwriting the edited one.
    ///
    /// Nothing is persisted when validation fails or the edited order no longer exists.
    pub async fn submit(&mut self, form: &PedidoForm) -> Result<Pedido, AgendaError> {
        let draft = form.validate()?;

        let pedido = match form.id {
            Some(id) => {
                let pedido = self
                    .pedidos
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(AgendaError::NotFound(id))?;
                draft.apply_to(pedido);
                tracing::info!(id, "updated order");
                pedido.clone()
            }
            None => {
                let id = self.store.next_id().await?;
                let pedido = draft.into_pedido(id);
                self.pedidos.push(pedido.clone());
                tracing::info!(id, "created order");
                pedido
            }
        };

        self.store.save(&self.pedidos).await?;
        Ok(pedido)
    }

    /// Removes the order with the given id, returning it if it existed.
    pub async fn delete(&mut self, id: PedidoId) -> Result<Option<Pedido>, AgendaError> {
        let Some(index) = self.pedidos.iter().position(|p| p.id == id) else {
            tracing::debug!(id, "no order to delete");
            return Ok(None);
        };

        let pedido = self.pedidos.remove(index);
        self.store.save(&self.pedidos).await?;
        tracing::info!(id, "deleted order");
        Ok(Some(pedido))
    }

    /// All orders sorted by date and time.
    pub fn sorted(&self) -> Vec<&Pedido> {
        let mut list: Vec<_> = self.pedidos.iter().collect();
        list.sort_by(|a, b| by_date_time(a, b));
        list
    }

    /// The list view: one formatted row per order, sorted by date and time.
    pub fn rows(&self) -> Vec<AgendaRow> {
        self.sorted().into_iter().map(AgendaRow::from).collect()
    }

    /// The month the calendar opens on.
    pub fn current_month(&self) -> MonthCursor {
        MonthCursor::of(self.today())
    }

    pub fn month(&self, cursor: MonthCursor) -> MonthGrid {
        MonthGrid::build(cursor, &self.pedidos)
    }

    pub fn day(&self, date: NaiveDate) -> DayDetail<'_> {
        DayDetail::build(date, &self.pedidos)
    }

    /// Serializes every order, in storage order.
    pub fn export(&self) -> String {
        export_tsv(&self.pedidos)
    }

    /// Appends the orders of an exported file, each under a fresh id.
    pub async fn import(&mut self, text: &str) -> Result<ImportReport, AgendaError> {
        let batch = parse_tsv(text, self.today());

        let added = batch.drafts.len();
        for draft in batch.drafts {
            let id = self.store.next_id().await?;
            self.pedidos.push(draft.into_pedido(id));
        }
        if added > 0 {
            self.store.save(&self.pedidos).await?;
        }

        tracing::info!(added, skipped = batch.skipped, "imported orders");
        Ok(ImportReport {
            added,
            skipped: batch.skipped,
        })
    }
}

/// How many rows an import added and how many it skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}
