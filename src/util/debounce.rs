//! Browser driver for [`SearchController`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold a [`DebouncedSearch`] handle. It keeps the controller in a
//! signal, turns `TimerCommand::Arm` into a `gloo-timers` sleep on the local
//! executor, and runs `on_search` for every dispatched filter set.
//!
//! TRADE-OFFS
//! ==========
//! A sleeping task can't be cancelled, so cancellation is by generation: a
//! superseded sleep wakes up, reports its old generation, and the controller
//! ignores it. If the page unmounted meanwhile the signal is gone and the
//! wake-up is dropped.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::search::{SearchController, SearchEvent, SearchField, SearchFilters, TimerCommand, Transition};

#[derive(Clone, Copy)]
pub struct DebouncedSearch {
    controller: RwSignal<SearchController>,
    on_search: Callback<SearchFilters>,
}

impl DebouncedSearch {
    /// Construction never runs `on_search`; see [`Self::force_trigger`].
    pub fn new(delay: Duration, initial: SearchFilters, on_search: Callback<SearchFilters>) -> Self {
        Self { controller: RwSignal::new(SearchController::new(delay, initial)), on_search }
    }

    /// Current value of one field (reactive).
    pub fn field(&self, field: SearchField) -> String {
        self.controller.with(|c| c.filters().get(field).to_owned())
    }

    /// Whether any field narrows the results (reactive).
    pub fn has_constraint(&self) -> bool {
        self.controller.with(|c| c.filters().has_constraint())
    }

    /// Whether an edit is waiting out the quiet period (reactive).
    pub fn is_typing(&self) -> bool {
        self.controller.with(SearchController::is_typing)
    }

    pub fn update(&self, field: SearchField, value: String) {
        self.step(SearchEvent::Edit { field, value });
    }

    pub fn clear(&self) {
        self.step(SearchEvent::Clear);
    }

    /// Replay restored filters right away.
    pub fn force_trigger(&self) {
        self.step(SearchEvent::ForceTrigger);
    }

    fn step(&self, event: SearchEvent) {
        if let Some(transition) = self.controller.try_update(|c| c.apply(event)) {
            self.run(transition);
        }
    }

    fn run(&self, transition: Transition) {
        if let TimerCommand::Arm { generation, delay } = transition.timer {
            self.schedule(generation, delay);
        }
        if let Some(filters) = transition.search {
            log::debug!("dispatching book search {:?}", filters.query_pairs());
            self.on_search.run(filters);
        }
    }

    fn schedule(&self, generation: u64, delay: Duration) {
        #[cfg(feature = "csr")]
        {
            let this = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                this.step(SearchEvent::TimerFired { generation });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (generation, delay);
        }
    }
}
