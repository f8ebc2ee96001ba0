use eframe::egui;

use crate::engine::LoadJob;
use crate::engine::worker::spawn_load;

use super::app::DashboardApp;
use super::app_state::Applied;

impl DashboardApp {
    /// Spawns one background fetch per job.
    pub(super) fn dispatch(&mut self, jobs: Vec<LoadJob>) {
        for job in jobs {
            self.in_flight.push(spawn_load(&self.client, job));
        }
    }

    /// Collects finished fetches and applies them in completion order.
    pub(super) fn poll_loads(&mut self, ctx: &egui::Context) {
        if self.in_flight.is_empty() {
            return;
        }

        let mut pending = Vec::with_capacity(self.in_flight.len());
        let mut finished = Vec::new();
        for promise in self.in_flight.drain(..) {
            match promise.try_take() {
                Ok(result) => finished.push(result),
                Err(promise) => pending.push(promise),
            }
        }
        self.in_flight = pending;

        for result in finished {
            if self.data_state.apply(&mut self.controller, result) == Applied::Stale {
                continue;
            }
            ctx.request_repaint();
        }

        if !self.in_flight.is_empty() {
            ctx.request_repaint();
        }
    }

    pub(super) fn loads_in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
