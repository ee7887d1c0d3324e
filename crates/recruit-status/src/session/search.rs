use super::{Notifier, SearchTicket, Session};
use crate::config::SearchConfig;
use crate::lookup::LookupResult;
use rand::Rng;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Largest random progress step per tick (exclusive).
const PROGRESS_STEP_LIMIT: u8 = 20;

/// Runs the simulated search window for a submitted ticket: progress ticks at
/// a fixed interval, then the lookup once the full delay has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct SearchDriver {
    config: SearchConfig,
}

impl SearchDriver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Drive `ticket` to completion. `on_progress` sees every progress value.
    /// Returns `None` if the ticket was superseded before the delay ran out;
    /// the session is then left untouched. A zero tick waits out the delay
    /// in one step with no progress updates.
    pub async fn run<N, R, F>(
        &self,
        session: &Mutex<Session<N>>,
        ticket: SearchTicket,
        rng: &mut R,
        mut on_progress: F,
    ) -> Option<LookupResult>
    where
        N: Notifier + 'static,
        R: Rng,
        F: FnMut(u8),
    {
        let mut elapsed = Duration::ZERO;

        while elapsed < self.config.delay {
            let remaining = self.config.delay - elapsed;
            let step = if self.config.tick.is_zero() {
                remaining
            } else {
                self.config.tick.min(remaining)
            };
            sleep(step).await;
            elapsed += step;

            if elapsed >= self.config.delay {
                break;
            }

            let increment = rng.gen_range(0..PROGRESS_STEP_LIMIT);
            let progress = session.lock().await.tick(ticket, increment)?;
            on_progress(progress);
        }

        session.lock().await.resolve(ticket)
    }
}
