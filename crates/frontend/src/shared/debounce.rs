use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay before a filter change is sent to the server, in milliseconds
pub const FILTER_DEBOUNCE_MS: u32 = 400;

/// Trailing-edge debouncer: only the last call within the delay window runs.
///
/// Every call takes a fresh token; when the timer fires, the callback runs
/// only if no newer call has taken the token since.
#[derive(Clone, Copy)]
pub struct Debouncer {
    generation: StoredValue<u64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            generation: StoredValue::new(0),
        }
    }

    pub fn debounce<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let token = self.generation.get_value() + 1;
        self.generation.set_value(token);
        let generation = self.generation;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.get_value() == token {
                callback();
            }
        });
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
