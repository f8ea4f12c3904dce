//! Frame phase stopwatch. The browser has no `Instant`, so wasm32 reads
//! `Date.now()` instead; resolution there is whole milliseconds.

/// Millisecond stopwatch for one frame phase
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer {
            #[cfg(target_arch = "wasm32")]
            started_at_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            started_at: std::time::Instant::now(),
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        let ms = js_sys::Date::now() - self.started_at_ms;
        #[cfg(not(target_arch = "wasm32"))]
        let ms = self.started_at.elapsed().as_secs_f64() * 1000.0;
        ms
    }

    /// Close the current phase and open the next one
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let ms = self.elapsed_ms();
        *self = PerfTimer::start();
        ms
    }
}
