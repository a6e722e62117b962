use gloo_timers::callback::Timeout;

use crate::config::STATUS_RESET_MS;

/// Holds the pending revert of the submission banner. At most one reset is
/// pending; scheduling or cancelling drops the previous one, which stops it.
#[derive(Default)]
pub struct StatusTimer {
    pending: Option<Timeout>,
}

impl StatusTimer {
    pub fn schedule<F>(&mut self, on_reset: F)
    where
        F: 'static + FnOnce(),
    {
        self.schedule_after(STATUS_RESET_MS, on_reset);
    }

    pub fn schedule_after<F>(&mut self, millis: u32, on_reset: F)
    where
        F: 'static + FnOnce(),
    {
        self.pending = Some(Timeout::new(millis, on_reset));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn cancelled_reset_never_fires() {
        let fired = Rc::new(Cell::new(false));
        let mut timer = StatusTimer::default();

        let flag = fired.clone();
        timer.schedule_after(10, move || flag.set(true));
        timer.cancel();

        TimeoutFuture::new(50).await;
        assert!(!fired.get());
    }

    #[wasm_bindgen_test]
    async fn rescheduling_replaces_the_older_reset() {
        let fired = Rc::new(Cell::new(Vec::new()));
        let mut timer = StatusTimer::default();

        let first = fired.clone();
        timer.schedule_after(10, move || {
            let mut seen = first.take();
            seen.push(1);
            first.set(seen);
        });
        let second = fired.clone();
        timer.schedule_after(20, move || {
            let mut seen = second.take();
            seen.push(2);
            second.set(seen);
        });

        TimeoutFuture::new(60).await;
        assert_eq!(fired.take(), vec![2]);
    }
}
