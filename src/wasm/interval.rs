use std::collections::BTreeMap;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::error::{BackgroundError, Result};
use crate::scheduler::{FrameScheduler, Tick, TickInterval, TimerHandle};

/// `window.setInterval` timers. The closure of each live timer is kept here
/// and dropped once its interval is cleared.
pub struct IntervalScheduler {
    window: Window,
    timers: BTreeMap<TimerHandle, Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(BackgroundError::NoWindow)?;
        Ok(Self {
            window,
            timers: BTreeMap::new(),
        })
    }
}

impl FrameScheduler for IntervalScheduler {
    fn start(&mut self, interval: TickInterval, tick: Tick) -> Result<TimerHandle> {
        let closure = Closure::wrap(tick);
        let id = self.window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval.millis() as i32,
        )?;
        let handle = TimerHandle(id);
        self.timers.insert(handle, closure);
        Ok(handle)
    }

    fn stop(&mut self, handle: TimerHandle) {
        if self.timers.remove(&handle).is_some() {
            self.window.clear_interval_with_handle(handle.id());
        } else {
            log::trace!("timer {} already stopped", handle.id());
        }
    }

    fn live_timers(&self) -> usize {
        self.timers.len()
    }
}
