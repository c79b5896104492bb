//! Periodic redraw ticks.
//!
//! Everything runs on the single UI thread: a tick is a plain `FnMut` that
//! finishes before the next one can be scheduled, so ticks never overlap.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

pub type Tick = Box<dyn FnMut()>;

/// Identifies one running periodic task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub(crate) i32);

impl TimerHandle {
    pub fn id(self) -> i32 {
        self.0
    }
}

/// Redraw period of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u32);

impl TickInterval {
    /// ~60 Hz, most particle and vector effects.
    pub const SMOOTH: TickInterval = TickInterval(16);
    /// ~28 Hz, character rain.
    pub const RAIN: TickInterval = TickInterval(35);
    /// ~20 Hz, field and fractal effects that are expensive per frame.
    pub const DENSE: TickInterval = TickInterval(50);

    pub const fn from_millis(ms: u32) -> Self {
        TickInterval(if ms == 0 { 1 } else { ms })
    }

    pub const fn millis(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

pub trait FrameScheduler {
    /// Begin invoking `tick` every `interval`.
    fn start(&mut self, interval: TickInterval, tick: Tick) -> Result<TimerHandle>;

    /// Cancel future ticks. Stopping an unknown or already stopped handle is
    /// a no-op.
    fn stop(&mut self, handle: TimerHandle);

    /// Number of timers currently scheduled.
    fn live_timers(&self) -> usize;
}

struct Timer {
    interval: TickInterval,
    elapsed: u32,
    tick: Tick,
}

/// Deterministic scheduler for the host: nothing fires until the caller asks.
#[derive(Default)]
pub struct ManualScheduler {
    timers: BTreeMap<TimerHandle, Timer>,
    next_id: i32,
    fired: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire every live timer once.
    pub fn tick_all(&mut self) {
        for timer in self.timers.values_mut() {
            (timer.tick)();
            self.fired += 1;
        }
    }

    /// Let `ms` milliseconds of simulated time pass, firing each timer as many
    /// times as its interval fits.
    pub fn advance(&mut self, ms: u32) {
        for timer in self.timers.values_mut() {
            timer.elapsed = timer.elapsed.saturating_add(ms);
            while timer.elapsed >= timer.interval.millis() {
                timer.elapsed -= timer.interval.millis();
                (timer.tick)();
                self.fired += 1;
            }
        }
    }

    pub fn interval_of(&self, handle: TimerHandle) -> Option<TickInterval> {
        self.timers.get(&handle).map(|t| t.interval)
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Total tick invocations so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&mut self, interval: TickInterval, tick: Tick) -> Result<TimerHandle> {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.insert(
            handle,
            Timer {
                interval,
                elapsed: 0,
                tick,
            },
        );
        Ok(handle)
    }

    fn stop(&mut self, handle: TimerHandle) {
        if self.timers.remove(&handle).is_none() {
            log::trace!("timer {} already stopped", handle.0);
        }
    }

    fn live_timers(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Tick) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Box::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn advance_respects_interval() {
        let mut sched = ManualScheduler::new();
        let (count, tick) = counter();
        sched.start(TickInterval::DENSE, tick).unwrap();
        sched.advance(120);
        assert_eq!(count.get(), 2);
        sched.advance(30);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn stop_twice_is_noop() {
        let mut sched = ManualScheduler::new();
        let (count, tick) = counter();
        let handle = sched.start(TickInterval::SMOOTH, tick).unwrap();
        sched.stop(handle);
        sched.stop(handle);
        sched.tick_all();
        assert_eq!(count.get(), 0);
        assert_eq!(sched.live_timers(), 0);
    }

    #[test]
    fn zero_interval_is_bumped() {
        assert_eq!(TickInterval::from_millis(0).millis(), 1);
    }
}
