//! Timers driven by an external clock.
//!
//! Two kinds of timer exist: the recurring color tick and one-shot return
//! timers, at most one per particle. Scheduling a return for a particle that
//! already has one pending replaces it, so a particle pushed twice in quick
//! succession only returns once, after the later push.
//!
//! Nothing here sleeps or spawns. The owner calls [`Scheduler::poll`] with the
//! current time and acts on whatever has come due.

use crate::particle::ParticleId;
use std::collections::HashMap;
use std::time::Duration;

/// A timer that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Recurring color-cycle tick.
    ColorTick,
    /// Send this particle back to its target.
    Return(ParticleId),
}

#[derive(Debug)]
pub struct Scheduler {
    tick_interval: Duration,
    next_tick: Option<Duration>,
    returns: HashMap<ParticleId, Duration>,
}

impl Scheduler {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            next_tick: None,
            returns: HashMap::new(),
        }
    }

    /// Start the recurring tick; the first one fires one interval after `now`.
    pub fn start_ticks(&mut self, now: Duration) {
        self.next_tick = Some(now + self.tick_interval);
    }

    pub fn ticks_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Schedule a return for `id` at `due`, cancelling any pending one.
    ///
    /// Returns `true` if an earlier return was replaced.
    pub fn schedule_return(&mut self, id: ParticleId, due: Duration) -> bool {
        self.returns.insert(id, due).is_some()
    }

    pub fn cancel_return(&mut self, id: ParticleId) -> bool {
        self.returns.remove(&id).is_some()
    }

    pub fn pending_return(&self, id: ParticleId) -> Option<Duration> {
        self.returns.get(&id).copied()
    }

    pub fn pending_returns(&self) -> usize {
        self.returns.len()
    }

    /// Take every timer due at or before `now`.
    ///
    /// At most one color tick fires per poll. If the clock has fallen more
    /// than an interval behind, missed ticks are dropped rather than replayed.
    /// Returns come back ordered by due time, then particle id.
    pub fn poll(&mut self, now: Duration) -> Vec<Timer> {
        let mut due = Vec::new();

        if let Some(next) = self.next_tick {
            if now >= next {
                due.push(Timer::ColorTick);
                let following = next + self.tick_interval;
                self.next_tick = Some(if following > now {
                    following
                } else {
                    now + self.tick_interval
                });
            }
        }

        let mut ready: Vec<(Duration, ParticleId)> = self
            .returns
            .iter()
            .filter(|&(_, &at)| at <= now)
            .map(|(&id, &at)| (at, id))
            .collect();
        ready.sort_unstable();
        for (_, id) in ready {
            self.returns.remove(&id);
            due.push(Timer::Return(id));
        }

        due
    }

    /// Earliest time anything is due, for sleeping the event loop.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.returns.values().copied().chain(self.next_tick).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_no_ticks_until_started() {
        let mut scheduler = Scheduler::new(ms(16));
        assert!(scheduler.poll(ms(1000)).is_empty());
        assert!(!scheduler.ticks_running());
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn test_tick_cadence() {
        let mut scheduler = Scheduler::new(ms(16));
        scheduler.start_ticks(ms(0));
        assert!(scheduler.poll(ms(15)).is_empty());
        assert_eq!(scheduler.poll(ms(16)), vec![Timer::ColorTick]);
        assert!(scheduler.poll(ms(20)).is_empty());
        assert_eq!(scheduler.poll(ms(32)), vec![Timer::ColorTick]);
        assert_eq!(scheduler.next_deadline(), Some(ms(48)));
    }

    #[test]
    fn test_stalled_clock_drops_missed_ticks() {
        let mut scheduler = Scheduler::new(ms(16));
        scheduler.start_ticks(ms(0));
        assert_eq!(scheduler.poll(ms(500)), vec![Timer::ColorTick]);
        assert!(scheduler.poll(ms(501)).is_empty());
        assert_eq!(scheduler.next_deadline(), Some(ms(516)));
    }

    #[test]
    fn test_return_fires_once() {
        let mut scheduler = Scheduler::new(ms(16));
        scheduler.schedule_return(ParticleId(3), ms(200));
        assert!(scheduler.poll(ms(199)).is_empty());
        assert_eq!(scheduler.poll(ms(200)), vec![Timer::Return(ParticleId(3))]);
        assert!(scheduler.poll(ms(400)).is_empty());
        assert_eq!(scheduler.pending_returns(), 0);
    }

    #[test]
    fn test_reschedule_replaces_pending_return() {
        let mut scheduler = Scheduler::new(ms(16));
        assert!(!scheduler.schedule_return(ParticleId(1), ms(200)));
        assert!(scheduler.schedule_return(ParticleId(1), ms(350)));
        assert_eq!(scheduler.pending_return(ParticleId(1)), Some(ms(350)));

        assert!(scheduler.poll(ms(200)).is_empty());
        assert_eq!(scheduler.poll(ms(350)), vec![Timer::Return(ParticleId(1))]);
    }

    #[test]
    fn test_cancel_return() {
        let mut scheduler = Scheduler::new(ms(16));
        scheduler.schedule_return(ParticleId(1), ms(10));
        assert!(scheduler.cancel_return(ParticleId(1)));
        assert!(!scheduler.cancel_return(ParticleId(1)));
        assert!(scheduler.poll(ms(100)).is_empty());
    }

    #[test]
    fn test_returns_ordered() {
        let mut scheduler = Scheduler::new(ms(16));
        scheduler.schedule_return(ParticleId(5), ms(30));
        scheduler.schedule_return(ParticleId(2), ms(30));
        scheduler.schedule_return(ParticleId(9), ms(10));
        assert_eq!(scheduler.next_deadline(), Some(ms(10)));
        assert_eq!(
            scheduler.poll(ms(30)),
            vec![
                Timer::Return(ParticleId(9)),
                Timer::Return(ParticleId(2)),
                Timer::Return(ParticleId(5)),
            ]
        );
    }
}
