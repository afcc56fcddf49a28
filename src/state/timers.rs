//! Cancellable one-shot timers.
//!
//! The core never sleeps: it hands out [`TimerId`]s through
//! [`Command::ScheduleTimer`] and the host reports them back with
//! `UiEvent::TimerFired`. Every handle is tagged with the subsystem that owns
//! it so a stop or reset can sweep that subsystem's timers in one call. A
//! fired id the scheduler no longer tracks is dropped, which is what keeps a
//! late callback from touching a reset session.

use crate::model::{Command, TargetId, TimerId};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerOwner {
    Clock,
    Spawner,
    /// The delayed start of a round after Continue.
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTask {
    ClockTick,
    Spawn,
    Remove(TargetId),
    BeginRound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub owner: TimerOwner,
    pub task: TimerTask,
    pub delay_ms: u32,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: BTreeMap<TimerId, PendingTimer>,
}

impl Scheduler {
    pub fn schedule(
        &mut self,
        owner: TimerOwner,
        delay_ms: u32,
        task: TimerTask,
        out: &mut Vec<Command>,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, PendingTimer { id, owner, task, delay_ms });
        out.push(Command::ScheduleTimer { id, delay_ms });
        id
    }

    /// Consumes a fired timer. `None` means it was cancelled or already fired.
    pub fn fire(&mut self, id: TimerId) -> Option<TimerTask> {
        self.pending.remove(&id).map(|p| p.task)
    }

    pub fn cancel_owner(&mut self, owner: TimerOwner, out: &mut Vec<Command>) {
        let ids: Vec<TimerId> = self
            .pending
            .values()
            .filter(|p| p.owner == owner)
            .map(|p| p.id)
            .collect();
        for id in ids {
            self.pending.remove(&id);
            out.push(Command::CancelTimer(id));
        }
    }

    pub fn cancel_all(&mut self, out: &mut Vec<Command>) {
        for id in std::mem::take(&mut self.pending).into_keys() {
            out.push(Command::CancelTimer(id));
        }
    }

    /// Snapshot of outstanding timers, oldest first.
    pub fn pending(&self) -> Vec<PendingTimer> {
        self.pending.values().copied().collect()
    }

    pub fn pending_for(&self, owner: TimerOwner) -> usize {
        self.pending.values().filter(|p| p.owner == owner).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_timer_never_fires() {
        let mut s = Scheduler::default();
        let mut out = Vec::new();
        let spawn = s.schedule(TimerOwner::Spawner, 700, TimerTask::Spawn, &mut out);
        let tick = s.schedule(TimerOwner::Clock, 1000, TimerTask::ClockTick, &mut out);
        s.cancel_owner(TimerOwner::Spawner, &mut out);
        assert_eq!(out.last(), Some(&Command::CancelTimer(spawn)));
        assert_eq!(s.fire(spawn), None);
        assert_eq!(s.fire(tick), Some(TimerTask::ClockTick));
        assert_eq!(s.fire(tick), None);
    }

    #[test]
    fn ids_are_not_reused_after_cancel_all() {
        let mut s = Scheduler::default();
        let mut out = Vec::new();
        let a = s.schedule(TimerOwner::Round, 500, TimerTask::BeginRound, &mut out);
        s.cancel_all(&mut out);
        let b = s.schedule(TimerOwner::Round, 500, TimerTask::BeginRound, &mut out);
        assert_ne!(a, b);
        assert_eq!(s.pending().len(), 1);
    }
}
