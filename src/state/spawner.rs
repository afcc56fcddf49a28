//! Target spawning, catch marking and delayed removal.
//!
//! The spawner owns the live target set: it is the only writer on insert,
//! and removals happen through its own `Remove` timers or a bulk [`Spawner::clear`].

use super::timers::{Scheduler, TimerOwner, TimerTask};
use crate::model::{Command, PlayArea, Point, Target, TargetId};
use std::collections::BTreeMap;

/// Uniform random source in `[0, 1)`.
pub trait Dice {
    fn roll(&mut self) -> f64;
}

/// Browser RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsDice;

impl Dice for JsDice {
    fn roll(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Replays a fixed list of rolls, cycling when exhausted. Used for tests and replays.
#[derive(Debug, Clone)]
pub struct SequenceDice {
    rolls: Vec<f64>,
    next: usize,
}

impl SequenceDice {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, next: 0 }
    }
}

impl Dice for SequenceDice {
    fn roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let v = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        v.clamp(0.0, 1.0)
    }
}

/// Usable `[lo, hi]` along one axis after keeping `margin` clear of each edge.
/// The margin shrinks to half the extent on small viewports so `hi >= lo` always holds.
pub fn safe_range(extent: f64, margin: f64) -> (f64, f64) {
    if !(extent > 0.0) {
        return (0.0, 0.0);
    }
    let m = margin.max(0.0).min(extent / 2.0);
    (m, extent - m)
}

#[derive(Debug)]
pub struct Spawner {
    next_id: u64,
    live: BTreeMap<TargetId, Target>,
    margin: f64,
    respawn_delays_ms: Vec<u32>,
    remove_delay_ms: u32,
}

impl Spawner {
    pub fn new(margin: f64, respawn_delays_ms: Vec<u32>, remove_delay_ms: u32) -> Self {
        Self {
            next_id: 0,
            live: BTreeMap::new(),
            margin,
            respawn_delays_ms,
            remove_delay_ms,
        }
    }

    pub fn spawn_one(&mut self, area: PlayArea, dice: &mut dyn Dice, out: &mut Vec<Command>) -> TargetId {
        let (x_lo, x_hi) = safe_range(area.width, self.margin);
        let (y_lo, y_hi) = safe_range(area.height, self.margin);
        let x = x_lo + dice.roll() * (x_hi - x_lo);
        let y = y_lo + dice.roll() * (y_hi - y_lo);
        let rotation = dice.roll() * 360.0;

        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            Target { id, position: Point::new(x, y), rotation, caught_at: None },
        );
        out.push(Command::ShowTarget { id, x, y, rotation });
        id
    }

    /// Queues the replacement spawns that follow every catch.
    pub fn on_caught(&self, timers: &mut Scheduler, out: &mut Vec<Command>) {
        for &delay in &self.respawn_delays_ms {
            timers.schedule(TimerOwner::Spawner, delay, TimerTask::Spawn, out);
        }
    }

    /// Marks a live target caught and queues its removal. Returns `false` if the
    /// target is unknown or was already caught.
    pub fn mark_caught(
        &mut self,
        id: TargetId,
        now_secs: u32,
        timers: &mut Scheduler,
        out: &mut Vec<Command>,
    ) -> bool {
        let Some(target) = self.live.get_mut(&id) else { return false; };
        if target.is_caught() {
            return false;
        }
        target.caught_at = Some(now_secs);
        out.push(Command::MarkCaught(id));
        timers.schedule(TimerOwner::Spawner, self.remove_delay_ms, TimerTask::Remove(id), out);
        true
    }

    pub fn remove(&mut self, id: TargetId, out: &mut Vec<Command>) -> bool {
        if self.live.remove(&id).is_some() {
            out.push(Command::RemoveTarget(id));
            true
        } else {
            false
        }
    }

    /// Drops every live target and every pending spawn or removal.
    pub fn clear(&mut self, timers: &mut Scheduler, out: &mut Vec<Command>) {
        timers.cancel_owner(TimerOwner::Spawner, out);
        for id in std::mem::take(&mut self.live).into_keys() {
            out.push(Command::RemoveTarget(id));
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.live.values()
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.live.get(&id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawner() -> Spawner {
        Spawner::new(100.0, vec![700, 1200], 1500)
    }

    #[test]
    fn positions_stay_inside_margins() {
        let mut sp = spawner();
        let mut dice = SequenceDice::new(vec![0.0, 0.0, 0.0, 0.999, 0.999, 0.5]);
        let mut out = Vec::new();
        let area = PlayArea { width: 1024.0, height: 768.0 };
        let a = sp.spawn_one(area, &mut dice, &mut out);
        let b = sp.spawn_one(area, &mut dice, &mut out);
        let pa = sp.get(a).unwrap().position;
        let pb = sp.get(b).unwrap().position;
        assert_eq!(pa, Point::new(100.0, 100.0));
        assert!(pb.x <= 924.0 && pb.y <= 668.0 && pb.x > 900.0);
        assert_eq!(sp.get(b).unwrap().rotation, 180.0);
    }

    #[test]
    fn tiny_viewport_clamps_margin() {
        assert_eq!(safe_range(150.0, 100.0), (75.0, 75.0));
        assert_eq!(safe_range(0.0, 100.0), (0.0, 0.0));
        assert_eq!(safe_range(-20.0, 100.0), (0.0, 0.0));
        let mut sp = spawner();
        let mut out = Vec::new();
        let id = sp.spawn_one(
            PlayArea { width: 120.0, height: 40.0 },
            &mut SequenceDice::new(vec![0.9]),
            &mut out,
        );
        let p = sp.get(id).unwrap().position;
        assert_eq!(p, Point::new(60.0, 20.0));
    }

    #[test]
    fn catch_is_idempotent_and_schedules_removal() {
        let mut sp = spawner();
        let mut timers = Scheduler::default();
        let mut out = Vec::new();
        let id = sp.spawn_one(PlayArea::default(), &mut SequenceDice::new(vec![0.5]), &mut out);
        assert!(sp.mark_caught(id, 4, &mut timers, &mut out));
        assert!(!sp.mark_caught(id, 5, &mut timers, &mut out));
        assert_eq!(sp.get(id).unwrap().caught_at, Some(4));
        let removals: Vec<_> = timers.pending().into_iter().filter(|p| p.task == TimerTask::Remove(id)).collect();
        assert_eq!(removals.len(), 1);
        assert_eq!(removals[0].delay_ms, 1500);
    }

    #[test]
    fn replacements_use_both_delays() {
        let sp = spawner();
        let mut timers = Scheduler::default();
        let mut out = Vec::new();
        sp.on_caught(&mut timers, &mut out);
        let delays: Vec<u32> = timers.pending().iter().map(|p| p.delay_ms).collect();
        assert_eq!(delays, vec![700, 1200]);
    }

    #[test]
    fn clear_removes_targets_and_pending_work() {
        let mut sp = spawner();
        let mut timers = Scheduler::default();
        let mut out = Vec::new();
        let mut dice = SequenceDice::new(vec![0.3, 0.6]);
        let a = sp.spawn_one(PlayArea::default(), &mut dice, &mut out);
        sp.spawn_one(PlayArea::default(), &mut dice, &mut out);
        sp.mark_caught(a, 1, &mut timers, &mut out);
        sp.on_caught(&mut timers, &mut out);
        out.clear();
        sp.clear(&mut timers, &mut out);
        assert_eq!(sp.live_count(), 0);
        assert_eq!(timers.pending_for(TimerOwner::Spawner), 0);
        assert_eq!(out.iter().filter(|c| matches!(c, Command::RemoveTarget(_))).count(), 2);
    }
}
