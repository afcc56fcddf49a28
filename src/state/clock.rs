// Round timer: one tick per interval, re-armed after every tick.

use super::timers::{Scheduler, TimerOwner, TimerTask};
use crate::model::{Command, Session};
use crate::util::format_time;

#[derive(Debug)]
pub struct Clock {
    tick_ms: u32,
    running: bool,
}

impl Clock {
    pub fn new(tick_ms: u32) -> Self {
        Self { tick_ms, running: false }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Always restarts from zero.
    pub fn start(&mut self, session: &mut Session, timers: &mut Scheduler, out: &mut Vec<Command>) {
        self.stop(timers, out);
        session.elapsed_seconds = 0;
        self.running = true;
        out.push(Command::UpdateTime(format_time(0)));
        timers.schedule(TimerOwner::Clock, self.tick_ms, TimerTask::ClockTick, out);
    }

    pub fn tick(&mut self, session: &mut Session, timers: &mut Scheduler, out: &mut Vec<Command>) {
        if !self.running {
            return;
        }
        session.elapsed_seconds = session.elapsed_seconds.saturating_add(1);
        out.push(Command::UpdateTime(format_time(session.elapsed_seconds)));
        timers.schedule(TimerOwner::Clock, self.tick_ms, TimerTask::ClockTick, out);
    }

    pub fn stop(&mut self, timers: &mut Scheduler, out: &mut Vec<Command>) {
        self.running = false;
        timers.cancel_owner(TimerOwner::Clock, out);
    }
}
