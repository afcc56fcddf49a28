//! The game state machine.
//!
//! [`Game`] owns the [`Session`] and the subsystems that act on it, turns each
//! [`UiEvent`] into a list of [`Command`]s, and never touches the browser
//! itself. Screens run `Start → Selecting → Store → Playing → GameOver`, with
//! `GameOver → Store` to spend points and `Restart` from anywhere.

use crate::config::GameConfig;
use crate::model::{Command, Phase, PlayArea, Point, Screen, Session, SpriteRef, Target, TargetId, UiEvent};
use crate::state::{
    CatchMode, CatchResolver, Clock, Dice, Economy, PendingTimer, Purchase, Scheduler, Spawner,
    TimerOwner, TimerTask,
};
use crate::storage::UpgradeStore;
use crate::util::{clog, cwarn, format_time};

pub struct Game {
    config: GameConfig,
    session: Session,
    area: PlayArea,
    clock: Clock,
    spawner: Spawner,
    economy: Economy,
    catcher: CatchResolver,
    timers: Scheduler,
    store: Box<dyn UpgradeStore>,
    dice: Box<dyn Dice>,
}

impl Game {
    /// Reads the persisted upgrade flag once; a storage failure counts as "not owned".
    pub fn new(config: GameConfig, store: Box<dyn UpgradeStore>, dice: Box<dyn Dice>) -> Self {
        let has_upgrade = match store.load_upgrade_flag() {
            Ok(owned) => owned,
            Err(e) => {
                cwarn(&format!("upgrade flag unavailable, starting without it: {}", e));
                false
            }
        };
        Self {
            clock: Clock::new(config.tick_ms),
            spawner: Spawner::new(
                config.spawn_margin,
                config.respawn_delays_ms.clone(),
                config.remove_delay_ms,
            ),
            economy: Economy::new(config.upgrade_cost, config.win_score),
            catcher: CatchResolver::new(config.catch_radius, config.target_width, config.target_height),
            timers: Scheduler::default(),
            session: Session::with_upgrade(has_upgrade),
            area: PlayArea::default(),
            config,
            store,
            dice,
        }
    }

    /// Initial display state, issued once after mount.
    pub fn boot(&self) -> Vec<Command> {
        let mut out = vec![
            Command::UpdateScore(self.session.score),
            Command::UpdateTime(format_time(self.session.elapsed_seconds)),
            Command::RevealScreen(Screen::Start),
        ];
        if self.session.has_upgrade {
            out.push(Command::ShowUpgradeStatus(Purchase::AlreadyOwned.status_text().to_string()));
            out.push(Command::DisablePurchase);
        }
        out
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Command> {
        let mut out = Vec::new();
        match event {
            UiEvent::Begin => self.begin(&mut out),
            UiEvent::SpriteChosen(sprite) => self.choose_sprite(sprite, &mut out),
            UiEvent::Continue => self.continue_to_play(&mut out),
            UiEvent::Purchase => self.purchase(&mut out),
            UiEvent::Restart => self.restart(&mut out),
            UiEvent::GoToStore => self.go_to_store(&mut out),
            UiEvent::CanvasClicked { x, y } => {
                if self.session.phase == Phase::Playing && self.catch_mode() == CatchMode::Area {
                    let hits = self.catcher.resolve_area(self.spawner.targets(), Point::new(x, y));
                    self.catch(hits, &mut out);
                }
            }
            UiEvent::TargetClicked(id) => {
                if self.session.phase == Phase::Playing && self.catch_mode() == CatchMode::Direct {
                    let hit = self.catcher.resolve_direct(self.spawner.targets(), id);
                    self.catch(hit.into_iter().collect(), &mut out);
                }
            }
            UiEvent::TimerFired(id) => match self.timers.fire(id) {
                Some(task) => self.run_task(task, &mut out),
                None => clog(&format!("stale timer {:?} ignored", id)),
            },
            UiEvent::ViewportResized { width, height } => {
                if width.is_finite() && height.is_finite() {
                    self.area = PlayArea { width, height };
                }
            }
        }
        out
    }

    fn ignored(&self, what: &str) {
        clog(&format!("{} ignored in phase {:?}", what, self.session.phase));
    }

    fn begin(&mut self, out: &mut Vec<Command>) {
        if self.session.phase != Phase::Start {
            return self.ignored("begin");
        }
        self.session.phase = Phase::Selecting;
        out.push(Command::RevealScreen(Screen::Select));
    }

    fn choose_sprite(&mut self, sprite: SpriteRef, out: &mut Vec<Command>) {
        if self.session.phase != Phase::Selecting {
            return self.ignored("sprite choice");
        }
        clog(&format!("sprite chosen: {}", sprite.0));
        self.session.selected_sprite = Some(sprite.clone());
        self.session.phase = Phase::Store;
        out.push(Command::UseSprite(sprite));
        out.push(Command::RevealScreen(Screen::Store));
    }

    fn continue_to_play(&mut self, out: &mut Vec<Command>) {
        if self.session.phase != Phase::Store {
            return self.ignored("continue");
        }
        self.session.phase = Phase::Playing;
        self.economy.rearm();
        out.push(Command::RevealScreen(Screen::Play));
        self.timers.cancel_owner(TimerOwner::Round, out);
        self.timers.schedule(TimerOwner::Round, self.config.round_start_delay_ms, TimerTask::BeginRound, out);
    }

    fn purchase(&mut self, out: &mut Vec<Command>) {
        if self.session.phase != Phase::Store {
            return self.ignored("purchase");
        }
        let outcome = self.economy.try_purchase(&mut self.session);
        clog(&format!("purchase: {:?}", outcome));
        out.push(Command::ShowUpgradeStatus(outcome.status_text().to_string()));
        if outcome == Purchase::Purchased {
            out.push(Command::UpdateScore(self.session.score));
            out.push(Command::DisablePurchase);
            if let Err(e) = self.store.save_upgrade_flag(true) {
                cwarn(&format!("could not persist upgrade: {}", e));
            }
        }
    }

    fn restart(&mut self, out: &mut Vec<Command>) {
        clog("restart");
        self.clock.stop(&mut self.timers, out);
        self.spawner.clear(&mut self.timers, out);
        self.timers.cancel_all(out);
        self.session.reset();
        self.economy.rearm();
        out.push(Command::HideGameOver);
        out.push(Command::UpdateScore(0));
        out.push(Command::UpdateTime(format_time(0)));
        out.push(Command::RevealScreen(Screen::Start));
    }

    fn go_to_store(&mut self, out: &mut Vec<Command>) {
        if self.session.phase != Phase::GameOver {
            return self.ignored("go to store");
        }
        self.clock.stop(&mut self.timers, out);
        self.spawner.clear(&mut self.timers, out);
        self.session.phase = Phase::Store;
        out.push(Command::HideGameOver);
        out.push(Command::RevealScreen(Screen::Store));
    }

    /// Applies one catch per target, in order. Already-caught ids are skipped.
    fn catch(&mut self, ids: Vec<TargetId>, out: &mut Vec<Command>) {
        let mut completed = false;
        for id in ids {
            if !self.spawner.mark_caught(id, self.session.elapsed_seconds, &mut self.timers, out) {
                continue;
            }
            completed |= self.economy.add_score(&mut self.session, 1);
            out.push(Command::UpdateScore(self.session.score));
            self.spawner.on_caught(&mut self.timers, out);
        }
        if completed {
            self.end_round(out);
        }
    }

    fn end_round(&mut self, out: &mut Vec<Command>) {
        clog(&format!(
            "round complete: score {} in {}",
            self.session.score,
            format_time(self.session.elapsed_seconds)
        ));
        self.clock.stop(&mut self.timers, out);
        self.spawner.clear(&mut self.timers, out);
        self.timers.cancel_owner(TimerOwner::Round, out);
        self.session.phase = Phase::GameOver;
        out.push(Command::ShowGameOver);
    }

    fn run_task(&mut self, task: TimerTask, out: &mut Vec<Command>) {
        match task {
            TimerTask::ClockTick => self.clock.tick(&mut self.session, &mut self.timers, out),
            TimerTask::Spawn => {
                if self.session.phase == Phase::Playing {
                    self.spawner.spawn_one(self.area, self.dice.as_mut(), out);
                }
            }
            TimerTask::Remove(id) => {
                self.spawner.remove(id, out);
            }
            TimerTask::BeginRound => {
                if self.session.phase == Phase::Playing {
                    self.clock.start(&mut self.session, &mut self.timers, out);
                    self.spawner.spawn_one(self.area, self.dice.as_mut(), out);
                }
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn area(&self) -> PlayArea {
        self.area
    }

    pub fn catch_mode(&self) -> CatchMode {
        CatchMode::for_upgrade(self.session.has_upgrade)
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.spawner.targets()
    }

    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.spawner.get(id)
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.timers.pending()
    }
}
