//! Core data models for Insect Catch: the session, targets, and the
//! event/command vocabulary exchanged with the presentation layer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// Opaque key of the insect the player picked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteRef(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Viewport the targets are spawned into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl Default for PlayArea {
    fn default() -> Self {
        let (width, height) = crate::constants::DEFAULT_VIEWPORT;
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Start,
    Selecting,
    Store,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Start,
    Select,
    Store,
    Play,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub elapsed_seconds: u32,
    pub score: u32,
    /// Survives restarts; restored from storage at startup.
    pub has_upgrade: bool,
    pub selected_sprite: Option<SpriteRef>,
    pub phase: Phase,
}

impl Session {
    pub fn with_upgrade(has_upgrade: bool) -> Self {
        Self {
            has_upgrade,
            ..Default::default()
        }
    }

    /// Back to the start screen with a zero clock and score; keeps the upgrade.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.score = 0;
        self.phase = Phase::Start;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    /// Top-left corner in viewport pixels.
    pub position: Point,
    /// Display rotation in degrees, presentation only.
    pub rotation: f64,
    /// Elapsed second at which the target was caught.
    pub caught_at: Option<u32>,
}

impl Target {
    pub fn is_caught(&self) -> bool {
        self.caught_at.is_some()
    }

    pub fn center(&self, width: f64, height: f64) -> Point {
        Point::new(self.position.x + width / 2.0, self.position.y + height / 2.0)
    }
}

/// Events sent by the presentation layer (and the timer host) into the game.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    Begin,
    SpriteChosen(SpriteRef),
    Continue,
    Purchase,
    Restart,
    GoToStore,
    CanvasClicked { x: f64, y: f64 },
    TargetClicked(TargetId),
    TimerFired(TimerId),
    ViewportResized { width: f64, height: f64 },
}

/// Commands the game issues to its collaborators.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    RevealScreen(Screen),
    UseSprite(SpriteRef),
    ShowTarget { id: TargetId, x: f64, y: f64, rotation: f64 },
    RemoveTarget(TargetId),
    MarkCaught(TargetId),
    UpdateScore(u32),
    UpdateTime(String),
    ShowGameOver,
    HideGameOver,
    ShowUpgradeStatus(String),
    DisablePurchase,
    ScheduleTimer { id: TimerId, delay_ms: u32 },
    CancelTimer(TimerId),
}

// ---------------- Presentation state -----------------

#[derive(Clone, Debug, PartialEq)]
pub struct TargetView {
    pub id: TargetId,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub caught: bool,
}

/// What the components render. Built purely from [`Command`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub screen: Screen,
    pub sprite: Option<SpriteRef>,
    pub targets: Vec<TargetView>,
    pub score: u32,
    pub time_text: String,
    pub game_over: bool,
    pub upgrade_status: String,
    pub purchase_disabled: bool,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
            sprite: None,
            targets: Vec::new(),
            score: 0,
            time_text: crate::util::format_time(0),
            game_over: false,
            upgrade_status: String::new(),
            purchase_disabled: false,
        }
    }
}

impl Reducible for Stage {
    type Action = Command;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use Command::*;
        let mut new = (*self).clone();
        match action {
            RevealScreen(screen) => { new.screen = screen; }
            UseSprite(sprite) => { new.sprite = Some(sprite); }
            ShowTarget { id, x, y, rotation } => {
                new.targets.push(TargetView { id, x, y, rotation, caught: false });
            }
            RemoveTarget(id) => { new.targets.retain(|t| t.id != id); }
            MarkCaught(id) => {
                if let Some(t) = new.targets.iter_mut().find(|t| t.id == id) { t.caught = true; }
            }
            UpdateScore(score) => { new.score = score; }
            UpdateTime(text) => { new.time_text = text; }
            ShowGameOver => { new.game_over = true; }
            HideGameOver => { new.game_over = false; }
            ShowUpgradeStatus(text) => { new.upgrade_status = text; }
            DisablePurchase => { new.purchase_disabled = true; }
            // Timer commands are executed by the host, never rendered.
            ScheduleTimer { .. } | CancelTimer(_) => return self,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(stage: Stage, cmds: Vec<Command>) -> Stage {
        let mut rc = Rc::new(stage);
        for c in cmds {
            rc = rc.reduce(c);
        }
        (*rc).clone()
    }

    #[test]
    fn stage_tracks_target_lifecycle() {
        let id = TargetId(3);
        let stage = apply(
            Stage::default(),
            vec![Command::ShowTarget { id, x: 120.0, y: 140.0, rotation: 45.0 }, Command::MarkCaught(id)],
        );
        assert_eq!(stage.targets.len(), 1);
        assert!(stage.targets[0].caught);
        let stage = apply(stage, vec![Command::RemoveTarget(id)]);
        assert!(stage.targets.is_empty());
    }

    #[test]
    fn timer_commands_do_not_touch_the_stage() {
        let before = Rc::new(Stage::default());
        let after = before.clone().reduce(Command::ScheduleTimer { id: TimerId(1), delay_ms: 700 });
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn session_reset_keeps_upgrade() {
        let mut s = Session::with_upgrade(true);
        s.score = 12;
        s.elapsed_seconds = 40;
        s.phase = Phase::GameOver;
        s.reset();
        assert_eq!((s.score, s.elapsed_seconds, s.phase), (0, 0, Phase::Start));
        assert!(s.has_upgrade);
    }

    #[test]
    fn target_center_offsets_by_half_size() {
        let t = Target { id: TargetId(0), position: Point::new(100.0, 200.0), rotation: 0.0, caught_at: None };
        assert_eq!(t.center(100.0, 60.0), Point::new(150.0, 230.0));
    }
}
