// Helpers for driving a `Game` without a browser: timers are fired by hand.
#![allow(dead_code)]

use insect_catch::config::GameConfig;
use insect_catch::game::Game;
use insect_catch::model::{Command, SpriteRef, TargetId, UiEvent};
use insect_catch::state::{SequenceDice, TimerTask};
use insect_catch::storage::MemoryStore;

pub fn new_game(config: GameConfig, store: &MemoryStore, rolls: Vec<f64>) -> Game {
    Game::new(config, Box::new(store.clone()), Box::new(SequenceDice::new(rolls)))
}

pub fn default_game() -> Game {
    new_game(GameConfig::default(), &MemoryStore::default(), vec![0.5, 0.25, 0.75])
}

/// Fires the oldest pending timer whose task matches. Panics if there is none.
pub fn fire(game: &mut Game, matches: impl Fn(TimerTask) -> bool) -> Vec<Command> {
    let id = game
        .pending_timers()
        .into_iter()
        .find(|p| matches(p.task))
        .map(|p| p.id)
        .expect("no matching timer pending");
    game.handle(UiEvent::TimerFired(id))
}

/// Fires every spawn currently queued.
pub fn fire_spawns(game: &mut Game) -> Vec<Command> {
    let ids: Vec<_> = game
        .pending_timers()
        .into_iter()
        .filter(|p| p.task == TimerTask::Spawn)
        .map(|p| p.id)
        .collect();
    ids.into_iter().flat_map(|id| game.handle(UiEvent::TimerFired(id))).collect()
}

pub fn to_store(game: &mut Game) {
    game.handle(UiEvent::Begin);
    game.handle(UiEvent::SpriteChosen(SpriteRef("fly".into())));
}

pub fn enter_play(game: &mut Game) -> Vec<Command> {
    to_store(game);
    game.handle(UiEvent::Continue);
    fire(game, |t| t == TimerTask::BeginRound)
}

pub fn uncaught(game: &Game) -> Vec<TargetId> {
    game.targets().filter(|t| !t.is_caught()).map(|t| t.id).collect()
}

/// Clicks targets one at a time (spawning replacements as needed) until the
/// score reaches `score` or the round ends. Returns every command issued.
pub fn catch_directly_until(game: &mut Game, score: u32) -> Vec<Command> {
    let mut all = Vec::new();
    for _ in 0..200 {
        if game.session().score >= score || game.session().phase != insect_catch::model::Phase::Playing {
            break;
        }
        if uncaught(game).is_empty() {
            all.extend(fire_spawns(game));
        }
        let id = uncaught(game)[0];
        all.extend(game.handle(UiEvent::TargetClicked(id)));
    }
    all
}

pub fn count(cmds: &[Command], wanted: &Command) -> usize {
    cmds.iter().filter(|c| *c == wanted).count()
}
