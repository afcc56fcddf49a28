// Direct vs. swatter catching, driven through the game with scripted spawn positions.

mod common;

use common::*;
use insect_catch::config::GameConfig;
use insect_catch::model::{Command, UiEvent};
use insect_catch::storage::MemoryStore;

// With a 1000x1000 viewport and the 100px margin, a roll r places the
// top-left corner at 100 + 800r; targets are 100x100 so the center is +50.
const ROLLS: [f64; 15] = [
    0.0, 0.0, 0.0, // T0 center (150, 150)
    0.875, 0.875, 0.0, // T1 center (850, 850)
    0.5, 0.4375, 0.0, // T2 center (550, 500)
    0.4375, 0.625, 0.0, // T3 center (500, 650)
    0.75, 0.4375, 0.0, // T4 center (750, 500)
];

fn swatter_game(config: GameConfig) -> insect_catch::game::Game {
    let mut g = new_game(config, &MemoryStore::with_flag(true), ROLLS.to_vec());
    g.handle(UiEvent::ViewportResized { width: 1000.0, height: 1000.0 });
    enter_play(&mut g);
    g
}

#[test]
fn swatter_catches_only_targets_inside_radius() {
    let mut g = swatter_game(GameConfig::default());

    g.handle(UiEvent::CanvasClicked { x: 150.0, y: 150.0 });
    assert_eq!(g.session().score, 1);
    fire_spawns(&mut g);

    // T2 is ~461px away from T1, so only T1 goes.
    g.handle(UiEvent::CanvasClicked { x: 850.0, y: 850.0 });
    assert_eq!(g.session().score, 2);
    fire_spawns(&mut g);

    let live = uncaught(&g);
    assert_eq!(live.len(), 3);
    let (t2, t3, t4) = (live[0], live[1], live[2]);

    // Distances from (500, 500): 50, 150, 250.
    let out = g.handle(UiEvent::CanvasClicked { x: 500.0, y: 500.0 });
    assert_eq!(g.session().score, 4);
    assert!(out.contains(&Command::MarkCaught(t2)));
    assert!(out.contains(&Command::MarkCaught(t3)));
    assert!(!out.contains(&Command::MarkCaught(t4)));
    assert_eq!(uncaught(&g), vec![t4]);
}

#[test]
fn swatter_ignores_direct_target_clicks() {
    let mut g = swatter_game(GameConfig::default());
    let id = uncaught(&g)[0];
    assert!(g.handle(UiEvent::TargetClicked(id)).is_empty());
    assert_eq!(g.session().score, 0);
}

#[test]
fn swatter_miss_catches_nothing() {
    let mut g = swatter_game(GameConfig::default());
    assert!(g.handle(UiEvent::CanvasClicked { x: 900.0, y: 900.0 }).is_empty());
    assert_eq!(g.session().score, 0);
}

#[test]
fn without_swatter_field_clicks_do_nothing() {
    let mut g = new_game(GameConfig::default(), &MemoryStore::default(), ROLLS.to_vec());
    g.handle(UiEvent::ViewportResized { width: 1000.0, height: 1000.0 });
    enter_play(&mut g);
    assert!(g.handle(UiEvent::CanvasClicked { x: 150.0, y: 150.0 }).is_empty());
    let id = uncaught(&g)[0];
    let out = g.handle(UiEvent::TargetClicked(id));
    assert_eq!(count(&out, &Command::MarkCaught(id)), 1);
    assert_eq!(g.session().score, 1);
}

#[test]
fn one_swat_across_the_threshold_signals_once() {
    let mut g = swatter_game(GameConfig { win_score: 3, ..Default::default() });
    g.handle(UiEvent::CanvasClicked { x: 150.0, y: 150.0 });
    fire_spawns(&mut g);
    g.handle(UiEvent::CanvasClicked { x: 850.0, y: 850.0 });
    fire_spawns(&mut g);

    // Score 2; the swat at (500, 500) catches two more and crosses 3.
    let out = g.handle(UiEvent::CanvasClicked { x: 500.0, y: 500.0 });
    assert_eq!(g.session().score, 4);
    assert_eq!(count(&out, &Command::ShowGameOver), 1);
    assert_eq!(g.targets().count(), 0);
    assert!(g.pending_timers().is_empty());
}
