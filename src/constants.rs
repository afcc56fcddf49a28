//! Compile-time defaults for every tunable in [`crate::config::GameConfig`].

/// Distance kept clear of every viewport edge when placing a new target.
pub const SPAWN_MARGIN: f64 = 100.0;
/// Delays after a catch at which replacement targets appear.
pub const RESPAWN_DELAYS_MS: [u32; 2] = [700, 1200];
/// How long a caught target lingers (caught animation) before removal.
pub const REMOVE_DELAY_MS: u32 = 1500;
/// Pause between pressing Continue and the first spawn, covering the screen slide.
pub const ROUND_START_DELAY_MS: u32 = 500;
pub const TICK_MS: u32 = 1000;

pub const UPGRADE_COST: u32 = 15;
pub const WIN_SCORE: u32 = 20;
pub const CATCH_RADIUS: f64 = 200.0;

/// Rendered target box; its center is what the area catch measures from.
pub const TARGET_WIDTH: f64 = 100.0;
pub const TARGET_HEIGHT: f64 = 100.0;

pub const DEFAULT_VIEWPORT: (f64, f64) = (800.0, 600.0);

// localStorage keys
pub const PROGRESS_KEY: &str = "insect_catch_progress";
pub const CONFIG_KEY: &str = "insect_catch_config";
