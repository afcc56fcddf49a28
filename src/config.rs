//! Runtime game configuration.
//!
//! [`GameConfig`] mirrors every default in [`crate::constants`]. A partial
//! JSON document (for instance stored under [`crate::constants::CONFIG_KEY`]
//! in `localStorage`) overrides only the keys it names; everything else falls
//! back to the compile-time default.

use crate::constants::*;
use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Spawning ─────────────────────────────────────────────────────────────
    pub spawn_margin: f64,
    pub respawn_delays_ms: Vec<u32>,
    pub remove_delay_ms: u32,
    pub round_start_delay_ms: u32,
    pub tick_ms: u32,

    // ── Economy ──────────────────────────────────────────────────────────────
    pub upgrade_cost: u32,
    pub win_score: u32,

    // ── Catching ─────────────────────────────────────────────────────────────
    pub catch_radius: f64,
    pub target_width: f64,
    pub target_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_margin: SPAWN_MARGIN,
            respawn_delays_ms: RESPAWN_DELAYS_MS.to_vec(),
            remove_delay_ms: REMOVE_DELAY_MS,
            round_start_delay_ms: ROUND_START_DELAY_MS,
            tick_ms: TICK_MS,
            upgrade_cost: UPGRADE_COST,
            win_score: WIN_SCORE,
            catch_radius: CATCH_RADIUS,
            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Parses a (possibly partial) JSON override and validates the result.
    pub fn from_json(raw: &str) -> GameResult<Self> {
        let cfg: GameConfig = serde_json::from_str(raw).map_err(|e| GameError::Decode {
            what: "game config",
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> GameResult<()> {
        if !(self.spawn_margin >= 0.0) {
            return Err(GameError::InvalidConfig {
                field: "spawn_margin",
                reason: format!("{} must be >= 0", self.spawn_margin),
            });
        }
        if !(self.catch_radius > 0.0) {
            return Err(GameError::InvalidConfig {
                field: "catch_radius",
                reason: format!("{} must be > 0", self.catch_radius),
            });
        }
        if !(self.target_width >= 0.0 && self.target_height >= 0.0) {
            return Err(GameError::InvalidConfig {
                field: "target_size",
                reason: format!("{}x{} must not be negative", self.target_width, self.target_height),
            });
        }
        if self.win_score == 0 {
            return Err(GameError::InvalidConfig {
                field: "win_score",
                reason: "a round needs at least one catch".into(),
            });
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidConfig {
                field: "tick_ms",
                reason: "clock interval must be non-zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = GameConfig::from_json(r#"{ "win_score": 5, "catch_radius": 80.0 }"#).unwrap();
        assert_eq!(cfg.win_score, 5);
        assert_eq!(cfg.catch_radius, 80.0);
        assert_eq!(cfg.upgrade_cost, UPGRADE_COST);
        assert_eq!(cfg.respawn_delays_ms, vec![700, 1200]);
    }

    #[test]
    fn rejects_zero_radius() {
        let err = GameConfig::from_json(r#"{ "catch_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { field: "catch_radius", .. }));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = GameConfig::from_json("{ win_score: ").unwrap_err();
        assert!(matches!(err, GameError::Decode { what: "game config", .. }));
    }

    #[test]
    fn defaults_validate() {
        assert!(GameConfig::default().validate().is_ok());
    }
}
