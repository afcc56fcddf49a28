//! Catch The Insect: a click-to-catch browser game.
//!
//! The game loop lives in [`game::Game`] and the [`state`] subsystems and has
//! no browser dependency at run time. [`components`] and [`host`] are the yew
//! shell that renders the game's commands and feeds it UI events and timer
//! callbacks.

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod host;
pub mod model;
pub mod state;
pub mod storage;
pub mod util;
