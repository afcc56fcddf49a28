pub mod catcher;
pub mod clock;
pub mod economy;
pub mod spawner;
pub mod timers;

pub use catcher::{CatchMode, CatchResolver};
pub use clock::Clock;
pub use economy::{Economy, Purchase};
pub use spawner::{Dice, JsDice, SequenceDice, Spawner};
pub use timers::{PendingTimer, Scheduler, TimerOwner, TimerTask};
