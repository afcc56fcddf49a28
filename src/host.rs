//! Browser side of the command loop: runs timers on `window.setTimeout` and
//! routes everything else into the [`Stage`] reducer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::functional::UseReducerDispatcher;

use crate::game::Game;
use crate::model::{Command, Stage, TimerId, UiEvent};
use crate::state::CatchMode;
use crate::util::cwarn;

#[derive(Default)]
pub struct TimerHost {
    handles: HashMap<TimerId, i32>,
}

impl TimerHost {
    pub fn schedule(&mut self, id: TimerId, delay_ms: u32, on_fire: impl FnOnce() + 'static) {
        let Some(window) = web_sys::window() else {
            cwarn("no window; timer dropped");
            return;
        };
        // Freed by wasm-bindgen after its single call.
        let cb = Closure::once_into_js(on_fire);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => {
                self.handles.insert(id, handle);
            }
            Err(e) => cwarn(&format!("setTimeout failed for {:?}: {:?}", id, e)),
        }
    }

    /// Forgets a handle whose callback has run.
    pub fn forget(&mut self, id: TimerId) {
        self.handles.remove(&id);
    }

    pub fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.remove(&id) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }

    pub fn cancel_all(&mut self) {
        let ids: Vec<TimerId> = self.handles.keys().copied().collect();
        for id in ids {
            self.cancel(id);
        }
    }
}

/// Central dispatcher: every UI event goes through [`Driver::send`].
#[derive(Clone)]
pub struct Driver {
    game: Rc<RefCell<Game>>,
    timers: Rc<RefCell<TimerHost>>,
    stage: UseReducerDispatcher<Stage>,
}

impl PartialEq for Driver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.game, &other.game)
    }
}

impl Driver {
    pub fn new(
        game: Rc<RefCell<Game>>,
        timers: Rc<RefCell<TimerHost>>,
        stage: UseReducerDispatcher<Stage>,
    ) -> Self {
        Self { game, timers, stage }
    }

    pub fn boot(&self) {
        let commands = self.game.borrow().boot();
        self.apply(commands);
    }

    pub fn send(&self, event: UiEvent) {
        if let UiEvent::TimerFired(id) = &event {
            self.timers.borrow_mut().forget(*id);
        }
        let commands = self.game.borrow_mut().handle(event);
        self.apply(commands);
    }

    fn apply(&self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::ScheduleTimer { id, delay_ms } => {
                    let driver = self.clone();
                    self.timers
                        .borrow_mut()
                        .schedule(id, delay_ms, move || driver.send(UiEvent::TimerFired(id)));
                }
                Command::CancelTimer(id) => self.timers.borrow_mut().cancel(id),
                other => self.stage.dispatch(other),
            }
        }
    }

    pub fn shutdown(&self) {
        self.timers.borrow_mut().cancel_all();
    }

    pub fn catch_mode(&self) -> CatchMode {
        self.game.borrow().catch_mode()
    }

    pub fn target_size(&self) -> (f64, f64) {
        let game = self.game.borrow();
        (game.config().target_width, game.config().target_height)
    }

    pub fn upgrade_cost(&self) -> u32 {
        self.game.borrow().config().upgrade_cost
    }
}
