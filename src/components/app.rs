use super::{
    play_view::PlayView, select_view::SelectView, start_screen::StartScreen, store_view::StoreView,
};
use crate::config::GameConfig;
use crate::game::Game;
use crate::host::{Driver, TimerHost};
use crate::model::{Screen, SpriteRef, Stage, UiEvent};
use crate::state::JsDice;
use crate::storage::{LocalStorageStore, load_config_override};
use crate::util::{clog, cwarn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

fn viewport() -> Option<(f64, f64)> {
    let win = web_sys::window()?;
    let w = win.inner_width().ok()?.as_f64()?;
    let h = win.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

fn initial_config() -> GameConfig {
    match load_config_override() {
        Ok(Some(cfg)) => {
            clog("using stored config override");
            cfg
        }
        Ok(None) => GameConfig::default(),
        Err(e) => {
            cwarn(&format!("ignoring config override: {}", e));
            GameConfig::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let stage = use_reducer(Stage::default);
    let game = use_mut_ref(|| {
        Game::new(
            initial_config(),
            Box::new(LocalStorageStore::default()),
            Box::new(JsDice),
        )
    });
    let timers = use_mut_ref(TimerHost::default);
    let driver = Driver::new(game.clone(), timers.clone(), stage.dispatcher());

    // Mount: initial display, viewport size, resize tracking
    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            driver.boot();
            if let Some((width, height)) = viewport() {
                driver.send(UiEvent::ViewportResized { width, height });
            }
            let window = web_sys::window();
            let resize_cb = {
                let driver = driver.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if let Some((width, height)) = viewport() {
                        driver.send(UiEvent::ViewportResized { width, height });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(resize_cb);
                driver.shutdown();
            }
        });
    }

    let send = |event: UiEvent| {
        let driver = driver.clone();
        Callback::from(move |()| driver.send(event.clone()))
    };
    let choose = {
        let driver = driver.clone();
        Callback::from(move |sprite: SpriteRef| driver.send(UiEvent::SpriteChosen(sprite)))
    };

    let content = match stage.screen {
        Screen::Start => html! { <StartScreen on_begin={send(UiEvent::Begin)} /> },
        Screen::Select => html! { <SelectView on_choose={choose} /> },
        Screen::Store => html! { <StoreView
            score={stage.score}
            cost={driver.upgrade_cost()}
            status={stage.upgrade_status.clone()}
            purchase_disabled={stage.purchase_disabled}
            purchase={send(UiEvent::Purchase)}
            to_game={send(UiEvent::Continue)}
        /> },
        Screen::Play => html! { <PlayView
            stage={stage.clone()}
            driver={driver.clone()}
            restart={send(UiEvent::Restart)}
            to_store={send(UiEvent::GoToStore)}
        /> },
    };

    html! { <div id="root" style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#e6edf3; font-family:sans-serif;">{ content }</div> }
}
