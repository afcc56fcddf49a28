use super::game_over_overlay::GameOverOverlay;
use super::sprites;
use super::stats_panel::StatsPanel;
use super::time_display::TimeDisplay;
use crate::host::Driver;
use crate::model::{Stage, TargetView, UiEvent};
use crate::state::CatchMode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayViewProps {
    pub stage: UseReducerHandle<Stage>,
    pub driver: Driver,
    pub restart: Callback<()>,
    pub to_store: Callback<()>,
}

#[function_component(PlayView)]
pub fn play_view(props: &PlayViewProps) -> Html {
    let stage = (*props.stage).clone();
    let swatter = props.driver.catch_mode() == CatchMode::Area;
    let (w, h) = props.driver.target_size();
    let glyph = sprites::lookup(stage.sprite.as_ref()).glyph;

    // With the swatter every click on the field swats; targets let it bubble here.
    let field_click = {
        let driver = props.driver.clone();
        Callback::from(move |e: MouseEvent| {
            driver.send(UiEvent::CanvasClicked {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            })
        })
    };

    let render_target = |t: &TargetView| {
        let id = t.id;
        let onclick = {
            let driver = props.driver.clone();
            Callback::from(move |e: MouseEvent| {
                if driver.catch_mode() == CatchMode::Direct {
                    e.stop_propagation();
                    driver.send(UiEvent::TargetClicked(id));
                }
            })
        };
        let fade = if t.caught {
            "opacity:0; transform:scale(0.2); transition:opacity 1.2s, transform 0.3s;"
        } else {
            ""
        };
        html! {
            <div key={id.0} {onclick}
                style={format!("position:absolute; left:{:.1}px; top:{:.1}px; width:{}px; height:{}px; display:flex; align-items:center; justify-content:center; cursor:pointer; {}", t.x, t.y, w, h, fade)}>
                <span style={format!("font-size:{:.0}px; transform:rotate({:.1}deg); user-select:none;", h * 0.8, t.rotation)}>{ glyph }</span>
            </div>
        }
    };

    let cursor = if swatter { "crosshair" } else { "default" };
    html! {<div onclick={field_click} style={format!("position:fixed; inset:0; overflow:hidden; cursor:{};", cursor)}>
        <TimeDisplay time_text={stage.time_text.clone()} />
        <StatsPanel score={stage.score} swatter={swatter} />
        { for stage.targets.iter().map(render_target) }
        <GameOverOverlay show={stage.game_over} score={stage.score} time_text={stage.time_text.clone()} restart={props.restart.clone()} to_store={props.to_store.clone()} />
    </div>}
}
