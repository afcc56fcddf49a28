use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub time_text: String,
    pub restart: Callback<()>,
    pub to_store: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    // Keep overlay clicks away from the play field's swat handler.
    let restart_btn = {
        let cb = props.restart.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let store_btn = {
        let cb = props.to_store.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #2ea043; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px; z-index:20;">
            <h2 style="margin:0 0 12px 0; color:#2ea043;">{"You caught them all!"}</h2>
            <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
            <p style="margin:4px 0;">{ format!("Time: {}", props.time_text) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Restart"}</button>
                <button onclick={store_btn}>{"Go to Store"}</button>
            </div>
        </div>
    }
}
