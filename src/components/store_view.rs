use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StoreViewProps {
    pub score: u32,
    pub cost: u32,
    pub status: String,
    pub purchase_disabled: bool,
    pub purchase: Callback<()>,
    pub to_game: Callback<()>,
}

#[function_component(StoreView)]
pub fn store_view(props: &StoreViewProps) -> Html {
    let buy_cb = {
        let cb = props.purchase.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let continue_cb = {
        let cb = props.to_game.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let affordable = props.score >= props.cost;
    let cost_color = if props.purchase_disabled {
        "#8b949e"
    } else if affordable {
        "#2ea043"
    } else {
        "#f85149"
    };

    html! {
        <div style="position:absolute; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:16px;">
            <h2 style="margin:0;">{"Store"}</h2>
            <div style="font-size:14px; opacity:0.85;">{ format!("Score: {}", props.score) }</div>
            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:14px 18px; min-width:280px; display:flex; flex-direction:column; gap:8px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <span style="font-weight:600;">{"🏸 Swatter"}</span>
                    <span style={format!("font-variant-numeric:tabular-nums; color:{};", cost_color)}>
                        { format!("{} pts", props.cost) }
                    </span>
                </div>
                <div style="font-size:12px; opacity:0.75;">{"Catch every insect near your click at once. Permanent."}</div>
                <button onclick={buy_cb} disabled={props.purchase_disabled}>{"Buy"}</button>
                if !props.status.is_empty() {
                    <div style="font-size:12px; background:#1c2128; border:1px solid #30363d; padding:4px 6px; border-radius:6px;">{ props.status.clone() }</div>
                }
            </div>
            <button onclick={continue_cb}>{"Continue to Game"}</button>
        </div>
    }
}
