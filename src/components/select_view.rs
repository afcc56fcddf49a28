use super::sprites::SPRITES;
use crate::model::SpriteRef;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SelectViewProps {
    pub on_choose: Callback<SpriteRef>,
}

#[function_component(SelectView)]
pub fn select_view(props: &SelectViewProps) -> Html {
    let card_style = "display:flex; flex-direction:column; align-items:center; gap:6px; width:120px; padding:14px 10px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; cursor:pointer;";
    html! {
        <div style="position:absolute; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px;">
            <h2 style="margin:0;">{"What is your favorite insect?"}</h2>
            <div style="display:flex; gap:14px; flex-wrap:wrap; justify-content:center;">
                { for SPRITES.iter().map(|def| {
                    let cb = props.on_choose.clone();
                    let sprite = def.sprite_ref();
                    let onclick = Callback::from(move |_| cb.emit(sprite.clone()));
                    html! {
                        <button {onclick} style={card_style}>
                            <span style="font-size:56px;">{ def.glyph }</span>
                            <span style="font-weight:600;">{ def.name }</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
