use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartScreenProps {
    pub on_begin: Callback<()>,
}

#[function_component(StartScreen)]
pub fn start_screen(props: &StartScreenProps) -> Html {
    let begin_cb = {
        let cb = props.on_begin.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"Catch The Insect"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Pick a bug, then catch as many as you can."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Click an insect to catch it. Two more show up for every catch."}</li>
                <li>{"Reach 20 points to finish the round."}</li>
                <li>{"Spend 15 points in the store on the Swatter: one click catches everything nearby."}</li>
                <li>{"The Swatter stays yours across restarts."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={begin_cb}>{"Play Game"}</button>
            </div>
        </div>
    }
}
