use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub time_text: String,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {<div style="position:absolute; top:12px; left:12px; font-size:20px; font-weight:600; font-variant-numeric:tabular-nums; pointer-events:none;">
        { format!("Time: {}", props.time_text) }
    </div>}
}
