use insect_catch::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
