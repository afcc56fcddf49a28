pub mod app;
pub mod game_over_overlay;
pub mod play_view;
pub mod select_view;
pub mod sprites;
pub mod start_screen;
pub mod stats_panel;
pub mod store_view;
pub mod time_display;

pub use app::App;
