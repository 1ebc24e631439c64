mod app_events;
mod app_render;
mod app_state;
mod mouse_hover;

pub use app_state::{App, DEMO_OVERLAY, DEMO_TARGET, demo_options};
pub use mouse_hover::handle_mouse;
