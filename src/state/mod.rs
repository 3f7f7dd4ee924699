//! Labeling state and the inputs that act on it.

mod app_state;
mod click;

pub use app_state::AppState;
pub use click::MapClick;
