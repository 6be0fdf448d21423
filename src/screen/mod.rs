pub mod action;
pub mod state;

pub use action::{update, ScreenAction};
pub use state::ScreenState;
