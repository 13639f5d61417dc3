mod post;
mod state;

pub use post::*;
pub use state::ScreenState;
