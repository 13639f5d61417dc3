mod alert;
mod post;
mod session;

pub use alert::*;
pub use post::*;
pub use session::*;
