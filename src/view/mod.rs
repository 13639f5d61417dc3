mod layout;
mod post;
mod post_form;

pub use layout::*;
pub use post::*;
pub use post_form::*;

use crate::{controller::ScreenState, model::Alert};
use rinja::Template as _;

pub const VERSION_STRING: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => env!("CARGO_PKG_VERSION"),
};

/// Renders the whole screen: queued alerts, then either the loading indicator or the post list
/// followed by the editor form.
pub fn render_screen(state: &ScreenState, alerts: &[Alert]) -> rinja::Result<String> {
    let list = PostList::new(&state.posts, state.author_name.as_deref()).render()?;
    let form = PostFormView {
        form: &state.form,
        mode: state.mode(),
    }
    .render()?;

    Layout {
        messages: alerts.to_vec(),
        content: format!("{list}\n{form}"),
        version_string: VERSION_STRING,
        loading: state.loading,
    }
    .render()
}
