use std::sync::Mutex;
use tracing::{debug, error, info, warn};
use validator::Validate as _;

use crate::{
    client::{PostsApi as _, Reply},
    context::Context,
    identity::IdentityProvider as _,
    model::{Alert, Post, PostBody},
};

use super::state::{lock, LoadingGuard, ScreenState};

/// What a submission did. The outcome itself is never shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Title or content was empty; nothing was sent.
    Invalid,
    /// No author id could be resolved; nothing was sent.
    NoAuthor,
    /// An update was submitted without a post being edited; nothing was sent.
    NotEditing,
    /// The request went out. `status` is `None` when no decodable response came back.
    Sent { status: Option<u16> },
}

/// Drives the posts screen: fetch on mount, form submission and a full refetch after every
/// mutation. Every handler takes `&self`, so handlers may overlap; the state lock is never held
/// across a request.
pub struct ScreenController<C: Context> {
    context: C,
    state: Mutex<ScreenState>,
}

impl<C: Context> ScreenController<C> {
    pub fn new(context: C) -> Self {
        Self {
            context,
            state: Mutex::new(ScreenState::default()),
        }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// A snapshot of the current screen state.
    pub fn state(&self) -> ScreenState {
        lock(&self.state).clone()
    }

    /// Drains queued alerts, oldest first.
    pub fn take_alerts(&self) -> Vec<Alert> {
        std::mem::take(&mut lock(&self.state).alerts)
    }

    fn update<R>(&self, f: impl FnOnce(&mut ScreenState) -> R) -> R {
        f(&mut lock(&self.state))
    }

    pub async fn mount(&self) {
        match self.context.identity().author_name().await {
            Ok(author_name) => self.update(|state| state.author_name = author_name),
            Err(e) => error!("Could not read the author name: {e}"),
        }

        self.load_posts().await;
    }

    pub async fn load_posts(&self) {
        let _loading = LoadingGuard::acquire(&self.state);

        match self.context.api().list_posts().await {
            Ok(posts) => {
                debug!("loaded {} posts", posts.len());
                self.update(|state| state.posts = posts);
            }
            Err(e) => {
                error!("Could not load posts: {e}");
                self.update(|state| {
                    state
                        .alerts
                        .push(Alert::error("Error", "Could not load posts"))
                });
            }
        }
    }

    pub async fn resolve_author_id(&self) -> Option<i64> {
        match self.context.identity().author_id().await {
            Ok(author_id) => author_id.filter(|id| *id != 0),
            Err(e) => {
                warn!("Could not read the author id: {e}");
                None
            }
        }
    }

    async fn auth_token(&self) -> Option<String> {
        self.context
            .identity()
            .auth_token()
            .await
            .unwrap_or_else(|e| {
                warn!("Could not read the auth token: {e}");
                None
            })
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.update(|state| state.form.title = title);
    }

    pub fn set_content(&self, content: impl Into<String>) {
        let content = content.into();
        self.update(|state| state.form.content = content);
    }

    /// The row "Edit" control: starts editing `post`, replacing whatever the form held.
    pub fn edit(&self, post: &Post) {
        self.update(|state| {
            state.editing = Some(post.id);
            state.form.title = post.title.clone();
            state.form.content = post.content.clone();
        });
    }

    /// Starts editing a post from the current list. Returns false if it isn't listed.
    pub fn edit_listed(&self, id: i64) -> bool {
        let Some(post) = self.update(|state| state.find_post(id).cloned()) else {
            return false;
        };

        self.edit(&post);
        true
    }

    /// The form's submit button.
    pub async fn submit(&self) -> Submission {
        if self.update(|state| state.editing.is_some()) {
            self.submit_update().await
        } else {
            self.submit_create().await
        }
    }

    /// Validates the form and resolves the identity a mutation needs.
    async fn prepare(&self) -> Result<(PostBody, Option<String>), Submission> {
        let form = self.update(|state| state.form.clone());
        if let Err(e) = form.validate() {
            info!("Title and content are required: {e}");
            return Err(Submission::Invalid);
        }

        let Some(author_id) = self.resolve_author_id().await else {
            info!("Could not find an author id for this session");
            return Err(Submission::NoAuthor);
        };

        Ok((form.into_body(author_id), self.auth_token().await))
    }

    pub async fn submit_create(&self) -> Submission {
        let (body, token) = match self.prepare().await {
            Ok(prepared) => prepared,
            Err(outcome) => return outcome,
        };

        let result = self
            .context
            .api()
            .create_post(token.as_deref(), &body)
            .await;
        let status = log_reply("create post", result);

        self.update(|state| state.form.clear());
        self.load_posts().await;

        Submission::Sent { status }
    }

    pub async fn submit_update(&self) -> Submission {
        let Some(id) = self.update(|state| state.editing) else {
            info!("No post is being edited");
            return Submission::NotEditing;
        };

        let (body, token) = match self.prepare().await {
            Ok(prepared) => prepared,
            Err(outcome) => return outcome,
        };

        let result = self
            .context
            .api()
            .update_post(token.as_deref(), id, &body)
            .await;
        let status = log_reply("update post", result);

        self.update(|state| {
            state.editing = None;
            state.form.clear();
        });
        self.load_posts().await;

        Submission::Sent { status }
    }

    pub async fn submit_delete(&self, post_id: i64) -> Submission {
        let token = self.auth_token().await;

        let status = match self
            .context
            .api()
            .delete_post(token.as_deref(), post_id)
            .await
        {
            Ok(reply) => {
                let message = reply.message().unwrap_or_default().to_string();
                debug!("delete post {post_id} responded with {}", reply.status);
                self.update(|state| state.alerts.push(Alert::success("Success", message)));
                Some(reply.status)
            }
            Err(e) => {
                error!("Could not delete post {post_id}: {e}");
                self.update(|state| {
                    state
                        .alerts
                        .push(Alert::error("Error", "Could not delete post"))
                });
                None
            }
        };

        self.load_posts().await;

        Submission::Sent { status }
    }
}

fn log_reply(action: &str, result: Result<Reply, crate::client::Error>) -> Option<u16> {
    match result {
        Ok(reply) if reply.is_success() => {
            info!("{action} succeeded");
            Some(reply.status)
        }
        Ok(reply) => {
            warn!("{action} responded with status {}: {}", reply.status, reply.body);
            Some(reply.status)
        }
        Err(e) => {
            error!("Could not {action}: {e}");
            None
        }
    }
}
