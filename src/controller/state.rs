use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    form::{FormMode, PostForm},
    model::{Alert, Post},
};

/// In-memory state of the posts screen. Nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenState {
    pub posts: Vec<Post>,
    pub form: PostForm,
    pub editing: Option<i64>,
    pub loading: bool,
    pub author_name: Option<String>,
    pub alerts: Vec<Alert>,
}

impl ScreenState {
    pub fn mode(&self) -> FormMode {
        FormMode::from_editing(self.editing)
    }

    pub fn find_post(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}

pub(crate) fn lock(state: &Mutex<ScreenState>) -> MutexGuard<'_, ScreenState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets the loading flag for as long as it is alive.
pub(crate) struct LoadingGuard<'s> {
    state: &'s Mutex<ScreenState>,
}

impl<'s> LoadingGuard<'s> {
    pub(crate) fn acquire(state: &'s Mutex<ScreenState>) -> Self {
        lock(state).loading = true;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).loading = false;
    }
}
