use std::time::Duration;

use crate::{
    client::{HttpPostsClient, PostsApi},
    config::Config,
    identity::{FileStore, IdentityProvider, StoredIdentity},
    PostdeckError,
};

/// Everything the screen controller reaches outside of its own state.
pub trait Context: Send + Sync + 'static {
    type Api: PostsApi;
    type Identity: IdentityProvider;

    fn api(&self) -> &Self::Api;
    fn identity(&self) -> &Self::Identity;
}

pub struct PostdeckContext<A = HttpPostsClient, I = StoredIdentity<FileStore>> {
    pub api: A,
    pub identity: I,
}

impl<A, I> PostdeckContext<A, I> {
    pub fn new(api: A, identity: I) -> Self {
        Self { api, identity }
    }
}

impl<A, I> Context for PostdeckContext<A, I>
where
    A: PostsApi + 'static,
    I: IdentityProvider + 'static,
{
    type Api = A;
    type Identity = I;

    fn api(&self) -> &A {
        &self.api
    }

    fn identity(&self) -> &I {
        &self.identity
    }
}

pub fn create_context(config: &Config) -> Result<PostdeckContext, PostdeckError> {
    let api = HttpPostsClient::with_timeout(
        &config.api_url,
        config.request_timeout_secs.map(Duration::from_secs),
    )?;

    let store = match &config.identity_path {
        Some(path) => FileStore::new(path),
        None => FileStore::default_location()?,
    };

    Ok(PostdeckContext::new(api, StoredIdentity::new(store)))
}
