mod app;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod controller;
mod error;
pub mod form;
pub mod identity;
pub mod input;
pub mod model;
pub mod view;

pub use {
    app::App,
    client::{HttpPostsClient, PostsApi, Reply},
    context::{Context, PostdeckContext},
    controller::{ScreenController, ScreenState, Submission},
    error::PostdeckError,
    identity::{IdentityProvider, KeyValueStore, StoredIdentity},
};
