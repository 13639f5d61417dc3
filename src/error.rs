use crate::{client, config, identity};

#[derive(Debug, thiserror::Error)]
pub enum PostdeckError {
    #[error(transparent)]
    Client(#[from] client::Error),

    #[error(transparent)]
    Identity(#[from] identity::Error),

    #[error(transparent)]
    Config(#[from] config::Error),

    #[error(transparent)]
    View(#[from] rinja::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Login required: no session token is stored. Run `postdeck login` first.")]
    Unauthorized,
}
