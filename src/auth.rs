use tracing::debug;

use crate::{identity::IdentityProvider, PostdeckError};

/// Only lets the posts screen through when a session token is stored. Login itself happens
/// elsewhere; this never talks to the API.
pub struct AuthGuard;

impl AuthGuard {
    pub async fn check<I: IdentityProvider + ?Sized>(identity: &I) -> Result<(), PostdeckError> {
        match identity.auth_token().await? {
            Some(token) if !token.is_empty() => {
                debug!("session token present");
                Ok(())
            }
            _ => Err(PostdeckError::Unauthorized),
        }
    }
}
