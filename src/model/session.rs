use derive_masked::DebugMasked;
use serde::{Deserialize, Serialize};

pub const AUTH_TOKEN_KEY: &str = "@authToken";
pub const AUTHOR_ID_KEY: &str = "@authorId";
pub const AUTHOR_NAME_KEY: &str = "@authorName";

/// Token and author info written at login and read before every mutating request.
#[derive(Clone, DebugMasked, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[masked]
    pub auth_token: String,
    pub author_id: i64,
    pub author_name: String,
}
